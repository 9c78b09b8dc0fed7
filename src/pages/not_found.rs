use leptos::*;
use leptos_router::A;

use crate::{i18n::LocaleStore, routes::AppRoute};

/// Rendered for unsupported locales and unmatched paths
#[component]
pub fn NotFoundPage() -> impl IntoView {
	let locale = expect_context::<LocaleStore>();

	view! {
		<section class="page page--not-found">
			<h1>{move || locale.phrases().not_found}</h1>
			<p>
				<A href=move || AppRoute::Home.path(&locale.current())>
					{move || locale.phrases().go_home}
				</A>
				" — "
				<A href=move || AppRoute::Trainer.path(&locale.current())>
					{move || locale.phrases().go_trainer}
				</A>
			</p>
		</section>
	}
}
