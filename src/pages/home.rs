use leptos::*;
use leptos_router::A;

use crate::{i18n::LocaleStore, routes::AppRoute};

/// The landing page
#[component]
pub fn HomePage() -> impl IntoView {
	let locale = expect_context::<LocaleStore>();

	view! {
		<section class="page page--home">
			<h1>{move || locale.phrases().home_title}</h1>
			<p>{move || locale.phrases().home_lede}</p>
			<A href=move || AppRoute::Trainer.path(&locale.current()) class="btn btn--primary">
				{move || locale.phrases().go_trainer}
			</A>
		</section>
	}
}
