use leptos::*;

use crate::i18n::LocaleStore;

/// The help page
#[component]
pub fn HelpPage() -> impl IntoView {
	let locale = expect_context::<LocaleStore>();

	view! {
		<section class="page page--help">
			<h1>{move || locale.phrases().help_title}</h1>
			<p>{move || locale.phrases().help_lede}</p>
		</section>
	}
}
