use leptos::*;

/// A full-width loading indicator
#[component]
pub fn Spinner() -> impl IntoView {
	view! {
		<div class="spinner" role="status" aria-label="loading">
			<div class="spinner__circle"></div>
		</div>
	}
}
