//! KeyPress dashboard. A locale-aware single-page application for the
//! KeyPress language-learning product: authentication, a profile editor
//! and a navigation shell with a language-switch drawer.

/// Prelude module. Used to re-export commonly used items.
pub mod prelude {
	pub use leptos::*;
	pub use leptos_router::*;

	pub use crate::{
		api::*,
		components::*,
		i18n::*,
		routes::*,
		session::*,
		utils::*,
	};
}

/// The API module. The HTTP client for the KeyPress backend, the endpoint
/// functions and the error taxonomy shared by all of them.
pub mod api;
/// The application logic code. This contains the router and all the
/// routing logic.
pub mod app;
/// Shared UI pieces: the navigation shell, the toast area and the spinner.
pub mod components;
/// Locale handling: the supported locale set, the active locale and the
/// phrase tables.
pub mod i18n;
/// The pages module. Pages are the main views that are rendered when a
/// route is matched.
pub mod pages;
/// The route surface and the pure route resolver.
pub mod routes;
/// The session state: reducer, store and the auth action dispatcher.
pub mod session;
/// Utility code: constants, credential storage and extension traits.
pub mod utils;

use leptos_meta::{provide_meta_context, Meta, Title};
use prelude::*;

/// The main render function. Called when the application starts to render
/// on the client side.
pub fn render() -> impl IntoView {
	use app::App;

	provide_meta_context();
	view! {
		<>
			<Meta charset="utf-8"/>
			<Meta name="viewport" content="width=device-width, initial-scale=1"/>
			<Meta
				name="description"
				content="KeyPress: learn a language by typing it"
			/>

			<Title formatter={|title: String| {
				if title.is_empty() { "KeyPress".to_string() } else { format!("{title} | KeyPress") }
			}}/>

			<App/>
		</>
	}
}
