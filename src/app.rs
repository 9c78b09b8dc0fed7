use std::rc::Rc;

use crate::{pages::*, prelude::*};

/// The main application component. Owns the single instances of the
/// locale store, the notice queue, the API client and the session store,
/// provides them through context, kicks off the startup session load and
/// declares the locale-prefixed route surface.
#[component]
pub fn App() -> impl IntoView {
	let locale = LocaleStore::new();
	let notifier = Notifier::new();
	let api = Rc::new(ApiClient::new(constants::API_BASE_URL));
	let credentials = Rc::new(CookieCredentialStore::new());
	let store = SessionStore::new(credentials, api.clone());
	let actions = AuthActions::new(store.clone(), api, notifier);

	provide_context(locale);
	provide_context(notifier);
	provide_context(store);
	provide_context(actions.clone());

	// resolve the stored credential once at startup
	spawn_local(async move {
		let _ = actions.load_session().await;
	});

	view! {
		<Router>
			<Routes>
				<Route path="/:lang" view=LocaleShell>
					<Route path="" view=|| view! { <RoutePage route=AppRoute::Home/> }/>
					<Route path="trainer" view=|| view! { <RoutePage route=AppRoute::Trainer/> }/>
					<Route path="help" view=|| view! { <RoutePage route=AppRoute::Help/> }/>
					<Route path="login" view=|| view! { <RoutePage route=AppRoute::Login/> }/>
					<Route path="signup" view=|| view! { <RoutePage route=AppRoute::Signup/> }/>
					<Route path="profile" view=|| view! { <RoutePage route=AppRoute::Profile/> }/>
					<Route path="*any" view=NotFoundPage/>
				</Route>
				<Route path="" view=|| view! { <Redirect path=format!("/{DEFAULT_LOCALE}")/> }/>
			</Routes>
		</Router>
	}
}

/// The per-locale shell. Validates the locale segment, activates it when
/// it differs from the current one, holds routed content back until the
/// session finishes its initial load and wraps everything in the
/// navigation layout.
#[component]
fn LocaleShell() -> impl IntoView {
	let params = use_params_map();
	let session = expect_context::<SessionStore>();
	let locale = expect_context::<LocaleStore>();

	let requested = move || params.with(|p| p.get("lang").cloned().unwrap_or_default());

	// activating the requested locale is a side effect, kept out of render
	create_effect(move |_| {
		let lang = requested();
		if is_supported(&lang) {
			locale.change(&lang);
		}
	});

	view! {
		<AppLayout>
			{move || {
				let state = shell_state(
					&requested(),
					SUPPORTED_LOCALES,
					&locale.current(),
					&session.get(),
				);

				match state {
					ShellState::NotFound => view! { <NotFoundPage/> }.into_view(),
					ShellState::LocaleChange(_) | ShellState::Loading => {
						view! { <Spinner/> }.into_view()
					}
					ShellState::Ready => view! { <Outlet/> }.into_view(),
				}
			}}
		</AppLayout>
	}
}

/// Re-evaluates a route's guard against the session and either renders
/// the page or redirects
#[component]
fn RoutePage(route: AppRoute) -> impl IntoView {
	let session = expect_context::<SessionStore>();
	let locale = expect_context::<LocaleStore>();

	view! {
		{move || match guard(route, &session.get()) {
			Guard::Allowed => page_view(route),
			Guard::RedirectTo(target) => {
				let lang = locale.current_untracked();
				view! { <Redirect path=target.path(&lang)/> }.into_view()
			}
		}}
	}
}

fn page_view(route: AppRoute) -> View {
	match route {
		AppRoute::Home => view! { <HomePage/> }.into_view(),
		AppRoute::Trainer => view! { <TrainerPage/> }.into_view(),
		AppRoute::Help => view! { <HelpPage/> }.into_view(),
		AppRoute::Login => view! { <LoginPage/> }.into_view(),
		AppRoute::Signup => view! { <SignupPage/> }.into_view(),
		AppRoute::Profile => view! { <ProfilePage/> }.into_view(),
	}
}
