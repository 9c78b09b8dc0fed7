use leptos::*;
use leptos_router::{use_location, use_navigate, A};

use crate::{
	components::Toast,
	i18n::{LocaleStore, SUPPORTED_LOCALES},
	routes::{swap_locale, AppRoute},
	session::{AuthActions, SessionStore},
};

/// The navigation shell: app bar, language-switch drawer and toast area
/// around the routed content
#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
	let session = expect_context::<SessionStore>();
	let actions = expect_context::<AuthActions>();
	let locale = expect_context::<LocaleStore>();
	let pathname = use_location().pathname;
	let navigate = use_navigate();

	let drawer_open = create_rw_signal(false);

	// close the drawer whenever navigation lands somewhere else
	create_effect(move |_| {
		pathname.track();
		drawer_open.set(false);
	});

	let is_guest = {
		let session = session.clone();
		Signal::derive(move || session.with(|s| s.current.is_guest()))
	};

	let switch_locale = {
		let navigate = navigate.clone();
		move |lang: &str| {
			let path = pathname.get_untracked();
			navigate(&swap_locale(&path, lang), Default::default());
		}
	};

	let logout = move |_: ev::MouseEvent| {
		if let Err(error) = actions.logout() {
			log::error!("logout failed: {error}");
			return;
		}

		let lang = locale.current_untracked();
		navigate(&AppRoute::Home.path(&lang), Default::default());
	};

	view! {
		<header class="app-bar">
			<A href=move || AppRoute::Home.path(&locale.current()) class="app-bar__brand">
				{move || locale.phrases().brand}
			</A>

			<nav class="app-bar__nav">
				<A href=move || AppRoute::Trainer.path(&locale.current())>
					{move || locale.phrases().trainer_title}
				</A>
				<A href=move || AppRoute::Help.path(&locale.current())>
					{move || locale.phrases().help_title}
				</A>

				{move || if is_guest.get() {
					view! {
						<A href=AppRoute::Login.path(&locale.current())>
							{locale.phrases().login_title}
						</A>
						<A href=AppRoute::Signup.path(&locale.current())>
							{locale.phrases().signup_title}
						</A>
					}
					.into_view()
				} else {
					view! {
						<A href=AppRoute::Profile.path(&locale.current())>
							{locale.phrases().profile_title}
						</A>
						<button class="app-bar__logout" on:click=logout.clone()>
							{locale.phrases().logout}
						</button>
					}
					.into_view()
				}}
			</nav>

			<button
				class="app-bar__drawer-toggle"
				title=move || locale.phrases().choose_language
				on:click=move |_| drawer_open.update(|open| *open = !*open)
			>
				"⌨"
			</button>
		</header>

		<Show when=move || drawer_open.get()>
			<aside class="drawer">
				<h3>{move || locale.phrases().choose_language}</h3>
				<ul>
					{SUPPORTED_LOCALES
						.iter()
						.map(|&lang| {
							let switch_locale = switch_locale.clone();
							view! {
								<li>
									<button on:click=move |_| switch_locale(lang)>
										{lang}
									</button>
								</li>
							}
						})
						.collect_view()}
				</ul>
			</aside>
		</Show>

		<Toast/>

		<main class="content">{children()}</main>
	}
}
