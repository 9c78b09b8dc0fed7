use leptos::*;
use leptos_router::use_navigate;

use crate::{
	api::{ApiError, LoginRequest},
	i18n::LocaleStore,
	routes::AppRoute,
	session::AuthActions,
	utils::StringExt,
};

/// The login form. Guest-only; the route guard redirects members home.
#[component]
pub fn LoginPage() -> impl IntoView {
	let actions = expect_context::<AuthActions>();
	let locale = expect_context::<LocaleStore>();
	let navigate = use_navigate();

	let email = create_rw_signal(String::new());
	let password = create_rw_signal(String::new());
	let email_error = create_rw_signal(String::new());
	let password_error = create_rw_signal(String::new());

	let handle_errors = move |error: &ApiError| {
		let Some(errors) = error.field_errors() else {
			return;
		};

		if let Some(message) = errors.get("email") {
			email_error.set(message.clone());
		}
		if let Some(message) = errors.get("password") {
			password_error.set(message.clone());
		}
	};

	let login_action = create_action(move |credentials: &LoginRequest| {
		let actions = actions.clone();
		let navigate = navigate.clone();
		let credentials = credentials.clone();
		async move {
			match actions.login(credentials).await {
				Ok(_) => {
					// materialize the member profile before leaving the page
					let _ = actions.load_session().await;
					let lang = locale.current_untracked();
					navigate(&AppRoute::Home.path(&lang), Default::default());
				}
				Err(error) => handle_errors(&error),
			}
		}
	});
	let pending = login_action.pending();

	let handle_submit = move |ev: ev::SubmitEvent| {
		ev.prevent_default();

		let Some(email) = email.get_untracked().some_if_not_empty() else {
			email_error.set(locale.phrases().field_required.to_owned());
			return;
		};
		let Some(password) = password.get_untracked().some_if_not_empty() else {
			password_error.set(locale.phrases().field_required.to_owned());
			return;
		};

		login_action.dispatch(LoginRequest { email, password });
	};

	view! {
		<section class="page page--login">
			<h1>{move || locale.phrases().login_title}</h1>

			<form class="form" on:submit=handle_submit>
				<label>
					{move || locale.phrases().email_label}
					<input
						name="email"
						type="email"
						prop:value=move || email.get()
						on:input=move |ev| {
							email.set(event_target_value(&ev));
							email_error.set(String::new());
						}
					/>
					<span class="form__error">{move || email_error.get()}</span>
				</label>

				<label>
					{move || locale.phrases().password_label}
					<input
						name="password"
						type="password"
						prop:value=move || password.get()
						on:input=move |ev| {
							password.set(event_target_value(&ev));
							password_error.set(String::new());
						}
					/>
					<span class="form__error">{move || password_error.get()}</span>
				</label>

				<button type="submit" disabled=move || pending.get()>
					{move || locale.phrases().submit_login}
				</button>
			</form>
		</section>
	}
}
