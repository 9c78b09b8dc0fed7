use std::collections::HashMap;

use leptos::*;
use leptos_router::use_navigate;

use crate::{
	api::{ApiError, SignupRequest},
	i18n::LocaleStore,
	routes::AppRoute,
	session::AuthActions,
	utils::StringExt,
};

const FIELDS: &[&str] = &["email", "password", "first_name", "last_name"];

/// The signup form. Guest-only; the route guard redirects members home.
#[component]
pub fn SignupPage() -> impl IntoView {
	let actions = expect_context::<AuthActions>();
	let locale = expect_context::<LocaleStore>();
	let navigate = use_navigate();

	let email = create_rw_signal(String::new());
	let password = create_rw_signal(String::new());
	let first_name = create_rw_signal(String::new());
	let last_name = create_rw_signal(String::new());
	let errors = create_rw_signal(HashMap::<String, String>::new());

	let error_for = move |field: &'static str| {
		errors.with(|errors| errors.get(field).cloned().unwrap_or_default())
	};
	let clear_error = move |field: &'static str| {
		errors.update(|errors| {
			errors.remove(field);
		});
	};

	let handle_errors = move |error: &ApiError| {
		let Some(map) = error.field_errors() else {
			return;
		};

		errors.set(
			map.iter()
				.filter(|(field, _)| FIELDS.contains(&field.as_str()))
				.map(|(field, message)| (field.clone(), message.clone()))
				.collect(),
		);
	};

	let signup_action = create_action(move |registration: &SignupRequest| {
		let actions = actions.clone();
		let navigate = navigate.clone();
		let registration = registration.clone();
		async move {
			match actions.signup(registration).await {
				Ok(_) => {
					let _ = actions.load_session().await;
					let lang = locale.current_untracked();
					navigate(&AppRoute::Home.path(&lang), Default::default());
				}
				Err(error) => handle_errors(&error),
			}
		}
	});
	let pending = signup_action.pending();

	let handle_submit = move |ev: ev::SubmitEvent| {
		ev.prevent_default();

		let required = locale.phrases().field_required;
		let mut missing = HashMap::new();
		for (field, value) in [
			("email", email.get_untracked()),
			("password", password.get_untracked()),
			("first_name", first_name.get_untracked()),
			("last_name", last_name.get_untracked()),
		] {
			if value.some_if_not_empty().is_none() {
				missing.insert(field.to_owned(), required.to_owned());
			}
		}

		if !missing.is_empty() {
			errors.set(missing);
			return;
		}

		signup_action.dispatch(SignupRequest {
			email: email.get_untracked(),
			password: password.get_untracked(),
			first_name: first_name.get_untracked(),
			last_name: last_name.get_untracked(),
		});
	};

	view! {
		<section class="page page--signup">
			<h1>{move || locale.phrases().signup_title}</h1>

			<form class="form" on:submit=handle_submit>
				<label>
					{move || locale.phrases().email_label}
					<input
						name="email"
						type="email"
						prop:value=move || email.get()
						on:input=move |ev| {
							email.set(event_target_value(&ev));
							clear_error("email");
						}
					/>
					<span class="form__error">{move || error_for("email")}</span>
				</label>

				<label>
					{move || locale.phrases().password_label}
					<input
						name="password"
						type="password"
						prop:value=move || password.get()
						on:input=move |ev| {
							password.set(event_target_value(&ev));
							clear_error("password");
						}
					/>
					<span class="form__error">{move || error_for("password")}</span>
				</label>

				<label>
					{move || locale.phrases().first_name_label}
					<input
						name="first_name"
						prop:value=move || first_name.get()
						on:input=move |ev| {
							first_name.set(event_target_value(&ev));
							clear_error("first_name");
						}
					/>
					<span class="form__error">{move || error_for("first_name")}</span>
				</label>

				<label>
					{move || locale.phrases().last_name_label}
					<input
						name="last_name"
						prop:value=move || last_name.get()
						on:input=move |ev| {
							last_name.set(event_target_value(&ev));
							clear_error("last_name");
						}
					/>
					<span class="form__error">{move || error_for("last_name")}</span>
				</label>

				<button type="submit" disabled=move || pending.get()>
					{move || locale.phrases().submit_signup}
				</button>
			</form>
		</section>
	}
}
