use leptos::*;

use crate::{
	api::{ApiError, ProfilePatch},
	components::{Notifier, Spinner},
	i18n::LocaleStore,
	session::{AuthActions, SessionStore},
	utils::StringExt,
};

/// The profile editor. Member-only; the route guard redirects guests to
/// the login page. Only the fields that differ from the loaded profile
/// are posted.
#[component]
pub fn ProfilePage() -> impl IntoView {
	let actions = expect_context::<AuthActions>();
	let session = expect_context::<SessionStore>();
	let locale = expect_context::<LocaleStore>();
	let notifier = expect_context::<Notifier>();

	let loaded =
		session.with_untracked(|s| s.current.profile().cloned().unwrap_or_default());

	let first_name = create_rw_signal(loaded.first_name.clone());
	let last_name = create_rw_signal(loaded.last_name.clone());
	let first_name_error = create_rw_signal(String::new());
	let last_name_error = create_rw_signal(String::new());

	let handle_errors = move |error: &ApiError| {
		let Some(errors) = error.field_errors() else {
			return;
		};

		if let Some(message) = errors.get("first_name") {
			first_name_error.set(message.clone());
		}
		if let Some(message) = errors.get("last_name") {
			last_name_error.set(message.clone());
		}
	};

	let update_action = create_action(move |patch: &ProfilePatch| {
		let actions = actions.clone();
		let patch = patch.clone();
		async move {
			if let Err(error) = actions.update_profile(patch).await {
				handle_errors(&error);
			}
		}
	});
	let pending = update_action.pending();

	let handle_submit = {
		let session = session.clone();
		move |ev: ev::SubmitEvent| {
			ev.prevent_default();

			let required = locale.phrases().field_required;
			let first_name = first_name.get_untracked();
			let last_name = last_name.get_untracked();
			if first_name.is_empty() {
				first_name_error.set(required.to_owned());
				return;
			}
			if last_name.is_empty() {
				last_name_error.set(required.to_owned());
				return;
			}

			// post only the changed subset
			let patch = session.with_untracked(|s| {
				let current = s.current.profile();
				ProfilePatch {
					first_name: first_name
						.some_if_not_empty()
						.filter(|v| current.map_or(true, |p| p.first_name != *v)),
					last_name: last_name
						.some_if_not_empty()
						.filter(|v| current.map_or(true, |p| p.last_name != *v)),
					..Default::default()
				}
			});

			if patch.is_empty() {
				notifier.error(locale.phrases().nothing_to_update);
				return;
			}

			update_action.dispatch(patch);
		}
	};

	let geo_action = {
		let actions = expect_context::<AuthActions>();
		create_action(move |_: &()| {
			let actions = actions.clone();
			async move {
				actions.load_geo_info().await;
			}
		})
	};

	let geo_view = {
		let session = session.clone();
		move || {
			session.with(|s| {
				let info = &s.user_info;
				if info.loading {
					return view! { <Spinner/> }.into_view();
				}

				match &info.geo {
					Some(geo) => {
						let place = [geo.city.as_deref(), geo.country_name.as_deref()]
							.into_iter()
							.flatten()
							.collect::<Vec<_>>()
							.join(", ");
						view! { <p class="profile__geo">{place}</p> }.into_view()
					}
					None if info.loaded => view! { <p class="profile__geo">"—"</p> }.into_view(),
					None => ().into_view(),
				}
			})
		}
	};

	view! {
		<section class="page page--profile">
			<h1>{move || locale.phrases().profile_title}</h1>
			<p class="profile__email">{loaded.email}</p>

			<form class="form" on:submit=handle_submit>
				<label>
					{move || locale.phrases().first_name_label}
					<input
						name="first_name"
						prop:value=move || first_name.get()
						on:input=move |ev| {
							first_name.set(event_target_value(&ev));
							first_name_error.set(String::new());
						}
					/>
					<span class="form__error">{move || first_name_error.get()}</span>
				</label>

				<label>
					{move || locale.phrases().last_name_label}
					<input
						name="last_name"
						prop:value=move || last_name.get()
						on:input=move |ev| {
							last_name.set(event_target_value(&ev));
							last_name_error.set(String::new());
						}
					/>
					<span class="form__error">{move || last_name_error.get()}</span>
				</label>

				<button type="submit" disabled=move || pending.get()>
					{move || locale.phrases().submit_save}
				</button>
			</form>

			<div class="profile__location">
				<button on:click=move |_| geo_action.dispatch(())>
					{move || locale.phrases().detect_location}
				</button>
				{geo_view}
			</div>
		</section>
	}
}
