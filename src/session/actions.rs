use std::{collections::HashMap, rc::Rc};

use crate::{
	api::{ApiError, AuthApi, AuthResponse, GeoInfo, LoginRequest, ProfilePatch, SignupRequest},
	components::Notifier,
	session::{SessionEvent, SessionStore},
};

/// The generic deferred-retry notice, shown when a failure carries
/// nothing more specific to display
pub const TRY_LATER_NOTICE: &str = "Something went wrong. Try later";

/// The error marker returned by [`AuthActions::load_session`] when no
/// credential is stored
pub const TOKEN_NOT_FOUND: &str = "token not found";

/// How a startup session load resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
	/// A credential was present and the profile was fetched
	Profile,
	/// No credential was stored; resolved as a guest without touching the
	/// network
	MissingToken,
}

impl LoadOutcome {
	/// The error marker carried by the outcome, if any
	pub fn error(&self) -> Option<&'static str> {
		match self {
			Self::Profile => None,
			Self::MissingToken => Some(TOKEN_NOT_FOUND),
		}
	}
}

/// The auth action dispatcher. Each operation calls the backend,
/// translates the outcome into a session transition, shows at most one
/// user-visible notice on failure and then re-signals the error to the
/// caller so the invoking page can apply field-level error state
/// independently.
#[derive(Clone)]
pub struct AuthActions {
	store: SessionStore,
	api: Rc<dyn AuthApi>,
	notifier: Notifier,
}

impl AuthActions {
	pub fn new(store: SessionStore, api: Rc<dyn AuthApi>, notifier: Notifier) -> Self {
		Self {
			store,
			api,
			notifier,
		}
	}

	/// The session store driven by this dispatcher
	pub fn store(&self) -> &SessionStore {
		&self.store
	}

	/// Authenticate with email and password. On success the credential is
	/// persisted and attached to the API client as one step with the
	/// state transition.
	pub async fn login(&self, credentials: LoginRequest) -> Result<AuthResponse, ApiError> {
		match self.api.login(&credentials).await {
			Ok(data) => {
				self.store.dispatch(SessionEvent::LoginSucceeded {
					token: data.token.clone(),
				});

				Ok(data)
			}
			Err(error) => {
				match &error {
					ApiError::Network(_) => self.notifier.error(TRY_LATER_NOTICE),
					ApiError::Status {
						status: 500,
						status_text,
						..
					} => self.notifier.error(status_text.clone()),
					_ => {}
				}

				Err(error)
			}
		}
	}

	/// Register a new account. Identical contract to [`login`]; failures
	/// without a field-level error map fall back to the generic notice.
	///
	/// [`login`]: AuthActions::login
	pub async fn signup(&self, registration: SignupRequest) -> Result<AuthResponse, ApiError> {
		match self.api.signup(&registration).await {
			Ok(data) => {
				self.store.dispatch(SessionEvent::LoginSucceeded {
					token: data.token.clone(),
				});

				Ok(data)
			}
			Err(error) => {
				self.notify_unless_field_errors(&error);
				Err(error)
			}
		}
	}

	/// Resolve the session at startup. Without a stored credential this
	/// resolves immediately as a guest and never calls the network; an
	/// unrecoverable fetch failure resets to the default state, which
	/// clears the persisted credential.
	pub async fn load_session(&self) -> Result<LoadOutcome, ApiError> {
		let Some(token) = self.store.credentials().get() else {
			self.store.dispatch(SessionEvent::AuthLoaded);
			return Ok(LoadOutcome::MissingToken);
		};

		// a credential restored from storage is not yet on the client
		self.api.set_token(Some(token));

		match self.api.profile().await {
			Ok(data) => {
				self.store
					.dispatch(SessionEvent::ProfileLoaded { user: data.user });

				Ok(LoadOutcome::Profile)
			}
			Err(error) => {
				self.store.dispatch(SessionEvent::ResetToDefault);
				self.notify_unless_field_errors(&error);

				Err(error)
			}
		}
	}

	/// Clear the persisted credential and reset to the guest state.
	///
	/// The failure branch is unreachable while credential clearing is
	/// synchronous; it is kept as a guard so a future asynchronous
	/// storage backend fails loudly instead of leaving a half-logged-out
	/// session.
	pub fn logout(&self) -> Result<(), ApiError> {
		self.store.credentials().remove();

		if self.store.credentials().get().is_some() {
			return Err(ApiError::Validation {
				errors: HashMap::from([("token".to_owned(), "Enable delete token".to_owned())]),
			});
		}

		self.store.dispatch(SessionEvent::ResetToDefault);

		Ok(())
	}

	/// Post the changed subset of editable profile fields and merge the
	/// applied fields back into the current identity
	pub async fn update_profile(&self, fields: ProfilePatch) -> Result<(), ApiError> {
		match self.api.update_profile(&fields).await {
			Ok(data) => {
				self.store
					.dispatch(SessionEvent::ProfileUpdated { user: data.user });

				Ok(())
			}
			Err(error) => {
				if let ApiError::Status {
					status: 404,
					status_text,
					..
				} = &error
				{
					self.notifier.error(status_text.clone());
				}

				Err(error)
			}
		}
	}

	/// Look up geolocation metadata for the caller. Degrades silently on
	/// failure; no notice, no error to the caller.
	pub async fn load_geo_info(&self) -> Option<GeoInfo> {
		self.store.dispatch(SessionEvent::GeoLookupStarted);

		match self.api.geo_info().await {
			Ok(info) => {
				self.store.dispatch(SessionEvent::GeoLookupSucceeded {
					info: info.clone(),
				});

				Some(info)
			}
			Err(error) => {
				log::debug!("geo lookup failed: {error}");
				self.store.dispatch(SessionEvent::GeoLookupFailed);

				None
			}
		}
	}

	fn notify_unless_field_errors(&self, error: &ApiError) {
		match error {
			ApiError::Network(_) => self.notifier.error(TRY_LATER_NOTICE),
			ApiError::Status {
				status: 500,
				status_text,
				..
			} => self.notifier.error(status_text.clone()),
			ApiError::Status { errors: None, .. } => self.notifier.error(TRY_LATER_NOTICE),
			_ => {}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use leptos::create_runtime;

	use super::*;
	use crate::{
		api::{Profile, ProfileResponse, UpdateResponse},
		utils::{CredentialStore, MemoryCredentialStore},
	};

	/// Scripted stand-in for the backend. Each result is consumed by the
	/// corresponding call; an unscripted call panics, which doubles as a
	/// no-unexpected-network assertion.
	#[derive(Default)]
	struct MockApi {
		login_result: RefCell<Option<Result<AuthResponse, ApiError>>>,
		signup_result: RefCell<Option<Result<AuthResponse, ApiError>>>,
		profile_result: RefCell<Option<Result<ProfileResponse, ApiError>>>,
		update_result: RefCell<Option<Result<UpdateResponse, ApiError>>>,
		geo_result: RefCell<Option<Result<GeoInfo, ApiError>>>,
		calls: RefCell<Vec<&'static str>>,
		token: RefCell<Option<String>>,
	}

	#[async_trait::async_trait(?Send)]
	impl AuthApi for MockApi {
		async fn login(&self, _: &LoginRequest) -> Result<AuthResponse, ApiError> {
			self.calls.borrow_mut().push("login");
			self.login_result.borrow_mut().take().expect("unscripted login call")
		}

		async fn signup(&self, _: &SignupRequest) -> Result<AuthResponse, ApiError> {
			self.calls.borrow_mut().push("signup");
			self.signup_result.borrow_mut().take().expect("unscripted signup call")
		}

		async fn profile(&self) -> Result<ProfileResponse, ApiError> {
			self.calls.borrow_mut().push("profile");
			self.profile_result.borrow_mut().take().expect("unscripted profile call")
		}

		async fn update_profile(&self, _: &ProfilePatch) -> Result<UpdateResponse, ApiError> {
			self.calls.borrow_mut().push("update");
			self.update_result.borrow_mut().take().expect("unscripted update call")
		}

		async fn geo_info(&self) -> Result<GeoInfo, ApiError> {
			self.calls.borrow_mut().push("geo");
			self.geo_result.borrow_mut().take().expect("unscripted geo call")
		}

		fn set_token(&self, token: Option<String>) {
			*self.token.borrow_mut() = token;
		}
	}

	struct Fixture {
		actions: AuthActions,
		api: Rc<MockApi>,
		credentials: Rc<MemoryCredentialStore>,
		notifier: Notifier,
	}

	fn fixture() -> Fixture {
		let api = Rc::new(MockApi::default());
		let credentials = Rc::new(MemoryCredentialStore::default());
		let notifier = Notifier::new();
		let store = SessionStore::new(credentials.clone(), api.clone());
		let actions = AuthActions::new(store, api.clone(), notifier);

		Fixture {
			actions,
			api,
			credentials,
			notifier,
		}
	}

	fn status(status: u16, status_text: &str) -> ApiError {
		ApiError::Status {
			status,
			status_text: status_text.to_owned(),
			errors: None,
		}
	}

	fn profile() -> Profile {
		Profile {
			email: "ada@keypress.app".into(),
			first_name: "Ada".into(),
			last_name: "Lovelace".into(),
			extra: Default::default(),
		}
	}

	#[tokio::test]
	async fn login_success_persists_and_attaches_the_credential() {
		let runtime = create_runtime();
		let fx = fixture();
		*fx.api.login_result.borrow_mut() = Some(Ok(AuthResponse {
			token: "abc".into(),
			user: None,
		}));

		let result = fx
			.actions
			.login(LoginRequest {
				email: "ada@keypress.app".into(),
				password: "hunter2".into(),
			})
			.await;

		assert!(result.is_ok());
		assert!(fx.actions.store().with_untracked(|s| s.token));
		assert_eq!(fx.credentials.get(), Some("abc".to_owned()));
		assert_eq!(*fx.api.token.borrow(), Some("abc".to_owned()));
		assert!(fx.notifier.list().is_empty());
		runtime.dispose();
	}

	#[tokio::test]
	async fn login_transport_failure_shows_one_generic_notice_and_resignals() {
		let runtime = create_runtime();
		let fx = fixture();
		*fx.api.login_result.borrow_mut() =
			Some(Err(ApiError::Network("connection refused".into())));

		let result = fx
			.actions
			.login(LoginRequest {
				email: "ada@keypress.app".into(),
				password: "hunter2".into(),
			})
			.await;

		assert!(result.is_err());
		let notices = fx.notifier.list();
		assert_eq!(notices.len(), 1);
		assert_eq!(notices[0].message, TRY_LATER_NOTICE);
		assert!(!fx.actions.store().with_untracked(|s| s.token));
		runtime.dispose();
	}

	#[tokio::test]
	async fn login_server_error_surfaces_the_status_text() {
		let runtime = create_runtime();
		let fx = fixture();
		*fx.api.login_result.borrow_mut() = Some(Err(status(500, "Internal Server Error")));

		let result = fx
			.actions
			.login(LoginRequest {
				email: "ada@keypress.app".into(),
				password: "hunter2".into(),
			})
			.await;

		assert_eq!(result.unwrap_err().status(), Some(500));
		let notices = fx.notifier.list();
		assert_eq!(notices.len(), 1);
		assert_eq!(notices[0].message, "Internal Server Error");
		runtime.dispose();
	}

	#[tokio::test]
	async fn login_validation_failure_is_left_for_field_level_display() {
		let runtime = create_runtime();
		let fx = fixture();
		*fx.api.login_result.borrow_mut() = Some(Err(ApiError::Status {
			status: 422,
			status_text: "Unprocessable Entity".into(),
			errors: Some(HashMap::from([(
				"password".to_owned(),
				"Wrong password".to_owned(),
			)])),
		}));

		let error = fx
			.actions
			.login(LoginRequest {
				email: "ada@keypress.app".into(),
				password: "wrong".into(),
			})
			.await
			.unwrap_err();

		assert!(fx.notifier.list().is_empty());
		assert_eq!(
			error.field_errors().and_then(|e| e.get("password").cloned()),
			Some("Wrong password".to_owned())
		);
		runtime.dispose();
	}

	#[tokio::test]
	async fn signup_without_field_errors_falls_back_to_the_generic_notice() {
		let runtime = create_runtime();
		let fx = fixture();
		*fx.api.signup_result.borrow_mut() = Some(Err(status(422, "Unprocessable Entity")));

		let result = fx
			.actions
			.signup(SignupRequest {
				email: "ada@keypress.app".into(),
				password: "hunter2".into(),
				first_name: "Ada".into(),
				last_name: "Lovelace".into(),
			})
			.await;

		assert!(result.is_err());
		let notices = fx.notifier.list();
		assert_eq!(notices.len(), 1);
		assert_eq!(notices[0].message, TRY_LATER_NOTICE);
		runtime.dispose();
	}

	#[tokio::test]
	async fn load_session_without_a_credential_skips_the_network() {
		let runtime = create_runtime();
		let fx = fixture();

		let outcome = fx.actions.load_session().await.unwrap();

		assert_eq!(outcome, LoadOutcome::MissingToken);
		assert_eq!(outcome.error(), Some("token not found"));
		assert!(fx.api.calls.borrow().is_empty());
		fx.actions.store().with_untracked(|s| {
			assert!(s.loaded);
			assert!(s.current.is_guest());
		});
		runtime.dispose();
	}

	#[tokio::test]
	async fn load_session_with_a_credential_resolves_the_profile() {
		let runtime = create_runtime();
		let fx = fixture();
		fx.credentials.set("abc");
		*fx.api.profile_result.borrow_mut() = Some(Ok(ProfileResponse { user: profile() }));

		let outcome = fx.actions.load_session().await.unwrap();

		assert_eq!(outcome, LoadOutcome::Profile);
		assert_eq!(*fx.api.token.borrow(), Some("abc".to_owned()));
		fx.actions.store().with_untracked(|s| {
			assert!(s.loaded);
			assert!(s.current.is_member());
		});
		runtime.dispose();
	}

	#[tokio::test]
	async fn load_session_failure_resets_and_clears_the_credential() {
		let runtime = create_runtime();
		let fx = fixture();
		fx.credentials.set("stale");
		*fx.api.profile_result.borrow_mut() = Some(Err(status(401, "Unauthorized")));

		let result = fx.actions.load_session().await;

		assert!(result.is_err());
		assert_eq!(fx.credentials.get(), None);
		assert_eq!(fx.notifier.list().len(), 1);
		fx.actions.store().with_untracked(|s| {
			assert!(s.loaded);
			assert!(s.current.is_guest());
			assert!(!s.token);
		});
		runtime.dispose();
	}

	#[tokio::test]
	async fn logout_clears_the_credential_and_resets() {
		let runtime = create_runtime();
		let fx = fixture();
		*fx.api.login_result.borrow_mut() = Some(Ok(AuthResponse {
			token: "abc".into(),
			user: None,
		}));
		fx.actions
			.login(LoginRequest {
				email: "ada@keypress.app".into(),
				password: "hunter2".into(),
			})
			.await
			.unwrap();

		fx.actions.logout().unwrap();

		assert_eq!(fx.credentials.get(), None);
		assert_eq!(*fx.api.token.borrow(), None);
		fx.actions.store().with_untracked(|s| {
			assert!(s.loaded);
			assert!(!s.token);
			assert!(s.current.is_guest());
		});
		runtime.dispose();
	}

	#[tokio::test]
	async fn update_profile_merges_the_applied_fields() {
		let runtime = create_runtime();
		let fx = fixture();
		fx.actions
			.store()
			.dispatch(SessionEvent::ProfileLoaded { user: profile() });
		*fx.api.update_result.borrow_mut() = Some(Ok(UpdateResponse {
			user: ProfilePatch {
				first_name: Some("Augusta".into()),
				..Default::default()
			},
		}));

		fx.actions
			.update_profile(ProfilePatch {
				first_name: Some("Augusta".into()),
				..Default::default()
			})
			.await
			.unwrap();

		fx.actions.store().with_untracked(|s| {
			assert_eq!(
				s.current.profile().map(|p| p.first_name.as_str()),
				Some("Augusta")
			);
			assert_eq!(
				s.current.profile().map(|p| p.last_name.as_str()),
				Some("Lovelace")
			);
		});
		runtime.dispose();
	}

	#[tokio::test]
	async fn update_profile_not_found_surfaces_the_status_text() {
		let runtime = create_runtime();
		let fx = fixture();
		*fx.api.update_result.borrow_mut() = Some(Err(status(404, "Not Found")));

		let result = fx.actions.update_profile(ProfilePatch::default()).await;

		assert!(result.is_err());
		let notices = fx.notifier.list();
		assert_eq!(notices.len(), 1);
		assert_eq!(notices[0].message, "Not Found");
		runtime.dispose();
	}

	#[tokio::test]
	async fn geo_lookup_failure_degrades_silently() {
		let runtime = create_runtime();
		let fx = fixture();
		*fx.api.geo_result.borrow_mut() =
			Some(Err(ApiError::Network("connection refused".into())));

		let info = fx.actions.load_geo_info().await;

		assert_eq!(info, None);
		assert!(fx.notifier.list().is_empty());
		fx.actions.store().with_untracked(|s| {
			assert!(s.user_info.loaded);
			assert!(!s.user_info.loading);
			assert_eq!(s.user_info.geo, None);
		});
		runtime.dispose();
	}

	#[tokio::test]
	async fn geo_lookup_success_fills_user_info() {
		let runtime = create_runtime();
		let fx = fixture();
		*fx.api.geo_result.borrow_mut() = Some(Ok(GeoInfo {
			country_code: Some("GB".into()),
			city: Some("London".into()),
			..Default::default()
		}));

		let info = fx.actions.load_geo_info().await;

		assert_eq!(info.and_then(|i| i.city), Some("London".to_owned()));
		fx.actions.store().with_untracked(|s| {
			assert!(s.user_info.loaded);
			assert_eq!(
				s.user_info.geo.as_ref().and_then(|g| g.country_code.clone()),
				Some("GB".to_owned())
			);
		});
		runtime.dispose();
	}
}
