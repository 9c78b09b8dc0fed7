use serde::{Deserialize, Serialize};

use crate::api::{GeoInfo, Profile, ProfilePatch};

/// The current authentication identity. Always exactly one of the two
/// variants; there is no "absent" state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Identity {
	/// Unauthenticated visitor
	#[default]
	Guest,
	/// Authenticated user with a loaded profile
	Member(Profile),
}

impl Identity {
	/// Whether the identity is the guest marker
	pub fn is_guest(&self) -> bool {
		matches!(self, Self::Guest)
	}

	/// Whether the identity is an authenticated member
	pub fn is_member(&self) -> bool {
		matches!(self, Self::Member(_))
	}

	/// The member profile, if one is present
	pub fn profile(&self) -> Option<&Profile> {
		match self {
			Self::Guest => None,
			Self::Member(profile) => Some(profile),
		}
	}
}

/// The result of the optional IP-geolocation lookup. Its lifecycle is
/// independent of the identity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserInfo {
	pub loading: bool,
	pub loaded: bool,
	pub geo: Option<GeoInfo>,
}

/// The session state. A single value per application run, replaced
/// wholesale by [`reduce`] on every transition; never partially mutated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
	/// Whether the initial profile fetch is in flight
	pub loading: bool,
	/// Whether the initial profile fetch has completed, successfully or
	/// not
	pub loaded: bool,
	/// The current identity
	pub current: Identity,
	/// Geolocation lookup state
	pub user_info: UserInfo,
	/// Whether a session credential is currently held. The credential
	/// value itself lives only in persistent storage.
	pub token: bool,
}

/// A state transition applied to the session. Produced by the auth action
/// dispatcher from already-classified request outcomes; the reducer never
/// observes raw errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
	/// Login or signup succeeded; a credential was obtained
	LoginSucceeded { token: String },
	/// The profile fetch succeeded
	ProfileLoaded { user: Profile },
	/// A profile update was applied on the backend
	ProfileUpdated { user: ProfilePatch },
	/// The geolocation lookup was started
	GeoLookupStarted,
	/// The geolocation lookup returned
	GeoLookupSucceeded { info: GeoInfo },
	/// The geolocation lookup failed; degrade silently
	GeoLookupFailed,
	/// Startup resolution finished without changing the identity
	AuthLoaded,
	/// Reset to the initial state, marked loaded. Accompanied by the
	/// credential-clearing side effect in the store.
	ResetToDefault,
}

/// The pure state-transition function: current session and event in, next
/// session out. Side effects (credential persistence, attaching the
/// credential to the API client) are paired with the matching events in
/// [`SessionStore::dispatch`], never performed here.
///
/// [`SessionStore::dispatch`]: crate::session::SessionStore::dispatch
pub fn reduce(state: Session, event: SessionEvent) -> Session {
	let mut next = state;

	match event {
		SessionEvent::LoginSucceeded { token: _ } => {
			next.token = true;
		}
		SessionEvent::ProfileLoaded { user } => {
			next.loading = false;
			next.loaded = true;
			next.current = Identity::Member(user);
		}
		SessionEvent::ProfileUpdated { user } => {
			// an update cannot materialize an identity; a guest stays one
			if let Identity::Member(profile) = &mut next.current {
				profile.merge(&user);
			}
		}
		SessionEvent::GeoLookupStarted => {
			next.user_info.loading = true;
		}
		SessionEvent::GeoLookupSucceeded { info } => {
			next.user_info = UserInfo {
				loading: false,
				loaded: true,
				geo: Some(info),
			};
		}
		SessionEvent::GeoLookupFailed => {
			next.user_info.loading = false;
			next.user_info.loaded = true;
		}
		SessionEvent::AuthLoaded => {
			next.loaded = true;
		}
		SessionEvent::ResetToDefault => {
			next = Session {
				loaded: true,
				..Session::default()
			};
		}
	}

	next
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn member(first_name: &str) -> Profile {
		Profile {
			email: "ada@keypress.app".into(),
			first_name: first_name.into(),
			last_name: "Lovelace".into(),
			extra: Default::default(),
		}
	}

	#[test]
	fn initial_session_is_an_unloaded_guest() {
		let session = Session::default();

		assert!(!session.loading);
		assert!(!session.loaded);
		assert!(!session.token);
		assert!(session.current.is_guest());
		assert!(!session.user_info.loaded);
	}

	#[test]
	fn login_succeeded_only_marks_the_credential_as_held() {
		let session = reduce(
			Session::default(),
			SessionEvent::LoginSucceeded { token: "abc".into() },
		);

		assert!(session.token);
		assert!(session.current.is_guest());
		assert!(!session.loaded);
	}

	#[test]
	fn profile_loaded_resolves_to_a_member() {
		let session = reduce(
			Session::default(),
			SessionEvent::ProfileLoaded { user: member("Ada") },
		);

		assert!(session.loaded);
		assert!(!session.loading);
		assert_eq!(session.current.profile().map(|p| p.first_name.as_str()), Some("Ada"));
	}

	#[test]
	fn profile_update_merge_is_idempotent() {
		let start = reduce(
			Session::default(),
			SessionEvent::ProfileLoaded { user: member("Ada") },
		);
		let patch = ProfilePatch {
			first_name: Some("Augusta".into()),
			..Default::default()
		};

		let once = reduce(start, SessionEvent::ProfileUpdated { user: patch.clone() });
		let twice = reduce(once.clone(), SessionEvent::ProfileUpdated { user: patch });

		assert_eq!(once.current, twice.current);
		assert_eq!(
			once.current.profile().map(|p| p.first_name.as_str()),
			Some("Augusta")
		);
		assert_eq!(
			once.current.profile().map(|p| p.last_name.as_str()),
			Some("Lovelace")
		);
	}

	#[test]
	fn profile_update_leaves_a_guest_untouched() {
		let session = reduce(
			Session::default(),
			SessionEvent::ProfileUpdated {
				user: ProfilePatch {
					first_name: Some("Ada".into()),
					..Default::default()
				},
			},
		);

		assert!(session.current.is_guest());
	}

	#[test]
	fn geo_lookup_lifecycle_is_independent_of_identity() {
		let started = reduce(Session::default(), SessionEvent::GeoLookupStarted);
		assert!(started.user_info.loading);
		assert!(!started.user_info.loaded);

		let succeeded = reduce(
			started.clone(),
			SessionEvent::GeoLookupSucceeded {
				info: GeoInfo {
					country_code: Some("GB".into()),
					..Default::default()
				},
			},
		);
		assert!(succeeded.user_info.loaded);
		assert!(!succeeded.user_info.loading);
		assert_eq!(
			succeeded.user_info.geo.as_ref().and_then(|g| g.country_code.clone()),
			Some("GB".to_owned())
		);
		assert!(succeeded.current.is_guest());

		let failed = reduce(started, SessionEvent::GeoLookupFailed);
		assert!(failed.user_info.loaded);
		assert!(!failed.user_info.loading);
		assert_eq!(failed.user_info.geo, None);
	}

	#[test]
	fn auth_loaded_marks_resolution_without_changing_identity() {
		let session = reduce(Session::default(), SessionEvent::AuthLoaded);

		assert!(session.loaded);
		assert!(session.current.is_guest());
	}

	#[test]
	fn reset_from_any_state_yields_a_loaded_default() {
		let busy = Session {
			loading: true,
			loaded: true,
			current: Identity::Member(member("Ada")),
			user_info: UserInfo {
				loading: true,
				loaded: true,
				geo: Some(GeoInfo::default()),
			},
			token: true,
		};

		let session = reduce(busy, SessionEvent::ResetToDefault);

		assert_eq!(
			session,
			Session {
				loaded: true,
				..Session::default()
			}
		);
	}

	#[test]
	fn identity_serializes_with_a_type_tag() {
		assert_eq!(
			serde_json::to_value(Identity::Guest).unwrap(),
			json!({ "type": "guest" })
		);
		assert_eq!(
			serde_json::to_value(Identity::Member(member("Ada"))).unwrap(),
			json!({
				"type": "member",
				"email": "ada@keypress.app",
				"first_name": "Ada",
				"last_name": "Lovelace",
			})
		);
	}
}
