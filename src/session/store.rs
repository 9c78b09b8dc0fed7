use std::rc::Rc;

use leptos::*;

use crate::{
	api::AuthApi,
	session::{reduce, Session, SessionEvent},
	utils::CredentialStore,
};

/// The owned, single-instance session container. Provided once through
/// context; consumers read the state reactively and mutate it only via
/// [`dispatch`].
///
/// Dispatch is synchronous and the application is single-threaded, so
/// transitions apply one at a time in dispatch order.
///
/// [`dispatch`]: SessionStore::dispatch
#[derive(Clone)]
pub struct SessionStore {
	state: RwSignal<Session>,
	credentials: Rc<dyn CredentialStore>,
	api: Rc<dyn AuthApi>,
}

impl SessionStore {
	/// Create a store with the default (guest, unloaded) session
	pub fn new(credentials: Rc<dyn CredentialStore>, api: Rc<dyn AuthApi>) -> Self {
		Self {
			state: create_rw_signal(Session::default()),
			credentials,
			api,
		}
	}

	/// Read the session reactively
	pub fn get(&self) -> Session {
		self.state.get()
	}

	/// Read a projection of the session reactively
	pub fn with<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
		self.state.with(f)
	}

	/// Read a projection of the session without subscribing
	pub fn with_untracked<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
		self.state.with_untracked(f)
	}

	/// The credential persistence backing this store
	pub fn credentials(&self) -> &Rc<dyn CredentialStore> {
		&self.credentials
	}

	/// Apply a transition. The stored credential and the credential
	/// attached to the API client move together with the state change in
	/// this one synchronous step; they must never diverge.
	pub fn dispatch(&self, event: SessionEvent) {
		match &event {
			SessionEvent::LoginSucceeded { token } => {
				self.credentials.set(token);
				self.api.set_token(Some(token.clone()));
			}
			SessionEvent::ResetToDefault => {
				// clear persistence before the state is marked loaded
				self.credentials.remove();
				self.api.set_token(None);
			}
			_ => {}
		}

		self.state.update(|state| {
			let next = reduce(state.clone(), event);
			*state = next;
		});
	}
}
