use codee::string::FromToStringCodec;
use leptos::*;
use leptos_use::use_cookie;

use crate::utils::constants;

/// The credential persistence seam. The session credential lives only in
/// persistent storage; the session state itself merely records whether one
/// is held. Every implementation must apply writes synchronously, so that
/// a `get` immediately after `set`/`remove` observes the new value.
pub trait CredentialStore {
	/// Read the stored credential, if any
	fn get(&self) -> Option<String>;
	/// Store the credential
	fn set(&self, value: &str);
	/// Remove the stored credential
	fn remove(&self);
}

/// Cookie-backed credential storage. Reads and writes the `token` cookie
/// through the browser's cookie jar.
pub struct CookieCredentialStore {
	read: Signal<Option<String>>,
	write: WriteSignal<Option<String>>,
}

impl CookieCredentialStore {
	/// Bind to the credential cookie. Must be called within a reactive
	/// scope, since the cookie is surfaced as a pair of signals.
	pub fn new() -> Self {
		let (read, write) =
			use_cookie::<String, FromToStringCodec>(constants::AUTH_TOKEN);

		Self { read, write }
	}
}

impl Default for CookieCredentialStore {
	fn default() -> Self {
		Self::new()
	}
}

impl CredentialStore for CookieCredentialStore {
	fn get(&self) -> Option<String> {
		self.read.get_untracked()
	}

	fn set(&self, value: &str) {
		self.write.set(Some(value.to_owned()));
	}

	fn remove(&self) {
		self.write.set(None);
	}
}

/// In-memory credential storage, used by tests in place of the cookie jar.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
	value: std::cell::RefCell<Option<String>>,
}

#[cfg(test)]
impl CredentialStore for MemoryCredentialStore {
	fn get(&self) -> Option<String> {
		self.value.borrow().clone()
	}

	fn set(&self, value: &str) {
		*self.value.borrow_mut() = Some(value.to_owned());
	}

	fn remove(&self) {
		*self.value.borrow_mut() = None;
	}
}
