mod storage;

pub use self::storage::*;

/// A trait to extend the [`String`] type with some useful methods that are
/// not available in the standard library.
pub trait StringExt {
	/// Wraps the [`String`] into an option depending on whether it's empty.
	/// Returns [`None`] if the string is empty, otherwise returns the
	/// string wrapped in a [`Some()`]
	fn some_if_not_empty(self) -> Option<String>;
}

impl StringExt for String {
	fn some_if_not_empty(self) -> Option<String> {
		if self.is_empty() {
			None
		} else {
			Some(self)
		}
	}
}

/// A module containing constants that are used throughout the application.
pub mod constants {
	/// The name of the cookie that stores the session credential
	pub const AUTH_TOKEN: &str = "token";
	/// The base URL of the KeyPress backend API
	pub const API_BASE_URL: &str = "https://api.keypress.app/";
	/// The external IP-geolocation endpoint
	pub const IP_LOOKUP_URL: &str = "http://api.ipstack.com/check";
	/// The access key sent along with every IP-geolocation lookup
	pub const IP_LOOKUP_ACCESS_KEY: &str = "demo";
}
