mod resolver;

pub use self::resolver::*;

use std::fmt::Display;

use strum::EnumIter;

/// The list of all the routes on the frontend. Every route lives under a
/// locale segment, so a full path is the active locale followed by the
/// route's own segment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum AppRoute {
	/// The landing page
	#[default]
	Home,
	/// The typing trainer
	Trainer,
	/// The help page
	Help,
	/// The login form. Guest-only.
	Login,
	/// The signup form. Guest-only.
	Signup,
	/// The profile editor. Member-only.
	Profile,
}

impl AppRoute {
	/// The path segment under the locale prefix. Empty for the home page.
	pub fn segment(self) -> &'static str {
		match self {
			Self::Home => "",
			Self::Trainer => "trainer",
			Self::Help => "help",
			Self::Login => "login",
			Self::Signup => "signup",
			Self::Profile => "profile",
		}
	}

	/// Match a path segment against the known routes
	pub fn from_segment(segment: &str) -> Option<Self> {
		use strum::IntoEnumIterator;

		Self::iter().find(|route| route.segment() == segment)
	}

	/// The full, locale-prefixed path of this route
	pub fn path(self, lang: &str) -> String {
		match self {
			Self::Home => format!("/{lang}"),
			_ => format!("/{lang}/{}", self.segment()),
		}
	}
}

impl Display for AppRoute {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Home => write!(f, "/"),
			_ => write!(f, "/{}", self.segment()),
		}
	}
}

/// Rewrite a locale-prefixed path to the same route under another locale.
/// Used by the language drawer so switching keeps the user on the page
/// they were reading.
pub fn swap_locale(path: &str, lang: &str) -> String {
	let rest = path
		.trim_start_matches('/')
		.split_once('/')
		.map(|(_, rest)| rest)
		.unwrap_or("");

	if rest.is_empty() {
		format!("/{lang}")
	} else {
		format!("/{lang}/{rest}")
	}
}
