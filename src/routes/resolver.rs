use crate::{routes::AppRoute, session::Session};

/// What the router shell should render before any individual route is
/// considered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellState {
	/// The requested locale is not supported
	NotFound,
	/// The requested locale is supported but not yet active; switching it
	/// is a side effect, and the shell stays pending until it lands
	LocaleChange(String),
	/// The session has not finished its initial load
	Loading,
	/// Locale and session are settled; routes may be matched
	Ready,
}

/// A guarded route's access decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
	Allowed,
	RedirectTo(AppRoute),
}

/// Where a request ultimately resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
	NotFound,
	LocaleChange(String),
	Loading,
	Redirect(AppRoute),
	Page(AppRoute),
}

/// Evaluate the shell-level gates: locale membership, locale activation
/// and session load state, in that order
pub fn shell_state(
	requested_locale: &str,
	supported: &[&str],
	active_locale: &str,
	session: &Session,
) -> ShellState {
	if !supported.contains(&requested_locale) {
		return ShellState::NotFound;
	}

	if requested_locale != active_locale {
		return ShellState::LocaleChange(requested_locale.to_owned());
	}

	if !session.loaded {
		return ShellState::Loading;
	}

	ShellState::Ready
}

/// Evaluate a route's access precondition against the session.
/// Login and signup are guest-only; the profile editor is member-only;
/// everything else is unconditional.
pub fn guard(route: AppRoute, session: &Session) -> Guard {
	match route {
		AppRoute::Login | AppRoute::Signup if session.current.is_member() => {
			Guard::RedirectTo(AppRoute::Home)
		}
		AppRoute::Profile if session.current.is_guest() => Guard::RedirectTo(AppRoute::Login),
		_ => Guard::Allowed,
	}
}

/// The full route resolution: shell gates first, then route matching,
/// then the route's guard. Re-evaluated whenever the locale, the
/// supported set or the session identity changes.
pub fn resolve(
	segment: &str,
	requested_locale: &str,
	supported: &[&str],
	active_locale: &str,
	session: &Session,
) -> Resolution {
	match shell_state(requested_locale, supported, active_locale, session) {
		ShellState::NotFound => return Resolution::NotFound,
		ShellState::LocaleChange(lang) => return Resolution::LocaleChange(lang),
		ShellState::Loading => return Resolution::Loading,
		ShellState::Ready => {}
	}

	let Some(route) = AppRoute::from_segment(segment) else {
		return Resolution::NotFound;
	};

	match guard(route, session) {
		Guard::Allowed => Resolution::Page(route),
		Guard::RedirectTo(target) => Resolution::Redirect(target),
	}
}
