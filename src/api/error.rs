use std::collections::HashMap;

use thiserror::Error;

/// The error taxonomy for backend calls.
///
/// A failure either never produced a response body ([`Network`]) or came
/// back as a non-success HTTP status ([`Status`]), possibly carrying a
/// field-level error map for the UI to display next to inputs.
/// [`Validation`] covers failures raised locally without a request.
///
/// [`Network`]: ApiError::Network
/// [`Status`]: ApiError::Status
/// [`Validation`]: ApiError::Validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
	/// Transport-level failure. No response was received at all.
	#[error("network error: {0}")]
	Network(String),
	/// The server responded with a non-success status.
	#[error("{status_text}")]
	Status {
		/// The HTTP status code
		status: u16,
		/// The status text accompanying the code
		status_text: String,
		/// Field-level errors extracted from the response body, if the
		/// body carried an `errors` map
		errors: Option<HashMap<String, String>>,
	},
	/// A failure raised locally, before or instead of a network call.
	#[error("validation failed")]
	Validation {
		/// Field-level errors, keyed by field name
		errors: HashMap<String, String>,
	},
}

impl ApiError {
	/// The HTTP status code, if the server produced one
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Status { status, .. } => Some(*status),
			_ => None,
		}
	}

	/// The field-level error map, if the failure carried one
	pub fn field_errors(&self) -> Option<&HashMap<String, String>> {
		match self {
			Self::Status { errors, .. } => errors.as_ref(),
			Self::Validation { errors } => Some(errors),
			Self::Network(_) => None,
		}
	}
}
