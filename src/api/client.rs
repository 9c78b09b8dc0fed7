use std::cell::RefCell;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

use crate::api::ApiError;

/// The HTTP client for the KeyPress backend. Holds the base URL and the
/// bearer credential attached to outgoing requests. The credential is
/// interior-mutable so the session store can attach and detach it through
/// a shared handle.
pub struct ApiClient {
	http: reqwest::Client,
	base_url: Url,
	token: RefCell<Option<String>>,
}

/// The shape a non-success response body is probed for: an optional map
/// of field-level errors
#[derive(Debug, Deserialize)]
struct ErrorBody {
	#[serde(default)]
	errors: Option<std::collections::HashMap<String, String>>,
}

impl ApiClient {
	/// Build a client for the given base URL. The URL is a compile-time
	/// constant, so a parse failure is a programming error.
	pub fn new(base_url: &str) -> Self {
		Self {
			http: reqwest::Client::new(),
			base_url: Url::parse(base_url).expect("base URL must be valid"),
			token: RefCell::new(None),
		}
	}

	/// Attach or detach the bearer credential for outgoing requests
	pub fn set_bearer_token(&self, token: Option<String>) {
		*self.token.borrow_mut() = token;
	}

	/// POST a JSON body to a backend path and decode a JSON response
	pub(crate) async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
	where
		B: Serialize + ?Sized,
		R: DeserializeOwned,
	{
		let url = self.endpoint(path)?;
		self.send(self.authorize(self.http.post(url)).json(body))
			.await
	}

	/// GET a backend path and decode a JSON response
	pub(crate) async fn get<R>(&self, path: &str) -> Result<R, ApiError>
	where
		R: DeserializeOwned,
	{
		let url = self.endpoint(path)?;
		self.send(self.authorize(self.http.get(url))).await
	}

	/// GET an absolute third-party URL. No credential is attached.
	pub(crate) async fn get_external<R>(&self, url: &str) -> Result<R, ApiError>
	where
		R: DeserializeOwned,
	{
		self.send(self.http.get(url)).await
	}

	fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
		self.base_url
			.join(path)
			.map_err(|err| ApiError::Network(err.to_string()))
	}

	fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
		match self.token.borrow().as_ref() {
			Some(token) => builder.bearer_auth(token),
			None => builder,
		}
	}

	async fn send<R>(&self, builder: reqwest::RequestBuilder) -> Result<R, ApiError>
	where
		R: DeserializeOwned,
	{
		let response = builder
			.send()
			.await
			.map_err(|err| ApiError::Network(err.to_string()))?;

		let status = response.status();
		if status.is_success() {
			response
				.json::<R>()
				.await
				.map_err(|err| ApiError::Network(err.to_string()))
		} else {
			let status_text = status
				.canonical_reason()
				.unwrap_or("unknown status")
				.to_owned();
			let errors = response
				.json::<ErrorBody>()
				.await
				.ok()
				.and_then(|body| body.errors);

			log::warn!("request failed with {status}: {status_text}");

			Err(ApiError::Status {
				status: status.as_u16(),
				status_text,
				errors,
			})
		}
	}
}
