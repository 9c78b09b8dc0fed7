use async_trait::async_trait;

use crate::{
	api::{
		ApiClient,
		ApiError,
		AuthResponse,
		GeoInfo,
		LoginRequest,
		ProfilePatch,
		ProfileResponse,
		SignupRequest,
		UpdateResponse,
	},
	utils::constants,
};

/// The backend surface the auth action dispatcher talks to. A trait so
/// the dispatcher can be exercised in tests without a network.
#[async_trait(?Send)]
pub trait AuthApi {
	/// Authenticate with email and password
	async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError>;
	/// Register a new account
	async fn signup(&self, registration: &SignupRequest) -> Result<AuthResponse, ApiError>;
	/// Fetch the profile of the currently authenticated user
	async fn profile(&self) -> Result<ProfileResponse, ApiError>;
	/// Post the changed subset of editable profile fields
	async fn update_profile(&self, fields: &ProfilePatch) -> Result<UpdateResponse, ApiError>;
	/// Look up geolocation metadata for the caller's IP address
	async fn geo_info(&self) -> Result<GeoInfo, ApiError>;
	/// Attach or detach the session credential on outgoing requests
	fn set_token(&self, token: Option<String>);
}

#[async_trait(?Send)]
impl AuthApi for ApiClient {
	async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
		self.post("auth/login", credentials).await
	}

	async fn signup(&self, registration: &SignupRequest) -> Result<AuthResponse, ApiError> {
		self.post("auth/register", registration).await
	}

	async fn profile(&self) -> Result<ProfileResponse, ApiError> {
		self.get("auth/profile").await
	}

	async fn update_profile(&self, fields: &ProfilePatch) -> Result<UpdateResponse, ApiError> {
		self.post("auth/update", fields).await
	}

	async fn geo_info(&self) -> Result<GeoInfo, ApiError> {
		let url = format!(
			"{}?access_key={}&format=1",
			constants::IP_LOOKUP_URL,
			constants::IP_LOOKUP_ACCESS_KEY,
		);

		self.get_external(&url).await
	}

	fn set_token(&self, token: Option<String>) {
		self.set_bearer_token(token);
	}
}
