use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The authenticated user's profile, as returned by the backend. Fields
/// the frontend does not model explicitly are carried through in `extra`
/// so a profile survives a round trip unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Profile {
	pub email: String,
	#[serde(default)]
	pub first_name: String,
	#[serde(default)]
	pub last_name: String,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl Profile {
	/// Overlay the fields of a patch onto this profile, preserving
	/// untouched fields. Applying the same patch twice is a no-op the
	/// second time.
	pub fn merge(&mut self, patch: &ProfilePatch) {
		if let Some(first_name) = &patch.first_name {
			self.first_name = first_name.clone();
		}

		if let Some(last_name) = &patch.last_name {
			self.last_name = last_name.clone();
		}

		for (key, value) in &patch.extra {
			// `email` has no dedicated patch field, so it arrives here
			if key == "email" {
				if let Some(email) = value.as_str() {
					self.email = email.to_owned();
				}
			} else {
				self.extra.insert(key.clone(), value.clone());
			}
		}
	}
}

/// A partial profile. Serialized as the body of `auth/update` with only
/// the changed fields present, and deserialized from the fields the
/// backend sends back.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfilePatch {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub first_name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub last_name: Option<String>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl ProfilePatch {
	/// Whether the patch changes anything at all
	pub fn is_empty(&self) -> bool {
		self.first_name.is_none() && self.last_name.is_none() && self.extra.is_empty()
	}
}

/// Credentials posted to `auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
	pub email: String,
	pub password: String,
}

/// Registration fields posted to `auth/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
	pub email: String,
	pub password: String,
	pub first_name: String,
	pub last_name: String,
}

/// The response shape shared by `auth/login` and `auth/register`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
	/// The session credential to persist and attach to later calls
	pub token: String,
	/// The profile, when the backend includes it inline
	#[serde(default)]
	pub user: Option<Profile>,
}

/// The response shape of `auth/profile`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileResponse {
	pub user: Profile,
}

/// The response shape of `auth/update`. The backend echoes back only the
/// fields it applied, so the user object is a patch rather than a full
/// profile.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateResponse {
	pub user: ProfilePatch,
}

/// The flat object returned by the external IP-geolocation endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoInfo {
	#[serde(default)]
	pub ip: Option<String>,
	#[serde(default)]
	pub country_code: Option<String>,
	#[serde(default)]
	pub country_name: Option<String>,
	#[serde(default)]
	pub region_name: Option<String>,
	#[serde(default)]
	pub city: Option<String>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn merge_overlays_changed_fields_only() {
		let mut profile = Profile {
			email: "ada@keypress.app".into(),
			first_name: "Ada".into(),
			last_name: "Lovelace".into(),
			extra: Map::new(),
		};

		profile.merge(&ProfilePatch {
			first_name: Some("Augusta".into()),
			..Default::default()
		});

		assert_eq!(profile.first_name, "Augusta");
		assert_eq!(profile.last_name, "Lovelace");
		assert_eq!(profile.email, "ada@keypress.app");
	}

	#[test]
	fn merge_routes_email_and_passthrough_fields() {
		let mut profile = Profile::default();
		let patch: ProfilePatch = serde_json::from_value(json!({
			"email": "grace@keypress.app",
			"streak": 12,
		}))
		.unwrap();

		profile.merge(&patch);

		assert_eq!(profile.email, "grace@keypress.app");
		assert_eq!(profile.extra.get("streak"), Some(&json!(12)));
	}

	#[test]
	fn patch_serializes_changed_subset_only() {
		let patch = ProfilePatch {
			first_name: Some("Ada".into()),
			..Default::default()
		};

		assert_eq!(
			serde_json::to_value(&patch).unwrap(),
			json!({ "first_name": "Ada" })
		);
	}
}
