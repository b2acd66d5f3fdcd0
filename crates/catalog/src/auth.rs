use std::fmt;
use std::time::Duration;

use serde::Deserialize;

/// Client credentials used for the client-credentials grant.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
	pub client_id: String,
	pub client_secret: String,
}

impl Credentials {
	#[must_use]
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: client_secret.into(),
		}
	}

	/// Form body for the token endpoint.
	pub(crate) fn grant_form(&self) -> [(&'static str, &str); 3] {
		[
			("grant_type", "client_credentials"),
			("client_id", self.client_id.as_str()),
			("client_secret", self.client_secret.as_str()),
		]
	}
}

impl fmt::Debug for Credentials {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Credentials")
			.field("client_id", &self.client_id)
			.field("client_secret", &"<redacted>")
			.finish()
	}
}

/// Bearer credential obtained once per session and passed to every
/// authenticated catalog call.
///
/// There is no refresh: the context is read until the process exits. An
/// [`anonymous`](Self::anonymous) context stands in for a failed acquisition so
/// that later calls still go out and fail at the service.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthContext {
	token: String,
	token_type: String,
	expires_in: Option<Duration>,
}

impl AuthContext {
	#[must_use]
	pub fn new(token: impl Into<String>) -> Self {
		Self {
			token: token.into(),
			token_type: "Bearer".to_string(),
			expires_in: None,
		}
	}

	/// Context carrying no token at all.
	#[must_use]
	pub fn anonymous() -> Self {
		Self::new(String::new())
	}

	#[must_use]
	pub fn is_anonymous(&self) -> bool {
		self.token.is_empty()
	}

	#[must_use]
	pub fn token(&self) -> &str {
		&self.token
	}

	#[must_use]
	pub fn token_type(&self) -> &str {
		&self.token_type
	}

	/// Lifetime advertised by the token endpoint. Informational only.
	#[must_use]
	pub fn expires_in(&self) -> Option<Duration> {
		self.expires_in
	}
}

impl fmt::Debug for AuthContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AuthContext")
			.field("anonymous", &self.is_anonymous())
			.field("token_type", &self.token_type)
			.field("expires_in", &self.expires_in)
			.finish()
	}
}

/// Body returned by the token endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
	access_token: String,
	#[serde(default)]
	token_type: Option<String>,
	#[serde(default)]
	expires_in: Option<u64>,
}

impl From<TokenResponse> for AuthContext {
	fn from(response: TokenResponse) -> Self {
		Self {
			token: response.access_token,
			token_type: response.token_type.unwrap_or_else(|| "Bearer".to_string()),
			expires_in: response.expires_in.map(Duration::from_secs),
		}
	}
}
