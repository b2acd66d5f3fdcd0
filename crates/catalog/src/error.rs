use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced while talking to the catalog service.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// The HTTP request could not be sent or its body could not be read.
	#[error("HTTP request failed: {0}")]
	Request(#[from] reqwest::Error),

	/// The service rejected the bearer token or the client credentials.
	#[error("catalog service rejected the credentials ({endpoint})")]
	Unauthorized { endpoint: &'static str },

	/// The service asked the client to slow down.
	#[error("catalog rate limit exceeded (retry after {retry_after:?}s)")]
	RateLimited { retry_after: Option<u64> },

	/// Any other non-success status.
	#[error("{endpoint} returned HTTP {status}")]
	Status {
		endpoint: &'static str,
		status: StatusCode,
	},

	/// The response body was not the JSON shape we expected.
	#[error("failed to decode {endpoint} response: {source}")]
	Decode {
		endpoint: &'static str,
		#[source]
		source: serde_json::Error,
	},

	/// A successful response lacked the section the caller asked for.
	#[error("{endpoint} response has no `{section}` section")]
	MissingSection {
		endpoint: &'static str,
		section: &'static str,
	},

	/// A configured base URL or a path segment could not form a valid URL.
	#[error("invalid catalog URL `{value}`: {reason}")]
	InvalidUrl { value: String, reason: String },
}

impl CatalogError {
	pub(crate) fn invalid_url(value: impl Into<String>, reason: impl ToString) -> Self {
		Self::InvalidUrl {
			value: value.into(),
			reason: reason.to_string(),
		}
	}
}

/// Convenience alias for catalog results.
pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
