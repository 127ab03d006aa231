//! Error types
//!
//! Structural errors (`MalformedPayload`, `TooManyNotifications`) are fatal for
//! the whole request. All other variants are scoped to a single notification
//! and are reported through [`Rejection`].

#[cfg(feature = "server")]
use axum::{
	Json,
	http::StatusCode,
	response::{IntoResponse, Response},
};
use serde::{Serialize, Serializer};
use serde_with::skip_serializing_none;

pub type PgResult<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// The request document is not shaped like a payload
	MalformedPayload(String),
	/// The batch holds more notifications than the configured limit
	TooManyNotifications { count: usize, max: usize },

	/// Raw value outside one of the closed enum sets
	InvalidEnumValue { kind: &'static str, value: String },
	InvalidPlatform(String),
	InvalidPriority(String),
	InvalidPushType(String),
	MissingTokens,
	/// Token at the given position is an empty string
	EmptyToken(usize),
	MissingMessage,
	NegativeTimeToLive(i64),
	/// Platform-specific field carries the wrong JSON type
	InvalidField { field: &'static str, expected: &'static str },

	ConfigError(String),
	Internal(String),
}

impl Error {
	/// Whether the error invalidates the whole request rather than one notification
	pub fn is_structural(&self) -> bool {
		matches!(self, Error::MalformedPayload(_) | Error::TooManyNotifications { .. })
	}

	/// Stable machine-readable error code
	pub fn code(&self) -> &'static str {
		match self {
			Error::MalformedPayload(_) => "E-PUSH-MALFORMED",
			Error::TooManyNotifications { .. } => "E-PUSH-TOOMANY",
			Error::InvalidEnumValue { .. } => "E-PUSH-ENUM",
			Error::InvalidPlatform(_) => "E-PUSH-PLATFORM",
			Error::InvalidPriority(_) => "E-PUSH-PRIORITY",
			Error::InvalidPushType(_) => "E-PUSH-PUSHTYPE",
			Error::MissingTokens => "E-PUSH-NOTOKEN",
			Error::EmptyToken(_) => "E-PUSH-EMPTYTOKEN",
			Error::MissingMessage => "E-PUSH-NOMESSAGE",
			Error::NegativeTimeToLive(_) => "E-PUSH-TTL",
			Error::InvalidField { .. } => "E-PUSH-FIELD",
			Error::ConfigError(_) => "E-PUSH-CONFIG",
			Error::Internal(_) => "E-INTERNAL",
		}
	}

	#[cfg(feature = "server")]
	fn status(&self) -> StatusCode {
		if self.is_structural() {
			StatusCode::BAD_REQUEST
		} else if matches!(self, Error::ConfigError(_) | Error::Internal(_)) {
			StatusCode::INTERNAL_SERVER_ERROR
		} else {
			StatusCode::UNPROCESSABLE_ENTITY
		}
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::MalformedPayload(msg) => write!(f, "Malformed payload: {}", msg),
			Error::TooManyNotifications { count, max } => {
				write!(f, "Number of notifications ({}) over limit ({})", count, max)
			}
			Error::InvalidEnumValue { kind, value } => {
				write!(f, "Invalid {} value: {}", kind, value)
			}
			Error::InvalidPlatform(raw) => write!(f, "Invalid platform: {}", raw),
			Error::InvalidPriority(raw) => write!(f, "Invalid priority: {}", raw),
			Error::InvalidPushType(raw) => write!(f, "Invalid push type: {}", raw),
			Error::MissingTokens => write!(f, "Empty token list"),
			Error::EmptyToken(idx) => write!(f, "Empty token at position {}", idx),
			Error::MissingMessage => write!(f, "Empty message"),
			Error::NegativeTimeToLive(ttl) => write!(f, "Negative time_to_live: {}", ttl),
			Error::InvalidField { field, expected } => {
				write!(f, "Field '{}' must be {}", field, expected)
			}
			Error::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
			Error::Internal(msg) => write!(f, "Internal error: {}", msg),
		}
	}
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Error::MalformedPayload(err.to_string())
	}
}

#[cfg(feature = "server")]
impl IntoResponse for Error {
	fn into_response(self) -> Response {
		let message = match &self {
			// Do not leak internals to the client
			Error::ConfigError(_) | Error::Internal(_) => "Internal error".to_string(),
			err => err.to_string(),
		};
		let body = serde_json::json!({
			"error": {
				"code": self.code(),
				"message": message,
			}
		});
		(self.status(), Json(body)).into_response()
	}
}

/// A notification that failed validation, with the keys a client needs to
/// correlate it with its submission
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
	/// Position in the submitted batch
	pub index: usize,
	pub identifier: Option<String>,
	#[serde(rename = "seq_id")]
	pub id: Option<u64>,
	#[serde(serialize_with = "serialize_error")]
	pub error: Error,
}

impl std::fmt::Display for Rejection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "notification #{}: {}", self.index, self.error)
	}
}

fn serialize_error<S: Serializer>(error: &Error, serializer: S) -> Result<S::Ok, S::Error> {
	#[derive(Serialize)]
	struct ErrorBody<'a> {
		code: &'a str,
		message: String,
	}

	ErrorBody { code: error.code(), message: error.to_string() }.serialize(serializer)
}


// vim: ts=4
