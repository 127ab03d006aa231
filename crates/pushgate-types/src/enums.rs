//! Closed enum sets of the push request wire format
//!
//! Parsing never falls back to a default: anything outside a closed set is an
//! `InvalidEnumValue` error. Serializing a value and parsing it back always
//! yields the same value.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Error, PgResult};

/// Target push ecosystem
///
/// Integer-valued on the wire (`1` = Android, `2` = iOS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Platform {
	Android,
	Ios,
}

impl Platform {
	pub const ALL: [Platform; 2] = [Platform::Android, Platform::Ios];

	pub fn from_code(code: i64) -> PgResult<Self> {
		match code {
			1 => Ok(Platform::Android),
			2 => Ok(Platform::Ios),
			_ => Err(Error::InvalidEnumValue { kind: "platform", value: code.to_string() }),
		}
	}

	pub fn code(self) -> i64 {
		match self {
			Platform::Android => 1,
			Platform::Ios => 2,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Platform::Android => "android",
			Platform::Ios => "ios",
		}
	}
}

impl TryFrom<i64> for Platform {
	type Error = Error;

	fn try_from(code: i64) -> PgResult<Self> {
		Platform::from_code(code)
	}
}

impl From<Platform> for i64 {
	fn from(platform: Platform) -> Self {
		platform.code()
	}
}

impl std::fmt::Display for Platform {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Android delivery priority
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
	/// Delivered immediately while the app is in the foreground, may be
	/// delayed while the device dozes
	#[default]
	Normal,
	/// May wake a sleeping device
	High,
}

impl Priority {
	pub const ALL: [Priority; 2] = [Priority::Normal, Priority::High];

	pub fn as_str(self) -> &'static str {
		match self {
			Priority::Normal => "normal",
			Priority::High => "high",
		}
	}
}

impl FromStr for Priority {
	type Err = Error;

	fn from_str(raw: &str) -> PgResult<Self> {
		match raw {
			"normal" => Ok(Priority::Normal),
			"high" => Ok(Priority::High),
			_ => Err(Error::InvalidEnumValue { kind: "priority", value: raw.to_string() }),
		}
	}
}

impl std::fmt::Display for Priority {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Value of the `apns-push-type` header
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PushType {
	/// Triggers a user interaction (alert, badge or sound)
	#[default]
	Alert,
	/// Delivers content in the background without user interaction
	Background,
	/// Incoming Voice-over-IP call
	Voip,
	/// watchOS complication update
	Complication,
	/// Signals a File Provider extension
	FileProvider,
	/// Tells a managed device to contact its MDM server
	Mdm,
}

impl PushType {
	pub const ALL: [PushType; 6] = [
		PushType::Alert,
		PushType::Background,
		PushType::Voip,
		PushType::Complication,
		PushType::FileProvider,
		PushType::Mdm,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			PushType::Alert => "alert",
			PushType::Background => "background",
			PushType::Voip => "voip",
			PushType::Complication => "complication",
			PushType::FileProvider => "fileprovider",
			PushType::Mdm => "mdm",
		}
	}
}

impl FromStr for PushType {
	type Err = Error;

	fn from_str(raw: &str) -> PgResult<Self> {
		PushType::ALL
			.into_iter()
			.find(|typ| typ.as_str() == raw)
			.ok_or_else(|| Error::InvalidEnumValue { kind: "push_type", value: raw.to_string() })
	}
}

impl std::fmt::Display for PushType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_platform_round_trip() {
		for platform in Platform::ALL {
			assert_eq!(Platform::from_code(platform.code()).unwrap(), platform);
			let json = serde_json::to_value(platform).unwrap();
			assert_eq!(serde_json::from_value::<Platform>(json).unwrap(), platform);
		}
	}

	#[test]
	fn test_priority_round_trip() {
		for priority in Priority::ALL {
			assert_eq!(priority.to_string().parse::<Priority>().unwrap(), priority);
			let json = serde_json::to_value(priority).unwrap();
			assert_eq!(json, priority.as_str());
			assert_eq!(serde_json::from_value::<Priority>(json).unwrap(), priority);
		}
	}

	#[test]
	fn test_push_type_round_trip() {
		for typ in PushType::ALL {
			assert_eq!(typ.to_string().parse::<PushType>().unwrap(), typ);
			let json = serde_json::to_value(typ).unwrap();
			assert_eq!(json, typ.as_str());
			assert_eq!(serde_json::from_value::<PushType>(json).unwrap(), typ);
		}
	}

	#[test]
	fn test_unknown_values_rejected() {
		assert!(matches!(
			Platform::from_code(99),
			Err(Error::InvalidEnumValue { kind: "platform", .. })
		));
		assert!(Platform::from_code(0).is_err());
		assert!("urgent".parse::<Priority>().is_err());
		// No case folding
		assert!("High".parse::<Priority>().is_err());
		assert!("file_provider".parse::<PushType>().is_err());
		assert!("".parse::<PushType>().is_err());
		assert!(serde_json::from_value::<Platform>(serde_json::json!(3)).is_err());
	}

	#[test]
	fn test_defaults() {
		assert_eq!(Priority::default(), Priority::Normal);
		assert_eq!(PushType::default(), PushType::Alert);
	}
}

// vim: ts=4
