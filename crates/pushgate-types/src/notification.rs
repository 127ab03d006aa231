//! Notification records before and after validation

use serde::{Deserialize, Serialize};

use crate::enums::{Platform, Priority, PushType};

/// Raw JSON fields keyed by wire name
pub type FieldMap = serde_json::Map<String, serde_json::Value>;

/// Wire names of the Android-only fields
pub const ANDROID_FIELDS: [&str; 4] = ["collapse_key", "delay_while_idle", "time_to_live", "priority"];

/// Wire names of the iOS-only fields
pub const IOS_FIELDS: [&str; 9] = [
	"title",
	"subtitle",
	"badge",
	"category",
	"sound",
	"content_available",
	"mutable_content",
	"expiry",
	"push_type",
];

/// Opaque key/value extension pair, passed through untouched
///
/// Unknown members of an extension entry are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extend {
	pub key: String,
	pub value: String,
	#[serde(flatten)]
	pub extra: FieldMap,
}

impl Extend {
	pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
		Self { key: key.into(), value: value.into(), extra: FieldMap::new() }
	}
}

/// Structurally decoded notification, nothing interpreted yet
///
/// `platform` and the platform-specific fields are kept as raw JSON. The
/// Android and iOS fields are split into separate maps so that only the
/// active platform's map is ever looked at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawNotification {
	pub tokens: Option<Vec<String>>,
	pub platform: Option<serde_json::Value>,
	pub message: Option<String>,
	pub identifier: Option<String>,
	pub android: FieldMap,
	pub ios: FieldMap,
	pub id: Option<u64>,
	pub extend: Option<Vec<Extend>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AndroidSetting {
	pub collapse_key: Option<String>,
	pub delay_while_idle: Option<bool>,
	/// Seconds
	pub time_to_live: Option<u32>,
	pub priority: Option<Priority>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IosSetting {
	pub title: Option<String>,
	pub subtitle: Option<String>,
	/// Replaces the app badge count; zero and negative values are passed on as is
	pub badge: Option<i64>,
	pub category: Option<String>,
	pub sound: Option<String>,
	pub content_available: Option<bool>,
	pub mutable_content: Option<bool>,
	/// Opaque to this crate (epoch seconds or TTL, per sender convention)
	pub expiry: Option<i64>,
	pub push_type: Option<PushType>,
}

/// Platform-specific settings, keyed by the notification's platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformSetting {
	Android(AndroidSetting),
	Ios(IosSetting),
}

impl PlatformSetting {
	pub fn platform(&self) -> Platform {
		match self {
			PlatformSetting::Android(_) => Platform::Android,
			PlatformSetting::Ios(_) => Platform::Ios,
		}
	}
}

/// A notification that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
	pub tokens: Vec<String>,
	pub message: String,
	pub identifier: Option<String>,
	pub setting: PlatformSetting,
	/// Fields of the inactive platform, kept verbatim and never interpreted
	pub inactive: FieldMap,
	pub id: Option<u64>,
	pub extend: Option<Vec<Extend>>,
}

impl Notification {
	pub fn platform(&self) -> Platform {
		self.setting.platform()
	}
}


// vim: ts=4
