//! Canonical (normalized) notification
//!
//! Defaults are filled in, so senders never branch on absent enum values.
//! Absent numeric fields stay `None`: zero is a legal `badge` and
//! `time_to_live`.

use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::enums::{Platform, Priority, PushType};
use crate::notification::{Extend, FieldMap};

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AndroidDelivery {
	pub collapse_key: Option<String>,
	pub delay_while_idle: Option<bool>,
	pub time_to_live: Option<u32>,
	pub priority: Priority,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IosDelivery {
	pub title: Option<String>,
	pub subtitle: Option<String>,
	pub badge: Option<i64>,
	pub category: Option<String>,
	pub sound: Option<String>,
	pub content_available: Option<bool>,
	pub mutable_content: Option<bool>,
	pub expiry: Option<i64>,
	pub push_type: PushType,
}

/// Delivery backend a notification is routed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Target {
	Android(AndroidDelivery),
	Ios(IosDelivery),
}

impl Target {
	pub fn platform(&self) -> Platform {
		match self {
			Target::Android(_) => Platform::Android,
			Target::Ios(_) => Platform::Ios,
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalNotification {
	pub tokens: Vec<String>,
	pub message: String,
	pub identifier: Option<String>,
	pub target: Target,
	pub inactive: FieldMap,
	pub id: Option<u64>,
	/// Always present, empty when the request carried none
	pub extend: Vec<Extend>,
}

impl CanonicalNotification {
	pub fn platform(&self) -> Platform {
		self.target.platform()
	}

	pub fn android(&self) -> Option<&AndroidDelivery> {
		match &self.target {
			Target::Android(delivery) => Some(delivery),
			Target::Ios(_) => None,
		}
	}

	pub fn ios(&self) -> Option<&IosDelivery> {
		match &self.target {
			Target::Ios(delivery) => Some(delivery),
			Target::Android(_) => None,
		}
	}
}

// vim: ts=4
