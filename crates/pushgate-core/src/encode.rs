//! Rendering of canonical notifications back into the request wire format
//!
//! Absent optional fields are omitted, filled-in defaults (`priority`,
//! `push_type`) are written out, and the inactive platform's fields are
//! re-emitted verbatim. Processing the output again yields the same batch.

use serde::Serialize;
use serde_json::Value;
use serde_with::skip_serializing_none;

use crate::batch::NotificationBatch;
use crate::prelude::*;

#[skip_serializing_none]
#[derive(Serialize)]
struct WireNotification<'a> {
	token: &'a [String],
	platform: Platform,
	message: &'a str,
	identifier: Option<&'a str>,
	#[serde(flatten)]
	target: &'a Target,
	#[serde(flatten)]
	inactive: &'a FieldMap,
	seq_id: Option<u64>,
	#[serde(skip_serializing_if = "<[_]>::is_empty")]
	extend: &'a [Extend],
}

impl<'a> From<&'a CanonicalNotification> for WireNotification<'a> {
	fn from(notification: &'a CanonicalNotification) -> Self {
		Self {
			token: &notification.tokens,
			platform: notification.platform(),
			message: &notification.message,
			identifier: notification.identifier.as_deref(),
			target: &notification.target,
			inactive: &notification.inactive,
			seq_id: notification.id,
			extend: &notification.extend,
		}
	}
}

#[derive(Serialize)]
struct WirePayload<'a> {
	notifications: Vec<WireNotification<'a>>,
}

impl<'a> From<&'a NotificationBatch> for WirePayload<'a> {
	fn from(batch: &'a NotificationBatch) -> Self {
		Self { notifications: batch.iter().map(WireNotification::from).collect() }
	}
}

pub fn notification_to_value(notification: &CanonicalNotification) -> PgResult<Value> {
	serde_json::to_value(WireNotification::from(notification))
		.map_err(|e| Error::Internal(format!("notification encoding failed: {}", e)))
}

pub fn to_value(batch: &NotificationBatch) -> PgResult<Value> {
	serde_json::to_value(WirePayload::from(batch))
		.map_err(|e| Error::Internal(format!("payload encoding failed: {}", e)))
}

pub fn to_vec(batch: &NotificationBatch) -> PgResult<Vec<u8>> {
	serde_json::to_vec(&WirePayload::from(batch))
		.map_err(|e| Error::Internal(format!("payload encoding failed: {}", e)))
}


// vim: ts=4
