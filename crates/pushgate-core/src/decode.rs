//! Structural decoding of push request bodies
//!
//! Only the document shape and the wire types of the common fields are checked
//! here. `platform` and the platform-specific fields are captured raw and left
//! to the validator.

use serde::Deserialize;
use serde_json::Value;

use crate::prelude::*;
use pushgate_types::notification::{ANDROID_FIELDS, IOS_FIELDS};

#[derive(Debug, Deserialize)]
struct WireNotification {
	#[serde(rename = "token")]
	tokens: Option<Vec<String>>,
	platform: Option<Value>,
	message: Option<String>,
	identifier: Option<String>,
	#[serde(rename = "seq_id")]
	id: Option<u64>,
	extend: Option<Vec<Extend>>,
	#[serde(flatten)]
	rest: FieldMap,
}

impl From<WireNotification> for RawNotification {
	fn from(wire: WireNotification) -> Self {
		let mut android = FieldMap::new();
		let mut ios = FieldMap::new();

		for (key, value) in wire.rest {
			if value.is_null() {
				continue;
			}
			if ANDROID_FIELDS.contains(&key.as_str()) {
				android.insert(key, value);
			} else if IOS_FIELDS.contains(&key.as_str()) {
				ios.insert(key, value);
			}
			// Anything else is unknown and dropped
		}

		RawNotification {
			tokens: wire.tokens,
			platform: wire.platform.filter(|v| !v.is_null()),
			message: wire.message,
			identifier: wire.identifier,
			android,
			ios,
			id: wire.id,
			extend: wire.extend,
		}
	}
}

/// Decode a request body
pub fn decode(bytes: &[u8]) -> PgResult<Vec<RawNotification>> {
	let doc: Value = serde_json::from_slice(bytes)?;
	decode_value(doc)
}

/// Decode an already parsed request document
pub fn decode_value(doc: Value) -> PgResult<Vec<RawNotification>> {
	let Value::Object(mut root) = doc else {
		return Err(Error::MalformedPayload("payload must be a JSON object".into()));
	};

	let items = match root.remove("notifications") {
		Some(Value::Array(items)) => items,
		None | Some(Value::Null) => {
			return Err(Error::MalformedPayload("missing 'notifications'".into()));
		}
		Some(_) => {
			return Err(Error::MalformedPayload("'notifications' must be an array".into()));
		}
	};

	let notifications = items
		.into_iter()
		.enumerate()
		.map(|(idx, item)| decode_notification(idx, item))
		.collect::<PgResult<Vec<_>>>()?;

	debug!(count = notifications.len(), "Decoded push payload");
	Ok(notifications)
}

fn decode_notification(idx: usize, item: Value) -> PgResult<RawNotification> {
	if !item.is_object() {
		return Err(Error::MalformedPayload(format!("notification #{} is not an object", idx)));
	}

	let wire: WireNotification = serde_json::from_value(item)
		.map_err(|e| Error::MalformedPayload(format!("notification #{}: {}", idx, e)))?;
	Ok(wire.into())
}


// vim: ts=4
