//! Test fixtures

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{Value, json};

use pushgate::{CanonicalNotification, PgResult, Platform, PlatformSender};

/// Minimal valid Android notification
pub fn android(token: &str, message: &str) -> Value {
	json!({"token": [token], "platform": 1, "message": message})
}

/// Minimal valid iOS notification
pub fn ios(token: &str, message: &str) -> Value {
	json!({"token": [token], "platform": 2, "message": message})
}

/// Merge extra wire fields into a notification
pub fn with(mut notification: Value, extra: Value) -> Value {
	if let (Some(target), Value::Object(extra)) = (notification.as_object_mut(), extra) {
		target.extend(extra);
	}
	notification
}

/// Request body carrying the given notifications
pub fn payload(notifications: Vec<Value>) -> Vec<u8> {
	json!({"notifications": notifications}).to_string().into_bytes()
}

/// Sender that records the identifiers of every notification it receives
pub struct RecordingSender {
	pub platform: Platform,
	pub received: Mutex<Vec<Vec<String>>>,
}

impl RecordingSender {
	pub fn new(platform: Platform) -> Self {
		Self { platform, received: Mutex::new(Vec::new()) }
	}

	pub fn calls(&self) -> Vec<Vec<String>> {
		self.received.lock().clone()
	}
}

#[async_trait]
impl PlatformSender for RecordingSender {
	fn platform(&self) -> Platform {
		self.platform
	}

	async fn send(&self, notifications: &[&CanonicalNotification]) -> PgResult<()> {
		let ids = notifications.iter().map(|n| n.identifier.clone().unwrap_or_default()).collect();
		self.received.lock().push(ids);
		Ok(())
	}
}

// vim: ts=4
