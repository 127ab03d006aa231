//! Normalized notification batch
//!
//! The batch keeps submission order. The per-platform partition is a borrowed
//! view computed on demand, never stored.

use async_trait::async_trait;

use crate::prelude::*;

/// Downstream delivery backend for one platform
#[async_trait]
pub trait PlatformSender: Send + Sync {
	/// Platform whose partition this sender accepts
	fn platform(&self) -> Platform;

	/// Deliver the notifications, in the given order
	async fn send(&self, notifications: &[&CanonicalNotification]) -> PgResult<()>;
}

/// Android-bound and iOS-bound notifications, each in submission order
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PlatformPartition<'a> {
	pub android: Vec<&'a CanonicalNotification>,
	pub ios: Vec<&'a CanonicalNotification>,
}

impl<'a> PlatformPartition<'a> {
	pub fn get(&self, platform: Platform) -> &[&'a CanonicalNotification] {
		match platform {
			Platform::Android => &self.android,
			Platform::Ios => &self.ios,
		}
	}
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct NotificationBatch {
	notifications: Vec<CanonicalNotification>,
}

impl NotificationBatch {
	pub fn new(notifications: Vec<CanonicalNotification>) -> Self {
		Self { notifications }
	}

	pub fn len(&self) -> usize {
		self.notifications.len()
	}

	pub fn is_empty(&self) -> bool {
		self.notifications.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, CanonicalNotification> {
		self.notifications.iter()
	}

	pub fn as_slice(&self) -> &[CanonicalNotification] {
		&self.notifications
	}

	pub fn into_inner(self) -> Vec<CanonicalNotification> {
		self.notifications
	}

	pub fn platform(&self, platform: Platform) -> impl Iterator<Item = &CanonicalNotification> {
		self.notifications.iter().filter(move |n| n.platform() == platform)
	}

	pub fn android(&self) -> impl Iterator<Item = &CanonicalNotification> {
		self.platform(Platform::Android)
	}

	pub fn ios(&self) -> impl Iterator<Item = &CanonicalNotification> {
		self.platform(Platform::Ios)
	}

	pub fn by_platform(&self) -> PlatformPartition<'_> {
		let mut partition = PlatformPartition::default();
		for notification in &self.notifications {
			match notification.platform() {
				Platform::Android => partition.android.push(notification),
				Platform::Ios => partition.ios.push(notification),
			}
		}
		partition
	}

	/// Hand each non-empty partition to the sender of its platform
	pub async fn dispatch(
		&self,
		android: &dyn PlatformSender,
		ios: &dyn PlatformSender,
	) -> PgResult<()> {
		let partition = self.by_platform();

		for (platform, sender) in [(Platform::Android, android), (Platform::Ios, ios)] {
			if sender.platform() != platform {
				return Err(Error::ConfigError(format!(
					"{} sender registered for {} notifications",
					sender.platform(),
					platform
				)));
			}

			let notifications = partition.get(platform);
			if notifications.is_empty() {
				continue;
			}

			info!(platform = %platform, count = notifications.len(), "Dispatching notifications");
			sender.send(notifications).await?;
		}

		Ok(())
	}
}

impl FromIterator<CanonicalNotification> for NotificationBatch {
	fn from_iter<I: IntoIterator<Item = CanonicalNotification>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

impl<'a> IntoIterator for &'a NotificationBatch {
	type Item = &'a CanonicalNotification;
	type IntoIter = std::slice::Iter<'a, CanonicalNotification>;

	fn into_iter(self) -> Self::IntoIter {
		self.notifications.iter()
	}
}

impl IntoIterator for NotificationBatch {
	type Item = CanonicalNotification;
	type IntoIter = std::vec::IntoIter<CanonicalNotification>;

	fn into_iter(self) -> Self::IntoIter {
		self.notifications.into_iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn canonical(identifier: &str, target: Target) -> CanonicalNotification {
		CanonicalNotification {
			tokens: vec!["abc".into()],
			message: "hi".into(),
			identifier: Some(identifier.into()),
			target,
			inactive: FieldMap::new(),
			id: None,
			extend: Vec::new(),
		}
	}

	fn identifiers<'a>(items: impl IntoIterator<Item = &'a CanonicalNotification>) -> Vec<&'a str> {
		items.into_iter().filter_map(|n| n.identifier.as_deref()).collect()
	}

	#[test]
	fn test_partition_keeps_order() {
		let batch: NotificationBatch = vec![
			canonical("a1", Target::Android(AndroidDelivery::default())),
			canonical("i1", Target::Ios(IosDelivery::default())),
			canonical("a2", Target::Android(AndroidDelivery::default())),
			canonical("i2", Target::Ios(IosDelivery::default())),
		]
		.into_iter()
		.collect();

		let partition = batch.by_platform();
		assert_eq!(identifiers(partition.android.iter().copied()), ["a1", "a2"]);
		assert_eq!(identifiers(partition.ios.iter().copied()), ["i1", "i2"]);
		assert_eq!(identifiers(batch.android()), ["a1", "a2"]);
		assert_eq!(identifiers(batch.ios()), ["i1", "i2"]);

		// The canonical sequence is untouched
		assert_eq!(identifiers(&batch), ["a1", "i1", "a2", "i2"]);
		assert_eq!(batch.by_platform(), partition);
	}

	#[test]
	fn test_empty_batch_partition() {
		let batch = NotificationBatch::default();
		let partition = batch.by_platform();
		assert!(partition.android.is_empty());
		assert!(partition.ios.is_empty());
		assert!(batch.is_empty());
	}
}

// vim: ts=4
