//! Normalization of validated notifications
//!
//! Fills the enum defaults of the active platform and replaces an absent
//! `extend` with an empty list. Cannot fail.

use crate::prelude::*;

pub fn normalize(notification: Notification) -> CanonicalNotification {
	let target = match notification.setting {
		PlatformSetting::Android(setting) => Target::Android(AndroidDelivery {
			collapse_key: setting.collapse_key,
			delay_while_idle: setting.delay_while_idle,
			time_to_live: setting.time_to_live,
			priority: setting.priority.unwrap_or_default(),
		}),
		PlatformSetting::Ios(setting) => Target::Ios(IosDelivery {
			title: setting.title,
			subtitle: setting.subtitle,
			badge: setting.badge,
			category: setting.category,
			sound: setting.sound,
			content_available: setting.content_available,
			mutable_content: setting.mutable_content,
			expiry: setting.expiry,
			push_type: setting.push_type.unwrap_or_default(),
		}),
	};

	CanonicalNotification {
		tokens: notification.tokens,
		message: notification.message,
		identifier: notification.identifier,
		target,
		inactive: notification.inactive,
		id: notification.id,
		extend: notification.extend.unwrap_or_default(),
	}
}


// vim: ts=4
