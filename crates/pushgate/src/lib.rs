//! Pushgate
//!
//! Decoding, validation and normalization of multi-platform push notification
//! requests. A request body carries a batch of notifications for Android
//! (FCM-style) and iOS (APNs-style) devices; this crate turns it into a
//! canonical, ordered [`NotificationBatch`] that can be split by platform and
//! handed to the delivery backends.
//!
//! ```
//! use pushgate::{ProcessorConfig, Priority, process};
//!
//! let body = br#"{"notifications":[{"token":["abc"],"platform":1,"message":"hi"}]}"#;
//! let batch = process(body, &ProcessorConfig::default())?.into_batch().map_err(|r| r.error)?;
//! let android = batch.android().next().and_then(|n| n.android()).map(|a| a.priority);
//! assert_eq!(android, Some(Priority::Normal));
//! # Ok::<(), pushgate::Error>(())
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub use pushgate_core::decode::{decode, decode_value};
pub use pushgate_core::encode;
pub use pushgate_core::normalize::normalize;
pub use pushgate_core::process::process_decoded;
pub use pushgate_core::validate::validate;
pub use pushgate_core::{
	BatchOutcome, MessagePolicy, NotificationBatch, PlatformPartition, PlatformSender,
	ProcessorConfig, ProcessorConfigBuilder, process, process_concurrent,
};
pub use pushgate_types::prelude::{
	AndroidDelivery, AndroidSetting, CanonicalNotification, Error, Extend, FieldMap, IosDelivery,
	IosSetting, Notification, PgResult, Platform, PlatformSetting, Priority, PushType,
	RawNotification, Rejection, Target,
};

// vim: ts=4
