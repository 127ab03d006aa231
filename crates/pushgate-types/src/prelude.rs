pub use crate::canonical::{AndroidDelivery, CanonicalNotification, IosDelivery, Target};
pub use crate::enums::{Platform, Priority, PushType};
pub use crate::error::{Error, PgResult, Rejection};
pub use crate::notification::{
	AndroidSetting, Extend, FieldMap, IosSetting, Notification, PlatformSetting, RawNotification,
};

pub use tracing::{debug, error, info, warn};

// vim: ts=4
