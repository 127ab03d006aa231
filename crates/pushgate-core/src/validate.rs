//! Per-notification validation
//!
//! Checks run in a fixed order and stop at the first failure: platform,
//! tokens, message, then the fields of the active platform. Fields belonging
//! to the other platform are carried along untouched.

use serde_json::Value;

use crate::prelude::*;

/// Validate one decoded notification
pub fn validate(raw: RawNotification, config: &ProcessorConfig) -> PgResult<Notification> {
	let platform = validate_platform(raw.platform.as_ref())?;
	let tokens = validate_tokens(raw.tokens, config)?;

	let (active, inactive) = match platform {
		Platform::Android => (raw.android, raw.ios),
		Platform::Ios => (raw.ios, raw.android),
	};

	let message = validate_message(raw.message, platform, &active, config)?;

	let setting = match platform {
		Platform::Android => PlatformSetting::Android(android_setting(&active)?),
		Platform::Ios => PlatformSetting::Ios(ios_setting(&active)?),
	};

	Ok(Notification {
		tokens,
		message,
		identifier: raw.identifier,
		setting,
		inactive,
		id: raw.id,
		extend: raw.extend,
	})
}

fn validate_platform(raw: Option<&Value>) -> PgResult<Platform> {
	let raw = raw.ok_or_else(|| Error::InvalidPlatform("missing".into()))?;
	raw.as_i64()
		.and_then(|code| Platform::from_code(code).ok())
		.ok_or_else(|| Error::InvalidPlatform(raw.to_string()))
}

fn validate_tokens(tokens: Option<Vec<String>>, config: &ProcessorConfig) -> PgResult<Vec<String>> {
	let tokens = tokens.unwrap_or_default();
	if tokens.is_empty() {
		return Err(Error::MissingTokens);
	}
	if config.reject_blank_tokens {
		if let Some(idx) = tokens.iter().position(String::is_empty) {
			return Err(Error::EmptyToken(idx));
		}
	}
	Ok(tokens)
}

fn validate_message(
	message: Option<String>,
	platform: Platform,
	active: &FieldMap,
	config: &ProcessorConfig,
) -> PgResult<String> {
	match message {
		Some(message) if !message.is_empty() => Ok(message),
		_ if config.message_policy == MessagePolicy::AllowSilent
			&& is_silent(platform, active) =>
		{
			Ok(String::new())
		}
		_ => Err(Error::MissingMessage),
	}
}

/// Silent pushes carry no alert: iOS background or content-available pushes
fn is_silent(platform: Platform, active: &FieldMap) -> bool {
	platform == Platform::Ios
		&& (active.get("content_available") == Some(&Value::Bool(true))
			|| active.get("push_type").and_then(Value::as_str) == Some(PushType::Background.as_str()))
}

fn android_setting(fields: &FieldMap) -> PgResult<AndroidSetting> {
	let time_to_live = match opt_i64(fields, "time_to_live")? {
		Some(ttl) if ttl < 0 => return Err(Error::NegativeTimeToLive(ttl)),
		Some(ttl) => Some(u32::try_from(ttl).map_err(|_| Error::InvalidField {
			field: "time_to_live",
			expected: "at most 4294967295 seconds",
		})?),
		None => None,
	};

	let priority = match present(fields, "priority") {
		None => None,
		Some(Value::String(raw)) => {
			Some(raw.parse::<Priority>().map_err(|_| Error::InvalidPriority(raw.clone()))?)
		}
		Some(other) => return Err(Error::InvalidPriority(other.to_string())),
	};

	Ok(AndroidSetting {
		collapse_key: opt_string(fields, "collapse_key")?,
		delay_while_idle: opt_bool(fields, "delay_while_idle")?,
		time_to_live,
		priority,
	})
}

fn ios_setting(fields: &FieldMap) -> PgResult<IosSetting> {
	let push_type = match present(fields, "push_type") {
		None => None,
		Some(Value::String(raw)) => {
			Some(raw.parse::<PushType>().map_err(|_| Error::InvalidPushType(raw.clone()))?)
		}
		Some(other) => return Err(Error::InvalidPushType(other.to_string())),
	};

	Ok(IosSetting {
		title: opt_string(fields, "title")?,
		subtitle: opt_string(fields, "subtitle")?,
		badge: opt_i64(fields, "badge")?,
		category: opt_string(fields, "category")?,
		sound: opt_string(fields, "sound")?,
		content_available: opt_bool(fields, "content_available")?,
		mutable_content: opt_bool(fields, "mutable_content")?,
		expiry: opt_i64(fields, "expiry")?,
		push_type,
	})
}

fn present<'a>(fields: &'a FieldMap, field: &str) -> Option<&'a Value> {
	fields.get(field).filter(|v| !v.is_null())
}

fn opt_string(fields: &FieldMap, field: &'static str) -> PgResult<Option<String>> {
	match present(fields, field) {
		None => Ok(None),
		Some(Value::String(s)) => Ok(Some(s.clone())),
		Some(_) => Err(Error::InvalidField { field, expected: "a string" }),
	}
}

fn opt_bool(fields: &FieldMap, field: &'static str) -> PgResult<Option<bool>> {
	match present(fields, field) {
		None => Ok(None),
		Some(Value::Bool(b)) => Ok(Some(*b)),
		Some(_) => Err(Error::InvalidField { field, expected: "a boolean" }),
	}
}

fn opt_i64(fields: &FieldMap, field: &'static str) -> PgResult<Option<i64>> {
	match present(fields, field) {
		None => Ok(None),
		Some(value) => value
			.as_i64()
			.map(Some)
			.ok_or(Error::InvalidField { field, expected: "an integer" }),
	}
}


// vim: ts=4
