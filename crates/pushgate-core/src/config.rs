//! Processor configuration
//!
//! Validation policy and batch limits. Hosts can embed [`ProcessorConfig`] in
//! their own config file (every field has a default) or build it in code.

use serde::{Deserialize, Serialize};

use pushgate_types::error::{Error, PgResult};

/// Whether a notification may be submitted without a message
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessagePolicy {
	/// An empty or absent message is always rejected
	#[default]
	#[serde(rename = "required")]
	Required,
	/// Silent iOS pushes (`content_available: true` or `push_type: "background"`)
	/// may omit the message
	#[serde(rename = "allow_silent")]
	AllowSilent,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
	pub message_policy: MessagePolicy,
	/// Reject tokens that are empty strings
	pub reject_blank_tokens: bool,
	/// Maximum notifications per request (`None` = unlimited)
	pub max_notifications: Option<usize>,
	/// Batches of at least this size are processed on worker tasks
	pub parallel_threshold: usize,
	/// Upper bound on concurrent worker tasks
	pub max_workers: usize,
}

impl Default for ProcessorConfig {
	fn default() -> Self {
		Self {
			message_policy: MessagePolicy::Required,
			reject_blank_tokens: true,
			max_notifications: Some(100),
			parallel_threshold: 64,
			max_workers: 4,
		}
	}
}

impl ProcessorConfig {
	pub fn builder() -> ProcessorConfigBuilder {
		ProcessorConfigBuilder::new()
	}

	/// Check a deserialized configuration, warning about unusual combinations
	pub fn validate(&self) -> PgResult<()> {
		self.check()?;
		match self.max_notifications {
			None => tracing::warn!("Notification batch size is unlimited"),
			Some(max) if self.parallel_threshold > max => tracing::warn!(
				parallel_threshold = self.parallel_threshold,
				max_notifications = max,
				"Parallel threshold above batch limit, batches are never processed concurrently"
			),
			Some(_) => {}
		}
		Ok(())
	}

	/// Reject configurations the pipeline cannot run with
	///
	/// Silent counterpart of [`validate`](Self::validate), run on every request.
	pub fn check(&self) -> PgResult<()> {
		if self.max_workers == 0 {
			return Err(Error::ConfigError("max_workers must be at least 1".into()));
		}
		if self.max_notifications == Some(0) {
			return Err(Error::ConfigError(
				"max_notifications must be positive (omit it for no limit)".into(),
			));
		}
		if self.parallel_threshold == 0 {
			return Err(Error::ConfigError("parallel_threshold must be at least 1".into()));
		}
		Ok(())
	}
}

/// Builder for ProcessorConfig with fluent API
pub struct ProcessorConfigBuilder {
	config: ProcessorConfig,
}

impl ProcessorConfigBuilder {
	pub fn new() -> Self {
		Self { config: ProcessorConfig::default() }
	}

	pub fn message_policy(mut self, policy: MessagePolicy) -> Self {
		self.config.message_policy = policy;
		self
	}

	pub fn reject_blank_tokens(mut self, reject: bool) -> Self {
		self.config.reject_blank_tokens = reject;
		self
	}

	pub fn max_notifications(mut self, max: Option<usize>) -> Self {
		self.config.max_notifications = max;
		self
	}

	pub fn parallel_threshold(mut self, threshold: usize) -> Self {
		self.config.parallel_threshold = threshold;
		self
	}

	pub fn max_workers(mut self, workers: usize) -> Self {
		self.config.max_workers = workers;
		self
	}

	pub fn build(self) -> PgResult<ProcessorConfig> {
		self.config.validate()?;
		Ok(self.config)
	}
}

impl Default for ProcessorConfigBuilder {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_config_is_valid() {
		let config = ProcessorConfig::default();
		assert!(config.validate().is_ok());
		assert_eq!(config.message_policy, MessagePolicy::Required);
		assert_eq!(config.max_notifications, Some(100));
	}

	#[test]
	fn test_default_threshold_within_limit() {
		let config = ProcessorConfig::default();
		assert!(config.max_notifications.is_some_and(|max| config.parallel_threshold <= max));
	}

	#[test]
	fn test_check_rejects_deserialized_nonsense() {
		for json in [
			r#"{"parallel_threshold": 0}"#,
			r#"{"max_workers": 0}"#,
			r#"{"max_notifications": 0}"#,
		] {
			let config: ProcessorConfig = serde_json::from_str(json).unwrap();
			assert!(matches!(config.check(), Err(Error::ConfigError(_))), "{}", json);
		}
	}

	#[test]
	fn test_threshold_above_limit_is_allowed() {
		let config =
			ProcessorConfig::builder().max_notifications(Some(10)).parallel_threshold(50).build();
		assert!(config.is_ok());
	}

	#[test]
	fn test_builder_rejects_zero_workers() {
		let result = ProcessorConfig::builder().max_workers(0).build();
		assert!(matches!(result, Err(Error::ConfigError(_))));
	}

	#[test]
	fn test_builder_rejects_zero_limit() {
		let result = ProcessorConfig::builder().max_notifications(Some(0)).build();
		assert!(matches!(result, Err(Error::ConfigError(_))));

		let config = ProcessorConfig::builder().max_notifications(None).build().unwrap();
		assert_eq!(config.max_notifications, None);
	}

	#[test]
	fn test_partial_config_from_json() {
		let json = r#"{"message_policy": "allow_silent", "max_workers": 8}"#;
		let config: ProcessorConfig = serde_json::from_str(json).unwrap();
		assert_eq!(config.message_policy, MessagePolicy::AllowSilent);
		assert_eq!(config.max_workers, 8);
		// Unspecified fields keep their defaults
		assert!(config.reject_blank_tokens);
		assert_eq!(config.parallel_threshold, 64);
	}
}

// vim: ts=4
