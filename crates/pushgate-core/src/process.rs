//! Request processing pipeline
//!
//! decode -> size check -> validate -> normalize, one result per submitted
//! notification. Structural errors abort the whole request; per-notification
//! errors become [`Rejection`]s and the rest of the batch is still processed.
//! Whether a rejection fails the request is up to the caller, see
//! [`BatchOutcome::into_batch`] and [`BatchOutcome::partition`].

use std::sync::Arc;

use crate::batch::NotificationBatch;
use crate::decode::decode;
use crate::normalize::normalize;
use crate::prelude::*;
use crate::validate::validate;

pub type Entry = Result<CanonicalNotification, Rejection>;

/// Per-notification results, in submission order
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
	entries: Vec<Entry>,
}

impl BatchOutcome {
	pub fn entries(&self) -> &[Entry] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn rejections(&self) -> impl Iterator<Item = &Rejection> {
		self.entries.iter().filter_map(|entry| entry.as_ref().err())
	}

	pub fn is_all_ok(&self) -> bool {
		self.entries.iter().all(Result::is_ok)
	}

	/// All-or-nothing: the batch, or the first rejection
	pub fn into_batch(self) -> Result<NotificationBatch, Rejection> {
		self.entries.into_iter().collect()
	}

	/// Accepted notifications and all rejections, both in submission order
	pub fn partition(self) -> (NotificationBatch, Vec<Rejection>) {
		let mut accepted = Vec::with_capacity(self.entries.len());
		let mut rejected = Vec::new();
		for entry in self.entries {
			match entry {
				Ok(notification) => accepted.push(notification),
				Err(rejection) => rejected.push(rejection),
			}
		}
		(NotificationBatch::new(accepted), rejected)
	}

	fn log_summary(&self) {
		let rejected = self.rejections().count();
		info!(
			total = self.entries.len(),
			accepted = self.entries.len() - rejected,
			rejected,
			"Processed push payload"
		);
	}
}

/// Validate and normalize one notification
pub fn process_notification(index: usize, raw: RawNotification, config: &ProcessorConfig) -> Entry {
	let identifier = raw.identifier.clone();
	let id = raw.id;

	validate(raw, config).map(normalize).map_err(|error| {
		warn!(index, error = %error, "Rejected notification");
		Rejection { index, identifier, id, error }
	})
}

/// Process a request body on the calling thread
pub fn process(bytes: &[u8], config: &ProcessorConfig) -> PgResult<BatchOutcome> {
	process_decoded(decode(bytes)?, config)
}

/// Process notifications that were already decoded
pub fn process_decoded(
	raw: Vec<RawNotification>,
	config: &ProcessorConfig,
) -> PgResult<BatchOutcome> {
	config.check()?;
	check_limit(raw.len(), config)?;
	let outcome = run_sequential(raw, config);
	outcome.log_summary();
	Ok(outcome)
}

/// Process a request body, spreading large batches over blocking worker tasks
///
/// Results are reassembled in submission order regardless of which worker
/// finishes first.
pub async fn process_concurrent(
	bytes: &[u8],
	config: Arc<ProcessorConfig>,
) -> PgResult<BatchOutcome> {
	config.check()?;
	let raw = decode(bytes)?;
	check_limit(raw.len(), &config)?;

	let total = raw.len();
	if total == 0 || total < config.parallel_threshold || config.max_workers <= 1 {
		let outcome = run_sequential(raw, &config);
		outcome.log_summary();
		return Ok(outcome);
	}

	let workers = config.max_workers.min(total);
	let chunk_size = total.div_ceil(workers);
	debug!(total, workers, chunk_size, "Processing push payload concurrently");

	let mut items = raw.into_iter().enumerate();
	let mut handles = Vec::with_capacity(workers);
	loop {
		let chunk: Vec<(usize, RawNotification)> = items.by_ref().take(chunk_size).collect();
		if chunk.is_empty() {
			break;
		}
		let config = Arc::clone(&config);
		handles.push(tokio::task::spawn_blocking(move || {
			chunk
				.into_iter()
				.map(|(index, raw)| process_notification(index, raw, &config))
				.collect::<Vec<_>>()
		}));
	}

	// Chunks are contiguous, so awaiting handles in spawn order restores
	// submission order
	let mut entries = Vec::with_capacity(total);
	for handle in handles {
		let chunk = handle.await.map_err(|e| {
			error!(error = %e, "Validation worker failed");
			Error::Internal(format!("validation worker failed: {}", e))
		})?;
		entries.extend(chunk);
	}

	let outcome = BatchOutcome { entries };
	outcome.log_summary();
	Ok(outcome)
}

fn check_limit(count: usize, config: &ProcessorConfig) -> PgResult<()> {
	match config.max_notifications {
		Some(max) if count > max => {
			warn!(count, max, "Push payload over notification limit");
			Err(Error::TooManyNotifications { count, max })
		}
		_ => Ok(()),
	}
}

fn run_sequential(raw: Vec<RawNotification>, config: &ProcessorConfig) -> BatchOutcome {
	let entries = raw
		.into_iter()
		.enumerate()
		.map(|(index, raw)| process_notification(index, raw, config))
		.collect();
	BatchOutcome { entries }
}

#[cfg(test)]
mod tests {
	use super::*;

	const MIXED: &str = r#"{"notifications": [
		{"token": ["a"], "platform": 1, "message": "one", "identifier": "n0"},
		{"token": [], "platform": 1, "message": "two", "identifier": "n1", "seq_id": 11},
		{"token": ["c"], "platform": 2, "message": "three", "identifier": "n2"},
		{"token": ["d"], "platform": 1, "message": "four", "priority": "urgent"}
	]}"#;

	#[test]
	fn test_outcome_keeps_every_entry() {
		let outcome = process(MIXED.as_bytes(), &ProcessorConfig::default()).unwrap();
		assert_eq!(outcome.len(), 4);
		assert!(!outcome.is_all_ok());

		let rejections: Vec<_> = outcome.rejections().collect();
		assert_eq!(rejections.len(), 2);
		assert_eq!(rejections[0].index, 1);
		assert_eq!(rejections[0].identifier.as_deref(), Some("n1"));
		assert_eq!(rejections[0].id, Some(11));
		assert_eq!(rejections[0].error, Error::MissingTokens);
		assert_eq!(rejections[1].index, 3);
		assert_eq!(rejections[1].error, Error::InvalidPriority("urgent".into()));
	}

	#[test]
	fn test_into_batch_stops_at_first_rejection() {
		let outcome = process(MIXED.as_bytes(), &ProcessorConfig::default()).unwrap();
		let rejection = outcome.into_batch().unwrap_err();
		assert_eq!(rejection.index, 1);
	}

	#[test]
	fn test_partition_collects_all() {
		let outcome = process(MIXED.as_bytes(), &ProcessorConfig::default()).unwrap();
		let (batch, rejected) = outcome.partition();
		let messages: Vec<_> = batch.iter().map(|n| n.message.as_str()).collect();
		assert_eq!(messages, ["one", "three"]);
		assert_eq!(rejected.len(), 2);
	}

	#[test]
	fn test_notification_limit() {
		let config = ProcessorConfig::builder().max_notifications(Some(3)).build().unwrap();
		assert_eq!(
			process(MIXED.as_bytes(), &config),
			Err(Error::TooManyNotifications { count: 4, max: 3 })
		);

		let config = ProcessorConfig::builder().max_notifications(None).build().unwrap();
		assert!(process(MIXED.as_bytes(), &config).is_ok());
	}

	#[test]
	fn test_structural_error_aborts() {
		let result = process(br#"{"notifications": [{"token": ["a"]}, 5]}"#, &ProcessorConfig::default());
		assert!(matches!(result, Err(Error::MalformedPayload(_))));
	}

	#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
	async fn test_concurrent_matches_sequential() {
		let config = Arc::new(
			ProcessorConfig::builder().parallel_threshold(1).max_workers(3).build().unwrap(),
		);
		let sequential = process(MIXED.as_bytes(), &config).unwrap();
		let concurrent = process_concurrent(MIXED.as_bytes(), Arc::clone(&config)).await.unwrap();
		assert_eq!(sequential, concurrent);
	}

	#[tokio::test]
	async fn test_concurrent_rejects_invalid_config() {
		let empty = br#"{"notifications": []}"#;
		for json in [r#"{"parallel_threshold": 0}"#, r#"{"max_workers": 0}"#] {
			let config: ProcessorConfig = serde_json::from_str(json).unwrap();
			let result = process_concurrent(empty, Arc::new(config.clone())).await;
			assert!(matches!(result, Err(Error::ConfigError(_))), "{}", json);
			assert!(matches!(process(empty, &config), Err(Error::ConfigError(_))), "{}", json);
		}
	}

	#[tokio::test]
	async fn test_concurrent_empty_batch() {
		let config = Arc::new(
			ProcessorConfig::builder().parallel_threshold(1).max_workers(3).build().unwrap(),
		);
		let outcome = process_concurrent(br#"{"notifications": []}"#, config).await.unwrap();
		assert!(outcome.is_empty());
		assert!(outcome.is_all_ok());
	}
}

// vim: ts=4
