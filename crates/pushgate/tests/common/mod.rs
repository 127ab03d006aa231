//! Common test utilities and helpers
//!
//! Payload builders, a recording platform sender and tracing setup shared by
//! the integration tests.

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;

use tracing_subscriber::EnvFilter;

/// Install a log subscriber honouring `RUST_LOG` (once per test binary)
pub fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}

// vim: ts=4
