//! Push request core
//!
//! Turns a submitted push request body into validated, normalized
//! notifications ready to be handed to the platform senders.
//!
//! # Pipeline
//!
//! - [`decode`] - structural decoding of the `notifications` array
//! - [`validate`] - per-notification checks for the active platform
//! - [`normalize`] - default filling and canonical form
//! - [`batch`] - ordered batch with a per-platform view
//!
//! [`process`] runs the whole pipeline, [`encode`] renders a batch back into
//! the request wire format.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod config;
pub mod decode;
pub mod encode;
pub mod normalize;
pub mod prelude;
pub mod process;
pub mod validate;

pub use batch::{NotificationBatch, PlatformPartition, PlatformSender};
pub use config::{MessagePolicy, ProcessorConfig, ProcessorConfigBuilder};
pub use process::{BatchOutcome, process, process_concurrent};

// vim: ts=4
