//! Shared types for the Pushgate push request core.
//!
//! This crate holds the closed enum sets (`Platform`, `Priority`, `PushType`),
//! the notification records at each pipeline stage (decoded, validated and
//! canonical) and the error taxonomy. The processing logic lives in
//! `pushgate-core`.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod canonical;
pub mod enums;
pub mod error;
pub mod notification;
pub mod prelude;

// vim: ts=4
