//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`gateway`] — scripted [`BalanceSource`](crate::port::BalanceSource)
//!   and recording [`BetGateway`](crate::port::BetGateway) doubles.
//! - [`domain`] — builders for wagers and slips so tests focus on
//!   assertions rather than construction boilerplate.

pub mod domain;
pub mod gateway;

pub use domain::{slip_of, wager};
pub use gateway::{FixedBalance, RecordingGateway};
