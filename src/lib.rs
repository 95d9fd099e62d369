//! Jantri - bet combination engine and API client for matka-style number games.
//!
//! This crate implements the client-side core of a number-betting platform:
//! expanding raw player input (digit strings, toggles, per-cell amounts) into
//! de-duplicated wager lists with running totals, and submitting the result
//! to the remote platform API.
//!
//! # Architecture
//!
//! The combination engine is a set of pluggable generation strategies sharing
//! one output contract (a [`domain::BetSlip`]):
//!
//! - **[`domain::strategy::GridStrategy`]** - direct per-pair amounts over the
//!   full 00-99 / A0-A9 / B0-B9 catalog (the "jantri" grid)
//! - **[`domain::strategy::CrossStrategy`]** - ordered digit-by-digit product
//!   pairs from a single number string
//! - **[`domain::strategy::OpenPlayStrategy`]** - two mutually exclusive rows:
//!   chunked jodi pairs (optionally mirrored) or A/B harup expansion
//!
//! Around the engine sits the usual client plumbing:
//!
//! - [`port`] - trait boundaries to the platform (balance, submission, catalog)
//! - [`adapter`] - reqwest implementation of the ports against the JSON API
//! - [`app`] - betting session (tab switching) and the placement flow
//! - [`config`] - TOML configuration with environment overrides
//! - [`error`] - error types for the crate
//!
//! # Example
//!
//! ```
//! use jantri::app::{BetSession, Tab};
//!
//! let mut session = BetSession::new();
//! session.select_tab(Tab::Cross);
//! session.cross_mut().set_digits("123");
//! session.cross_mut().set_amount("10");
//!
//! // 3 distinct digits -> 9 ordered pairs, total 90
//! assert_eq!(session.slip().wagers.len(), 9);
//! ```

pub mod adapter;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
