//! The bet-combination engine: pluggable generation strategies.
//!
//! Three strategies expand raw player input into a de-duplicated wager
//! list, all sharing one output contract (a [`BetSlip`]):
//!
//! - **[`GridStrategy`]**: direct per-pair amount entry over the full
//!   catalog (the jantri grid)
//! - **[`CrossStrategy`]**: every ordered digit-by-digit combination of a
//!   number string, first occurrence kept
//! - **[`OpenPlayStrategy`]**: two mutually exclusive rows — chunked jodi
//!   pairs (optionally mirrored) or per-digit A/B harup expansion
//!
//! # Contract
//!
//! Every mutating call recomputes the whole slip from current input; there
//! is no incremental patching, so `total` can never drift from the wager
//! list. Malformed or insufficient input (wrong length, non-numeric or
//! non-positive amount, no toggle) yields an empty slip — never an error
//! and never a message from inside the engine. User-facing validation is
//! the caller's job, duplicated deliberately with the engine's guards.

mod cross;
mod grid;
mod open_play;

pub use cross::CrossStrategy;
pub use grid::GridStrategy;
pub use open_play::{ActiveRow, CategoryInput, ChunkInput, OpenPlayStrategy};

use crate::domain::slip::BetSlip;

/// A bet generation strategy.
///
/// Strategies own their input state and the slip derived from it. Input
/// setters are strategy-specific; this trait is the shared surface the
/// betting session uses to read and reset whichever strategy is active.
pub trait Strategy {
    /// Unique identifier for this strategy.
    ///
    /// Used in logging.
    fn name(&self) -> &'static str;

    /// The current generation output.
    fn slip(&self) -> &BetSlip;

    /// Clear all input state and the slip.
    ///
    /// Called when the screen loses focus or the player switches tabs;
    /// generation state is a draft cart, never persisted.
    fn reset(&mut self);
}
