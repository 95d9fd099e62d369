//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the crate's boundary to the betting platform. The engine
//! itself is pure and synchronous; everything that crosses the network is
//! behind one of these async traits, implemented by the HTTP adapter in
//! production and by testkit doubles in tests.
//!
//! # Available Ports
//!
//! - [`BalanceSource`] - wallet balance queries (affordability pre-check)
//! - [`BetGateway`] - wager submission
//! - [`GameCatalog`] - game lists, declared results, bet history

use async_trait::async_trait;

use crate::domain::{Amount, BetGroup, Game, GameId, GameResult, GameStatus, UserId, Wager};
use crate::error::Result;

/// Receipt returned by the platform for an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Platform-assigned identifier of the stored bet, when provided.
    pub bet_id: Option<String>,
    /// Human-readable confirmation from the platform.
    pub message: Option<String>,
}

/// Source of the player's wallet balances.
#[async_trait]
pub trait BalanceSource: Send + Sync {
    /// The player's current main balance.
    async fn current_balance(&self, user: &UserId) -> Result<Amount>;

    /// The player's winning balance (held separately by the platform).
    async fn winning_balance(&self, user: &UserId) -> Result<Amount>;
}

/// Gateway for submitting generated wagers.
///
/// Called exactly once per player confirmation with the final wager list.
/// The server recomputes and validates amounts itself, so the slip total
/// is never sent.
#[async_trait]
pub trait BetGateway: Send + Sync {
    /// Submit the wagers for a game.
    async fn submit(&self, game: &GameId, wagers: &[Wager]) -> Result<SubmissionReceipt>;
}

/// Read-only access to the platform's game and result feeds.
#[async_trait]
pub trait GameCatalog: Send + Sync {
    /// Games filtered by live/upcoming status.
    async fn games(&self, status: GameStatus) -> Result<Vec<Game>>;

    /// Declared results filtered by status.
    async fn results(&self, status: GameStatus) -> Result<Vec<GameResult>>;

    /// The player's bet history, grouped by game session.
    async fn bet_history(&self, user: &UserId) -> Result<Vec<BetGroup>>;
}
