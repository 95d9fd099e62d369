//! Platform-agnostic domain logic: the pair catalog, wagers, slips, and
//! the combination-generation strategies.

pub mod error;
mod game;
mod history;
mod ids;
mod money;
mod pair;
mod slip;
mod wager;

pub mod strategy;

// Core domain types
pub use game::{Game, GameResult, GameStatus};
pub use history::{filter_by_date, summarize, BetGroup, BetOutcome, HistorySummary, SettledBet};
pub use ids::{GameId, UserId};
pub use money::{format_inr, format_two_digits, parse_amount, Amount};
pub use pair::{category_pairs, numeric_pairs, Category, Pair, PairKind};
pub use slip::BetSlip;
pub use wager::Wager;
