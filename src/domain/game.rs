//! Games and results from the platform catalog.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ids::GameId;

/// Server-side list filter for the game and result endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Live,
    Upcoming,
}

/// A bettable game with its daily open window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    /// Daily opening time (local wall clock).
    pub start_time: NaiveTime,
    /// Daily closing time; may be earlier than `start_time` when the
    /// window wraps past midnight.
    pub end_time: NaiveTime,
    /// When the result for the day is declared.
    pub result_time: NaiveTime,
}

impl Game {
    /// Whether bets are accepted at the given wall-clock time.
    ///
    /// Windows that wrap past midnight (`start > end`, e.g. 21:00-02:00)
    /// are open when `now` is after the start or before the end.
    pub fn is_open_at(&self, now: NaiveTime) -> bool {
        if self.start_time <= self.end_time {
            self.start_time <= now && now <= self.end_time
        } else {
            self.start_time <= now || now <= self.end_time
        }
    }
}

/// One declared result from the result feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub game_name: String,
    /// The winning number as published (kept as text; leading zeros matter).
    pub result: String,
    pub declared_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn game(start: NaiveTime, end: NaiveTime) -> Game {
        Game {
            id: GameId::new("g1"),
            name: "Desawar".into(),
            start_time: start,
            end_time: end,
            result_time: end,
        }
    }

    #[test]
    fn open_within_same_day_window() {
        let g = game(t(9, 0), t(17, 0));
        assert!(g.is_open_at(t(9, 0)));
        assert!(g.is_open_at(t(12, 30)));
        assert!(g.is_open_at(t(17, 0)));
        assert!(!g.is_open_at(t(8, 59)));
        assert!(!g.is_open_at(t(17, 1)));
    }

    #[test]
    fn open_across_midnight_wrap() {
        let g = game(t(21, 0), t(2, 0));
        assert!(g.is_open_at(t(23, 30)));
        assert!(g.is_open_at(t(1, 59)));
        assert!(g.is_open_at(t(21, 0)));
        assert!(!g.is_open_at(t(12, 0)));
        assert!(!g.is_open_at(t(2, 1)));
    }

    #[test]
    fn game_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&GameStatus::Live).unwrap(), "\"live\"");
        assert_eq!(
            serde_json::to_string(&GameStatus::Upcoming).unwrap(),
            "\"upcoming\""
        );
    }
}
