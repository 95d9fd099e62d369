//! Settled-bet history: per-game outcome folding and date filtering.
//!
//! The platform returns bet history grouped by game; each group carries the
//! individual bets with their settlement status. The client derives one
//! headline outcome and winning total per group.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use rust_decimal::Decimal;

use crate::domain::money::Amount;

/// Settlement status of one bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetOutcome {
    Won,
    Lost,
    /// Result not yet declared (any other wire value).
    #[serde(other)]
    Pending,
}

/// One settled (or pending) bet within a history group.
#[derive(Debug, Clone, PartialEq)]
pub struct SettledBet {
    pub outcome: BetOutcome,
    /// Winnings credited for this bet; zero unless won.
    pub winning_amount: Amount,
    pub placed_at: DateTime<Utc>,
}

/// A game's worth of bets from one play session.
#[derive(Debug, Clone, PartialEq)]
pub struct BetGroup {
    pub game_name: String,
    pub bets: Vec<SettledBet>,
}

/// Headline outcome for a group of bets.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySummary {
    pub outcome: BetOutcome,
    pub winning_total: Amount,
}

/// Fold a group of bets into one headline outcome.
///
/// Any won bet makes the group Won with the sum of winning amounts;
/// all lost makes it Lost; anything else (some bets still pending) is
/// Pending.
pub fn summarize(bets: &[SettledBet]) -> HistorySummary {
    let mut has_won = false;
    let mut all_lost = true;
    let mut winning_total = Decimal::ZERO;

    for bet in bets {
        if bet.outcome == BetOutcome::Won {
            has_won = true;
            winning_total += bet.winning_amount;
        }
        if bet.outcome != BetOutcome::Lost {
            all_lost = false;
        }
    }

    let outcome = if has_won {
        BetOutcome::Won
    } else if all_lost {
        BetOutcome::Lost
    } else {
        BetOutcome::Pending
    };

    HistorySummary {
        outcome,
        winning_total,
    }
}

impl BetGroup {
    /// Calendar date of the group, taken from its last bet.
    pub fn date(&self) -> Option<NaiveDate> {
        self.bets.last().map(|bet| bet.placed_at.date_naive())
    }
}

/// Keep the groups whose date falls within `[from, to]` (inclusive).
///
/// The comparison is on calendar dates only, matching the history screen's
/// date pickers. Groups without bets carry no date and are dropped.
pub fn filter_by_date(groups: &[BetGroup], from: NaiveDate, to: NaiveDate) -> Vec<BetGroup> {
    groups
        .iter()
        .filter(|group| {
            group
                .date()
                .is_some_and(|date| from <= date && date <= to)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn at(date: &str) -> DateTime<Utc> {
        let d: NaiveDate = date.parse().unwrap();
        Utc.from_utc_datetime(&d.and_hms_opt(12, 0, 0).unwrap())
    }

    fn bet(outcome: BetOutcome, winning: Amount) -> SettledBet {
        SettledBet {
            outcome,
            winning_amount: winning,
            placed_at: at("2025-03-01"),
        }
    }

    #[test]
    fn any_win_dominates() {
        let summary = summarize(&[
            bet(BetOutcome::Lost, dec!(0)),
            bet(BetOutcome::Won, dec!(95)),
            bet(BetOutcome::Won, dec!(190)),
        ]);
        assert_eq!(summary.outcome, BetOutcome::Won);
        assert_eq!(summary.winning_total, dec!(285));
    }

    #[test]
    fn all_lost_is_lost() {
        let summary = summarize(&[bet(BetOutcome::Lost, dec!(0)), bet(BetOutcome::Lost, dec!(0))]);
        assert_eq!(summary.outcome, BetOutcome::Lost);
        assert_eq!(summary.winning_total, dec!(0));
    }

    #[test]
    fn pending_bet_without_win_is_pending() {
        let summary = summarize(&[bet(BetOutcome::Lost, dec!(0)), bet(BetOutcome::Pending, dec!(0))]);
        assert_eq!(summary.outcome, BetOutcome::Pending);
    }

    #[test]
    fn date_filter_inclusive_on_last_bet() {
        let group = |date: &str| BetGroup {
            game_name: "Gali".into(),
            bets: vec![SettledBet {
                outcome: BetOutcome::Pending,
                winning_amount: dec!(0),
                placed_at: at(date),
            }],
        };
        let groups = vec![group("2025-03-01"), group("2025-03-05"), group("2025-03-09")];

        let kept = filter_by_date(
            &groups,
            "2025-03-01".parse().unwrap(),
            "2025-03-05".parse().unwrap(),
        );

        assert_eq!(kept.len(), 2);
        assert_eq!(kept[1].date(), Some("2025-03-05".parse().unwrap()));
    }
}
