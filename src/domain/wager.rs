//! The wager value object.

use serde::{Deserialize, Serialize};

use crate::domain::money::Amount;
use crate::domain::pair::{Pair, PairKind};

/// One `{pair, amount, pairType}` entry contributed to a bet submission.
///
/// Wagers are produced by the generation strategies and serialized as-is
/// into the `bets` array of the submission request. Within one generation
/// cycle, `pair` values are unique across the produced list; each strategy
/// enforces that with its own seen-set, callers never have to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wager {
    /// The bettable identifier.
    pub pair: Pair,
    /// Bet amount in rupees.
    pub amount: Amount,
    /// Payout-rate classification for the server.
    #[serde(rename = "pairType")]
    pub kind: PairKind,
}

impl Wager {
    /// Create a new wager.
    pub fn new(pair: Pair, amount: Amount, kind: PairKind) -> Self {
        Self { pair, amount, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn serializes_with_wire_field_names() {
        let wager = Wager::new(Pair::parse("07").unwrap(), dec!(10), PairKind::Jodi);
        let json = serde_json::to_value(&wager).unwrap();

        assert_eq!(json["pair"], "07");
        assert_eq!(json["pairType"], "jodi");
        assert_eq!(json["amount"], serde_json::json!("10"));
    }

    #[test]
    fn round_trips_category_pair() {
        let wager = Wager::new(Pair::parse("B3").unwrap(), dec!(5), PairKind::Harup);
        let json = serde_json::to_string(&wager).unwrap();
        let back: Wager = serde_json::from_str(&json).unwrap();
        assert_eq!(back, wager);
    }
}
