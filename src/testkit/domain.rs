//! Builders for domain primitives used across tests.

use crate::domain::{Amount, BetSlip, Pair, PairKind, Wager};

/// Create a [`Wager`] from a pair literal.
///
/// Panics on an invalid pair; test input is always literal.
pub fn wager(pair: &str, amount: Amount, kind: PairKind) -> Wager {
    Wager::new(Pair::parse(pair).expect("valid pair literal"), amount, kind)
}

/// Build a [`BetSlip`] from `(pair, amount, kind)` triples with a
/// consistent total.
pub fn slip_of(entries: &[(&str, Amount, PairKind)]) -> BetSlip {
    let wagers: Vec<Wager> = entries
        .iter()
        .map(|(pair, amount, kind)| wager(pair, *amount, *kind))
        .collect();
    let total = wagers.iter().map(|w| w.amount).sum();
    BetSlip { wagers, total }
}
