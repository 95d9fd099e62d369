//! Grid selection: direct per-pair amount entry over the full catalog.

use rust_decimal::Decimal;

use crate::domain::money::{parse_amount, Amount};
use crate::domain::pair::Pair;
use crate::domain::slip::BetSlip;
use crate::domain::strategy::Strategy;
use crate::domain::wager::Wager;

/// The jantri grid: one amount cell per catalog pair.
///
/// The slip doubles as the grid state — it is keyed by pair (upsert on
/// entry, remove on clear), so there is no separate map to keep in sync
/// and no de-duplication concern.
#[derive(Debug, Default)]
pub struct GridStrategy {
    slip: BetSlip,
}

impl GridStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the text typed into one grid cell.
    ///
    /// Empty or non-numeric text counts as zero and clears the cell rather
    /// than raising an error; the grid is deliberately more permissive than
    /// the other strategies, matching the entry surface it backs. A
    /// positive amount upserts the wager (updates keep their list
    /// position); zero or less removes it. The total is re-summed over all
    /// remaining entries on every call.
    pub fn set_amount(&mut self, pair: Pair, amount_text: &str) {
        let amount = parse_amount(amount_text).unwrap_or(Decimal::ZERO);

        if amount > Decimal::ZERO {
            match self.slip.wagers.iter_mut().find(|w| w.pair == pair) {
                Some(existing) => existing.amount = amount,
                None => {
                    let kind = pair.grid_kind();
                    self.slip.wagers.push(Wager::new(pair, amount, kind));
                }
            }
        } else {
            self.slip.wagers.retain(|w| w.pair != pair);
        }

        self.slip.total = self.slip.wagers.iter().map(|w| w.amount).sum();
    }

    /// The amount currently entered for a pair, for grid display.
    pub fn amount_for(&self, pair: &Pair) -> Option<Amount> {
        self.slip
            .wagers
            .iter()
            .find(|w| &w.pair == pair)
            .map(|w| w.amount)
    }
}

impl Strategy for GridStrategy {
    fn name(&self) -> &'static str {
        "jantri"
    }

    fn slip(&self) -> &BetSlip {
        &self.slip
    }

    fn reset(&mut self) {
        self.slip.clear();
    }
}
