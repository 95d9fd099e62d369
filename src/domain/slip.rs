//! The bet slip: the aggregate output contract of every strategy.

use rust_decimal::Decimal;

use crate::domain::money::Amount;
use crate::domain::wager::Wager;

/// The de-duplicated wager list plus its running total.
///
/// Every generation strategy exposes exactly this shape, and `total` always
/// equals the sum of the wagers' amounts. Strategies maintain that by full
/// recomputation on every input change; the only sanctioned deviation is
/// each strategy's documented single-item removal formula, which arrives at
/// the same sum because amounts are uniform within one generation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BetSlip {
    /// Wagers in generation order, unique by pair.
    pub wagers: Vec<Wager>,
    /// Sum of all wager amounts.
    pub total: Amount,
}

impl BetSlip {
    /// An empty slip with zero total.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of wagers on the slip.
    pub fn len(&self) -> usize {
        self.wagers.len()
    }

    /// Whether the slip holds no wagers.
    pub fn is_empty(&self) -> bool {
        self.wagers.is_empty()
    }

    /// Drop all wagers and zero the total.
    pub fn clear(&mut self) {
        self.wagers.clear();
        self.total = Decimal::ZERO;
    }
}
