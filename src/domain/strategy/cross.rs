//! Cross-product generation: every ordered digit pairing of a number string.

use rust_decimal::Decimal;

use crate::domain::money::parse_amount;
use crate::domain::pair::{Pair, PairKind};
use crate::domain::slip::BetSlip;
use crate::domain::strategy::Strategy;
use crate::domain::wager::Wager;

/// Cross-product strategy: a digit string and one shared bet amount.
///
/// Every setter regenerates the slip wholesale from the current input, so
/// the slip is always a pure function of `(digits, amount_text)`.
#[derive(Debug, Default)]
pub struct CrossStrategy {
    digits: String,
    amount_text: String,
    slip: BetSlip,
}

impl CrossStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the digit string and regenerate.
    ///
    /// Non-digit characters are dropped, mirroring the numeric keypad.
    pub fn set_digits(&mut self, digits: &str) {
        self.digits = digits.chars().filter(char::is_ascii_digit).collect();
        self.generate();
    }

    /// Replace the amount text and regenerate.
    pub fn set_amount(&mut self, amount_text: &str) {
        self.amount_text = amount_text.to_string();
        self.generate();
    }

    /// The current (sanitized) digit string.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Remove the wager at `index`.
    ///
    /// All cross wagers share one amount by construction, so the total
    /// after removal is simply the remaining count times the current
    /// amount input. Out-of-range indexes are ignored.
    pub fn remove(&mut self, index: usize) {
        if index >= self.slip.wagers.len() {
            return;
        }
        self.slip.wagers.remove(index);

        let amount = parse_amount(&self.amount_text).unwrap_or(Decimal::ZERO);
        self.slip.total = Decimal::from(self.slip.wagers.len()) * amount;
    }

    /// Recompute the slip from current input.
    ///
    /// Guard: at least two digits and a positive amount, else the slip is
    /// empty. Generation walks every ordered position pair (outer loop =
    /// first digit, inner = second, both in string order, self-pairs
    /// included) and keeps the first occurrence of each distinct pair.
    fn generate(&mut self) {
        self.slip.clear();

        let amount = match parse_amount(&self.amount_text) {
            Some(amount) if amount > Decimal::ZERO => amount,
            _ => return,
        };
        if self.digits.len() < 2 {
            return;
        }

        let mut seen: Vec<Pair> = Vec::new();
        for first in self.digits.chars() {
            for second in self.digits.chars() {
                let pair = Pair::from_digits(first, second);
                if !seen.contains(&pair) {
                    seen.push(pair.clone());
                    self.slip
                        .wagers
                        .push(Wager::new(pair, amount, PairKind::Crossing));
                }
            }
        }

        self.slip.total = Decimal::from(self.slip.wagers.len()) * amount;
    }
}

impl Strategy for CrossStrategy {
    fn name(&self) -> &'static str {
        "cross"
    }

    fn slip(&self) -> &BetSlip {
        &self.slip
    }

    fn reset(&mut self) {
        self.digits.clear();
        self.amount_text.clear();
        self.slip.clear();
    }
}
