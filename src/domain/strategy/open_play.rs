//! Open play: chunked jodi pairs or per-digit harup expansion.
//!
//! Two input rows share one output slot and are mutually exclusive: the
//! chunk row splits an even-length digit string into two-digit jodi pairs
//! (optionally mirrored, the "palti" toggle), the category row expands
//! each digit into A/B harup pairs gated by two checkboxes. Touching one
//! row's input resets the other row entirely, so stale wagers can never
//! leak across rows.

use rust_decimal::Decimal;

use crate::domain::money::parse_amount;
use crate::domain::pair::{Category, Pair, PairKind};
use crate::domain::slip::BetSlip;
use crate::domain::strategy::Strategy;
use crate::domain::wager::Wager;

/// Input state of the chunk (jodi) row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkInput {
    pub digits: String,
    /// Palti: also generate the digit-reversed counterpart of each chunk.
    pub mirror: bool,
    pub amount_text: String,
}

/// Input state of the category (harup) row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryInput {
    pub digits: String,
    pub include_a: bool,
    pub include_b: bool,
    pub amount_text: String,
}

/// Which row currently owns the shared output.
///
/// The row states live inside the variant, so only one row's input can
/// exist at a time; exclusivity is structural, not a convention.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActiveRow {
    #[default]
    None,
    Chunk(ChunkInput),
    Category(CategoryInput),
}

/// Open-play strategy: two mutually exclusive generation rows.
#[derive(Debug, Default)]
pub struct OpenPlayStrategy {
    row: ActiveRow,
    slip: BetSlip,
}

impl OpenPlayStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently active row and its input.
    pub fn active_row(&self) -> &ActiveRow {
        &self.row
    }

    /// Set the chunk row's digit string (activates the chunk row).
    pub fn set_chunk_digits(&mut self, digits: &str) {
        let digits: String = digits.chars().filter(char::is_ascii_digit).collect();
        self.chunk_mut().digits = digits;
        self.generate();
    }

    /// Toggle palti mirroring (activates the chunk row).
    pub fn set_mirror(&mut self, mirror: bool) {
        self.chunk_mut().mirror = mirror;
        self.generate();
    }

    /// Set the chunk row's amount text (activates the chunk row).
    pub fn set_chunk_amount(&mut self, amount_text: &str) {
        self.chunk_mut().amount_text = amount_text.to_string();
        self.generate();
    }

    /// Set the category row's digit string (activates the category row).
    pub fn set_category_digits(&mut self, digits: &str) {
        let digits: String = digits.chars().filter(char::is_ascii_digit).collect();
        self.category_mut().digits = digits;
        self.generate();
    }

    /// Toggle the Ander (`A`) checkbox (activates the category row).
    pub fn set_include_a(&mut self, include: bool) {
        self.category_mut().include_a = include;
        self.generate();
    }

    /// Toggle the Bahar (`B`) checkbox (activates the category row).
    pub fn set_include_b(&mut self, include: bool) {
        self.category_mut().include_b = include;
        self.generate();
    }

    /// Set the category row's amount text (activates the category row).
    pub fn set_category_amount(&mut self, amount_text: &str) {
        self.category_mut().amount_text = amount_text.to_string();
        self.generate();
    }

    /// Remove the wager at `index`.
    ///
    /// The total becomes the remaining count times the LAST remaining
    /// wager's amount (zero when emptied). Amounts are uniform within one
    /// generation, so any remaining wager works as the multiplier; this
    /// mirrors the platform's historical behavior exactly.
    pub fn remove(&mut self, index: usize) {
        if index >= self.slip.wagers.len() {
            return;
        }
        self.slip.wagers.remove(index);

        self.slip.total = match self.slip.wagers.last() {
            Some(last) => Decimal::from(self.slip.wagers.len()) * last.amount,
            None => Decimal::ZERO,
        };
    }

    /// Borrow the chunk input, switching rows first if the category row
    /// was active (which drops all of its state and clears the slip).
    fn chunk_mut(&mut self) -> &mut ChunkInput {
        if !matches!(self.row, ActiveRow::Chunk(_)) {
            self.slip.clear();
            self.row = ActiveRow::Chunk(ChunkInput::default());
        }
        match &mut self.row {
            ActiveRow::Chunk(input) => input,
            _ => unreachable!("chunk row activated above"),
        }
    }

    /// Borrow the category input, switching rows first if needed.
    fn category_mut(&mut self) -> &mut CategoryInput {
        if !matches!(self.row, ActiveRow::Category(_)) {
            self.slip.clear();
            self.row = ActiveRow::Category(CategoryInput::default());
        }
        match &mut self.row {
            ActiveRow::Category(input) => input,
            _ => unreachable!("category row activated above"),
        }
    }

    /// Recompute the slip from the active row's input.
    fn generate(&mut self) {
        self.slip.clear();

        match &self.row {
            ActiveRow::None => {}
            ActiveRow::Chunk(input) => {
                let input = input.clone();
                self.generate_chunks(&input);
            }
            ActiveRow::Category(input) => {
                let input = input.clone();
                self.generate_categories(&input);
            }
        }
    }

    /// Chunk row: split the digit string into consecutive two-digit jodi
    /// pairs, each optionally followed by its mirror.
    ///
    /// Guard: non-empty digits of even length, positive amount. The mirror
    /// is attempted only when its forward chunk was new, and is itself
    /// skipped when already seen (so a palindromic chunk like "55"
    /// contributes once, and a later chunk never duplicates an earlier
    /// chunk's mirror).
    fn generate_chunks(&mut self, input: &ChunkInput) {
        let amount = match parse_amount(&input.amount_text) {
            Some(amount) if amount > Decimal::ZERO => amount,
            _ => return,
        };
        if input.digits.is_empty() || input.digits.len() % 2 != 0 {
            return;
        }

        let digits: Vec<char> = input.digits.chars().collect();
        let mut seen: Vec<Pair> = Vec::new();

        for chunk in digits.chunks_exact(2) {
            let pair = Pair::from_digits(chunk[0], chunk[1]);
            if seen.contains(&pair) {
                continue;
            }
            seen.push(pair.clone());
            self.slip
                .wagers
                .push(Wager::new(pair, amount, PairKind::Jodi));

            if input.mirror {
                let mirrored = Pair::from_digits(chunk[1], chunk[0]);
                if !seen.contains(&mirrored) {
                    seen.push(mirrored.clone());
                    self.slip
                        .wagers
                        .push(Wager::new(mirrored, amount, PairKind::Jodi));
                }
            }
        }

        self.slip.total = Decimal::from(self.slip.wagers.len()) * amount;
    }

    /// Category row: expand each digit into its A and/or B harup pair.
    ///
    /// Guard: non-empty digits, at least one checkbox, positive amount.
    /// Per digit the A pair is handled before the B pair; each category is
    /// marked seen independently even when its checkbox is off, so
    /// toggling one category never changes which pairs the other yields.
    fn generate_categories(&mut self, input: &CategoryInput) {
        let amount = match parse_amount(&input.amount_text) {
            Some(amount) if amount > Decimal::ZERO => amount,
            _ => return,
        };
        if input.digits.is_empty() || (!input.include_a && !input.include_b) {
            return;
        }

        let mut seen: Vec<Pair> = Vec::new();
        for digit in input.digits.chars() {
            for (category, included) in [
                (Category::Ander, input.include_a),
                (Category::Bahar, input.include_b),
            ] {
                let pair = Pair::category_from_digit(category, digit);
                if !seen.contains(&pair) {
                    if included {
                        self.slip
                            .wagers
                            .push(Wager::new(pair.clone(), amount, PairKind::Harup));
                    }
                    seen.push(pair);
                }
            }
        }

        self.slip.total = Decimal::from(self.slip.wagers.len()) * amount;
    }
}

impl Strategy for OpenPlayStrategy {
    fn name(&self) -> &'static str {
        "open_play"
    }

    fn slip(&self) -> &BetSlip {
        &self.slip
    }

    fn reset(&mut self) {
        self.row = ActiveRow::None;
        self.slip.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn pairs(strategy: &OpenPlayStrategy) -> Vec<&str> {
        strategy.slip().wagers.iter().map(|w| w.pair.as_str()).collect()
    }

    #[test]
    fn chunks_split_from_the_start() {
        let mut open = OpenPlayStrategy::new();
        open.set_chunk_digits("123456");
        open.set_chunk_amount("10");

        assert_eq!(pairs(&open), ["12", "34", "56"]);
        assert_eq!(open.slip().total, dec!(30));
    }

    #[test]
    fn odd_length_yields_nothing() {
        let mut open = OpenPlayStrategy::new();
        open.set_chunk_digits("12345");
        open.set_chunk_amount("10");

        assert!(open.slip().is_empty());
    }

    #[test]
    fn mirror_doubles_distinct_chunks() {
        let mut open = OpenPlayStrategy::new();
        open.set_chunk_digits("1234");
        open.set_chunk_amount("10");
        open.set_mirror(true);

        assert_eq!(pairs(&open), ["12", "21", "34", "43"]);
        assert_eq!(open.slip().total, dec!(40));
    }

    #[test]
    fn palindromic_chunk_contributes_once() {
        let mut open = OpenPlayStrategy::new();
        open.set_chunk_digits("5512");
        open.set_chunk_amount("10");
        open.set_mirror(true);

        assert_eq!(pairs(&open), ["55", "12", "21"]);
        assert_eq!(open.slip().total, dec!(30));
    }

    #[test]
    fn later_chunk_colliding_with_earlier_mirror_is_skipped() {
        // "21" is produced as the mirror of "12"; the literal "21" chunk
        // that follows is already seen, and its own mirror "12" is too.
        let mut open = OpenPlayStrategy::new();
        open.set_chunk_digits("1221");
        open.set_chunk_amount("10");
        open.set_mirror(true);

        assert_eq!(pairs(&open), ["12", "21"]);
        assert_eq!(open.slip().total, dec!(20));
    }

    #[test]
    fn duplicate_chunk_also_skips_its_mirror() {
        let mut open = OpenPlayStrategy::new();
        open.set_chunk_digits("1212");
        open.set_chunk_amount("10");
        open.set_mirror(true);

        assert_eq!(pairs(&open), ["12", "21"]);
    }

    #[test]
    fn category_row_a_only() {
        let mut open = OpenPlayStrategy::new();
        open.set_category_digits("07");
        open.set_include_a(true);
        open.set_category_amount("10");

        assert_eq!(pairs(&open), ["A0", "A7"]);
        assert_eq!(open.slip().total, dec!(20));
    }

    #[test]
    fn category_row_both_interleaves_a_then_b_per_digit() {
        let mut open = OpenPlayStrategy::new();
        open.set_category_digits("07");
        open.set_include_a(true);
        open.set_include_b(true);
        open.set_category_amount("10");

        assert_eq!(pairs(&open), ["A0", "B0", "A7", "B7"]);
        assert_eq!(open.slip().total, dec!(40));
    }

    #[test]
    fn repeated_digits_deduplicate_per_category() {
        let mut open = OpenPlayStrategy::new();
        open.set_category_digits("272");
        open.set_include_b(true);
        open.set_category_amount("5");

        assert_eq!(pairs(&open), ["B2", "B7"]);
        assert_eq!(open.slip().total, dec!(10));
    }

    #[test]
    fn no_checkbox_yields_nothing() {
        let mut open = OpenPlayStrategy::new();
        open.set_category_digits("07");
        open.set_category_amount("10");

        assert!(open.slip().is_empty());
    }

    #[test]
    fn switching_rows_resets_everything() {
        let mut open = OpenPlayStrategy::new();
        open.set_chunk_digits("12");
        open.set_chunk_amount("10");
        assert_eq!(open.slip().len(), 1);

        open.set_category_digits("5");

        // Chunk state is gone along with its wagers
        assert!(open.slip().is_empty());
        assert_eq!(open.slip().total, dec!(0));
        match open.active_row() {
            ActiveRow::Category(input) => {
                assert_eq!(input.digits, "5");
                assert!(!input.include_a && !input.include_b);
                assert!(input.amount_text.is_empty());
            }
            other => panic!("expected category row, got {other:?}"),
        }
    }

    #[test]
    fn switching_back_resets_category_state() {
        let mut open = OpenPlayStrategy::new();
        open.set_category_digits("07");
        open.set_include_a(true);
        open.set_category_amount("10");
        assert_eq!(open.slip().len(), 2);

        open.set_mirror(true);

        assert!(open.slip().is_empty());
        match open.active_row() {
            ActiveRow::Chunk(input) => {
                assert!(input.digits.is_empty());
                assert!(input.mirror);
            }
            other => panic!("expected chunk row, got {other:?}"),
        }
    }

    #[test]
    fn touching_the_active_row_does_not_reset_it() {
        let mut open = OpenPlayStrategy::new();
        open.set_chunk_digits("12");
        open.set_chunk_amount("10");
        open.set_mirror(true);

        match open.active_row() {
            ActiveRow::Chunk(input) => {
                assert_eq!(input.digits, "12");
                assert_eq!(input.amount_text, "10");
            }
            other => panic!("expected chunk row, got {other:?}"),
        }
        assert_eq!(pairs(&open), ["12", "21"]);
    }

    #[test]
    fn removal_uses_last_remaining_amount() {
        let mut open = OpenPlayStrategy::new();
        open.set_chunk_digits("123456");
        open.set_chunk_amount("10");
        assert_eq!(open.slip().len(), 3);

        open.remove(0);

        assert_eq!(pairs(&open), ["34", "56"]);
        // 2 remaining x the last remaining wager's amount
        assert_eq!(open.slip().total, dec!(20));
    }

    #[test]
    fn removing_everything_zeroes_the_total() {
        let mut open = OpenPlayStrategy::new();
        open.set_chunk_digits("12");
        open.set_chunk_amount("10");

        open.remove(0);

        assert!(open.slip().is_empty());
        assert_eq!(open.slip().total, dec!(0));
    }

    #[test]
    fn reset_clears_row_and_slip() {
        let mut open = OpenPlayStrategy::new();
        open.set_category_digits("07");
        open.set_include_a(true);
        open.set_category_amount("10");

        open.reset();

        assert_eq!(open.active_row(), &ActiveRow::None);
        assert!(open.slip().is_empty());
    }
}
