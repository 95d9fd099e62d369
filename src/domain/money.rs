//! Monetary types and amount parsing/formatting.
//!
//! Bet amounts are rupee values and must never be floating point.
//! All strategies parse user-entered amount text through [`parse_amount`];
//! display helpers mirror the platform's formatting conventions.

use rust_decimal::Decimal;

/// Bet amount represented as a Decimal for precision.
pub type Amount = Decimal;

/// Parse user-entered amount text.
///
/// Returns `None` for empty or non-numeric input. Strategies treat `None`
/// (and non-positive values) as "no bet yet", never as an error.
pub fn parse_amount(text: &str) -> Option<Amount> {
    text.trim().parse::<Decimal>().ok()
}

/// Format an amount with en-IN digit grouping: the last three integer
/// digits form one group, every group before that has two digits
/// (`1234567.5` -> `"12,34,567.5"`).
pub fn format_inr(amount: Amount) -> String {
    let text = amount.normalize().to_string();
    let (number, fraction) = match text.split_once('.') {
        Some((n, f)) => (n, Some(f)),
        None => (text.as_str(), None),
    };
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    let mut grouped = String::new();
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        grouped.push(ch);
        let remaining = len - i - 1;
        if remaining == 0 {
            break;
        }
        // Separator before the last 3 digits, then every 2 digits
        if remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0) {
            grouped.push(',');
        }
    }

    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Format an amount with exactly two decimal places (balance display).
pub fn format_two_digits(amount: Amount) -> String {
    format!("{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_amount_accepts_decimals() {
        assert_eq!(parse_amount("10"), Some(dec!(10)));
        assert_eq!(parse_amount(" 12.50 "), Some(dec!(12.50)));
    }

    #[test]
    fn parse_amount_rejects_garbage() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("1x"), None);
    }

    #[test]
    fn format_inr_groups_last_three_then_twos() {
        assert_eq!(format_inr(dec!(100)), "100");
        assert_eq!(format_inr(dec!(1000)), "1,000");
        assert_eq!(format_inr(dec!(123456)), "1,23,456");
        assert_eq!(format_inr(dec!(1234567.5)), "12,34,567.5");
    }

    #[test]
    fn format_inr_negative() {
        assert_eq!(format_inr(dec!(-123456)), "-1,23,456");
    }

    #[test]
    fn format_two_digits_pads_and_truncates() {
        assert_eq!(format_two_digits(dec!(5)), "5.00");
        assert_eq!(format_two_digits(dec!(12.5)), "12.50");
    }
}
