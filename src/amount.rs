use serde_derive::{Deserialize, Serialize};

use crate::constants::{DECIMAL_SEPARATOR, THOUSANDS_SEPARATOR};

/// On-chain amount in minimal units (plancks). `u128` holds every
/// magnitude the chains can produce without loss.
#[derive(
    Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default, Hash, Serialize, Deserialize,
)]
pub struct Amount(pub u128);

impl Amount {
    pub fn add(&self, other: &Self) -> Self {
        Self(self.0 + other.0)
    }

    pub fn format(&self, decimals: u32, display_decimals: u32, ticker: Option<&str>) -> String {
        format_fixed_point(self.0, decimals, display_decimals, ticker)
    }
}

/// Format `value` as a fixed-point number with `decimals` implied
/// fractional digits, truncated (not rounded) to `display_decimals`,
/// with a thousands separator every 3 integer digits. Integer string
/// arithmetic throughout, exact for the full `u128` range.
pub fn format_fixed_point(
    value: u128,
    decimals: u32,
    display_decimals: u32,
    ticker: Option<&str>,
) -> String {
    let decimals = decimals as usize;
    let display_decimals = (display_decimals as usize).min(decimals);
    let mut digits = value.to_string();
    while digits.len() < decimals + 1 {
        digits.insert(0, '0');
    }
    digits.truncate(digits.len() - (decimals - display_decimals));
    let fraction = digits.split_off(digits.len() - display_decimals);
    let mut formatted = digits;
    let mut i = formatted.len() as i64 - 3;
    while i > 0 {
        formatted.insert(i as usize, THOUSANDS_SEPARATOR);
        i -= 3;
    }
    if !fraction.is_empty() {
        formatted.push(DECIMAL_SEPARATOR);
        formatted.push_str(&fraction);
    }
    if let Some(ticker) = ticker {
        formatted.push(' ');
        formatted.push_str(ticker);
    }
    formatted
}

#[cfg(test)]
mod test {
    use super::{format_fixed_point, Amount};

    #[test]
    fn truncates_instead_of_rounding() {
        assert_eq!(format_fixed_point(1_234_567_890_123, 12, 2, None), "1.23");
        assert_eq!(format_fixed_point(1_999_999_999_999, 12, 2, None), "1.99");
    }

    #[test]
    fn pads_small_values() {
        assert_eq!(format_fixed_point(123_456_789_012, 12, 2, None), "0.12");
        assert_eq!(format_fixed_point(0, 12, 2, None), "0.00");
    }

    #[test]
    fn whole_units() {
        assert_eq!(format_fixed_point(1_000_000_000_000, 12, 2, None), "1.00");
        assert_eq!(
            format_fixed_point(5_000_000_000_000, 12, 2, Some("KSM")),
            "5.00 KSM"
        );
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(
            format_fixed_point(1_234_567_890_123_456, 12, 2, None),
            "1,234.56"
        );
        assert_eq!(
            format_fixed_point(1_234_567_890_123_456_789, 12, 2, Some("DOT")),
            "1,234,567.89 DOT"
        );
    }

    #[test]
    fn zero_display_decimals_has_no_separator() {
        assert_eq!(format_fixed_point(1_234_567_890_123_456, 12, 0, None), "1,234");
    }

    #[test]
    fn exact_for_huge_values() {
        assert_eq!(
            format_fixed_point(u128::MAX, 12, 2, None),
            "340,282,366,920,938,463,463,374,607.43"
        );
    }

    #[test]
    fn amount_add() {
        assert_eq!(Amount(1).add(&Amount(2)), Amount(3));
    }
}
