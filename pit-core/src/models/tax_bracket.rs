use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A single marginal rate band of the reform schedule.
///
/// `upper_bound` is the cumulative income threshold up to which `rate`
/// applies, not the width of the band. `None` marks the unbounded top band.
/// A schedule is a list of brackets sorted ascending by bound, partitioning
/// `[0, ∞)` with no gaps or overlaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    /// Human-readable label for the half-open range this bracket covers,
    /// given the upper bound of the bracket below it.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use pit_core::TaxBracket;
    ///
    /// let band = TaxBracket { upper_bound: Some(dec!(3_000_000)), rate: dec!(0.15) };
    /// assert_eq!(band.range_label(dec!(800_000)), "₦800,000 - ₦3,000,000");
    ///
    /// let top = TaxBracket { upper_bound: None, rate: dec!(0.25) };
    /// assert_eq!(top.range_label(dec!(50_000_000)), "₦50,000,000 - ∞");
    /// ```
    pub fn range_label(&self, previous_bound: Decimal) -> String {
        let start = if previous_bound.is_zero() {
            "0".to_string()
        } else {
            format!("₦{}", format_naira(previous_bound))
        };
        let end = match self.upper_bound {
            Some(bound) => format!("₦{}", format_naira(bound)),
            None => "∞".to_string(),
        };
        format!("{start} - {end}")
    }
}

/// The 2026 reform personal income tax schedule.
///
/// Fixed statutory constants; bounds are cumulative upper thresholds.
pub fn reform_brackets() -> Vec<TaxBracket> {
    vec![
        TaxBracket { upper_bound: Some(dec!(800_000)), rate: Decimal::ZERO },
        TaxBracket { upper_bound: Some(dec!(3_000_000)), rate: dec!(0.15) },
        TaxBracket { upper_bound: Some(dec!(12_000_000)), rate: dec!(0.18) },
        TaxBracket { upper_bound: Some(dec!(25_000_000)), rate: dec!(0.21) },
        TaxBracket { upper_bound: Some(dec!(50_000_000)), rate: dec!(0.23) },
        TaxBracket { upper_bound: None, rate: dec!(0.25) },
    ]
}

/// Formats a non-negative amount with comma thousands separators.
///
/// The fractional part, when present, is kept verbatim after the grouped
/// integer digits (`1234567.5` -> `"1,234,567.5"`).
pub fn format_naira(value: Decimal) -> String {
    let text = value.normalize().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    match frac_part {
        Some(f) => format!("{grouped}.{f}"),
        None => grouped,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn schedule_is_sorted_with_unbounded_tail() {
        let brackets = reform_brackets();

        assert_eq!(brackets.len(), 6);
        assert!(brackets.last().unwrap().upper_bound.is_none());

        let bounds: Vec<Decimal> = brackets
            .iter()
            .filter_map(|b| b.upper_bound)
            .collect();
        let mut sorted = bounds.clone();
        sorted.sort();
        assert_eq!(bounds, sorted);
    }

    #[test]
    fn first_band_is_tax_free() {
        let brackets = reform_brackets();

        assert_eq!(brackets[0].upper_bound, Some(dec!(800_000)));
        assert_eq!(brackets[0].rate, Decimal::ZERO);
    }

    #[test]
    fn top_rate_is_twenty_five_percent() {
        let brackets = reform_brackets();

        assert_eq!(brackets.last().unwrap().rate, dec!(0.25));
    }

    #[test]
    fn range_label_starts_at_bare_zero() {
        let brackets = reform_brackets();

        assert_eq!(brackets[0].range_label(Decimal::ZERO), "0 - ₦800,000");
    }

    #[test]
    fn format_naira_groups_thousands() {
        assert_eq!(format_naira(dec!(0)), "0");
        assert_eq!(format_naira(dec!(999)), "999");
        assert_eq!(format_naira(dec!(1000)), "1,000");
        assert_eq!(format_naira(dec!(12_000_000)), "12,000,000");
    }

    #[test]
    fn format_naira_keeps_fraction_after_grouping() {
        assert_eq!(format_naira(dec!(1234567.5)), "1,234,567.5");
    }
}
