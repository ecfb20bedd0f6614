//! Personal income tax under the 2026 reform rules.
//!
//! The reform schedule is progressive: taxable income is walked through the
//! statutory brackets and each slice is taxed at that bracket's marginal
//! rate. Statutory deductions (pension, NHF, life insurance, other) come off
//! gross income first, uncapped. Qualifying small companies are fully exempt
//! and skip the schedule entirely.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pit_core::{TaxProfile, calculations::reform};
//!
//! let profile = TaxProfile {
//!     employment_income: dec!(10_000_000),
//!     ..TaxProfile::default()
//! };
//!
//! let result = reform::calculate(&profile);
//!
//! // 0% on the first 800k, 15% to 3m, 18% on the rest.
//! assert_eq!(result.total_tax, dec!(1_590_000));
//! assert_eq!(result.after_tax_income, dec!(8_410_000));
//! assert_eq!(result.effective_rate, dec!(15.90));
//! assert_eq!(result.breakdown.len(), 3);
//! ```

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::{round_rate, round_whole};
use crate::models::{BracketLine, TaxAssessment, TaxProfile, reform_brackets};

/// Calculates a reform-regime assessment.
///
/// Total over its input domain: there is no failure path. Negative derived
/// amounts are clamped before use and the effective-rate division is guarded
/// against zero gross income.
pub fn calculate(profile: &TaxProfile) -> TaxAssessment {
    if profile.crypto_sell_price < profile.crypto_buy_price {
        warn!(
            buy = %profile.crypto_buy_price,
            sell = %profile.crypto_sell_price,
            "crypto position sold at a loss; gain clamped to zero"
        );
    }

    let gross_income = profile.gross_income();
    let total_deductions = profile.reform_deductions();

    // Statutory exemption for qualifying small companies: no tax is payable
    // regardless of income level, and the schedule is never consulted.
    if profile.is_small_company {
        return TaxAssessment {
            gross_income,
            total_deductions,
            taxable_income: Decimal::ZERO,
            total_tax: Decimal::ZERO,
            after_tax_income: round_whole(gross_income - total_deductions),
            effective_rate: Decimal::ZERO,
            breakdown: Vec::new(),
            exempt: true,
        };
    }

    if total_deductions > gross_income {
        warn!(
            %gross_income,
            %total_deductions,
            "deductions exceed gross income; taxable income floored at zero"
        );
    }
    let taxable_income = (gross_income - total_deductions).max(Decimal::ZERO);

    let (tax, breakdown) = apply_brackets(taxable_income);

    let effective_rate = if gross_income > Decimal::ZERO {
        round_rate(tax / gross_income * Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    };

    TaxAssessment {
        gross_income,
        total_deductions,
        taxable_income: round_whole(taxable_income),
        total_tax: round_whole(tax),
        after_tax_income: round_whole(gross_income - tax),
        effective_rate,
        breakdown,
        exempt: false,
    }
}

/// Walks the reform schedule, taxing each slice of `taxable_income` at its
/// bracket's marginal rate.
///
/// Returns the unrounded total tax and one line per bracket that actually
/// received income; the line amounts sum exactly to `taxable_income`.
fn apply_brackets(taxable_income: Decimal) -> (Decimal, Vec<BracketLine>) {
    let mut tax = Decimal::ZERO;
    let mut breakdown = Vec::new();
    let mut previous_bound = Decimal::ZERO;

    for bracket in reform_brackets() {
        // Brackets above the taxable income would contribute zero; stop.
        if taxable_income <= previous_bound {
            break;
        }

        let cap = bracket.upper_bound.unwrap_or(taxable_income);
        let amount = taxable_income.min(cap) - previous_bound;
        let bracket_tax = amount * bracket.rate;
        tax += bracket_tax;

        if amount > Decimal::ZERO {
            breakdown.push(BracketLine {
                range: bracket.range_label(previous_bound),
                amount,
                rate: bracket.rate,
                tax: bracket_tax,
            });
        }

        previous_bound = cap;
    }

    (tax, breakdown)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn employment_only(income: Decimal) -> TaxProfile {
        TaxProfile {
            employment_income: income,
            ..TaxProfile::default()
        }
    }

    #[test]
    fn income_inside_free_band_owes_nothing() {
        let result = calculate(&employment_only(dec!(400_000)));

        assert_eq!(result.taxable_income, dec!(400_000));
        assert_eq!(result.total_tax, Decimal::ZERO);
        assert_eq!(result.after_tax_income, dec!(400_000));
        assert_eq!(result.effective_rate, Decimal::ZERO);
        assert!(!result.exempt);
    }

    #[test]
    fn two_million_is_taxed_only_above_the_free_band() {
        let result = calculate(&employment_only(dec!(2_000_000)));

        // (2,000,000 - 800,000) x 15%
        assert_eq!(result.total_tax, dec!(180_000));
        assert_eq!(result.after_tax_income, dec!(1_820_000));
        assert_eq!(result.effective_rate, dec!(9.00));
    }

    #[test]
    fn ten_million_spans_three_brackets() {
        let result = calculate(&employment_only(dec!(10_000_000)));

        assert_eq!(result.total_tax, dec!(1_590_000));
        assert_eq!(result.breakdown.len(), 3);
        assert_eq!(result.breakdown[1].tax, dec!(330_000));
        assert_eq!(result.breakdown[2].tax, dec!(1_260_000));
    }

    #[test]
    fn sixty_million_spans_all_six_brackets() {
        let result = calculate(&employment_only(dec!(60_000_000)));

        let amounts: Vec<Decimal> = result.breakdown.iter().map(|l| l.amount).collect();
        assert_eq!(
            amounts,
            vec![
                dec!(800_000),
                dec!(2_200_000),
                dec!(9_000_000),
                dec!(13_000_000),
                dec!(25_000_000),
                dec!(10_000_000),
            ]
        );
        assert_eq!(amounts.iter().sum::<Decimal>(), dec!(60_000_000));
        assert_eq!(result.total_tax, dec!(12_930_000));
    }

    #[test]
    fn breakdown_amounts_sum_to_taxable_income() {
        for income in [dec!(1), dec!(800_000), dec!(3_000_001), dec!(47_500_123)] {
            let result = calculate(&employment_only(income));

            let sum: Decimal = result.breakdown.iter().map(|l| l.amount).sum();
            assert_eq!(sum, result.taxable_income, "income {income}");
        }
    }

    #[test]
    fn breakdown_carries_half_open_range_labels() {
        let result = calculate(&employment_only(dec!(2_000_000)));

        assert_eq!(result.breakdown[0].range, "0 - ₦800,000");
        assert_eq!(result.breakdown[1].range, "₦800,000 - ₦3,000,000");
    }

    #[test]
    fn top_band_label_is_unbounded() {
        let result = calculate(&employment_only(dec!(60_000_000)));

        assert_eq!(result.breakdown[5].range, "₦50,000,000 - ∞");
    }

    #[test]
    fn deductions_reduce_taxable_income() {
        let profile = TaxProfile {
            employment_income: dec!(2_000_000),
            pension_contribution: dec!(300_000),
            nhf_contribution: dec!(100_000),
            life_insurance_premium: dec!(50_000),
            other_deductions: dec!(50_000),
            ..TaxProfile::default()
        };

        let result = calculate(&profile);

        assert_eq!(result.total_deductions, dec!(500_000));
        assert_eq!(result.taxable_income, dec!(1_500_000));
        // (1,500,000 - 800,000) x 15%
        assert_eq!(result.total_tax, dec!(105_000));
    }

    #[test]
    fn rent_paid_does_not_reduce_taxable_income() {
        let with_rent = TaxProfile {
            employment_income: dec!(2_000_000),
            rent_paid: dec!(1_000_000),
            ..TaxProfile::default()
        };

        let result = calculate(&with_rent);

        assert_eq!(result.total_deductions, Decimal::ZERO);
        assert_eq!(result.total_tax, dec!(180_000));
    }

    #[test]
    fn deductions_exceeding_income_floor_taxable_at_zero() {
        let profile = TaxProfile {
            employment_income: dec!(500_000),
            pension_contribution: dec!(800_000),
            ..TaxProfile::default()
        };

        let result = calculate(&profile);

        assert_eq!(result.taxable_income, Decimal::ZERO);
        assert_eq!(result.total_tax, Decimal::ZERO);
        assert!(result.breakdown.is_empty());
        assert_eq!(result.after_tax_income, dec!(500_000));
    }

    #[test]
    fn small_company_is_exempt_at_any_income() {
        let profile = TaxProfile {
            employment_income: dec!(80_000_000),
            pension_contribution: dec!(1_000_000),
            is_small_company: true,
            ..TaxProfile::default()
        };

        let result = calculate(&profile);

        assert!(result.exempt);
        assert_eq!(result.total_tax, Decimal::ZERO);
        assert_eq!(result.taxable_income, Decimal::ZERO);
        assert_eq!(result.after_tax_income, dec!(79_000_000));
        assert!(result.breakdown.is_empty());
    }

    #[test]
    fn crypto_loss_contributes_nothing() {
        let profile = TaxProfile {
            employment_income: dec!(2_000_000),
            crypto_buy_price: dec!(500_000),
            crypto_sell_price: dec!(300_000),
            crypto_quantity: dec!(2),
            ..TaxProfile::default()
        };

        let result = calculate(&profile);

        assert_eq!(result.gross_income, dec!(2_000_000));
        assert_eq!(result.total_tax, dec!(180_000));
    }

    #[test]
    fn zero_income_yields_all_zero_result() {
        let result = calculate(&TaxProfile::default());

        assert_eq!(result.gross_income, Decimal::ZERO);
        assert_eq!(result.total_tax, Decimal::ZERO);
        assert_eq!(result.effective_rate, Decimal::ZERO);
        assert!(result.breakdown.is_empty());
    }

    #[test]
    fn tax_never_decreases_as_income_grows() {
        let mut previous = Decimal::ZERO;
        for step in 1..=120 {
            let income = Decimal::from(step) * dec!(500_000);
            let result = calculate(&employment_only(income));

            assert!(
                result.total_tax >= previous,
                "tax dropped at income {income}"
            );
            previous = result.total_tax;
        }
    }

    #[test]
    fn identical_input_yields_identical_output() {
        let profile = TaxProfile {
            employment_income: dec!(7_345_678),
            business_income: dec!(1_234_567),
            pension_contribution: dec!(400_000),
            ..TaxProfile::default()
        };

        assert_eq!(calculate(&profile), calculate(&profile));
    }
}
