//! Personal income tax under the pre-2025 rules.
//!
//! The legacy rules are not bracket-based: each income category is taxed at
//! its own flat rate and the results are summed. There is no deduction
//! concept and no small-company exemption, so taxable income is simply gross
//! income and the breakdown is always empty.
//!
//! | Category | Rate |
//! |----------|------|
//! | Employment income | 10% |
//! | Business income | 15% |
//! | Crypto gains | 10% |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pit_core::{TaxProfile, calculations::legacy};
//!
//! let profile = TaxProfile {
//!     employment_income: dec!(1_000_000),
//!     business_income: dec!(500_000),
//!     ..TaxProfile::default()
//! };
//!
//! let result = legacy::calculate(&profile);
//!
//! assert_eq!(result.total_tax, dec!(175_000));
//! assert_eq!(result.after_tax_income, dec!(1_325_000));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::warn;

use crate::calculations::common::{round_rate, round_whole};
use crate::models::{TaxAssessment, TaxProfile};

const SALARY_RATE: Decimal = dec!(0.10);
const BUSINESS_RATE: Decimal = dec!(0.15);
const CRYPTO_RATE: Decimal = dec!(0.10);

/// Calculates a legacy-regime assessment. Total; never fails.
pub fn calculate(profile: &TaxProfile) -> TaxAssessment {
    if profile.crypto_sell_price < profile.crypto_buy_price {
        warn!(
            buy = %profile.crypto_buy_price,
            sell = %profile.crypto_sell_price,
            "crypto position sold at a loss; gain clamped to zero"
        );
    }

    let crypto_gain = profile.crypto_gain();
    let gross_income = profile.employment_income + profile.business_income + crypto_gain;

    let tax = profile.employment_income * SALARY_RATE
        + profile.business_income * BUSINESS_RATE
        + crypto_gain * CRYPTO_RATE;

    let effective_rate = if gross_income > Decimal::ZERO {
        round_rate(tax / gross_income * Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    };

    TaxAssessment {
        gross_income,
        total_deductions: Decimal::ZERO,
        taxable_income: round_whole(gross_income),
        total_tax: round_whole(tax),
        after_tax_income: round_whole(gross_income - tax),
        effective_rate,
        breakdown: Vec::new(),
        exempt: false,
    }
}
