//! Lenient coercion of raw form fields into a strict [`TaxProfile`].
//!
//! The estimator is best-effort: a field the user left blank or filled with
//! something unparseable is treated as zero (one for the crypto quantity)
//! rather than rejected. That policy lives here, at the boundary, so the
//! calculators in `pit-core` only ever see validated numerics.

use pit_core::TaxProfile;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The raw, string-valued record a form or CLI hands over. Every amount
/// field may be blank, may carry comma thousands separators, and may carry
/// a leading naira sign.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxForm {
    pub employment_income: String,
    pub business_income: String,
    pub crypto_buy_price: String,
    pub crypto_sell_price: String,
    pub crypto_quantity: String,
    pub rent_paid: String,
    pub pension_contribution: String,
    pub nhf_contribution: String,
    pub life_insurance_premium: String,
    pub other_deductions: String,
    pub is_small_company: bool,
}

/// Strips formatting a user may have typed or pasted: whitespace, comma
/// thousands separators, and a naira sign.
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(['₦', ','], "")
}

/// Parses an amount field leniently.
///
/// Blank input and unparseable input both coerce to zero; negative amounts
/// coerce to zero as well, since every field is an amount of money paid or
/// earned. A warning is logged for anything non-empty that did not parse
/// cleanly.
pub fn parse_amount(s: &str) -> Decimal {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    match normalized.parse::<Decimal>() {
        Ok(value) if value >= Decimal::ZERO => value,
        Ok(value) => {
            warn!(input = %s, %value, "negative amount coerced to zero");
            Decimal::ZERO
        }
        Err(e) => {
            warn!(input = %s, "unparseable amount coerced to zero: {e}");
            Decimal::ZERO
        }
    }
}

/// Parses the crypto quantity field. Blank, zero, negative, or unparseable
/// quantities all fall back to a single unit.
pub fn parse_quantity(s: &str) -> Decimal {
    let parsed = parse_amount(s);
    if parsed.is_zero() { Decimal::ONE } else { parsed }
}

impl TaxForm {
    /// Coerces every field and produces the strict profile the calculators
    /// accept. Never fails.
    pub fn to_profile(&self) -> TaxProfile {
        TaxProfile {
            employment_income: parse_amount(&self.employment_income),
            business_income: parse_amount(&self.business_income),
            crypto_buy_price: parse_amount(&self.crypto_buy_price),
            crypto_sell_price: parse_amount(&self.crypto_sell_price),
            crypto_quantity: parse_quantity(&self.crypto_quantity),
            rent_paid: parse_amount(&self.rent_paid),
            pension_contribution: parse_amount(&self.pension_contribution),
            nhf_contribution: parse_amount(&self.nhf_contribution),
            life_insurance_premium: parse_amount(&self.life_insurance_premium),
            other_deductions: parse_amount(&self.other_deductions),
            is_small_company: self.is_small_company,
        }
    }
}
