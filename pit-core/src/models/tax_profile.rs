use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One taxpayer's income and deduction figures for a single calculation.
///
/// All fields are already-validated, non-negative amounts in whole naira
/// (fractional naira is accepted but unusual). Lenient coercion of raw form
/// strings into this type is the caller's job; the calculators only ever see
/// strict numerics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxProfile {
    pub employment_income: Decimal,
    pub business_income: Decimal,

    pub crypto_buy_price: Decimal,
    pub crypto_sell_price: Decimal,
    /// Units bought/sold. Zero is treated as one unit, matching the form's
    /// behavior when the quantity field is left blank.
    pub crypto_quantity: Decimal,

    /// Collected for reporting but not deductible under either regime.
    pub rent_paid: Decimal,
    pub pension_contribution: Decimal,
    pub nhf_contribution: Decimal,
    pub life_insurance_premium: Decimal,
    pub other_deductions: Decimal,

    /// Qualifying small companies are fully exempt under the reform rules.
    pub is_small_company: bool,
}

impl TaxProfile {
    /// Realized crypto gain, floored at zero. A position sold at a loss
    /// contributes nothing to gross income rather than offsetting it.
    pub fn crypto_gain(&self) -> Decimal {
        let quantity = if self.crypto_quantity.is_zero() {
            Decimal::ONE
        } else {
            self.crypto_quantity
        };
        let gain = (self.crypto_sell_price - self.crypto_buy_price) * quantity;
        gain.max(Decimal::ZERO)
    }

    /// Employment + business + clamped crypto gain.
    pub fn gross_income(&self) -> Decimal {
        self.employment_income + self.business_income + self.crypto_gain()
    }

    /// Total statutory deductions under the reform regime. Uncapped; rent
    /// paid is not among them.
    pub fn reform_deductions(&self) -> Decimal {
        self.pension_contribution
            + self.nhf_contribution
            + self.life_insurance_premium
            + self.other_deductions
    }
}
