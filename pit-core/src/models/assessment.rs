use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of the reform breakdown: how much income fell in a bracket and
/// the tax it attracted there.
///
/// `amount` and `tax` are left unrounded so the breakdown sums exactly to
/// the taxable income and the unrounded total; rounding happens once, on the
/// assessment totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketLine {
    /// Half-open range label, e.g. `"₦800,000 - ₦3,000,000"`.
    pub range: String,
    /// Income taxed in this bracket.
    pub amount: Decimal,
    /// Marginal rate as a fraction (`0.15`, not `15`).
    pub rate: Decimal,
    /// Tax owed in this bracket (`amount * rate`).
    pub tax: Decimal,
}

/// The result of one tax calculation.
///
/// Serialized field names are the wire contract for any collaborator that
/// stores or exports results verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxAssessment {
    pub gross_income: Decimal,
    pub total_deductions: Decimal,
    /// Gross income net of deductions, floored at zero and rounded to whole
    /// naira. Zero for an exempt small company.
    pub taxable_income: Decimal,
    /// Rounded to whole naira.
    pub total_tax: Decimal,
    /// Rounded to whole naira.
    pub after_tax_income: Decimal,
    /// Total tax as a percentage of gross income, two decimal places.
    pub effective_rate: Decimal,
    /// Per-bracket lines, reform regime only. Empty for legacy and exempt
    /// results.
    pub breakdown: Vec<BracketLine>,
    /// True when the small-company exemption short-circuited the schedule.
    pub exempt: bool,
}
