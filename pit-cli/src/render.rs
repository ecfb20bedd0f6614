//! Terminal rendering of assessments.

use pit_core::{Regime, TaxAssessment, format_naira};
use rust_decimal::Decimal;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::store::SavedAssessment;

fn naira(value: Decimal) -> String {
    format!("₦{}", format_naira(value))
}

fn percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

/// Row for the per-bracket breakdown table.
#[derive(Debug, Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Band")]
    range: String,

    #[tabled(rename = "Amount")]
    amount: String,

    #[tabled(rename = "Rate")]
    rate: String,

    #[tabled(rename = "Tax")]
    tax: String,
}

/// Row for the saved-assessments listing.
#[derive(Debug, Tabled)]
struct SavedRow {
    #[tabled(rename = "Saved At")]
    saved_at: String,

    #[tabled(rename = "Regime")]
    regime: String,

    #[tabled(rename = "Total Tax")]
    total_tax: String,

    #[tabled(rename = "After-Tax Income")]
    after_tax_income: String,
}

fn right_aligned(table: &mut Table) -> String {
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string()
}

/// Renders a full assessment: headline figures, then the bracket breakdown
/// when there is one.
pub fn assessment_report(assessment: &TaxAssessment, regime: Regime) -> String {
    let mut out = String::new();

    out.push_str(&format!("Regime:            {regime}\n"));
    out.push_str(&format!(
        "Gross income:      {}\n",
        naira(assessment.gross_income)
    ));
    out.push_str(&format!(
        "Total deductions:  {}\n",
        naira(assessment.total_deductions)
    ));
    out.push_str(&format!(
        "Taxable income:    {}\n",
        naira(assessment.taxable_income)
    ));
    out.push_str(&format!(
        "Total tax:         {}\n",
        naira(assessment.total_tax)
    ));
    out.push_str(&format!(
        "After-tax income:  {}\n",
        naira(assessment.after_tax_income)
    ));
    out.push_str(&format!(
        "Effective rate:    {}%\n",
        assessment.effective_rate
    ));

    if assessment.exempt {
        out.push_str("\nSmall-company exemption applies: no tax is payable.\n");
    }

    if !assessment.breakdown.is_empty() {
        let rows: Vec<BreakdownRow> = assessment
            .breakdown
            .iter()
            .map(|line| BreakdownRow {
                range: line.range.clone(),
                amount: naira(line.amount),
                rate: percent(line.rate),
                tax: naira(line.tax),
            })
            .collect();
        out.push('\n');
        out.push_str(&right_aligned(&mut Table::new(rows)));
        out.push('\n');
    }

    out
}

/// Renders the saved-assessments listing, newest last.
pub fn saved_assessments_table(saved: &[SavedAssessment]) -> String {
    if saved.is_empty() {
        return "No saved assessments.".to_string();
    }

    let rows: Vec<SavedRow> = saved
        .iter()
        .map(|s| SavedRow {
            saved_at: s.saved_at.format("%Y-%m-%d %H:%M").to_string(),
            regime: s.regime.to_string(),
            total_tax: naira(s.total_tax),
            after_tax_income: naira(s.after_tax_income),
        })
        .collect();

    right_aligned(&mut Table::new(rows))
}
