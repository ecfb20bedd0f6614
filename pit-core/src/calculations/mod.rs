//! Regime calculators for the personal income tax estimator.
//!
//! Each regime is an independent pure function over a [`TaxProfile`]; both
//! are total (no failure path) and side-effect free, so they are safe to
//! call concurrently from any number of threads.

pub mod common;
pub mod legacy;
pub mod reform;

use crate::models::{Regime, TaxAssessment, TaxProfile};

/// Calculates an assessment for `profile` under the selected regime.
///
/// ```
/// use rust_decimal_macros::dec;
/// use pit_core::{Regime, TaxProfile, calculate};
///
/// let profile = TaxProfile {
///     employment_income: dec!(2_000_000),
///     ..TaxProfile::default()
/// };
///
/// assert_eq!(calculate(&profile, Regime::Reform).total_tax, dec!(180_000));
/// assert_eq!(calculate(&profile, Regime::Legacy).total_tax, dec!(200_000));
/// ```
pub fn calculate(profile: &TaxProfile, regime: Regime) -> TaxAssessment {
    match regime {
        Regime::Reform => reform::calculate(profile),
        Regime::Legacy => legacy::calculate(profile),
    }
}
