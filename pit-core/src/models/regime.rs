use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string does not name a known tax regime.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown tax regime '{0}' (expected 'reform' or 'legacy')")]
pub struct ParseRegimeError(String);

/// The set of tax rules applied to a profile.
///
/// The two regimes have genuinely different shapes: reform is a progressive
/// bracket schedule with deductions, legacy is flat per-category rates with
/// no deduction concept. Each dispatches to its own calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    /// The 2026 reform rules: progressive brackets, statutory deductions,
    /// small-company exemption.
    Reform,
    /// The pre-2025 rules: flat rates per income category, no deductions.
    Legacy,
}

impl Regime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reform => "reform",
            Self::Legacy => "legacy",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Regime {
    type Err = ParseRegimeError;

    /// Case-insensitive. Also accepts the year aliases the original form
    /// used as its toggle values ("2026" for reform, "2025" for legacy).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reform" | "2026" => Ok(Self::Reform),
            "legacy" | "2025" => Ok(Self::Legacy),
            _ => Err(ParseRegimeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_canonical_names() {
        assert_eq!("reform".parse::<Regime>().unwrap(), Regime::Reform);
        assert_eq!("legacy".parse::<Regime>().unwrap(), Regime::Legacy);
    }

    #[test]
    fn parses_year_aliases_and_mixed_case() {
        assert_eq!("2026".parse::<Regime>().unwrap(), Regime::Reform);
        assert_eq!("2025".parse::<Regime>().unwrap(), Regime::Legacy);
        assert_eq!(" Reform ".parse::<Regime>().unwrap(), Regime::Reform);
    }

    #[test]
    fn rejects_unknown_regime() {
        assert!("flat".parse::<Regime>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for regime in [Regime::Reform, Regime::Legacy] {
            assert_eq!(regime.to_string().parse::<Regime>().unwrap(), regime);
        }
    }
}
