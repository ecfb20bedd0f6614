mod assessment;
mod regime;
mod tax_bracket;
mod tax_profile;

pub use assessment::{BracketLine, TaxAssessment};
pub use regime::{ParseRegimeError, Regime};
pub use tax_bracket::{TaxBracket, format_naira, reform_brackets};
pub use tax_profile::TaxProfile;
