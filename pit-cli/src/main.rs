use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pit_cli::form::TaxForm;
use pit_cli::render;
use pit_cli::store::{DraftStore, JsonFileStore, SavedAssessment};
use pit_core::Regime;
use tracing_subscriber::EnvFilter;

/// Estimate Nigerian personal income tax under the 2026 reform rules or the
/// pre-2025 legacy rules.
///
/// Amount flags accept raw numbers or formatted input ("2,000,000",
/// "₦150000"); anything blank or unparseable is treated as zero. Omitted
/// flags fall back to the stored draft when --from-draft is given,
/// otherwise to zero.
#[derive(Parser, Debug)]
#[command(name = "pit")]
#[command(version, about, long_about = None)]
struct Args {
    /// Tax regime to apply: reform (2026) or legacy (pre-2025)
    #[arg(short, long, default_value = "reform")]
    regime: Regime,

    /// Annual employment income
    #[arg(long)]
    employment: Option<String>,

    /// Annual business income
    #[arg(long)]
    business: Option<String>,

    /// Crypto purchase price per unit
    #[arg(long)]
    crypto_buy: Option<String>,

    /// Crypto sale price per unit
    #[arg(long)]
    crypto_sell: Option<String>,

    /// Crypto quantity (defaults to 1)
    #[arg(long)]
    crypto_qty: Option<String>,

    /// Annual rent paid (reported, not deductible)
    #[arg(long)]
    rent: Option<String>,

    /// Pension contribution
    #[arg(long)]
    pension: Option<String>,

    /// National Housing Fund contribution
    #[arg(long)]
    nhf: Option<String>,

    /// Life insurance premium
    #[arg(long)]
    life_insurance: Option<String>,

    /// Other allowable deductions
    #[arg(long)]
    other_deductions: Option<String>,

    /// Claim the small-company exemption
    #[arg(long, default_value_t = false)]
    small_company: bool,

    /// Start from the stored draft; explicit flags override draft fields
    #[arg(long, default_value_t = false)]
    from_draft: bool,

    /// Emit the assessment as JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Append the assessment to the store
    #[arg(long, default_value_t = false)]
    save: bool,

    /// List saved assessments and exit
    #[arg(long, default_value_t = false)]
    list: bool,

    /// Path to the draft/assessment store
    #[arg(long, default_value = "pit-drafts.json")]
    store: PathBuf,
}

impl Args {
    /// Builds the form, layering explicit flags over `base` (the stored
    /// draft, or an empty form).
    fn to_form(&self, base: TaxForm) -> TaxForm {
        fn pick(flag: &Option<String>, draft: String) -> String {
            flag.clone().unwrap_or(draft)
        }

        TaxForm {
            employment_income: pick(&self.employment, base.employment_income),
            business_income: pick(&self.business, base.business_income),
            crypto_buy_price: pick(&self.crypto_buy, base.crypto_buy_price),
            crypto_sell_price: pick(&self.crypto_sell, base.crypto_sell_price),
            crypto_quantity: pick(&self.crypto_qty, base.crypto_quantity),
            rent_paid: pick(&self.rent, base.rent_paid),
            pension_contribution: pick(&self.pension, base.pension_contribution),
            nhf_contribution: pick(&self.nhf, base.nhf_contribution),
            life_insurance_premium: pick(&self.life_insurance, base.life_insurance_premium),
            other_deductions: pick(&self.other_deductions, base.other_deductions),
            is_small_company: self.small_company || base.is_small_company,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let store = JsonFileStore::new(&args.store);

    if args.list {
        let saved = store
            .list_assessments()
            .with_context(|| format!("failed to read store: {}", store.path().display()))?;
        println!("{}", render::saved_assessments_table(&saved));
        return Ok(());
    }

    let base = if args.from_draft {
        store
            .load_draft()
            .with_context(|| format!("failed to read store: {}", store.path().display()))?
            .unwrap_or_default()
    } else {
        TaxForm::default()
    };

    let form = args.to_form(base);
    let profile = form.to_profile();
    let assessment = pit_core::calculate(&profile, args.regime);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        print!("{}", render::assessment_report(&assessment, args.regime));
    }

    store
        .save_draft(&form)
        .with_context(|| format!("failed to save draft: {}", store.path().display()))?;

    if args.save {
        let saved = SavedAssessment::new(args.regime, assessment);
        store
            .save_assessment(&saved)
            .with_context(|| format!("failed to save assessment: {}", store.path().display()))?;
    }

    Ok(())
}
