use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use residency_calc_core::relocation::{
    self, sensitivity_rows, RelocationInput, REFERENCE_INCOMES,
};
use residency_calc_core::residency::{classify_india_residency, classify_uae_residency};

use crate::input;

/// Arguments shared by `evaluate` and `validate`. Unset flags fall back to
/// the documented defaults, so a bare `resi evaluate` runs the stock plan.
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct EvaluateArgs {
    /// Days per year spent in the UAE (190–365)
    #[arg(long)]
    pub days_in_uae: Option<u32>,

    /// Days per year spent in India
    #[arg(long)]
    pub days_in_india: Option<u32>,

    /// Monthly cost of living in the UAE, in AED
    #[arg(long)]
    pub monthly_cost_uae: Option<Decimal>,

    /// Monthly cost of living in India, in INR
    #[arg(long)]
    pub monthly_cost_india: Option<Decimal>,

    /// AED to INR exchange rate
    #[arg(long, alias = "fx")]
    pub exchange_rate: Option<Decimal>,

    /// Annual flight spend, in INR
    #[arg(long)]
    pub flight_cost: Option<Decimal>,

    /// One-off relocation cost, in INR
    #[arg(long)]
    pub one_time_relocation_cost: Option<Decimal>,

    /// Effective Indian tax rate as a percentage (0–100)
    #[arg(long, alias = "tax-rate")]
    pub india_tax_rate_percent: Option<Decimal>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

impl EvaluateArgs {
    /// Resolve the input record: file, then piped stdin, then flags layered
    /// over the defaults.
    fn resolve(&self) -> Result<RelocationInput, Box<dyn std::error::Error>> {
        if let Some(ref path) = self.input {
            return input::file::read_json(path);
        }
        if let Some(record) = input::stdin::read_stdin()? {
            return Ok(record);
        }

        let mut record = RelocationInput::default();
        if let Some(v) = self.days_in_uae {
            record.days_in_uae = v;
        }
        if let Some(v) = self.days_in_india {
            record.days_in_india = v;
        }
        if let Some(v) = self.monthly_cost_uae {
            record.monthly_cost_uae = v;
        }
        if let Some(v) = self.monthly_cost_india {
            record.monthly_cost_india = v;
        }
        if let Some(v) = self.exchange_rate {
            record.exchange_rate = v;
        }
        if let Some(v) = self.flight_cost {
            record.flight_cost = v;
        }
        if let Some(v) = self.one_time_relocation_cost {
            record.one_time_relocation_cost = v;
        }
        if let Some(v) = self.india_tax_rate_percent {
            record.india_tax_rate_percent = v;
        }
        Ok(record)
    }
}

/// Arguments for day-count classification
#[derive(Args)]
pub struct StatusArgs {
    /// Days per year spent in India
    #[arg(long)]
    pub days_in_india: u32,

    /// Days per year spent in the UAE
    #[arg(long, default_value = "190")]
    pub days_in_uae: u32,
}

/// Arguments for the standalone sensitivity table
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct SensitivityArgs {
    /// Incremental annual cost of the relocation, in INR (may be negative)
    #[arg(long)]
    pub incremental_cost: Decimal,

    /// Effective Indian tax rate as a percentage (0–100)
    #[arg(long, alias = "tax-rate")]
    pub india_tax_rate_percent: Decimal,

    /// Reference annual incomes in INR (defaults to the standard ladder)
    #[arg(long, value_delimiter = ',')]
    pub incomes: Option<Vec<Decimal>>,
}

pub fn run_evaluate(args: EvaluateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let record = args.resolve()?;
    let result = relocation::evaluate(&record)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_validate(args: EvaluateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let record = args.resolve()?;
    let report = relocation::validate(&record);
    Ok(serde_json::to_value(report)?)
}

pub fn run_status(args: StatusArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let india = classify_india_residency(args.days_in_india);
    let uae = classify_uae_residency(args.days_in_uae);
    Ok(serde_json::json!({
        "days_in_india": args.days_in_india,
        "india_status": india,
        "india_status_label": india.to_string(),
        "days_in_uae": args.days_in_uae,
        "uae_status": uae,
        "uae_status_label": uae.to_string(),
    }))
}

pub fn run_sensitivity(args: SensitivityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if args.india_tax_rate_percent < Decimal::ZERO || args.india_tax_rate_percent > dec!(100) {
        return Err("--india-tax-rate-percent must be between 0 and 100".into());
    }

    let incomes = args
        .incomes
        .unwrap_or_else(|| REFERENCE_INCOMES.to_vec());
    let rows = sensitivity_rows(args.incremental_cost, args.india_tax_rate_percent, &incomes);
    Ok(serde_json::to_value(rows)?)
}
