//! Validate command
//!
//! Usage: lineage validate <PERSON_JSON> [--passing <FILE>] [--exclusivity <FILE>] [--config <FILE>]

use clap::Args;
use lineage_core::config::ValidatorConfig;
use lineage_core::errors::ExError;
use lineage_core::model::{PassingDraft, PersonDraft, SpouseExclusivityContext};
use lineage_core::rules::TimelineValidator;
use lineage_core::{log_op_end, log_op_error, log_op_start};
use std::path::PathBuf;
use std::time::Instant;

use super::{read_json, read_text};

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Person draft (JSON)
    pub person: PathBuf,

    /// Passing record draft (JSON)
    #[arg(long)]
    pub passing: Option<PathBuf>,

    /// Counterpart's existing relationships (JSON)
    #[arg(long)]
    pub exclusivity: Option<PathBuf>,

    /// Validator configuration (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute validate command
///
/// Returns `Ok(false)` when the draft has issues.
pub fn execute(args: ValidateArgs) -> Result<bool, Box<dyn std::error::Error>> {
    let start = Instant::now();
    log_op_start!("cli_validate", person = %args.person.display());

    let config = match &args.config {
        Some(path) => {
            let loaded = read_text(path).and_then(|text| {
                ValidatorConfig::from_toml_str(&text).map_err(ExError::from)
            });
            match loaded {
                Ok(config) => config,
                Err(err) => {
                    log_op_error!(
                        "cli_validate",
                        err.clone(),
                        duration_ms = start.elapsed().as_millis() as u64
                    );
                    return Err(err.into());
                }
            }
        }
        None => ValidatorConfig::default(),
    };

    let person: PersonDraft = read_json(&args.person)?;
    let passing: Option<PassingDraft> = args.passing.as_deref().map(read_json).transpose()?;
    let exclusivity: Option<SpouseExclusivityContext> =
        args.exclusivity.as_deref().map(read_json).transpose()?;

    let validator = TimelineValidator::new(config);
    let result = validator.validate(&person, passing.as_ref(), exclusivity.as_ref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.is_valid() {
        println!("valid");
    } else {
        for issue in result.issues() {
            println!("{}", issue);
        }
    }

    log_op_end!(
        "cli_validate",
        duration_ms = start.elapsed().as_millis() as u64,
        valid = result.is_valid()
    );
    Ok(result.is_valid())
}
