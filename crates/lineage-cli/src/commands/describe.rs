//! Describe command
//!
//! Usage: lineage describe <AUDIT_ENTRY_JSON> [--names <FILE>]

use clap::Args;
use lineage_core::diff::{describe, NameDirectory};
use lineage_core::model::AuditEntry;
use std::collections::HashMap;
use std::path::PathBuf;

use super::read_json;

#[derive(Debug, Args)]
pub struct DescribeArgs {
    /// Audit log entry (JSON)
    pub entry: PathBuf,

    /// Person names keyed by id (JSON object)
    #[arg(long)]
    pub names: Option<PathBuf>,

    /// Print the description as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute describe command
pub fn execute(args: DescribeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let entry: AuditEntry = read_json(&args.entry)?;

    let names: NameDirectory = match &args.names {
        Some(path) => {
            let raw: HashMap<String, String> = read_json(path)?;
            raw.into_iter().map(|(id, name)| (id.into(), name)).collect()
        }
        None => NameDirectory::new(),
    };
    tracing::debug!(known_names = names.len(), "name directory loaded");

    let description = describe(&entry, &names);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&description)?);
        return Ok(());
    }

    if let Some(summary) = &description.summary {
        println!("{}", summary);
    }
    for change in &description.changes {
        println!("  {}", change);
    }
    if description.summary.is_none() && description.changes.is_empty() {
        println!("(no changes)");
    }
    Ok(())
}
