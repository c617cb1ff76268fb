//! Lineage CLI
//!
//! Command-line interface for the Lineage timeline rules and audit differ

use clap::{Parser, Subcommand, ValueEnum};
use lineage_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "lineage")]
#[command(about = "Lineage - family tree timeline checks and audit descriptions", long_about = None)]
struct Cli {
    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check a person draft's timeline
    Validate(commands::validate::ValidateArgs),
    /// Describe one audit log entry
    Describe(commands::describe::DescribeArgs),
}

fn main() {
    let cli = Cli::parse();

    init(match cli.log_format {
        LogFormat::Pretty => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let result = match cli.command {
        Commands::Validate(args) => commands::validate::execute(args),
        Commands::Describe(args) => commands::describe::execute(args).map(|()| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
