mod commands;
mod output;
mod telemetry;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "kyh",
    version,
    about = "KnowYourHazards: manual hazard entry and classification"
)]
struct Cli {
    /// Log filter (e.g. "debug", "kyh_core=trace"); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a hazard assessment on a JSON input record
    Assess {
        /// Path to the input JSON file, or "-" for stdin
        input_file: PathBuf,

        /// Predefined policy: standard (default) or basic
        #[arg(short, long, value_name = "NAME")]
        preset: Option<String>,

        /// Custom JSON policy file (overrides --preset)
        #[arg(long, value_name = "FILE")]
        policy: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Show score breakdown and per-stage reasoning
        #[arg(long)]
        verbose: bool,
    },
    /// Inspect scoring policies
    Policy {
        #[command(subcommand)]
        action: PolicyAction,
    },
}

#[derive(Subcommand)]
enum PolicyAction {
    /// List predefined policies
    List,
    /// Explain a policy in plain language
    Explain {
        /// Preset name (e.g., "standard")
        preset: String,
    },
    /// Validate a custom policy file
    Validate {
        /// Path to JSON policy file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = telemetry::init(&cli.log_level) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Assess {
            input_file,
            preset,
            policy,
            output,
            verbose,
        } => commands::assess::run(input_file, preset, policy, &output, verbose),
        Commands::Policy { action } => match action {
            PolicyAction::List => commands::policy::list(),
            PolicyAction::Explain { preset } => commands::policy::explain(&preset),
            PolicyAction::Validate { file } => commands::policy::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
