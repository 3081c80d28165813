//! `sassbridge`: inspect how host values map onto tagged preprocessor values.

mod commands;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::Op;
use logging::LoggingConfig;

#[derive(Parser, Debug)]
#[command(name = "sassbridge")]
#[command(about = "Cast values and do unit arithmetic the way preprocessor functions see them")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Cast a JSON document to a tagged value and print it
    Cast {
        json: String,

        /// Print the map-key fingerprint instead of the rendering
        #[arg(long)]
        fingerprint: bool,
    },

    /// Cast a JSON document to a tagged value and back
    Roundtrip { json: String },

    /// Dimension arithmetic, e.g. `calc 10px div 2s`
    Calc {
        lhs: String,
        #[arg(value_enum)]
        op: Op,
        rhs: String,
    },

    /// Normalize a unit expression such as `px*em/px`
    Unit { expr: String },
}

fn run(command: Commands) -> Result<String> {
    match command {
        Commands::Cast { json, fingerprint } => commands::cast(&json, fingerprint),
        Commands::Roundtrip { json } => commands::roundtrip(&json),
        Commands::Calc { lhs, op, rhs } => commands::calc(&lhs, op, &rhs),
        Commands::Unit { expr } => Ok(commands::unit(&expr)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(&LoggingConfig {
        level: cli.log_level.clone(),
        json: cli.json_logs,
    })?;

    let output = run(cli.command)?;
    println!("{output}");
    Ok(())
}
