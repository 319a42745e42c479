use anyhow::Result;
use clap::{Parser, Subcommand};
use scopus_affil::{inspect, normalize, rules};

#[derive(Parser)]
#[command(name = "scopus-affil")]
#[command(about = "Normalize Scopus author affiliations into WoS-style address fields")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize affiliation strings from JSON-lines exports
    Normalize(normalize::NormalizeArgs),
    /// Parse a single affiliation string and print the result
    Inspect(inspect::InspectArgs),
    /// Write the built-in rule tables as editable JSON
    Rules(rules::RulesArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    match cli.command {
        Commands::Normalize(args) => normalize::run(args),
        Commands::Inspect(args) => inspect::run(args),
        Commands::Rules(args) => rules::run(args),
    }
}
