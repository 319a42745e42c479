use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use crate::parse::{AffiliationParser, ParsedAffiliations};
use crate::rules::resolve_rules;
use crate::wos;

#[derive(Args)]
pub struct InspectArgs {
    /// Raw "Authors with affiliations" value, entries separated by ';'
    pub affiliations: String,

    /// JSON rules file replacing the built-in tables
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Print tagged C1/C3 fields instead of the plain output
    #[arg(long)]
    pub wos: bool,
}

/// Plain view: every address line, a blank line, then the primary summary.
pub fn render_inspection(parsed: &ParsedAffiliations, tagged: bool) -> String {
    if tagged {
        return wos::render_address_fields(parsed).join("\n");
    }

    let mut out = String::new();
    out.push_str("Addresses:\n");
    for block in &parsed.addresses {
        out.push_str("  ");
        out.push_str(&block.render());
        out.push('\n');
    }
    out.push_str("\nPrimary institutions:\n  ");
    out.push_str(&parsed.primary_field());
    out
}

pub fn run(args: InspectArgs) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("scopus_affil=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    let rules = resolve_rules(args.rules.as_deref())?;
    let parser = AffiliationParser::new(&rules)?;
    let parsed = parser.parse(&args.affiliations);

    if parsed.skipped_entries > 0 {
        info!("Skipped {} malformed entries", parsed.skipped_entries);
    }
    println!("{}", render_inspection(&parsed, args.wos));
    Ok(())
}
