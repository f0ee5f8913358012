use anyhow::{bail, Context, Result};
use clap::Parser;
use congress_roster::{build_dataset, extract, schema, Config};
use std::{path::PathBuf, time::Instant};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Build a CSV of congressional members from a saved roster page.
#[derive(Parser, Debug)]
#[command(name = "congress_roster", version)]
struct Cli {
    /// Path to the HTML input file
    #[arg(long = "html_file", value_name = "PATH")]
    html_file: PathBuf,

    /// Congressional session year, e.g. 117
    #[arg(long, value_name = "YEAR")]
    year: String,
}

/// The session year goes into every row and the output file name, so it
/// can't be blank.
fn session_year(raw: &str) -> Result<&str> {
    let year = raw.trim();
    if year.is_empty() {
        bail!("--year must not be empty");
    }
    Ok(year)
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
    info!("start of program");

    // ─── 2) args + config ────────────────────────────────────────────
    let cli = Cli::parse();
    let cfg = Config::from_env()?;
    let year = session_year(&cli.year)?;
    info!(html_file = %cli.html_file.display(), year, ?cfg, "configured");

    // ─── 3) extract + parse ──────────────────────────────────────────
    let start = Instant::now();
    let doc = extract::load_document(&cli.html_file)?;
    let (dataset, report) = build_dataset(&doc, year, &cfg)
        .with_context(|| format!("extracting rosters from {}", cli.html_file.display()))?;

    // ─── 4) write ────────────────────────────────────────────────────
    let path = schema::write_dataset(&dataset, ".", cfg.ordinal)?;
    info!(
        rows = dataset.len(),
        skipped = report.malformed.len(),
        elapsed = ?start.elapsed(),
        "wrote {}",
        path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_both_flags() {
        let cli = Cli::try_parse_from([
            "congress_roster",
            "--html_file",
            "roster.html",
            "--year",
            "117",
        ])
        .unwrap();
        assert_eq!(cli.html_file, PathBuf::from("roster.html"));
        assert_eq!(cli.year, "117");
    }

    #[test]
    fn both_flags_are_required() {
        let err = Cli::try_parse_from(["congress_roster", "--html_file", "roster.html"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let err = Cli::try_parse_from(["congress_roster", "--year", "117"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn blank_year_is_rejected() {
        assert!(session_year("").is_err());
        assert!(session_year("   ").is_err());
        assert_eq!(session_year(" 117 ").unwrap(), "117");
    }
}
