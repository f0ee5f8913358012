//! Scrape the Senate and House rosters out of a saved congressional roster
//! page and turn them into a flat CSV dataset tagged with a session year.

pub mod config;
pub mod error;
pub mod extract;
pub mod process;
pub mod schema;

use scraper::Html;
use tracing::{info, warn};

pub use config::{Config, OrdinalRule, PairingPolicy};
pub use error::{EntryError, RosterError};
pub use schema::{Chamber, CongressionalDataset, LegislatorRecord, ParseReport};

/// Run extraction and parsing over an already-parsed document.
///
/// Fails only on structural problems. Entries that can't be parsed are
/// left out of the dataset and listed in the returned report.
pub fn build_dataset(
    doc: &Html,
    year: &str,
    cfg: &Config,
) -> Result<(CongressionalDataset, ParseReport), RosterError> {
    let tables = extract::find_roster_tables(doc)?;

    info!("getting representatives");
    let senate_raw = extract::pair_rosters(tables.senate, Chamber::Senate, cfg.pairing)?;
    let house_raw = extract::pair_rosters(tables.house, Chamber::House, cfg.pairing)?;

    info!("parsing representatives");
    let (senate, mut report) = process::parse_chamber(Chamber::Senate, senate_raw);
    let (house, house_report) = process::parse_chamber(Chamber::House, house_raw);
    report.merge(house_report);

    info!(
        senators = senate.member_count(),
        representatives = house.member_count(),
        "parsed rosters"
    );
    if !report.is_clean() {
        warn!(skipped = report.malformed.len(), "some entries were malformed");
    }

    Ok((schema::assemble(senate, house, year), report))
}

/// Parse an HTML string and build the dataset from it.
pub fn build_dataset_from_str(
    html: &str,
    year: &str,
    cfg: &Config,
) -> Result<(CongressionalDataset, ParseReport), RosterError> {
    build_dataset(&Html::parse_document(html), year, cfg)
}
