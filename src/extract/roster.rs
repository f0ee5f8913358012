// src/extract/roster.rs
use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};
use tracing::{debug, instrument, warn};

use crate::config::PairingPolicy;
use crate::error::RosterError;
use crate::process::utils::{clean_heading, normalize_ws};
use crate::schema::Chamber;

static STATE_HEADING: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h4").expect("heading selector should parse"));
static MEMBER_GROUP: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td > dl").expect("member group selector should parse"));
static MEMBER_ENTRY: Lazy<Selector> =
    Lazy::new(|| Selector::parse("dd").expect("member entry selector should parse"));

/// One state heading and the unparsed entries listed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRoster {
    pub state: String,
    pub entries: Vec<String>,
}

fn element_text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// State names from the block's `h4` headings, in page order.
pub fn state_headings(block: ElementRef<'_>) -> Vec<String> {
    block
        .select(&STATE_HEADING)
        .map(|h| clean_heading(&h.text().collect::<String>()))
        .collect()
}

/// Entry texts for each `dl` sitting directly in a table cell, in page order.
/// Blank entries are kept so the parser can report them.
pub fn member_groups(block: ElementRef<'_>) -> Vec<Vec<String>> {
    block
        .select(&MEMBER_GROUP)
        .map(|dl| dl.select(&MEMBER_ENTRY).map(element_text).collect())
        .collect()
}

/// Pair the Nth state heading with the Nth member group.
///
/// Headings and groups are separate lists on the page and are matched by
/// position only. When their lengths differ, `policy` decides between
/// dropping the unmatched tail and failing.
#[instrument(level = "info", skip_all, fields(chamber = %chamber, ?policy))]
pub fn pair_rosters(
    block: ElementRef<'_>,
    chamber: Chamber,
    policy: PairingPolicy,
) -> Result<Vec<RawRoster>, RosterError> {
    let headings = state_headings(block);
    let groups = member_groups(block);
    debug!(headings = headings.len(), groups = groups.len(), "collected roster lists");

    if headings.len() != groups.len() {
        match policy {
            PairingPolicy::Strict => {
                return Err(RosterError::PairingMismatch {
                    chamber,
                    headings: headings.len(),
                    groups: groups.len(),
                })
            }
            PairingPolicy::Truncate => warn!(
                headings = headings.len(),
                groups = groups.len(),
                "heading/group count mismatch; unmatched tail dropped"
            ),
        }
    }

    Ok(headings
        .into_iter()
        .zip(groups)
        .map(|(state, entries)| RawRoster { state, entries })
        .collect())
}
