// src/process/mod.rs
use tracing::{debug, error, instrument, warn};

use crate::error::EntryError;
use crate::extract::RawRoster;
use crate::schema::{
    Chamber, LegislatorRecord, MalformedEntry, ParseReport, ParsedName, StateRoster,
    StateRosterGroup,
};

pub mod utils;

use utils::{cut_at_close_paren, strip_position_marker};

/// Generational suffixes, lower-cased. Not exhaustive.
pub const SUFFIXES: &[&str] = &["jr", "jr.", "sr", "sr.", "i", "ii", "iii", "iv", "v"];

pub fn is_suffix(token: &str) -> bool {
    let lower = token.to_lowercase();
    SUFFIXES.contains(&lower.as_str())
}

/// Split one roster entry into first/middle/last/suffix/party.
///
/// Layout assumed after the position marker is removed:
/// `First [Middle ...] Last [Suffix] (Party)`. Anything after the first
/// `)` is dropped. A suffix is recognised only in the second-to-last
/// token position, i.e. directly before the party.
pub fn parse_entry(raw: &str) -> Result<ParsedName, EntryError> {
    let body = cut_at_close_paren(strip_position_marker(raw.trim()));
    let tokens: Vec<&str> = body.split_whitespace().collect();
    let n = tokens.len();

    let has_suffix = n >= 2 && is_suffix(tokens[n - 2]);

    // index of the last name; everything between 0 and it is the middle name
    let last_idx = match (has_suffix, n) {
        (false, n) if n >= 3 => n - 2,
        (true, n) if n >= 4 => n - 3,
        _ => {
            return Err(EntryError::TooFewTokens {
                count: n,
                suffix: has_suffix,
            })
        }
    };

    let party = tokens[n - 1].trim_start_matches('(');
    if party.is_empty() {
        return Err(EntryError::EmptyParty);
    }

    Ok(ParsedName {
        first_name: tokens[0].to_string(),
        middle_name: tokens[1..last_idx].join(" "),
        last_name: tokens[last_idx].to_string(),
        suffix: if has_suffix {
            tokens[n - 2].to_string()
        } else {
            String::new()
        },
        party: party.to_string(),
    })
}

/// Parse every entry of one chamber into per-state records.
///
/// Entries that don't fit any known shape are logged, collected into the
/// returned report and left out of the group.
#[instrument(level = "info", skip_all, fields(chamber = %chamber, states = rosters.len()))]
pub fn parse_chamber(chamber: Chamber, rosters: Vec<RawRoster>) -> (StateRosterGroup, ParseReport) {
    let mut states: Vec<StateRoster> = Vec::with_capacity(rosters.len());
    let mut report = ParseReport::default();

    for RawRoster { state, entries } in rosters {
        let mut members = Vec::with_capacity(entries.len());
        for raw in entries {
            match parse_entry(&raw) {
                Ok(name) => members.push(LegislatorRecord::new(chamber, &state, name)),
                Err(reason) => {
                    error!(%chamber, state = %state, raw = %raw, %reason, "malformed entry");
                    report.malformed.push(MalformedEntry {
                        chamber,
                        state: state.clone(),
                        raw,
                        reason,
                    });
                }
            }
        }

        if let Some(existing) = states.iter_mut().find(|s| s.state == state) {
            warn!(%chamber, state = %state, "state heading repeated; appending members");
            existing.members.extend(members);
        } else {
            debug!(state = %state, members = members.len(), "parsed state");
            states.push(StateRoster { state, members });
        }
    }

    (StateRosterGroup { chamber, states }, report)
}
