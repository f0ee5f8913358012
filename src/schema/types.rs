// src/schema/types.rs

use serde::Serialize;
use std::fmt;

use crate::error::EntryError;

#[derive(Debug, Serialize, PartialEq, Clone, Copy, Eq, Hash)]
pub enum Chamber {
    Senate,
    House,
}

impl Chamber {
    pub fn as_str(&self) -> &'static str {
        match self {
            Chamber::Senate => "Senate",
            Chamber::House => "House",
        }
    }
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name and party fields split out of one roster entry.
/// `middle_name` and `suffix` are empty strings when absent.
#[derive(Debug, PartialEq, Clone, Eq)]
pub struct ParsedName {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub suffix: String,
    pub party: String,
}

/// One legislator, fixed-width.
#[derive(Debug, PartialEq, Clone, Eq)]
pub struct LegislatorRecord {
    pub chamber: Chamber,
    pub state: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub suffix: String,
    pub party: String,
}

impl LegislatorRecord {
    pub fn new(chamber: Chamber, state: &str, name: ParsedName) -> Self {
        Self {
            chamber,
            state: state.to_string(),
            first_name: name.first_name,
            middle_name: name.middle_name,
            last_name: name.last_name,
            suffix: name.suffix,
            party: name.party,
        }
    }
}

/// Members of one chamber for one state, in page order.
#[derive(Debug, PartialEq, Clone, Eq)]
pub struct StateRoster {
    pub state: String,
    pub members: Vec<LegislatorRecord>,
}

/// All states of one chamber, in page order.
#[derive(Debug, PartialEq, Clone, Eq)]
pub struct StateRosterGroup {
    pub chamber: Chamber,
    pub states: Vec<StateRoster>,
}

impl StateRosterGroup {
    pub fn member_count(&self) -> usize {
        self.states.iter().map(|s| s.members.len()).sum()
    }
}

/// A roster entry that was skipped.
#[derive(Debug, PartialEq, Clone, Eq)]
pub struct MalformedEntry {
    pub chamber: Chamber,
    pub state: String,
    pub raw: String,
    pub reason: EntryError,
}

/// Per-record failures collected while building the roster groups.
#[derive(Debug, Default, PartialEq, Clone, Eq)]
pub struct ParseReport {
    pub malformed: Vec<MalformedEntry>,
}

impl ParseReport {
    pub fn is_clean(&self) -> bool {
        self.malformed.is_empty()
    }

    pub fn merge(&mut self, other: ParseReport) {
        self.malformed.extend(other.malformed);
    }
}

/// One output row, borrowed from a record. Field names are the CSV header.
#[derive(Debug, Serialize)]
pub struct DatasetRow<'a> {
    #[serde(rename = "Chamber")]
    pub chamber: Chamber,
    #[serde(rename = "State")]
    pub state: &'a str,
    #[serde(rename = "First_Name")]
    pub first_name: &'a str,
    #[serde(rename = "Middle_Name")]
    pub middle_name: &'a str,
    #[serde(rename = "Last_Name")]
    pub last_name: &'a str,
    #[serde(rename = "Suffix")]
    pub suffix: &'a str,
    #[serde(rename = "Party")]
    pub party: &'a str,
    #[serde(rename = "Congressional_Year")]
    pub congressional_year: &'a str,
}

/// Both chambers flattened, Senate first, with the session year on every row.
#[derive(Debug, PartialEq, Clone, Eq)]
pub struct CongressionalDataset {
    pub year: String,
    pub records: Vec<LegislatorRecord>,
}

impl CongressionalDataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = DatasetRow<'_>> {
        self.records.iter().map(move |r| DatasetRow {
            chamber: r.chamber,
            state: &r.state,
            first_name: &r.first_name,
            middle_name: &r.middle_name,
            last_name: &r.last_name,
            suffix: &r.suffix,
            party: &r.party,
            congressional_year: &self.year,
        })
    }
}
