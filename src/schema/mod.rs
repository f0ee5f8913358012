pub mod types;
pub mod write;

pub use types::{
    Chamber, CongressionalDataset, DatasetRow, LegislatorRecord, MalformedEntry, ParseReport,
    ParsedName, StateRoster, StateRosterGroup,
};
pub use write::{assemble, dataset_file_name, ordinal_suffix, write_dataset};

/// Output column order.
pub const DATASET_COLUMNS: [&str; 8] = [
    "Chamber",
    "State",
    "First_Name",
    "Middle_Name",
    "Last_Name",
    "Suffix",
    "Party",
    "Congressional_Year",
];
