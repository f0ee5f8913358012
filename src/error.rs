// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

use crate::schema::Chamber;

/// Fatal conditions. Any of these aborts the run before output is written.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("cannot read input {path:?}: {source}")]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("expected 2 roster tables (Senate, House), found {found}")]
    StructureNotFound { found: usize },

    #[error("expected exactly 2 roster tables (Senate, House), found {found}")]
    UnexpectedBlockCount { found: usize },

    #[error("{chamber}: {headings} state headings but {groups} member groups")]
    PairingMismatch {
        chamber: Chamber,
        headings: usize,
        groups: usize,
    },
}

/// Why a single roster entry could not be split into name fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("too few tokens ({count}, suffix detected: {suffix})")]
    TooFewTokens { count: usize, suffix: bool },

    #[error("party marker is empty")]
    EmptyParty,
}
