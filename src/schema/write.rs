use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{info, instrument, warn};

use super::{CongressionalDataset, StateRosterGroup};
use crate::config::OrdinalRule;

/// Flatten both chambers into one table, Senate first, tagging every row
/// with `year`.
pub fn assemble(
    senate: StateRosterGroup,
    house: StateRosterGroup,
    year: &str,
) -> CongressionalDataset {
    info!("now creating dataset");
    let records = [senate, house]
        .into_iter()
        .flat_map(|group| group.states)
        .flat_map(|state| state.members)
        .collect();

    CongressionalDataset {
        year: year.to_string(),
        records,
    }
}

/// Ordinal ending for the session year ("st", "nd", "rd" or "th").
pub fn ordinal_suffix(year: &str, rule: OrdinalRule) -> &'static str {
    let year = year.trim();
    let tens_is_one = || {
        year.chars()
            .rev()
            .nth(1)
            .map(|c| c == '1')
            .unwrap_or(false)
    };

    match (rule, year.chars().last()) {
        (OrdinalRule::English, Some('1' | '2' | '3')) if tens_is_one() => "th",
        (_, Some('1')) => "st",
        (_, Some('2')) => "nd",
        (_, Some('3')) => "rd",
        _ => "th",
    }
}

/// `{year}{ordinal}_Congressional_dataset.csv`
pub fn dataset_file_name(year: &str, rule: OrdinalRule) -> String {
    let year = year.trim();
    format!(
        "{}{}_Congressional_dataset.csv",
        year,
        ordinal_suffix(year, rule)
    )
}

/// Run `write` against a hidden `.{name}.tmp` sibling of `path`, then
/// rename it into place. The temp file is removed if any step fails, so
/// `path` either holds a complete file or is left untouched.
fn write_via_tmp<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp_path = path.with_file_name(format!(".{}.tmp", file_name));

    let result = write(&tmp_path).and_then(|()| {
        fs::rename(&tmp_path, path)
            .with_context(|| format!("renaming {:?} -> {:?}", tmp_path, path))
    });
    if result.is_err() && tmp_path.exists() {
        if let Err(e) = fs::remove_file(&tmp_path) {
            warn!("failed to remove {:?}: {}", tmp_path, e);
        }
    }
    result
}

/// Write `dataset` as CSV into `dir` and return the final path.
///
/// Rows go to a hidden temp file first, which is then renamed over the
/// target, so a failed write never leaves a partial dataset behind.
#[instrument(level = "info", skip_all, fields(rows = dataset.len(), dir = %dir.as_ref().display(), ?rule))]
pub fn write_dataset<P: AsRef<Path>>(
    dataset: &CongressionalDataset,
    dir: P,
    rule: OrdinalRule,
) -> Result<PathBuf> {
    let path = dir.as_ref().join(dataset_file_name(&dataset.year, rule));

    write_via_tmp(&path, |tmp_path| {
        let mut wtr = csv::Writer::from_path(tmp_path)
            .with_context(|| format!("creating {:?}", tmp_path))?;
        for row in dataset.rows() {
            wtr.serialize(row)
                .with_context(|| format!("writing row to {:?}", tmp_path))?;
        }
        if dataset.is_empty() {
            // serialize() only emits the header alongside the first row
            wtr.write_record(super::DATASET_COLUMNS)?;
        }
        wtr.flush()
            .with_context(|| format!("flushing {:?}", tmp_path))?;
        Ok(())
    })?;

    info!("dataset created: {}", path.display());
    Ok(path)
}
