// src/extract/mod.rs
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use std::{fs, path::Path};
use tracing::{debug, info, instrument};

use crate::error::RosterError;

pub mod roster;

pub use roster::{pair_rosters, RawRoster};

/// Inline style carried by the two roster tables on the page.
pub const ROSTER_TABLE_STYLE: &str =
    "border-collapse: collapse; padding: 0; border: 0; background:transparent; width:100%;";

static ROSTER_TABLE: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"table.multicol[role="presentation"]"#)
        .expect("roster table selector should parse")
});

/// The two roster blocks of the page.
///
/// The page lists the Senate first and the House second, so the first
/// matching table is taken as the Senate and the second as the House.
/// Nothing in the markup itself tells the two apart.
#[derive(Debug, Clone, Copy)]
pub struct RosterTables<'a> {
    pub senate: ElementRef<'a>,
    pub house: ElementRef<'a>,
}

/// Read the HTML snapshot at `path` and parse it.
#[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Html, RosterError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| RosterError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    info!(bytes = contents.len(), "read input document");
    Ok(Html::parse_document(&contents))
}

/// Style attributes compare equal when they differ only by whitespace,
/// case or a trailing `;`.
fn normalize_style(style: &str) -> String {
    let compact: String = style
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    compact.trim_end_matches(';').to_string()
}

fn is_roster_table(el: &ElementRef<'_>) -> bool {
    el.value()
        .attr("style")
        .map(|s| normalize_style(s) == normalize_style(ROSTER_TABLE_STYLE))
        .unwrap_or(false)
}

/// Find the Senate and House roster tables.
///
/// A roster table is a `table` with class `multicol`, `role="presentation"`
/// and the [`ROSTER_TABLE_STYLE`] inline style. Exactly two must exist.
pub fn find_roster_tables(doc: &Html) -> Result<RosterTables<'_>, RosterError> {
    info!("getting query");
    let tables: Vec<ElementRef<'_>> = doc
        .select(&ROSTER_TABLE)
        .filter(is_roster_table)
        .collect();
    debug!(found = tables.len(), "matched roster tables");

    match tables.as_slice() {
        [senate, house] => Ok(RosterTables {
            senate: *senate,
            house: *house,
        }),
        t if t.len() < 2 => Err(RosterError::StructureNotFound { found: t.len() }),
        t => Err(RosterError::UnexpectedBlockCount { found: t.len() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn table(inner: &str) -> String {
        format!(
            r#"<table class="multicol" role="presentation" style="{ROSTER_TABLE_STYLE}"><tr><td>{inner}</td></tr></table>"#
        )
    }

    fn page_html(tables: &[String]) -> String {
        format!("<html><body>{}</body></html>", tables.concat())
    }

    fn page(tables: &[String]) -> Html {
        Html::parse_document(&page_html(tables))
    }

    #[test]
    fn finds_two_tables_in_order() {
        let doc = page(&[table("<h4>senate</h4>"), table("<h4>house</h4>")]);
        let t = find_roster_tables(&doc).unwrap();
        assert_eq!(t.senate.text().collect::<String>(), "senate");
        assert_eq!(t.house.text().collect::<String>(), "house");
    }

    #[test]
    fn ignores_tables_with_other_style() {
        let other = r#"<table class="multicol" role="presentation" style="width:50%"><tr><td>x</td></tr></table>"#;
        let doc = page(&[
            table("a"),
            other.to_string(),
            r#"<table class="wikitable"><tr><td>y</td></tr></table>"#.to_string(),
            table("b"),
        ]);
        assert!(find_roster_tables(&doc).is_ok());
    }

    #[test]
    fn style_comparison_is_lenient() {
        assert_eq!(
            normalize_style("Border-Collapse:collapse;padding:0;border:0;background:transparent;width:100%"),
            normalize_style(ROSTER_TABLE_STYLE)
        );
    }

    #[test]
    fn fewer_than_two_is_not_found() {
        let doc = page(&[table("only")]);
        assert!(matches!(
            find_roster_tables(&doc),
            Err(RosterError::StructureNotFound { found: 1 })
        ));
        let doc = page(&[]);
        assert!(matches!(
            find_roster_tables(&doc),
            Err(RosterError::StructureNotFound { found: 0 })
        ));
    }

    #[test]
    fn more_than_two_fails_loudly() {
        let doc = page(&[table("a"), table("b"), table("c")]);
        assert!(matches!(
            find_roster_tables(&doc),
            Err(RosterError::UnexpectedBlockCount { found: 3 })
        ));
    }

    #[test]
    fn load_document_reads_file() -> anyhow::Result<()> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(page_html(&[table("a"), table("b")]).as_bytes())?;
        let doc = load_document(tmp.path())?;
        assert!(find_roster_tables(&doc).is_ok());
        Ok(())
    }

    #[test]
    fn missing_input_is_unreadable() {
        let err = load_document("/no/such/roster.html").unwrap_err();
        assert!(matches!(err, RosterError::InputUnreadable { .. }));
    }
}
