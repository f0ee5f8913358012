use once_cell::sync::Lazy;
use regex::Regex;

/// Leading layout marker on roster entries: the bar glyph (or its mis-decoded
/// form `â–Œ`), then an optional district number or "At-Large", then a dot.
static POSITION_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:▌|â–Œ)\s*\d*\.?\s*(?:at[- ]large)?\.?\s*")
        .expect("position marker regex should compile")
});

/// Drop the "▌ 3. " / "▌ At-Large. " prefix, if present.
pub fn strip_position_marker(raw: &str) -> &str {
    match POSITION_MARKER.find(raw) {
        Some(m) => &raw[m.end()..],
        None => raw,
    }
}

/// Keep everything before the first `)`.
pub fn cut_at_close_paren(s: &str) -> &str {
    s.split(')').next().unwrap_or(s)
}

/// Heading text up to the first `[` (footnote markers), trimmed.
pub fn clean_heading(raw: &str) -> String {
    raw.split('[').next().unwrap_or(raw).trim().to_string()
}

/// Collapse runs of whitespace to single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_numbered_marker() {
        assert_eq!(strip_position_marker("▌ 12. Jane Doe (D)"), "Jane Doe (D)");
        assert_eq!(strip_position_marker("▌1.Jane Doe (D)"), "Jane Doe (D)");
    }

    #[test]
    fn strips_at_large_marker_any_case() {
        assert_eq!(strip_position_marker("▌ At-Large. Liz Cheney (R)"), "Liz Cheney (R)");
        assert_eq!(strip_position_marker("▌ at large. Liz Cheney (R)"), "Liz Cheney (R)");
    }

    #[test]
    fn strips_misdecoded_bar() {
        assert_eq!(strip_position_marker("â–Œ 4. Jane Doe (D)"), "Jane Doe (D)");
    }

    #[test]
    fn leaves_unmarked_text_alone() {
        assert_eq!(strip_position_marker("Jane Doe (D)"), "Jane Doe (D)");
    }

    #[test]
    fn cuts_after_first_paren() {
        assert_eq!(cut_at_close_paren("Jane Doe (D) (until May 3)"), "Jane Doe (D");
        assert_eq!(cut_at_close_paren("Jane Doe D"), "Jane Doe D");
    }

    #[test]
    fn heading_drops_footnotes() {
        assert_eq!(clean_heading("Alabama[a]"), "Alabama");
        assert_eq!(clean_heading("  New York [12][13] "), "New York");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize_ws("  Jane \u{a0}\n Doe "), "Jane Doe");
    }
}
