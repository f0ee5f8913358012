// src/config.rs
use anyhow::{bail, Result};
use std::env;

pub const PAIRING_ENV: &str = "ROSTER_PAIRING";
pub const ORDINAL_ENV: &str = "ROSTER_ORDINAL";

/// What to do when a chamber has a different number of state headings
/// than member groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairingPolicy {
    /// Pair up to the shorter list and warn. Extra headings or groups are dropped.
    #[default]
    Truncate,
    /// Fail the run.
    Strict,
}

/// How the session year is turned into an ordinal for the output file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrdinalRule {
    /// Look only at the last character: 1 → st, 2 → nd, 3 → rd, else th.
    /// "111" becomes "111st". Matches file names produced so far.
    #[default]
    Naive,
    /// English ordinals: 11, 12 and 13 take "th".
    English,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub pairing: PairingPolicy,
    pub ordinal: OrdinalRule,
}

impl Config {
    /// Read `ROSTER_PAIRING` and `ROSTER_ORDINAL`, falling back to defaults when unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pairing = match lookup(PAIRING_ENV).as_deref().map(str::trim) {
            None | Some("") => PairingPolicy::default(),
            Some(v) => match v.to_ascii_lowercase().as_str() {
                "truncate" => PairingPolicy::Truncate,
                "strict" => PairingPolicy::Strict,
                other => bail!("{PAIRING_ENV}: unknown value {other:?} (expected truncate|strict)"),
            },
        };

        let ordinal = match lookup(ORDINAL_ENV).as_deref().map(str::trim) {
            None | Some("") => OrdinalRule::default(),
            Some(v) => match v.to_ascii_lowercase().as_str() {
                "naive" => OrdinalRule::Naive,
                "english" => OrdinalRule::English,
                other => bail!("{ORDINAL_ENV}: unknown value {other:?} (expected naive|english)"),
            },
        };

        Ok(Self { pairing, ordinal })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.pairing, PairingPolicy::Truncate);
        assert_eq!(cfg.ordinal, OrdinalRule::Naive);
    }

    #[test]
    fn reads_values_case_insensitively() {
        let cfg = Config::from_lookup(lookup(&[
            (PAIRING_ENV, "Strict"),
            (ORDINAL_ENV, " ENGLISH "),
        ]))
        .unwrap();
        assert_eq!(cfg.pairing, PairingPolicy::Strict);
        assert_eq!(cfg.ordinal, OrdinalRule::English);
    }

    #[test]
    fn rejects_unknown_values() {
        let err = Config::from_lookup(lookup(&[(ORDINAL_ENV, "roman")])).unwrap_err();
        assert!(err.to_string().contains(ORDINAL_ENV));

        let err = Config::from_lookup(lookup(&[(PAIRING_ENV, "pad")])).unwrap_err();
        assert!(err.to_string().contains(PAIRING_ENV));
    }
}
