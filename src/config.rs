//! Key→string configuration map with typed getters and a simple
//! `key=value` file loader (spec.md §4.10).
//!
//! This is the core's own precisely-specified store, not a general
//! config-loading layer — see `SPEC_FULL.md` §4.10 for why it is not
//! replaced by a TOML/figment-style crate: hosts that want layered
//! config discovery are expected to flatten it into `key=value` pairs
//! before calling [`Configuration::set`].

use std::collections::HashMap;
use std::io::{self, BufRead};

/// Default comment-line marker for [`Configuration::load`].
pub const DEFAULT_COMMENT_MARKER: &str = "#";
/// Default key/value delimiter for [`Configuration::load`].
pub const DEFAULT_DELIMITER: char = '=';

/// A key→string configuration map with typed, defaulted accessors.
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    values: HashMap<String, String>,
}

impl Configuration {
    /// An empty configuration; every getter falls back to its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key to a string value, overwriting any prior value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// String getter: returns the stored value verbatim, or `default` if
    /// unset. Never fails — a configuration miss is not an error
    /// (spec.md §7).
    pub fn as_string(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    /// `u64` getter: parses the stored value, falling back to `default`
    /// both when the key is unset and when the stored value fails to
    /// parse as an integer.
    pub fn as_u64(&self, key: &str, default: u64) -> u64 {
        self.values
            .get(key)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(default)
    }

    /// `f64` getter: parses the stored value, falling back to `default`
    /// both when the key is unset and when the stored value fails to
    /// parse as a float. `str::parse` is locale-independent in Rust, so
    /// no explicit "C locale" bracketing is required to match the
    /// original's numeric parsing behavior.
    pub fn as_f64(&self, key: &str, default: f64) -> f64 {
        self.values
            .get(key)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .unwrap_or(default)
    }

    /// Load `key=value` pairs from `reader`, one per line. Lines whose
    /// trimmed content starts with `comment_marker` are skipped; each
    /// remaining line is split at the first occurrence of `delimiter`,
    /// and both sides are trimmed of surrounding whitespace before being
    /// stored. Lines with no delimiter are skipped.
    pub fn load_from<R: BufRead>(
        &mut self,
        reader: R,
        comment_marker: &str,
        delimiter: char,
    ) -> io::Result<()> {
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(comment_marker) {
                continue;
            }
            if let Some((key, value)) = trimmed.split_once(delimiter) {
                self.set(key.trim(), value.trim());
            }
        }
        Ok(())
    }

    /// Convenience wrapper over [`Configuration::load_from`] using the
    /// default comment marker (`#`) and delimiter (`=`).
    pub fn load_defaults_from<R: BufRead>(&mut self, reader: R) -> io::Result<()> {
        self.load_from(reader, DEFAULT_COMMENT_MARKER, DEFAULT_DELIMITER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn unset_key_falls_back_to_default() {
        let config = Configuration::new();
        assert_eq!(config.as_u64("STILLNESS_ACC_EVENT_NUMBER", 16), 16);
        assert_eq!(config.as_f64("STILLNESS_ACC_VARIANCE_THRESHOLD", 0.01), 0.01);
        assert_eq!(config.as_string("missing", "fallback"), "fallback");
    }

    #[test]
    fn set_and_get_roundtrip() {
        let mut config = Configuration::new();
        config.set("STILLNESS_ACC_EVENT_NUMBER", "32");
        assert_eq!(config.as_u64("STILLNESS_ACC_EVENT_NUMBER", 16), 32);
    }

    #[test]
    fn load_skips_comments_and_trims() {
        let text = "# comment\n  STILLNESS_GRAVITY_EPSILON = 2.0  \n\nSTILLNESS_UPDATE_GRAVITY=0\n";
        let mut config = Configuration::new();
        config
            .load_defaults_from(Cursor::new(text))
            .expect("load should succeed");
        assert_eq!(config.as_f64("STILLNESS_GRAVITY_EPSILON", 1.5), 2.0);
        assert_eq!(config.as_u64("STILLNESS_UPDATE_GRAVITY", 1), 0);
    }

    #[test]
    fn unparseable_value_falls_back_to_default() {
        let mut config = Configuration::new();
        config.set("STILLNESS_ACC_EVENT_NUMBER", "not-a-number");
        assert_eq!(config.as_u64("STILLNESS_ACC_EVENT_NUMBER", 16), 16);
    }
}
