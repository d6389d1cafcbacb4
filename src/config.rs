// ==========================================
// Kashi Kravings Dashboard - Settings
// ==========================================
// Engine configuration: cache TTL and the invoice ledger path.
// Defaults work out of the box; a JSON settings file and environment
// variables (KK_CACHE_TTL_SECS, KK_INVOICE_FILE) override them, env
// winning over file.
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default dataset cache TTL in seconds (5 minutes).
const DEFAULT_TTL_SECS: u64 = 5 * 60;

/// Default invoice ledger location, relative to the working dir.
const DEFAULT_INVOICE_FILE: &str = "data/invoices.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Maximum age of a cached dataset before recompute, in seconds
    pub cache_ttl_secs: u64,
    /// Path of the persisted invoice ledger
    pub invoice_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cache_ttl_secs: DEFAULT_TTL_SECS,
            invoice_file: PathBuf::from(DEFAULT_INVOICE_FILE),
        }
    }
}

impl Settings {
    /// Load from a JSON file, then apply env overrides. A missing
    /// file is fine (defaults + env); a malformed file is not.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let mut settings = match std::fs::read_to_string(path.as_ref()) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Settings::default(),
            Err(err) => return Err(err.into()),
        };
        settings.apply_env();
        Ok(settings)
    }

    /// Defaults plus env overrides, no file involved.
    pub fn from_env() -> Self {
        let mut settings = Settings::default();
        settings.apply_env();
        settings
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    fn apply_env(&mut self) {
        if let Ok(raw) = std::env::var("KK_CACHE_TTL_SECS") {
            if let Ok(secs) = raw.parse() {
                self.cache_ttl_secs = secs;
            } else {
                tracing::warn!(value = %raw, "ignoring unparsable KK_CACHE_TTL_SECS");
            }
        }
        if let Ok(path) = std::env::var("KK_INVOICE_FILE") {
            self.invoice_file = PathBuf::from(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.cache_ttl(), Duration::from_secs(300));
        assert_eq!(settings.invoice_file, PathBuf::from("data/invoices.json"));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let settings = Settings::load("no/such/settings.json").unwrap();
        assert_eq!(settings.cache_ttl_secs, 300);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"cacheTtlSecs\": 60}}").unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.cache_ttl_secs, 60);
        // Unspecified fields keep their defaults
        assert_eq!(settings.invoice_file, PathBuf::from("data/invoices.json"));
    }

    #[test]
    fn test_load_malformed_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{broken").unwrap();
        assert!(Settings::load(file.path()).is_err());
    }
}
