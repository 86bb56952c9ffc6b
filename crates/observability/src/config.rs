//! Logging configuration, read from the environment.

use core::str::FromStr;

use mms_core::DomainError;

/// Environment variable holding the filter directives.
pub const FILTER_ENV: &str = "RUST_LOG";
/// Environment variable selecting the output format (`json` / `pretty`).
pub const FORMAT_ENV: &str = "MMS_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Multi-line human-readable output.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(DomainError::unknown_variant("log format", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `info,mms_auth=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read [`FILTER_ENV`] and [`FORMAT_ENV`], falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (used by `from_env` and tests).
    ///
    /// Blank values count as unset; an unrecognised format falls back to the
    /// default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let filter = present(FILTER_ENV).unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let format = present(FORMAT_ENV)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();

        Self { filter, format }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ObservabilityConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ObservabilityConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn reads_filter_and_format() {
        let config = ObservabilityConfig::from_lookup(lookup(&[
            ("RUST_LOG", "mms_auth=debug"),
            ("MMS_LOG_FORMAT", " Pretty "),
        ]));
        assert_eq!(config.filter, "mms_auth=debug");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn bad_or_blank_values_fall_back() {
        let config = ObservabilityConfig::from_lookup(lookup(&[
            ("RUST_LOG", "   "),
            ("MMS_LOG_FORMAT", "xml"),
        ]));
        assert_eq!(config, ObservabilityConfig::default());
    }

    #[test]
    fn log_format_parse_errors_name_the_kind() {
        let err = "xml".parse::<LogFormat>().unwrap_err();
        assert_eq!(err, DomainError::unknown_variant("log format", "xml"));
    }

    #[test]
    fn init_twice_is_harmless() {
        crate::init_with(&ObservabilityConfig::default());
        crate::init_with(&ObservabilityConfig {
            filter: "not a [valid filter".to_string(),
            format: LogFormat::Pretty,
        });
    }
}
