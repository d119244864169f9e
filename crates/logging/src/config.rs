//! crates/logging/src/config.rs
//! Logger configuration: verbosity ceiling, prefix and call depth.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::leveled::{DEFAULT_CALL_DEPTH, LeveledLogger};
use crate::sink::Sink;

/// Environment variable consulted by [`LoggerConfig::from_env`].
pub const VERBOSITY_ENV: &str = "LOGR_VERBOSITY";

/// Settings used to build a root [`LeveledLogger`].
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Highest info level still emitted.
    pub verbosity: usize,
    /// Prefix applied to the root logger.
    pub prefix: String,
    /// Call depth override; `None` keeps the logger default.
    pub call_depth: Option<usize>,
}

impl LoggerConfig {
    /// Creates a configuration from the number of repeated `-v` flags.
    #[must_use]
    pub fn from_verbose_count(count: u8) -> Self {
        Self {
            verbosity: usize::from(count),
            ..Self::default()
        }
    }

    /// Reads the verbosity from [`VERBOSITY_ENV`].
    ///
    /// An unset or empty variable yields the default configuration.
    pub fn from_env() -> Result<Self> {
        Self::from_env_value(std::env::var(VERBOSITY_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Result<Self> {
        let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(Self::default());
        };
        let verbosity = parse_verbosity(value).map_err(|source| Error::Env {
            var: VERBOSITY_ENV,
            source: Box::new(source),
        })?;
        Ok(Self {
            verbosity,
            ..Self::default()
        })
    }

    /// Sets the prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the call depth override.
    #[must_use]
    pub const fn with_call_depth(mut self, depth: usize) -> Self {
        self.call_depth = Some(depth);
        self
    }

    /// Builds the root logger over `sinks`.
    pub fn build<I>(&self, sinks: I) -> Result<LeveledLogger>
    where
        I: IntoIterator<Item = Arc<dyn Sink>>,
    {
        let root = LeveledLogger::new(self.verbosity, sinks)?;
        let mut logger = if self.prefix.is_empty() {
            root
        } else {
            root.with_prefix(&self.prefix)
        };
        logger.set_call_depth(self.call_depth.unwrap_or(DEFAULT_CALL_DEPTH));
        Ok(logger)
    }
}

/// Parses a verbosity token.
///
/// Accepts a plain number (`"2"`), a `v` followed by a number (`"v2"`), or a
/// run of `v` characters counting the level (`"vvv"`).
pub fn parse_verbosity(token: &str) -> Result<usize> {
    let invalid = || Error::InvalidVerbosity {
        token: token.to_string(),
    };

    if token.is_empty() {
        return Err(invalid());
    }

    if token.bytes().all(|b| b == b'v') {
        return Ok(token.len());
    }

    let digits = token.strip_prefix('v').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    digits.parse::<usize>().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::Record;
    use std::io;

    struct Nop;

    impl Sink for Nop {
        fn info(&self, _record: &Record<'_>) -> io::Result<()> {
            Ok(())
        }

        fn error(&self, _record: &Record<'_>) -> io::Result<()> {
            Ok(())
        }
    }

    fn nop() -> Vec<Arc<dyn Sink>> {
        vec![Arc::new(Nop)]
    }

    #[test]
    fn parse_plain_number() {
        assert_eq!(parse_verbosity("0").unwrap(), 0);
        assert_eq!(parse_verbosity("12").unwrap(), 12);
    }

    #[test]
    fn parse_v_prefixed_number() {
        assert_eq!(parse_verbosity("v3").unwrap(), 3);
    }

    #[test]
    fn parse_repeated_v() {
        assert_eq!(parse_verbosity("v").unwrap(), 1);
        assert_eq!(parse_verbosity("vvvv").unwrap(), 4);
    }

    #[test]
    fn parse_rejects_garbage() {
        for token in ["", "loud", "v-1", "3v", "-2", "v 2", "99999999999999999999999"] {
            assert!(
                matches!(parse_verbosity(token), Err(Error::InvalidVerbosity { .. })),
                "{token:?} should be rejected"
            );
        }
    }

    #[test]
    fn verbose_count_maps_to_ceiling() {
        assert_eq!(LoggerConfig::from_verbose_count(0).verbosity, 0);
        assert_eq!(LoggerConfig::from_verbose_count(3).verbosity, 3);
    }

    #[test]
    fn env_value_unset_or_blank_is_default() {
        assert_eq!(LoggerConfig::from_env_value(None).unwrap(), LoggerConfig::default());
        assert_eq!(
            LoggerConfig::from_env_value(Some("  ")).unwrap(),
            LoggerConfig::default()
        );
    }

    #[test]
    fn env_value_is_parsed() {
        assert_eq!(LoggerConfig::from_env_value(Some("vv")).unwrap().verbosity, 2);
        assert_eq!(LoggerConfig::from_env_value(Some(" 4 ")).unwrap().verbosity, 4);
    }

    #[test]
    fn env_value_error_names_variable() {
        let err = LoggerConfig::from_env_value(Some("chatty")).unwrap_err();
        assert!(matches!(err, Error::Env { var: VERBOSITY_ENV, .. }));
    }

    #[test]
    fn build_applies_prefix_and_depth() {
        let logger = LoggerConfig::from_verbose_count(2)
            .with_prefix("svc: ")
            .with_call_depth(9)
            .build(nop())
            .unwrap();
        assert_eq!(logger.verbosity(), 2);
        assert_eq!(logger.prefix(), "svc: ");
        assert_eq!(logger.call_depth(), 9);
        assert_eq!(logger.level(), 0);
    }

    #[test]
    fn build_prefix_keeps_root_depth() {
        let logger = LoggerConfig::default()
            .with_prefix("svc: ")
            .build(nop())
            .unwrap();
        assert_eq!(logger.call_depth(), DEFAULT_CALL_DEPTH);
    }

    #[test]
    fn build_without_sinks_fails() {
        let result = LoggerConfig::default().build(Vec::new());
        assert!(matches!(result, Err(Error::NoSinks)));
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn config_serde_roundtrip() {
            let config = LoggerConfig::from_verbose_count(2).with_prefix("x");
            let json = serde_json::to_string(&config).unwrap();
            let decoded: LoggerConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(config, decoded);
        }

        #[test]
        fn missing_fields_use_defaults() {
            let decoded: LoggerConfig = serde_json::from_str(r#"{"verbosity":1}"#).unwrap();
            assert_eq!(decoded.verbosity, 1);
            assert!(decoded.prefix.is_empty());
            assert_eq!(decoded.call_depth, None);
        }
    }
}
