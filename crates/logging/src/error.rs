//! crates/logging/src/error.rs
//! Error type for logger construction and configuration.

/// Errors raised while building or configuring a logger.
///
/// Rendering failures are not represented here: sinks report them as
/// [`std::io::Error`] and the logger returns them to the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A logger was constructed without any sink to route to.
    #[error("a leveled logger requires at least one sink")]
    NoSinks,

    /// A verbosity token could not be parsed.
    #[error("invalid verbosity: {token:?}")]
    InvalidVerbosity {
        /// The rejected token.
        token: String,
    },

    /// An environment variable held a value that could not be used.
    #[error("invalid value in environment variable {var}")]
    Env {
        /// Name of the offending variable.
        var: &'static str,
        /// Underlying parse failure.
        #[source]
        source: Box<Error>,
    },
}

/// Result alias used by constructors and configuration helpers.
pub type Result<T> = std::result::Result<T, Error>;
