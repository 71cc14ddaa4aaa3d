//! Errors raised while setting up a search.

use thiserror::Error;

/// Configuration errors detected before any search work is done.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MatchError {
    /// One graph is directed and the other is not.
    #[error("host graph is {} but pattern graph is {}", orientation(.host), orientation(.pattern))]
    DirectednessMismatch {
        /// Whether the host is directed.
        host: bool,
        /// Whether the pattern is directed.
        pattern: bool,
    },

    /// The configuration forces a directedness the graphs do not have.
    #[error(
        "configuration requires {} graphs but the inputs are {}",
        orientation(.requested),
        orientation(.actual)
    )]
    UnsupportedDirectedness {
        /// Directedness demanded by the configuration.
        requested: bool,
        /// Directedness the graphs report.
        actual: bool,
    },

    /// A subgraph search whose pattern cannot fit in the host.
    #[error("pattern has {pattern} nodes but host has only {host}")]
    PatternLargerThanHost {
        /// Host node count.
        host: usize,
        /// Pattern node count.
        pattern: usize,
    },
}

impl MatchError {
    /// Build a [`MatchError::DirectednessMismatch`].
    #[must_use]
    pub const fn directedness_mismatch(host: bool, pattern: bool) -> Self {
        Self::DirectednessMismatch { host, pattern }
    }

    /// Build a [`MatchError::UnsupportedDirectedness`].
    #[must_use]
    pub const fn unsupported_directedness(requested: bool, actual: bool) -> Self {
        Self::UnsupportedDirectedness { requested, actual }
    }

    /// Build a [`MatchError::PatternLargerThanHost`].
    #[must_use]
    pub const fn pattern_larger_than_host(host: usize, pattern: usize) -> Self {
        Self::PatternLargerThanHost { host, pattern }
    }
}

const fn orientation(directed: &bool) -> &'static str {
    if *directed { "directed" } else { "undirected" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_orientation() {
        let err = MatchError::directedness_mismatch(true, false);
        assert_eq!(err.to_string(), "host graph is directed but pattern graph is undirected");

        let err = MatchError::unsupported_directedness(false, true);
        assert!(err.to_string().contains("requires undirected graphs"));
    }

    #[test]
    fn test_size_message() {
        let err = MatchError::pattern_larger_than_host(2, 5);
        assert_eq!(err.to_string(), "pattern has 5 nodes but host has only 2");
    }
}
