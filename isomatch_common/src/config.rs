//! Configuration for the isomorphism search.
//!
//! This module exposes a minimal, stable surface for consumers to
//! parameterize how matching should behave. The three axes are:
//! - mode: full isomorphism, subgraph (monomorphism), or induced subgraph.
//! - edges: whether parallel-edge multiplicity takes part in the comparison.
//! - directedness: which edge semantics the two graphs are expected to carry.
//!
//! Quick examples
//!
//! Full isomorphism with everything inferred (default):
//! ```ignore
//! use isomatch_common::Config;
//! let cfg = Config::isomorphism();
//! ```
//!
//! Induced subgraph search that ignores parallel edges:
//! ```ignore
//! use isomatch_common::{Config, EdgeSemantics, MatchMode};
//! let cfg = Config::builder()
//!     .mode(MatchMode::InducedSubgraph)
//!     .edges(EdgeSemantics::Simple)
//!     .build();
//! ```

use std::fmt;

/// Which structural relation the search establishes between host and pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Bijection preserving adjacency exactly in both directions.
    #[default]
    Isomorphism,
    /// Injection preserving every pattern edge; extra host edges allowed.
    Subgraph,
    /// Injection whose image carries exactly the pattern's edges.
    InducedSubgraph,
}

impl MatchMode {
    /// True for the subgraph modes, where host and pattern sizes may differ.
    pub const fn is_subgraph(self) -> bool {
        !matches!(self, Self::Isomorphism)
    }

    /// True when absent pattern edges must also be absent in the host.
    pub const fn is_exact(self) -> bool {
        !matches!(self, Self::Subgraph)
    }

    /// Compare a host-side count against a pattern-side count: equality for
    /// isomorphism, host at least pattern for the subgraph modes.
    #[inline]
    pub const fn admits(self, host: usize, pattern: usize) -> bool {
        match self {
            Self::Isomorphism => host == pattern,
            Self::Subgraph | Self::InducedSubgraph => host >= pattern,
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Isomorphism => "isomorphism",
            Self::Subgraph => "subgraph",
            Self::InducedSubgraph => "induced subgraph",
        };
        f.write_str(name)
    }
}

/// How parallel edges take part in the comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeSemantics {
    /// Multiplicity-aware iff either graph reports itself as a multigraph.
    #[default]
    Auto,
    /// Only edge presence is compared.
    Simple,
    /// Edge counts are compared: equal for isomorphism and induced subgraph,
    /// host at least pattern for subgraph.
    Multiplicity,
}

/// Which edge semantics the graphs must carry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Directedness {
    /// Take the semantics from the graphs; both must agree.
    #[default]
    Infer,
    /// Both graphs must be undirected.
    Undirected,
    /// Both graphs must be directed.
    Directed,
}

impl Directedness {
    /// The directedness required of the graphs, if fixed by configuration.
    pub const fn required(self) -> Option<bool> {
        match self {
            Self::Infer => None,
            Self::Undirected => Some(false),
            Self::Directed => Some(true),
        }
    }
}

/// Global search configuration, fixed for the lifetime of one search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Structural relation to establish.
    pub mode: MatchMode,
    /// Parallel-edge handling.
    pub edges: EdgeSemantics,
    /// Expected edge semantics of both graphs.
    pub directedness: Directedness,
    /// Stop after this many candidate pairs have been visited.
    pub call_limit: Option<usize>,
}

impl Config {
    /// Create a new configuration with inferred edge handling.
    pub const fn new(mode: MatchMode) -> Self {
        Self {
            mode,
            edges: EdgeSemantics::Auto,
            directedness: Directedness::Infer,
            call_limit: None,
        }
    }

    /// Convenience: full isomorphism.
    pub const fn isomorphism() -> Self {
        Self::new(MatchMode::Isomorphism)
    }

    /// Convenience: non-induced subgraph isomorphism.
    pub const fn subgraph() -> Self {
        Self::new(MatchMode::Subgraph)
    }

    /// Convenience: induced subgraph isomorphism.
    pub const fn induced_subgraph() -> Self {
        Self::new(MatchMode::InducedSubgraph)
    }

    /// Start from the default configuration and adjust fields fluently.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Resolve [`EdgeSemantics::Auto`] against the graphs being matched.
    pub const fn counts_multiplicity(&self, either_is_multigraph: bool) -> bool {
        match self.edges {
            EdgeSemantics::Auto => either_is_multigraph,
            EdgeSemantics::Simple => false,
            EdgeSemantics::Multiplicity => true,
        }
    }
}

impl From<MatchMode> for Config {
    fn from(mode: MatchMode) -> Self {
        Self::new(mode)
    }
}

/// Fluent builder for [`Config`].
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the match mode.
    #[must_use]
    pub const fn mode(mut self, mode: MatchMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Set the parallel-edge handling.
    #[must_use]
    pub const fn edges(mut self, edges: EdgeSemantics) -> Self {
        self.config.edges = edges;
        self
    }

    /// Set the expected directedness.
    #[must_use]
    pub const fn directedness(mut self, directedness: Directedness) -> Self {
        self.config.directedness = directedness;
        self
    }

    /// Cap the number of candidate pairs visited.
    #[must_use]
    pub const fn call_limit(mut self, limit: usize) -> Self {
        self.config.call_limit = Some(limit);
        self
    }

    /// Finish building.
    pub const fn build(self) -> Config {
        self.config
    }
}
