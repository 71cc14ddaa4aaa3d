//! Search observation and interruption.
//!
//! A [`SearchObserver`] sees every candidate pair before it is checked and
//! may stop the search. Stopping leaves the matcher in
//! [`SearchStatus::Interrupted`](crate::SearchStatus::Interrupted).

use isomatch_common::NodeIdx;

/// Decision returned by [`SearchObserver::visit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visit {
    /// Check the pair and keep searching.
    Continue,
    /// Abandon the search before checking the pair.
    Stop,
}

/// Callbacks invoked by the matcher as the search unfolds.
pub trait SearchObserver {
    /// A candidate pair is about to be checked at the given depth.
    fn visit(&mut self, host: NodeIdx, pattern: NodeIdx, depth: usize) -> Visit;

    /// The feasibility verdict for the pair last visited.
    fn feasibility_checked(&mut self, _feasible: bool) {}

    /// A complete mapping was produced.
    fn mapping_found(&mut self, _depth: usize) {}
}

/// Observer that never interferes.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoObserver;

impl SearchObserver for NoObserver {
    #[inline]
    fn visit(&mut self, _host: NodeIdx, _pattern: NodeIdx, _depth: usize) -> Visit {
        Visit::Continue
    }
}

impl<F> SearchObserver for F
where
    F: FnMut(NodeIdx, NodeIdx, usize) -> Visit,
{
    #[inline]
    fn visit(&mut self, host: NodeIdx, pattern: NodeIdx, depth: usize) -> Visit {
        self(host, pattern, depth)
    }
}

/// Stops the search once a fixed number of candidate pairs were visited.
#[derive(Clone, Copy, Debug)]
pub struct StepBudget {
    remaining: usize,
}

impl StepBudget {
    /// Allow `limit` candidate visits.
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { remaining: limit }
    }

    /// Visits left before the search is stopped.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }
}

impl SearchObserver for StepBudget {
    fn visit(&mut self, _host: NodeIdx, _pattern: NodeIdx, _depth: usize) -> Visit {
        if self.remaining == 0 {
            return Visit::Stop;
        }
        self.remaining -= 1;
        Visit::Continue
    }
}

/// Counters gathered over one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidate pairs visited.
    pub candidates: usize,
    /// Feasibility checks run.
    pub feasibility_checks: usize,
    /// Checks that accepted the pair.
    pub feasible: usize,
    /// Complete mappings produced.
    pub mappings: usize,
    /// Deepest partial mapping reached.
    pub max_depth: usize,
}

impl SearchObserver for SearchStats {
    fn visit(&mut self, _host: NodeIdx, _pattern: NodeIdx, depth: usize) -> Visit {
        self.candidates += 1;
        self.max_depth = self.max_depth.max(depth);
        Visit::Continue
    }

    fn feasibility_checked(&mut self, feasible: bool) {
        self.feasibility_checks += 1;
        self.feasible += usize::from(feasible);
    }

    fn mapping_found(&mut self, depth: usize) {
        self.mappings += 1;
        self.max_depth = self.max_depth.max(depth);
    }
}
