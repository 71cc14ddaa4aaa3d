//! Candidate pair generation for one search level.
//!
//! The pattern side is fixed per level: the smallest out-terminal pattern
//! node if any, else the smallest in-terminal one (directed only), else the
//! smallest unmapped one. Host nodes are then drawn from the matching host
//! pool in ascending index order. Fixing the pattern node keeps every
//! mapping reachable along exactly one path, so enumeration has no
//! duplicates.

use isomatch_common::{GraphView, NodeIdx};

use super::state::MatchingState;

/// Which host nodes are paired with the fixed pattern node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pool {
    TerminalOut,
    TerminalIn,
    Unmapped,
}

/// Lazy, non-restartable cursor over the candidate pairs of one level.
#[derive(Clone, Debug)]
pub struct CandidateCursor {
    pattern: Option<NodeIdx>,
    pool: Pool,
    next_host: usize,
}

impl CandidateCursor {
    /// Choose the pattern node and host pool for the current state.
    pub(crate) fn new<G1: GraphView, G2: GraphView>(state: &MatchingState<'_, G1, G2>) -> Self {
        let pattern = &state.pattern;
        let (node, pool) = pattern
            .next_terminal_out(0)
            .map(|p| (Some(p), Pool::TerminalOut))
            .or_else(|| pattern.next_terminal_in(0).map(|p| (Some(p), Pool::TerminalIn)))
            .unwrap_or_else(|| (pattern.next_free(0), Pool::Unmapped));

        Self {
            pattern: node,
            pool,
            next_host: 0,
        }
    }

    /// The pattern node this level extends the mapping with.
    #[cfg(test)]
    pub(crate) const fn pattern_node(&self) -> Option<NodeIdx> {
        self.pattern
    }

    pub(crate) const fn pool(&self) -> Pool {
        self.pool
    }

    /// Next `(host, pattern)` pair, or `None` once the pool is exhausted.
    ///
    /// Must be called with the state as it was when the cursor was created.
    pub(crate) fn next<G1: GraphView, G2: GraphView>(
        &mut self,
        state: &MatchingState<'_, G1, G2>,
    ) -> Option<(NodeIdx, NodeIdx)> {
        let pattern = self.pattern?;
        let host = &state.host;
        let found = match self.pool {
            Pool::TerminalOut => host.next_terminal_out(self.next_host),
            Pool::TerminalIn => host.next_terminal_in(self.next_host),
            Pool::Unmapped => host.next_free(self.next_host),
        };
        match found {
            Some(h) => {
                self.next_host = h.as_usize() + 1;
                Some((h, pattern))
            }
            None => {
                self.next_host = host.len();
                None
            }
        }
    }
}
