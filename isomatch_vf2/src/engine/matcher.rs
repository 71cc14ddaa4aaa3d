//! The resumable search driver.

use isomatch_common::{Config, GraphView, NodeIdx};

use super::candidates::CandidateCursor;
use super::feasibility::{EdgePolicy, Feasibility};
use super::state::MatchingState;
use crate::error::MatchError;
use crate::mapping::Mapping;
use crate::observer::{NoObserver, SearchObserver, StepBudget, Visit};
use crate::prefilter;
use crate::semantic::{EdgeMatcher, NoSemanticMatch, NodeMatcher};

/// Where a search stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// Not started, or suspended between two mappings.
    Searching,
    /// The last call to `next` produced a mapping.
    Found,
    /// Every candidate has been tried.
    Exhausted,
    /// An observer or the call limit stopped the search.
    Interrupted,
}

/// One search level: its candidate cursor and whether its pair is pushed.
#[derive(Debug)]
struct Level {
    cursor: CandidateCursor,
    pushed: bool,
}

impl Level {
    const fn new(cursor: CandidateCursor) -> Self {
        Self { cursor, pushed: false }
    }
}

/// Resumable VF2 search yielding every mapping of `pattern` into `host`.
///
/// The recursion of the classic formulation is replaced by an explicit
/// stack of levels, so the search can suspend after each mapping and
/// resume on the next call to [`Iterator::next`]. Mappings come out in a
/// deterministic order for a given pair of graphs and configuration.
///
/// ```ignore
/// let matcher = Vf2Matcher::new(&host, &pattern, &Config::subgraph())?;
/// for mapping in matcher {
///     println!("{:?}", mapping.pattern_to_host());
/// }
/// ```
#[derive(Debug)]
pub struct Vf2Matcher<'g, G1, G2, NM = NoSemanticMatch, EM = NoSemanticMatch, O = NoObserver> {
    state: MatchingState<'g, G1, G2>,
    feasibility: Feasibility<NM, EM>,
    observer: O,
    budget: Option<StepBudget>,
    stack: Vec<Level>,
    status: SearchStatus,
    /// An empty pattern has exactly one (empty) mapping, handed out once.
    pending_empty: bool,
    found: usize,
}

impl<'g, G1: GraphView, G2: GraphView> Vf2Matcher<'g, G1, G2> {
    /// Prepare a search of `pattern` inside `host`.
    ///
    /// No candidate is examined until the first call to `next`. Graphs
    /// failing the whole-graph prefilter produce a matcher that is already
    /// [`SearchStatus::Exhausted`].
    ///
    /// # Errors
    ///
    /// Returns [`MatchError`] if the graphs disagree on directedness, do not
    /// have the directedness `config` requires, or a subgraph pattern is
    /// larger than its host.
    pub fn new(host: &'g G1, pattern: &'g G2, config: &Config) -> Result<Self, MatchError> {
        let directed = prefilter::validate(host, pattern, config)?;
        let multiplicity = config.counts_multiplicity(host.is_multigraph() || pattern.is_multigraph());
        let policy = EdgePolicy::new(config.mode, multiplicity);
        let state = MatchingState::new(host, pattern, directed);

        tracing::info!(
            "starting {} search: host nodes: {}, pattern nodes: {}, directed: {}, multiplicity: {}",
            config.mode,
            host.node_count(),
            pattern.node_count(),
            directed,
            multiplicity
        );

        let mut stack = Vec::new();
        let mut status = SearchStatus::Searching;
        let mut pending_empty = false;
        if !prefilter::admits(host, pattern, config.mode, multiplicity) {
            tracing::debug!("prefilter rejected the pair, nothing to search");
            status = SearchStatus::Exhausted;
        } else if pattern.node_count() == 0 {
            pending_empty = true;
        } else {
            stack.push(Level::new(CandidateCursor::new(&state)));
        }

        Ok(Self {
            state,
            feasibility: Feasibility::new(policy, directed, NoSemanticMatch, NoSemanticMatch),
            observer: NoObserver,
            budget: config.call_limit.map(StepBudget::new),
            stack,
            status,
            pending_empty,
            found: 0,
        })
    }
}

impl<'g, G1, G2, NM, EM, O> Vf2Matcher<'g, G1, G2, NM, EM, O> {
    /// Restrict node pairs with a semantic predicate. Call before searching.
    pub fn with_node_match<N: NodeMatcher>(self, node_match: N) -> Vf2Matcher<'g, G1, G2, N, EM, O> {
        Vf2Matcher {
            state: self.state,
            feasibility: self.feasibility.with_node_match(node_match),
            observer: self.observer,
            budget: self.budget,
            stack: self.stack,
            status: self.status,
            pending_empty: self.pending_empty,
            found: self.found,
        }
    }

    /// Restrict edge pairs with a semantic predicate. Call before searching.
    pub fn with_edge_match<E: EdgeMatcher>(self, edge_match: E) -> Vf2Matcher<'g, G1, G2, NM, E, O> {
        Vf2Matcher {
            state: self.state,
            feasibility: self.feasibility.with_edge_match(edge_match),
            observer: self.observer,
            budget: self.budget,
            stack: self.stack,
            status: self.status,
            pending_empty: self.pending_empty,
            found: self.found,
        }
    }

    /// Attach an observer that sees every candidate pair.
    pub fn with_observer<P: SearchObserver>(self, observer: P) -> Vf2Matcher<'g, G1, G2, NM, EM, P> {
        Vf2Matcher {
            state: self.state,
            feasibility: self.feasibility,
            observer,
            budget: self.budget,
            stack: self.stack,
            status: self.status,
            pending_empty: self.pending_empty,
            found: self.found,
        }
    }

    /// Current search status.
    #[must_use]
    pub const fn status(&self) -> SearchStatus {
        self.status
    }

    /// The attached observer.
    #[must_use]
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    /// Drop the search and keep the observer, e.g. to read final stats.
    #[must_use]
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Mappings produced so far.
    #[must_use]
    pub const fn mappings_found(&self) -> usize {
        self.found
    }

    fn interrupt(&mut self, host: NodeIdx, pattern: NodeIdx) {
        tracing::debug!(
            "search interrupted at candidate ({host}, {pattern}) after {} mappings",
            self.found
        );
        self.stack.clear();
        self.status = SearchStatus::Interrupted;
    }
}

impl<G1, G2, NM, EM, O> Iterator for Vf2Matcher<'_, G1, G2, NM, EM, O>
where
    G1: GraphView,
    G2: GraphView,
    NM: NodeMatcher,
    EM: EdgeMatcher,
    O: SearchObserver,
{
    type Item = Mapping;

    fn next(&mut self) -> Option<Mapping> {
        if matches!(self.status, SearchStatus::Exhausted | SearchStatus::Interrupted) {
            return None;
        }
        if self.pending_empty {
            self.pending_empty = false;
            self.found += 1;
            self.status = SearchStatus::Found;
            self.observer.mapping_found(0);
            return Some(Mapping::default());
        }
        self.status = SearchStatus::Searching;

        while let Some(level) = self.stack.last_mut() {
            if level.pushed {
                level.pushed = false;
                let (host, pattern) = self.state.pop();
                tracing::trace!("backtracking: unmapped {host} -> {pattern}");
            }

            let Some((n1, n2)) = level.cursor.next(&self.state) else {
                tracing::trace!(
                    "level {} exhausted ({:?} pool)",
                    self.state.depth(),
                    level.cursor.pool()
                );
                self.stack.pop();
                continue;
            };

            let depth = self.state.depth();
            let budget_spent = self
                .budget
                .as_mut()
                .is_some_and(|budget| budget.visit(n1, n2, depth) == Visit::Stop);
            if budget_spent || self.observer.visit(n1, n2, depth) == Visit::Stop {
                self.interrupt(n1, n2);
                return None;
            }

            let feasible = self.feasibility.check(&self.state, n1, n2);
            self.observer.feasibility_checked(feasible);
            if !feasible {
                continue;
            }

            self.state.push(n1, n2);
            if !self.feasibility.frontier_sizes_agree(&self.state) {
                self.state.pop();
                continue;
            }
            level.pushed = true;

            if self.state.is_complete() {
                self.found += 1;
                self.status = SearchStatus::Found;
                self.observer.mapping_found(self.state.depth());
                tracing::debug!("mapping {} found", self.found);
                return Some(self.state.mapping());
            }
            let cursor = CandidateCursor::new(&self.state);
            self.stack.push(Level::new(cursor));
        }

        tracing::info!("search exhausted: found {} mappings", self.found);
        self.status = SearchStatus::Exhausted;
        None
    }
}
