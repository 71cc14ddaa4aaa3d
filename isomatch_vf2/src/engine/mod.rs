//! The VF2 search engine: state, candidate generation, feasibility and the
//! resumable matcher built on top of them.

mod candidates;
mod feasibility;
mod matcher;
mod state;

pub use feasibility::EdgePolicy;
pub use matcher::{SearchStatus, Vf2Matcher};
