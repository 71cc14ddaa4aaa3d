//! Common utilities and shared types for the isomatch workspace.
//!
//! This crate provides the graph capability contract consumed by the matching
//! engine, a reference adjacency container implementing it, and the search
//! configuration shared across the workspace.

mod config;
pub mod graph;

pub use crate::config::*;
pub use crate::graph::*;
