//! MineForge Solver Engine
//!
//! This crate provides the enumeration engine including:
//! - Frontier of partial assignments (arena of fixed-width rows)
//! - Per-group bound computation with precomputed free capacity
//! - Layer-by-layer branching with optional parallel bound computation
//! - Materialization of survivors into configurations
//! - Island splitting and recombination
//! - Termination guards (node count, deadline, external flag)

pub mod bounder;
pub mod engine;
pub mod frontier;
pub mod islands;
pub mod materialize;
pub mod scope;
pub mod stats;
pub mod termination;

pub use bounder::{Bounds, GroupBounder};
pub use engine::{ConfigurationEnumerator, Enumeration, IslandEnumeration};
pub use frontier::{Frontier, LayerOutcome};
pub use islands::{split_islands, Island, IslandSolution};
pub use materialize::materialize;
pub use scope::EnumerationScope;
pub use stats::EnumerationStats;
pub use termination::{
    ExternalTermination, NoTermination, NodeCountTermination, OrTermination, Termination,
    TimeTermination,
};
