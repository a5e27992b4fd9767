//! MineForge Core - Domain types for mine configuration enumeration
//!
//! This crate provides the fundamental abstractions for MineForge:
//! - Groups: bounded unknowns standing for equivalence classes of cells
//! - Numbers: exact-sum clues spanning ascending group indices
//! - Problems: validated group sequences ready for enumeration
//! - Configurations: complete assignments returned to the caller

pub mod builder;
pub mod domain;
pub mod error;
pub mod validation;

pub use builder::ProblemBuilder;
pub use domain::{Configuration, Configurations, Group, GroupIndex, Number, Problem};
pub use error::{reserve, InputError, MineforgeError, Result, TerminationReason};
