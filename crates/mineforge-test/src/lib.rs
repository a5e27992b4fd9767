//! Shared test fixtures for MineForge crates.
//!
//! This crate provides problems and reference answers for testing.
//!
//! - [`oracle`] - Brute-force enumeration used as ground truth
//! - [`random`] - Seeded random problem generator
//! - [`fixtures`] - Named boards with known structure
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! mineforge-test = { workspace = true }
//! ```
//!
//! Then compare against the oracle:
//!
//! ```ignore
//! use mineforge_test::{brute_force, fixtures};
//!
//! let problem = fixtures::overlapping_chain();
//! let expected = brute_force(&problem);
//! ```

pub mod fixtures;
pub mod oracle;
pub mod random;

pub use oracle::brute_force;
pub use random::{random_problem, seeded_rng};
