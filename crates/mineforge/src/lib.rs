//! MineForge - Exhaustive Minefield Configuration Enumeration
//!
//! Given the groups of a minefield front and the clues spanning them, find
//! every assignment of mine counts that satisfies all clues at once.
//!
//! # Example
//!
//! ```rust
//! use mineforge::prelude::*;
//!
//! let mut builder = ProblemBuilder::new();
//! let a = builder.add_group(1);
//! let b = builder.add_group(2);
//! builder.add_number(2, [a, b]);
//!
//! let configs = find_configurations(&builder.to_groups(), builder.n_groups()).unwrap();
//! assert_eq!(configs.count(), 2);
//! assert_eq!(configs.as_slice()[0].values(), &[0, 2]);
//! ```

pub use mineforge_core::{
    Configuration, Configurations, Group, GroupIndex, InputError, MineforgeError, Number, Problem,
    ProblemBuilder, Result, TerminationReason,
};

pub use mineforge_config::{ConfigError, EnumerationConfig, LayerThreadCount, TerminationConfig};

pub use mineforge_solver::{
    ConfigurationEnumerator, Enumeration, EnumerationStats, ExternalTermination, IslandSolution,
    NodeCountTermination, Termination, TimeTermination,
};

#[cfg(feature = "console")]
pub use mineforge_console as console;

mod find;
pub use find::{find_configurations, find_configurations_with};

pub mod prelude {
    pub use super::{find_configurations, find_configurations_with};
    pub use super::{Configuration, Configurations, Group, Number, ProblemBuilder};
    pub use super::{EnumerationConfig, MineforgeError};
}
