//! Domain model: groups, numbers, problems and configurations.

mod configuration;
mod group;
mod number;
mod problem;


pub use configuration::{Configuration, Configurations};
pub use group::Group;
pub use number::Number;
pub use problem::Problem;

/// Position of a group in the processing order.
pub type GroupIndex = usize;
