//! Bounded unknowns.

use std::fmt;

use super::Number;

/// An equivalence class of cells holding between 0 and `max` mines.
///
/// `members` lists every number whose spans include this group.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    max: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    members: Vec<Number>,
}

impl Group {
    pub fn new(max: u32, members: Vec<Number>) -> Self {
        Self { max, members }
    }

    /// Creates a group no number constrains.
    pub fn unconstrained(max: u32) -> Self {
        Self::new(max, Vec::new())
    }

    /// Adds a member number.
    pub fn with_member(mut self, number: Number) -> Self {
        self.members.push(number);
        self
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn members(&self) -> &[Number] {
        &self.members
    }

    pub fn is_unconstrained(&self) -> bool {
        self.members.is_empty()
    }
}

// Header line, then one indented line per member.
impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Group with max {} and numbers:", self.max)?;
        for nr in &self.members {
            write!(f, "\n  {}", nr)?;
        }
        Ok(())
    }
}
