//! Expense category model
//!
//! Expenses are filed under one of a fixed set of categories. The set is
//! enforced when an expense is entered; stored records keep the category as
//! plain text so that rows written by older versions still load.

use std::fmt;
use std::str::FromStr;

/// The fixed set of expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Bills,
    Salary,
    Other,
}

impl Category {
    /// Get all categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Transport,
            Self::Entertainment,
            Self::Shopping,
            Self::Bills,
            Self::Salary,
            Self::Other,
        ]
    }

    /// Get the name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Salary => "Salary",
            Self::Other => "Other",
        }
    }

    /// All category names joined with `/`, as shown in prompts and errors
    pub fn choices() -> String {
        Self::all()
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a string is not one of the known categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid category '{}'. Must be one of: {}",
            self.0,
            Category::choices()
        )
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Case-insensitive match against the category names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
