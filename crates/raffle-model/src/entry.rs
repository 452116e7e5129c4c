//! Prize and submission records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RaffleError, Result};

/// Longest accepted prize name, in characters.
pub const MAX_PRIZE_NAME_CHARS: usize = 100;

/// A named prize with its drawn number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Prize {
    pub name: String,
    pub assigned_number: i64,
}

impl Prize {
    pub fn new(name: impl Into<String>, assigned_number: i64) -> Self {
        Self {
            name: name.into(),
            assigned_number,
        }
    }

    /// Checks that a prize name is non-empty and at most
    /// [`MAX_PRIZE_NAME_CHARS`] characters long.
    pub fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(RaffleError::EmptyPrizeName);
        }
        let length = name.chars().count();
        if length > MAX_PRIZE_NAME_CHARS {
            return Err(RaffleError::PrizeNameTooLong {
                length,
                max: MAX_PRIZE_NAME_CHARS,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Prize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.assigned_number)
    }
}

/// One entrant's guess. The submitter name is the exclusivity key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Submission {
    pub submitter_name: String,
    pub guess: i64,
}

impl Submission {
    pub fn new(submitter_name: impl Into<String>, guess: i64) -> Self {
        Self {
            submitter_name: submitter_name.into(),
            guess,
        }
    }

    /// Absolute distance between this guess and a prize number.
    pub fn distance_to(&self, prize_number: i64) -> u64 {
        prize_number.abs_diff(self.guess)
    }
}

impl fmt::Display for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.submitter_name, self.guess)
    }
}
