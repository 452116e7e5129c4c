//! Configuration options for a raffle draw.

use serde::{Deserialize, Serialize};

/// Number of closest submissions listed per prize in insights.
pub const DEFAULT_TOP_N: usize = 3;

/// Closed range prize numbers are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRange {
    pub low: i64,
    pub high: i64,
}

impl NumberRange {
    pub const fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    /// Count of distinct numbers in the range (0 when inverted).
    pub fn size(&self) -> u64 {
        if self.high < self.low {
            0
        } else {
            self.high.abs_diff(self.low).saturating_add(1)
        }
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

impl Default for NumberRange {
    fn default() -> Self {
        Self::new(1, 100)
    }
}

/// Options controlling a raffle run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaffleOptions {
    /// Pool the prize numbers are drawn from.
    pub range: NumberRange,
    /// How many closest submissions to list per prize in insights.
    pub top_n: usize,
}

impl Default for RaffleOptions {
    fn default() -> Self {
        Self {
            range: NumberRange::default(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl RaffleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_range(mut self, range: NumberRange) -> Self {
        self.range = range;
        self
    }

    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}
