pub mod allocation;
pub mod entry;
pub mod error;
pub mod options;

pub use allocation::{
    Allocation, AllocationOutcome, DistanceRecord, PrizeInsight, PrizeKey, RankedEntry,
};
pub use entry::{MAX_PRIZE_NAME_CHARS, Prize, Submission};
pub use error::{RaffleError, Result};
pub use options::{DEFAULT_TOP_N, NumberRange, RaffleOptions};
