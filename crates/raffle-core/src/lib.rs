//! Prize allocation core.
//!
//! - [`draw`]: assigns each prize a unique number from a bounded pool
//! - [`allocator`]: finds the closest eligible submission for one prize number
//! - [`driver`]: walks prizes in order and enforces one prize per submitter
//! - [`insight`]: ranks the recorded distances for auditing
//! - [`raffle`]: composes the steps above into a single run

pub mod allocator;
pub mod draw;
pub mod driver;
pub mod insight;
pub mod raffle;

pub use allocator::allocate;
pub use draw::{assign_numbers, draw_numbers};
pub use driver::{AllocationDriver, allocate_all};
pub use insight::{prize_insights, rank_distances, top_n_insights};
pub use raffle::{Raffle, RaffleOutcome};
