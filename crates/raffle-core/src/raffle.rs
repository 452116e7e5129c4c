//! A complete raffle run: draw prize numbers, then allocate.

use rand::Rng;
use tracing::{info, info_span};

use raffle_model::{
    Allocation, Prize, PrizeInsight, RaffleError, RaffleOptions, Result, Submission,
};

use crate::draw::assign_numbers;
use crate::driver::allocate_all;
use crate::insight::prize_insights;

/// Raffle configured with a number range and insight depth.
#[derive(Debug, Clone, Copy, Default)]
pub struct Raffle {
    options: RaffleOptions,
}

/// Drawn prizes and their allocations, in prize order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaffleOutcome {
    pub prizes: Vec<Prize>,
    pub allocations: Vec<Allocation>,
}

impl Raffle {
    pub fn new(options: RaffleOptions) -> Self {
        Self { options }
    }

    /// Draws a unique number for every prize name.
    ///
    /// # Errors
    ///
    /// Returns [`RaffleError::NoPrizes`] for an empty prize list and
    /// [`RaffleError::NotEnoughNumbers`] when the range is too small.
    pub fn draw<R: Rng + ?Sized>(
        &self,
        prize_names: &[String],
        rng: &mut R,
    ) -> Result<Vec<Prize>> {
        if prize_names.is_empty() {
            return Err(RaffleError::NoPrizes);
        }
        assign_numbers(prize_names, self.options.range, rng)
    }

    /// Allocates already drawn prizes to submissions.
    pub fn allocate(&self, prizes: Vec<Prize>, submissions: &[Submission]) -> RaffleOutcome {
        let span = info_span!(
            "allocate",
            prizes = prizes.len(),
            submissions = submissions.len()
        );
        let _guard = span.enter();
        let allocations = allocate_all(&prizes, submissions);
        let outcome = RaffleOutcome {
            prizes,
            allocations,
        };
        info!(
            awarded = outcome.winners_count(),
            unawarded = outcome.unawarded().count(),
            "raffle complete"
        );
        outcome
    }

    /// Draws prize numbers, then allocates.
    ///
    /// # Errors
    ///
    /// See [`Raffle::draw`].
    pub fn run<R: Rng + ?Sized>(
        &self,
        prize_names: &[String],
        submissions: &[Submission],
        rng: &mut R,
    ) -> Result<RaffleOutcome> {
        let prizes = self.draw(prize_names, rng)?;
        Ok(self.allocate(prizes, submissions))
    }

    /// Insight rankings at the configured depth.
    pub fn insights(&self, outcome: &RaffleOutcome) -> Vec<PrizeInsight> {
        prize_insights(&outcome.allocations, self.options.top_n)
    }
}

impl RaffleOutcome {
    pub fn winners_count(&self) -> usize {
        self.allocations
            .iter()
            .filter(|allocation| allocation.has_winner())
            .count()
    }

    /// Allocations that ended without an eligible winner.
    pub fn unawarded(&self) -> impl Iterator<Item = &Allocation> {
        self.allocations
            .iter()
            .filter(|allocation| !allocation.has_winner())
    }
}
