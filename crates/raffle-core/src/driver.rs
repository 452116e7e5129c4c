//! Sequential allocation over an ordered prize list.
//!
//! Prizes are processed in order and each winner is excluded from every later
//! prize, so earlier prizes have first claim on the closest submitter.

use std::collections::BTreeSet;

use tracing::{debug, info};

use raffle_model::{Allocation, Prize, Submission};

use crate::allocator::allocate;

/// Owns the winners set for one allocation pass.
#[derive(Debug)]
pub struct AllocationDriver<'a> {
    submissions: &'a [Submission],
    winners: BTreeSet<String>,
    allocations: Vec<Allocation>,
}

impl<'a> AllocationDriver<'a> {
    pub fn new(submissions: &'a [Submission]) -> Self {
        Self {
            submissions,
            winners: BTreeSet::new(),
            allocations: Vec::new(),
        }
    }

    /// Allocates the next prize against the submitters who have not won yet.
    pub fn allocate_next(&mut self, prize: &Prize) -> &Allocation {
        let position = self.allocations.len() + 1;
        let outcome = allocate(prize.assigned_number, self.submissions, &self.winners);
        if let Some(winner) = &outcome.winner {
            self.winners.insert(winner.submitter_name.clone());
        }
        debug!(
            position,
            prize = %prize.name,
            number = prize.assigned_number,
            winner = outcome.winner.as_ref().map(|w| w.submitter_name.as_str()),
            eligible = outcome.distances.len(),
            ties = outcome.ties.len(),
            "allocated prize"
        );
        self.allocations
            .push(Allocation::from_outcome(position, prize.clone(), outcome));
        &self.allocations[position - 1]
    }

    /// Submitter names that have already won a prize in this pass.
    pub fn winners(&self) -> &BTreeSet<String> {
        &self.winners
    }

    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    pub fn finish(self) -> Vec<Allocation> {
        self.allocations
    }
}

/// Allocates every prize in order; one record per prize, in prize order.
pub fn allocate_all(prizes: &[Prize], submissions: &[Submission]) -> Vec<Allocation> {
    let mut driver = AllocationDriver::new(submissions);
    for prize in prizes {
        driver.allocate_next(prize);
    }
    let awarded = driver.winners().len();
    info!(
        prizes = prizes.len(),
        submissions = submissions.len(),
        awarded,
        "allocation complete"
    );
    driver.finish()
}
