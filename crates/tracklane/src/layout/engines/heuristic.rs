//! Randomized multi-trial coloring engine
//!
//! Runs the per-round coloring of the greedy engine many times, each time
//! with the remaining vertices shuffled at the start of every round, and
//! keeps the trial that needed the fewest rows.
//!
//! Trials are independent. A master random source hands each trial a `u64`
//! seed, and the trial runs on its own [`StdRng`] seeded from it, so trial
//! `n` depends only on the master seed and on `n`. Raising the trial count
//! therefore only appends trials, and the best row count can only go down.
//!
//! [`Engine::trials`] exposes the trials as a lazy iterator for callers that
//! want to inspect every attempt rather than only the winner.

use std::iter::FusedIterator;

use log::{debug, trace};
use rand::{Rng, SeedableRng, rngs::StdRng};

use tracklane_core::assignment::RowAssignment;

use crate::{
    layout::{engines::RowEngine, ordering::Shuffled},
    structure::OverlapGraph,
};

use super::greedy::color_by_rounds;

/// Number of trials used when none is configured.
pub(super) const DEFAULT_TRIALS: usize = 100;

/// Best-of-N randomized per-round coloring.
#[derive(Debug, Clone)]
pub struct Engine {
    trials: usize,
    seed: Option<u64>,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
        }
    }
}

impl Engine {
    /// Create a new heuristic engine with 100 unseeded trials
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of trials. Zero is treated as one.
    pub fn set_trials(&mut self, trials: usize) -> &mut Self {
        self.trials = trials.max(1);
        self
    }

    /// Seed the master random source so that layouts are reproducible
    pub fn set_seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the number of trials run per layout.
    pub fn trial_count(&self) -> usize {
        self.trials.max(1)
    }

    /// Streams the trials of one layout of `graph`.
    ///
    /// Uses the configured seed, or fresh OS entropy when unseeded.
    pub fn trials<'g>(&self, graph: &'g OverlapGraph) -> Trials<'g, StdRng> {
        let master = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        self.trials_with_rng(graph, master)
    }

    /// Streams the trials of one layout of `graph`, drawing trial seeds from
    /// `master`.
    pub fn trials_with_rng<'g, R: Rng>(&self, graph: &'g OverlapGraph, master: R) -> Trials<'g, R> {
        Trials {
            graph,
            master,
            next: 0,
            total: self.trial_count(),
        }
    }

    #[cfg(feature = "parallel")]
    fn best_parallel(&self, graph: &OverlapGraph) -> Option<TrialOutcome> {
        use rayon::prelude::*;

        let seeds: Vec<u64> = self.trials(graph).seeds().collect();
        seeds
            .into_par_iter()
            .enumerate()
            .map(|(trial, seed)| TrialOutcome::run(graph, trial, seed))
            .min_by_key(|outcome| (outcome.assignment.row_count(), outcome.trial))
    }
}

impl RowEngine for Engine {
    fn calculate(&self, graph: &OverlapGraph) -> RowAssignment {
        if graph.is_empty() {
            return RowAssignment::new();
        }

        #[cfg(feature = "parallel")]
        let best = self.best_parallel(graph);
        #[cfg(not(feature = "parallel"))]
        let best = self.trials(graph).best();

        let Some(best) = best else {
            return RowAssignment::new();
        };
        debug!(
            intervals = graph.len(),
            trials = self.trial_count(),
            best_trial = best.trial,
            rows = best.assignment.row_count();
            "Heuristic layout finished"
        );
        best.assignment
    }
}

/// Result of a single randomized trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialOutcome {
    /// Zero-based position of the trial in its sequence.
    pub trial: usize,
    /// Seed the trial's shuffles were drawn from.
    pub seed: u64,
    /// Row assignment the trial produced.
    pub assignment: RowAssignment,
}

impl TrialOutcome {
    fn run(graph: &OverlapGraph, trial: usize, seed: u64) -> Self {
        let mut ordering = Shuffled::new(StdRng::seed_from_u64(seed));
        let assignment = color_by_rounds(graph, &mut ordering);
        trace!(trial, seed, rows = assignment.row_count(); "Finished trial");
        Self {
            trial,
            seed,
            assignment,
        }
    }
}

/// Lazy, finite sequence of randomized trials over one graph.
///
/// Created by [`Engine::trials`] or [`Engine::trials_with_rng`].
#[derive(Debug)]
pub struct Trials<'g, R> {
    graph: &'g OverlapGraph,
    master: R,
    next: usize,
    total: usize,
}

impl<R: Rng> Trials<'_, R> {
    /// Consumes the remaining trials and returns the one with the fewest
    /// rows. Ties go to the earliest trial.
    pub fn best(self) -> Option<TrialOutcome> {
        self.min_by_key(|outcome| outcome.assignment.row_count())
    }

    /// Draws the seeds of the remaining trials without running them.
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    pub(crate) fn seeds(mut self) -> impl Iterator<Item = u64> {
        let remaining = self.total - self.next;
        (0..remaining).map(move |_| self.master.random::<u64>())
    }
}

impl<R: Rng> Iterator for Trials<'_, R> {
    type Item = TrialOutcome;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let trial = self.next;
        self.next += 1;
        let seed: u64 = self.master.random();
        Some(TrialOutcome::run(self.graph, trial, seed))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.next;
        (remaining, Some(remaining))
    }
}

impl<R: Rng> ExactSizeIterator for Trials<'_, R> {}

impl<R: Rng> FusedIterator for Trials<'_, R> {}
