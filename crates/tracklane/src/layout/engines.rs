//! Layout engine factory module
//!
//! This module selects and configures a row-assignment engine for a
//! [`LayoutStrategy`]. Three engines are available:
//!
//! - [`Sweep`]: start-ordered first-fit, optimal for interval overlaps
//! - [`Greedy`]: per-round independent-set coloring under a fixed ordering
//! - [`Heuristic`]: best of many per-round colorings under random orderings

mod greedy;
mod heuristic;
mod sweep;

pub use greedy::Engine as Greedy;
pub use heuristic::{Engine as Heuristic, TrialOutcome, Trials};
pub use sweep::Engine as Sweep;

use log::debug;

use tracklane_core::{assignment::RowAssignment, strategy::LayoutStrategy};

use crate::structure::OverlapGraph;

/// Trait defining the interface for row-assignment engines.
pub trait RowEngine {
    /// Assign a row to every vertex of `graph`.
    ///
    /// Adjacent vertices never share a row. An empty graph yields an empty
    /// assignment with a row count of 0.
    fn calculate(&self, graph: &OverlapGraph) -> RowAssignment;
}

/// Builder for creating and configuring layout engines.
///
/// Only the heuristic engine has options; the other engines ignore them.
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    trials: usize,
    seed: Option<u64>,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            trials: heuristic::DEFAULT_TRIALS,
            seed: None,
        }
    }
}

impl EngineBuilder {
    /// Create a new engine builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of trials of the heuristic engine
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Seed the heuristic engine for reproducible results
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Get an engine of the specified type with configured options
    pub fn engine(&self, strategy: LayoutStrategy) -> Box<dyn RowEngine> {
        debug!(strategy:%, trials = self.trials; "Creating layout engine");
        match strategy {
            LayoutStrategy::Sweep => Box::new(Sweep::new()),
            LayoutStrategy::Greedy => Box::new(Greedy::new()),
            LayoutStrategy::Heuristic => {
                let mut engine = Heuristic::new();
                engine.set_trials(self.trials);
                if let Some(seed) = self.seed {
                    engine.set_seed(seed);
                }
                Box::new(engine)
            }
        }
    }
}
