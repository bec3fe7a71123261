//! Tracklane - Row assignment for overlapping genomic annotations.
//!
//! Features on a track are intervals over a one-dimensional coordinate axis.
//! Tracklane builds the graph of which features overlap, optionally padded by
//! a tolerance, and assigns every feature a row so that no two overlapping
//! features share one. Three strategies are available: an exact sweep, a
//! deterministic greedy coloring, and a randomized multi-trial heuristic.

pub mod config;
pub mod layout;
pub mod structure;

mod error;

pub use tracklane_core::{assignment, identifier, interval, strategy};

pub use error::TracklaneError;

use log::{debug, info, trace};

use assignment::RowAssignment;
use config::AppConfig;
use interval::Interval;
use strategy::LayoutStrategy;
use structure::OverlapGraph;

/// Builder for laying out annotation tracks.
///
/// The builder owns an [`AppConfig`]; the `with_*` methods override single
/// settings on top of it.
///
/// # Examples
///
/// ```rust
/// use tracklane::{LayoutBuilder, interval::Interval, strategy::LayoutStrategy};
///
/// let intervals = [
///     Interval::new("A", 0.0, 10.0),
///     Interval::new("B", 5.0, 15.0),
///     Interval::new("C", 12.0, 20.0),
/// ];
///
/// let assignment = LayoutBuilder::default()
///     .with_strategy(LayoutStrategy::Sweep)
///     .layout(&intervals)
///     .expect("Failed to lay out");
/// assert_eq!(assignment.row_count(), 2);
///
/// // Padding every feature by 3 makes B and C collide as well.
/// let assignment = LayoutBuilder::default()
///     .with_tolerance(3.0)
///     .layout(&intervals)
///     .expect("Failed to lay out");
/// assert_eq!(assignment.row_count(), 3);
/// ```
#[derive(Debug, Default, Clone)]
pub struct LayoutBuilder {
    config: AppConfig,
}

impl LayoutBuilder {
    /// Create a new layout builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration with the layout settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Select the row-assignment strategy.
    pub fn with_strategy(mut self, strategy: LayoutStrategy) -> Self {
        self.config.layout_mut().set_strategy(strategy);
        self
    }

    /// Set the overlap tolerance applied to every interval.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config.layout_mut().set_tolerance(tolerance);
        self
    }

    /// Set the number of heuristic trials.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.config.layout_mut().set_trials(trials);
        self
    }

    /// Seed the heuristic strategy.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.layout_mut().set_seed(Some(seed));
        self
    }

    /// Returns the effective configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Build the overlap graph of `intervals` under the configured tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`TracklaneError::InvalidTolerance`] for a negative or
    /// non-finite tolerance and [`TracklaneError::DuplicateId`] when two
    /// intervals share an identity.
    pub fn overlap_graph(&self, intervals: &[Interval]) -> Result<OverlapGraph, TracklaneError> {
        OverlapGraph::new(intervals, self.config.layout().tolerance())
    }

    /// Assign a row to every interval.
    ///
    /// The returned assignment lists intervals in input order. Overlapping
    /// intervals never share a row, and an empty input yields zero rows.
    ///
    /// # Errors
    ///
    /// Fails on the same malformed input as [`LayoutBuilder::overlap_graph`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tracklane::{LayoutBuilder, identifier::Id, interval::Interval};
    /// use tracklane::strategy::LayoutStrategy;
    ///
    /// let assignment = LayoutBuilder::default()
    ///     .with_strategy(LayoutStrategy::Heuristic)
    ///     .with_trials(20)
    ///     .with_seed(42)
    ///     .layout(&[
    ///         Interval::new("gene", 0.0, 100.0),
    ///         Interval::new("exon", 40.0, 60.0),
    ///     ])
    ///     .expect("Failed to lay out");
    ///
    /// assert_ne!(assignment.row(Id::new("gene")), assignment.row(Id::new("exon")));
    /// ```
    pub fn layout(&self, intervals: &[Interval]) -> Result<RowAssignment, TracklaneError> {
        let layout_config = self.config.layout();
        info!(
            strategy:% = layout_config.strategy(),
            intervals = intervals.len(),
            tolerance = layout_config.tolerance();
            "Laying out intervals"
        );

        let graph = self.overlap_graph(intervals)?;
        debug!(edges = graph.edge_count(); "Overlap graph built");

        let engine = layout::EngineBuilder::new()
            .with_trials(layout_config.trials())
            .with_seed(layout_config.seed())
            .engine(layout_config.strategy());
        let assignment = engine.calculate(&graph);

        info!(rows = assignment.row_count(); "Layout calculated");
        trace!(assignment:?; "Row assignment");

        Ok(assignment)
    }
}
