//! Configuration types for Tracklane layouts.
//!
//! This module provides the configuration structures that select and tune a
//! layout strategy. All types implement [`serde::Deserialize`] so they can be
//! loaded from external sources such as a TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`LayoutConfig`] - Strategy, tolerance, and heuristic settings.
//!
//! # Example
//!
//! ```
//! # use tracklane::config::AppConfig;
//! # use tracklane::strategy::LayoutStrategy;
//! let config: AppConfig = toml::from_str(
//!     r#"
//!     [layout]
//!     strategy = "heuristic"
//!     tolerance = 25.0
//!     trials = 250
//!     seed = 7
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.layout().strategy(), LayoutStrategy::Heuristic);
//! assert_eq!(config.layout().trials(), 250);
//! ```

use serde::Deserialize;

use tracklane_core::strategy::LayoutStrategy;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout configuration.
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the layout configuration for in-place overrides.
    pub fn layout_mut(&mut self) -> &mut LayoutConfig {
        &mut self.layout
    }
}

/// Strategy selection and tuning.
///
/// Missing fields fall back to their defaults: the `sweep` strategy, a
/// tolerance of 0, 100 heuristic trials, and no seed.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// [`LayoutStrategy`] used to assign rows.
    strategy: LayoutStrategy,

    /// Padding applied to both ends of every interval before testing overlap.
    tolerance: f64,

    /// Number of randomized trials run by the heuristic strategy. Zero runs one.
    trials: usize,

    /// Seed for the heuristic strategy. Unseeded runs draw OS entropy.
    seed: Option<u64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            strategy: LayoutStrategy::default(),
            tolerance: 0.0,
            trials: 100,
            seed: None,
        }
    }
}

impl LayoutConfig {
    /// Returns the configured [`LayoutStrategy`].
    pub fn strategy(&self) -> LayoutStrategy {
        self.strategy
    }

    /// Returns the overlap tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the number of heuristic trials.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Returns the heuristic seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Selects the [`LayoutStrategy`].
    pub fn set_strategy(&mut self, strategy: LayoutStrategy) -> &mut Self {
        self.strategy = strategy;
        self
    }

    /// Sets the overlap tolerance. Validated when the overlap graph is built.
    pub fn set_tolerance(&mut self, tolerance: f64) -> &mut Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the number of heuristic trials.
    pub fn set_trials(&mut self, trials: usize) -> &mut Self {
        self.trials = trials;
        self
    }

    /// Sets or clears the heuristic seed.
    pub fn set_seed(&mut self, seed: Option<u64>) -> &mut Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.layout().strategy(), LayoutStrategy::Sweep);
        assert_eq!(config.layout().tolerance(), 0.0);
        assert_eq!(config.layout().trials(), 100);
        assert_eq!(config.layout().seed(), None);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert_eq!(config.layout().strategy(), LayoutStrategy::Sweep);
        assert_eq!(config.layout().trials(), 100);
    }

    #[test]
    fn test_partial_layout_section() {
        let config: AppConfig = toml::from_str(
            r#"
            [layout]
            strategy = "greedy"
            "#,
        )
        .unwrap();

        assert_eq!(config.layout().strategy(), LayoutStrategy::Greedy);
        assert_eq!(config.layout().tolerance(), 0.0);
        assert_eq!(config.layout().seed(), None);
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
            [layout]
            strategy = "sugiyama"
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_overrides() {
        let mut config = AppConfig::default();
        config
            .layout_mut()
            .set_strategy(LayoutStrategy::Heuristic)
            .set_tolerance(4.0)
            .set_trials(12)
            .set_seed(Some(3));

        assert_eq!(config.layout().strategy(), LayoutStrategy::Heuristic);
        assert_eq!(config.layout().tolerance(), 4.0);
        assert_eq!(config.layout().trials(), 12);
        assert_eq!(config.layout().seed(), Some(3));
    }
}
