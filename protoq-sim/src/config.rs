//! Simulator configuration

use crate::error::{Result, SimulatorError};

/// Configuration for the shot execution engine
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorConfig {
    /// Default number of measurement shots for [`Simulator::sample`]
    ///
    /// [`Simulator::run`] takes an explicit shot count and ignores this.
    ///
    /// Default: 1024
    ///
    /// [`Simulator::sample`]: crate::Simulator::sample
    /// [`Simulator::run`]: crate::Simulator::run
    pub shots: usize,

    /// Random seed for reproducible runs
    ///
    /// With a seed set, every shot derives its own deterministic stream
    /// from the seed and the shot index, so a run reproduces exactly,
    /// including under parallel execution. With `None`, each shot draws
    /// an entropy seed.
    ///
    /// Default: None (random)
    pub seed: Option<u64>,

    /// Minimum shot count before trials fan out over rayon workers
    ///
    /// Small runs stay single-threaded to avoid scheduling overhead.
    ///
    /// Default: 512
    pub parallel_threshold: usize,

    /// Collect wall-clock statistics for the run
    ///
    /// Default: false
    pub collect_statistics: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            shots: 1024,
            seed: None,
            parallel_threshold: 512,
            collect_statistics: false,
        }
    }
}

impl SimulatorConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration for reproducible debugging
    ///
    /// Deterministic seed, statistics collection on.
    pub fn debug() -> Self {
        Self {
            seed: Some(42),
            collect_statistics: true,
            ..Default::default()
        }
    }

    /// Set the default number of measurement shots
    pub fn with_shots(mut self, shots: usize) -> Self {
        self.shots = shots;
        self
    }

    /// Set the random seed for deterministic execution
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the minimum shot count for parallel execution
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Enable or disable statistics collection
    pub fn with_statistics(mut self, enabled: bool) -> Self {
        self.collect_statistics = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.shots == 0 {
            return Err(SimulatorError::InvalidConfig(
                "default shot count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
