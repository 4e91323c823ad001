//! Run statistics tracking

use std::time::Duration;

/// Wall-clock statistics for one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStatistics {
    /// Total wall-clock time for the run
    pub total_time: Duration,

    /// Number of shots executed
    pub shots: usize,

    /// Circuit steps replayed per shot
    pub steps_per_shot: usize,

    /// Unitary gate applications per shot, branch bodies included
    pub gates_per_shot: usize,

    /// Distinct outcomes observed
    pub unique_outcomes: usize,
}

impl RunStatistics {
    /// Create an empty statistics record
    pub fn new() -> Self {
        Self::default()
    }

    /// Shot throughput over the whole run
    pub fn shots_per_second(&self) -> f64 {
        let secs = self.total_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.shots as f64 / secs
        }
    }
}

impl std::fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Run statistics:")?;
        writeln!(f, "  Total time: {:?}", self.total_time)?;
        writeln!(
            f,
            "  Shots: {} ({:.0} shots/sec)",
            self.shots,
            self.shots_per_second()
        )?;
        writeln!(
            f,
            "  Circuit: {} steps, {} gates per shot",
            self.steps_per_shot, self.gates_per_shot
        )?;
        writeln!(f, "  Unique outcomes: {}", self.unique_outcomes)?;
        Ok(())
    }
}
