//! Shot aggregation over circuits

use crate::config::SimulatorConfig;
use crate::error::{Result, SimulatorError};
use crate::executor::execute_shot;
use crate::result::{FrequencyTable, RunResult};
use crate::statistics::RunStatistics;
use protoq_core::Circuit;
use protoq_state::MAX_QUBITS;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::Instant;

/// Spreads shot indices across the seed space so per-shot streams from
/// one base seed are decorrelated (splitmix64 increment)
const SHOT_STREAM_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Shot-based circuit simulator
///
/// Runs a read-only circuit for N independent trials and aggregates the
/// measured outcomes into a [`FrequencyTable`]. Each trial gets a fresh
/// register and its own random stream; nothing is shared between shots,
/// which makes trials embarrassingly parallel and lets large runs fan
/// out over rayon workers.
///
/// # Example
///
/// ```
/// use protoq_core::bell_pair;
/// use protoq_sim::{Simulator, SimulatorConfig};
///
/// let simulator = Simulator::new(SimulatorConfig::default().with_seed(1));
/// let result = simulator.run(&bell_pair(), 500).unwrap();
/// assert_eq!(result.total_shots(), 500);
/// ```
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Create a simulator with the given configuration
    ///
    /// # Panics
    /// Panics if the configuration is invalid.
    pub fn new(config: SimulatorConfig) -> Self {
        config.validate().expect("invalid simulator configuration");
        Self { config }
    }

    /// Get the simulator configuration
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Run a circuit for an explicit number of shots
    ///
    /// Validation happens before any trial executes: the shot count, the
    /// circuit's qubit references, and the register size are all checked
    /// up front. The circuit is never mutated; counts in the returned
    /// table sum to `shots`.
    ///
    /// # Errors
    /// - [`SimulatorError::InvalidShotCount`] when `shots` is 0
    /// - [`SimulatorError::InvalidCircuit`] when circuit validation fails
    /// - [`SimulatorError::TooManyQubits`] when the register exceeds the
    ///   state layer's bound
    /// - [`SimulatorError::NormInvariantViolated`] on fatal mid-run drift
    ///   (the run aborts; no partial table is returned)
    pub fn run(&self, circuit: &Circuit, shots: usize) -> Result<RunResult> {
        if shots == 0 {
            return Err(SimulatorError::InvalidShotCount { shots });
        }
        circuit.validate()?;

        let num_qubits = circuit.num_qubits();
        if num_qubits > MAX_QUBITS {
            return Err(SimulatorError::TooManyQubits {
                num_qubits,
                max_qubits: MAX_QUBITS,
            });
        }

        let start = Instant::now();

        let indexed = if shots >= self.config.parallel_threshold {
            self.run_parallel(circuit, shots)?
        } else {
            self.run_sequential(circuit, shots)?
        };

        let counts = FrequencyTable::from_indexed(indexed, num_qubits);

        let mut result = RunResult::new(counts);
        if self.config.collect_statistics {
            let statistics = RunStatistics {
                total_time: start.elapsed(),
                shots,
                steps_per_shot: circuit.len(),
                gates_per_shot: circuit.gate_count(),
                unique_outcomes: result.counts.unique_states(),
            };
            result = result.with_statistics(statistics);
        }

        Ok(result)
    }

    /// Run a circuit for the configured default shot count
    pub fn sample(&self, circuit: &Circuit) -> Result<RunResult> {
        self.run(circuit, self.config.shots)
    }

    fn run_sequential(
        &self,
        circuit: &Circuit,
        shots: usize,
    ) -> Result<HashMap<usize, usize>> {
        let mut counts = HashMap::new();
        for shot in 0..shots {
            let mut rng = self.shot_rng(shot);
            let outcome = execute_shot(circuit, &mut rng, shot)?;
            *counts.entry(outcome).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// Parallel path: workers accumulate local tables over disjoint shot
    /// ranges, merged once at the end; no shared mutable state
    fn run_parallel(&self, circuit: &Circuit, shots: usize) -> Result<HashMap<usize, usize>> {
        (0..shots)
            .into_par_iter()
            .map(|shot| {
                let mut rng = self.shot_rng(shot);
                execute_shot(circuit, &mut rng, shot)
            })
            .try_fold(
                || HashMap::new(),
                |mut local: HashMap<usize, usize>, outcome| {
                    *local.entry(outcome?).or_insert(0) += 1;
                    Ok(local)
                },
            )
            .try_reduce(|| HashMap::new(), |mut merged, local| {
                for (outcome, count) in local {
                    *merged.entry(outcome).or_insert(0) += count;
                }
                Ok(merged)
            })
    }

    /// Independent random stream for one shot
    fn shot_rng(&self, shot: usize) -> StdRng {
        match self.config.seed {
            Some(seed) => {
                StdRng::seed_from_u64(seed ^ (shot as u64 + 1).wrapping_mul(SHOT_STREAM_SALT))
            }
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(SimulatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protoq_core::{bell_pair, custom, GateKind, QubitId};

    #[test]
    fn test_counts_sum_to_shots() {
        let simulator = Simulator::new(SimulatorConfig::default().with_seed(3));
        let result = simulator.run(&bell_pair(), 257).unwrap();

        let total: usize = result.counts.outcomes().map(|(_, count)| count).sum();
        assert_eq!(total, 257);
        assert_eq!(result.total_shots(), 257);
    }

    #[test]
    fn test_zero_shots_rejected() {
        let simulator = Simulator::default();
        let result = simulator.run(&bell_pair(), 0);
        assert_eq!(result.unwrap_err(), SimulatorError::InvalidShotCount { shots: 0 });
    }

    #[test]
    fn test_circuit_not_mutated() {
        let simulator = Simulator::new(SimulatorConfig::default().with_seed(4));
        let circuit = bell_pair();
        let before = circuit.clone();
        simulator.run(&circuit, 64).unwrap();
        assert_eq!(circuit, before);
    }

    #[test]
    fn test_sample_uses_configured_shots() {
        let simulator = Simulator::new(SimulatorConfig::default().with_shots(96).with_seed(5));
        let result = simulator.sample(&bell_pair()).unwrap();
        assert_eq!(result.total_shots(), 96);
    }

    #[test]
    fn test_statistics_collection() {
        let simulator =
            Simulator::new(SimulatorConfig::default().with_seed(6).with_statistics(true));
        let result = simulator.run(&bell_pair(), 128).unwrap();

        let stats = result.statistics.expect("statistics requested");
        assert_eq!(stats.shots, 128);
        assert_eq!(stats.steps_per_shot, 2);
        assert_eq!(stats.gates_per_shot, 2);
        assert!(stats.unique_outcomes <= 2);
    }

    #[test]
    fn test_statistics_skipped_by_default() {
        let simulator = Simulator::new(SimulatorConfig::default().with_seed(7));
        let result = simulator.run(&bell_pair(), 32).unwrap();
        assert!(result.statistics.is_none());
    }

    #[test]
    fn test_deterministic_with_seed() {
        let simulator = Simulator::new(SimulatorConfig::default().with_seed(8));
        let first = simulator.run(&bell_pair(), 200).unwrap();
        let second = simulator.run(&bell_pair(), 200).unwrap();
        assert_eq!(first.counts, second.counts);
    }

    #[test]
    fn test_single_qubit_superposition() {
        let circuit = custom(
            1,
            [GateKind::Hadamard {
                qubit: QubitId::new(0),
            }],
        )
        .unwrap();

        let simulator = Simulator::new(SimulatorConfig::default().with_seed(9));
        let result = simulator.run(&circuit, 2000).unwrap();

        let zeros = result.counts.count_of("0");
        let ones = result.counts.count_of("1");
        assert_eq!(zeros + ones, 2000);
        assert!(zeros > 800 && ones > 800, "zeros={} ones={}", zeros, ones);
    }

    #[test]
    #[should_panic(expected = "invalid simulator configuration")]
    fn test_invalid_config_panics() {
        Simulator::new(SimulatorConfig::default().with_shots(0));
    }
}
