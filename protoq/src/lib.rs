//! protoq: an educational quantum protocol simulator
//!
//! A small, self-contained state-vector engine for running canned
//! protocol demos (Bell pair creation, quantum teleportation) and custom
//! circuits over the closed gate set {H, X, CNOT, RZ}, returning outcome
//! frequency tables for downstream reporting.
//!
//! The workspace is layered:
//!
//! - [`protoq_core`]: circuit descriptions and protocol composers
//! - [`protoq_state`]: the dense amplitude register, gate kernels, and
//!   measurement
//! - [`protoq_sim`]: shot execution and outcome aggregation
//!
//! This crate re-exports the public surface of all three.
//!
//! # Example
//!
//! ```
//! use protoq::{bell_pair, Simulator, SimulatorConfig};
//!
//! let simulator = Simulator::new(SimulatorConfig::default().with_seed(42));
//! let result = simulator.run(&bell_pair(), 1000).unwrap();
//!
//! // The Bell pair only ever measures 00 or 11
//! assert_eq!(result.counts.support_fraction(&["00", "11"]), 1.0);
//! ```

pub use protoq_core::{
    bell_pair, custom, teleportation, Circuit, GateKind, QuantumError, QubitId, Step,
    TeleportState,
};
pub use protoq_sim::{
    FrequencyTable, RunResult, RunStatistics, Simulator, SimulatorConfig, SimulatorError,
};
pub use protoq_state::{Register, StateError, MAX_QUBITS};
