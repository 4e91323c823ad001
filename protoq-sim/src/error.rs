//! Error types for the shot execution engine

use std::fmt;

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, SimulatorError>;

/// Errors that can occur while running a circuit
#[derive(Debug, Clone, PartialEq)]
pub enum SimulatorError {
    /// Invalid configuration
    InvalidConfig(String),

    /// Shot count below the minimum of one trial
    InvalidShotCount { shots: usize },

    /// Circuit failed pre-run validation
    InvalidCircuit(String),

    /// Register too large for the state layer
    TooManyQubits { num_qubits: usize, max_qubits: usize },

    /// Fatal mid-run defect: probability mass drifted away from 1
    NormInvariantViolated { shot: usize, norm_sqr: f64 },

    /// State-layer failure during execution
    StateFailure(String),
}

impl fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulatorError::InvalidConfig(msg) => {
                write!(f, "invalid configuration: {}", msg)
            }
            SimulatorError::InvalidShotCount { shots } => {
                write!(f, "invalid shot count {}: a run needs at least one shot", shots)
            }
            SimulatorError::InvalidCircuit(msg) => {
                write!(f, "invalid circuit: {}", msg)
            }
            SimulatorError::TooManyQubits {
                num_qubits,
                max_qubits,
            } => {
                write!(
                    f,
                    "too many qubits: circuit has {}, max supported is {}",
                    num_qubits, max_qubits
                )
            }
            SimulatorError::NormInvariantViolated { shot, norm_sqr } => {
                write!(
                    f,
                    "unit-norm invariant violated in shot {}: probability mass is {}",
                    shot, norm_sqr
                )
            }
            SimulatorError::StateFailure(msg) => {
                write!(f, "state error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SimulatorError {}

impl From<protoq_core::QuantumError> for SimulatorError {
    fn from(err: protoq_core::QuantumError) -> Self {
        SimulatorError::InvalidCircuit(err.to_string())
    }
}

impl From<protoq_state::StateError> for SimulatorError {
    fn from(err: protoq_state::StateError) -> Self {
        SimulatorError::StateFailure(err.to_string())
    }
}
