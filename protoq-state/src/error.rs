//! Error types for state-vector operations

use thiserror::Error;

/// Errors that can occur during state-vector operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Register size out of the supported range
    #[error("invalid register dimension: {num_qubits} qubits (supported range 1..={max})")]
    InvalidDimension { num_qubits: usize, max: usize },

    /// Gate or measurement references a qubit outside the register
    #[error("invalid qubit index {index} for {num_qubits}-qubit register")]
    InvalidQubitIndex { index: usize, num_qubits: usize },

    /// Amplitude data of the wrong length for the register size
    #[error("dimension mismatch: expected {expected} amplitudes, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Fatal invariant violation: probability mass drifted away from 1
    ///
    /// This is an engine defect, never a recoverable condition; runs must
    /// abort rather than renormalize over it.
    #[error("unit-norm invariant violated: probability mass is {norm_sqr}")]
    NormDrift { norm_sqr: f64 },
}

/// Result type for state-vector operations
pub type Result<T> = std::result::Result<T, StateError>;
