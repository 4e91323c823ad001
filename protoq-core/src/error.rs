//! Error types for circuit construction

use crate::QubitId;
use thiserror::Error;

/// Errors that can occur while building or validating a circuit
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuantumError {
    /// Gate or measurement references a qubit outside the register
    #[error("invalid qubit index {0}: circuit has only {1} qubits")]
    InvalidQubit(usize, usize),

    /// Register size unsupported (zero qubits)
    #[error("invalid register dimension: a circuit needs at least one qubit")]
    InvalidDimension,

    /// Two-qubit gate with control and target on the same wire
    #[error("duplicate qubit {0} in two-qubit gate")]
    DuplicateQubit(QubitId),

    /// By-name gate construction with the wrong number of operands
    #[error("gate '{gate}' takes {expected} qubit(s), but {actual} were given")]
    InvalidQubitCount {
        gate: String,
        expected: usize,
        actual: usize,
    },

    /// By-name gate construction of a rotation without an angle
    #[error("gate '{0}' requires a rotation angle")]
    MissingAngle(String),

    /// By-name gate construction with an unrecognized gate name
    #[error("unsupported gate kind '{0}'")]
    UnsupportedGate(String),
}

impl QuantumError {
    /// Create an invalid qubit error
    pub fn invalid_qubit(qubit: usize, num_qubits: usize) -> Self {
        Self::InvalidQubit(qubit, num_qubits)
    }

    /// Create an invalid operand count error
    pub fn invalid_qubit_count(gate: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::InvalidQubitCount {
            gate: gate.into(),
            expected,
            actual,
        }
    }
}
