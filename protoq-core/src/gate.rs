//! Gate descriptors and circuit steps
//!
//! The gate set is closed: every supported unitary is a variant of
//! [`GateKind`], and the execution engine dispatches over it with a single
//! exhaustive `match`. Classical control flow (teleportation corrections)
//! is likewise explicit data: a [`Step::MeasureBranch`] measures one qubit
//! and applies its branch gates only when the drawn bit is 1.

use crate::error::QuantumError;
use crate::qubit::QubitId;
use crate::Result;
use smallvec::{smallvec, SmallVec};
use std::fmt;

/// A unitary gate descriptor: kind plus the qubits it targets
///
/// Descriptors are immutable values; recording one in a circuit performs
/// no state-vector work.
///
/// # Example
/// ```
/// use protoq_core::{GateKind, QubitId};
///
/// let gate = GateKind::ControlledNot {
///     control: QubitId::new(0),
///     target: QubitId::new(1),
/// };
/// assert_eq!(gate.name(), "CNOT");
/// assert_eq!(gate.num_qubits(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateKind {
    /// Hadamard: maps amplitude pairs (a, b) to ((a+b)/√2, (a−b)/√2),
    /// creating or destroying superposition
    Hadamard { qubit: QubitId },

    /// Pauli-X: swaps the amplitude pair differing in the target bit
    PauliX { qubit: QubitId },

    /// Controlled-NOT: Pauli-X on `target` restricted to the subspace
    /// where `control` is 1
    ControlledNot { control: QubitId, target: QubitId },

    /// Phase rotation: multiplies bit-1 amplitudes by e^(iθ)
    PhaseRotation { qubit: QubitId, theta: f64 },
}

impl GateKind {
    /// Short display name of the gate ("H", "X", "CNOT", "RZ")
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::Hadamard { .. } => "H",
            GateKind::PauliX { .. } => "X",
            GateKind::ControlledNot { .. } => "CNOT",
            GateKind::PhaseRotation { .. } => "RZ",
        }
    }

    /// The qubits this gate acts on, control first for two-qubit gates
    pub fn qubits(&self) -> SmallVec<[QubitId; 2]> {
        match *self {
            GateKind::Hadamard { qubit }
            | GateKind::PauliX { qubit }
            | GateKind::PhaseRotation { qubit, .. } => smallvec![qubit],
            GateKind::ControlledNot { control, target } => smallvec![control, target],
        }
    }

    /// Number of qubits this gate acts on
    pub fn num_qubits(&self) -> usize {
        match self {
            GateKind::ControlledNot { .. } => 2,
            _ => 1,
        }
    }

    /// Validate this gate against a register of `num_qubits` qubits
    ///
    /// # Errors
    /// - [`QuantumError::InvalidQubit`] if any operand is out of range
    /// - [`QuantumError::DuplicateQubit`] if control and target coincide
    pub fn validate(&self, num_qubits: usize) -> Result<()> {
        for qubit in self.qubits() {
            if !qubit.in_bounds(num_qubits) {
                return Err(QuantumError::invalid_qubit(qubit.index(), num_qubits));
            }
        }
        if let GateKind::ControlledNot { control, target } = self {
            if control == target {
                return Err(QuantumError::DuplicateQubit(*control));
            }
        }
        Ok(())
    }

    /// Construct a gate descriptor from a textual name
    ///
    /// Recognized names (case-insensitive): `h`/`hadamard`, `x`/`not`,
    /// `cnot`/`cx`, `rz`/`phase`. Rotations require `angle`.
    ///
    /// # Errors
    /// - [`QuantumError::UnsupportedGate`] for an unrecognized name
    /// - [`QuantumError::InvalidQubitCount`] for a wrong operand count
    /// - [`QuantumError::MissingAngle`] for a rotation without an angle
    ///
    /// # Example
    /// ```
    /// use protoq_core::GateKind;
    ///
    /// let gate = GateKind::from_name("cnot", &[0, 1], None).unwrap();
    /// assert_eq!(gate.name(), "CNOT");
    /// ```
    pub fn from_name(name: &str, qubits: &[usize], angle: Option<f64>) -> Result<Self> {
        let expect_operands = |expected: usize| -> Result<()> {
            if qubits.len() != expected {
                Err(QuantumError::invalid_qubit_count(name, expected, qubits.len()))
            } else {
                Ok(())
            }
        };

        match name.to_ascii_lowercase().as_str() {
            "h" | "hadamard" => {
                expect_operands(1)?;
                Ok(GateKind::Hadamard {
                    qubit: QubitId::new(qubits[0]),
                })
            }
            "x" | "not" => {
                expect_operands(1)?;
                Ok(GateKind::PauliX {
                    qubit: QubitId::new(qubits[0]),
                })
            }
            "cnot" | "cx" => {
                expect_operands(2)?;
                Ok(GateKind::ControlledNot {
                    control: QubitId::new(qubits[0]),
                    target: QubitId::new(qubits[1]),
                })
            }
            "rz" | "phase" => {
                expect_operands(1)?;
                let theta = angle.ok_or_else(|| QuantumError::MissingAngle(name.to_string()))?;
                Ok(GateKind::PhaseRotation {
                    qubit: QubitId::new(qubits[0]),
                    theta,
                })
            }
            _ => Err(QuantumError::UnsupportedGate(name.to_string())),
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GateKind::PhaseRotation { qubit, theta } => {
                write!(f, "RZ({}, {:.4})", qubit, theta)
            }
            _ => {
                write!(f, "{}(", self.name())?;
                for (i, qubit) in self.qubits().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", qubit)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// A single circuit step, evaluated strictly in sequence
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Apply a unitary gate
    Gate(GateKind),

    /// Measure one qubit mid-circuit and, when the drawn bit is 1, apply
    /// the branch gates in order
    MeasureBranch {
        qubit: QubitId,
        if_one: SmallVec<[GateKind; 2]>,
    },
}

impl Step {
    /// Wrap a mid-circuit measurement with its classically-conditioned
    /// correction gates
    pub fn measure_branch(qubit: QubitId, if_one: impl IntoIterator<Item = GateKind>) -> Self {
        Step::MeasureBranch {
            qubit,
            if_one: if_one.into_iter().collect(),
        }
    }

    /// Validate every qubit reference in this step
    pub fn validate(&self, num_qubits: usize) -> Result<()> {
        match self {
            Step::Gate(gate) => gate.validate(num_qubits),
            Step::MeasureBranch { qubit, if_one } => {
                if !qubit.in_bounds(num_qubits) {
                    return Err(QuantumError::invalid_qubit(qubit.index(), num_qubits));
                }
                for gate in if_one {
                    gate.validate(num_qubits)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Gate(gate) => write!(f, "{}", gate),
            Step::MeasureBranch { qubit, if_one } => {
                write!(f, "M({})", qubit)?;
                if !if_one.is_empty() {
                    write!(f, " ? ")?;
                    for (i, gate) in if_one.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", gate)?;
                    }
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_operands() {
        let h = GateKind::Hadamard {
            qubit: QubitId::new(0),
        };
        assert_eq!(h.num_qubits(), 1);
        assert_eq!(h.qubits().as_slice(), &[QubitId::new(0)]);

        let cnot = GateKind::ControlledNot {
            control: QubitId::new(1),
            target: QubitId::new(0),
        };
        assert_eq!(cnot.num_qubits(), 2);
        assert_eq!(cnot.qubits().as_slice(), &[QubitId::new(1), QubitId::new(0)]);
    }

    #[test]
    fn test_validate_bounds() {
        let x = GateKind::PauliX {
            qubit: QubitId::new(2),
        };
        assert!(x.validate(3).is_ok());
        assert_eq!(x.validate(2), Err(QuantumError::InvalidQubit(2, 2)));
    }

    #[test]
    fn test_validate_duplicate_control_target() {
        let cnot = GateKind::ControlledNot {
            control: QubitId::new(1),
            target: QubitId::new(1),
        };
        assert_eq!(
            cnot.validate(2),
            Err(QuantumError::DuplicateQubit(QubitId::new(1)))
        );
    }

    #[test]
    fn test_from_name() {
        let h = GateKind::from_name("H", &[0], None).unwrap();
        assert_eq!(h.name(), "H");

        let rz = GateKind::from_name("rz", &[1], Some(0.5)).unwrap();
        assert!(matches!(rz, GateKind::PhaseRotation { theta, .. } if theta == 0.5));
    }

    #[test]
    fn test_from_name_unsupported() {
        let err = GateKind::from_name("swap", &[0, 1], None).unwrap_err();
        assert_eq!(err, QuantumError::UnsupportedGate("swap".to_string()));
    }

    #[test]
    fn test_from_name_operand_count() {
        let err = GateKind::from_name("cnot", &[0], None).unwrap_err();
        assert!(matches!(err, QuantumError::InvalidQubitCount { .. }));
    }

    #[test]
    fn test_from_name_missing_angle() {
        let err = GateKind::from_name("rz", &[0], None).unwrap_err();
        assert_eq!(err, QuantumError::MissingAngle("rz".to_string()));
    }

    #[test]
    fn test_step_validation() {
        let step = Step::measure_branch(
            QubitId::new(0),
            [GateKind::PauliX {
                qubit: QubitId::new(2),
            }],
        );
        assert!(step.validate(3).is_ok());
        assert!(step.validate(2).is_err());
    }

    #[test]
    fn test_display() {
        let cnot = GateKind::ControlledNot {
            control: QubitId::new(0),
            target: QubitId::new(1),
        };
        assert_eq!(format!("{}", cnot), "CNOT(q0, q1)");

        let step = Step::measure_branch(
            QubitId::new(1),
            [GateKind::PauliX {
                qubit: QubitId::new(2),
            }],
        );
        assert_eq!(format!("{}", step), "M(q1) ? X(q2)");
    }
}
