//! Quantum circuit representation

use crate::error::QuantumError;
use crate::gate::{GateKind, Step};
use crate::Result;
use std::fmt;

/// An ordered sequence of circuit steps bound to a register size
///
/// A circuit is a pure description. It is built once by a protocol
/// composer (or by hand), then treated as read-only: execution replays
/// the same steps for every shot without mutating them.
///
/// # Example
/// ```
/// use protoq_core::{Circuit, GateKind, QubitId};
///
/// let mut circuit = Circuit::new(2).unwrap();
/// circuit
///     .push_gate(GateKind::Hadamard { qubit: QubitId::new(0) })
///     .unwrap();
/// assert_eq!(circuit.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Circuit {
    num_qubits: usize,
    steps: Vec<Step>,
}

impl Circuit {
    /// Create an empty circuit over `num_qubits` qubits
    ///
    /// # Errors
    /// Returns [`QuantumError::InvalidDimension`] when `num_qubits` is 0.
    /// The upper register bound is enforced by the state layer, which
    /// owns the memory tradeoff.
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 {
            return Err(QuantumError::InvalidDimension);
        }
        Ok(Self {
            num_qubits,
            steps: Vec::new(),
        })
    }

    /// Create an empty circuit with pre-allocated step capacity
    pub fn with_capacity(num_qubits: usize, capacity: usize) -> Result<Self> {
        if num_qubits == 0 {
            return Err(QuantumError::InvalidDimension);
        }
        Ok(Self {
            num_qubits,
            steps: Vec::with_capacity(capacity),
        })
    }

    /// Number of qubits in the register this circuit targets
    #[inline]
    pub const fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of steps in the circuit
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the circuit has no steps
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Append a unitary gate step
    ///
    /// # Errors
    /// Returns an error if any referenced qubit is out of bounds.
    pub fn push_gate(&mut self, gate: GateKind) -> Result<()> {
        gate.validate(self.num_qubits)?;
        self.steps.push(Step::Gate(gate));
        Ok(())
    }

    /// Append an arbitrary step (gate or measure-then-branch)
    ///
    /// # Errors
    /// Returns an error if any referenced qubit is out of bounds.
    pub fn push_step(&mut self, step: Step) -> Result<()> {
        step.validate(self.num_qubits)?;
        self.steps.push(step);
        Ok(())
    }

    /// Iterate over the steps in execution order
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }

    /// Number of unitary gate applications per shot, branch bodies included
    pub fn gate_count(&self) -> usize {
        self.steps
            .iter()
            .map(|step| match step {
                Step::Gate(_) => 1,
                Step::MeasureBranch { if_one, .. } => if_one.len(),
            })
            .sum()
    }

    /// Number of mid-circuit measurements per shot
    pub fn measurement_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, Step::MeasureBranch { .. }))
            .count()
    }

    /// Re-validate every step against the register size
    ///
    /// Steps are validated on insertion, so this only fails for circuits
    /// assembled through non-checked paths (e.g. future deserialization).
    pub fn validate(&self) -> Result<()> {
        for step in &self.steps {
            step.validate(self.num_qubits)?;
        }
        Ok(())
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Circuit({} qubits, {} steps)",
            self.num_qubits,
            self.len()
        )?;
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f, "  {}: {}", i, step)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qubit::QubitId;

    fn h(q: usize) -> GateKind {
        GateKind::Hadamard {
            qubit: QubitId::new(q),
        }
    }

    #[test]
    fn test_creation() {
        let circuit = Circuit::new(3).unwrap();
        assert_eq!(circuit.num_qubits(), 3);
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_zero_qubits_rejected() {
        assert_eq!(Circuit::new(0), Err(QuantumError::InvalidDimension));
        assert_eq!(
            Circuit::with_capacity(0, 8),
            Err(QuantumError::InvalidDimension)
        );
    }

    #[test]
    fn test_push_gate() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.push_gate(h(0)).unwrap();
        circuit
            .push_gate(GateKind::ControlledNot {
                control: QubitId::new(0),
                target: QubitId::new(1),
            })
            .unwrap();
        assert_eq!(circuit.len(), 2);
        assert_eq!(circuit.gate_count(), 2);
        assert_eq!(circuit.measurement_count(), 0);
    }

    #[test]
    fn test_push_gate_out_of_bounds() {
        let mut circuit = Circuit::new(2).unwrap();
        let result = circuit.push_gate(h(2));
        assert_eq!(result, Err(QuantumError::InvalidQubit(2, 2)));
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_push_measure_branch() {
        let mut circuit = Circuit::new(3).unwrap();
        circuit
            .push_step(Step::measure_branch(
                QubitId::new(0),
                [GateKind::PauliX {
                    qubit: QubitId::new(2),
                }],
            ))
            .unwrap();
        assert_eq!(circuit.measurement_count(), 1);
        assert_eq!(circuit.gate_count(), 1);
    }

    #[test]
    fn test_validate() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.push_gate(h(1)).unwrap();
        assert!(circuit.validate().is_ok());
    }

    #[test]
    fn test_display() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.push_gate(h(0)).unwrap();
        let rendered = format!("{}", circuit);
        assert!(rendered.contains("2 qubits"));
        assert!(rendered.contains("H(q0)"));
    }
}
