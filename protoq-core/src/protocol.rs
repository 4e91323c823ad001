//! Canned protocol composers
//!
//! Each composer returns a finished, read-only [`Circuit`]. Composing a
//! circuit performs no sampling; all randomness lives in the execution
//! layer.

use crate::circuit::Circuit;
use crate::gate::{GateKind, Step};
use crate::qubit::QubitId;
use crate::Result;
use std::f64::consts::PI;

/// The single-qubit state handed to the teleportation protocol
///
/// Mirrors the two-value descriptor of the demo front end: a nonzero
/// `amplitude` prepares the qubit with a bit flip, a nonzero `phase`
/// adds a phase rotation of that angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeleportState {
    /// Excitation flag: nonzero prepares |1⟩ before the phase rotation
    pub amplitude: f64,
    /// Phase angle in radians applied to the prepared qubit
    pub phase: f64,
}

impl TeleportState {
    /// Create a state descriptor from its amplitude flag and phase angle
    pub const fn new(amplitude: f64, phase: f64) -> Self {
        Self { amplitude, phase }
    }

    /// The ground state |0⟩
    pub const fn ground() -> Self {
        Self::new(0.0, 0.0)
    }

    /// The excited state |1⟩
    pub const fn excited() -> Self {
        Self::new(1.0, 0.0)
    }
}

/// Compose the Bell pair circuit: H(0) then CNOT(0, 1) on two qubits
///
/// The ideal outcome distribution is 50/50 over {00, 11}; any other
/// outcome indicates an engine defect.
///
/// # Example
/// ```
/// use protoq_core::bell_pair;
///
/// let circuit = bell_pair();
/// assert_eq!(circuit.num_qubits(), 2);
/// ```
pub fn bell_pair() -> Circuit {
    build_bell_pair().expect("bell pair circuit uses only in-bounds qubits")
}

fn build_bell_pair() -> Result<Circuit> {
    let mut circuit = Circuit::with_capacity(2, 2)?;
    circuit.push_gate(GateKind::Hadamard {
        qubit: QubitId::new(0),
    })?;
    circuit.push_gate(GateKind::ControlledNot {
        control: QubitId::new(0),
        target: QubitId::new(1),
    })?;
    Ok(circuit)
}

/// Compose the quantum teleportation circuit on three qubits
///
/// Layout: qubit 0 carries the state to teleport, qubits 1 and 2 form the
/// entanglement channel, and the state lands on qubit 2.
///
/// The sequence: prepare qubit 0 from `state`, entangle qubits 1–2
/// (H(1), CNOT(1, 2)), run the Bell measurement basis change (CNOT(0, 1),
/// H(0)), measure qubits 0 and 1 mid-circuit, then correct qubit 2 from
/// the classical record: Z (phase π) when the qubit-0 bit is 1, X when
/// the qubit-1 bit is 1.
pub fn teleportation(state: &TeleportState) -> Circuit {
    build_teleportation(state).expect("teleportation circuit uses only in-bounds qubits")
}

fn build_teleportation(state: &TeleportState) -> Result<Circuit> {
    let q0 = QubitId::new(0);
    let q1 = QubitId::new(1);
    let q2 = QubitId::new(2);

    let mut circuit = Circuit::with_capacity(3, 8)?;

    // State preparation on the payload qubit
    if state.amplitude != 0.0 {
        circuit.push_gate(GateKind::PauliX { qubit: q0 })?;
    }
    if state.phase != 0.0 {
        circuit.push_gate(GateKind::PhaseRotation {
            qubit: q0,
            theta: state.phase,
        })?;
    }

    // Entanglement channel between qubits 1 and 2
    circuit.push_gate(GateKind::Hadamard { qubit: q1 })?;
    circuit.push_gate(GateKind::ControlledNot {
        control: q1,
        target: q2,
    })?;

    // Bell measurement basis change on qubits 0 and 1
    circuit.push_gate(GateKind::ControlledNot {
        control: q0,
        target: q1,
    })?;
    circuit.push_gate(GateKind::Hadamard { qubit: q0 })?;

    // Classical record and corrections; the phase correction commutes
    // with the remaining measurement, so step order is free
    circuit.push_step(Step::measure_branch(
        q0,
        [GateKind::PhaseRotation {
            qubit: q2,
            theta: PI,
        }],
    ))?;
    circuit.push_step(Step::measure_branch(q1, [GateKind::PauliX { qubit: q2 }]))?;

    Ok(circuit)
}

/// Compose a circuit from an arbitrary ordered gate list
///
/// No protocol-specific validation is applied beyond per-gate qubit
/// bounds checks.
///
/// # Errors
/// Returns an error if `num_qubits` is 0 or any gate references a qubit
/// outside the register.
pub fn custom(num_qubits: usize, gates: impl IntoIterator<Item = GateKind>) -> Result<Circuit> {
    let mut circuit = Circuit::new(num_qubits)?;
    for gate in gates {
        circuit.push_gate(gate)?;
    }
    Ok(circuit)
}
