//! Single-shot circuit execution
//!
//! One shot is a strictly sequential replay: fresh register, every step
//! in circuit order, then the terminal full measurement. Gate dispatch is
//! a single exhaustive `match` over the closed gate set; mid-circuit
//! measurements draw from the shot's own random stream and gate their
//! branch bodies on the classical bit.

use crate::error::{Result, SimulatorError};
use protoq_core::{Circuit, GateKind, Step};
use protoq_state::{Register, StateError};
use rand::Rng;

/// Execute one shot and return the measured basis-state index
pub(crate) fn execute_shot(
    circuit: &Circuit,
    rng: &mut impl Rng,
    shot: usize,
) -> Result<usize> {
    let mut register = Register::new(circuit.num_qubits())?;

    for step in circuit.steps() {
        match step {
            Step::Gate(gate) => apply_gate(&mut register, gate, shot)?,
            Step::MeasureBranch { qubit, if_one } => {
                let bit = register.measure_qubit(qubit.index(), rng)?;
                if bit == 1 {
                    for gate in if_one {
                        apply_gate(&mut register, gate, shot)?;
                    }
                }
            }
        }
    }

    Ok(register.measure_all(rng)?)
}

/// Apply one gate descriptor and enforce the unit-norm invariant
fn apply_gate(register: &mut Register, gate: &GateKind, shot: usize) -> Result<()> {
    match *gate {
        GateKind::Hadamard { qubit } => register.apply_hadamard(qubit.index())?,
        GateKind::PauliX { qubit } => register.apply_pauli_x(qubit.index())?,
        GateKind::ControlledNot { control, target } => {
            register.apply_cnot(control.index(), target.index())?
        }
        GateKind::PhaseRotation { qubit, theta } => register.apply_phase(qubit.index(), theta)?,
    }

    register.check_norm().map_err(|err| match err {
        StateError::NormDrift { norm_sqr } => {
            SimulatorError::NormInvariantViolated { shot, norm_sqr }
        }
        other => other.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use protoq_core::{bell_pair, teleportation, TeleportState};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bell_shot_outcomes() {
        let circuit = bell_pair();
        let mut rng = StdRng::seed_from_u64(11);

        for shot in 0..100 {
            let outcome = execute_shot(&circuit, &mut rng, shot).unwrap();
            assert!(outcome == 0b00 || outcome == 0b11, "outcome {:02b}", outcome);
        }
    }

    #[test]
    fn test_teleportation_payload_bit() {
        // Teleporting |1⟩ must always land bit 2 on 1 once corrections run
        let circuit = teleportation(&TeleportState::excited());
        let mut rng = StdRng::seed_from_u64(12);

        for shot in 0..100 {
            let outcome = execute_shot(&circuit, &mut rng, shot).unwrap();
            assert_eq!(outcome >> 2, 1, "outcome {:03b}", outcome);
        }
    }

    #[test]
    fn test_teleportation_ground_payload_bit() {
        let circuit = teleportation(&TeleportState::ground());
        let mut rng = StdRng::seed_from_u64(13);

        for shot in 0..100 {
            let outcome = execute_shot(&circuit, &mut rng, shot).unwrap();
            assert_eq!(outcome >> 2, 0, "outcome {:03b}", outcome);
        }
    }

    #[test]
    fn test_empty_circuit_measures_ground_state() {
        let circuit = Circuit::new(2).unwrap();
        let mut rng = StdRng::seed_from_u64(14);
        assert_eq!(execute_shot(&circuit, &mut rng, 0).unwrap(), 0);
    }
}
