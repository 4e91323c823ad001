//! Quantum teleportation demo
//!
//! Teleports a prepared single-qubit state from qubit 0 onto qubit 2
//! through an entanglement channel on qubits 1–2, applying the classical
//! corrections from the mid-circuit measurement record. The payload
//! qubit's statistics survive the transfer exactly; the other two bits
//! are the uniform classical record.

use protoq::{teleportation, Simulator, SimulatorConfig, TeleportState};

fn run_case(label: &str, state: TeleportState, simulator: &Simulator) {
    println!("--- Teleporting {} ---", label);

    let circuit = teleportation(&state);
    let result = simulator.run(&circuit, 1000).expect("teleportation run");

    println!("{}", result.counts);

    let (bits, count) = result.counts.most_common().expect("nonempty run");
    println!(
        "Max state probability: {:.3} (|{}⟩)",
        count as f64 / result.counts.total_shots() as f64,
        bits
    );

    // Payload lands on qubit 2, the leading bit of the outcome string
    let payload_one: f64 = result
        .counts
        .outcomes()
        .filter(|(bits, _)| bits.starts_with('1'))
        .map(|(_, count)| count as f64)
        .sum::<f64>()
        / result.counts.total_shots() as f64;
    println!("P(payload = 1): {:.3}\n", payload_one);
}

fn main() {
    println!("=== Quantum Teleportation ===\n");

    let simulator = Simulator::new(SimulatorConfig::default());

    run_case("|0⟩", TeleportState::ground(), &simulator);
    run_case("|1⟩ with phase 0.5", TeleportState::new(1.0, 0.5), &simulator);
}
