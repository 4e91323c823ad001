//! Build a circuit from textual gate descriptions
//!
//! Assembles a three-qubit GHZ state from by-name gate descriptors, the
//! path a front end would take when circuits arrive as text.

use protoq::{custom, GateKind, Simulator, SimulatorConfig};

fn main() {
    println!("=== Custom Circuit (GHZ state) ===\n");

    let gates = [
        ("h", vec![0], None),
        ("cnot", vec![0, 1], None),
        ("cnot", vec![1, 2], None),
    ]
    .into_iter()
    .map(|(name, qubits, angle)| GateKind::from_name(name, &qubits, angle))
    .collect::<Result<Vec<_>, _>>()
    .expect("well-formed gate list");

    let circuit = custom(3, gates).expect("in-bounds circuit");
    println!("{}", circuit);

    let simulator = Simulator::new(SimulatorConfig::default());
    let result = simulator.run(&circuit, 1000).expect("ghz run");

    println!("{}", result.counts);
    println!(
        "GHZ fidelity estimate: {:.3}",
        result.counts.support_fraction(&["000", "111"])
    );
}
