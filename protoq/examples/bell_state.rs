//! Create and measure a Bell pair
//!
//! Builds the two-gate entangling circuit H(0), CNOT(0, 1), runs it for
//! 1000 shots, and reports the outcome distribution with the usual
//! quality metrics.

use protoq::{bell_pair, Simulator, SimulatorConfig};

fn main() {
    println!("=== Bell Pair ===\n");

    let circuit = bell_pair();
    println!("{}", circuit);

    let simulator = Simulator::new(SimulatorConfig::default().with_statistics(true));
    let result = simulator.run(&circuit, 1000).expect("bell pair run");

    println!("{}", result.counts);

    println!("Total measurements: {}", result.counts.total_shots());
    println!("Unique states:      {}", result.counts.unique_states());
    println!(
        "Fidelity estimate:  {:.3}",
        result.counts.support_fraction(&["00", "11"])
    );

    if let Some(stats) = result.statistics {
        println!("\n{}", stats);
    }
}
