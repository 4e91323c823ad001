//! Shot execution engine for the protoq quantum protocol simulator
//!
//! This crate turns a read-only [`protoq_core::Circuit`] into a
//! [`FrequencyTable`] of measured outcomes:
//!
//! - Every shot runs on a fresh register with its own random stream, so
//!   trials are statistically independent by construction
//! - Steps execute strictly in order; gate dispatch is one exhaustive
//!   `match` over the closed gate set
//! - The unit-norm invariant is checked after every gate and a violation
//!   aborts the whole run
//! - Large shot counts fan out over rayon workers, each accumulating a
//!   local table that is merged at the end
//!
//! # Example
//! ```
//! use protoq_core::bell_pair;
//! use protoq_sim::{Simulator, SimulatorConfig};
//!
//! let simulator = Simulator::new(SimulatorConfig::default().with_seed(42));
//! let result = simulator.run(&bell_pair(), 1000).unwrap();
//!
//! assert_eq!(result.counts.total_shots(), 1000);
//! assert_eq!(result.counts.count_of("01"), 0);
//! assert_eq!(result.counts.count_of("10"), 0);
//! ```

pub mod config;
pub mod error;
mod executor;
pub mod result;
pub mod simulator;
pub mod statistics;

pub use config::SimulatorConfig;
pub use error::{Result, SimulatorError};
pub use result::{FrequencyTable, RunResult};
pub use simulator::Simulator;
pub use statistics::RunStatistics;
