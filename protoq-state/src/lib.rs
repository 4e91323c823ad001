//! Dense quantum state representation for the protoq simulator
//!
//! This crate owns the numerically hard part of the system:
//!
//! - [`Register`]: the 2^n-amplitude dense state vector with unit-norm
//!   bookkeeping
//! - In-place gate kernels for the closed gate set {H, X, CNOT, RZ}
//! - Single-qubit and full measurement with collapse and renormalization
//!
//! All gate application is O(2^n) and in place; measurement is the only
//! operation that consumes external randomness, injected as a
//! [`rand::Rng`] so callers control seeding.
//!
//! # Example
//! ```
//! use protoq_state::Register;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut register = Register::new(2).unwrap();
//! register.apply_hadamard(0).unwrap();
//! register.apply_cnot(0, 1).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let outcome = register.measure_all(&mut rng).unwrap();
//! assert!(outcome == 0b00 || outcome == 0b11);
//! ```

pub mod error;
pub mod kernel;
pub mod measure;
pub mod register;

pub use error::{Result, StateError};
pub use register::{Register, MAX_QUBITS, NORM_TOLERANCE};
