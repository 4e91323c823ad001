//! Measurement and collapse
//!
//! Measurement is the only operation in the engine with external
//! randomness. The random source is injected so shot execution can run
//! one independent, seedable stream per trial.
//!
//! `measure_all` collapses sequentially, one qubit at a time; this is
//! statistically equivalent to a single joint draw from the full
//! probability distribution (asserted by integration test, see the
//! simulator crate), and reuses the same collapse path as mid-circuit
//! measurement.

use crate::error::{Result, StateError};
use crate::register::Register;
use num_complex::Complex64;
use rand::Rng;

/// Collapse normalization below this is numerically meaningless and
/// indicates broken amplitude data
const COLLAPSE_EPSILON: f64 = 1e-10;

impl Register {
    /// Measure one qubit, collapse the register, and return the bit
    ///
    /// Computes P(bit = 1) as the probability mass of the bit-1 subspace,
    /// draws the outcome against it, zeroes every amplitude inconsistent
    /// with the draw, and rescales the remainder to unit norm.
    ///
    /// Measuring an already-collapsed (classical) qubit is well-defined
    /// and deterministic: the draw can only produce the one outcome with
    /// nonzero probability.
    ///
    /// # Errors
    /// Returns [`StateError::InvalidQubitIndex`] for an out-of-range
    /// qubit, or [`StateError::NormDrift`] when the surviving subspace
    /// carries no probability mass (broken amplitudes).
    ///
    /// # Example
    /// ```
    /// use protoq_state::Register;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let mut register = Register::new(2).unwrap();
    /// let mut rng = StdRng::seed_from_u64(42);
    /// // |00⟩ always measures 0
    /// assert_eq!(register.measure_qubit(0, &mut rng).unwrap(), 0);
    /// ```
    pub fn measure_qubit(&mut self, qubit: usize, rng: &mut impl Rng) -> Result<u8> {
        if qubit >= self.num_qubits() {
            return Err(StateError::InvalidQubitIndex {
                index: qubit,
                num_qubits: self.num_qubits(),
            });
        }

        let mask = 1usize << qubit;
        let prob_one: f64 = self
            .amplitudes()
            .iter()
            .enumerate()
            .filter(|(index, _)| index & mask != 0)
            .map(|(_, amp)| amp.norm_sqr())
            .sum();

        let outcome: u8 = if rng.gen::<f64>() < prob_one { 1 } else { 0 };

        let kept_mass = if outcome == 1 { prob_one } else { 1.0 - prob_one };
        let normalization = kept_mass.sqrt();
        if normalization < COLLAPSE_EPSILON {
            return Err(StateError::NormDrift {
                norm_sqr: kept_mass,
            });
        }

        let inv_norm = 1.0 / normalization;
        for (index, amp) in self.amplitudes_mut().iter_mut().enumerate() {
            if ((index >> qubit) & 1) as u8 != outcome {
                *amp = Complex64::new(0.0, 0.0);
            } else {
                *amp *= inv_norm;
            }
        }

        Ok(outcome)
    }

    /// Measure every qubit, collapsing to one computational basis state
    ///
    /// Measures qubits 0..n−1 in sequence; the returned index has bit q
    /// equal to the outcome of qubit q.
    ///
    /// # Errors
    /// Propagates any collapse failure from [`Register::measure_qubit`].
    pub fn measure_all(&mut self, rng: &mut impl Rng) -> Result<usize> {
        let mut outcome = 0usize;
        for qubit in 0..self.num_qubits() {
            let bit = self.measure_qubit(qubit, rng)?;
            outcome |= (bit as usize) << qubit;
        }
        Ok(outcome)
    }
}
