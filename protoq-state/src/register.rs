//! Dense amplitude register

use crate::error::{Result, StateError};
use crate::kernel;
use num_complex::Complex64;

/// Largest supported register: 2^26 amplitudes is 1 GiB of Complex64,
/// the practical ceiling for an educational single-node simulator
pub const MAX_QUBITS: usize = 26;

/// Tolerance for the unit-norm invariant check
pub const NORM_TOLERANCE: f64 = 1e-9;

/// Dense quantum register of 2^n complex amplitudes
///
/// Amplitudes are indexed by the n-bit binary representation of each
/// basis state: bit q of the index is the value of qubit q. The register
/// is created in |0...0⟩ and mutated in place by every gate application
/// and measurement.
///
/// # Example
/// ```
/// use protoq_state::Register;
///
/// let register = Register::new(3).unwrap();
/// assert_eq!(register.num_qubits(), 3);
/// assert_eq!(register.dimension(), 8);
/// assert!(register.is_normalized());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Register {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl Register {
    /// Create a register of `num_qubits` qubits in |0...0⟩
    ///
    /// # Errors
    /// Returns [`StateError::InvalidDimension`] when `num_qubits` is 0 or
    /// exceeds [`MAX_QUBITS`].
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 || num_qubits > MAX_QUBITS {
            return Err(StateError::InvalidDimension {
                num_qubits,
                max: MAX_QUBITS,
            });
        }

        let dimension = 1usize << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); dimension];
        amplitudes[0] = Complex64::new(1.0, 0.0);

        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Create a register from explicit amplitude data
    ///
    /// # Errors
    /// Returns an error when the register size is out of range or the
    /// amplitude slice does not have length 2^`num_qubits`.
    pub fn from_amplitudes(num_qubits: usize, amplitudes: &[Complex64]) -> Result<Self> {
        if num_qubits == 0 || num_qubits > MAX_QUBITS {
            return Err(StateError::InvalidDimension {
                num_qubits,
                max: MAX_QUBITS,
            });
        }

        let dimension = 1usize << num_qubits;
        if amplitudes.len() != dimension {
            return Err(StateError::DimensionMismatch {
                expected: dimension,
                actual: amplitudes.len(),
            });
        }

        Ok(Self {
            num_qubits,
            amplitudes: amplitudes.to_vec(),
        })
    }

    /// Number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// State dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// The amplitude slice
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Mutable access to the amplitude slice
    #[inline]
    pub fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }

    /// Probability of one basis state as the squared amplitude magnitude
    ///
    /// # Errors
    /// Returns [`StateError::DimensionMismatch`] when `basis_state` is
    /// outside the state dimension.
    pub fn probability(&self, basis_state: usize) -> Result<f64> {
        self.amplitudes
            .get(basis_state)
            .map(|amp| amp.norm_sqr())
            .ok_or(StateError::DimensionMismatch {
                expected: self.dimension(),
                actual: basis_state,
            })
    }

    /// Probabilities of every basis state
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|amp| amp.norm_sqr()).collect()
    }

    /// Total probability mass (squared L2 norm)
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|amp| amp.norm_sqr()).sum()
    }

    /// Whether the unit-norm invariant holds within [`NORM_TOLERANCE`]
    pub fn is_normalized(&self) -> bool {
        (self.norm_sqr() - 1.0).abs() <= NORM_TOLERANCE
    }

    /// Fail with [`StateError::NormDrift`] when the invariant is violated
    ///
    /// Called by the execution layer after every gate; drift is a fatal
    /// engine defect and must never be papered over by renormalizing.
    pub fn check_norm(&self) -> Result<()> {
        let norm_sqr = self.norm_sqr();
        if (norm_sqr - 1.0).abs() > NORM_TOLERANCE {
            return Err(StateError::NormDrift { norm_sqr });
        }
        Ok(())
    }

    /// Rescale all amplitudes to unit norm
    ///
    /// The defined renormalization step after a partial-measurement
    /// collapse; not a recovery path for drift.
    pub fn renormalize(&mut self) {
        let norm = self.norm_sqr().sqrt();
        if norm > 0.0 {
            let inv_norm = 1.0 / norm;
            for amp in &mut self.amplitudes {
                *amp *= inv_norm;
            }
        }
    }

    /// Reset the register to |0...0⟩
    pub fn reset(&mut self) {
        self.amplitudes.fill(Complex64::new(0.0, 0.0));
        self.amplitudes[0] = Complex64::new(1.0, 0.0);
    }

    #[inline]
    fn check_qubit(&self, qubit: usize) -> Result<()> {
        if qubit >= self.num_qubits {
            return Err(StateError::InvalidQubitIndex {
                index: qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    /// Apply a Hadamard gate to `qubit`
    ///
    /// # Errors
    /// Returns [`StateError::InvalidQubitIndex`] for an out-of-range qubit.
    pub fn apply_hadamard(&mut self, qubit: usize) -> Result<()> {
        self.check_qubit(qubit)?;
        kernel::hadamard(&mut self.amplitudes, qubit);
        Ok(())
    }

    /// Apply a Pauli-X (bit flip) gate to `qubit`
    ///
    /// # Errors
    /// Returns [`StateError::InvalidQubitIndex`] for an out-of-range qubit.
    pub fn apply_pauli_x(&mut self, qubit: usize) -> Result<()> {
        self.check_qubit(qubit)?;
        kernel::pauli_x(&mut self.amplitudes, qubit);
        Ok(())
    }

    /// Apply a controlled-NOT gate
    ///
    /// # Errors
    /// Returns [`StateError::InvalidQubitIndex`] when either index is out
    /// of range or control equals target.
    pub fn apply_cnot(&mut self, control: usize, target: usize) -> Result<()> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        if control == target {
            return Err(StateError::InvalidQubitIndex {
                index: control,
                num_qubits: self.num_qubits,
            });
        }
        kernel::cnot(&mut self.amplitudes, control, target);
        Ok(())
    }

    /// Apply a phase rotation of `theta` radians to `qubit`
    ///
    /// Multiplies every amplitude whose `qubit` bit is 1 by e^(iθ).
    ///
    /// # Errors
    /// Returns [`StateError::InvalidQubitIndex`] for an out-of-range qubit.
    pub fn apply_phase(&mut self, qubit: usize, theta: f64) -> Result<()> {
        self.check_qubit(qubit)?;
        kernel::phase(&mut self.amplitudes, qubit, theta);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_register() {
        let register = Register::new(2).unwrap();
        assert_eq!(register.num_qubits(), 2);
        assert_eq!(register.dimension(), 4);
        assert_eq!(register.amplitudes()[0], Complex64::new(1.0, 0.0));
        for amp in &register.amplitudes()[1..] {
            assert_eq!(*amp, Complex64::new(0.0, 0.0));
        }
    }

    #[test]
    fn test_dimension_bounds() {
        assert!(matches!(
            Register::new(0),
            Err(StateError::InvalidDimension { num_qubits: 0, .. })
        ));
        assert!(matches!(
            Register::new(MAX_QUBITS + 1),
            Err(StateError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_from_amplitudes_mismatch() {
        let amps = vec![Complex64::new(1.0, 0.0); 3];
        assert!(matches!(
            Register::from_amplitudes(2, &amps),
            Err(StateError::DimensionMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_probability() {
        let register = Register::new(2).unwrap();
        assert_relative_eq!(register.probability(0).unwrap(), 1.0);
        assert_relative_eq!(register.probability(3).unwrap(), 0.0);
        assert!(register.probability(4).is_err());
    }

    #[test]
    fn test_norm_and_check() {
        let register = Register::new(3).unwrap();
        assert_relative_eq!(register.norm_sqr(), 1.0, epsilon = 1e-12);
        assert!(register.check_norm().is_ok());

        let mut drifted = register.clone();
        drifted.amplitudes_mut()[0] = Complex64::new(1.1, 0.0);
        assert!(matches!(
            drifted.check_norm(),
            Err(StateError::NormDrift { .. })
        ));
    }

    #[test]
    fn test_renormalize() {
        let amps = vec![Complex64::new(1.0, 0.0); 4];
        let mut register = Register::from_amplitudes(2, &amps).unwrap();
        register.renormalize();
        assert!(register.is_normalized());
        assert_relative_eq!(register.amplitudes()[0].re, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_reset() {
        let mut register = Register::new(2).unwrap();
        register.apply_hadamard(0).unwrap();
        register.reset();
        assert_eq!(register.amplitudes()[0], Complex64::new(1.0, 0.0));
        assert_relative_eq!(register.probability(1).unwrap(), 0.0);
    }

    #[test]
    fn test_gate_index_bounds() {
        let mut register = Register::new(2).unwrap();
        assert!(matches!(
            register.apply_hadamard(2),
            Err(StateError::InvalidQubitIndex {
                index: 2,
                num_qubits: 2
            })
        ));
        assert!(register.apply_cnot(0, 2).is_err());
        assert!(register.apply_cnot(1, 1).is_err());
        assert!(register.apply_phase(5, 0.3).is_err());
    }

    #[test]
    fn test_gates_preserve_norm() {
        let mut register = Register::new(3).unwrap();
        register.apply_hadamard(0).unwrap();
        register.apply_cnot(0, 1).unwrap();
        register.apply_pauli_x(2).unwrap();
        register.apply_phase(1, 0.77).unwrap();
        register.apply_hadamard(2).unwrap();
        assert!(register.check_norm().is_ok());
    }
}
