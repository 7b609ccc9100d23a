//! Reference DFT by direct summation.
//!
//! O(n²) and allocation-returning. Meant as an oracle for checking the fast
//! paths, not for production transforms.

use alloc::vec::Vec;

use crate::fft::omega;
use crate::num::{Complex, Float};

/// `(j·k) mod n`, exact for any slice length.
#[inline]
fn phase_index(j: usize, k: usize, n: usize) -> isize {
    ((j as u128 * k as u128) % n as u128) as isize
}

/// `X[k] = Σ_j x[j]·exp(-2πi·jk/n)`. An empty input gives an empty output.
pub fn dft<T: Float>(input: &[Complex<T>]) -> Vec<Complex<T>> {
    let n = input.len();
    (0..n)
        .map(|k| {
            input
                .iter()
                .enumerate()
                .fold(Complex::<T>::zero(), |acc, (j, &x)| {
                    acc + x * omega::<T>(-phase_index(j, k, n), n)
                })
        })
        .collect()
}

/// Normalized inverse: `x[j] = (1/n)·Σ_k X[k]·exp(2πi·jk/n)`.
pub fn idft<T: Float>(input: &[Complex<T>]) -> Vec<Complex<T>> {
    let n = input.len();
    if n == 0 {
        return Vec::new();
    }
    let scale = T::one() / T::from_f64(n as f64);
    (0..n)
        .map(|j| {
            let sum = input
                .iter()
                .enumerate()
                .fold(Complex::<T>::zero(), |acc, (k, &x)| {
                    acc + x * omega::<T>(phase_index(j, k, n), n)
                });
            sum * scale
        })
        .collect()
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use crate::num::Complex64;
    use alloc::vec;

    #[test]
    fn test_dft_empty() {
        let input: Vec<Complex64> = vec![];
        assert!(dft(&input).is_empty());
        assert!(idft(&input).is_empty());
    }

    #[test]
    fn test_dft_idft_roundtrip() {
        let input = vec![
            Complex64::new(1.0, -1.0),
            Complex64::new(0.25, 2.0),
            Complex64::new(-3.0, 0.5),
        ];
        let back = idft(&dft(&input));
        for (a, b) in back.iter().zip(input.iter()) {
            assert!((*a - *b).norm() < 1e-12);
        }
    }
}
