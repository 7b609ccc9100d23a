//! Bluestein's chirp z-transform.
//!
//! Rewrites an `n`-point DFT as a convolution with the chirp `exp(πi·t²/n)`:
//!
//! `X[k] = conj(w[k]) · Σ_j (x[j] · conj(w[j])) · w[k - j]`, with `w[t] = exp(πi·t²/n)`.
//!
//! The convolution runs as forward FFT, pointwise product, inverse FFT on a
//! zero-padded power-of-two buffer of length `m ≥ 2n + 1`, so it never wraps
//! around. All scratch space is local to the call.

use alloc::vec;

use crate::fft::{fft_radix2, omega, Direction, FftError};
use crate::num::{Complex, Float};

/// Length of the padded convolution buffers for an `n`-point transform: the
/// smallest power of two that is at least `2n + 1`.
#[inline]
pub fn padded_len(n: usize) -> usize {
    (2 * n + 1).next_power_of_two()
}

/// `i² mod 2n`. The square is taken in `u128` so it cannot overflow.
#[inline]
fn chirp_index(i: usize, n: usize) -> isize {
    let i = i as u128;
    ((i * i) % (2 * n as u128)) as isize
}

/// In-place DFT of any non-empty length.
///
/// Works for power-of-two lengths too, although [`crate::fft::fft`] only
/// sends it the others. Unlike the bare radix-2 inverse, the convolution step
/// divides by the padded length `m`, so the output is the plain forward DFT.
pub fn fft_bluestein<T: Float>(input: &mut [Complex<T>]) -> Result<(), FftError> {
    let n = input.len();
    if n == 0 {
        return Err(FftError::EmptyInput);
    }
    let m = padded_len(n);
    let twice_n = 2 * n;

    #[cfg(feature = "verbose-logging")]
    log::trace!("bluestein: n = {n}, padded length m = {m}");

    let mut a = vec![Complex::<T>::zero(); m];
    for (i, (dst, &x)) in a.iter_mut().zip(input.iter()).enumerate() {
        *dst = x * omega::<T>(-chirp_index(i, n), twice_n);
    }

    // Symmetric kernel: positive lags at the front, negative lags wrapped to the back.
    let mut b = vec![Complex::<T>::zero(); m];
    for (i, dst) in b.iter_mut().take(n).enumerate() {
        *dst = omega(chirp_index(i, n), twice_n);
    }
    for (i, dst) in b.iter_mut().enumerate().skip(m - n) {
        *dst = omega(chirp_index(m - i, n), twice_n);
    }

    fft_radix2(&mut a, Direction::Forward)?;
    fft_radix2(&mut b, Direction::Forward)?;
    for (ai, &bi) in a.iter_mut().zip(b.iter()) {
        *ai *= bi;
    }
    fft_radix2(&mut a, Direction::Inverse)?;

    let inv_m = T::one() / T::from_f64(m as f64);
    for c in a.iter_mut() {
        *c *= inv_m;
    }

    for (i, (out, &conv)) in input.iter_mut().zip(a.iter()).enumerate() {
        *out = conv * omega::<T>(-chirp_index(i, n), twice_n);
    }
    Ok(())
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use crate::dft::dft;
    use crate::num::Complex64;
    use alloc::vec::Vec;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_padded_len() {
        assert_eq!(padded_len(1), 4);
        assert_eq!(padded_len(3), 8);
        assert_eq!(padded_len(4), 16);
        assert_eq!(padded_len(7), 16);
        assert_eq!(padded_len(8), 32);
        assert_eq!(padded_len(18), 64);
    }

    #[test]
    fn test_chirp_index_wraps() {
        assert_eq!(chirp_index(0, 5), 0);
        assert_eq!(chirp_index(3, 5), 9);
        assert_eq!(chirp_index(4, 5), 6);
        // Would overflow a u32 square.
        let big = 100_000usize;
        assert_eq!(chirp_index(big - 1, big), (((big - 1) * (big - 1)) % (2 * big)) as isize);
    }

    #[test]
    fn test_bluestein_on_power_of_two_matches_dft() {
        let mut rng = StdRng::seed_from_u64(3);
        for n in [1usize, 2, 8, 32] {
            let input: Vec<Complex64> = (0..n)
                .map(|_| Complex64::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0)))
                .collect();
            let expected = dft(&input);
            let mut data = input.clone();
            fft_bluestein(&mut data).unwrap();
            for (a, b) in data.iter().zip(expected.iter()) {
                assert!((*a - *b).norm() < 1e-9);
            }
        }
    }

    #[test]
    fn test_bluestein_prime_lengths() {
        let mut rng = StdRng::seed_from_u64(11);
        for n in [5usize, 13, 97, 257] {
            let input: Vec<Complex64> = (0..n)
                .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
                .collect();
            let expected = dft(&input);
            let mut data = input.clone();
            fft_bluestein(&mut data).unwrap();
            for (a, b) in data.iter().zip(expected.iter()) {
                assert!((*a - *b).norm() < 1e-8, "n = {n}");
            }
        }
    }
}
