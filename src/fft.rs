//! Fast Fourier Transform (FFT) algorithms.
//!
//! Power-of-two lengths use an in-place radix-2
//! [Cooley–Tukey](https://en.wikipedia.org/wiki/Cooley%E2%80%93Tukey_FFT_algorithm)
//! decimation-in-time transform. Every other length goes through
//! [Bluestein's algorithm](crate::bluestein), which is itself built from three
//! radix-2 transforms. [`fft`] picks the path from the input length.
//!
//! The forward transform uses the `exp(-2πi·jk/n)` kernel and is not
//! normalized. [`fft_radix2`] with [`Direction::Inverse`] flips the kernel
//! sign but does not divide by `n` either; [`ifft`] is the normalized inverse.

use alloc::vec::Vec;

use crate::bluestein::fft_bluestein;
pub use crate::num::{Complex, Complex32, Complex64, Float};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// The buffer has no elements.
    EmptyInput,
    /// The radix-2 transform was handed a length that is not a power of two.
    NonPowerOfTwo,
    /// Input and output buffers differ in length.
    MismatchedLengths,
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FftError::EmptyInput => write!(f, "cannot transform an empty buffer"),
            FftError::NonPowerOfTwo => {
                write!(f, "radix-2 transform requires a power-of-two length")
            }
            FftError::MismatchedLengths => write!(f, "input and output lengths differ"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Sign of the exponent used by the radix-2 butterflies.
///
/// `Forward` twiddles with `omega(-k, n)`, so it matches the direct DFT rather
/// than a butterfly written with `omega(+k, n)` for the forward pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `exp(-2πi·jk/n)` kernel.
    Forward,
    /// `exp(+2πi·jk/n)` kernel, without the `1/n` factor.
    Inverse,
}

impl Direction {
    #[inline(always)]
    fn way(self) -> isize {
        match self {
            Direction::Forward => -1,
            Direction::Inverse => 1,
        }
    }
}

/// Point on the unit circle at angle `2πk/n`, i.e. `(cos(2πk/n), sin(2πk/n))`.
///
/// `k` may be negative. It is reduced modulo `n` first, which leaves the value
/// unchanged and keeps the angle small enough for `f32` to stay accurate.
///
/// # Panics
/// Panics if `n == 0`.
#[inline]
pub fn omega<T: Float>(k: isize, n: usize) -> Complex<T> {
    let k = k.rem_euclid(n as isize);
    let turns = k as f64 / n as f64;
    Complex::expi(T::from_f64(2.0 * core::f64::consts::PI * turns))
}

/// Reorder `input` so that index `i` lands at the bit reversal of `i`.
///
/// `j` tracks the mirrored index: each step flips bits of `j` from the top
/// down until one flips from 0 to 1. Swapping only when `i > j` visits every
/// pair once.
fn bit_reverse_permute<T: Float>(input: &mut [Complex<T>]) {
    let n = input.len();
    let mut j = 0usize;
    for i in 0..n {
        if i > j {
            input.swap(i, j);
        }
        let mut l = n >> 1;
        loop {
            j ^= l;
            if j >= l {
                break;
            }
            l >>= 1;
        }
    }
}

/// In-place radix-2 decimation-in-time FFT.
///
/// The length must be a power of two; a single element is returned
/// unchanged. No scaling is applied in either direction, so a forward pass
/// followed by an inverse pass multiplies the data by `n`.
pub fn fft_radix2<T: Float>(
    input: &mut [Complex<T>],
    direction: Direction,
) -> Result<(), FftError> {
    let n = input.len();
    if n == 0 {
        return Err(FftError::EmptyInput);
    }
    if !n.is_power_of_two() {
        return Err(FftError::NonPowerOfTwo);
    }

    bit_reverse_permute(input);

    let way = direction.way();
    let mut len = 2;
    while len <= n {
        let half = len / 2;
        let step = n / len;
        for block in input.chunks_exact_mut(len) {
            let (lo, hi) = block.split_at_mut(half);
            for (i, (u, v)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
                let t = omega::<T>(way * (step * i) as isize, n);
                let z = t * *v;
                *v = *u - z;
                *u += z;
            }
        }
        len <<= 1;
    }
    Ok(())
}

/// Forward DFT of any non-empty length, in place.
///
/// Power-of-two lengths take the radix-2 path; everything else uses
/// Bluestein's algorithm. The slice keeps its length either way.
pub fn fft<T: Float>(input: &mut [Complex<T>]) -> Result<(), FftError> {
    let n = input.len();
    if n == 0 {
        return Err(FftError::EmptyInput);
    }
    if n.is_power_of_two() {
        #[cfg(feature = "verbose-logging")]
        log::debug!("fft: n = {n}, radix-2 path");
        fft_radix2(input, Direction::Forward)
    } else {
        #[cfg(feature = "verbose-logging")]
        log::debug!("fft: n = {n}, bluestein path");
        fft_bluestein(input)
    }
}

/// Normalized inverse DFT of any non-empty length, in place.
///
/// Uses `ifft(x) = conj(fft(conj(x))) / n`, so `ifft(fft(x))` recovers `x`.
pub fn ifft<T: Float>(input: &mut [Complex<T>]) -> Result<(), FftError> {
    let n = input.len();
    if n == 0 {
        return Err(FftError::EmptyInput);
    }
    for c in input.iter_mut() {
        c.im = -c.im;
    }
    fft(input)?;
    let scale = T::one() / T::from_f64(n as f64);
    for c in input.iter_mut() {
        c.im = -c.im;
        *c *= scale;
    }
    Ok(())
}

pub trait FftImpl<T: Float> {
    fn fft(&self, input: &mut [Complex<T>]) -> Result<(), FftError>;
    fn ifft(&self, input: &mut [Complex<T>]) -> Result<(), FftError>;
    fn fft_out_of_place(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        if input.len() != output.len() {
            return Err(FftError::MismatchedLengths);
        }
        output.copy_from_slice(input);
        self.fft(output)
    }
    fn ifft_out_of_place(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        if input.len() != output.len() {
            return Err(FftError::MismatchedLengths);
        }
        output.copy_from_slice(input);
        self.ifft(output)
    }
    /// Transform a copy of `input`, leaving it untouched.
    fn fft_vec(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        let mut out = input.to_vec();
        self.fft(&mut out)?;
        Ok(out)
    }
    fn ifft_vec(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        let mut out = input.to_vec();
        self.ifft(&mut out)?;
        Ok(out)
    }
}

/// Portable scalar engine backed by [`fft`] and [`ifft`]. It holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarFftImpl;

impl<T: Float> FftImpl<T> for ScalarFftImpl {
    fn fft(&self, input: &mut [Complex<T>]) -> Result<(), FftError> {
        fft(input)
    }
    fn ifft(&self, input: &mut [Complex<T>]) -> Result<(), FftError> {
        ifft(input)
    }
}

/// Forward-transform every buffer with `engine`, in order.
///
/// Buffers may differ in length. The first failing buffer stops the run;
/// buffers before it stay transformed and buffers after it are untouched.
pub fn batch<T: Float, F: FftImpl<T>>(
    engine: &F,
    buffers: &mut [Vec<Complex<T>>],
) -> Result<(), FftError> {
    buffers.iter_mut().try_for_each(|buf| engine.fft(buf))
}

/// Normalized inverse of [`batch`], with the same stop-on-error behaviour.
pub fn batch_inverse<T: Float, F: FftImpl<T>>(
    engine: &F,
    buffers: &mut [Vec<Complex<T>>],
) -> Result<(), FftError> {
    buffers.iter_mut().try_for_each(|buf| engine.ifft(buf))
}

#[cfg(all(feature = "internal-tests", test))]
mod coverage_tests {
    use super::*;
    use crate::dft::dft;
    use alloc::vec;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_signal(rng: &mut StdRng, n: usize) -> Vec<Complex64> {
        (0..n)
            .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
            .collect()
    }

    #[test]
    fn test_bit_reverse_permute_order() {
        let mut data: Vec<Complex32> = (0..8).map(|i| Complex32::from_real(i as f32)).collect();
        bit_reverse_permute(&mut data);
        let order: Vec<f32> = data.iter().map(|c| c.re).collect();
        assert_eq!(order, vec![0.0, 4.0, 2.0, 6.0, 1.0, 5.0, 3.0, 7.0]);
    }

    #[test]
    fn test_bit_reverse_permute_is_involution() {
        let orig: Vec<Complex32> = (0..32).map(|i| Complex32::new(i as f32, 0.5)).collect();
        let mut data = orig.clone();
        bit_reverse_permute(&mut data);
        bit_reverse_permute(&mut data);
        assert_eq!(data, orig);
    }

    #[test]
    fn test_omega_quarter_turns() {
        let w: Complex64 = omega(1, 4);
        assert!(w.re.abs() < 1e-15 && (w.im - 1.0).abs() < 1e-15);
        let w: Complex64 = omega(-1, 4);
        assert!(w.re.abs() < 1e-15 && (w.im + 1.0).abs() < 1e-15);
        let w: Complex64 = omega(9, 4);
        assert!(w.re.abs() < 1e-15 && (w.im - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_radix2_matches_dft_f64() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in [1usize, 2, 4, 8, 64, 256] {
            let input = random_signal(&mut rng, n);
            let expected = dft(&input);
            let mut data = input.clone();
            fft_radix2(&mut data, Direction::Forward).unwrap();
            for (a, b) in data.iter().zip(expected.iter()) {
                assert!((*a - *b).norm() < 1e-9, "n = {n}: {a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_ifft_inverts_fft_random() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in [3usize, 10, 16, 31, 100] {
            let orig = random_signal(&mut rng, n);
            let mut data = orig.clone();
            fft(&mut data).unwrap();
            ifft(&mut data).unwrap();
            for (a, b) in data.iter().zip(orig.iter()) {
                assert!((*a - *b).norm() < 1e-9);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_fft_matches_dft(
            len in 1usize..48,
            ref signal in proptest::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 48),
        ) {
            let input: Vec<Complex64> = signal
                .iter()
                .take(len)
                .map(|&(re, im)| Complex64::new(re, im))
                .collect();
            let expected = dft(&input);
            let mut data = input.clone();
            fft(&mut data).unwrap();
            prop_assert_eq!(data.len(), len);
            for (a, b) in data.iter().zip(expected.iter()) {
                prop_assert!((*a - *b).norm() < 1e-8 * (1.0 + b.norm()));
            }
        }

        #[test]
        fn prop_linearity(
            len in 1usize..40,
            a in -4.0f64..4.0,
            b in -4.0f64..4.0,
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let x = random_signal(&mut rng, len);
            let y = random_signal(&mut rng, len);
            let mut mixed: Vec<Complex64> =
                x.iter().zip(y.iter()).map(|(&xi, &yi)| xi * a + yi * b).collect();
            let mut fx = x.clone();
            let mut fy = y.clone();
            fft(&mut mixed).unwrap();
            fft(&mut fx).unwrap();
            fft(&mut fy).unwrap();
            for i in 0..len {
                let expect = fx[i] * a + fy[i] * b;
                prop_assert!((mixed[i] - expect).norm() < 1e-8);
            }
        }
    }
}
