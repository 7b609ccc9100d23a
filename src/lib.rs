//! # anyfft - in-place FFT for any length
//!
//! Discrete Fourier transforms of one-dimensional complex sequences, computed
//! in place for every length, not only powers of two.
//!
//! ## Algorithms
//!
//! - **Radix-2 Cooley–Tukey** (decimation in time) for power-of-two lengths.
//! - **Bluestein's chirp z-transform** for everything else. It turns the DFT
//!   into a convolution evaluated with three radix-2 transforms on a padded
//!   buffer.
//!
//! [`fft()`] inspects the length and picks the path. [`fft_radix2`] is exposed
//! for callers that want the raw power-of-two transform in either
//! [`Direction`]; it never normalizes, so forward followed by inverse scales
//! the data by `n`. [`ifft`] is the normalized inverse for any length.
//!
//! ```
//! use anyfft::{fft, Complex32};
//!
//! let mut data = vec![
//!     Complex32::new(1.0, 0.0),
//!     Complex32::new(0.0, 0.0),
//!     Complex32::new(0.0, 0.0),
//! ];
//! fft(&mut data).unwrap();
//! for c in &data {
//!     assert!((c.re - 1.0).abs() < 1e-5 && c.im.abs() < 1e-5);
//! }
//! ```
//!
//! ## Cargo Features
//!
//! - `std` (default): use `std` float intrinsics and implement
//!   `std::error::Error`. Without it the crate is `no_std` + `alloc` and uses `libm`.
//! - `verbose-logging`: emit `log` records describing the transform path.
//! - `internal-tests`: build the in-crate property tests (`proptest`, `rand`).
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 (<https://www.apache.org/licenses/LICENSE-2.0>)
//! - MIT license (<https://opensource.org/licenses/MIT>)
//!
//! at your option.

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

/// Complex numbers and the float abstraction behind them.
pub mod num;

/// Radix-2 transform, length dispatcher and convenience wrappers.
pub mod fft;

/// Bluestein's algorithm for arbitrary lengths.
pub mod bluestein;

/// Direct O(n²) DFT used as a reference.
pub mod dft;

pub use bluestein::fft_bluestein;
pub use fft::{
    batch, batch_inverse, fft, fft_radix2, ifft, omega, Direction, FftError, FftImpl,
    ScalarFftImpl,
};
pub use num::{Complex, Complex32, Complex64, Float};

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::f32::consts;

    #[test]
    fn test_fft_ifft_f32() {
        // FFT of [1, 0, 0, 0] should be [1, 1, 1, 1]
        let mut data = [
            Complex32::new(1.0, 0.0),
            Complex32::new(0.0, 0.0),
            Complex32::new(0.0, 0.0),
            Complex32::new(0.0, 0.0),
        ];
        fft(&mut data).unwrap();
        for c in &data {
            assert!((c.re - 1.0).abs() < 1e-6, "re = {}", c.re);
            assert!(c.im.abs() < 1e-6, "im = {}", c.im);
        }
        // IFFT should recover the original
        ifft(&mut data).unwrap();
        assert!((data[0].re - 1.0).abs() < 1e-6);
        for c in &data[1..] {
            assert!(c.re.abs() < 1e-6);
            assert!(c.im.abs() < 1e-6);
        }
    }

    #[test]
    fn test_fft_cosine_wave() {
        // FFT of a cosine wave should have two peaks
        let n = 12;
        let mut data: Vec<Complex32> = (0..n)
            .map(|i| Complex32::new((2.0 * consts::PI * (i as f32) / n as f32).cos(), 0.0))
            .collect();
        fft(&mut data).unwrap();
        for (k, c) in data.iter().enumerate() {
            if k == 1 || k == n - 1 {
                assert!((c.re - n as f32 / 2.0).abs() < 1e-3);
            } else {
                assert!(c.norm() < 1e-3, "bin {k} = {c:?}");
            }
        }
    }

    #[test]
    fn test_fft_all_real_hermitian() {
        let mut data = vec![
            Complex32::new(1.0, 0.0),
            Complex32::new(2.0, 0.0),
            Complex32::new(3.0, 0.0),
            Complex32::new(4.0, 0.0),
            Complex32::new(5.0, 0.0),
        ];
        fft(&mut data).unwrap();
        // For real input, FFT should have Hermitian symmetry
        assert!((data[1].re - data[4].re).abs() < 1e-3);
        assert!((data[1].im + data[4].im).abs() < 1e-3);
        assert!((data[2].re - data[3].re).abs() < 1e-3);
        assert!((data[2].im + data[3].im).abs() < 1e-3);
    }
}
