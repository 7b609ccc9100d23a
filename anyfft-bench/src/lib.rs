//! Input generators shared by the benchmarks.

use anyfft::Complex32;

/// Real ramp `x[j] = j mod 4 + j² mod 8`, imaginary parts zero.
pub fn ramp_signal(n: usize) -> Vec<Complex32> {
    (0..n)
        .map(|j| Complex32::from_real((j % 4 + j * j % 8) as f32))
        .collect()
}

/// `x[j] = j - j·i`, a signal with no symmetry to exploit.
pub fn skew_signal(n: usize) -> Vec<Complex32> {
    (0..n)
        .map(|i| Complex32::new(i as f32, -(i as f32)))
        .collect()
}
