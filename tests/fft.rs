// Test intent: verifies the length dispatcher against the direct DFT and the
// algebraic properties every DFT must satisfy.
use anyfft::dft::dft;
use anyfft::{fft, Complex32, Complex64};

/// Relative tolerance for single-precision transforms of up to 1024 points.
const EPSILON: f64 = 1e-4;

fn to_f64(data: &[Complex32]) -> Vec<Complex64> {
    data.iter()
        .map(|c| Complex64::new(c.re as f64, c.im as f64))
        .collect()
}

fn peak(data: &[Complex64]) -> f64 {
    data.iter().map(|c| c.norm()).fold(1.0, f64::max)
}

fn assert_matches_dft(input: &[Complex32]) {
    let expected = dft(&to_f64(input));
    let mut data = input.to_vec();
    fft(&mut data).unwrap();
    assert_eq!(data.len(), input.len());
    let scale = peak(&expected);
    for (k, (a, b)) in data.iter().zip(expected.iter()).enumerate() {
        let err = (Complex64::new(a.re as f64, a.im as f64) - *b).norm();
        assert!(
            err <= EPSILON * scale,
            "n = {}, bin {k}: {a:?} vs {b:?}",
            input.len()
        );
    }
}

fn signal(n: usize, seed: u32) -> Vec<Complex32> {
    // Cheap deterministic pseudo-random values in [-1, 1).
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        (state as f32 / u32::MAX as f32) * 2.0 - 1.0
    };
    (0..n).map(|_| Complex32::new(next(), next())).collect()
}

#[test]
fn impulse_length_four_is_flat() {
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
}

#[test]
fn constant_length_four_is_dc_only() {
    let mut data = [Complex32::new(1.0, 0.0); 4];
    fft(&mut data).unwrap();
    assert!((data[0].re - 4.0).abs() < 1e-6);
    assert!(data[0].im.abs() < 1e-6);
    for c in &data[1..] {
        assert!(c.re.abs() < 1e-6 && c.im.abs() < 1e-6, "{c:?}");
    }
}

#[test]
fn impulse_length_three_is_flat() {
    let mut data = vec![
        Complex32::new(1.0, 0.0),
        Complex32::new(0.0, 0.0),
        Complex32::new(0.0, 0.0),
    ];
    fft(&mut data).unwrap();
    assert_eq!(data.len(), 3);
    for c in &data {
        assert!((c.re - 1.0).abs() < 1e-5, "re = {}", c.re);
        assert!(c.im.abs() < 1e-5, "im = {}", c.im);
    }
}

#[test]
fn impulse_is_flat_for_any_length() {
    for n in 1..=40 {
        let mut data = vec![Complex32::zero(); n];
        data[0] = Complex32::from_real(1.0);
        fft(&mut data).unwrap();
        for c in &data {
            assert!((c.re - 1.0).abs() < 1e-5 && c.im.abs() < 1e-5, "n = {n}: {c:?}");
        }
    }
}

#[test]
fn power_of_two_lengths_match_dft() {
    for n in [1usize, 2, 4, 8, 16, 64, 256, 1024] {
        assert_matches_dft(&signal(n, n as u32));
    }
}

#[test]
fn arbitrary_lengths_match_dft() {
    for n in [3usize, 5, 6, 7, 9, 10, 12, 15, 18, 100, 127, 1000] {
        assert_matches_dft(&signal(n, n as u32));
    }
}

#[test]
fn forward_kernel_sign_is_negative() {
    // exp(+2πi·j/n) concentrates in bin 1 under the exp(-2πi·jk/n) kernel.
    for n in [6usize, 8] {
        let mut data: Vec<Complex32> = (0..n)
            .map(|j| {
                let theta = 2.0 * std::f32::consts::PI * j as f32 / n as f32;
                Complex32::new(theta.cos(), theta.sin())
            })
            .collect();
        fft(&mut data).unwrap();
        for (k, c) in data.iter().enumerate() {
            let expect = if k == 1 { n as f32 } else { 0.0 };
            assert!((c.re - expect).abs() < 1e-3 && c.im.abs() < 1e-3, "n = {n}, bin {k}");
        }
    }
}

#[test]
fn transform_is_linear() {
    let (a, b) = (2.5f32, -0.75f32);
    for n in [7usize, 16, 30] {
        let x = signal(n, 1);
        let y = signal(n, 2);
        let mut mixed: Vec<Complex32> =
            x.iter().zip(y.iter()).map(|(&xi, &yi)| a * xi + b * yi).collect();
        let mut fx = x.clone();
        let mut fy = y.clone();
        fft(&mut mixed).unwrap();
        fft(&mut fx).unwrap();
        fft(&mut fy).unwrap();
        for i in 0..n {
            let expect = a * fx[i] + b * fy[i];
            assert!((mixed[i] - expect).norm() < 1e-3, "n = {n}, bin {i}");
        }
    }
}

#[test]
fn parseval_energy_relation() {
    for n in [5usize, 8, 33, 64, 100] {
        let input = signal(n, 9);
        let energy_in: f64 = input.iter().map(|c| c.norm2() as f64).sum();
        let mut data = input.clone();
        fft(&mut data).unwrap();
        let energy_out: f64 = data.iter().map(|c| c.norm2() as f64).sum();
        let expect = n as f64 * energy_in;
        assert!(
            (energy_out - expect).abs() <= 1e-4 * expect,
            "n = {n}: {energy_out} vs {expect}"
        );
    }
}

#[test]
fn double_precision_is_tighter() {
    let input: Vec<Complex64> = (0..45)
        .map(|i| Complex64::new((i % 7) as f64 - 3.0, (i % 5) as f64 * 0.5))
        .collect();
    let expected = dft(&input);
    let mut data = input.clone();
    fft(&mut data).unwrap();
    for (a, b) in data.iter().zip(expected.iter()) {
        assert!((*a - *b).norm() < 1e-10);
    }
}
