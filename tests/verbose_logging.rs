#![cfg(feature = "verbose-logging")]

use anyfft::{fft, ifft, Complex64};

fn init_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}

// Logging must not change results on either path.
#[test]
fn logging_enabled_transforms_still_invert() {
    init_logger();
    for n in [16usize, 18] {
        let orig: Vec<Complex64> = (0..n)
            .map(|j| Complex64::from_real((j % 4 + j * j % 8) as f64))
            .collect();
        let mut data = orig.clone();
        fft(&mut data).unwrap();
        ifft(&mut data).unwrap();
        for (a, b) in data.iter().zip(orig.iter()) {
            assert!((*a - *b).norm() < 1e-9, "n = {n}");
        }
    }
}
