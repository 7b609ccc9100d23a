//! Demonstrates enabling verbose logging for anyfft.
use anyfft::{fft, Complex32};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    // One transform per path: 8 points go radix-2, 18 points go Bluestein.
    let mut pow2: Vec<Complex32> = (0..8).map(|j| Complex32::from_real(j as f32)).collect();
    fft(&mut pow2).unwrap();

    let mut ramp: Vec<Complex32> = (0..18)
        .map(|j| Complex32::from_real((j % 4 + j * j % 8) as f32))
        .collect();
    fft(&mut ramp).unwrap();
    println!("X[0] = {:?}", ramp[0]);
}
