//! Forward and inverse transforms on a few lengths.
use anyfft::{fft, ifft, Complex32};

fn main() {
    let mut data = vec![
        Complex32::new(1.0, 0.0),
        Complex32::new(0.0, 0.0),
        Complex32::new(0.0, 0.0),
        Complex32::new(0.0, 0.0),
    ];
    fft(&mut data).unwrap();
    println!("impulse, n = 4: {data:?}");

    let mut odd: Vec<Complex32> = (0..5).map(|j| Complex32::from_real(j as f32)).collect();
    fft(&mut odd).unwrap();
    println!("ramp, n = 5: {odd:?}");
    ifft(&mut odd).unwrap();
    println!("back: {odd:?}");
}
