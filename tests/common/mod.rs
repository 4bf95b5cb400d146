#![allow(dead_code)]

/// Band-pass biquad used throughout the IIR tests
pub const BANDPASS_B: [f64; 3] = [0.184523494307847, 0.0, -0.184523494307847];
pub const BANDPASS_A: [f64; 3] = [1.0, -1.59697023454539, 0.630953011384306];

/// Direct-form I difference equation, normalized by `a[0]`
///
/// Same output as MATLAB/Octave `filter(b, a, x)` with zero initial state.
pub fn lfilter(b: &[f64], a: &[f64], x: &[f64]) -> Vec<f64> {
    let mut y: Vec<f64> = Vec::with_capacity(x.len());
    for n in 0..x.len() {
        let mut acc = 0.0;
        for (k, &bk) in b.iter().enumerate() {
            if n >= k {
                acc += bk * x[n - k];
            }
        }
        for (k, &ak) in a.iter().enumerate().skip(1) {
            if n >= k {
                acc -= ak * y[n - k];
            }
        }
        y.push(acc / a[0]);
    }
    y
}

/// Deterministic broadband test signal
pub fn chirp(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            (0.05 * t + 0.002 * t * t).sin() + 0.3 * (1.7 * t).cos()
        })
        .collect()
}

pub fn impulse(len: usize) -> Vec<f64> {
    let mut x = vec![0.0; len];
    if len > 0 {
        x[0] = 1.0;
    }
    x
}
