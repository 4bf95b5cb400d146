use crate::error::{FilterError, Result};
use crate::signal_processing::Filter;

/// IIR filter in Transposed Direct-Form II
///
/// Keeps one unit-delay cell per order of the system, which is the minimum
/// for this realization. Coefficients follow the MATLAB/Octave `filter()`
/// convention: `b` is the numerator, `a` the denominator with `a[0] == 1`.
/// The feedback terms `a[1..]` are subtracted as given and `a[0]` is never
/// read, so coefficients must already be normalized.
///
/// Both coefficient vectors must be exactly `order + 1` long. Pad the shorter
/// one with zeros before construction (see `config::pad_coefficients`).
///
/// Stability is the caller's concern: poles outside the unit circle produce
/// a diverging output and nothing here detects it.
#[derive(Debug, Clone)]
pub struct IirFilter {
    b: Vec<f64>,
    a: Vec<f64>,
    state: Vec<f64>,
}

impl IirFilter {
    /// Create an IIR filter with zeroed state
    ///
    /// # Arguments
    /// * `b` - Feedforward (numerator) coefficients, `order + 1` long
    /// * `a` - Feedback (denominator) coefficients, `order + 1` long
    ///
    /// # Errors
    /// Returns `FilterError::InvalidConfiguration` if the vectors differ in
    /// length or describe an order below 1
    pub fn new(b: Vec<f64>, a: Vec<f64>) -> Result<Self> {
        let order = b.len().saturating_sub(1);
        Self::with_state(b, a, vec![0.0; order])
    }

    /// Create an IIR filter from a caller-supplied delay state
    ///
    /// # Errors
    /// Returns `FilterError::InvalidConfiguration` if `state` is empty or if
    /// either coefficient vector is not `state.len() + 1` long
    pub fn with_state(b: Vec<f64>, a: Vec<f64>, state: Vec<f64>) -> Result<Self> {
        let order = state.len();
        if order == 0 {
            return Err(FilterError::InvalidConfiguration(
                "IIR filter order must be at least 1".to_string(),
            ));
        }
        if b.len() != order + 1 || a.len() != order + 1 {
            return Err(FilterError::InvalidConfiguration(format!(
                "IIR order {} needs {} coefficients each, got b={} a={}",
                order,
                order + 1,
                b.len(),
                a.len()
            )));
        }

        if a[0] != 1.0 && a[0] != 0.0 {
            log::warn!(
                "IIR a[0] = {} is ignored; coefficients are used unnormalized",
                a[0]
            );
        }
        log::debug!("IIR filter configured with order {}", order);

        Ok(Self { b, a, state })
    }

    /// Process a single sample through the filter
    pub fn step(&mut self, new_sample: f64) -> f64 {
        let order = self.state.len();
        let output = new_sample * self.b[0] + self.state[0];

        // Each cell takes its upstream neighbour plus this sample's taps.
        for i in 1..order {
            self.state[i - 1] = self.state[i] + new_sample * self.b[i] - output * self.a[i];
        }
        self.state[order - 1] = new_sample * self.b[order] - output * self.a[order];

        output
    }

    /// Process an entire buffer of samples in-place
    pub fn process_buffer(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.step(*sample);
        }
    }

    pub fn reset(&mut self) {
        self.state.fill(0.0);
    }

    /// Number of delay cells
    pub fn order(&self) -> usize {
        self.state.len()
    }

    pub fn b(&self) -> &[f64] {
        &self.b
    }

    pub fn a(&self) -> &[f64] {
        &self.a
    }

    pub fn state(&self) -> &[f64] {
        &self.state
    }
}

impl Filter for IirFilter {
    fn step(&mut self, sample: f64) -> f64 {
        IirFilter::step(self, sample)
    }

    fn reset(&mut self) {
        IirFilter::reset(self)
    }
}
