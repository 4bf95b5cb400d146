use crate::error::{FilterError, Result};
use crate::signal_processing::Filter;

/// Finite impulse response filter over a circular history buffer
///
/// Holds the last `tap_count` inputs and convolves them with a fixed
/// coefficient vector on every step. Coefficient 0 pairs with the oldest
/// sample in the window and coefficient `tap_count - 1` with the newest, so
/// an impulse fed into a zeroed filter reads the coefficients out back to
/// front.
///
/// Buffers are sized once at construction; `step` never allocates.
#[derive(Debug, Clone)]
pub struct FirFilter {
    coefficients: Vec<f64>,
    history: Vec<f64>,
    write_index: usize,
}

impl FirFilter {
    /// Create a FIR filter with a zeroed history
    ///
    /// # Errors
    /// Returns `FilterError::InvalidConfiguration` if `coefficients` is empty
    pub fn new(coefficients: Vec<f64>) -> Result<Self> {
        let history = vec![0.0; coefficients.len()];
        Self::with_history(coefficients, history)
    }

    /// Create a FIR filter from a caller-supplied history buffer
    ///
    /// `history[0]` is treated as the oldest sample, since writing starts at
    /// slot 0.
    ///
    /// # Errors
    /// Returns `FilterError::InvalidConfiguration` if `coefficients` is empty
    /// or `history` is not the same length as `coefficients`
    pub fn with_history(coefficients: Vec<f64>, history: Vec<f64>) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(FilterError::InvalidConfiguration(
                "FIR filter needs at least one tap".to_string(),
            ));
        }
        if history.len() != coefficients.len() {
            return Err(FilterError::InvalidConfiguration(format!(
                "FIR history length {} does not match tap count {}",
                history.len(),
                coefficients.len()
            )));
        }

        log::debug!("FIR filter configured with {} taps", coefficients.len());

        Ok(Self {
            coefficients,
            history,
            write_index: 0,
        })
    }

    /// Process a single sample through the filter
    pub fn step(&mut self, new_sample: f64) -> f64 {
        self.history[self.write_index] = new_sample;
        self.write_index = self.wrap(self.write_index + 1);

        // write_index now points at the oldest sample; walk forward from it.
        let (newer, older) = self.history.split_at(self.write_index);
        older
            .iter()
            .chain(newer)
            .zip(&self.coefficients)
            .map(|(x, c)| x * c)
            .sum()
    }

    /// Process an entire buffer of samples in-place
    pub fn process_buffer(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.step(*sample);
        }
    }

    /// Zero the history and rewind the write index
    pub fn reset(&mut self) {
        self.history.fill(0.0);
        self.write_index = 0;
    }

    /// Get the number of taps (filter length)
    pub fn tap_count(&self) -> usize {
        self.coefficients.len()
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Raw history buffer in storage order, not time order
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Slot the next sample will be written to
    pub fn write_index(&self) -> usize {
        self.write_index
    }

    // Callers only ever pass values in 0..2*tap_count.
    fn wrap(&self, index: usize) -> usize {
        let n = self.tap_count();
        if index >= n { index - n } else { index }
    }
}

impl Filter for FirFilter {
    fn step(&mut self, sample: f64) -> f64 {
        FirFilter::step(self, sample)
    }

    fn reset(&mut self) {
        FirFilter::reset(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const DEMO_TAPS: [f64; 5] = [0.0, 0.5, 0.75, 0.5, 0.0];

    #[test]
    fn test_single_tap_is_scalar_gain() {
        let mut filter = FirFilter::new(vec![2.5]).unwrap();
        for x in [0.0, 1.0, -3.0, 0.125, 1e6] {
            assert_eq!(filter.step(x), 2.5 * x);
        }
    }

    #[test]
    fn test_impulse_reads_coefficients_newest_first() {
        let mut filter = FirFilter::new(vec![1.0, 2.0, 3.0, 4.0]).unwrap();

        let output: Vec<f64> = [1.0, 0.0, 0.0, 0.0, 0.0]
            .iter()
            .map(|&x| filter.step(x))
            .collect();

        assert_eq!(output, vec![4.0, 3.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_symmetric_impulse_response() {
        let mut filter = FirFilter::new(DEMO_TAPS.to_vec()).unwrap();

        let input = [0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let output: Vec<f64> = input.iter().map(|&x| filter.step(x)).collect();

        // Impulse at index 1 shows up one sample late
        assert_eq!(&output[1..6], &DEMO_TAPS);
        assert_eq!(output[0], 0.0);
        assert!(output[6..].iter().all(|&y| y == 0.0));
    }

    #[test]
    fn test_step_input_settles_to_tap_sum() {
        let mut filter = FirFilter::new(DEMO_TAPS.to_vec()).unwrap();

        let mut last = 0.0;
        for _ in 0..10 {
            last = filter.step(1.0);
        }
        assert_abs_diff_eq!(last, 1.75, epsilon = 1e-12);
    }

    #[test]
    fn test_write_index_wraps() {
        let mut filter = FirFilter::new(vec![1.0; 3]).unwrap();
        let expected = [1, 2, 0, 1, 2, 0, 1];
        for &idx in &expected {
            filter.step(0.0);
            assert_eq!(filter.write_index(), idx);
            assert_eq!(filter.history().len(), 3);
        }
    }

    #[test]
    fn test_history_holds_last_inputs() {
        let mut filter = FirFilter::new(vec![0.0; 3]).unwrap();
        for x in 1..=5 {
            filter.step(x as f64);
        }
        // 5 writes into 3 slots: slot 0 <- 4, slot 1 <- 5, slot 2 <- 3
        assert_eq!(filter.history(), &[4.0, 5.0, 3.0]);
        assert_eq!(filter.write_index(), 2);
    }

    #[test]
    fn test_with_history_primes_window() {
        let mut filter = FirFilter::with_history(vec![1.0, 1.0, 1.0], vec![1.0, 2.0, 3.0]).unwrap();
        // Slot 0 (value 1.0) is overwritten, leaving 2 + 3 + 10
        assert_eq!(filter.step(10.0), 15.0);
    }

    #[test]
    fn test_rejects_empty_coefficients() {
        let result = FirFilter::new(Vec::new());
        assert!(matches!(result, Err(FilterError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_rejects_history_length_mismatch() {
        let result = FirFilter::with_history(vec![1.0, 2.0], vec![0.0; 3]);
        assert!(matches!(result, Err(FilterError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_reset_clears_state() {
        let mut filter = FirFilter::new(DEMO_TAPS.to_vec()).unwrap();
        filter.step(1.0);
        filter.step(1.0);
        filter.reset();

        assert_eq!(filter.write_index(), 0);
        assert!(filter.history().iter().all(|&x| x == 0.0));
        assert_eq!(filter.step(0.0), 0.0);
    }

    #[test]
    fn test_process_buffer_matches_step() {
        let input = [0.3, -1.0, 2.0, 0.0, 0.7, -0.2];

        let mut stepped = FirFilter::new(DEMO_TAPS.to_vec()).unwrap();
        let expected: Vec<f64> = input.iter().map(|&x| stepped.step(x)).collect();

        let mut buffered = FirFilter::new(DEMO_TAPS.to_vec()).unwrap();
        let mut buffer = input;
        buffered.process_buffer(&mut buffer);

        assert_eq!(buffer.to_vec(), expected);
    }
}
