/// Common trait for sample-by-sample filters
///
/// Implemented by `FirFilter` and `IirFilter`.
pub trait Filter {
    /// Feed one input sample and return one output sample
    fn step(&mut self, sample: f64) -> f64;

    /// Clear all internal state back to zero
    fn reset(&mut self);

    /// Process a buffer of samples in-place
    fn process_buffer(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.step(*sample);
        }
    }
}
