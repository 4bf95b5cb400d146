//! Fixed input sequences for exercising the filters.
//!
//! Samples are 16-bit integers, as from an ADC, and are promoted to `f64`
//! before filtering.

const IMPULSE: [i16; 10] = [0, 1, 0, 0, 0, 0, 0, 0, 0, 0];
const STEP: [i16; 10] = [0, 1, 1, 1, 1, 1, 1, 1, 1, 1];
const ALTERNATING: [i16; 10] = [0, 1, -1, 1, -1, 1, -1, 1, -1, 1];

/// Named input sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum InputSequence {
    /// Single unit sample at index 1
    #[default]
    Impulse,
    /// Unit step starting at index 1
    Step,
    /// +1/-1 at the Nyquist rate starting at index 1
    Alternating,
}

impl InputSequence {
    pub fn samples(&self) -> &'static [i16] {
        match self {
            InputSequence::Impulse => &IMPULSE,
            InputSequence::Step => &STEP,
            InputSequence::Alternating => &ALTERNATING,
        }
    }

    pub fn as_f64(&self) -> Vec<f64> {
        self.samples().iter().map(|&s| f64::from(s)).collect()
    }
}
