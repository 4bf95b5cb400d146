use super::{Formatter, StepRecord};

/// `x(i)=<input>\tf(x)=<output>` with six decimals on the output
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format(&self, record: &StepRecord) -> String {
        format!(
            "x({})={}\tf(x)={:.6}",
            record.index, record.input, record.output
        )
    }
}
