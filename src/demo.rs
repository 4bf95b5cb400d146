use std::io::{self, Write};

use crate::output::{Formatter, StepRecord};
use crate::signal_processing::Filter;

/// Run `input` through `filter`, writing one formatted line per sample
///
/// Returns the filter outputs in order.
pub fn run<F, W>(
    filter: &mut F,
    input: &[i16],
    formatter: &dyn Formatter,
    out: &mut W,
) -> io::Result<Vec<f64>>
where
    F: Filter + ?Sized,
    W: Write,
{
    if let Some(header) = formatter.header() {
        writeln!(out, "{}", header)?;
    }

    let mut outputs = Vec::with_capacity(input.len());
    for (index, &sample) in input.iter().enumerate() {
        let output = filter.step(f64::from(sample));
        let record = StepRecord {
            index,
            input: sample,
            output,
        };
        writeln!(out, "{}", formatter.format(&record))?;
        outputs.push(output);
    }

    Ok(outputs)
}
