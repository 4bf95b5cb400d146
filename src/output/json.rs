use super::{Formatter, StepRecord};

/// One JSON object per line
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, record: &StepRecord) -> String {
        serde_json::json!({
            "index": record.index,
            "input": record.input,
            "output": record.output,
        })
        .to_string()
    }
}
