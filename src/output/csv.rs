use super::{Formatter, StepRecord};

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, record: &StepRecord) -> String {
        format!("{},{},{}", record.index, record.input, record.output)
    }

    fn header(&self) -> Option<&'static str> {
        Some("index,input,output")
    }
}
