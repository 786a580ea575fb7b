use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuccessfulTransform {
    pub original: String,
    pub transformed: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub total: usize,
    pub correct: usize,
    pub accuracy: f64,
    pub successful_transforms: Vec<SuccessfulTransform>,
}

impl EvaluationReport {
    /// Two lines per pair: the original spam, then the rewrite that passed.
    pub fn write_successful_transforms(&self, mut out: impl Write) -> io::Result<()> {
        for pair in &self.successful_transforms {
            writeln!(out, "{}", pair.original)?;
            writeln!(out, "{}", pair.transformed)?;
        }
        out.flush()
    }
}
