use crate::modules::transformer::core::training::{TrainingError, TrainingSet};
use crate::modules::transformer::use_cases::evaluate_transformer::handler::evaluate;
use crate::modules::transformer::use_cases::evaluate_transformer::report::EvaluationReport;
use crate::shared::infrastructure::config::Config;
use crate::shell::bootstrap::{BootstrapError, build_transformer};
use std::fs::File;
use std::io::BufWriter;
use thiserror::Error;

pub const DEFAULT_MAX_SYNONYMS: usize = 5;

#[derive(Debug, Error)]
pub enum EvaluateError {
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    #[error("failed to load test data: {0}")]
    TestData(#[source] TrainingError),

    #[error("failed to write {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub fn max_synonyms(config: &Config) -> usize {
    config.max_synonyms.unwrap_or(DEFAULT_MAX_SYNONYMS)
}

pub fn load_test_set(config: &Config) -> Result<TrainingSet, TrainingError> {
    match &config.test_data_path {
        Some(path) => TrainingSet::from_path(path),
        None => TrainingSet::bundled(),
    }
}

/// Evaluates the configured transformer against the test set and writes the
/// successful transforms to the configured output file.
pub fn run(config: &Config) -> Result<EvaluationReport, EvaluateError> {
    let transformer = build_transformer(config)?;

    tracing::info!("Reading test data...");
    let test_set = load_test_set(config).map_err(EvaluateError::TestData)?;
    tracing::info!(rows = test_set.len(), "Finished reading test data");

    let report = evaluate(&transformer, test_set.messages(), Some(max_synonyms(config)));

    let output = &config.evaluation_output_path;
    let output_error = |source| EvaluateError::Output {
        path: output.display().to_string(),
        source,
    };
    let file = File::create(output).map_err(output_error)?;
    report
        .write_successful_transforms(BufWriter::new(file))
        .map_err(output_error)?;

    tracing::info!(
        total = report.total,
        correct = report.correct,
        successful_transforms = report.successful_transforms.len(),
        "Transformed accuracy: {}",
        report.accuracy
    );
    Ok(report)
}
