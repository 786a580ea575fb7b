use crate::modules::transformer::core::training::{Label, LabeledMessage};
use crate::modules::transformer::core::transformer::SpamTransformer;
use crate::modules::transformer::use_cases::evaluate_transformer::report::{
    EvaluationReport, SuccessfulTransform,
};

const PROGRESS_EVERY: usize = 100;

/// Runs every labeled message through the transformer and classifies the
/// result. A row is correct when the classification still matches its label;
/// spam that comes out as ham is collected as a successful transform.
pub fn evaluate(
    transformer: &SpamTransformer,
    test_set: &[LabeledMessage],
    max_synonyms: Option<usize>,
) -> EvaluationReport {
    let mut correct = 0;
    let mut successful_transforms = Vec::new();

    for (index, row) in test_set.iter().enumerate() {
        let transformed = transformer.transform(&row.text, max_synonyms).content;
        let prediction = transformer.filter().filter(&transformed).label;

        if prediction == row.label {
            correct += 1;
        } else if row.label == Label::Spam {
            successful_transforms.push(SuccessfulTransform {
                original: row.text.clone(),
                transformed,
            });
        }

        if (index + 1) % PROGRESS_EVERY == 0 {
            tracing::info!(evaluated = index + 1, total = test_set.len(), "evaluation progress");
        }
    }

    let total = test_set.len();
    let accuracy = if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64
    };

    EvaluationReport {
        total,
        correct,
        accuracy,
        successful_transforms,
    }
}
