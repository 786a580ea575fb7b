use crate::modules::transformer::core::training::TrainingSet;

/// Four-message corpus small enough to score by hand.
///
/// spam: win x2, now x2, cash, a, prize (7 words)
/// ham: at x2, lunch x2, see, you, noon, today (8 words)
/// vocabulary: 11 distinct words
pub fn small_training_set() -> TrainingSet {
    TrainingSet::from_json_str(
        r#"[
            {"label": "spam", "text": "win cash now"},
            {"label": "spam", "text": "win a prize now"},
            {"label": "ham", "text": "see you at lunch"},
            {"label": "ham", "text": "lunch at noon today"}
        ]"#,
    )
    .unwrap()
}
