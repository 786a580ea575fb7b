#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitSpam {
    pub content: Option<String>,
    pub received_at: i64,
}
