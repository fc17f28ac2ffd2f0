use thiserror::Error;

/// Errors raised while loading rules.
///
/// Styling itself never fails. Only reading a rule document can, via
/// [`RuleSet::from_json()`](crate::RuleSet::from_json),
/// [`RuleSet::from_reader()`](crate::RuleSet::from_reader) and
/// [`RuleSet::from_file()`](crate::RuleSet::from_file).
#[derive(Debug, Error)]
pub enum TinctError {
    /// The document is not JSON, or not a JSON array.
    #[error("invalid rule document: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
