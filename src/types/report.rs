use std::fmt;

use super::outcome::SkipReason;
use super::style::Style;

/// The rule and condition that styled a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    /// Position of the rule in the caller's rule list.
    pub rule_index: usize,
    pub rule_name: Option<String>,
    /// Position of the condition within the rule.
    pub condition_index: usize,
    pub style: Style,
}

/// A rule or condition passed over before the match (or before giving up).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skip {
    pub rule_index: usize,
    /// `None` when the whole rule was passed over.
    pub condition_index: Option<usize>,
    pub reason: SkipReason,
}

/// Detailed account of how one cell or record was styled, returned by
/// [`explain_cell()`](crate::explain_cell) and [`explain_row()`](crate::explain_row).
///
/// Rule-level skips found while indexing come first, followed by the skips
/// met while scanning, in scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct StyleReport {
    hit: Option<Hit>,
    skipped: Vec<Skip>,
}

impl StyleReport {
    pub(crate) fn new(hit: Option<Hit>, skipped: Vec<Skip>) -> Self {
        Self { hit, skipped }
    }

    /// The winning rule and condition, if any.
    #[must_use]
    pub fn hit(&self) -> Option<&Hit> {
        self.hit.as_ref()
    }

    /// The style the unit receives; empty when nothing matched.
    pub fn style(&self) -> Style {
        self.hit
            .as_ref()
            .map(|hit| hit.style.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn skipped(&self) -> &[Skip] {
        &self.skipped
    }

    /// Skips caused by malformed rules or conditions, as opposed to data that
    /// simply did not match.
    pub fn rule_problems(&self) -> impl Iterator<Item = &Skip> {
        self.skipped
            .iter()
            .filter(|skip| skip.reason.is_malformed_rule())
    }
}

impl fmt::Display for StyleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.hit {
            Some(hit) => write!(
                f,
                "matched: rule {} condition {} -> {}",
                hit.rule_index, hit.condition_index, hit.style
            )?,
            None => write!(f, "matched: none")?,
        }
        write!(f, ", skipped: {}", self.skipped.len())
    }
}
