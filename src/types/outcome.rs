use std::fmt;

use super::style::Style;

/// Why a rule or condition did not produce a match.
///
/// Styling never fails; every one of these resolves to "leave the unit
/// unchanged". They are surfaced only through diagnostics and logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The rule's type is not `color`.
    NotColorRule,
    /// The rule is disabled.
    Disabled,
    /// The rule has no config or names no field.
    MissingField,
    /// The rule's field has no matching header (cell mode).
    UnknownColumn(String),
    /// The record has no value, or a null value, for the rule's field (row mode).
    FieldAbsent(String),
    /// The condition has no operator.
    MissingOperator,
    /// The condition has no font color (cell mode).
    MissingFontColor,
    UnknownOperator(String),
    /// The cell value has no numeric reading under an ordering operator.
    NotNumeric,
    /// The condition's operand has no numeric reading under an ordering operator.
    ThresholdNotNumeric,
    /// `in` was used without a list operand (cell mode).
    OperandNotList,
    /// The value and the operand cannot be ordered against each other (row mode).
    Incomparable,
    /// The comparison was evaluated and is false.
    NoMatch,
}

impl SkipReason {
    /// Whether the skip stems from a malformed rule or condition rather than
    /// from the data.
    #[must_use]
    pub fn is_malformed_rule(&self) -> bool {
        matches!(
            self,
            SkipReason::NotColorRule
                | SkipReason::MissingField
                | SkipReason::UnknownColumn(_)
                | SkipReason::MissingOperator
                | SkipReason::MissingFontColor
                | SkipReason::UnknownOperator(_)
                | SkipReason::ThresholdNotNumeric
                | SkipReason::OperandNotList
        )
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotColorRule => write!(f, "not a color rule"),
            SkipReason::Disabled => write!(f, "rule disabled"),
            SkipReason::MissingField => write!(f, "rule names no field"),
            SkipReason::UnknownColumn(field) => write!(f, "no column named '{field}'"),
            SkipReason::FieldAbsent(field) => write!(f, "field '{field}' absent or null"),
            SkipReason::MissingOperator => write!(f, "condition has no operator"),
            SkipReason::MissingFontColor => write!(f, "condition has no font color"),
            SkipReason::UnknownOperator(op) => write!(f, "unknown operator '{op}'"),
            SkipReason::NotNumeric => write!(f, "value is not numeric"),
            SkipReason::ThresholdNotNumeric => write!(f, "operand is not numeric"),
            SkipReason::OperandNotList => write!(f, "'in' operand is not a list"),
            SkipReason::Incomparable => write!(f, "value and operand are incomparable"),
            SkipReason::NoMatch => write!(f, "no match"),
        }
    }
}

/// The result of evaluating one condition against one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched(Style),
    Skipped(SkipReason),
}

impl MatchOutcome {
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }

    #[must_use]
    pub fn into_style(self) -> Option<Style> {
        match self {
            MatchOutcome::Matched(style) => Some(style),
            MatchOutcome::Skipped(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_messages() {
        assert_eq!(
            SkipReason::UnknownColumn("qty".into()).to_string(),
            "no column named 'qty'"
        );
        assert_eq!(
            SkipReason::FieldAbsent("days".into()).to_string(),
            "field 'days' absent or null"
        );
        assert_eq!(
            SkipReason::UnknownOperator("!=".into()).to_string(),
            "unknown operator '!='"
        );
        assert_eq!(SkipReason::NoMatch.to_string(), "no match");
    }

    #[test]
    fn malformed_rule_classification() {
        assert!(SkipReason::NotColorRule.is_malformed_rule());
        assert!(SkipReason::UnknownOperator("x".into()).is_malformed_rule());
        assert!(!SkipReason::NoMatch.is_malformed_rule());
        assert!(!SkipReason::NotNumeric.is_malformed_rule());
        assert!(!SkipReason::FieldAbsent("f".into()).is_malformed_rule());
    }

    #[test]
    fn outcome_accessors() {
        let matched = MatchOutcome::Matched(Style::color("red"));
        assert!(matched.is_match());
        assert_eq!(matched.into_style(), Some(Style::color("red")));

        let skipped = MatchOutcome::Skipped(SkipReason::NoMatch);
        assert!(!skipped.is_match());
        assert_eq!(skipped.into_style(), None);
    }
}
