use log::trace;

use crate::index::{order_rows, IndexedRule};
use crate::matcher::{match_condition, Mode};
use crate::types::{Hit, Skip, StyleReport};
use crate::{MatchOutcome, Record, Rule, SkipReason, Style, StyledRecord};

/// Attach a style descriptor to every record.
///
/// Rules are tried lowest priority first (the opposite of
/// [`apply_cell_styles()`](crate::apply_cell_styles)); within a rule,
/// conditions are tried in order. The first matching condition supplies the
/// record's `font_color` and `style_token`; a record nothing matches gets a
/// style with both unset. Rules that are not `color` rules, and rules whose
/// field is missing or null on the record, are passed over.
///
/// With no rules at all the records come back untouched, without a style.
///
/// # Example
///
/// ```
/// use tinct::{apply_row_styles, Condition, Record, Rule, Value};
///
/// let rules = vec![Rule::color("days_remaining").when(Condition::lte(5_i64).font_color("#ff0000"))];
/// let items: Vec<Record> = vec![
///     [("id".to_owned(), Value::Int(1)), ("days_remaining".to_owned(), Value::Int(10))].into(),
///     [("id".to_owned(), Value::Int(2)), ("days_remaining".to_owned(), Value::Int(3))].into(),
/// ];
///
/// let styled = apply_row_styles(&items, &rules);
/// assert_eq!(styled[0].font_color(), None);
/// assert_eq!(styled[1].font_color(), Some("#ff0000"));
/// ```
#[must_use]
pub fn apply_row_styles(items: &[Record], rules: &[Rule]) -> Vec<StyledRecord> {
    if items.is_empty() || rules.is_empty() {
        return items.iter().cloned().map(StyledRecord::unstyled).collect();
    }

    let ordered = order_rows(rules);
    items
        .iter()
        .map(|record| {
            let style = scan(record, &ordered, |_| {})
                .map(|hit| hit.style)
                .unwrap_or_default();
            StyledRecord::styled(record.clone(), style)
        })
        .collect()
}

/// The style descriptor of a single record.
#[must_use]
pub fn row_style(record: &Record, rules: &[Rule]) -> Style {
    scan(record, &order_rows(rules), |_| {})
        .map(|hit| hit.style)
        .unwrap_or_default()
}

/// Explain how a record would be styled, listing every rule and condition
/// passed over on the way.
pub fn explain_row(record: &Record, rules: &[Rule]) -> StyleReport {
    let mut skipped = Vec::new();
    let hit = scan(record, &order_rows(rules), |skip| skipped.push(skip));
    StyleReport::new(hit, skipped)
}

fn skip_rule(rule: &Rule, record: &Record) -> Option<SkipReason> {
    if !rule.is_color() {
        return Some(SkipReason::NotColorRule);
    }
    if !rule.enabled {
        return Some(SkipReason::Disabled);
    }
    let Some(field) = rule.field() else {
        return Some(SkipReason::MissingField);
    };
    match record.get(field) {
        Some(value) if !value.is_null() => None,
        _ => Some(SkipReason::FieldAbsent(field.to_owned())),
    }
}

fn scan(record: &Record, rules: &[IndexedRule<'_>], mut on_skip: impl FnMut(Skip)) -> Option<Hit> {
    for indexed in rules {
        if let Some(reason) = skip_rule(indexed.rule, record) {
            on_skip(Skip {
                rule_index: indexed.position,
                condition_index: None,
                reason,
            });
            continue;
        }
        let Some(value) = indexed.rule.field().and_then(|field| record.get(field)) else {
            continue;
        };

        for (condition_index, condition) in indexed.rule.conditions().iter().enumerate() {
            match match_condition(value, condition, Mode::Row) {
                MatchOutcome::Matched(style) => {
                    return Some(Hit {
                        rule_index: indexed.position,
                        rule_name: indexed.rule.name.clone(),
                        condition_index,
                        style,
                    });
                }
                MatchOutcome::Skipped(reason) => {
                    if reason.is_malformed_rule() {
                        trace!(
                            "rule #{} condition #{condition_index} skipped: {reason}",
                            indexed.position
                        );
                    }
                    on_skip(Skip {
                        rule_index: indexed.position,
                        condition_index: Some(condition_index),
                        reason,
                    });
                }
            }
        }
    }
    None
}
