use log::trace;

use crate::index::{unusable, ColumnIndex, IndexedRule};
use crate::matcher::{match_condition, Mode};
use crate::types::{Hit, Skip, StyleReport};
use crate::{MatchOutcome, Rule, StyledCell, Value};

/// Apply color rules to the cells of a table.
///
/// `headers` names the columns of `data` and is only used to resolve each
/// rule's field to a column. The result has the same shape as `data`. A cell
/// whose column has a matching rule becomes [`StyledCell::Markup`], a `<span>`
/// carrying the winning font color around the HTML-escaped cell text; every
/// other cell is returned as [`StyledCell::Plain`] with its original value.
///
/// Rules on the same column are tried highest priority first; within a rule,
/// conditions are tried in order. The first condition that matches decides
/// the cell.
///
/// # Example
///
/// ```
/// use tinct::{apply_cell_styles, Condition, Rule, StyledCell, Value};
///
/// let rules = vec![Rule::color("qty").when(Condition::gte(10_i64).font_color("#ff0000"))];
/// let data = vec![vec![Value::from("north"), Value::Int(12)]];
///
/// let styled = apply_cell_styles(&data, &rules, &["site", "qty"]);
/// assert_eq!(styled[0][0], StyledCell::Plain(Value::from("north")));
/// assert_eq!(
///     styled[0][1].as_markup(),
///     Some(r#"<span style="color: #ff0000; font-weight: bold;">12</span>"#)
/// );
/// ```
#[must_use]
pub fn apply_cell_styles<H: AsRef<str>>(
    data: &[Vec<Value>],
    rules: &[Rule],
    headers: &[H],
) -> Vec<Vec<StyledCell>> {
    if data.is_empty() || rules.is_empty() {
        return unchanged(data);
    }

    let index = ColumnIndex::build(rules, headers, |_, _| {});
    if index.is_empty() {
        return unchanged(data);
    }

    data.iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(column, value)| match index.rules_for(column) {
                    Some(column_rules) => style_cell(value, column_rules),
                    None => StyledCell::Plain(value.clone()),
                })
                .collect()
        })
        .collect()
}

/// Explain how a single value in the column named `field` would be styled.
///
/// Rules targeting other fields are ignored. Rules that could never take part
/// (wrong type, disabled, no field) are reported first.
pub fn explain_cell(value: &Value, field: &str, rules: &[Rule]) -> StyleReport {
    let mut skipped = Vec::new();
    let index = ColumnIndex::build(rules, &[field], |rule_index, reason| {
        if unusable(&rules[rule_index]).is_some() {
            skipped.push(Skip {
                rule_index,
                condition_index: None,
                reason,
            });
        }
    });
    let hit = index
        .rules_for(0)
        .and_then(|column_rules| scan(value, column_rules, |skip| skipped.push(skip)));
    StyleReport::new(hit, skipped)
}

fn unchanged(data: &[Vec<Value>]) -> Vec<Vec<StyledCell>> {
    data.iter()
        .map(|row| row.iter().cloned().map(StyledCell::Plain).collect())
        .collect()
}

fn style_cell(value: &Value, rules: &[IndexedRule<'_>]) -> StyledCell {
    match scan(value, rules, |_| {}) {
        Some(hit) => {
            let color = hit.style.font_color.as_deref().unwrap_or_default();
            StyledCell::Markup(render_markup(color, value))
        }
        None => StyledCell::Plain(value.clone()),
    }
}

/// Walk the column's rules (already in priority order) and their conditions
/// until one matches.
fn scan(
    value: &Value,
    rules: &[IndexedRule<'_>],
    mut on_skip: impl FnMut(Skip),
) -> Option<Hit> {
    for indexed in rules {
        for (condition_index, condition) in indexed.rule.conditions().iter().enumerate() {
            match match_condition(value, condition, Mode::Cell) {
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

fn render_markup(color: &str, value: &Value) -> String {
    format!(
        "<span style=\"color: {}; font-weight: bold;\">{}</span>",
        escape_html(color),
        escape_html(&value.to_string())
    )
}

/// Escape text for inclusion in HTML content or a quoted attribute.
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}
