use crate::{Condition, MatchOutcome, Operator, SkipReason, Value};

/// Which styler a condition is evaluated for. The modes differ in three ways:
///
/// - cell mode requires a font color, row mode does not;
/// - ordering operators coerce the cell value to a number in cell mode and
///   compare values of like type directly in row mode;
/// - `in` reads its list from `value` in cell mode and from `values` in row mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Cell,
    Row,
}

/// Evaluate one condition against one value.
pub(crate) fn match_condition(value: &Value, condition: &Condition, mode: Mode) -> MatchOutcome {
    let Some(operator) = &condition.operator else {
        return MatchOutcome::Skipped(SkipReason::MissingOperator);
    };
    if mode == Mode::Cell && condition.font_color.is_none() {
        return MatchOutcome::Skipped(SkipReason::MissingFontColor);
    }

    let result = match operator {
        Operator::Eq => Ok(equals(value, condition.value.as_ref())),
        Operator::Gte | Operator::Lte | Operator::Gt | Operator::Lt => match mode {
            Mode::Cell => numeric_order(value, operator, condition.value.as_ref()),
            Mode::Row => typed_order(value, operator, condition.value.as_ref()),
        },
        Operator::In => match mode {
            Mode::Cell => cell_membership(value, condition.value.as_ref()),
            Mode::Row => Ok(row_membership(value, condition.values.as_deref())),
        },
        Operator::Unknown(token) => Err(SkipReason::UnknownOperator(token.clone())),
    };

    match result {
        Ok(true) => MatchOutcome::Matched(condition.marker()),
        Ok(false) => MatchOutcome::Skipped(SkipReason::NoMatch),
        Err(reason) => MatchOutcome::Skipped(reason),
    }
}

/// An absent operand behaves like null, which only null equals.
fn equals(value: &Value, operand: Option<&Value>) -> bool {
    value.loose_eq(operand.unwrap_or(&Value::Null))
}

fn numeric_order(
    value: &Value,
    operator: &Operator,
    operand: Option<&Value>,
) -> Result<bool, SkipReason> {
    let number = value.leading_number().ok_or(SkipReason::NotNumeric)?;
    let threshold = operand
        .and_then(Value::to_number)
        .ok_or(SkipReason::ThresholdNotNumeric)?;
    Ok(number
        .partial_cmp(&threshold)
        .is_some_and(|ord| operator.accepts(ord)))
}

fn typed_order(
    value: &Value,
    operator: &Operator,
    operand: Option<&Value>,
) -> Result<bool, SkipReason> {
    let ord = operand
        .and_then(|operand| value.compare(operand))
        .ok_or(SkipReason::Incomparable)?;
    Ok(operator.accepts(ord))
}

fn cell_membership(value: &Value, operand: Option<&Value>) -> Result<bool, SkipReason> {
    match operand {
        Some(Value::List(items)) => Ok(items.iter().any(|item| item.same_value(value))),
        _ => Err(SkipReason::OperandNotList),
    }
}

/// A missing `values` list is an empty set.
fn row_membership(value: &Value, values: Option<&[Value]>) -> bool {
    values
        .unwrap_or_default()
        .iter()
        .any(|item| item.same_value(value))
}
