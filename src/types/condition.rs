use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer};

use super::lenient;
use super::style::Style;
use super::Value;

/// Comparison operators a condition may use.
///
/// Unrecognized operator strings are kept as [`Operator::Unknown`]; such
/// conditions never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operator {
    /// `==` or `eq`: loose equality.
    Eq,
    Gte,
    Lte,
    Gt,
    Lt,
    /// Set membership.
    In,
    Unknown(String),
}

impl Operator {
    /// Parse an operator token. Never fails.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "==" | "eq" => Operator::Eq,
            ">=" => Operator::Gte,
            "<=" => Operator::Lte,
            ">" => Operator::Gt,
            "<" => Operator::Lt,
            "in" => Operator::In,
            other => Operator::Unknown(other.to_owned()),
        }
    }

    /// Whether an ordering between the data value and the operand satisfies
    /// this operator. Always `false` for non-ordering operators.
    #[must_use]
    pub fn accepts(&self, ord: Ordering) -> bool {
        match self {
            Operator::Gte => ord != Ordering::Less,
            Operator::Lte => ord != Ordering::Greater,
            Operator::Gt => ord == Ordering::Greater,
            Operator::Lt => ord == Ordering::Less,
            Operator::Eq | Operator::In | Operator::Unknown(_) => false,
        }
    }

    #[must_use]
    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            Operator::Gte | Operator::Lte | Operator::Gt | Operator::Lt
        )
    }
}

impl From<String> for Operator {
    fn from(token: String) -> Self {
        Operator::from_token(&token)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Eq => write!(f, "=="),
            Operator::Gte => write!(f, ">="),
            Operator::Lte => write!(f, "<="),
            Operator::Gt => write!(f, ">"),
            Operator::Lt => write!(f, "<"),
            Operator::In => write!(f, "in"),
            Operator::Unknown(token) => write!(f, "{token}"),
        }
    }
}

/// One comparison and the marker it yields when satisfied.
///
/// All parts are optional; a condition without an operator is skipped, and in
/// cell mode so is one without a font color. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Condition {
    #[serde(default, deserialize_with = "operator_token")]
    pub operator: Option<Operator>,
    /// Operand of ordering and equality operators, and the membership list of
    /// `in` in cell mode.
    #[serde(default, deserialize_with = "lenient::optional")]
    pub value: Option<Value>,
    /// Membership list of `in` in row mode.
    #[serde(default, deserialize_with = "lenient::optional")]
    pub values: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub font_color: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub style_token: Option<String>,
}

fn operator_token<'de, D>(deserializer: D) -> Result<Option<Operator>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient::text(deserializer)?.map(Operator::from))
}

impl Condition {
    #[must_use]
    pub fn new(operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            operator: Some(operator),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn eq(value: impl Into<Value>) -> Self {
        Self::new(Operator::Eq, value)
    }

    #[must_use]
    pub fn gte(value: impl Into<Value>) -> Self {
        Self::new(Operator::Gte, value)
    }

    #[must_use]
    pub fn lte(value: impl Into<Value>) -> Self {
        Self::new(Operator::Lte, value)
    }

    #[must_use]
    pub fn gt(value: impl Into<Value>) -> Self {
        Self::new(Operator::Gt, value)
    }

    #[must_use]
    pub fn lt(value: impl Into<Value>) -> Self {
        Self::new(Operator::Lt, value)
    }

    /// Membership in `items`. The list is stored both as `value` and as
    /// `values`, so the condition works in cell and row mode alike.
    #[must_use]
    pub fn one_of<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        let items: Vec<Value> = items.into_iter().map(Into::into).collect();
        Self {
            operator: Some(Operator::In),
            value: Some(Value::List(items.clone())),
            values: Some(items),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn font_color(mut self, color: &str) -> Self {
        self.font_color = Some(color.to_owned()).filter(|c| !c.is_empty());
        self
    }

    #[must_use]
    pub fn style_token(mut self, token: &str) -> Self {
        self.style_token = Some(token.to_owned());
        self
    }

    /// The marker this condition attaches when it matches.
    pub fn marker(&self) -> Style {
        Style::new(self.font_color.clone(), self.style_token.clone())
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.operator {
            Some(op) => write!(f, "{op}")?,
            None => write!(f, "?")?,
        }
        match (&self.operator, &self.value, &self.values) {
            (Some(Operator::In), _, Some(values)) => write!(f, " {}", Value::List(values.clone()))?,
            (_, Some(value), _) => write!(f, " {value}")?,
            _ => {}
        }
        if let Some(color) = &self.font_color {
            write!(f, " -> {color}")?;
        }
        Ok(())
    }
}
