use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use super::Value;

/// A data record in row mode: field name to value, in the order the fields
/// were inserted. Styled records serialize their fields in that order.
pub type Record = IndexMap<String, Value>;

/// The marker attached to a unit when a condition matches.
///
/// In row mode both parts are `None` when nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Style {
    pub font_color: Option<String>,
    pub style_token: Option<String>,
}

impl Style {
    #[must_use]
    pub fn new(font_color: Option<String>, style_token: Option<String>) -> Self {
        Self {
            font_color,
            style_token,
        }
    }

    /// A style with only a font color.
    #[must_use]
    pub fn color(font_color: &str) -> Self {
        Self::new(Some(font_color.to_owned()), None)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.font_color.is_none() && self.style_token.is_none()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = self.font_color.as_deref().unwrap_or("none");
        match &self.style_token {
            Some(token) => write!(f, "{color} [{token}]"),
            None => write!(f, "{color}"),
        }
    }
}

/// One output cell of the cell styler.
///
/// Serializes as the original JSON value when plain and as a string when it
/// carries markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyledCell {
    /// An unmatched cell, exactly as it came in.
    Plain(Value),
    /// A matched cell: a `<span>` wrapping the escaped cell text. Safe to
    /// render as raw markup; must not be escaped again.
    Markup(String),
}

impl StyledCell {
    #[must_use]
    pub fn is_markup(&self) -> bool {
        matches!(self, StyledCell::Markup(_))
    }

    #[must_use]
    pub fn as_markup(&self) -> Option<&str> {
        match self {
            StyledCell::Markup(markup) => Some(markup),
            StyledCell::Plain(_) => None,
        }
    }

    #[must_use]
    pub fn as_plain(&self) -> Option<&Value> {
        match self {
            StyledCell::Plain(value) => Some(value),
            StyledCell::Markup(_) => None,
        }
    }
}

impl From<Value> for StyledCell {
    fn from(value: Value) -> Self {
        StyledCell::Plain(value)
    }
}

/// One output record of the row styler: the input fields plus a style.
///
/// `style` is `None` only when the styler was given no rules at all, in which
/// case records come back untouched. A record field called `style` is
/// replaced by the descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledRecord {
    #[serde(flatten)]
    pub fields: Record,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

impl StyledRecord {
    pub(crate) fn unstyled(fields: Record) -> Self {
        Self {
            fields,
            style: None,
        }
    }

    pub(crate) fn styled(mut fields: Record, style: Style) -> Self {
        fields.shift_remove("style");
        Self {
            fields,
            style: Some(style),
        }
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    #[must_use]
    pub fn font_color(&self) -> Option<&str> {
        self.style.as_ref()?.font_color.as_deref()
    }

    #[must_use]
    pub fn style_token(&self) -> Option<&str> {
        self.style.as_ref()?.style_token.as_deref()
    }
}
