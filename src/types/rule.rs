use std::fmt;

use serde::Deserialize;

use super::condition::Condition;
use super::lenient;

/// The kind of a display rule. Only [`RuleType::Color`] is evaluated; other
/// kinds are carried along and ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum RuleType {
    Color,
    Other(String),
    #[default]
    Unspecified,
}

impl From<String> for RuleType {
    fn from(tag: String) -> Self {
        if tag == "color" {
            RuleType::Color
        } else {
            RuleType::Other(tag)
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleType::Color => write!(f, "color"),
            RuleType::Other(tag) => write!(f, "{tag}"),
            RuleType::Unspecified => write!(f, "unspecified"),
        }
    }
}

/// The target field and the ordered conditions of a rule.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RuleConfig {
    #[serde(default, deserialize_with = "lenient::text")]
    pub field: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub conditions: Vec<Condition>,
}

/// A declarative display rule.
///
/// Mirrors a display-rule record: `rule_type`, `rule_config` (field and
/// conditions) and `priority`, plus descriptive metadata used to select the
/// rules of a page. Every part is optional when deserializing; malformed
/// parts are treated as absent.
///
/// # Example
///
/// ```
/// use tinct::{Condition, Rule};
///
/// let rule = Rule::color("days_remaining")
///     .priority(1)
///     .when(Condition::lte(3_i64).font_color("#f5222d"))
///     .when(Condition::lte(7_i64).font_color("#faad14"));
///
/// assert_eq!(rule.field(), Some("days_remaining"));
/// assert_eq!(rule.conditions().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rule {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub rule_type: RuleType,
    #[serde(
        default,
        rename = "rule_config",
        deserialize_with = "lenient::optional"
    )]
    pub config: Option<RuleConfig>,
    /// Any JSON number, fractions included. Unset or non-numeric priority
    /// ranks as 0.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub priority: f64,
    #[serde(
        default = "enabled_by_default",
        rename = "is_enabled",
        deserialize_with = "lenient::flag"
    )]
    pub enabled: bool,
    #[serde(default, rename = "rule_name", deserialize_with = "lenient::optional")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub page_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub table_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub description: Option<String>,
}

fn enabled_by_default() -> bool {
    true
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            rule_type: RuleType::Unspecified,
            config: None,
            priority: 0.0,
            enabled: true,
            name: None,
            page_code: None,
            table_code: None,
            description: None,
        }
    }
}

impl Rule {
    /// Start a color rule targeting `field`.
    #[must_use]
    pub fn color(field: &str) -> Self {
        Self {
            rule_type: RuleType::Color,
            config: Some(RuleConfig {
                field: Some(field.to_owned()).filter(|f| !f.is_empty()),
                conditions: Vec::new(),
            }),
            ..Self::default()
        }
    }

    /// Start a rule of some other kind. It is never evaluated.
    #[must_use]
    pub fn of_type(tag: &str, field: &str) -> Self {
        Self {
            rule_type: RuleType::from(tag.to_owned()),
            ..Self::color(field)
        }
    }

    #[must_use]
    pub fn priority(mut self, priority: impl Into<f64>) -> Self {
        self.priority = priority.into();
        self
    }

    /// Append a condition. Conditions are tried in the order they are added.
    #[must_use]
    pub fn when(mut self, condition: Condition) -> Self {
        self.config
            .get_or_insert_with(RuleConfig::default)
            .conditions
            .push(condition);
        self
    }

    #[must_use]
    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_owned());
        self
    }

    /// Scope the rule to a page and, optionally, one table on it.
    #[must_use]
    pub fn on_page(mut self, page_code: &str, table_code: Option<&str>) -> Self {
        self.page_code = Some(page_code.to_owned());
        self.table_code = table_code.map(str::to_owned);
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn is_color(&self) -> bool {
        self.rule_type == RuleType::Color
    }

    /// The targeted field, if the rule names a non-empty one.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.config.as_ref()?.field.as_deref()
    }

    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        self.config
            .as_ref()
            .map(|config| config.conditions.as_slice())
            .unwrap_or_default()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rule '{}' on {} (priority {}, {} conditions)",
            self.rule_type,
            self.name.as_deref().unwrap_or("unnamed"),
            self.field().unwrap_or("?"),
            self.priority,
            self.conditions().len(),
        )
    }
}
