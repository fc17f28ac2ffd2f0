use std::fmt;
use std::io::Read;
use std::path::Path;

use log::debug;

use super::rule::Rule;
use super::style::{Record, Style, StyledCell, StyledRecord};
use super::value::Value;
use crate::{PriorityOrder, TinctError};

/// An owned collection of display rules, typically loaded from configuration.
///
/// Immutable once built and safe to share behind `Arc`; every styling call
/// indexes the rules afresh and leaves them untouched.
///
/// # Example
///
/// ```
/// use tinct::{RuleSet, StyledCell, Value};
///
/// let rules = RuleSet::from_json(r##"[{
///     "rule_type": "color",
///     "rule_config": {
///         "field": "count",
///         "conditions": [{"operator": ">=", "value": 10, "font_color": "#ff0000"}]
///     },
///     "priority": 1
/// }]"##)
/// .unwrap();
///
/// let data = vec![vec![Value::from("A"), Value::Int(10)], vec![Value::from("B"), Value::Int(5)]];
/// let styled = rules.style_cells(&data, &["site", "count"]);
///
/// assert_eq!(
///     styled[0][1],
///     StyledCell::Markup(r#"<span style="color: #ff0000; font-weight: bold;">10</span>"#.into())
/// );
/// assert_eq!(styled[1][1], StyledCell::Plain(Value::Int(5)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    #[must_use]
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Parse a JSON array of display-rule objects.
    ///
    /// Entries that are not objects are dropped; malformed parts of an entry
    /// are treated as absent (see [`Rule`]).
    ///
    /// # Errors
    ///
    /// Returns [`TinctError::Json`] if the input is not a JSON array.
    pub fn from_json(input: &str) -> Result<Self, TinctError> {
        let entries: Vec<serde_json::Value> = serde_json::from_str(input)?;
        Ok(Self::from_entries(entries))
    }

    /// Read a JSON rule document from `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`TinctError`] on I/O failure or if the input is not a JSON array.
    pub fn from_reader(reader: impl Read) -> Result<Self, TinctError> {
        let entries: Vec<serde_json::Value> = serde_json::from_reader(reader)?;
        Ok(Self::from_entries(entries))
    }

    /// Read a JSON rule document from a file.
    ///
    /// # Errors
    ///
    /// Returns [`TinctError`] on I/O failure or if the file is not a JSON array.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TinctError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_json(&input)
    }

    fn from_entries(entries: Vec<serde_json::Value>) -> Self {
        let total = entries.len();
        let rules: Vec<Rule> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(i, entry)| match serde_json::from_value(entry) {
                Ok(rule) => Some(rule),
                Err(err) => {
                    debug!("dropping display rule #{i}: {err}");
                    None
                }
            })
            .collect();
        debug!("loaded {} of {total} display rules", rules.len());
        Self { rules }
    }

    /// The enabled rules of one page, lowest priority first.
    ///
    /// With `table_code` set, only rules scoped to that table are kept;
    /// without it, every rule of the page is.
    #[must_use]
    pub fn for_page(&self, page_code: &str, table_code: Option<&str>) -> RuleSet {
        let mut rules: Vec<Rule> = self
            .rules
            .iter()
            .filter(|rule| rule.enabled && rule.page_code.as_deref() == Some(page_code))
            .filter(|rule| table_code.map_or(true, |t| rule.table_code.as_deref() == Some(t)))
            .cloned()
            .collect();
        rules.sort_by(|a, b| PriorityOrder::LowestFirst.compare(a, b));
        RuleSet { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Style the cells of a table. See [`apply_cell_styles()`](crate::apply_cell_styles).
    #[must_use]
    pub fn style_cells<H: AsRef<str>>(
        &self,
        data: &[Vec<Value>],
        headers: &[H],
    ) -> Vec<Vec<StyledCell>> {
        crate::cell::apply_cell_styles(data, &self.rules, headers)
    }

    /// Style a list of records. See [`apply_row_styles()`](crate::apply_row_styles).
    #[must_use]
    pub fn style_rows(&self, items: &[Record]) -> Vec<StyledRecord> {
        crate::row::apply_row_styles(items, &self.rules)
    }

    /// The style of a single record. See [`row_style()`](crate::row_style).
    #[must_use]
    pub fn style_of(&self, record: &Record) -> Style {
        crate::row::row_style(record, &self.rules)
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self::new(rules)
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RuleSet({} rules, {} color)",
            self.rules.len(),
            self.rules.iter().filter(|r| r.is_color()).count(),
        )
    }
}
