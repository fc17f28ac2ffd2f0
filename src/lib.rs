//! Conditional display rules for tables and records.
//!
//! A [`Rule`] targets one field and holds ordered [`Condition`]s, each pairing
//! a comparison with a font color (and optionally a style token). Two stylers
//! evaluate the same rules:
//!
//! - [`apply_cell_styles()`] rewrites matching table cells as escaped HTML
//!   `<span>` markup, trying higher priorities first;
//! - [`apply_row_styles()`] attaches a [`Style`] to every record, trying lower
//!   priorities first.
//!
//! Malformed rules, unknown columns and values that do not compare simply
//! leave data unstyled; styling never fails.

mod cell;
mod error;
mod index;
mod matcher;
mod parse;
mod row;
mod types;

pub use cell::{apply_cell_styles, explain_cell};
pub use error::TinctError;
pub use index::PriorityOrder;
pub use row::{apply_row_styles, explain_row, row_style};
pub use types::{
    Condition, Hit, MatchOutcome, Operator, Record, Rule, RuleConfig, RuleSet, RuleType, Skip,
    SkipReason, Style, StyleReport, StyledCell, StyledRecord, Value,
};
