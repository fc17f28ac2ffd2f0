use std::cmp::Ordering;
use std::collections::HashMap;

use log::trace;

use crate::{Rule, SkipReason};

/// Direction in which rule priorities are ranked.
///
/// The two styling modes rank priorities in opposite directions: the cell
/// styler tries the largest priority first, the row styler the smallest.
/// Ties keep the caller's order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityOrder {
    /// Larger priority numbers are tried first (cell mode).
    HighestFirst,
    /// Smaller priority numbers are tried first (row mode).
    LowestFirst,
}

impl PriorityOrder {
    pub(crate) const CELLS: PriorityOrder = PriorityOrder::HighestFirst;
    pub(crate) const ROWS: PriorityOrder = PriorityOrder::LowestFirst;

    /// Compare two rules; `Less` means `a` is tried before `b`.
    #[must_use]
    pub fn compare(self, a: &Rule, b: &Rule) -> Ordering {
        match self {
            PriorityOrder::HighestFirst => rank(b).total_cmp(&rank(a)),
            PriorityOrder::LowestFirst => rank(a).total_cmp(&rank(b)),
        }
    }
}

/// The rule's priority as a sort key. `-0.0` ties with `0.0`.
fn rank(rule: &Rule) -> f64 {
    rule.priority + 0.0
}

/// A rule borrowed from the caller's list, with its original position.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IndexedRule<'r> {
    pub(crate) position: usize,
    pub(crate) rule: &'r Rule,
}

/// Why a rule cannot take part in cell styling at all, regardless of data.
pub(crate) fn unusable(rule: &Rule) -> Option<SkipReason> {
    if !rule.is_color() {
        Some(SkipReason::NotColorRule)
    } else if !rule.enabled {
        Some(SkipReason::Disabled)
    } else if rule.field().is_none() {
        Some(SkipReason::MissingField)
    } else {
        None
    }
}

/// Cell-mode index: column position to the rules targeting it, highest
/// priority first.
#[derive(Debug, Default)]
pub(crate) struct ColumnIndex<'r> {
    columns: HashMap<usize, Vec<IndexedRule<'r>>>,
}

impl<'r> ColumnIndex<'r> {
    /// Resolve every usable rule's field against `headers` and group by column.
    ///
    /// `on_drop` receives each rule left out of the index and the reason.
    pub(crate) fn build<H: AsRef<str>>(
        rules: &'r [Rule],
        headers: &[H],
        mut on_drop: impl FnMut(usize, SkipReason),
    ) -> Self {
        let mut columns: HashMap<usize, Vec<IndexedRule<'r>>> = HashMap::new();

        for (position, rule) in rules.iter().enumerate() {
            if let Some(reason) = unusable(rule) {
                trace!("rule #{position} left out of cell index: {reason}");
                on_drop(position, reason);
                continue;
            }
            let Some(field) = rule.field() else {
                continue;
            };
            let Some(column) = headers.iter().position(|h| h.as_ref() == field) else {
                let reason = SkipReason::UnknownColumn(field.to_owned());
                trace!("rule #{position} left out of cell index: {reason}");
                on_drop(position, reason);
                continue;
            };
            columns
                .entry(column)
                .or_default()
                .push(IndexedRule { position, rule });
        }

        for bucket in columns.values_mut() {
            bucket.sort_by(|a, b| PriorityOrder::CELLS.compare(a.rule, b.rule));
        }

        Self { columns }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub(crate) fn rules_for(&self, column: usize) -> Option<&[IndexedRule<'r>]> {
        self.columns.get(&column).map(Vec::as_slice)
    }
}

/// Row-mode ordering: every rule, lowest priority first. Nothing is filtered
/// here; the row scan skips rules it cannot use.
pub(crate) fn order_rows(rules: &[Rule]) -> Vec<IndexedRule<'_>> {
    let mut ordered: Vec<IndexedRule<'_>> = rules
        .iter()
        .enumerate()
        .map(|(position, rule)| IndexedRule { position, rule })
        .collect();
    ordered.sort_by(|a, b| PriorityOrder::ROWS.compare(a.rule, b.rule));
    ordered
}
