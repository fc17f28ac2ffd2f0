mod condition;
mod lenient;
mod outcome;
mod report;
mod rule;
mod ruleset;
mod style;
mod value;

pub use condition::{Condition, Operator};
pub use outcome::{MatchOutcome, SkipReason};
pub use report::{Hit, Skip, StyleReport};
pub use rule::{Rule, RuleConfig, RuleType};
pub use ruleset::RuleSet;
pub use style::{Record, Style, StyledCell, StyledRecord};
pub use value::Value;
