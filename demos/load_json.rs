use std::env;

use tinct::{explain_cell, RuleSet, TinctError, Value};

const RULES: &str = r##"[
    {"page_code": "situation", "table_code": "theftTraditional", "rule_name": "theft count",
     "rule_type": "color", "priority": 1,
     "rule_config": {"field": "count", "conditions": [
         {"operator": ">=", "value": 50, "font_color": "#f5222d"},
         {"operator": ">=", "value": 10, "font_color": "#faad14"}
     ]}},
    {"page_code": "situation", "table_code": "theftTraditional", "rule_name": "broken",
     "rule_type": "color", "priority": 2,
     "rule_config": {"field": "count", "conditions": [{"operator": "~", "value": 1, "font_color": "red"}]}}
]"##;

fn main() -> Result<(), TinctError> {
    // Rules come from the file given on the command line, or a built-in document.
    let all = match env::args().nth(1) {
        Some(path) => RuleSet::from_file(path)?,
        None => RuleSet::from_json(RULES)?,
    };
    let rules = all.for_page("situation", Some("theftTraditional"));
    println!("{rules}");

    let headers = ["region", "count"];
    let data = vec![
        vec![Value::from("north"), Value::Int(64)],
        vec![Value::from("south"), Value::Int(12)],
        vec![Value::from("east"), Value::Int(3)],
    ];
    for row in rules.style_cells(&data, &headers) {
        println!("{}", serde_json::to_string(&row)?);
    }

    let report = explain_cell(&Value::Int(12), "count", rules.rules());
    println!();
    println!("{report}");
    for skip in report.rule_problems() {
        println!("  rule #{}: {}", skip.rule_index, skip.reason);
    }
    Ok(())
}
