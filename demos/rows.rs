use tinct::{apply_row_styles, explain_row, Condition, Record, Rule, Value};

fn main() {
    // In row mode the smallest priority number is tried first.
    let rules = vec![
        Rule::color("days_remaining")
            .priority(0)
            .named("overdue")
            .when(Condition::lte(0_i64).font_color("#a8071a").style_token("overdue")),
        Rule::color("days_remaining")
            .priority(1)
            .named("due soon")
            .when(Condition::lte(3_i64).font_color("#f5222d"))
            .when(Condition::lte(7_i64).font_color("#faad14")),
        Rule::color("risk_level")
            .priority(2)
            .when(Condition::eq("high").style_token("danger")),
    ];

    let items: Vec<Record> = [
        (1, Value::Int(-2), "low"),
        (2, Value::Int(5), "low"),
        (3, Value::Null, "high"),
        (4, Value::Int(30), "low"),
    ]
    .into_iter()
    .map(|(id, days, risk)| -> Record {
        [
            ("id".to_owned(), Value::Int(id)),
            ("days_remaining".to_owned(), days),
            ("risk_level".to_owned(), Value::from(risk)),
        ]
        .into()
    })
    .collect();

    for styled in apply_row_styles(&items, &rules) {
        let id = styled.get("id").map(ToString::to_string).unwrap_or_default();
        match &styled.style {
            Some(style) if !style.is_empty() => println!("record {id}: {style}"),
            _ => println!("record {id}: unstyled"),
        }
    }

    println!();
    println!("{}", explain_row(&items[2], &rules));
}
