use tinct::{apply_cell_styles, Condition, Rule, StyledCell, Value};

fn main() {
    // Two rules on the same column. In cell mode the larger priority number
    // is tried first, so the broader blue rule shadows the red one.
    let rules = vec![
        Rule::color("qty")
            .priority(1)
            .named("restock soon")
            .when(Condition::gte(10_i64).font_color("red")),
        Rule::color("qty")
            .priority(2)
            .named("in stock")
            .when(Condition::gte(5_i64).font_color("blue")),
        Rule::color("grade").when(Condition::one_of(["A", "B"]).font_color("#52c41a")),
    ];

    let headers = ["item", "qty", "grade"];
    let data = vec![
        vec![Value::from("bolts"), Value::Int(12), Value::from("A")],
        vec![Value::from("nuts"), Value::from("7 boxes"), Value::from("C")],
        vec![Value::from("<washers>"), Value::Int(2), Value::Null],
    ];

    for row in apply_cell_styles(&data, &rules, &headers) {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                StyledCell::Markup(markup) => markup.clone(),
                StyledCell::Plain(value) => value.to_string(),
            })
            .collect();
        println!("{}", cells.join(" | "));
    }
}
