use tinct::{
    apply_cell_styles, apply_row_styles, Condition, Record, Rule, StyledCell, Value,
};

fn record(pairs: &[(&str, Value)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), v.clone()))
        .collect()
}

fn plain(rows: &[Vec<Value>]) -> Vec<Vec<StyledCell>> {
    rows.iter()
        .map(|row| row.iter().cloned().map(StyledCell::Plain).collect())
        .collect()
}

fn qty_rules() -> Vec<Rule> {
    vec![Rule::color("qty").when(Condition::gte(1_i64).font_color("red"))]
}

#[test]
fn empty_table_returns_empty() {
    let data: Vec<Vec<Value>> = Vec::new();
    assert!(apply_cell_styles(&data, &qty_rules(), &["qty"]).is_empty());
}

#[test]
fn empty_records_return_empty() {
    assert!(apply_row_styles(&[], &qty_rules()).is_empty());
}

#[test]
fn empty_rules_leave_table_unchanged() {
    let data = vec![vec![Value::from("<b>10</b>"), Value::Int(10)]];
    let styled = apply_cell_styles(&data, &[], &["name", "qty"]);
    assert_eq!(styled, plain(&data));
}

#[test]
fn empty_rules_leave_records_without_style() {
    let items = vec![record(&[("qty", Value::Int(5))])];
    let styled = apply_row_styles(&items, &[]);
    assert_eq!(styled.len(), 1);
    assert_eq!(styled[0].fields, items[0]);
    assert!(styled[0].style.is_none());
}

#[test]
fn no_usable_rules_leave_table_unchanged() {
    let rules = vec![
        Rule::of_type("icon", "qty").when(Condition::gte(0_i64).font_color("red")),
        Rule::color("missing").when(Condition::gte(0_i64).font_color("red")),
    ];
    let data = vec![vec![Value::Int(5)]];
    assert_eq!(apply_cell_styles(&data, &rules, &["qty"]), plain(&data));
}

#[test]
fn empty_headers_match_nothing() {
    let data = vec![vec![Value::Int(5)]];
    let headers: [&str; 0] = [];
    assert_eq!(apply_cell_styles(&data, &qty_rules(), &headers), plain(&data));
}

#[test]
fn ragged_rows_keep_their_shape() {
    let data = vec![
        vec![Value::Int(1)],
        vec![],
        vec![Value::Int(0), Value::Int(3), Value::Int(4)],
    ];
    let styled = apply_cell_styles(&data, &qty_rules(), &["x", "qty"]);
    let shape: Vec<usize> = styled.iter().map(Vec::len).collect();
    assert_eq!(shape, vec![1, 0, 3]);
    assert!(styled[2][1].is_markup());
    assert_eq!(styled[2][2], StyledCell::Plain(Value::Int(4)));
}

#[test]
fn rule_without_conditions_never_matches() {
    let rules = vec![Rule::color("qty")];
    let data = vec![vec![Value::Int(5)]];
    assert_eq!(apply_cell_styles(&data, &rules, &["qty"]), plain(&data));
    let styled = apply_row_styles(&[record(&[("qty", Value::Int(5))])], &rules);
    assert!(styled[0].style.as_ref().unwrap().is_empty());
}

#[test]
fn nan_never_satisfies_ordering() {
    let rules = vec![Rule::color("x").when(Condition::gte(f64::NEG_INFINITY).font_color("red"))];
    let data = vec![vec![Value::Float(f64::NAN)]];
    assert_eq!(apply_cell_styles(&data, &rules, &["x"]), plain(&data));
}

#[test]
fn infinity_text_is_numeric() {
    let rules = vec![Rule::color("x").when(Condition::gt(1_000_000_i64).font_color("red"))];
    let data = vec![vec![Value::from("Infinity")]];
    let styled = apply_cell_styles(&data, &rules, &["x"]);
    assert!(styled[0][0].as_markup().unwrap().contains(">Infinity</span>"));
}

#[test]
fn float_cell_text_renders_shortest_form() {
    let rules = vec![Rule::color("x").when(Condition::gte(0_i64).font_color("red"))];
    let data = vec![vec![Value::Float(12.0), Value::Float(0.25)]];
    let styled = apply_cell_styles(&data, &rules, &["x", "x"]);
    assert!(styled[0][0].as_markup().unwrap().contains(">12</span>"));
    // Only the first header named "x" is a styled column.
    assert_eq!(styled[0][1], StyledCell::Plain(Value::Float(0.25)));
}

#[test]
fn empty_string_cell_equals_zero_loosely() {
    let rules = vec![Rule::color("x").when(Condition::eq(0_i64).font_color("red"))];
    let styled = apply_cell_styles(&[vec![Value::from("")]], &rules, &["x"]);
    assert!(styled[0][0].is_markup());
}

#[test]
fn unicode_headers_and_values() {
    let rules = vec![Rule::color("风险等级").when(Condition::eq("高").font_color("#f5222d"))];
    let data = vec![vec![Value::from("高")], vec![Value::from("低")]];
    let styled = apply_cell_styles(&data, &rules, &["风险等级"]);
    assert_eq!(
        styled[0][0].as_markup(),
        Some(r#"<span style="color: #f5222d; font-weight: bold;">高</span>"#)
    );
    assert_eq!(styled[1][0], StyledCell::Plain(Value::from("低")));
}

#[test]
fn inputs_are_not_mutated() {
    let rules = vec![
        Rule::color("qty").priority(1).when(Condition::gte(10_i64).font_color("red")),
        Rule::color("qty").priority(2).when(Condition::gte(5_i64).font_color("blue")),
    ];
    let rules_before = rules.clone();
    let data = vec![vec![Value::Int(12)]];
    let data_before = data.clone();
    let items = vec![record(&[("qty", Value::Int(12))])];
    let items_before = items.clone();

    let _ = apply_cell_styles(&data, &rules, &["qty"]);
    let _ = apply_row_styles(&items, &rules);

    assert_eq!(rules, rules_before);
    assert_eq!(data, data_before);
    assert_eq!(items, items_before);
}

#[test]
fn integers_beyond_float_precision_compare_exactly() {
    let big = 9_007_199_254_740_992_i64;
    let rules = vec![
        Rule::color("id").when(Condition::eq(big).font_color("red")),
        Rule::color("ref").when(Condition::one_of([big]).font_color("blue")),
    ];

    let data = vec![
        vec![Value::Int(big + 1), Value::Int(big + 1)],
        vec![Value::Int(big), Value::Int(big)],
    ];
    let styled = apply_cell_styles(&data, &rules, &["id", "ref"]);
    assert_eq!(styled[0], plain(&data)[0]);
    assert!(styled[1][0].is_markup());
    assert!(styled[1][1].is_markup());

    let items = vec![
        record(&[("ref", Value::Int(big + 1))]),
        record(&[("ref", Value::Int(big))]),
    ];
    let styled = apply_row_styles(&items, &rules);
    assert_eq!(styled[0].font_color(), None);
    assert_eq!(styled[1].font_color(), Some("blue"));
}

#[test]
fn fractional_priorities_order_between_integers() {
    let rules = vec![
        Rule::color("qty").priority(2).when(Condition::gte(0_i64).font_color("two")),
        Rule::color("qty").priority(1.5).when(Condition::gte(0_i64).font_color("one-half")),
        Rule::color("qty").priority(1).when(Condition::gte(0_i64).font_color("one")),
    ];

    let styled = apply_cell_styles(&[vec![Value::Int(3)]], &rules, &["qty"]);
    assert!(styled[0][0].as_markup().unwrap().contains("color: two;"));

    let rules: Vec<Rule> = rules.into_iter().skip(1).collect();
    let styled = apply_cell_styles(&[vec![Value::Int(3)]], &rules, &["qty"]);
    assert!(styled[0][0].as_markup().unwrap().contains("color: one-half;"));

    let styled = apply_row_styles(&[record(&[("qty", Value::Int(3))])], &rules);
    assert_eq!(styled[0].font_color(), Some("one"));
}

#[test]
fn extreme_floats_render_in_exponent_form() {
    let rules = vec![Rule::color("x").when(Condition::gte(0_i64).font_color("red"))];
    let data = vec![vec![Value::Float(1e21)], vec![Value::Float(1e-7)]];
    let styled = apply_cell_styles(&data, &rules, &["x"]);
    assert!(styled[0][0].as_markup().unwrap().contains(">1e+21</span>"));
    assert!(styled[1][0].as_markup().unwrap().contains(">1e-7</span>"));
}

#[test]
fn styled_records_keep_input_field_order() {
    let rules = vec![Rule::color("qty").when(Condition::gte(0_i64).font_color("red"))];
    let items = vec![record(&[
        ("zone", Value::from("n")),
        ("qty", Value::Int(1)),
        ("id", Value::Int(9)),
    ])];
    let styled = apply_row_styles(&items, &rules);
    let keys: Vec<&str> = styled[0].fields.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zone", "qty", "id"]);
    assert!(serde_json::to_string(&styled[0])
        .unwrap()
        .starts_with(r#"{"zone":"n","qty":1,"id":9,"style":"#));
}
