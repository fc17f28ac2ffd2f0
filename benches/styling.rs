use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tinct::{Condition, Record, Rule, RuleSet, Value};

const COLUMNS: usize = 10;

/// Build `n` color rules spread over `COLUMNS` columns, each with three
/// threshold conditions.
fn build_rules(n: usize) -> RuleSet {
    (0..n)
        .map(|i| {
            Rule::color(&format!("c{}", i % COLUMNS))
                .priority((i % 7) as i32)
                .when(Condition::gte(90_i64).font_color("#f5222d"))
                .when(Condition::gte(70_i64).font_color("#faad14"))
                .when(Condition::one_of(["n/a", "unknown"]).font_color("#8c8c8c"))
        })
        .collect()
}

fn headers() -> Vec<String> {
    (0..COLUMNS).map(|i| format!("c{i}")).collect()
}

fn build_table(rows: usize) -> Vec<Vec<Value>> {
    (0..rows)
        .map(|r| {
            (0..COLUMNS)
                .map(|c| match (r + c) % 4 {
                    0 => Value::Int(((r * 7 + c * 13) % 100) as i64),
                    1 => Value::from(format!("{} units", (r + c) % 100)),
                    2 => Value::from("n/a"),
                    _ => Value::Float(((r * c) % 100) as f64 + 0.5),
                })
                .collect()
        })
        .collect()
}

fn build_records(rows: usize) -> Vec<Record> {
    let headers = headers();
    build_table(rows)
        .into_iter()
        .map(|row| headers.iter().cloned().zip(row).collect())
        .collect()
}

fn bench_cells(c: &mut Criterion) {
    let mut group = c.benchmark_group("style_cells");
    let headers = headers();

    for &n in &[5, 20, 50] {
        let rules = build_rules(n);
        let table = build_table(1_000);
        group.bench_function(&format!("{n}_rules_1000_rows"), |b| {
            b.iter(|| rules.style_cells(black_box(&table), &headers));
        });
    }

    group.finish();
}

fn bench_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("style_rows");

    for &n in &[5, 20, 50] {
        let rules = build_rules(n);
        let records = build_records(1_000);
        group.bench_function(&format!("{n}_rules_1000_records"), |b| {
            b.iter(|| rules.style_rows(black_box(&records)));
        });
    }

    group.finish();
}

fn bench_loading(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_json");

    for &n in &[5, 50] {
        let entries: Vec<String> = (0..n)
            .map(|i| {
                format!(
                    r##"{{"page_code": "p", "rule_type": "color", "priority": {p},
                        "rule_config": {{"field": "c{col}", "conditions": [
                            {{"operator": ">=", "value": 90, "font_color": "#f5222d"}},
                            {{"operator": "in", "value": ["n/a"], "values": ["n/a"], "font_color": "#8c8c8c"}}
                        ]}}}}"##,
                    p = i % 7,
                    col = i % COLUMNS,
                )
            })
            .collect();
        let document = format!("[{}]", entries.join(","));

        group.bench_function(&format!("{n}_rules"), |b| {
            b.iter(|| RuleSet::from_json(black_box(&document)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cells, bench_rows, bench_loading);
criterion_main!(benches);
