//! Benchmark – deep lookups with `jsonview::View` against parsing the whole
//! document with `serde_json`.
#![allow(missing_docs)]

use std::fmt::Write;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use jsonview::{View, path};

/// Produce a deterministic document of `records` objects, each with a few
/// scalar members and a small nested array, wrapped as `{"records": [...]}`.
fn make_json_payload(records: usize) -> String {
    let mut s = String::from("{\"records\": [");
    for i in 0..records {
        if i > 0 {
            s.push(',');
        }
        write!(
            s,
            "{{\"id\": {i}, \"name\": \"record {i}, \\\"quoted\\\"\", \"score\": {}.5, \"tags\": [\"a\", \"b\", {{\"deep\": {i}}}]}}",
            i % 100
        )
        .expect("writing to a String cannot fail");
    }
    s.push_str("]}");
    s
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("last_record_deep_lookup");
    for records in [10usize, 100, 1_000] {
        let payload = make_json_payload(records);
        let last = records - 1;

        group.bench_with_input(BenchmarkId::new("jsonview", records), &payload, |b, p| {
            b.iter(|| {
                let doc = View::from(black_box(p.as_str()));
                doc.pointer(&path!["records", last, "tags", 2, "deep"]).integer()
            });
        });

        group.bench_with_input(BenchmarkId::new("serde_json", records), &payload, |b, p| {
            b.iter(|| {
                let doc: serde_json::Value =
                    serde_json::from_str(black_box(p.as_str())).expect("valid JSON");
                doc["records"][last]["tags"][2]["deep"].as_i64().unwrap_or_default()
            });
        });
    }
    group.finish();
}

fn bench_iterate(c: &mut Criterion) {
    let payload = make_json_payload(1_000);
    c.bench_function("sum_scores_1000", |b| {
        b.iter(|| {
            View::from(black_box(payload.as_str()))
                .at("records")
                .iter()
                .map(|r| r.at("score").float())
                .sum::<f64>()
        });
    });
}

criterion_group!(benches, bench_lookup, bench_iterate);
criterion_main!(benches);
