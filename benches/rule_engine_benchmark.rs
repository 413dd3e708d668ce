//! Benchmark for rule compilation, evaluation, and combination

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rule_engine_core::parser::{clear_cache, get_or_parse};
use rule_engine_core::{combine_rules, create_rule, evaluate_rule, DataRecord, Scalar};

/// Representative rules from simple to nested
const RULES: [&str; 5] = [
    "age >= 18",
    "age >= 18 AND salary > 30000",
    "age >= 18 AND (salary > 30000 OR spend < 500)",
    "NOT (department = 'HR' AND salary < 40000)",
    "(age < 30 AND salary < 50000) OR (department = 'Engineering' AND experience > 3)",
];

fn sample_record() -> DataRecord {
    let mut record = DataRecord::new();
    record.insert("age".to_string(), Scalar::from(29));
    record.insert("salary".to_string(), Scalar::from(40000));
    record.insert("spend".to_string(), Scalar::from(300));
    record.insert("experience".to_string(), Scalar::from(4));
    record.insert("department".to_string(), Scalar::from("Engineering"));
    record
}

fn benchmark_rule_compilation(c: &mut Criterion) {
    c.bench_function("rule_compilation_cold", |b| {
        b.iter(|| {
            for rule in &RULES {
                let _ = black_box(create_rule(rule));
            }
        })
    });

    c.bench_function("rule_compilation_cached", |b| {
        // Warm up cache
        for rule in &RULES {
            let _ = get_or_parse(rule);
        }

        b.iter(|| {
            for rule in &RULES {
                let _ = black_box(get_or_parse(rule));
            }
        })
    });

    c.bench_function("rule_compilation_cache_miss", |b| {
        b.iter(|| {
            clear_cache();
            for rule in &RULES {
                let _ = black_box(get_or_parse(rule));
            }
        })
    });
}

fn benchmark_evaluation(c: &mut Criterion) {
    let asts: Vec<_> = RULES.iter().map(|r| create_rule(r).unwrap()).collect();
    let record = sample_record();

    c.bench_function("rule_evaluation", |b| {
        b.iter(|| {
            for ast in &asts {
                let _ = black_box(evaluate_rule(black_box(ast), black_box(&record)));
            }
        })
    });
}

fn benchmark_combination(c: &mut Criterion) {
    let asts: Vec<_> = RULES.iter().map(|r| create_rule(r).unwrap()).collect();

    c.bench_function("rule_combination", |b| {
        b.iter(|| {
            let combined = combine_rules(black_box(&asts)).unwrap();
            black_box(combined)
        })
    });
}

criterion_group!(
    benches,
    benchmark_rule_compilation,
    benchmark_evaluation,
    benchmark_combination
);
criterion_main!(benches);
