//! Benchmarks for resumekit import and generation.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic templates built from palette defaults.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use resumekit::parser::parse_many;
use resumekit::{
    generate_html, parse_html, BuilderTemplate, Element, ElementType, ParseOptions, TemplateType,
};

/// Creates a template with `repeat` copies of every built-in element type.
fn create_template(repeat: usize, template_type: TemplateType) -> BuilderTemplate {
    let elements = (0..repeat)
        .flat_map(|_| ElementType::BUILTIN.iter().cloned().map(Element::new))
        .collect();
    BuilderTemplate::new("Benchmark", template_type).with_elements(elements)
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_html");

    for repeat in [1, 10, 50] {
        let template = create_template(repeat, TemplateType::TwoColumn);
        group.bench_function(format!("{}_elements", template.len()), |b| {
            b.iter(|| generate_html(black_box(&template)))
        });
    }

    group.finish();
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_html");

    for repeat in [1, 10, 50] {
        let template = create_template(repeat, TemplateType::Single);
        let html = generate_html(&template);
        group.bench_function(format!("{}_elements", template.len()), |b| {
            b.iter(|| parse_html(black_box(&html)))
        });
    }

    group.finish();
}

fn bench_batch_parsing(c: &mut Criterion) {
    let documents: Vec<String> = (0..16)
        .map(|_| generate_html(&create_template(5, TemplateType::TwoColumn)))
        .collect();

    let mut group = c.benchmark_group("parse_many");
    group.bench_function("parallel", |b| {
        b.iter(|| parse_many(black_box(&documents), &ParseOptions::new()))
    });
    group.bench_function("sequential", |b| {
        b.iter(|| parse_many(black_box(&documents), &ParseOptions::new().sequential()))
    });
    group.finish();
}

criterion_group!(benches, bench_generation, bench_parsing, bench_batch_parsing);
criterion_main!(benches);
