//! Benchmarks for resize storms and plan building.
//!
//! Run with: cargo bench -p sform-layout

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sform_layout::{FieldDescriptor, LayoutController, RenderPlan, SearchFormConfig};
use std::hint::black_box;

fn form(n: usize) -> LayoutController {
    let mut c = LayoutController::new(SearchFormConfig::default()).unwrap();
    c.on_fields_changed((0..n).map(|i| FieldDescriptor::labeled(format!("查询条件 {i}"))));
    c
}

fn bench_resize_storm(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/resize_storm");

    for n in [4usize, 16, 64] {
        let mut controller = form(n);
        group.bench_with_input(BenchmarkId::new("drag", n), &n, |b, _| {
            b.iter(|| {
                for w in (300..1600).step_by(7) {
                    controller.on_resize(black_box(f64::from(w)));
                }
                black_box(controller.drain_events());
            })
        });
    }

    group.finish();
}

fn bench_fields_changed(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/fields_changed");

    for n in [4usize, 16, 64] {
        let fields: Vec<_> = (0..n)
            .map(|i| FieldDescriptor::labeled(format!("Field label {i}")))
            .collect();
        let mut controller = form(0);
        group.bench_with_input(BenchmarkId::new("relabel", n), &fields, |b, fields| {
            b.iter(|| {
                controller.on_fields_changed(fields.iter().cloned());
                black_box(controller.state().label_width_em);
            })
        });
    }

    group.finish();
}

fn bench_render_plan(c: &mut Criterion) {
    let mut controller = form(32);
    controller.on_resize(1000.0);
    c.bench_function("layout/render_plan", |b| {
        b.iter(|| black_box(RenderPlan::build(&controller)))
    });
}

criterion_group!(
    benches,
    bench_resize_storm,
    bench_fields_changed,
    bench_render_plan
);
criterion_main!(benches);
