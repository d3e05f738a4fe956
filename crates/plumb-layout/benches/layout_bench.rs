//! Benchmarks for full layout passes.
//!
//! Run with: cargo bench -p plumb-layout

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use plumb_layout::{
    ConstraintLayout, ElementId, Intrinsic, MeasureSpec, Point, RelativeAxisSolver, SizeMode,
};
use std::hint::black_box;

// =============================================================================
// Fixtures
// =============================================================================

/// A row where every element starts where its predecessor ends.
fn chain(len: usize, rtl: bool) -> ConstraintLayout {
    let mut layout = ConstraintLayout::new().padding(2).rtl(rtl);
    for index in 0..len {
        let x = if index == 0 {
            RelativeAxisSolver::horizontal(Point::Start, |ctx| ctx.geometry().start())
        } else {
            let previous = ElementId::new(index - 1);
            RelativeAxisSolver::horizontal(Point::Start, move |ctx| ctx.element(previous)?.end())
        };
        layout.add(
            x,
            RelativeAxisSolver::vertical(Point::Start, |ctx| ctx.geometry().top()),
            Intrinsic::new(3 + (index % 5) as i32, 1),
        );
    }
    layout
}

/// Every element stretched between the container edges and stacked below its
/// predecessor.
fn column(len: usize) -> ConstraintLayout {
    let mut layout = ConstraintLayout::new();
    for index in 0..len {
        let y = if index == 0 {
            RelativeAxisSolver::vertical(Point::Start, |ctx| ctx.geometry().top())
        } else {
            let previous = ElementId::new(index - 1);
            RelativeAxisSolver::vertical(Point::Start, move |ctx| ctx.element(previous)?.bottom())
        };
        layout.add(
            RelativeAxisSolver::horizontal(Point::Start, |ctx| ctx.geometry().start())
                .end_to(SizeMode::Exact, |ctx| ctx.geometry().end()),
            y,
            Intrinsic::new(10, 2),
        );
    }
    layout
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/chain");

    for len in [8, 64, 256] {
        group.throughput(Throughput::Elements(len as u64));
        for (label, rtl) in [("ltr", false), ("rtl", true)] {
            let mut layout = chain(len, rtl);
            group.bench_with_input(BenchmarkId::new(label, len), &len, |b, _| {
                b.iter(|| {
                    black_box(
                        layout
                            .layout(MeasureSpec::exact(4_000), MeasureSpec::exact(40))
                            .expect("chain resolves"),
                    )
                })
            });
        }
    }

    group.finish();
}

fn bench_column(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/column");

    for len in [8, 64, 256] {
        group.throughput(Throughput::Elements(len as u64));
        let mut layout = column(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| {
                black_box(
                    layout
                        .layout(MeasureSpec::exact(120), MeasureSpec::exact(1_000))
                        .expect("column resolves"),
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_chain, bench_column);
criterion_main!(benches);
