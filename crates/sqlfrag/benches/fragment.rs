use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlfrag::prelude::*;

fn columns(n: usize) -> Vec<Fragment> {
    (0..n)
        .map(|i| Fragment::ident(format!("col{i}")).unwrap())
        .collect()
}

/// select col0, col1, ... from t where col0 = ? and col1 = ? ...
fn build_select(cols: &[Fragment]) -> Fragment {
    let conditions = cols
        .iter()
        .enumerate()
        .map(|(i, c)| syntax::eq(c, i as i64));
    syntax::select(cols.iter().cloned())
        .from_table(Fragment::ident("t").unwrap())
        .where_clause(syntax::join_with_and(conditions))
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("fragment/render");

    for n in [1, 5, 10, 50, 100] {
        let frag = build_select(&columns(n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &frag, |b, frag| {
            b.iter(|| black_box(frag.to_statement().unwrap()));
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("fragment/build_and_render");

    for n in [1, 5, 10, 50, 100] {
        let cols = columns(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &cols, |b, cols| {
            b.iter(|| black_box(build_select(cols).to_statement().unwrap()));
        });
    }

    group.finish();
}

fn bench_in_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("fragment/in_list");
    let id = Fragment::ident("id").unwrap();

    for n in [5, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let f = lit("select * from t")
                    .unwrap()
                    .where_clause(syntax::in_list(&id, values.iter().copied()));
                black_box(f.to_statement().unwrap());
            });
        });
    }

    group.finish();
}

fn bench_optional_conditions(c: &mut Criterion) {
    let mut group = c.benchmark_group("fragment/optional_conditions");

    for n in [1, 5, 10, 50] {
        let cols = columns(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &cols, |b, cols| {
            b.iter(|| {
                // Every other filter is absent.
                let conditions = cols
                    .iter()
                    .enumerate()
                    .map(|(i, c)| (i % 2 == 0).then(|| syntax::ge(c, i as i64)));
                let f = lit("select * from t")
                    .unwrap()
                    .where_opt(syntax::to_and_condition_opt(conditions));
                black_box(f.to_statement().unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render,
    bench_build_and_render,
    bench_in_list,
    bench_optional_conditions
);
criterion_main!(benches);
