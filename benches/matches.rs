use std::iter::repeat_with;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mdbsarg::{Column, ColumnType, Field, SargBuilder, SargEngine, Table, TextEncoding};

struct Row {
    id: [u8; 4],
    name: Vec<u8>,
}

fn rows(count: usize) -> Vec<Row> {
    (0..count)
        .map(|_| Row {
            id: fastrand::i32(0..10_000).to_le_bytes(),
            name: repeat_with(fastrand::alphanumeric)
                .take(32)
                .collect::<String>()
                .into_bytes(),
        })
        .collect()
}

fn table() -> Table {
    let id = Column::new(0, "id", ColumnType::LongInt);
    let name = Column::new(1, "name", ColumnType::Text);
    let tree = SargBuilder::and()
        .greater_than_or_equal(&id, 1_000)
        .less_than(&id, 9_000)
        .or_group(|group| group.like(&name, "a%").greater_than(&name, "m"))
        .build()
        .expect("valid tree");
    Table::new("bench", vec![id, name], TextEncoding::Narrow).with_sarg_tree(tree)
}

fn bench_matches(c: &mut Criterion) {
    let table = table();
    let engine = SargEngine::default();
    let mut group = c.benchmark_group("matches");

    for count in [1_000usize, 10_000] {
        let rows = rows(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &rows, |b, rows| {
            b.iter(|| {
                rows.iter()
                    .filter(|row| {
                        let fields = [Field::new(1, &row.name), Field::new(0, &row.id)];
                        engine
                            .matches(&table, black_box(&fields))
                            .expect("row evaluates")
                    })
                    .count()
            })
        });
    }
    group.finish();
}

fn bench_indexable_sargs(c: &mut Criterion) {
    let table = table();
    c.bench_function("indexable_sargs", |b| {
        b.iter(|| black_box(table.indexable_sargs()))
    });
}

criterion_group!(benches, bench_matches, bench_indexable_sargs);
criterion_main!(benches);
