// benches/render.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use spoke_table::config::options::{LayoutOptions, RowTemplate};
use spoke_table::grid::Grid;
use spoke_table::input::{parse_records, Record};

fn synthetic_records(n: usize) -> Vec<Record> {
    let text: String = (0..n)
        .map(|i| format!("{}-cross, variant {}\n", i % 9, i))
        .collect();
    parse_records(&text).expect("synthetic records parse")
}

fn bench_render(c: &mut Criterion) {
    let records = synthetic_records(10_000);

    c.bench_function("render_simple_7col", |b| {
        let layout = LayoutOptions { columns: 7, ..Default::default() };
        b.iter(|| {
            let grid = Grid::new(black_box(&records), &layout).unwrap();
            let lines = grid.lines().filter_map(|l| l.ok()).count();
            black_box(lines)
        })
    });

    c.bench_function("render_header_4col", |b| {
        let layout = LayoutOptions {
            columns: 4,
            template: RowTemplate::WithHeader,
            ..Default::default()
        };
        b.iter(|| {
            let grid = Grid::new(black_box(&records), &layout).unwrap();
            let mut buf = Vec::with_capacity(1 << 20);
            grid.render_to(&mut buf).unwrap();
            black_box(buf.len())
        })
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
