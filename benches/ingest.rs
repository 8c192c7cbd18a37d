// benches/ingest.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ft_stats::{
    config::{consts::SAMPLE_BULLETIN, options::SortColumn},
    session::Session,
};

// A season's worth of lines, with a non-report heading every 20 lines.
fn bulletin(repeats: usize) -> String {
    let mut out = String::with_capacity(SAMPLE_BULLETIN.len() * repeats);
    for i in 0..repeats {
        if i % 10 == 0 {
            out.push_str(&format!("{} ТУР\n", i / 10 + 1));
        }
        out.push_str(SAMPLE_BULLETIN);
    }
    out
}

fn bench_ingest(c: &mut Criterion) {
    let text = bulletin(500);

    c.bench_function("ingest_1000_lines", |b| {
        b.iter(|| {
            let mut s = Session::default();
            let summary = s.ingest(black_box(&text));
            black_box(summary.records)
        })
    });

    let mut s = Session::default();
    s.ingest(&text);
    c.bench_function("sort_team_goals", |b| {
        b.iter(|| {
            let rows = s.sort(black_box("МЕТАЛЛИСТ"), SortColumn::Goals);
            black_box(rows.map(|r| r.len()))
        })
    });
}

criterion_group!(benches, bench_ingest);
criterion_main!(benches);
