use criterion::{Criterion, criterion_group, criterion_main};
use mathspan_engine::{BlockSource, InlineOutcome, LineBuffer, scan_block, scan_inline};

fn bench_inline(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanning");
    group.sample_size(10);

    let line = "text $a+b$ more \\$literal and $\\alpha^2$ tail ".repeat(200);
    group.bench_function("inline", |b| {
        b.iter(|| {
            let line = std::hint::black_box(line.as_str());
            let mut pos = 0;
            let mut spans = 0usize;
            while pos < line.len() {
                match scan_inline(line, pos) {
                    Some(m) => {
                        if matches!(m.outcome, InlineOutcome::Math(_)) {
                            spans += 1;
                        }
                        pos = m.end;
                    }
                    None => pos += 1,
                }
            }
            std::hint::black_box(spans);
        });
    });

    group.finish();
}

fn bench_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanning");
    group.sample_size(10);

    let mut doc = String::from("$$\n");
    for i in 0..500 {
        doc.push_str(&format!("x_{i} + y_{i} = z_{i}\n"));
    }
    doc.push_str("$$\n");
    let src = LineBuffer::new(&doc);

    group.bench_function("block", |b| {
        b.iter(|| {
            let span = scan_block(std::hint::black_box(&src), 0, src.line_count());
            std::hint::black_box(span);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_inline, bench_block);
criterion_main!(benches);
