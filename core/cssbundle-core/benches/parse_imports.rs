//! Criterion benchmark for the `@import` scanner

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cssbundle_core::scan_imports;

fn bench_scan_imports(c: &mut Criterion) {
    let mut sample = String::from("/* index */\n:root { --gap: 4px; }\n");
    for i in 0..200 {
        sample.push_str(&format!("@import \"components/part-{i}.css\";\n"));
    }

    c.bench_function("scan_imports 200 directives", |b| {
        b.iter(|| scan_imports(black_box(&sample)).len())
    });
}

criterion_group!(benches, bench_scan_imports);
criterion_main!(benches);
