use criterion::{Criterion, black_box, criterion_group, criterion_main};

use conjugar::dataset::VerbSet;
use conjugar::engine::expand::{expand, stem_length};
use conjugar::engine::fold::fold_diacritics;

fn bench_expand(c: &mut Criterion) {
    let verbs = VerbSet::embedded().unwrap();
    let amar = verbs.get("amar").unwrap();

    c.bench_function("expand (amar)", |b| b.iter(|| expand(black_box(amar))));

    c.bench_function("expand (all bundled verbs)", |b| {
        b.iter(|| {
            for key in verbs.keys() {
                black_box(expand(verbs.get(key).unwrap()));
            }
        })
    });
}

fn bench_stem(c: &mut Criterion) {
    let verbs = VerbSet::embedded().unwrap();
    let amar = verbs.get("amar").unwrap();

    c.bench_function("stem_length (conditional)", |b| {
        b.iter(|| stem_length(black_box(&amar.indicative.present_conditional)))
    });

    c.bench_function("fold_diacritics", |b| {
        b.iter(|| fold_diacritics(black_box("amaríamos")))
    });
}

criterion_group!(benches, bench_expand, bench_stem);
criterion_main!(benches);
