//! Generation and analysis throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ithkuil::affix::Affix;
use ithkuil::category::{Case, MoodCaseScope};
use ithkuil::{analyze_word, generate_formative, normalize, Formative, GenerationOptions};

fn sample() -> Formative {
    Formative::from_root("kl")
        .with_slot_v(Affix::plain("rs", 1))
        .with_slot_vii(Affix::plain("ks", 2))
        .with_cn(MoodCaseScope::AsmCcs)
        .with_case(Case::Locative)
}

fn bench_generate(c: &mut Criterion) {
    let formative = sample();
    let options = GenerationOptions::new();
    c.bench_function("generate_formative", |b| {
        b.iter(|| generate_formative(black_box(&formative), black_box(&options)))
    });
}

fn bench_analyze(c: &mut Criterion) {
    let word = generate_formative(&sample(), &GenerationOptions::new()).unwrap_or_default();
    c.bench_function("analyze_word_formative", |b| b.iter(|| analyze_word(black_box(&word))));
    c.bench_function("analyze_word_referential", |b| b.iter(|| analyze_word(black_box("li'awolļ"))));
    c.bench_function("analyze_word_no_match", |b| b.iter(|| analyze_word(black_box("qqq123"))));
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize", |b| b.iter(|| normalize(black_box("Wa'kla'rsäksá"))));
}

criterion_group!(benches, bench_generate, bench_analyze, bench_normalize);
criterion_main!(benches);
