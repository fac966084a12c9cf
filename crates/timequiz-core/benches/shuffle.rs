use criterion::{black_box, criterion_group, criterion_main, Criterion};

use timequiz_core::model::{QuestionSet, SessionOutcome};
use timequiz_core::shuffle::Shuffler;
use timequiz_core::source::parse_question_source;

fn make_set(n: u32) -> QuestionSet {
    QuestionSet::from_pairs((1..=n).map(|i| (format!("{i}+{i}"), (i * 2).to_string()))).unwrap()
}

fn make_csv(n: u32) -> String {
    let mut s = String::from("question,answer\n");
    for i in 1..=n {
        s.push_str(&format!("{i}*3,{}\n", i * 3));
    }
    s
}

fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffle");

    for n in [10u32, 100, 1000] {
        let set = make_set(n);
        let mut shuffler = Shuffler::seeded(42);
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| shuffler.shuffled(black_box(&set)))
        });
    }

    group.finish();
}

fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring");
    let set = make_set(1000);

    group.bench_function("record_1000", |b| {
        b.iter(|| {
            let mut outcome = SessionOutcome::new(&set);
            for q in &set {
                outcome.record(q, Some(black_box(q.expected_answer().to_string())));
            }
            outcome.correct
        })
    });

    group.finish();
}

fn bench_csv_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv_parsing");

    for n in [10u32, 1000] {
        let csv = make_csv(n);
        group.bench_function(format!("rows={n}"), |b| {
            b.iter(|| parse_question_source(black_box(csv.as_bytes())).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_shuffle, bench_scoring, bench_csv_parsing);
criterion_main!(benches);
