//! Criterion benchmarks for faqbot.
//!
//! Covers the hot paths of answering a message:
//! - Text analysis and keyword extraction
//! - Best-match selection over knowledge bases of growing size
//! - Intent classification

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use faqbot::analysis::analyzer::{Analyzer, StandardAnalyzer};
use faqbot::intent::{IntentClassifier, PatternIntentClassifier};
use faqbot::matcher::{FaqTrainer, MatchConfig};
use faqbot::storage::MemoryStore;
use std::hint::black_box;

const WORDS: &[&str] = &[
    "account", "password", "reset", "billing", "invoice", "refund", "shipping", "order",
    "delivery", "address", "email", "login", "profile", "settings", "privacy", "support",
    "hours", "office", "location", "contact", "phone", "payment", "card", "subscription",
    "cancel", "upgrade", "plan", "trial", "export", "import",
];

/// Generate questions for benchmarking.
fn generate_questions(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let length = 3 + (i % 6);
            let words: Vec<&str> = (0..length)
                .map(|j| WORDS[(i * 7 + j * 13) % WORDS.len()]) // Pseudo-random distribution
                .collect();
            format!("How do I {}?", words.join(" "))
        })
        .collect()
}

fn trainer_with(count: usize) -> FaqTrainer {
    let mut trainer =
        FaqTrainer::new(Box::new(MemoryStore::new()), MatchConfig::default()).unwrap();
    for (i, question) in generate_questions(count).iter().enumerate() {
        trainer.train(question, &format!("Answer {i}"));
    }
    trainer
}

/// Benchmark text analysis.
fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");

    let analyzer = StandardAnalyzer::new().unwrap();
    let questions = generate_questions(100);

    group.bench_function("tokenize_single", |b| {
        b.iter(|| black_box(analyzer.tokenize(black_box(&questions[0]))))
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("extract_keywords_batch", |b| {
        b.iter(|| {
            for question in &questions {
                black_box(analyzer.extract_keywords(black_box(question)));
            }
        })
    });

    group.finish();
}

/// Benchmark best-match selection.
fn bench_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("matching");

    for size in [10, 100, 1000] {
        let mut trainer = trainer_with(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("find_best_match", size), &size, |b, _| {
            b.iter(|| black_box(trainer.find_best_match(black_box("how can i reset my password"))))
        });
    }

    group.finish();
}

/// Benchmark intent classification.
fn bench_intent(c: &mut Criterion) {
    let classifier = PatternIntentClassifier::new().unwrap();
    let inputs = ["hello there", "what is this", "thanks a lot", "the sky is blue"];

    c.bench_function("intent_predict", |b| {
        b.iter(|| {
            for input in inputs {
                black_box(classifier.predict(black_box(input)));
            }
        })
    });
}

criterion_group!(benches, bench_text_analysis, bench_matching, bench_intent);
criterion_main!(benches);
