//! Preview layout benchmarks.
//!
//! Both layout functions are linear in thread length; these keep an eye on
//! constant factors for long threads with scattered mentions.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dprev::model::{Mention, Message, MessageId, UserId};
use dprev::preview::{get_preview_layout, get_search_preview_layout};

const THREAD_LENGTH: usize = 10_000;
const AUTHORS: usize = 50;

/// Long thread where every 97th reply mentions the viewer.
fn generate_thread() -> (Vec<Message>, Vec<Mention>) {
    let messages: Vec<Message> = (0..THREAD_LENGTH)
        .map(|i| {
            Message::new(
                MessageId::new(format!("msg-{:06}", i)).expect("valid message id"),
                UserId::new(format!("user-{}", i % AUTHORS)).expect("valid user id"),
                format!("Reply {} about the weekend plans and where to eat", i),
            )
        })
        .collect();

    let mentions: Vec<Mention> = messages
        .iter()
        .step_by(97)
        .map(|m| Mention::new(m.id().clone(), UserId::new("viewer").expect("valid user id")))
        .collect();

    (messages, mentions)
}

fn benchmark_preview(c: &mut Criterion) {
    let (messages, mentions) = generate_thread();
    let no_mentions: Vec<Mention> = Vec::new();

    c.bench_function("preview_10k_with_mentions", |b| {
        b.iter(|| get_preview_layout(black_box(&messages), black_box(&mentions)))
    });

    c.bench_function("preview_10k_no_mentions", |b| {
        b.iter(|| get_preview_layout(black_box(&messages), black_box(no_mentions.as_slice())))
    });

    c.bench_function("search_preview_10k_rare_term", |b| {
        b.iter(|| get_search_preview_layout(black_box(&messages), black_box("Reply 5000 ")))
    });

    c.bench_function("search_preview_10k_no_match", |b| {
        b.iter(|| get_search_preview_layout(black_box(&messages), black_box("XYZNONEXISTENT")))
    });
}

criterion_group!(benches, benchmark_preview);
criterion_main!(benches);
