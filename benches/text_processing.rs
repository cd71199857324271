//! Benchmarks for text processing utilities.
//!
//! These benchmarks measure regex and formatting performance for the text
//! processing operations used on every frame.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use regex::Regex;

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

fn bench_email_regex_compile(c: &mut Criterion) {
    c.bench_function("regex_compile_email_pattern", |b| {
        b.iter(|| Regex::new(black_box(EMAIL_PATTERN)))
    });
}

fn bench_email_regex_match(c: &mut Criterion) {
    let re = Regex::new(EMAIL_PATTERN).unwrap();
    c.bench_function("regex_match_email", |b| {
        b.iter(|| re.is_match(black_box("patient@example.com")))
    });
}

fn bench_group_thousands(c: &mut Criterion) {
    c.bench_function("group_thousands_format", |b| {
        b.iter(|| {
            let mut digits: Vec<char> = black_box(1_234_567_u64).to_string().chars().collect();
            let mut index = digits.len() as isize - 3;
            while index > 0 {
                digits.insert(index as usize, ',');
                index -= 3;
            }
            digits.into_iter().collect::<String>()
        })
    });
}

criterion_group!(
    benches,
    bench_email_regex_compile,
    bench_email_regex_match,
    bench_group_thousands
);
criterion_main!(benches);
