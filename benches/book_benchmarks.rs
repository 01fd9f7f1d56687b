//! Performance benchmarks for address book operations.
//!
//! These benchmarks measure:
//! - Inserting records, including replacement of existing names
//! - Walking the book in batches of different sizes
//! - Scanning for upcoming birthdays

use chrono::NaiveDate;
use contact_book::{AddressBook, Birthday, LeapDayPolicy, Name, Phone, Record};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Create a book with `size` contacts whose birthdays spread over the year.
fn create_test_book(size: usize) -> AddressBook {
    (0..size)
        .map(|i| {
            let birthday = NaiveDate::from_ymd_opt(1990, (i % 12) as u32 + 1, (i % 28) as u32 + 1)
                .unwrap();
            Record::new(Name::new(format!("Contact {}", i)).unwrap())
                .with_phone(Phone::from_number(format!("{:010}", i)).unwrap())
                .with_birthday(Birthday::new(birthday).unwrap())
        })
        .collect()
}

/// Benchmark inserting records into an empty book.
fn bench_add_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_records");

    for size in [100, 1_000, 10_000].iter() {
        let records: Vec<Record> = create_test_book(*size).into_iter().collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| {
                let book: AddressBook = records.iter().cloned().collect();
                black_box(book.len())
            });
        });
    }

    group.finish();
}

/// Benchmark walking the book in batches.
fn bench_batches(c: &mut Criterion) {
    let book = create_test_book(10_000);
    let mut group = c.benchmark_group("batches");

    for batch_size in [1, 16, 256].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            batch_size,
            |b, &batch_size| {
                b.iter(|| {
                    let total: usize = book
                        .batches(batch_size)
                        .unwrap()
                        .map(|batch| batch.len())
                        .sum();
                    black_box(total)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the upcoming-birthday scan.
fn bench_upcoming_birthdays(c: &mut Criterion) {
    let book = create_test_book(10_000);
    let today = NaiveDate::from_ymd_opt(2024, 8, 13).unwrap();

    c.bench_function("upcoming_birthdays_10k", |b| {
        b.iter(|| {
            let upcoming = book.upcoming_birthdays(black_box(today), 30, LeapDayPolicy::Mar1);
            black_box(upcoming.len())
        });
    });
}

criterion_group!(
    benches,
    bench_add_records,
    bench_batches,
    bench_upcoming_birthdays
);
criterion_main!(benches);
