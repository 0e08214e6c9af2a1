// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the upload submission path.
//!
//! Measures the performance of:
//! - The guard decision alone
//! - File size formatting
//! - A full file selection + submission through a mounted page

use criterion::{criterion_group, criterion_main, Criterion};
use green_classify::config::Config;
use green_classify::domain::upload::{evaluate, SelectedFile, UploadAttempt, ValidationPolicy};
use green_classify::format_file_size;
use green_classify::i18n::I18n;
use green_classify::ui::page::{Page, PageLayout, Trigger};
use std::hint::black_box;

fn bench_guard(c: &mut Criterion) {
    let mut group = c.benchmark_group("upload_guard");
    let policy = ValidationPolicy::default();
    let accepted = UploadAttempt::with_file(SelectedFile::new("a.png", "image/png", 2_000_000));
    let rejected = UploadAttempt::with_file(SelectedFile::new("a.bmp", "image/bmp", 2_000_000));

    group.bench_function("evaluate_accepted", |b| {
        b.iter(|| black_box(evaluate(black_box(&accepted), &policy)));
    });
    group.bench_function("evaluate_rejected", |b| {
        b.iter(|| black_box(evaluate(black_box(&rejected), &policy)));
    });
    group.bench_function("format_file_size", |b| {
        b.iter(|| black_box(format_file_size(black_box(11_010_048))));
    });

    group.finish();
}

fn bench_page_submission(c: &mut Criterion) {
    let mut group = c.benchmark_group("page");
    let config = Config::default();
    let i18n = I18n::new(Some("en-US".to_string()), &config);

    group.bench_function("select_and_submit", |b| {
        b.iter(|| {
            let (mut page, _) = Page::mount(PageLayout::classifier(), &config, &i18n);
            page.dispatch(Trigger::FileChanged(Some(SelectedFile::new(
                "bean.jpg",
                "image/jpeg",
                2_000_000,
            ))));
            black_box(page.dispatch(Trigger::Submit));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_guard, bench_page_submission);
criterion_main!(benches);
