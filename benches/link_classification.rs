//! Benchmarks for link parsing and file name classification
//!
//! Measures the rule tables against names of varying shape.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use postforge::classify::{classify, classify_all};
use postforge::drive::{extract, RawEntry};

/// Name matching every category
const NAME_FULL: &str = "Moving.S01E01.1080p.WEB-DL.DDP5.1.H.264-GROUP.mkv";

/// Name matching only the quality rules
const NAME_PARTIAL: &str = "moving_episode_01_720P.mp4";

/// Name matching nothing (falls through every rule)
const NAME_NONE: &str = "holiday_video_final_version_2.mp4";

const LINKS: [(&str, &str); 4] = [
    ("file_path", "https://drive.google.com/file/d/1AbCdEfGhIjKlMnOpQrStUvWxYz012345/view?usp=sharing"),
    ("id_param", "https://drive.google.com/open?id=1AbCdEfGhIjKlMnOpQrStUvWxYz012345"),
    ("folder", "https://drive.google.com/drive/folders/1AbCdEfGhIjKlMnOpQrStUvWxYz012345"),
    ("unmatched", "https://example.com/some/other/link?ref=share"),
];

fn bench_classify_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_single");

    for (label, name) in [("full", NAME_FULL), ("partial", NAME_PARTIAL), ("none", NAME_NONE)] {
        let entry = RawEntry::new("1AbCdEfGh", name);
        group.throughput(Throughput::Bytes(name.len() as u64));
        group.bench_with_input(BenchmarkId::new("name", label), &entry, |b, entry| {
            b.iter(|| classify(black_box(entry)));
        });
    }

    group.finish();
}

fn bench_classify_folder(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_folder");

    for size in [1usize, 16, 100] {
        let entries: Vec<RawEntry> = (1..=size)
            .map(|i| RawEntry::new(format!("EP{i}"), format!("Moving.S01E{i:02}.1080p.WEB-DL.DDP5.1.mkv")))
            .collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("entries", size), &entries, |b, entries| {
            b.iter(|| classify_all(black_box(entries)));
        });
    }

    group.finish();
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    for (label, url) in LINKS {
        group.bench_with_input(BenchmarkId::new("link", label), &url, |b, url| {
            b.iter(|| extract(black_box(url)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_classify_single,
    bench_classify_folder,
    bench_extract
);
criterion_main!(benches);
