//! Performance benchmarks for the Morse synthesis pipeline
//!
//! Run with: cargo bench
//! Or for specific benchmarks: cargo bench -- <filter>

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use morse_gateway::core::MorseSynthesizer;
use morse_gateway::core::audio::{WaveformRenderer, encode_wav};
use morse_gateway::core::morse::{Timing, encode};
use std::time::Duration;

fn sample_texts() -> Vec<(&'static str, String)> {
    vec![
        ("short", "SOS".to_string()),
        ("sentence", "CQ CQ DE MORSE GATEWAY K".to_string()),
        ("paragraph", "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG 0123456789. ".repeat(8)),
    ]
}

/// Benchmark text to segment encoding
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let timing = Timing::from_wpm(20.0);

    for (name, text) in sample_texts() {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new(name, text.len()), &text, |b, text| {
            b.iter(|| encode(black_box(text), &timing));
        });
    }

    group.finish();
}

/// Benchmark waveform rendering and WAV encoding separately
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.measurement_time(Duration::from_secs(5));
    let timing = Timing::from_wpm(20.0);
    let renderer = WaveformRenderer::new(44100, 600.0, 0.5);

    for (name, text) in sample_texts() {
        let Ok(segments) = encode(&text, &timing) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("pcm", name), &segments, |b, segments| {
            b.iter(|| renderer.render(black_box(segments)));
        });

        let Ok(samples) = renderer.render(&segments) else {
            continue;
        };
        group.throughput(Throughput::Elements(samples.len() as u64));
        group.bench_with_input(BenchmarkId::new("wav", name), &samples, |b, samples| {
            b.iter(|| encode_wav(black_box(samples), 44100));
        });
    }

    group.finish();
}

/// Benchmark the full request path: voice resolution, encode, render, WAV
fn bench_synthesize(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthesize");
    group.measurement_time(Duration::from_secs(5));
    let synthesizer = MorseSynthesizer::default();

    for (name, text) in sample_texts() {
        for voice in ["nova", "speedy"] {
            group.bench_with_input(
                BenchmarkId::new(format!("{name}/{voice}"), text.len()),
                &text,
                |b, text| {
                    b.iter(|| synthesizer.synthesize(black_box(text), voice, 1.0));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_render, bench_synthesize);

criterion_main!(benches);
