// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use yail::{Count, cycles, duplicate, indices, pad, sliding_window_filled, subrange_stepped};

const SIZES: [usize; 3] = [64, 1_024, 16_384];

fn bench_repetition(c: &mut Criterion) {
    let mut group = c.benchmark_group("repetition");
    for &len in &SIZES {
        let data: Vec<u64> = (0..len as u64).collect();
        group.throughput(Throughput::Elements((len * 4) as u64));

        group.bench_with_input(BenchmarkId::new("cycles", len), &data, |b, data| {
            b.iter(|| cycles(black_box(data.iter()), 4).sum::<u64>())
        });
        group.bench_with_input(BenchmarkId::new("cycles_unbounded", len), &data, |b, data| {
            b.iter(|| {
                cycles(black_box(data.iter()), Count::Unbounded)
                    .take(len * 4)
                    .sum::<u64>()
            })
        });
        group.bench_with_input(BenchmarkId::new("duplicate", len), &data, |b, data| {
            b.iter(|| duplicate(black_box(data.iter()), 4).sum::<u64>())
        });
    }
    group.finish();
}

fn bench_padding_and_windows(c: &mut Criterion) {
    let mut group = c.benchmark_group("padding_and_windows");
    for &len in &SIZES {
        let data: Vec<u64> = (0..len as u64).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("pad", len), &data, |b, data| {
            b.iter(|| pad(black_box(data.iter().copied()), 8, 8, 0).sum::<u64>())
        });
        for n in [2_usize, 8] {
            group.bench_with_input(
                BenchmarkId::new(format!("sliding_window_filled_{n}"), len),
                &data,
                |b, data| {
                    b.iter(|| {
                        sliding_window_filled(black_box(data.iter().copied()), n, true, true, 0)
                            .map(|w| w[0])
                            .sum::<u64>()
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_index_and_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_and_range");
    for &side in &[8_usize, 32, 128] {
        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_with_input(BenchmarkId::new("indices_2d", side), &side, |b, &side| {
            b.iter(|| indices![black_box(side), side].map(|ix| ix[0] + ix[1]).sum::<usize>())
        });
        group.bench_with_input(BenchmarkId::new("subrange", side), &side, |b, &side| {
            let stop = (side * side) as i64;
            b.iter(|| {
                subrange_stepped(0, black_box(stop), side as i64, 1)
                    .map(|r| r.len())
                    .sum::<usize>()
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_repetition,
    bench_padding_and_windows,
    bench_index_and_range
);
criterion_main!(benches);
