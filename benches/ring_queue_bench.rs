//! Criterion benchmark untuk RingQueue
//!
//! Run dengan: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use ringq::{QueueConfig, RingQueue};

const CAPACITY: usize = 64 * 1024;

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_queue");
    group.throughput(Throughput::Bytes(8));

    // Benchmark push
    group.bench_function("push", |b| {
        let mut buf = vec![0u8; CAPACITY];
        let mut q = RingQueue::new(&mut buf, 8).unwrap();
        let mut out = [0u8; 8];
        let mut i = 0u64;
        b.iter(|| {
            if q.push(black_box(&i.to_ne_bytes())).is_err() {
                q.pop(&mut out).unwrap();
                q.push(black_box(&i.to_ne_bytes())).unwrap();
            }
            i = i.wrapping_add(1);
        });
    });

    // Benchmark pop
    group.bench_function("pop", |b| {
        let mut buf = vec![0u8; CAPACITY];
        let mut q = RingQueue::new(&mut buf, 8).unwrap();
        // Pre-fill setengah
        for i in 0..(CAPACITY / 16) as u64 {
            q.push(&i.to_ne_bytes()).unwrap();
        }
        let mut out = [0u8; 8];
        b.iter(|| {
            q.pop(&mut out).unwrap();
            q.push(black_box(&out)).unwrap();
        });
    });

    // Benchmark peek
    group.bench_function("peek", |b| {
        let mut buf = vec![0u8; CAPACITY];
        let mut q = RingQueue::new(&mut buf, 8).unwrap();
        q.push(&42u64.to_ne_bytes()).unwrap();
        let mut out = [0u8; 8];
        b.iter(|| {
            q.peek(black_box(&mut out)).unwrap();
        });
    });

    group.finish();
}

fn bench_variable_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("variable_records");

    for record_len in [1usize, 16, 256].iter() {
        group.throughput(Throughput::Bytes(*record_len as u64));
        group.bench_function(format!("push_pop_{}", record_len), |b| {
            let mut buf = vec![0u8; CAPACITY];
            let mut q = RingQueue::init(&mut buf, QueueConfig::variable(CAPACITY)).unwrap();
            let record = vec![0x5Au8; *record_len];
            let mut out = vec![0u8; *record_len];
            b.iter(|| {
                q.push(black_box(&record)).unwrap();
                q.pop(black_box(&mut out)).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_variable_records);
criterion_main!(benches);
