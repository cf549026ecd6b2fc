//! ringq - benchmark & demo runner
//!
//! Mengukur latency push/pop/peek pada RingQueue, di atas buffer heap
//! atau file mmap.
//!
//! Usage:
//!   cargo run --release -- --capacity 65536 --record-size 8
//!   cargo run --release -- --variable --mmap ringq_bench.dat

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ringq::{MmapStorage, QueueConfig, RingQueue};

/// Benchmark configuration
#[derive(Debug, Parser)]
#[command(name = "ringq", about = "Byte ring queue benchmark")]
struct BenchConfig {
    /// Kapasitas queue dalam bytes
    #[arg(long, default_value_t = 64 * 1024)]
    capacity: usize,

    /// Ukuran record dalam bytes
    #[arg(long, default_value_t = 8)]
    record_size: usize,

    /// Jumlah operasi per benchmark
    #[arg(long, default_value_t = 1_000_000)]
    iterations: usize,

    /// Ukuran record per-call (mode variable)
    #[arg(long)]
    variable: bool,

    /// Pakai file mmap sebagai storage
    #[arg(long)]
    mmap: Option<PathBuf>,
}

impl BenchConfig {
    fn queue_config(&self) -> QueueConfig {
        if self.variable {
            QueueConfig::variable(self.capacity)
        } else {
            QueueConfig::fixed(self.capacity, self.record_size)
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = BenchConfig::parse();
    if config.record_size == 0 || config.record_size > config.capacity {
        bail!(
            "record size {} must be in 1..={}",
            config.record_size,
            config.capacity
        );
    }

    println!("🚀 ringq - Byte Ring Queue Benchmark");
    println!("====================================\n");

    match &config.mmap {
        Some(path) => {
            let mut storage = MmapStorage::open(path, config.capacity)
                .with_context(|| format!("failed to open {}", path.display()))?;
            let mut queue = storage.attach(config.queue_config())?;
            info!(path = %path.display(), stored = queue.len(), "mmap storage attached");
            queue.clear();

            run_benchmarks(&mut queue, &config)?;

            let cursors = queue.cursors();
            storage.store_cursors(cursors)?;
            storage.flush()?;
        }
        None => {
            let mut buf = vec![0u8; config.capacity];
            let mut queue = RingQueue::init(&mut buf, config.queue_config())?;
            run_benchmarks(&mut queue, &config)?;
        }
    }

    println!("\n✅ All benchmarks complete!");
    Ok(())
}

fn run_benchmarks(queue: &mut RingQueue<'_>, config: &BenchConfig) -> Result<()> {
    println!("📊 Ring Queue ({:?})", queue.mode());
    println!("-----------------------------------------");

    let iterations = config.iterations;
    let record = vec![0xA5u8; config.record_size];
    let mut out = vec![0u8; config.record_size];

    // Warm up
    for _ in 0..1000 {
        if queue.push(&record).is_err() {
            break;
        }
    }
    queue.clear();

    // Benchmark push, kuras saat penuh
    let start = Instant::now();
    for _ in 0..iterations {
        if queue.push(&record).is_err() {
            queue.pop(&mut out)?;
            queue.push(&record)?;
        }
    }
    let push_duration = start.elapsed();

    // Benchmark peek
    let start = Instant::now();
    for _ in 0..iterations {
        queue.peek(&mut out)?;
    }
    let peek_duration = start.elapsed();

    // Benchmark pop, isi ulang saat kosong
    let start = Instant::now();
    for _ in 0..iterations {
        if queue.pop(&mut out).is_err() {
            queue.push(&record)?;
            queue.pop(&mut out)?;
        }
    }
    let pop_duration = start.elapsed();

    if out != record {
        bail!("popped record does not match pushed record");
    }

    report("Push", push_duration.as_nanos(), iterations);
    report("Peek", peek_duration.as_nanos(), iterations);
    report("Pop ", pop_duration.as_nanos(), iterations);

    println!(
        "  Throughput:   {:.2} MB/sec",
        (iterations * config.record_size) as f64 / push_duration.as_secs_f64() / 1_000_000.0
    );

    Ok(())
}

fn report(label: &str, total_ns: u128, iterations: usize) {
    let ns = total_ns as f64 / iterations as f64;
    println!(
        "  {} latency: {:.2} ns/op ({:.3} μs/op)",
        label,
        ns,
        ns / 1000.0
    );
}
