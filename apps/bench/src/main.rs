//! Times the cyclic-buffer strategies on the same append/peek workload.

mod config;

use std::hint::black_box;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use cyclic_buffer::{BoundedFifo, BufferConfig, Strategy};
use tracing_subscriber::EnvFilter;

use crate::config::BenchConfig;

const STRATEGIES: [Strategy; 2] = [Strategy::Array, Strategy::Deque];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = BenchConfig::load(path.as_deref())?;
    tracing::info!(
        capacity = config.capacity,
        iterations = config.iterations,
        peek_every = config.peek_every,
        runs = config.runs,
        "starting benchmark"
    );

    for strategy in STRATEGIES {
        let mean = mean_run_time(&config, strategy)?;
        tracing::info!(?strategy, mean_secs = mean.as_secs_f64(), "mean time per run");
    }
    Ok(())
}

/// Average wall time of `config.runs` runs, each on a freshly built buffer.
fn mean_run_time(config: &BenchConfig, strategy: Strategy) -> anyhow::Result<Duration> {
    let buffer_config = BufferConfig {
        capacity: config.capacity,
        strategy,
    };
    let mut total = Duration::ZERO;
    for _ in 0..config.runs {
        let start = Instant::now();
        let mut fifo = buffer_config.build::<u64>()?;
        run_workload(fifo.as_mut(), config.iterations, config.peek_every)?;
        total += start.elapsed();
    }
    Ok(total / config.runs)
}

/// Append `0..iterations`, peeking both ends every `peek_every` appends.
fn run_workload(
    fifo: &mut dyn BoundedFifo<u64>,
    iterations: u64,
    peek_every: u64,
) -> cyclic_buffer::Result<()> {
    for i in 0..iterations {
        fifo.append(i);
        if i % peek_every == 0 {
            black_box(fifo.peek_newest()?);
            black_box(fifo.peek_oldest()?);
        }
    }
    Ok(())
}
