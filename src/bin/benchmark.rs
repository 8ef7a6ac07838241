//! Performance benchmark comparing tick strategies

use std::time::Instant;

use life_universe::{Strategy, Universe, UniverseError};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn benchmark_strategy(
    size: u32,
    strategy: Strategy,
    iterations: u32,
) -> Result<f64, UniverseError> {
    let mut universe = Universe::random(size, size, 0.3, 0xC0FFEE)?;
    universe.set_strategy(strategy);

    let start = Instant::now();
    for _ in 0..iterations {
        universe.tick();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> Result<(), UniverseError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Game of Life tick benchmark");

    let sizes = [64, 256, 512, 1024, 2048];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark_strategy(size, Strategy::Serial, iterations)?;
        let parallel_ms = benchmark_strategy(size, Strategy::Parallel, iterations)?;

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let size = 2048u64;
    let cells = size * size;
    let auto_ms = benchmark_strategy(size as u32, Strategy::Auto, iterations)?;
    info!(
        ms_per_gen = auto_ms,
        mcells_per_sec = cells as f64 / (auto_ms / 1000.0) / 1_000_000.0,
        "Auto strategy throughput at 2048x2048"
    );

    Ok(())
}
