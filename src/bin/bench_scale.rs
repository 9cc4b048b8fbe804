#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::time::Instant;

use grid_life::{World, WorldConfig};

const SEED: u64 = 0x5EED_1234_ABCD_EF01;
const DENSITY: f64 = 0.20;

fn bench_world(
    width: u32,
    height: u32,
    threads: usize,
    iterations: u64,
) -> anyhow::Result<(f64, usize)> {
    let config = WorldConfig::new(width, height)
        .initial_alive_probability(DENSITY)
        .seed(SEED)
        .thread_count(threads);
    let mut world = World::with_config(&config)?;

    let start = Instant::now();
    for _ in 0..iterations {
        world.tick();
    }
    let duration = start.elapsed();

    let total_ms = duration.as_secs_f64() * 1000.0;
    Ok((total_ms, world.population()))
}

fn main() -> anyhow::Result<()> {
    let scales: &[(u32, u32, u64)] = &[
        (150, 40, 2000),  // driver default
        (256, 256, 500),  // above the parallel threshold
        (1024, 1024, 50),
        (2048, 2048, 20),
    ];
    let threads = std::thread::available_parallelism().map_or(1, |n| n.get());

    println!(
        "{:<12} {:>8} {:>8} {:>12} {:>10} {:>8}",
        "Grid", "Threads", "Iters", "Total(ms)", "Avg(ms)", "Pop"
    );
    println!("{}", "-".repeat(64));

    for &(width, height, iters) in scales {
        for t in [1, threads] {
            let (total_ms, pop) = bench_world(width, height, t, iters)?;
            let avg_ms = total_ms / iters as f64;
            println!(
                "{:<12} {:>8} {:>8} {:>12.1} {:>10.4} {:>8}",
                format!("{}x{}", width, height),
                t,
                iters,
                total_ms,
                avg_ms,
                pop
            );
        }
    }
    Ok(())
}
