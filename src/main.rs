#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::io::{self, Write};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use grid_life::grid::{DEFAULT_ALIVE_PROBABILITY, World, WorldConfig};
use grid_life::stats::{TimingStats, status_line};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;

const CLEAR_SCREEN: &str = "\x1B[H\x1B[2J";

/// Conway's Game of Life on a bounded grid, rendered to the terminal.
#[derive(Debug, Parser)]
#[command(name = "grid-life")]
struct Args {
    /// Grid width in cells.
    #[arg(long, default_value_t = 150)]
    width: u32,
    /// Grid height in cells.
    #[arg(long, default_value_t = 40)]
    height: u32,
    /// Chance that each cell starts alive.
    #[arg(long, default_value_t = DEFAULT_ALIVE_PROBABILITY)]
    probability: f64,
    /// Seed for the initial state; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Threads for computing next states.
    #[arg(long)]
    threads: Option<usize>,
    /// Stop after this many ticks instead of running forever.
    #[arg(long)]
    ticks: Option<u64>,
    /// Only print status lines. Also enabled by the MINIMAL env var.
    #[arg(long)]
    minimal: bool,
}

impl Args {
    fn world_config(&self) -> WorldConfig {
        let mut config =
            WorldConfig::new(self.width, self.height).initial_alive_probability(self.probability);
        if let Some(seed) = self.seed {
            config = config.seed(seed);
        }
        if let Some(threads) = self.threads {
            config = config.thread_count(threads);
        }
        config
    }
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("grid_life=info"))?;
    tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .with(filter),
    )?;
    Ok(())
}

fn run(args: &Args, minimal: bool) -> anyhow::Result<()> {
    let config = args.world_config();
    let mut world = World::with_config(&config)
        .with_context(|| format!("failed to build {}x{} world", args.width, args.height))?;
    info!(
        width = world.width(),
        height = world.height(),
        population = world.population(),
        minimal,
        "starting simulation"
    );

    let mut out = io::stdout().lock();
    if !minimal {
        write!(out, "{}", world.render())?;
    }

    let mut tick_stats = TimingStats::new();
    let mut render_stats = TimingStats::new();

    while args.ticks.is_none_or(|limit| world.generation() < limit) {
        let start = Instant::now();
        world.tick();
        tick_stats.record(start.elapsed());

        let start = Instant::now();
        let rendered = world.render();
        render_stats.record(start.elapsed());

        if !minimal {
            write!(out, "{CLEAR_SCREEN}")?;
        }
        writeln!(
            out,
            "{}",
            status_line(world.generation(), &tick_stats, &render_stats)
        )?;
        if !minimal {
            write!(out, "{rendered}")?;
        }
        out.flush()?;
    }

    info!(
        generation = world.generation(),
        population = world.population(),
        "simulation finished"
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let args = Args::parse();
    let minimal = args.minimal || std::env::var_os("MINIMAL").is_some();
    run(&args, minimal)
}
