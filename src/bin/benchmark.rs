//! Step throughput and heuristic statistics for the LED matrix engine

use std::time::Instant;
use rayon::prelude::*;
use led_life::domain::{Heuristic, LifeEngine, presets};

/// Average microseconds per step for a single engine
fn benchmark_steps(iterations: u32) -> f64 {
    let mut engine = LifeEngine::with_seed(1);
    engine.reset(&presets::STARTUP_GLIDERS);

    let start = Instant::now();
    for _ in 0..iterations {
        engine.step();
    }
    start.elapsed().as_secs_f64() * 1_000_000.0 / iterations as f64
}

#[derive(Default, Clone, Copy)]
struct RunStats {
    reseeds: u64,
    expansions: u64,
    live_total: u64,
}

impl RunStats {
    fn merge(self, other: Self) -> Self {
        Self {
            reseeds: self.reseeds + other.reseeds,
            expansions: self.expansions + other.expansions,
            live_total: self.live_total + other.live_total,
        }
    }
}

/// Run one seeded engine from the startup gliders and tally its heuristics
fn soak(seed: u64, ticks: u32) -> RunStats {
    let mut engine = LifeEngine::with_seed(seed);
    engine.reset(&presets::STARTUP_GLIDERS);

    (0..ticks).fold(RunStats::default(), |mut stats, _| {
        let report = engine.step();
        match report.heuristic {
            Some(Heuristic::Reseeded { .. }) => stats.reseeds += 1,
            Some(Heuristic::ExpansionArmed) => stats.expansions += 1,
            None => {}
        }
        stats.live_total += report.live as u64;
        stats
    })
}

fn main() {
    println!("=== LED Life Benchmark ===\n");

    for iterations in [1_000, 10_000, 100_000] {
        let us = benchmark_steps(iterations);
        println!("{:>8} steps: {:>8.3} us/step ({:.0} steps/sec)", iterations, us, 1_000_000.0 / us);
    }

    println!("\n=== Heuristics over seeded runs ===\n");

    let runs = 1_000u64;
    let ticks = 10_000u32;
    let start = Instant::now();
    let stats = (0..runs)
        .into_par_iter()
        .map(|seed| soak(seed, ticks))
        .reduce(RunStats::default, RunStats::merge);
    let elapsed = start.elapsed().as_secs_f64();

    let total_ticks = runs as f64 * ticks as f64;
    println!("Runs:            {:>10}", runs);
    println!("Ticks per run:   {:>10}", ticks);
    println!("Reseeds/1k:      {:>10.2}", stats.reseeds as f64 * 1000.0 / total_ticks);
    println!("Expansions/1k:   {:>10.2}", stats.expansions as f64 * 1000.0 / total_ticks);
    println!("Mean live cells: {:>10.2}", stats.live_total as f64 / total_ticks);
    println!("Wall time:       {:>9.2}s ({:.1}M steps/sec)", elapsed, total_ticks / elapsed / 1_000_000.0);
}
