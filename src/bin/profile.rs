use std::time::Instant;

use escape_maze::{MazeConfig, MazeEngine, generators::NoiseParams, logging};

/// Generates large mazes in a loop and reports the average time per maze.
fn main() -> std::io::Result<()> {
    let _guard = logging::init(logging::debug_env());

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(100);

    for (name, config) in [
        ("carve", MazeConfig::default()),
        ("noise", MazeConfig::default().with_noise(NoiseParams::default())),
    ] {
        let engine = MazeEngine::new(config);
        let started = Instant::now();
        let mut failures = 0;
        for seed in 0..num_iters {
            if let Err(err) = engine.generate(u8::MAX as u16, u8::MAX as u16, seed) {
                tracing::warn!("[profile] {} seed {} failed: {}", name, seed, err);
                failures += 1;
            }
        }
        let elapsed = started.elapsed();
        println!(
            "{}: {} mazes in {:?} ({:?} per maze, {} failed)",
            name,
            num_iters,
            elapsed,
            elapsed / num_iters.max(1) as u32,
            failures
        );
    }
    Ok(())
}
