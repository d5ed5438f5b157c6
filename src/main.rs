use anyhow::{Context, Result};
use pacman_engine::app::{App, DemoOptions};
use pacman_engine::config::GameConfig;
use pacman_engine::constants::LOOP_TIME;
use pacman_engine::logging::setup_logging;
use tracing::info;

/// Usage: `pacman-engine [FRAMES] [PRINT_EVERY]`. Tuning comes from `PACMAN_*` variables.
fn main() -> Result<()> {
    setup_logging();

    let mut options = DemoOptions::default();
    let mut args = std::env::args().skip(1);
    if let Some(frames) = args.next() {
        options.frame_limit = frames.parse().context("FRAMES must be a number")?;
    }
    if let Some(every) = args.next() {
        options.print_every = every.parse().context("PRINT_EVERY must be a number")?;
    }

    let config = GameConfig::load()?;
    let mut app = App::new(config, options)?;

    info!("Starting game loop ({:.3}ms)", LOOP_TIME.as_secs_f32() * 1000.0);
    while app.run() {}

    let state = app.game().state();
    info!(score = state.score, level = state.level, ticks = state.ticks, "Demo finished");
    Ok(())
}
