//! Homeward headless runner
//!
//! Plays one session without a window: the player is sent home on the first
//! tick and the run ends on win, loss or the tick limit.
//!
//! Usage: `homeward [settings.json]` (log level via `RUST_LOG`)

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use homeward::renderer::HeadlessCanvas;
use homeward::sim::TickInput;
use homeward::{Driver, Settings};

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };
    let seed = settings.seed.unwrap_or_else(seed_from_clock);

    let canvas = HeadlessCanvas::new(settings.canvas_width, settings.canvas_height);
    let mut driver = Driver::new(&settings, canvas, seed);
    let home = driver.state().home.pos();

    let phase = driver.run(settings.max_ticks, |n| TickInput {
        click: (n == 0).then_some(home),
    });
    log::info!("Session ended: {phase:?}");

    match serde_json::to_string_pretty(&driver.summary()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Cannot encode summary: {err}"),
    }

    let canvas = driver.shutdown();
    log::debug!("{} shapes left on canvas", canvas.shape_count());
}
