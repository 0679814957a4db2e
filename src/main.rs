//! Hex Bounce headless driver
//!
//! Plays the part of the clock and input layer: feeds fixed ticks to the
//! simulation and prints snapshots as JSON lines.
//!
//! Usage: `hex-bounce [config.json] [seconds]`

use hex_bounce::SimConfig;
use hex_bounce::consts::SIM_DT;
use hex_bounce::sim::{SimState, Snapshot, TickInput, tick};

/// Simulated run length when none is given
const DEFAULT_RUN_SECONDS: f32 = 10.0;
/// Print every Nth tick (10 lines per simulated second at 120 Hz)
const REPORT_EVERY: u64 = 12;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => SimConfig::load_or_default(path),
        None => SimConfig::default(),
    };
    let seconds = parse_duration(args.next().as_deref());

    log::info!("Hex Bounce starting ({seconds} s at {:.0} Hz)", 1.0 / SIM_DT);
    let total_ticks = (seconds / SIM_DT).round() as u64;

    let mut state = SimState::new(config);
    let mut contacts = 0u64;
    let mut elapsed = 0u64;

    while state.is_running() {
        let input = TickInput {
            dt: SIM_DT,
            stop_requested: elapsed >= total_ticks,
        };
        if tick(&mut state, &input).is_some() {
            contacts += 1;
        }
        elapsed += 1;

        if state.is_running() && state.time_ticks % REPORT_EVERY == 0 {
            report(&state.snapshot());
        }
    }

    let last = state.snapshot();
    report(&last);
    log::info!(
        "Finished: {} ticks, {} bounce ticks, hexagon at {:.2} deg",
        last.tick,
        contacts,
        last.angle_degrees()
    );
}

/// Run length in seconds; anything but a finite, non-negative number falls back
fn parse_duration(arg: Option<&str>) -> f32 {
    match arg.map(str::parse::<f32>) {
        Some(Ok(s)) if s.is_finite() && s >= 0.0 => s,
        Some(_) => {
            log::warn!("Invalid duration; running for {DEFAULT_RUN_SECONDS} s");
            DEFAULT_RUN_SECONDS
        }
        None => DEFAULT_RUN_SECONDS,
    }
}

fn report(snapshot: &Snapshot) {
    match serde_json::to_string(snapshot) {
        Ok(line) => println!("{line}"),
        Err(e) => log::error!("Failed to encode snapshot: {e}"),
    }
}
