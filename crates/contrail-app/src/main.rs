//! Headless CONTRAIL host: runs the simulation at 30 Hz and writes each
//! frame as one JSON line on stdout for an external drawing surface.
//! Ctrl-C stops the loop.

use std::io::{self, Write};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use log::info;

use contrail_app::game_loop::spawn_game_loop;
use contrail_app::state::Session;
use contrail_core::constants::TICK_RATE;
use contrail_sim::engine::SimConfig;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let (frame_tx, frame_rx) = mpsc::channel();
    let latest_frame = Arc::new(Mutex::new(None));
    let cmd_tx = spawn_game_loop(SimConfig::default(), frame_tx, Arc::clone(&latest_frame));
    let session = Session::new(cmd_tx, latest_frame);

    let shutdown_session = session.clone();
    ctrlc::set_handler(move || {
        shutdown_session.shutdown();
    })
    .context("failed to install Ctrl-C handler")?;

    info!("session started, emitting frames on stdout");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for frame in frame_rx {
        serde_json::to_writer(&mut out, &frame).context("failed to write frame")?;
        out.write_all(b"\n").context("failed to write frame")?;

        if frame.time.step % (TICK_RATE as u64 * 10) == 0 {
            info!(
                "step {}: {} ships, {} draws",
                frame.time.step,
                frame.ships.len(),
                frame.draws.len()
            );
        }
    }

    info!("game loop stopped");
    Ok(())
}
