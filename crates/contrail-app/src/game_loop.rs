//! Game loop thread — runs the simulation engine at 30 Hz.
//!
//! Commands arrive via `mpsc` channel. Each frame is streamed to the
//! host over a frame channel and stored in shared state for synchronous
//! polling. If a tick overruns its budget the next one simply fires
//! late; a loop more than two ticks behind resets its schedule instead
//! of bursting to catch up.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use log::debug;

use contrail_core::constants::TICK_RATE;
use contrail_core::state::FrameSnapshot;
use contrail_sim::engine::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the host to use.
pub fn spawn_game_loop(
    config: SimConfig,
    frame_tx: mpsc::Sender<FrameSnapshot>,
    latest_frame: Arc<Mutex<Option<FrameSnapshot>>>,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("contrail-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, frame_tx, &latest_frame);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown, channel disconnect, or the host
/// dropping its frame receiver.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    frame_tx: mpsc::Sender<FrameSnapshot>,
    latest_frame: &Mutex<Option<FrameSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Input(event)) => {
                    engine.queue_event(event);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    debug!("game loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one step
        let frame = engine.tick();

        // 3. Stream the frame to the host; a closed receiver ends the loop
        if frame_tx.send(frame.clone()).is_err() {
            debug!("frame receiver dropped, stopping game loop");
            return;
        }

        // 4. Store the latest frame for synchronous polling
        if let Ok(mut slot) = latest_frame.lock() {
            *slot = Some(frame);
        }

        // 5. Sleep until the next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Session;
    use contrail_core::commands::InputEvent;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Input(InputEvent::KeyDown { code: "W".into() }))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 2);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Input(InputEvent::KeyDown { .. })
        ));
        assert!(matches!(commands[1], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_tick_duration_constant() {
        // 30Hz = 33.333ms per tick
        let expected_nanos = 1_000_000_000u64 / 30;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_frame_serialization_is_fast() {
        let mut engine = SimulationEngine::new(SimConfig {
            extra_pursuers: 8,
            ..Default::default()
        });

        // Run enough ticks to populate breadcrumb trails
        for _ in 0..100 {
            engine.tick();
        }

        let frame = engine.tick();
        let start = Instant::now();
        let json = serde_json::to_string(&frame).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Frame serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_loop_streams_frames_and_shuts_down() {
        let (frame_tx, frame_rx) = mpsc::channel();
        let latest = Arc::new(Mutex::new(None));
        let cmd_tx = spawn_game_loop(SimConfig::default(), frame_tx, Arc::clone(&latest));
        let session = Session::new(cmd_tx, Arc::clone(&latest));

        session.send_input(InputEvent::KeyDown { code: "W".into() });

        // Take a handful of live frames off the stream.
        let mut last_step = 0;
        for _ in 0..5 {
            let frame = frame_rx
                .recv_timeout(Duration::from_secs(2))
                .expect("frame from loop thread");
            assert!(frame.time.step > last_step);
            last_step = frame.time.step;
        }
        assert!(session.latest_frame().is_some());

        assert!(session.shutdown());
        // The sender side drops once the thread exits.
        while frame_rx.recv_timeout(Duration::from_secs(2)).is_ok() {}
    }
}
