//! Shared state between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use contrail_core::commands::InputEvent;
use contrail_core::state::FrameSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// An input event to forward to the simulation engine.
    Input(InputEvent),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handle to a running game loop: forwards input and polls the latest
/// frame synchronously. Frames also stream over the channel returned by
/// `spawn_game_loop` for hosts that render every frame.
#[derive(Clone)]
pub struct Session {
    command_tx: mpsc::Sender<GameLoopCommand>,
    latest_frame: Arc<Mutex<Option<FrameSnapshot>>>,
}

impl Session {
    pub fn new(
        command_tx: mpsc::Sender<GameLoopCommand>,
        latest_frame: Arc<Mutex<Option<FrameSnapshot>>>,
    ) -> Self {
        Self {
            command_tx,
            latest_frame,
        }
    }

    /// Forward an input event. Returns false if the loop is gone.
    pub fn send_input(&self, event: InputEvent) -> bool {
        self.command_tx.send(GameLoopCommand::Input(event)).is_ok()
    }

    /// Ask the loop thread to stop. Returns false if it already has.
    pub fn shutdown(&self) -> bool {
        self.command_tx.send(GameLoopCommand::Shutdown).is_ok()
    }

    /// The most recent frame, if any tick has completed yet.
    pub fn latest_frame(&self) -> Option<FrameSnapshot> {
        self.latest_frame.lock().ok().and_then(|slot| slot.clone())
    }
}
