//! Raw input events sent from the platform layer to the simulation.
//!
//! Events are queued on the engine and merged into the input state at the
//! next tick boundary — they never take effect mid-step.

use serde::{Deserialize, Serialize};

/// All input the platform layer can deliver.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    /// A key went down. `code` is the platform key code (e.g. "W").
    KeyDown { code: String },
    /// A key came up.
    KeyUp { code: String },
    /// The pointer moved, in client coordinates. Captured but not
    /// consumed by gameplay.
    PointerMove { x: f64, y: f64 },
}
