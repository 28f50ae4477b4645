//! Presentation sink - rendering, audio and input at the edge of the core
//!
//! The simulation never touches a terminal, a window or a speaker. It drains
//! input events and emits draw/sound calls through `PresentationSink`, and
//! the binaries decide what those calls turn into.

pub mod autopilot;
pub mod hud;
pub mod palette;
pub mod recording;
pub mod terminal;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::{Color, Point, Rect};

pub use autopilot::{Autopilot, AutopilotProfile};
pub use hud::{compose_hud, HudLine};
pub use recording::{DrawCommand, RecordingSink};
pub use terminal::TerminalSink;

/// Player input, already decoded from raw key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    Quit,
    SpawnFriendlyRequested,
    FireProjectileRequested,
    LevelUpRequested,
}

/// Fire-and-forget audio cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundId {
    LevelUpSuccess,
    LevelUpFailure,
}

pub trait PresentationSink {
    /// Input gathered since the previous call
    fn poll_events(&mut self) -> Result<Vec<InputEvent>>;

    fn draw_rect(&mut self, rect: Rect, color: Color);

    fn draw_text(&mut self, text: &str, position: Point, color: Color);

    fn play_sound(&mut self, sound: SoundId);

    /// Commit everything drawn since the last present
    fn present(&mut self) -> Result<()>;

    /// Block until the next tick is due at `tick_rate` ticks per second
    fn wait_next_tick(&mut self, tick_rate: u32);
}
