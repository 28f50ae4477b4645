//! In-memory sink for tests and headless runs
//!
//! Input is scripted one batch per tick; once the script is exhausted an
//! optional autopilot takes over. Draw calls are buffered per frame.

use std::collections::VecDeque;

use crate::core::error::Result;
use crate::core::types::{Color, Point, Rect};
use crate::presentation::autopilot::Autopilot;
use crate::presentation::{InputEvent, PresentationSink, SoundId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Rect { rect: Rect, color: Color },
    Text {
        text: String,
        position: Point,
        color: Color,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    script: VecDeque<Vec<InputEvent>>,
    autopilot: Option<Autopilot>,
    frame: Vec<DrawCommand>,
    /// Draw calls of the most recently presented frame
    pub last_frame: Vec<DrawCommand>,
    pub sounds: Vec<SoundId>,
    pub frames_presented: u64,
    pub ticks_waited: u64,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_autopilot(autopilot: Autopilot) -> Self {
        Self {
            autopilot: Some(autopilot),
            ..Self::default()
        }
    }

    /// Queue the input for one upcoming tick.
    pub fn script(&mut self, events: Vec<InputEvent>) {
        self.script.push_back(events);
    }

    /// Queue `ticks` ticks with no input.
    pub fn script_idle(&mut self, ticks: usize) {
        self.script.extend(std::iter::repeat_with(Vec::new).take(ticks));
    }

    /// Draw calls made since the last present
    pub fn current_frame(&self) -> &[DrawCommand] {
        &self.frame
    }

    pub fn texts(&self) -> Vec<&str> {
        self.frame
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                DrawCommand::Rect { .. } => None,
            })
            .collect()
    }

    pub fn rects_with_color(&self, color: Color) -> Vec<Rect> {
        self.frame
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Rect { rect, color: c } if *c == color => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl PresentationSink for RecordingSink {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>> {
        if let Some(events) = self.script.pop_front() {
            return Ok(events);
        }
        Ok(self
            .autopilot
            .as_mut()
            .map(Autopilot::next_events)
            .unwrap_or_default())
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.frame.push(DrawCommand::Rect { rect, color });
    }

    fn draw_text(&mut self, text: &str, position: Point, color: Color) {
        self.frame.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            color,
        });
    }

    fn play_sound(&mut self, sound: SoundId) {
        self.sounds.push(sound);
    }

    fn present(&mut self) -> Result<()> {
        self.last_frame = std::mem::take(&mut self.frame);
        self.frames_presented += 1;
        Ok(())
    }

    fn wait_next_tick(&mut self, _tick_rate: u32) {
        self.ticks_waited += 1;
    }
}
