use serde::{Deserialize, Serialize};

use crate::core::config::{BaseConfig, PlayfieldConfig};
use crate::core::types::{Rect, Side};
use crate::presentation::{palette, PresentationSink};

/// Stationary structure at one end of the lane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Base {
    pub side: Side,
    pub bounds: Rect,
    /// Only ever decreases; may dip below zero before the end-of-tick check
    pub health: i32,
}

impl Base {
    /// Place a base at its side's end of the lane, vertically centred.
    pub fn new(side: Side, config: &BaseConfig, playfield: &PlayfieldConfig) -> Self {
        let x = match side {
            Side::Friendly => config.edge_margin,
            Side::Hostile => playfield.width - config.edge_margin - config.size.width,
        };
        let y = playfield.lane_y() - config.size.height / 2;

        Self {
            side,
            bounds: Rect::new(x, y, config.size.width, config.size.height),
            health: config.health,
        }
    }

    pub fn apply_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    pub fn is_destroyed(&self) -> bool {
        self.health <= 0
    }

    pub fn draw<S: PresentationSink + ?Sized>(&self, sink: &mut S) {
        sink.draw_rect(self.bounds, palette::BASE);
    }
}
