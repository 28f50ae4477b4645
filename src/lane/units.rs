//! Lane units: one record shared by both sides
//!
//! Friendly and hostile units differ only in the profile they are spawned
//! from (stats and direction), so a `Side` tag replaces per-variant types.

use serde::{Deserialize, Serialize};

use crate::core::config::UnitProfile;
use crate::core::types::{Point, Rect, Side, Size, UnitId};
use crate::presentation::{palette, PresentationSink};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub side: Side,
    pub bounds: Rect,
    pub health: i32,
    pub attack: i32,
    pub velocity: i32,
    /// Cleared while the unit is locked in a duel
    pub advancing: bool,
}

impl Unit {
    pub fn spawn(id: UnitId, side: Side, profile: &UnitProfile, origin: Point, size: Size) -> Self {
        Self {
            id,
            side,
            bounds: Rect::at(origin, size),
            health: profile.health,
            attack: profile.attack,
            velocity: profile.velocity,
            advancing: true,
        }
    }

    /// Step along the lane, unless held in combat
    pub fn advance(&mut self) {
        if self.advancing {
            self.bounds.translate(self.velocity, 0);
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn draw<S: PresentationSink + ?Sized>(&self, sink: &mut S) {
        sink.draw_rect(self.bounds, palette::unit_color(self.side));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friendly() -> Unit {
        Unit::spawn(
            UnitId(1),
            Side::Friendly,
            &UnitProfile::friendly(),
            Point::new(150, 300),
            Size::new(50, 50),
        )
    }

    #[test]
    fn test_spawn_uses_profile() {
        let unit = friendly();
        assert_eq!(unit.health, 100);
        assert_eq!(unit.attack, 10);
        assert_eq!(unit.velocity, 2);
        assert!(unit.advancing);
        assert_eq!(unit.bounds, Rect::new(150, 300, 50, 50));
    }

    #[test]
    fn test_advance_moves_horizontally() {
        let mut unit = friendly();
        unit.advance();
        unit.advance();
        assert_eq!(unit.bounds.origin(), Point::new(154, 300));
    }

    #[test]
    fn test_locked_unit_holds_position() {
        let mut unit = friendly();
        unit.advancing = false;
        unit.advance();
        assert_eq!(unit.bounds.origin(), Point::new(150, 300));
    }

    #[test]
    fn test_hostile_moves_left() {
        let mut unit = Unit::spawn(
            UnitId(2),
            Side::Hostile,
            &UnitProfile::hostile(),
            Point::new(700, 300),
            Size::new(50, 50),
        );
        unit.advance();
        assert_eq!(unit.bounds.x, 695);
    }

    #[test]
    fn test_is_alive_boundary() {
        let mut unit = friendly();
        unit.health = 1;
        assert!(unit.is_alive());
        unit.health = 0;
        assert!(!unit.is_alive());
        unit.health = -5;
        assert!(!unit.is_alive());
    }
}
