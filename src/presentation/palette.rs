use crate::core::types::{Color, Side};

pub const BACKGROUND: Color = Color::WHITE;
pub const TEXT: Color = Color::BLACK;
pub const FRIENDLY_UNIT: Color = Color::rgb(255, 204, 204);
pub const HOSTILE_UNIT: Color = Color::rgb(204, 204, 255);
pub const BASE: Color = Color::rgb(150, 75, 0);
pub const PROJECTILE: Color = Color::rgb(255, 200, 0);

pub fn unit_color(side: Side) -> Color {
    match side {
        Side::Friendly => FRIENDLY_UNIT,
        Side::Hostile => HOSTILE_UNIT,
    }
}
