use serde::{Deserialize, Serialize};

use crate::core::config::ProjectileConfig;
use crate::core::types::{Point, Rect};
use crate::lane::base::Base;
use crate::presentation::{palette, PresentationSink};

/// A shot travelling across the playfield
///
/// Keeps no link to the base that fired it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub bounds: Rect,
    pub velocity: Point,
}

impl Projectile {
    /// Launch from the base's front edge, centred on it vertically.
    pub fn fire_from(origin: &Base, config: &ProjectileConfig) -> Self {
        let size = config.size;
        let y = origin.bounds.center_y() - size.height / 2;
        Self {
            bounds: Rect::new(origin.bounds.right(), y, size.width, size.height),
            velocity: Point::new(config.velocity_x, config.velocity_y),
        }
    }

    pub fn advance(&mut self) {
        self.bounds.translate(self.velocity.x, self.velocity.y);
    }

    pub fn draw<S: PresentationSink + ?Sized>(&self, sink: &mut S) {
        sink.draw_rect(self.bounds, palette::PROJECTILE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{BaseConfig, PlayfieldConfig};
    use crate::core::types::Side;

    #[test]
    fn test_fired_from_base_front() {
        let base = Base::new(Side::Friendly, &BaseConfig::default(), &PlayfieldConfig::default());
        let shot = Projectile::fire_from(&base, &ProjectileConfig::default());

        assert_eq!(shot.bounds.left(), 150);
        assert_eq!(shot.bounds.center_y(), 300);
        assert_eq!(shot.velocity, Point::new(5, 0));
    }

    #[test]
    fn test_advance() {
        let base = Base::new(Side::Friendly, &BaseConfig::default(), &PlayfieldConfig::default());
        let mut shot = Projectile::fire_from(&base, &ProjectileConfig::default());
        shot.advance();
        assert_eq!(shot.bounds.left(), 155);
    }
}
