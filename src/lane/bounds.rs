//! Playfield bounds checks

use crate::core::types::Rect;

/// Per-axis containment of a rectangle inside the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundCheck {
    pub horizontal: bool,
    pub vertical: bool,
}

/// `true` on an axis means the rectangle is fully within the playfield there.
pub fn check_bound(rect: &Rect, playfield: &Rect) -> BoundCheck {
    BoundCheck {
        horizontal: rect.left() >= playfield.left() && rect.right() <= playfield.right(),
        vertical: rect.top() >= playfield.top() && rect.bottom() <= playfield.bottom(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: Rect = Rect {
        x: 0,
        y: 0,
        width: 800,
        height: 600,
    };

    #[test]
    fn test_inside() {
        let check = check_bound(&Rect::new(0, 0, 800, 600), &FIELD);
        assert!(check.horizontal && check.vertical);
    }

    #[test]
    fn test_left_exit() {
        let check = check_bound(&Rect::new(-1, 300, 50, 50), &FIELD);
        assert!(!check.horizontal);
        assert!(check.vertical);
    }

    #[test]
    fn test_right_exit() {
        let check = check_bound(&Rect::new(771, 295, 30, 10), &FIELD);
        assert!(!check.horizontal);
        let check = check_bound(&Rect::new(770, 295, 30, 10), &FIELD);
        assert!(check.horizontal);
    }

    #[test]
    fn test_vertical_exit_reported_separately() {
        let check = check_bound(&Rect::new(100, 590, 30, 20), &FIELD);
        assert!(check.horizontal);
        assert!(!check.vertical);
    }
}
