//! Heads-up display text

use crate::core::types::Point;
use crate::economy::Economy;
use crate::lane::execution::MatchState;

const LEFT_MARGIN: i32 = 10;
const LINE_HEIGHT: i32 = 30;
const FRIENDLY_LIST_TOP: i32 = 130;
const HOSTILE_LIST_TOP: i32 = 100;
const HOSTILE_LIST_INSET: i32 = 150; // from the right edge

/// A single string placed on the playfield
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudLine {
    pub text: String,
    pub position: Point,
}

impl HudLine {
    fn new(text: String, x: i32, y: i32) -> Self {
        Self {
            text,
            position: Point::new(x, y),
        }
    }
}

/// Economy, base health and per-unit health labels for the current state.
pub fn compose_hud(state: &MatchState) -> Vec<HudLine> {
    let economy = &state.economy;
    let mut lines = vec![
        HudLine::new(level_up_prompt(economy), LEFT_MARGIN, 10),
        HudLine::new(
            format!(
                "Money: {}/{} (Lv.{})",
                economy.balance(),
                economy.cap(),
                economy.level()
            ),
            LEFT_MARGIN,
            40,
        ),
        HudLine::new(
            format!("Friendly Base HP: {}", state.friendly_base.health),
            LEFT_MARGIN,
            70,
        ),
        HudLine::new(
            format!("Hostile Base HP: {}", state.hostile_base.health),
            LEFT_MARGIN,
            100,
        ),
    ];

    for (i, unit) in state.friendlies.iter().enumerate() {
        lines.push(HudLine::new(
            format!("Friendly {} HP: {}", i + 1, unit.health),
            LEFT_MARGIN,
            FRIENDLY_LIST_TOP + i as i32 * LINE_HEIGHT,
        ));
    }

    let hostile_x = state.config.playfield.width - HOSTILE_LIST_INSET;
    for (i, unit) in state.hostiles.iter().enumerate() {
        lines.push(HudLine::new(
            format!("Hostile {} HP: {}", i + 1, unit.health),
            hostile_x,
            HOSTILE_LIST_TOP + i as i32 * LINE_HEIGHT,
        ));
    }

    lines
}

fn level_up_prompt(economy: &Economy) -> String {
    if economy.is_max_level() {
        "push 'W': Money Lv up. (Lv. MAX)".to_string()
    } else {
        format!("push 'W': Money Lv up. (cost={})", economy.level_up_cost())
    }
}
