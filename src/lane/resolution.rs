//! One-on-one duel resolution
//!
//! Duels are fought to completion inside a single call. The hostile unit
//! strikes first in every exchange, so a mutual knockout always goes to the
//! hostile side.

use serde::{Deserialize, Serialize};

use crate::core::types::Side;
use crate::lane::units::Unit;

/// Outcome of a finished duel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelResult {
    pub survivor: Side,
    /// Hostile strikes delivered (one per exchange)
    pub exchanges: u32,
}

/// Fight `friendly` against `hostile` until one of them drops to zero health.
///
/// Each exchange: the hostile subtracts its attack from the friendly; if the
/// friendly is still standing it strikes back. Only the two health fields
/// are touched.
pub fn resolve_duel(friendly: &mut Unit, hostile: &mut Unit) -> DuelResult {
    debug_assert_eq!(friendly.side, Side::Friendly);
    debug_assert_eq!(hostile.side, Side::Hostile);

    // Neither side can ever finish the other; the hostile holds.
    if friendly.attack <= 0 && hostile.attack <= 0 {
        return DuelResult {
            survivor: Side::Hostile,
            exchanges: 0,
        };
    }

    let mut exchanges = 0;
    while friendly.is_alive() && hostile.is_alive() {
        exchanges += 1;
        friendly.health -= hostile.attack;
        if friendly.is_alive() {
            hostile.health -= friendly.attack;
        }
    }

    let survivor = if friendly.is_alive() {
        Side::Friendly
    } else {
        Side::Hostile
    };

    DuelResult {
        survivor,
        exchanges,
    }
}
