//! Duel resolution integration tests
//!
//! Exact outcomes for the reference matchup plus properties that must hold
//! for any stats.

use lane_battle::core::config::{MatchConfig, UnitProfile};
use lane_battle::core::types::{Point, Side, Size, UnitId};
use lane_battle::lane::{resolve_duel, Unit};
use proptest::prelude::*;

fn unit(side: Side, health: i32, attack: i32) -> Unit {
    let velocity = match side {
        Side::Friendly => 2,
        Side::Hostile => -5,
    };
    let profile = UnitProfile {
        health,
        attack,
        velocity,
    };
    Unit::spawn(UnitId(0), side, &profile, Point::default(), Size::new(50, 50))
}

#[test]
fn test_reference_profiles_duel() {
    let config = MatchConfig::default();
    let size = config.unit_size;
    let origin = Point::new(0, 0);
    let mut friendly = Unit::spawn(UnitId(1), Side::Friendly, &config.friendly, origin, size);
    let mut hostile = Unit::spawn(UnitId(2), Side::Hostile, &config.hostile, origin, size);

    let result = resolve_duel(&mut friendly, &mut hostile);

    assert_eq!(result.survivor, Side::Friendly);
    assert_eq!(friendly.health, 50);
    assert!(!hostile.is_alive());
}

#[test]
fn test_wounded_friendly_loses_rematch() {
    let mut friendly = unit(Side::Friendly, 50, 10);
    let mut hostile = unit(Side::Hostile, 100, 5);

    let result = resolve_duel(&mut friendly, &mut hostile);

    // Friendly falls on the tenth hostile strike, having landed nine counters.
    assert_eq!(result.survivor, Side::Hostile);
    assert_eq!(result.exchanges, 10);
    assert_eq!(hostile.health, 10);
}

#[test]
fn test_duel_leaves_positions_alone() {
    let mut friendly = unit(Side::Friendly, 100, 10);
    let mut hostile = unit(Side::Hostile, 100, 5);
    let (fb, hb) = (friendly.bounds, hostile.bounds);

    resolve_duel(&mut friendly, &mut hostile);

    assert_eq!(friendly.bounds, fb);
    assert_eq!(hostile.bounds, hb);
    assert_eq!(friendly.attack, 10);
    assert_eq!(hostile.attack, 5);
}

proptest! {
    #[test]
    fn survivor_is_the_only_one_standing(
        fh in 1i32..300, fa in 0i32..60,
        hh in 1i32..300, ha in 1i32..60,
    ) {
        let mut friendly = unit(Side::Friendly, fh, fa);
        let mut hostile = unit(Side::Hostile, hh, ha);

        let result = resolve_duel(&mut friendly, &mut hostile);

        match result.survivor {
            Side::Friendly => {
                prop_assert!(friendly.is_alive());
                prop_assert!(!hostile.is_alive());
            }
            Side::Hostile => {
                prop_assert!(hostile.is_alive());
                prop_assert!(!friendly.is_alive());
            }
        }
    }

    #[test]
    fn hostile_takes_every_mutual_knockout(
        fh in 1i32..300, fa in 1i32..60,
        hh in 1i32..300, ha in 1i32..60,
    ) {
        // Exchanges each side needs to drop the other
        let hostile_needs = (fh + ha - 1) / ha;
        let friendly_needs = (hh + fa - 1) / fa;

        let mut friendly = unit(Side::Friendly, fh, fa);
        let mut hostile = unit(Side::Hostile, hh, ha);
        let result = resolve_duel(&mut friendly, &mut hostile);

        let expected = if hostile_needs <= friendly_needs {
            Side::Hostile
        } else {
            Side::Friendly
        };
        prop_assert_eq!(result.survivor, expected);
        prop_assert_eq!(result.exchanges as i32, hostile_needs.min(friendly_needs));
    }
}
