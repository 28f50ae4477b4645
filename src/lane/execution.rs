//! Match execution loop
//!
//! Each tick: input -> spawn -> movement -> leaks -> duels -> base assaults
//! -> render -> accrual -> projectiles -> terminal check. The order is part
//! of the contract; replays depend on it.

use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};

use crate::core::config::MatchConfig;
use crate::core::error::Result;
use crate::core::types::{Point, Side, Tick, UnitId};
use crate::economy::Economy;
use crate::lane::base::Base;
use crate::lane::bounds::check_bound;
use crate::lane::events::{MatchEventKind, MatchEventLog};
use crate::lane::projectile::Projectile;
use crate::lane::resolution::resolve_duel;
use crate::lane::units::Unit;
use crate::presentation::{compose_hud, palette, InputEvent, PresentationSink, SoundId};

/// Match phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchPhase {
    #[default]
    Running,
    Ended,
}

/// Match outcome, seen from the friendly side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchOutcome {
    #[default]
    Undecided,
    Victory, // hostile base destroyed
    Defeat,  // friendly base destroyed
    Draw,    // both bases fell on the same tick
    Aborted, // player quit
}

/// Running totals for reporting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    pub friendlies_spawned: u32,
    pub hostiles_spawned: u32,
    pub spawns_rejected: u32,
    pub kills: u32,
    pub losses: u32,
    pub leaks: u32,
    pub friendly_base_hits: u32,
    pub hostile_base_hits: u32,
    pub projectiles_fired: u32,
    pub projectiles_expired: u32,
    pub level_ups: u32,
    pub level_ups_rejected: u32,
}

/// Complete match state
///
/// Owns every entity collection and the economy; nothing else holds a
/// reference into them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub config: MatchConfig,

    // Time
    pub tick: Tick,
    pub phase: MatchPhase,
    pub outcome: MatchOutcome,

    // Entities
    pub friendly_base: Base,
    pub hostile_base: Base,
    pub friendlies: Vec<Unit>,
    pub hostiles: Vec<Unit>,
    pub projectiles: Vec<Projectile>,

    // Systems
    pub economy: Economy,
    pub spawn_timer: u32,
    next_unit_id: u32,

    pub stats: MatchStats,
}

impl MatchState {
    /// Validate `config` and set up a fresh match.
    pub fn new(config: MatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: MatchConfig) -> Self {
        let friendly_base = Base::new(Side::Friendly, &config.base, &config.playfield);
        let hostile_base = Base::new(Side::Hostile, &config.base, &config.playfield);
        let economy = Economy::new(&config.economy);

        Self {
            config,
            tick: 0,
            phase: MatchPhase::Running,
            outcome: MatchOutcome::Undecided,
            friendly_base,
            hostile_base,
            friendlies: Vec::new(),
            hostiles: Vec::new(),
            projectiles: Vec::new(),
            economy,
            spawn_timer: 0,
            next_unit_id: 0,
            stats: MatchStats::default(),
        }
    }

    /// Is the match over?
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, MatchPhase::Ended)
    }

    pub fn base(&self, side: Side) -> &Base {
        match side {
            Side::Friendly => &self.friendly_base,
            Side::Hostile => &self.hostile_base,
        }
    }

    /// Drain the sink's input and run one tick.
    pub fn run_tick<S: PresentationSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<MatchEventLog> {
        let input = sink.poll_events()?;
        Ok(self.advance_tick(&input, sink))
    }

    /// Run one tick with explicit input. Does nothing once the match is over.
    pub fn advance_tick<S: PresentationSink + ?Sized>(
        &mut self,
        input: &[InputEvent],
        sink: &mut S,
    ) -> MatchEventLog {
        let mut events = MatchEventLog::new();

        if self.is_finished() {
            return events;
        }

        // ===== PHASE 1: INPUT =====
        if self.phase_input(input, sink, &mut events).is_break() {
            return events;
        }

        // ===== PHASE 2: SPAWN =====
        self.phase_spawn(&mut events);

        // ===== PHASE 3: MOVEMENT =====
        self.phase_movement();
        self.phase_leaks(&mut events);

        // ===== PHASE 4: COLLISIONS =====
        self.phase_duels(&mut events);
        self.phase_base_assault(Side::Hostile, &mut events);
        self.phase_base_assault(Side::Friendly, &mut events);

        // ===== PHASE 5: RENDER =====
        self.phase_render(sink);

        // ===== PHASE 6: ECONOMY =====
        self.economy.accrue();

        // ===== PHASE 7: PROJECTILES =====
        self.phase_projectiles(sink, &mut events);

        // ===== PHASE 8: POST-TICK =====
        self.phase_post_tick(&mut events);

        events
    }

    /// Run until the match ends, presenting and pacing every tick.
    pub fn run<S: PresentationSink + ?Sized>(&mut self, sink: &mut S) -> Result<MatchOutcome> {
        tracing::info!(
            "Match started: bases at {} health, hostile every {} ticks",
            self.config.base.health,
            self.config.rules.spawn_interval_ticks
        );

        while !self.is_finished() {
            self.run_tick(sink)?;
            if self.outcome == MatchOutcome::Aborted {
                break;
            }
            sink.present()?;
            sink.wait_next_tick(self.config.rules.tick_rate);
        }

        Ok(self.outcome)
    }

    fn phase_input<S: PresentationSink + ?Sized>(
        &mut self,
        input: &[InputEvent],
        sink: &mut S,
        events: &mut MatchEventLog,
    ) -> ControlFlow<()> {
        for event in input {
            match event {
                InputEvent::Quit => {
                    self.end_match(MatchOutcome::Aborted, events);
                    return ControlFlow::Break(());
                }
                InputEvent::SpawnFriendlyRequested => self.request_friendly(events),
                InputEvent::FireProjectileRequested => {
                    self.projectiles
                        .push(Projectile::fire_from(&self.friendly_base, &self.config.projectile));
                    self.stats.projectiles_fired += 1;
                    events.push(
                        MatchEventKind::ProjectileFired,
                        "Projectile fired".into(),
                        self.tick,
                    );
                }
                InputEvent::LevelUpRequested => {
                    if self.economy.try_level_up() {
                        sink.play_sound(SoundId::LevelUpSuccess);
                        self.stats.level_ups += 1;
                        let level = self.economy.level();
                        events.push(
                            MatchEventKind::LevelUp { level },
                            format!(
                                "Economy reached level {} (rate {}, cap {})",
                                level,
                                self.economy.rate(),
                                self.economy.cap()
                            ),
                            self.tick,
                        );
                    } else {
                        sink.play_sound(SoundId::LevelUpFailure);
                        self.stats.level_ups_rejected += 1;
                        events.push(
                            MatchEventKind::LevelUpRejected,
                            format!(
                                "Level-up rejected (balance {}, cost {}, level {}/{})",
                                self.economy.balance(),
                                self.economy.level_up_cost(),
                                self.economy.level(),
                                self.economy.max_level()
                            ),
                            self.tick,
                        );
                    }
                }
            }
        }
        ControlFlow::Continue(())
    }

    fn request_friendly(&mut self, events: &mut MatchEventLog) {
        let cost = self.config.rules.spawn_cost;
        if !self.economy.try_spend(cost) {
            self.stats.spawns_rejected += 1;
            events.push(
                MatchEventKind::SpawnRejected {
                    balance: self.economy.balance(),
                    cost,
                },
                format!("Cannot afford unit ({} < {})", self.economy.balance(), cost),
                self.tick,
            );
            return;
        }

        let unit = self.spawn_unit(Side::Friendly);
        self.stats.friendlies_spawned += 1;
        events.push(
            MatchEventKind::UnitSpawned {
                unit_id: unit.id,
                side: Side::Friendly,
            },
            format!("Friendly unit {} deployed", unit.id.0),
            self.tick,
        );
        self.friendlies.push(unit);
    }

    fn phase_spawn(&mut self, events: &mut MatchEventLog) {
        self.spawn_timer += 1;
        if self.spawn_timer < self.config.rules.spawn_interval_ticks {
            return;
        }
        self.spawn_timer = 0;

        let unit = self.spawn_unit(Side::Hostile);
        self.stats.hostiles_spawned += 1;
        events.push(
            MatchEventKind::UnitSpawned {
                unit_id: unit.id,
                side: Side::Hostile,
            },
            format!("Hostile unit {} spawned", unit.id.0),
            self.tick,
        );
        self.hostiles.push(unit);
    }

    /// Friendlies appear just in front of their base; hostiles appear inside
    /// theirs, flush with its far edge.
    fn spawn_unit(&mut self, side: Side) -> Unit {
        let size = self.config.unit_size;
        let lane_y = self.config.playfield.lane_y();
        let x = match side {
            Side::Friendly => self.friendly_base.bounds.right(),
            Side::Hostile => self.hostile_base.bounds.right() - size.width,
        };

        let id = UnitId(self.next_unit_id);
        self.next_unit_id += 1;
        Unit::spawn(id, side, self.config.profile(side), Point::new(x, lane_y), size)
    }

    fn phase_movement(&mut self) {
        for unit in self.friendlies.iter_mut().chain(self.hostiles.iter_mut()) {
            unit.advance();
        }
    }

    /// Hostiles that walked off the playfield vanish without effect.
    fn phase_leaks(&mut self, events: &mut MatchEventLog) {
        let playfield = self.config.playfield.rect();
        let mut leaked = Vec::new();
        self.hostiles.retain(|unit| {
            let inside = check_bound(&unit.bounds, &playfield).horizontal;
            if !inside {
                leaked.push(unit.id);
            }
            inside
        });

        for unit_id in leaked {
            self.stats.leaks += 1;
            events.push(
                MatchEventKind::HostileLeaked { unit_id },
                format!("Hostile unit {} left the playfield", unit_id.0),
                self.tick,
            );
        }
    }

    /// Resolve every friendly/hostile contact.
    ///
    /// A hostile engages at most one friendly (the first live one in spawn
    /// order that overlaps it) and is removed whatever the result. Removals
    /// are marked during the pass and swept afterwards.
    fn phase_duels(&mut self, events: &mut MatchEventLog) {
        let kill_bonus = self.config.rules.kill_bonus;
        let mut engaged = vec![false; self.hostiles.len()];

        for (idx, hostile) in self.hostiles.iter_mut().enumerate() {
            let Some(friendly) = self
                .friendlies
                .iter_mut()
                .find(|f| f.is_alive() && f.bounds.overlaps(&hostile.bounds))
            else {
                continue;
            };

            engaged[idx] = true;
            friendly.advancing = false;
            let duel = resolve_duel(friendly, hostile);

            match duel.survivor {
                Side::Friendly => {
                    self.economy.credit_kill(kill_bonus);
                    friendly.advancing = true;
                    self.stats.kills += 1;
                }
                Side::Hostile => self.stats.losses += 1,
            }

            events.push(
                MatchEventKind::DuelResolved {
                    friendly: friendly.id,
                    hostile: hostile.id,
                    survivor: duel.survivor,
                    exchanges: duel.exchanges,
                },
                format!(
                    "Duel {} vs {}: {:?} survives after {} exchanges ({} / {} health left)",
                    friendly.id.0,
                    hostile.id.0,
                    duel.survivor,
                    duel.exchanges,
                    friendly.health,
                    hostile.health
                ),
                self.tick,
            );
        }

        let mut keep = engaged.into_iter().map(|e| !e);
        self.hostiles.retain(|_| keep.next().unwrap_or(true));
        self.friendlies.retain(Unit::is_alive);
    }

    /// Units of `attacker` side touching the opposing base hit it once and
    /// are consumed.
    fn phase_base_assault(&mut self, attacker: Side, events: &mut MatchEventLog) {
        let (units, target) = match attacker {
            Side::Hostile => (&mut self.hostiles, &mut self.friendly_base),
            Side::Friendly => (&mut self.friendlies, &mut self.hostile_base),
        };

        let mut hits = Vec::new();
        units.retain(|unit| {
            if !unit.bounds.overlaps(&target.bounds) {
                return true;
            }
            target.apply_damage(unit.attack);
            hits.push((unit.id, unit.attack, target.health));
            false
        });

        let defender = attacker.opponent();
        for (unit_id, damage, remaining) in hits {
            match defender {
                Side::Friendly => self.stats.friendly_base_hits += 1,
                Side::Hostile => self.stats.hostile_base_hits += 1,
            }
            events.push(
                MatchEventKind::BaseHit {
                    side: defender,
                    damage,
                    remaining,
                },
                format!(
                    "{:?} base hit by unit {} for {} ({} left)",
                    defender, unit_id.0, damage, remaining
                ),
                self.tick,
            );
        }
    }

    fn phase_render<S: PresentationSink + ?Sized>(&self, sink: &mut S) {
        sink.draw_rect(self.config.playfield.rect(), palette::BACKGROUND);

        self.friendly_base.draw(sink);
        self.hostile_base.draw(sink);
        for unit in self.friendlies.iter().chain(self.hostiles.iter()) {
            unit.draw(sink);
        }

        for line in compose_hud(self) {
            sink.draw_text(&line.text, line.position, palette::TEXT);
        }
    }

    /// Expired shots are dropped before moving; live ones move, then draw.
    /// Only the horizontal axis is checked.
    fn phase_projectiles<S: PresentationSink + ?Sized>(
        &mut self,
        sink: &mut S,
        events: &mut MatchEventLog,
    ) {
        let playfield = self.config.playfield.rect();
        let mut expired = 0;
        self.projectiles.retain_mut(|shot| {
            if !check_bound(&shot.bounds, &playfield).horizontal {
                expired += 1;
                return false;
            }
            shot.advance();
            shot.draw(sink);
            true
        });

        for _ in 0..expired {
            self.stats.projectiles_expired += 1;
            events.push(
                MatchEventKind::ProjectileExpired,
                "Projectile left the playfield".into(),
                self.tick,
            );
        }
    }

    fn phase_post_tick(&mut self, events: &mut MatchEventLog) {
        let outcome = match (
            self.base(Side::Friendly).is_destroyed(),
            self.base(Side::Hostile).is_destroyed(),
        ) {
            (true, true) => Some(MatchOutcome::Draw),
            (true, false) => Some(MatchOutcome::Defeat),
            (false, true) => Some(MatchOutcome::Victory),
            (false, false) => None,
        };

        if let Some(outcome) = outcome {
            self.end_match(outcome, events);
        }
        self.tick += 1;
    }

    fn end_match(&mut self, outcome: MatchOutcome, events: &mut MatchEventLog) {
        self.phase = MatchPhase::Ended;
        self.outcome = outcome;
        tracing::info!(
            "Match ended at tick {}: {:?} (friendly base {}, hostile base {})",
            self.tick,
            outcome,
            self.friendly_base.health,
            self.hostile_base.health
        );
        events.push(
            MatchEventKind::MatchEnded { outcome },
            format!("Match ended: {:?}", outcome),
            self.tick,
        );
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::from_valid_config(MatchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::RecordingSink;

    fn place(state: &MatchState, id: u32, side: Side, x: i32, y: i32) -> Unit {
        let profile = state.config.profile(side);
        Unit::spawn(UnitId(id), side, profile, Point::new(x, y), state.config.unit_size)
    }

    fn idle(state: &mut MatchState, sink: &mut RecordingSink, ticks: u32) {
        for _ in 0..ticks {
            state.advance_tick(&[], sink);
        }
    }

    #[test]
    fn test_new_match_layout() {
        let state = MatchState::default();
        assert_eq!(state.phase, MatchPhase::Running);
        assert_eq!(state.outcome, MatchOutcome::Undecided);
        assert_eq!(state.friendly_base.health, 1000);
        assert_eq!(state.hostile_base.health, 1000);
        assert!(state.friendlies.is_empty());
        assert!(state.hostiles.is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = MatchConfig::default();
        config.rules.tick_rate = 0;
        assert!(MatchState::new(config).is_err());
    }

    #[test]
    fn test_hostile_spawn_cadence() {
        let mut state = MatchState::default();
        let mut sink = RecordingSink::new();

        idle(&mut state, &mut sink, 59);
        assert!(state.hostiles.is_empty());

        let log = state.advance_tick(&[], &mut sink);
        assert_eq!(state.hostiles.len(), 1);
        assert_eq!(state.spawn_timer, 0);
        assert_eq!(
            log.count(|k| matches!(k, MatchEventKind::UnitSpawned { side: Side::Hostile, .. })),
            1
        );

        // Spawned at x=700 and moved in the same tick
        assert_eq!(state.hostiles[0].bounds.origin(), Point::new(695, 300));
    }

    #[test]
    fn test_spawn_rejected_without_funds() {
        let mut state = MatchState::default();
        let mut sink = RecordingSink::new();

        let log = state.advance_tick(&[InputEvent::SpawnFriendlyRequested], &mut sink);

        assert!(state.friendlies.is_empty());
        assert_eq!(state.stats.spawns_rejected, 1);
        assert_eq!(
            log.count(|k| matches!(k, MatchEventKind::SpawnRejected { .. })),
            1
        );
    }

    #[test]
    fn test_friendly_spawn_spends_and_moves() {
        let mut state = MatchState::default();
        let mut sink = RecordingSink::new();
        idle(&mut state, &mut sink, 100);
        assert_eq!(state.economy.balance(), 100);

        state.advance_tick(&[InputEvent::SpawnFriendlyRequested], &mut sink);

        assert_eq!(state.friendlies.len(), 1);
        // Spent 100, then accrued 1 this tick
        assert_eq!(state.economy.balance(), 1);
        assert_eq!(state.friendlies[0].bounds.origin(), Point::new(152, 300));
    }

    #[test]
    fn test_duel_removes_hostile_and_pays_bonus() {
        let mut state = MatchState::default();
        let mut sink = RecordingSink::new();

        state.friendlies.push(place(&state, 90, Side::Friendly, 400, 300));
        state.hostiles.push(place(&state, 91, Side::Hostile, 455, 300));

        // After moving: friendly 402..452, hostile 450..500 -> contact
        let log = state.advance_tick(&[], &mut sink);

        assert!(state.hostiles.is_empty());
        assert_eq!(state.friendlies.len(), 1);
        assert_eq!(state.friendlies[0].health, 50);
        assert!(state.friendlies[0].advancing);
        // Kill bonus 20 plus one tick of accrual
        assert_eq!(state.economy.balance(), 21);
        assert_eq!(state.stats.kills, 1);
        assert_eq!(
            log.count(|k| matches!(
                k,
                MatchEventKind::DuelResolved { survivor: Side::Friendly, .. }
            )),
            1
        );
    }

    #[test]
    fn test_winning_hostile_is_still_removed() {
        let mut state = MatchState::default();
        let mut sink = RecordingSink::new();

        let mut weak = place(&state, 1, Side::Friendly, 400, 300);
        weak.health = 5;
        state.friendlies.push(weak);
        state.hostiles.push(place(&state, 2, Side::Hostile, 420, 300));

        state.advance_tick(&[], &mut sink);

        assert!(state.friendlies.is_empty());
        assert!(state.hostiles.is_empty());
        assert_eq!(state.stats.losses, 1);
        assert_eq!(state.economy.balance(), 1);
    }

    #[test]
    fn test_one_friendly_fights_two_hostiles_in_one_tick() {
        let mut state = MatchState::default();
        let mut sink = RecordingSink::new();

        state.friendlies.push(place(&state, 1, Side::Friendly, 400, 300));
        state.hostiles.push(place(&state, 2, Side::Hostile, 420, 300));
        state.hostiles.push(place(&state, 3, Side::Hostile, 430, 300));

        let log = state.advance_tick(&[], &mut sink);

        // 100 -> 50 after the first duel, 50 -> 0 in the second (hostile strikes first)
        assert!(state.hostiles.is_empty());
        assert!(state.friendlies.is_empty());
        assert_eq!(state.stats.kills, 1);
        assert_eq!(state.stats.losses, 1);
        assert_eq!(log.count(|k| matches!(k, MatchEventKind::DuelResolved { .. })), 2);
    }

    #[test]
    fn test_hostile_engages_only_first_friendly() {
        let mut state = MatchState::default();
        let mut sink = RecordingSink::new();

        state.friendlies.push(place(&state, 1, Side::Friendly, 400, 300));
        state.friendlies.push(place(&state, 2, Side::Friendly, 410, 300));
        state.hostiles.push(place(&state, 3, Side::Hostile, 430, 300));

        state.advance_tick(&[], &mut sink);

        assert_eq!(state.friendlies.len(), 2);
        assert_eq!(state.friendlies[0].health, 50);
        assert_eq!(state.friendlies[1].health, 100);
    }

    #[test]
    fn test_friendly_scores_on_hostile_base() {
        let mut state = MatchState::default();
        let mut sink = RecordingSink::new();

        // Right edge 650 touches the base; after one step it overlaps
        state.friendlies.push(place(&state, 1, Side::Friendly, 600, 300));

        let log = state.advance_tick(&[], &mut sink);

        assert!(state.friendlies.is_empty());
        assert_eq!(state.hostile_base.health, 990);
        let hit = MatchEventKind::BaseHit {
            side: Side::Hostile,
            damage: 10,
            remaining: 990,
        };
        assert_eq!(log.count(|k| *k == hit), 1);
    }

    #[test]
    fn test_hostile_leak_is_silent() {
        let mut state = MatchState::default();
        let mut sink = RecordingSink::new();

        state.hostiles.push(place(&state, 1, Side::Hostile, 3, 0));

        state.advance_tick(&[], &mut sink);

        assert!(state.hostiles.is_empty());
        assert_eq!(state.stats.leaks, 1);
        assert_eq!(state.friendly_base.health, 1000);
        assert_eq!(state.economy.balance(), 1);
    }

    #[test]
    fn test_level_up_plays_cue() {
        use crate::core::config::EconomyConfig;

        let mut config = MatchConfig::default();
        config.economy = EconomyConfig {
            balance: 450,
            ..EconomyConfig::default()
        };
        let mut state = MatchState::new(config).unwrap();
        let mut sink = RecordingSink::new();

        state.advance_tick(&[InputEvent::LevelUpRequested], &mut sink);
        assert_eq!(state.economy.level(), 2);
        // 450 - 400 + rate 2
        assert_eq!(state.economy.balance(), 52);

        state.advance_tick(&[InputEvent::LevelUpRequested], &mut sink);
        assert_eq!(state.economy.level(), 2);

        assert_eq!(sink.sounds, vec![SoundId::LevelUpSuccess, SoundId::LevelUpFailure]);
    }

    #[test]
    fn test_projectile_lifecycle() {
        let mut state = MatchState::default();
        let mut sink = RecordingSink::new();

        state.advance_tick(&[InputEvent::FireProjectileRequested], &mut sink);
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.projectiles[0].bounds.left(), 155);

        // Left edge 155 + 5n; right edge exceeds 800 once left > 770
        let mut ticks = 1;
        while !state.projectiles.is_empty() {
            state.advance_tick(&[], &mut sink);
            ticks += 1;
            assert!(ticks < 500);
        }
        assert_eq!(state.stats.projectiles_expired, 1);
        // Advanced while left <= 770 (from 150: 125 moves), removed on the next tick
        assert_eq!(ticks, 126);
    }

    #[test]
    fn test_projectile_survives_leaving_vertically() {
        let mut config = MatchConfig::default();
        config.projectile.velocity_y = -50;
        let mut state = MatchState::new(config).unwrap();
        let mut sink = RecordingSink::new();

        state.advance_tick(&[InputEvent::FireProjectileRequested], &mut sink);
        idle(&mut state, &mut sink, 10);

        // 11 moves from (150, 295): well above the top edge, still inside horizontally
        assert_eq!(state.projectiles.len(), 1);
        let shot = state.projectiles[0].bounds;
        assert_eq!(shot.origin(), Point::new(205, -255));
        assert!(shot.bottom() < 0);
        assert_eq!(state.stats.projectiles_expired, 0);
    }

    #[test]
    fn test_quit_stops_tick_immediately() {
        let mut state = MatchState::default();
        let mut sink = RecordingSink::new();
        idle(&mut state, &mut sink, 10);

        let log = state.advance_tick(
            &[InputEvent::Quit, InputEvent::FireProjectileRequested],
            &mut sink,
        );

        assert!(state.is_finished());
        assert_eq!(state.outcome, MatchOutcome::Aborted);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.spawn_timer, 10);
        assert_eq!(state.economy.balance(), 10);
        assert_eq!(state.tick, 10);
        assert_eq!(log.count(|k| matches!(k, MatchEventKind::MatchEnded { .. })), 1);
    }

    #[test]
    fn test_simultaneous_base_falls_are_a_draw() {
        let mut state = MatchState::default();
        let mut sink = RecordingSink::new();

        state.friendly_base.health = 5;
        state.hostile_base.health = 10;
        state.hostiles.push(place(&state, 1, Side::Hostile, 150, 300));
        state.friendlies.push(place(&state, 2, Side::Friendly, 600, 300));

        state.advance_tick(&[], &mut sink);

        assert!(state.is_finished());
        assert_eq!(state.outcome, MatchOutcome::Draw);
    }
}
