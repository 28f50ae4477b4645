use serde::{Deserialize, Serialize};

use crate::core::types::{Side, Tick, UnitId};
use crate::lane::execution::MatchOutcome;

/// Log entry for match events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEvent {
    pub tick: Tick,
    pub kind: MatchEventKind,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MatchEventKind {
    UnitSpawned {
        unit_id: UnitId,
        side: Side,
    },
    SpawnRejected {
        balance: u32,
        cost: u32,
    },
    ProjectileFired,
    ProjectileExpired,
    LevelUp {
        level: u32,
    },
    LevelUpRejected,
    DuelResolved {
        friendly: UnitId,
        hostile: UnitId,
        survivor: Side,
        exchanges: u32,
    },
    BaseHit {
        side: Side,
        damage: i32,
        remaining: i32,
    },
    HostileLeaked {
        unit_id: UnitId,
    },
    MatchEnded {
        outcome: MatchOutcome,
    },
}

/// Events produced by a single tick
#[derive(Debug, Clone, Default)]
pub struct MatchEventLog {
    pub events: Vec<MatchEvent>,
}

impl MatchEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: MatchEventKind, description: String, tick: Tick) {
        tracing::debug!(tick, "{}", description);
        self.events.push(MatchEvent {
            tick,
            kind,
            description,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchEvent> {
        self.events.iter()
    }

    pub fn count(&self, predicate: impl Fn(&MatchEventKind) -> bool) -> usize {
        self.events.iter().filter(|e| predicate(&e.kind)).count()
    }
}
