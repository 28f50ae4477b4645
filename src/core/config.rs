//! Match configuration with documented defaults
//!
//! Every tunable of a match lives here and is passed explicitly to the
//! simulation. The defaults reproduce the reference tuning; a TOML file may
//! override any subset of fields.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{LaneError, Result};
use crate::core::types::{Rect, Side, Size};
use crate::lane::constants::*;

/// Configuration for a single match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub playfield: PlayfieldConfig,
    pub friendly: UnitProfile,
    pub hostile: UnitProfile,
    /// Bounding box shared by both unit variants
    pub unit_size: Size,
    pub base: BaseConfig,
    pub projectile: ProjectileConfig,
    pub economy: EconomyConfig,
    pub rules: RulesConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayfieldConfig {
    pub width: i32,
    pub height: i32,
}

impl PlayfieldConfig {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Vertical coordinate every unit walks along
    pub fn lane_y(&self) -> i32 {
        self.height / 2
    }
}

impl Default for PlayfieldConfig {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

/// Stats for one unit variant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitProfile {
    pub health: i32,
    pub attack: i32,
    /// Horizontal pixels per tick; sign gives direction
    pub velocity: i32,
}

impl UnitProfile {
    pub fn friendly() -> Self {
        Self {
            health: FRIENDLY_HEALTH,
            attack: FRIENDLY_ATTACK,
            velocity: FRIENDLY_VELOCITY,
        }
    }

    pub fn hostile() -> Self {
        Self {
            health: HOSTILE_HEALTH,
            attack: HOSTILE_ATTACK,
            velocity: HOSTILE_VELOCITY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseConfig {
    pub size: Size,
    pub health: i32,
    /// Horizontal gap between each base and its screen edge
    pub edge_margin: i32,
}

impl Default for BaseConfig {
    fn default() -> Self {
        Self {
            size: Size::new(BASE_SIZE, BASE_SIZE),
            health: BASE_MAX_HEALTH,
            edge_margin: BASE_EDGE_MARGIN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    pub size: Size,
    pub velocity_x: i32,
    pub velocity_y: i32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            size: Size::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            velocity_x: PROJECTILE_VELOCITY_X,
            velocity_y: PROJECTILE_VELOCITY_Y,
        }
    }
}

/// Starting state and growth rules of the economy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    /// Currency credited per tick at level 1
    pub rate: u32,
    pub balance: u32,
    pub cap: u32,
    /// Cap increase granted by each level-up
    pub cap_step: u32,
    pub level: u32,
    pub max_level: u32,
    /// Level-up cost as a percentage of the current cap
    pub level_up_cost_percent: u32,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            rate: ECONOMY_INITIAL_RATE,
            balance: ECONOMY_INITIAL_BALANCE,
            cap: ECONOMY_INITIAL_CAP,
            cap_step: ECONOMY_CAP_STEP,
            level: 1,
            max_level: ECONOMY_MAX_LEVEL,
            level_up_cost_percent: LEVEL_UP_COST_PERCENT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub spawn_interval_ticks: u32,
    pub spawn_cost: u32,
    pub kill_bonus: u32,
    pub tick_rate: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            spawn_interval_ticks: HOSTILE_SPAWN_INTERVAL_TICKS,
            spawn_cost: FRIENDLY_SPAWN_COST,
            kill_bonus: KILL_BONUS,
            tick_rate: TICK_RATE,
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            playfield: PlayfieldConfig::default(),
            friendly: UnitProfile::friendly(),
            hostile: UnitProfile::hostile(),
            unit_size: Size::new(UNIT_SIZE, UNIT_SIZE),
            base: BaseConfig::default(),
            projectile: ProjectileConfig::default(),
            economy: EconomyConfig::default(),
            rules: RulesConfig::default(),
        }
    }
}

impl MatchConfig {
    /// Parse a TOML document; missing fields keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: MatchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!("Loaded match config from {}", path.display());
        Ok(config)
    }

    pub fn profile(&self, side: Side) -> &UnitProfile {
        match side {
            Side::Friendly => &self.friendly,
            Side::Hostile => &self.hostile,
        }
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(LaneError::InvalidConfig(msg));

        if !self.playfield.size().is_positive() {
            return invalid(format!(
                "playfield must be positive, got {}x{}",
                self.playfield.width, self.playfield.height
            ));
        }
        if !self.unit_size.is_positive()
            || !self.base.size.is_positive()
            || !self.projectile.size.is_positive()
        {
            return invalid("unit, base and projectile sizes must be positive".into());
        }
        // i64: margins or widths near i32::MAX overflow the sum
        let margin = i64::from(self.base.edge_margin);
        let base_width = i64::from(self.base.size.width);
        if margin < 0 || 2 * (margin + base_width) > i64::from(self.playfield.width) {
            return invalid(format!(
                "bases ({} wide, margin {}) do not fit a {} wide playfield",
                self.base.size.width, self.base.edge_margin, self.playfield.width
            ));
        }
        if self.base.size.height > self.playfield.height
            || self.unit_size.height > self.playfield.height
        {
            return invalid("bases and units must fit the playfield height".into());
        }
        if self.unit_size.width > self.base.size.width {
            return invalid("units must not be wider than a base".into());
        }
        if self.base.health <= 0 {
            return invalid(format!("base health must be positive, got {}", self.base.health));
        }

        for (side, profile) in [(Side::Friendly, &self.friendly), (Side::Hostile, &self.hostile)] {
            if profile.health <= 0 {
                return invalid(format!("{:?} health must be positive", side));
            }
            if profile.attack < 0 {
                return invalid(format!("{:?} attack must not be negative", side));
            }
        }
        if self.friendly.attack == 0 && self.hostile.attack == 0 {
            return invalid("at least one unit variant must deal damage".into());
        }
        if self.friendly.velocity <= 0 {
            return invalid("friendly units must move right (velocity > 0)".into());
        }
        if self.hostile.velocity >= 0 {
            return invalid("hostile units must move left (velocity < 0)".into());
        }

        let width = self.playfield.width.unsigned_abs();
        let height = self.playfield.height.unsigned_abs();
        if self.friendly.velocity.unsigned_abs() > width
            || self.hostile.velocity.unsigned_abs() > width
            || self.projectile.velocity_x.unsigned_abs() > width
            || self.projectile.velocity_y.unsigned_abs() > height
        {
            return invalid("velocities must not exceed the playfield per tick".into());
        }

        let rules = &self.rules;
        if rules.spawn_interval_ticks == 0 {
            return invalid("spawn interval must be at least one tick".into());
        }
        if rules.spawn_cost == 0 {
            return invalid("spawn cost must be positive".into());
        }
        if rules.tick_rate == 0 {
            return invalid("tick rate must be positive".into());
        }

        let economy = &self.economy;
        if economy.balance > economy.cap {
            return invalid(format!(
                "initial balance ({}) exceeds cap ({})",
                economy.balance, economy.cap
            ));
        }
        if economy.level == 0 || economy.level > economy.max_level {
            return invalid(format!(
                "level must be within 1..={}, got {}",
                economy.max_level, economy.level
            ));
        }
        if economy.level_up_cost_percent == 0 || economy.level_up_cost_percent > 100 {
            return invalid(format!(
                "level-up cost percent must be within 1..=100, got {}",
                economy.level_up_cost_percent
            ));
        }

        Ok(())
    }
}
