use serde::{Deserialize, Serialize};

use crate::core::config::EconomyConfig;

/// Match-wide currency pool
///
/// The balance is clamped to the cap on every credit, and the level-up cost
/// is tied to the cap so upgrades get steeper as the pool grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Economy {
    rate: u32,
    balance: u32,
    cap: u32,
    cap_step: u32,
    level: u32,
    max_level: u32,
    level_up_cost: u32,
    cost_percent: u32,
}

impl Economy {
    pub fn new(config: &EconomyConfig) -> Self {
        Self {
            rate: config.rate,
            balance: config.balance.min(config.cap),
            cap: config.cap,
            cap_step: config.cap_step,
            level: config.level,
            max_level: config.max_level,
            level_up_cost: cost_for_cap(config.cap, config.level_up_cost_percent),
            cost_percent: config.level_up_cost_percent,
        }
    }

    pub fn rate(&self) -> u32 {
        self.rate
    }

    pub fn balance(&self) -> u32 {
        self.balance
    }

    pub fn cap(&self) -> u32 {
        self.cap
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    pub fn level_up_cost(&self) -> u32 {
        self.level_up_cost
    }

    pub fn is_max_level(&self) -> bool {
        self.level >= self.max_level
    }

    /// Per-tick income
    pub fn accrue(&mut self) {
        self.credit(self.rate);
    }

    /// Reward for a friendly unit winning a duel
    pub fn credit_kill(&mut self, bonus: u32) {
        self.credit(bonus);
    }

    fn credit(&mut self, amount: u32) {
        self.balance = self.balance.saturating_add(amount).min(self.cap);
    }

    pub fn can_afford(&self, amount: u32) -> bool {
        self.balance >= amount
    }

    pub fn try_spend(&mut self, amount: u32) -> bool {
        if !self.can_afford(amount) {
            return false;
        }
        self.balance -= amount;
        true
    }

    /// Raise the level, paying the current cost.
    ///
    /// On success the rate grows by one, the cap by `cap_step`, and the next
    /// cost is recomputed from the new cap.
    pub fn try_level_up(&mut self) -> bool {
        if self.is_max_level() || !self.can_afford(self.level_up_cost) {
            return false;
        }

        self.balance -= self.level_up_cost;
        self.rate = self.rate.saturating_add(1);
        self.cap = self.cap.saturating_add(self.cap_step);
        self.level += 1;
        self.level_up_cost = cost_for_cap(self.cap, self.cost_percent);
        true
    }
}

impl Default for Economy {
    fn default() -> Self {
        Self::new(&EconomyConfig::default())
    }
}

fn cost_for_cap(cap: u32, percent: u32) -> u32 {
    (u64::from(cap) * u64::from(percent) / 100) as u32
}
