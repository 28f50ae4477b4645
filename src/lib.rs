//! Lane Battle - Two-Base Lane Battle Simulation

pub mod core;
pub mod economy;
pub mod lane;
pub mod presentation;
