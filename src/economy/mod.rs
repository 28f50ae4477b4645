//! Economy - currency accrual, spending and leveling
//!
//! The economy gates every player action that costs something. All
//! operations are total: a rejected spend or level-up leaves the state
//! untouched and reports `false`.

pub mod treasury;

pub use treasury::Economy;
