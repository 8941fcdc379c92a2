//! Combat domain: enemy AI state machine and its driving system.

pub(crate) mod enemy;
mod state;

pub(crate) use enemy::update_enemy_ai;
pub use state::{AiDirective, PlayerSighting, step_ai};
