//! Rooms domain: doors and the one-shot gates that open them.

use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::content::{GateCondition, GateDef, LevelAction};

/// Door ids opened this level. An opened id is never placed again.
#[derive(Resource, Debug, Default)]
pub struct DoorLedger {
    opened: HashSet<String>,
}

impl DoorLedger {
    /// Record an opening; false when the door was already open.
    pub fn open(&mut self, id: &str) -> bool {
        self.opened.insert(id.to_string())
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.opened.contains(id)
    }

    pub fn can_place(&self, id: &str) -> bool {
        !self.is_open(id)
    }

    pub fn opened(&self) -> impl Iterator<Item = &String> {
        self.opened.iter()
    }
}

/// Something that happened this frame which gates may be waiting on.
#[derive(Debug, Clone, Copy)]
pub enum GateFact<'a> {
    Coins(u32),
    RoomCleared(&'a str),
    BossDefeated(&'a str),
    ProjectDeployed,
}

impl GateCondition {
    pub fn is_met_by(&self, fact: GateFact) -> bool {
        match (self, fact) {
            (GateCondition::CoinsCollected(needed), GateFact::Coins(total)) => total >= *needed,
            (GateCondition::RoomCleared(room), GateFact::RoomCleared(cleared)) => room == cleared,
            (GateCondition::BossDefeated(tag), GateFact::BossDefeated(defeated)) => {
                tag == defeated
            }
            (GateCondition::ProjectDeployed, GateFact::ProjectDeployed) => true,
            _ => false,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct GateBook {
    gates: Vec<GateDef>,
    fired: HashSet<String>,
}

impl GateBook {
    pub fn new(gates: Vec<GateDef>) -> Self {
        Self {
            gates,
            fired: HashSet::default(),
        }
    }

    pub fn has_fired(&self, id: &str) -> bool {
        self.fired.contains(id)
    }

    pub fn fired(&self) -> impl Iterator<Item = &String> {
        self.fired.iter()
    }

    /// Fire every unfired gate satisfied by `fact`, in definition order,
    /// and return their actions.
    pub fn fire_matching(&mut self, fact: GateFact) -> Vec<LevelAction> {
        let mut actions = Vec::new();
        for gate in &self.gates {
            if self.fired.contains(&gate.id) || !gate.when.is_met_by(fact) {
                continue;
            }
            info!("[GATE] '{}' fired", gate.id);
            self.fired.insert(gate.id.clone());
            actions.extend(gate.actions.iter().cloned());
        }
        actions
    }
}
