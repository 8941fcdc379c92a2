//! Data definitions for all RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. Level coordinates are world units in a y-up frame:
//! `Top` is the +y edge of a room.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Levels (levels.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub id: String,
    pub name: String,
    pub start_room: String,
    pub rooms: Vec<RoomDef>,
    pub corridors: Vec<CorridorDef>,
    #[serde(default)]
    pub doors: Vec<DoorDef>,
    #[serde(default)]
    pub gates: Vec<GateDef>,
    /// Evaluated in order every tick; earlier triggers win ties.
    #[serde(default)]
    pub triggers: Vec<TriggerDef>,
    #[serde(default)]
    pub warning_zones: Vec<WarningZoneDef>,
    #[serde(default)]
    pub dialogues: Vec<DialogueDef>,
}

impl LevelDef {
    pub fn room(&self, id: &str) -> Option<&RoomDef> {
        self.rooms.iter().find(|room| room.id == id)
    }

    /// Every action reachable from this level's scripts, including the
    /// confirm actions nested inside spawned interactables.
    pub fn all_actions(&self) -> Vec<&LevelAction> {
        let mut out = Vec::new();
        for gate in &self.gates {
            collect_actions(&gate.actions, &mut out);
        }
        for trigger in &self.triggers {
            collect_actions(&trigger.actions, &mut out);
        }
        out
    }
}

fn collect_actions<'a>(actions: &'a [LevelAction], out: &mut Vec<&'a LevelAction>) {
    for action in actions {
        out.push(action);
        if let LevelAction::SpawnInteractable(def) = action {
            collect_actions(&def.on_confirm, out);
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RoomDef {
    pub id: String,
    pub center: (f32, f32),
    pub openings: Vec<Opening>,
    #[serde(default)]
    pub initially_cleared: bool,
    /// Spawned at level start at random spots in the room's central half.
    #[serde(default)]
    pub enemies: Vec<SpawnEntry>,
    /// Reward table, spawned once when the room is cleared.
    #[serde(default)]
    pub coins: Vec<CoinEntry>,
    /// Coins lying in the room from the start.
    #[serde(default)]
    pub starting_coins: Vec<CoinEntry>,
    #[serde(default)]
    pub power_ups: u32,
    /// Covered by an overlay until revealed by a script.
    #[serde(default)]
    pub fogged: bool,
}

impl RoomDef {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center.0, self.center.1)
    }

    pub fn has_opening(&self, opening: Opening) -> bool {
        self.openings.contains(&opening)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Opening {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpawnEntry {
    pub archetype: String,
    pub count: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CoinEntry {
    pub kind: CoinKind,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum CoinKind {
    Twitter,
    Threads,
    TikTok,
    Instagram,
    LinkedIn,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorridorDef {
    pub from: String,
    pub to: String,
    /// Generate entrance walls at the mouths of rooms that start uncleared.
    #[serde(default = "default_true")]
    pub entrance_walls: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Orientation {
    /// Tiles side by side along x; spans a vertical corridor.
    Horizontal,
    /// Tiles stacked along y; spans a horizontal corridor.
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DoorDef {
    pub id: String,
    pub center: (f32, f32),
    pub orientation: Orientation,
}

impl DoorDef {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center.0, self.center.1)
    }
}

// ============================================================================
// Scripting: gates, triggers and actions
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GateDef {
    pub id: String,
    pub when: GateCondition,
    pub actions: Vec<LevelAction>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum GateCondition {
    CoinsCollected(u32),
    RoomCleared(String),
    BossDefeated(String),
    ProjectDeployed,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TriggerDef {
    pub id: String,
    pub room: String,
    pub flag: TriggerFlag,
    pub region: TriggerRegion,
    #[serde(default)]
    pub requires_cleared: Option<String>,
    #[serde(default)]
    pub dialogue: Option<String>,
    /// Run after the dialogue is dismissed, or immediately without one.
    #[serde(default)]
    pub actions: Vec<LevelAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum TriggerFlag {
    Boss,
    Friend,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub enum TriggerRegion {
    /// Strictly inside the room bounds grown by `margin` on every side.
    InsideRoom { margin: f32 },
    /// Strictly inside one quadrant around the room center, unbounded outward.
    Quadrant(Quadrant),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Quadrant {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WarningZoneDef {
    pub id: String,
    pub center: (f32, f32),
    pub size: (f32, f32),
    pub min_coins: u32,
    pub message: String,
    pub rearm_secs: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DialogueDef {
    pub id: String,
    pub lines: Vec<DialogueLineDef>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DialogueLineDef {
    pub speaker: String,
    /// Swatch shown beside the line; lines without one show text only
    #[serde(default)]
    pub portrait: Option<(f32, f32, f32)>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum LevelAction {
    OpenDoor(String),
    /// Refused when the id was already opened this level.
    PlaceDoor(DoorDef),
    SpawnBoss(BossSpawnDef),
    SpawnInteractable(InteractableDef),
    SpawnFriend { room: String, offset: (f32, f32) },
    /// Spawns the room's coin reward table.
    SpawnRoomRewards(String),
    RevealRoom(String),
    Notify(String),
    ShowDialogue(String),
    DeployProject,
    CompleteLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum BossKind {
    MiniBoss,
    Boss,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BossSpawnDef {
    pub room: String,
    pub tag: String,
    pub kind: BossKind,
    pub archetype: String,
    pub health: f32,
    #[serde(default)]
    pub offset: (f32, f32),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct InteractableDef {
    pub room: String,
    #[serde(default)]
    pub offset: (f32, f32),
    pub prompt: String,
    pub hint: String,
    pub on_confirm: Vec<LevelAction>,
}

// ============================================================================
// Gameplay Defaults (gameplay_defaults.ron) - Single struct, not a list
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Resource)]
pub struct GameplayDefaults {
    pub schema_version: u32,
    pub player: PlayerDefaults,
    pub weapon: WeaponDefaults,
    pub enemy: EnemyDefaults,
    pub pickups: PickupDefaults,
    pub archetypes: Vec<ArchetypeDef>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerDefaults {
    pub speed: f32,
    pub size: f32,
    pub max_health: f32,
    pub invulnerability_secs: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeaponDefaults {
    pub fire_rate_secs: f32,
    pub muzzle_length: f32,
    pub bullet_speed: f32,
    pub bullet_damage: f32,
    pub bullet_size: f32,
    pub pool_capacity: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnemyDefaults {
    pub detection_range: f32,
    pub attack_range: f32,
    pub attack_tolerance: f32,
    pub windup_secs: f32,
    pub attack_damage: f32,
    pub contact_damage: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PickupDefaults {
    pub heal_amount: f32,
    pub coin_size: f32,
    pub power_up_size: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArchetypeDef {
    pub id: String,
    pub health: f32,
    pub speed: f32,
    pub size: f32,
    pub color: (f32, f32, f32),
}
