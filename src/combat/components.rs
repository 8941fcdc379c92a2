//! Combat domain: components and combat-related state types.

use bevy::prelude::*;

use crate::content::{BossKind, CoinKind};

/// Health component for damageable entities
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    /// Apply a hit and report whether it was lethal.
    pub fn take_hit(&mut self, amount: f32) -> bool {
        self.take_damage(amount);
        self.is_dead()
    }

    pub fn heal(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.max - self.current);
        self.current += actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn percent(&self) -> f32 {
        self.current / self.max
    }
}

/// Invulnerability window - damage is ignored while `now < until`
#[derive(Component, Debug, Default)]
pub struct Invulnerable {
    pub until: f32,
}

impl Invulnerable {
    pub fn is_active(&self, now: f32) -> bool {
        now < self.until
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    Ignored,
    Applied,
    Killed,
}

/// Damage the player. A hit inside the invulnerability window, or on a
/// corpse, is ignored; otherwise the window restarts at `now`.
pub fn apply_player_damage(
    health: &mut Health,
    invulnerable: &mut Invulnerable,
    amount: f32,
    now: f32,
    window: f32,
) -> DamageOutcome {
    if health.is_dead() || invulnerable.is_active(now) {
        return DamageOutcome::Ignored;
    }
    health.take_damage(amount);
    invulnerable.until = now + window;
    if health.is_dead() {
        DamageOutcome::Killed
    } else {
        DamageOutcome::Applied
    }
}

/// Behavioural kind, fixed at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnemyKind {
    #[default]
    Normal,
    MiniBoss,
    Boss,
}

impl EnemyKind {
    pub fn is_boss(self) -> bool {
        !matches!(self, EnemyKind::Normal)
    }
}

impl From<BossKind> for EnemyKind {
    fn from(kind: BossKind) -> Self {
        match kind {
            BossKind::MiniBoss => EnemyKind::MiniBoss,
            BossKind::Boss => EnemyKind::Boss,
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct Enemy {
    /// Room whose clearance this enemy counts toward. Never changes.
    pub room_id: String,
    pub kind: EnemyKind,
    /// Script identity for bosses, e.g. "bernar"
    pub boss_tag: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AiState {
    /// Player out of detection range
    #[default]
    Idle,
    Pursuing,
    /// Winding up a strike that lands at `strike_at`
    Attacking { strike_at: f32 },
    /// Body against the player and standing still; bosses only
    Halted,
}

#[derive(Component, Debug, Default)]
pub struct EnemyAi {
    pub state: AiState,
    pub speed: f32,
    /// Side of the square body
    pub size: f32,
}

/// Marks bullets owned by the pool
#[derive(Component, Debug)]
pub struct PooledBullet;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BulletState {
    #[default]
    Inactive,
    Active,
    PendingReturn,
}

#[derive(Component, Debug, Clone)]
pub struct Bullet {
    pub damage: f32,
}

#[derive(Component, Debug, Clone)]
pub struct Weapon {
    /// Seconds between shots
    pub fire_rate: f32,
    pub cooldown_until: f32,
    pub muzzle_length: f32,
    /// Radians, counter-clockwise from +x
    pub rotation: f32,
}

impl Weapon {
    pub fn new(fire_rate: f32, muzzle_length: f32) -> Self {
        Self {
            fire_rate,
            cooldown_until: 0.0,
            muzzle_length,
            rotation: 0.0,
        }
    }

    pub fn muzzle(&self, origin: Vec2) -> Vec2 {
        origin + Vec2::from_angle(self.rotation) * self.muzzle_length
    }

    /// Returns the muzzle position and angle for a new bullet, or `None`
    /// while cooling down.
    pub fn try_fire(&mut self, now: f32, origin: Vec2) -> Option<(Vec2, f32)> {
        if now <= self.cooldown_until {
            return None;
        }
        self.cooldown_until = now + self.fire_rate;
        Some((self.muzzle(origin), self.rotation))
    }
}

/// Weak back-reference from a weapon to the entity carrying it.
#[derive(Component, Debug, Clone, Copy)]
pub struct HeldBy(pub Entity);

#[derive(Component, Debug, Default)]
pub struct EquippedWeapon(pub Option<Entity>);

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum Pickup {
    Coin(CoinKind),
    PowerUp { heal: f32 },
    Weapon,
}
