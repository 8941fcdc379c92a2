//! Combat domain: enemy AI updates and strikes.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::ai::state::{AiDirective, PlayerSighting, step_ai};
use crate::combat::components::{Enemy, EnemyAi, Health};
use crate::combat::events::PlayerHitEvent;
use crate::combat::resources::EnemyTuning;
use crate::movement::{Player, PlayerTuning};

pub(crate) fn update_enemy_ai(
    time: Res<Time>,
    tuning: Res<EnemyTuning>,
    player_tuning: Res<PlayerTuning>,
    player_query: Query<(&Transform, &Health), With<Player>>,
    mut enemy_query: Query<
        (&Transform, &Enemy, &Health, &mut EnemyAi, &mut LinearVelocity),
        Without<Player>,
    >,
    mut hits: MessageWriter<PlayerHitEvent>,
) {
    let now = time.elapsed_secs();

    let Ok((player_transform, player_health)) = player_query.single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (transform, enemy, health, mut ai, mut velocity) in &mut enemy_query {
        // Corpses waiting for despawn must not strike
        if health.is_dead() {
            velocity.0 = Vec2::ZERO;
            continue;
        }

        let to_player = player_pos - transform.translation.truncate();
        let sighting = PlayerSighting {
            offset: to_player,
            reach: (ai.size + player_tuning.size) / 2.0,
        };
        let (next, directive) = step_ai(ai.state, enemy.kind, sighting, now, &tuning);
        ai.state = next;

        match directive {
            AiDirective::MoveToward => {
                velocity.0 = to_player.normalize_or_zero() * ai.speed;
            }
            AiDirective::Hold => {
                velocity.0 = Vec2::ZERO;
            }
            AiDirective::Strike => {
                velocity.0 = Vec2::ZERO;
                if !player_health.is_dead() {
                    debug!("[COMBAT] Enemy in '{}' strikes the player", enemy.room_id);
                    hits.write(PlayerHitEvent {
                        amount: tuning.attack_damage,
                    });
                }
            }
        }
    }
}
