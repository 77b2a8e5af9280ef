/// Collision and expiry of projectiles.
///
/// Collections are rebuilt by filtering, never edited in place, so each
/// projectile is visited once and removed at most once per frame.

use tracing::trace;

use crate::entities::{Boss, Bullet, Collidable, GameState, Player, PowerUp, ARENA_WIDTH};
use crate::events::GameEvent;

/// Fate of a single projectile this frame.
enum Fate {
    Keep,
    Hit,
    Expired,
}

/// Check every live projectile against its target and the arena edges.
///
/// A projectile that hits is removed with one event; only a projectile
/// that did not hit is checked against the edge.  Returns the pruned
/// state together with the events in detection order: boss hits, then
/// player hits, then power-up pickups.
pub fn resolve_collisions(state: &GameState) -> (GameState, Vec<GameEvent>) {
    let mut events = Vec::new();

    let player_bullets: Vec<Bullet> = state
        .player
        .bullets
        .iter()
        .filter(|&b| {
            let fate = if b.collides_with(&state.boss) {
                Fate::Hit
            } else if b.rect.x > ARENA_WIDTH {
                Fate::Expired
            } else {
                Fate::Keep
            };
            settle(fate, GameEvent::BossHit, &mut events)
        })
        .cloned()
        .collect();

    let boss_bullets: Vec<Bullet> = state
        .boss
        .bullets
        .iter()
        .filter(|&b| {
            let fate = if b.collides_with(&state.player) {
                Fate::Hit
            } else if b.rect.x < 0 {
                Fate::Expired
            } else {
                Fate::Keep
            };
            settle(fate, GameEvent::PlayerHit, &mut events)
        })
        .cloned()
        .collect();

    let power_ups: Vec<PowerUp> = state
        .boss
        .power_ups
        .iter()
        .filter(|&p| {
            let fate = if p.collides_with(&state.player) {
                Fate::Hit
            } else if p.rect.x < 0 {
                Fate::Expired
            } else {
                Fate::Keep
            };
            settle(fate, GameEvent::PlayerPowerUp, &mut events)
        })
        .cloned()
        .collect();

    let next = GameState {
        player: Player {
            bullets: player_bullets,
            ..state.player.clone()
        },
        boss: Boss {
            bullets: boss_bullets,
            power_ups,
            ..state.boss.clone()
        },
        ..state.clone()
    };
    (next, events)
}

/// Record the event for a hit; returns whether the projectile survives.
fn settle(fate: Fate, on_hit: GameEvent, events: &mut Vec<GameEvent>) -> bool {
    match fate {
        Fate::Keep => true,
        Fate::Hit => {
            trace!(event = ?on_hit, "projectile hit");
            events.push(on_hit);
            false
        }
        Fate::Expired => false,
    }
}
