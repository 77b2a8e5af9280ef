/// Event dispatcher: applies a frame's events to the match and decides
/// when it is over.

use tracing::debug;

use crate::entities::{
    GameState, GameStatus, BOSS_FIRE_INTERVAL_STEP, MIN_BOSS_FIRE_INTERVAL,
};
use crate::events::{GameEvent, SoundCue};

/// Consume `events` in order, returning the updated state and the sound
/// cues to play.  The list is taken by value so it cannot be applied twice.
pub fn apply_events(state: &GameState, events: Vec<GameEvent>) -> (GameState, Vec<SoundCue>) {
    let mut next = state.clone();
    let mut cues = Vec::new();

    for event in events {
        match event {
            GameEvent::PlayerHit => {
                next.player.health -= 1;
                debug!(health = next.player.health, "player hit");
                cues.push(SoundCue::PlayerHit);
            }
            GameEvent::BossHit => {
                next.boss.health -= 1;
                next.boss_fire_interval = (next.boss_fire_interval - BOSS_FIRE_INTERVAL_STEP)
                    .max(MIN_BOSS_FIRE_INTERVAL);
                debug!(
                    health = next.boss.health,
                    fire_interval = next.boss_fire_interval,
                    "boss hit"
                );
                cues.push(SoundCue::BossHit);
            }
            GameEvent::PlayerPowerUp => {
                next.player.max_bullets += 1;
                debug!(max_bullets = next.player.max_bullets, "power-up collected");
                cues.push(SoundCue::PowerUp);
            }
            GameEvent::FireRequested => {
                // Ignored while every bullet slot is in flight
                if next.player.can_fire() {
                    let bullet = next.player.muzzle_bullet();
                    next.player.bullets.push(bullet);
                    cues.push(SoundCue::PlayerFire);
                }
            }
            GameEvent::Quit => {
                next.status = GameStatus::Closed;
            }
        }
    }

    (next, cues)
}

/// Where the match stands after this frame's events.  A closed window
/// wins over everything; a loss is checked before a win.
pub fn check_terminal(state: &GameState) -> GameStatus {
    if state.status == GameStatus::Closed {
        GameStatus::Closed
    } else if state.player.health <= 0 {
        GameStatus::PlayerLost
    } else if state.boss.health <= 0 {
        GameStatus::PlayerWon
    } else {
        GameStatus::Running
    }
}
