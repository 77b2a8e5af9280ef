/// Per-frame motion.  A step that would leave the arena is skipped for
/// that frame; nothing is clamped or bounced.

use crate::entities::{
    Boss, BossDirection, Bullet, GameState, Player, PowerUp, ARENA_HEIGHT, BOSS_BULLET_SPEED,
    BOSS_SPEED, PLAYER_BULLET_SPEED, PLAYER_SPEED, POWER_UP_SPEED,
};
use crate::events::FrameInput;
use crate::geometry::Rect;

fn step_up(rect: &Rect, speed: i32) -> Option<Rect> {
    if rect.y - speed > 0 {
        Some(rect.offset(0, -speed))
    } else {
        None
    }
}

fn step_down(rect: &Rect, speed: i32) -> Option<Rect> {
    if rect.bottom() + speed < ARENA_HEIGHT {
        Some(rect.offset(0, speed))
    } else {
        None
    }
}

/// Move the ship along y according to the held keys.  Holding both keys
/// applies both steps, which cancel out away from the walls.
pub fn move_player(state: &GameState, input: &FrameInput) -> GameState {
    let mut rect = state.player.rect;
    if input.up_held {
        rect = step_up(&rect, PLAYER_SPEED).unwrap_or(rect);
    }
    if input.down_held {
        rect = step_down(&rect, PLAYER_SPEED).unwrap_or(rect);
    }
    GameState {
        player: Player {
            rect,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

pub fn move_boss(state: &GameState) -> GameState {
    let current = state.boss.rect;
    let rect = match state.boss.direction {
        BossDirection::Up => step_up(&current, BOSS_SPEED),
        BossDirection::Down => step_down(&current, BOSS_SPEED),
    }
    .unwrap_or(current);
    GameState {
        boss: Boss {
            rect,
            ..state.boss.clone()
        },
        ..state.clone()
    }
}

/// Player bullets fly right; boss bullets and power-ups fly left.
pub fn advance_projectiles(state: &GameState) -> GameState {
    let player_bullets: Vec<Bullet> = state
        .player
        .bullets
        .iter()
        .map(|b| Bullet {
            rect: b.rect.offset(PLAYER_BULLET_SPEED, 0),
        })
        .collect();

    let boss_bullets: Vec<Bullet> = state
        .boss
        .bullets
        .iter()
        .map(|b| Bullet {
            rect: b.rect.offset(-BOSS_BULLET_SPEED, 0),
        })
        .collect();

    let power_ups: Vec<PowerUp> = state
        .boss
        .power_ups
        .iter()
        .map(|p| PowerUp {
            rect: p.rect.offset(-POWER_UP_SPEED, 0),
        })
        .collect();

    GameState {
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
    }
}
