/// Frame-counted boss behaviour: direction re-rolls and the fire /
/// power-up decision.  All randomness comes through the injected RNG.
///
/// The two halves run on either side of the boss's move, so a volley
/// always leaves from where the boss stands at the end of the frame.

use rand::Rng;
use tracing::trace;

use crate::entities::{BossDirection, GameState, BOSS_DIRECTION_INTERVAL, POWER_UP_ODDS};
use crate::events::SoundCue;

/// Count one frame on the direction timer and re-roll the heading when it
/// runs out.
pub fn roll_boss_direction(state: &GameState, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    next.timers.direction += 1;

    if next.timers.direction >= BOSS_DIRECTION_INTERVAL {
        next.timers.direction = 0;
        next.boss.direction = if rng.gen_bool(0.5) {
            BossDirection::Up
        } else {
            BossDirection::Down
        };
        trace!(direction = ?next.boss.direction, "boss direction re-rolled");
    }

    next
}

/// Count one frame on the fire timer.  When it reaches the current
/// interval the boss either fires a volley or, failing that coin flip,
/// may drop a power-up.
pub fn run_boss_fire(state: &GameState, rng: &mut impl Rng) -> (GameState, Vec<SoundCue>) {
    let mut next = state.clone();
    let mut cues = Vec::new();
    next.timers.fire += 1;

    if next.timers.fire >= next.boss_fire_interval {
        next.timers.fire = 0;
        if rng.gen_bool(0.5) {
            let volley = next.boss.spread_volley();
            next.boss.bullets.extend(volley);
            cues.push(SoundCue::BossFire);
        } else if rng.gen_ratio(1, POWER_UP_ODDS) {
            let power_up = next.boss.drop_power_up();
            trace!(y = power_up.rect.y, "power-up dropped");
            next.boss.power_ups.push(power_up);
        }
    }

    (next, cues)
}
