/// The fixed-step frame: one call to `tick` per 60th of a second.
///
/// Functions here read the current `GameState` and hand back a new one;
/// the injected RNG is the only thing they mutate.

use rand::Rng;
use tracing::{debug, info};

use crate::collision::resolve_collisions;
use crate::dispatch::{apply_events, check_terminal};
use crate::entities::{Boss, GameState, GameStatus, Player, SpawnTimers, INITIAL_BOSS_FIRE_INTERVAL};
use crate::events::{FrameInput, SoundCue};
use crate::physics::{advance_projectiles, move_boss, move_player};
use crate::spawn::{roll_boss_direction, run_boss_fire};

/// Result of one frame: the new state and the sound cues it produced,
/// in the order they happened.
#[derive(Clone, Debug)]
pub struct FrameOutcome {
    pub state: GameState,
    pub cues: Vec<SoundCue>,
}

impl FrameOutcome {
    pub fn is_over(&self) -> bool {
        self.state.status.is_terminal()
    }
}

/// Build the state for a fresh match.
pub fn init_state() -> GameState {
    GameState {
        player: Player::new(),
        boss: Boss::new(),
        timers: SpawnTimers::default(),
        boss_fire_interval: INITIAL_BOSS_FIRE_INTERVAL,
        status: GameStatus::Running,
        frame: 0,
    }
}

/// Advance the match by one frame.
///
/// Order: input events, boss direction, boss motion, boss fire decision,
/// player motion, projectile motion, collisions, collision events, and
/// finally the terminal check.
///
/// A bullet fired this frame leaves from the ship's position before it
/// moves and travels with the rest.  A volley leaves from the boss's
/// position after it moves.  A finished match is returned unchanged.
pub fn tick(state: &GameState, mut input: FrameInput, rng: &mut impl Rng) -> FrameOutcome {
    if state.status.is_terminal() {
        return FrameOutcome {
            state: state.clone(),
            cues: Vec::new(),
        };
    }

    let (state, mut cues) = apply_events(state, std::mem::take(&mut input.events));

    let state = roll_boss_direction(&state, rng);
    let state = move_boss(&state);
    let (state, fire_cues) = run_boss_fire(&state, rng);
    cues.extend(fire_cues);

    let state = move_player(&state, &input);
    let state = advance_projectiles(&state);
    let (state, hits) = resolve_collisions(&state);

    let (state, hit_cues) = apply_events(&state, hits);
    cues.extend(hit_cues);

    let status = check_terminal(&state);
    match status {
        GameStatus::Running => {}
        GameStatus::Closed => debug!(frame = state.frame + 1, "match closed"),
        GameStatus::PlayerWon | GameStatus::PlayerLost => info!(
            ?status,
            frame = state.frame + 1,
            player_health = state.player.health,
            boss_health = state.boss.health,
            "match over"
        ),
    }

    FrameOutcome {
        state: GameState {
            status,
            frame: state.frame + 1,
            ..state
        },
        cues,
    }
}
