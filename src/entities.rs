/// All game entity types: plain data plus position accessors.

use crate::geometry::Rect;

// ── Arena & tuning ───────────────────────────────────────────────────────────

pub const ARENA_WIDTH: i32 = 1200;
pub const ARENA_HEIGHT: i32 = 800;
pub const FPS: u64 = 60;

pub const PLAYER_SPEED: i32 = 8;
pub const PLAYER_BULLET_SPEED: i32 = 8;
pub const PLAYER_HEALTH: i32 = 3;
pub const INITIAL_MAX_BULLETS: usize = 2;

pub const BOSS_SPEED: i32 = 10;
pub const BOSS_BULLET_SPEED: i32 = 10;
pub const POWER_UP_SPEED: i32 = 10;
pub const BOSS_HEALTH: i32 = 10;

/// Frames between boss fire-or-power-up decisions at the start of a match.
pub const INITIAL_BOSS_FIRE_INTERVAL: i32 = 45;
/// The fire interval never drops below this, however often the boss is hit.
pub const MIN_BOSS_FIRE_INTERVAL: i32 = 1;
pub const BOSS_FIRE_INTERVAL_STEP: i32 = 2;
/// Frames between re-rolls of the boss's vertical direction.
pub const BOSS_DIRECTION_INTERVAL: u32 = 20;
/// A skipped volley drops a power-up with probability 1 / POWER_UP_ODDS.
pub const POWER_UP_ODDS: u32 = 10;

pub const PLAYER_WIDTH: i32 = 100;
pub const PLAYER_HEIGHT: i32 = 100;
pub const PLAYER_X: i32 = 10;

pub const BOSS_WIDTH: i32 = 75;
pub const BOSS_HEIGHT: i32 = 100;
pub const BOSS_X: i32 = ARENA_WIDTH - BOSS_WIDTH - 10;

pub const PLAYER_BULLET_SIZE: i32 = 10;
pub const BOSS_BULLET_SIZE: i32 = 16;
pub const POWER_UP_SIZE: i32 = 20;

// ── Capabilities ─────────────────────────────────────────────────────────────

/// Anything that occupies a box in the arena.
pub trait Positioned {
    fn rect(&self) -> Rect;

    fn position(&self) -> (i32, i32) {
        self.rect().position()
    }
}

pub trait Collidable {
    fn collides_with<T: Positioned>(&self, other: &T) -> bool;
}

impl<P: Positioned> Collidable for P {
    fn collides_with<T: Positioned>(&self, other: &T) -> bool {
        self.rect().intersects(&other.rect())
    }
}

// ── Projectiles ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub rect: Rect,
}

impl Bullet {
    pub fn new(x: i32, y: i32, size: i32) -> Self {
        Bullet {
            rect: Rect::new(x, y, size, size),
        }
    }
}

impl Positioned for Bullet {
    fn rect(&self) -> Rect {
        self.rect
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub rect: Rect,
}

impl PowerUp {
    pub fn new(x: i32, y: i32) -> Self {
        PowerUp {
            rect: Rect::new(x, y, POWER_UP_SIZE, POWER_UP_SIZE),
        }
    }
}

impl Positioned for PowerUp {
    fn rect(&self) -> Rect {
        self.rect
    }
}

// ── Player & boss ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    /// Can dip below zero for the frame in which the match ends.
    pub health: i32,
    pub max_bullets: usize,
    pub bullets: Vec<Bullet>,
}

impl Player {
    pub fn new() -> Self {
        Player {
            rect: Rect::new(
                PLAYER_X,
                ARENA_HEIGHT / 2 - PLAYER_HEIGHT / 2,
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
            ),
            health: PLAYER_HEALTH,
            max_bullets: INITIAL_MAX_BULLETS,
            bullets: Vec::new(),
        }
    }

    pub fn can_fire(&self) -> bool {
        self.bullets.len() < self.max_bullets
    }

    /// A fresh bullet leaving the ship's nose.
    pub fn muzzle_bullet(&self) -> Bullet {
        Bullet::new(
            self.rect.w,
            self.rect.y + self.rect.h / 2 - 8,
            PLAYER_BULLET_SIZE,
        )
    }
}

impl Default for Player {
    fn default() -> Self {
        Player::new()
    }
}

impl Positioned for Player {
    fn rect(&self) -> Rect {
        self.rect
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BossDirection {
    Up,
    Down,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Boss {
    pub rect: Rect,
    pub health: i32,
    pub direction: BossDirection,
    pub bullets: Vec<Bullet>,
    pub power_ups: Vec<PowerUp>,
}

impl Boss {
    pub fn new() -> Self {
        Boss {
            rect: Rect::new(
                BOSS_X,
                ARENA_HEIGHT / 2 - BOSS_HEIGHT / 2,
                BOSS_WIDTH,
                BOSS_HEIGHT,
            ),
            health: BOSS_HEALTH,
            direction: BossDirection::Down,
            bullets: Vec::new(),
            power_ups: Vec::new(),
        }
    }

    /// Three bullets: lower wing, nose, upper wing.
    pub fn spread_volley(&self) -> [Bullet; 3] {
        let r = &self.rect;
        [
            Bullet::new(r.x + 45, r.y + r.h - 18, BOSS_BULLET_SIZE),
            Bullet::new(r.x, r.y + r.h / 2 - 8, BOSS_BULLET_SIZE),
            Bullet::new(r.x + 45, r.y + 2, BOSS_BULLET_SIZE),
        ]
    }

    pub fn drop_power_up(&self) -> PowerUp {
        PowerUp::new(self.rect.x, self.rect.y + self.rect.h / 2 - POWER_UP_SIZE / 2)
    }
}

impl Default for Boss {
    fn default() -> Self {
        Boss::new()
    }
}

impl Positioned for Boss {
    fn rect(&self) -> Rect {
        self.rect
    }
}

// ── Master game state ────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    PlayerWon,
    PlayerLost,
    /// The window was closed mid-match.
    Closed,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        *self != GameStatus::Running
    }
}

/// Frame counters driving the boss, reset to 0 whenever they fire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpawnTimers {
    pub direction: u32,
    pub fire: i32,
}

/// The entire match.  Cloneable so update functions can return a new
/// copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub boss: Boss,
    pub timers: SpawnTimers,
    /// Frames between boss fire decisions; shrinks as the boss is hit.
    pub boss_fire_interval: i32,
    pub status: GameStatus,
    pub frame: u64,
}
