/// Discrete happenings within a frame, and the sounds they trigger.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A boss bullet reached the player.
    PlayerHit,
    /// A player bullet reached the boss.
    BossHit,
    /// The player collected a power-up.
    PlayerPowerUp,
    /// Space was pressed this frame.
    FireRequested,
    /// The window was closed.
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundCue {
    PlayerFire,
    PlayerHit,
    BossFire,
    BossHit,
    PowerUp,
}

/// One frame's worth of input: key-downs in arrival order plus the
/// continuous state of the movement keys.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub events: Vec<GameEvent>,
    pub up_held: bool,
    pub down_held: bool,
}

impl FrameInput {
    pub fn idle() -> Self {
        FrameInput::default()
    }

    pub fn with_events(events: Vec<GameEvent>) -> Self {
        FrameInput {
            events,
            ..FrameInput::default()
        }
    }
}
