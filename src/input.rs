/// Keyboard mapping: crossterm key events in, one `FrameInput` per frame out.
///
/// Discrete key-downs (Space, quit keys) become events for a single frame.
/// W/S and ↑/↓ are tracked by the frame each key was last seen, and count
/// as held while fresh or until their release event on terminals that
/// report releases.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::events::{FrameInput, GameEvent};

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so 8 frames (≈133 ms) is always
/// refreshed before expiry.
pub const HOLD_WINDOW: u64 = 8;

const UP_KEYS: [KeyCode; 3] = [KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')];
const DOWN_KEYS: [KeyCode; 3] = [KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')];

pub fn is_quit_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
pub fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

/// Collects the key events of one frame and remembers held keys across
/// frames.
#[derive(Debug, Default)]
pub struct KeyTracker {
    key_frame: HashMap<KeyCode, u64>,
    pending: Vec<GameEvent>,
}

impl KeyTracker {
    pub fn new() -> Self {
        KeyTracker::default()
    }

    pub fn record(&mut self, key: KeyEvent, frame: u64) {
        match key.kind {
            KeyEventKind::Press => {
                self.key_frame.insert(key.code, frame);
                if is_quit_key(key.code, key.modifiers) {
                    self.pending.push(GameEvent::Quit);
                } else if key.code == KeyCode::Char(' ') {
                    self.pending.push(GameEvent::FireRequested);
                }
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(key.code, frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&key.code);
            }
        }
    }

    /// Hand over this frame's input.  Pending events are drained; held
    /// keys carry over.
    pub fn frame_input(&mut self, frame: u64) -> FrameInput {
        let held = |keys: &[KeyCode]| keys.iter().any(|k| is_held(&self.key_frame, k, frame));
        let up_held = held(&UP_KEYS);
        let down_held = held(&DOWN_KEYS);
        FrameInput {
            events: std::mem::take(&mut self.pending),
            up_held,
            down_held,
        }
    }
}
