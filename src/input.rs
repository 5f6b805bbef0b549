/// Key mapping: turns raw key transitions into game commands, and infers
/// releases on terminals that never report them.

use crate::entities::Movement;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    SetMovement(Movement),
    FireLaser,
    Quit,
}

/// `h`/`l` steer, space fires, `q` quits.
pub fn map_key_down(key: char) -> Option<Command> {
    match key {
        'h' | 'H' => Some(Command::SetMovement(Movement::Left)),
        'l' | 'L' => Some(Command::SetMovement(Movement::Right)),
        ' ' => Some(Command::FireLaser),
        'q' | 'Q' => Some(Command::Quit),
        _ => None,
    }
}

/// Releasing either steering key stops the player, even if the other one is
/// still held.
pub fn map_key_up(key: char) -> Option<Command> {
    match key {
        'h' | 'H' | 'l' | 'L' => Some(Command::SetMovement(Movement::None)),
        _ => None,
    }
}

/// How long the first press of a steering key counts as held before the
/// terminal's auto-repeat kicks in (usually 250 to 600 ms).
pub const FIRST_REPEAT_GRACE_MS: u64 = 500;

/// Once repeats arrive, silence this long counts as a release.
/// 4 frames @ 30 FPS, shorter than the OS repeat interval.
pub const REPEAT_HOLD_MS: u64 = 133;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct HeldKey {
    key: char,
    last_seen: u64,
    repeating: bool,
}

/// Stands in for key-release events on terminals that only report presses:
/// a held key arrives as a stream of repeated presses, and the release is
/// inferred when the stream goes quiet.
#[derive(Debug, Default)]
pub struct HoldTracker {
    held: Option<HeldKey>,
}

impl HoldTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press (or auto-repeat) of `key` at `now` ms.
    pub fn press(&mut self, key: char, now: u64) {
        let repeating = matches!(self.held, Some(h) if h.key == key);
        self.held = Some(HeldKey {
            key,
            last_seen: now,
            repeating,
        });
    }

    /// Time at which the held key will be treated as released.
    pub fn deadline(&self) -> Option<u64> {
        self.held.map(|h| {
            let window = if h.repeating {
                REPEAT_HOLD_MS
            } else {
                FIRST_REPEAT_GRACE_MS
            };
            h.last_seen + window
        })
    }

    /// Forget the held key once its window has passed and return it, so the
    /// caller can deliver the missing key-up.
    pub fn expire(&mut self, now: u64) -> Option<char> {
        match self.deadline() {
            Some(deadline) if now >= deadline => self.held.take().map(|h| h.key),
            _ => None,
        }
    }
}
