//! Raw input to intents
//!
//! Keyboard keys are tracked by their DOM `KeyboardEvent.code` names so the
//! browser and native hosts share one mapping. Steering and jump are held;
//! restart and pause fire once per press.

use std::collections::HashSet;

use crate::sim::Intents;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    Space,
    KeyA,
    KeyD,
    KeyW,
    KeyR,
    KeyP,
}

impl Key {
    /// Parse a `KeyboardEvent.code` value
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "ArrowUp" => Some(Key::ArrowUp),
            "Space" => Some(Key::Space),
            "KeyA" => Some(Key::KeyA),
            "KeyD" => Some(Key::KeyD),
            "KeyW" => Some(Key::KeyW),
            "KeyR" => Some(Key::KeyR),
            "KeyP" => Some(Key::KeyP),
            _ => None,
        }
    }

    pub fn is_left(self) -> bool {
        matches!(self, Key::ArrowLeft | Key::KeyA)
    }

    pub fn is_right(self) -> bool {
        matches!(self, Key::ArrowRight | Key::KeyD)
    }

    pub fn is_jump(self) -> bool {
        matches!(self, Key::ArrowUp | Key::Space | Key::KeyW)
    }
}

/// Accumulates device events between steps and hands out intent snapshots
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    held: HashSet<Key>,
    /// Seconds left on a tap-to-steer hold
    touch_left: f32,
    touch_right: f32,
    touch_hold: f32,
    restart: bool,
    pause: bool,
}

impl InputAdapter {
    pub fn new(touch_hold: f32) -> Self {
        Self {
            touch_hold,
            ..Default::default()
        }
    }

    /// Key pressed. Auto-repeat presses of a held key are ignored.
    pub fn key_down(&mut self, key: Key) {
        if !self.held.insert(key) {
            return;
        }
        match key {
            Key::KeyR => self.restart = true,
            Key::KeyP => self.pause = true,
            _ => {}
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Key event by DOM code; unknown codes are ignored
    pub fn key_code(&mut self, code: &str, pressed: bool) {
        let Some(key) = Key::from_code(code) else {
            return;
        };
        if pressed {
            self.key_down(key);
        } else {
            self.key_up(key);
        }
    }

    /// Tap on screen: left half steers left, right half steers right
    pub fn touch_start(&mut self, x: f32, screen_width: f32) {
        if x < screen_width / 2.0 {
            self.touch_left = self.touch_hold;
        } else {
            self.touch_right = self.touch_hold;
        }
    }

    /// Start button pressed
    pub fn press_start(&mut self) {
        self.restart = true;
    }

    /// Wall-clock time passed, expires touch holds
    pub fn elapse(&mut self, seconds: f32) {
        self.touch_left = (self.touch_left - seconds).max(0.0);
        self.touch_right = (self.touch_right - seconds).max(0.0);
    }

    /// Current intents; one-shot intents are consumed
    pub fn take_intents(&mut self) -> Intents {
        let intents = Intents {
            left: self.touch_left > 0.0 || self.held.iter().any(|k| k.is_left()),
            right: self.touch_right > 0.0 || self.held.iter().any(|k| k.is_right()),
            jump: self.held.iter().any(|k| k.is_jump()),
            restart: self.restart,
            pause: self.pause,
        };
        self.restart = false;
        self.pause = false;
        intents
    }

    /// Forget everything (focus lost)
    pub fn clear(&mut self) {
        *self = Self::new(self.touch_hold);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TOUCH_HOLD;

    #[test]
    fn test_held_keys_map_to_intents() {
        let mut input = InputAdapter::new(TOUCH_HOLD);
        input.key_code("KeyA", true);
        input.key_code("Space", true);
        let intents = input.take_intents();
        assert!(intents.left && intents.jump && !intents.right);

        // Held intents persist across snapshots
        assert_eq!(input.take_intents(), intents);

        input.key_code("KeyA", false);
        input.key_code("ArrowRight", true);
        let intents = input.take_intents();
        assert!(!intents.left && intents.right && intents.jump);
    }

    #[test]
    fn test_one_shots_consumed() {
        let mut input = InputAdapter::new(TOUCH_HOLD);
        input.key_down(Key::KeyR);
        input.key_down(Key::KeyP);
        let intents = input.take_intents();
        assert!(intents.restart && intents.pause);

        let intents = input.take_intents();
        assert!(!intents.restart && !intents.pause);
    }

    #[test]
    fn test_auto_repeat_does_not_refire() {
        let mut input = InputAdapter::new(TOUCH_HOLD);
        input.key_down(Key::KeyP);
        input.take_intents();
        input.key_down(Key::KeyP);
        assert!(!input.take_intents().pause);

        input.key_up(Key::KeyP);
        input.key_down(Key::KeyP);
        assert!(input.take_intents().pause);
    }

    #[test]
    fn test_touch_hold_expires() {
        let mut input = InputAdapter::new(0.15);
        input.touch_start(100.0, 800.0);
        assert!(input.take_intents().left);

        input.elapse(0.1);
        assert!(input.take_intents().left);
        input.elapse(0.1);
        assert!(!input.take_intents().left);

        input.touch_start(700.0, 800.0);
        let intents = input.take_intents();
        assert!(intents.right && !intents.left);
    }

    #[test]
    fn test_unknown_codes_ignored() {
        let mut input = InputAdapter::new(TOUCH_HOLD);
        input.key_code("KeyZ", true);
        assert_eq!(input.take_intents(), Intents::default());
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut input = InputAdapter::new(TOUCH_HOLD);
        input.key_down(Key::ArrowLeft);
        input.touch_start(700.0, 800.0);
        input.press_start();
        input.clear();
        assert_eq!(input.take_intents(), Intents::default());
    }
}
