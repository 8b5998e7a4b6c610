//! Input adapter
//!
//! Event handlers write into a persistent `InputState` (keys held, live
//! pointer position); once per tick it is resolved into a single `Steering`
//! decision. Pointer-follow always wins over held keys while a pointer
//! position is recorded.

/// Resolved steering decision for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Steering {
    /// Fixed-velocity steering: direction is -1.0, 0.0, or 1.0
    Discrete(f32),
    /// Ease the player toward this pointer x (surface pixels)
    Follow(f32),
}

impl Default for Steering {
    fn default() -> Self {
        Steering::Discrete(0.0)
    }
}

/// Persistent input state fed by key and pointer events
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    /// Live pointer x in surface pixels; `None` once released or cancelled
    pub pointer_x: Option<f32>,
}

impl InputState {
    /// Resolve the current signals into one steering decision.
    pub fn steering(&self) -> Steering {
        if let Some(x) = self.pointer_x {
            return Steering::Follow(x);
        }
        let mut dir = 0.0;
        if self.left {
            dir -= 1.0;
        }
        if self.right {
            dir += 1.0;
        }
        Steering::Discrete(dir)
    }

    /// Pointer released or interaction cancelled
    pub fn clear_pointer(&mut self) {
        self.pointer_x = None;
    }
}
