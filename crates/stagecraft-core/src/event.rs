//! Pointer input delivered to widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Pointer identifier (one per finger, or one for the mouse).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PointerId(pub u32);

impl PointerId {
    /// The primary pointer: the mouse, or the first finger down.
    pub const PRIMARY: Self = Self(0);

    /// Check whether this is the primary pointer.
    #[must_use]
    pub const fn is_primary(self) -> bool {
        self.0 == Self::PRIMARY.0
    }
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}

/// Phase of a pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerPhase {
    /// Pointer pressed
    Down,
    /// Pointer moved while pressed
    Move,
    /// Pointer released
    Up,
}

/// A single pointer sample, in the receiving widget's local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Down, move or up
    pub phase: PointerPhase,
    /// Which pointer produced the sample
    pub pointer: PointerId,
    /// Position relative to the widget's top-left corner
    pub position: Point,
    /// Button, for mouse pointers
    pub button: Option<MouseButton>,
}

impl PointerEvent {
    /// Create a pointer-down sample.
    #[must_use]
    pub const fn down(pointer: PointerId, position: Point) -> Self {
        Self {
            phase: PointerPhase::Down,
            pointer,
            position,
            button: None,
        }
    }

    /// Create a pointer-move sample.
    #[must_use]
    pub const fn moved(pointer: PointerId, position: Point) -> Self {
        Self {
            phase: PointerPhase::Move,
            pointer,
            position,
            button: None,
        }
    }

    /// Create a pointer-up sample.
    #[must_use]
    pub const fn up(pointer: PointerId, position: Point) -> Self {
        Self {
            phase: PointerPhase::Up,
            pointer,
            position,
            button: None,
        }
    }

    /// Attach a mouse button.
    #[must_use]
    pub const fn with_button(mut self, button: MouseButton) -> Self {
        self.button = Some(button);
        self
    }

    /// Primary pointer and, for mice, the left button.
    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.pointer.is_primary() && matches!(self.button, None | Some(MouseButton::Left))
    }
}
