//! Device events and input identifiers

/// Pointer device events, already mapped to surface-relative coordinates
///
/// Mouse and touch share this shape: a touch start carries the first
/// touch point's position, a mouse press relies on the position set by
/// earlier move events.
#[derive(Debug, Clone, Copy)]
pub enum PointerEvent {
    /// Pointer moved to a raw (unscaled) surface position
    Moved { pos: [f32; 2] },
    /// Pointer pressed; `pos` is present for touch starts
    Pressed {
        pos: Option<[f32; 2]>,
        /// Monotonic timestamp in seconds
        time: f64,
    },
    /// Pointer released, anywhere on the window
    Released {
        /// Monotonic timestamp in seconds
        time: f64,
    },
}

/// Keyboard events
#[derive(Debug, Clone, Copy)]
pub enum KeyEvent {
    Down(KeyCode),
    Up(KeyCode),
}

impl KeyEvent {
    /// The key this event refers to
    pub fn code(&self) -> KeyCode {
        match self {
            Self::Down(code) | Self::Up(code) => *code,
        }
    }
}

/// Key identifier, independent of any windowing backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Up,
    Down,
    Left,
    Right,
    Space,
    Enter,
    Escape,
    Tab,
    W,
    A,
    S,
    D,
    /// Any other key, identified by its platform scan code
    Other(u32),
}

/// Cursor affordance the host should display for a pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Ordinary arrow icon
    #[default]
    Default,
    /// Hand icon shown over draggable or interactive objects
    Pointer,
    /// No cursor (pointer hidden)
    Hidden,
}
