//! Key bindings and directional control
//!
//! A binding mirrors one key's up/down state and fires its callbacks on
//! edges only, so held-key repeats are ignored. Any number of bindings
//! may listen to the same code; each fires independently.
//!
//! `ArrowControl` composes the four arrow keys into a velocity pair for
//! one scene node. The controller owns the velocity and the coordinator
//! copies it to the stage on every tick.

use tracing::trace;

use super::events::{KeyCode, KeyEvent};
use super::pointer::Callback;
use crate::scene::NodeId;

/// Identifies a registered key binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindingId(pub(crate) usize);

/// Identifies a registered arrow controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowControlId(pub(crate) usize);

/// Up/down state proxy for one key code
pub struct KeyBinding {
    /// The key this binding listens for
    pub code: KeyCode,
    /// True while the key is held
    pub is_down: bool,
    /// True while the key is released; always the inverse of `is_down`
    pub is_up: bool,
    press: Option<Callback>,
    release: Option<Callback>,
}

impl KeyBinding {
    pub(crate) fn new(code: KeyCode) -> Self {
        Self {
            code,
            is_down: false,
            is_up: true,
            press: None,
            release: None,
        }
    }

    /// Assigns the callback fired on the up-to-down edge
    pub fn on_press(&mut self, callback: impl FnMut() + 'static) {
        self.press = Some(Box::new(callback));
    }

    /// Assigns the callback fired on the down-to-up edge
    pub fn on_release(&mut self, callback: impl FnMut() + 'static) {
        self.release = Some(Box::new(callback));
    }

    /// Applies a key event; events for other codes are ignored
    pub fn handle(&mut self, event: KeyEvent) {
        match event {
            KeyEvent::Down(code) if code == self.code => {
                if self.is_up
                    && let Some(press) = &mut self.press
                {
                    press();
                }
                self.is_down = true;
                self.is_up = false;
            }
            KeyEvent::Up(code) if code == self.code => {
                if self.is_down
                    && let Some(release) = &mut self.release
                {
                    release();
                }
                self.is_down = false;
                self.is_up = true;
            }
            _ => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn from_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Up => Some(Self::Up),
            KeyCode::Down => Some(Self::Down),
            KeyCode::Left => Some(Self::Left),
            KeyCode::Right => Some(Self::Right),
            _ => None,
        }
    }

    fn opposing(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Drives a node's velocity with the four arrow keys
pub struct ArrowControl {
    node: NodeId,
    speed: f32,
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    velocity: [f32; 2],
}

impl ArrowControl {
    pub(crate) fn new(node: NodeId, speed: f32) -> Self {
        Self {
            node,
            speed,
            up: false,
            down: false,
            left: false,
            right: false,
            velocity: [0.0, 0.0],
        }
    }

    /// The controlled node
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Current velocity, in units per frame
    pub fn velocity(&self) -> [f32; 2] {
        self.velocity
    }

    fn held(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    fn set_held(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    /// The latest press wins its axis and parks the orthogonal one
    fn apply(&mut self, direction: Direction) {
        self.velocity = match direction {
            Direction::Up => [0.0, -self.speed],
            Direction::Down => [0.0, self.speed],
            Direction::Left => [-self.speed, 0.0],
            Direction::Right => [self.speed, 0.0],
        };
    }

    /// Applies a key event; non-arrow codes are ignored
    pub fn handle(&mut self, event: KeyEvent) {
        let Some(direction) = Direction::from_code(event.code()) else {
            return;
        };

        match event {
            KeyEvent::Down(_) => {
                if !self.held(direction) {
                    self.set_held(direction, true);
                    self.apply(direction);
                    trace!(?direction, velocity = ?self.velocity, "arrow pressed");
                }
            }
            KeyEvent::Up(_) => {
                if !self.held(direction) {
                    return;
                }
                self.set_held(direction, false);

                // Stop this axis only if the opposing key is not held and
                // the other axis is at rest; a stale stop must not clobber
                // an in-progress move on the other axis
                let orthogonal_at_rest = match direction {
                    Direction::Up | Direction::Down => self.velocity[0] == 0.0,
                    Direction::Left | Direction::Right => self.velocity[1] == 0.0,
                };
                if !self.held(direction.opposing()) && orthogonal_at_rest {
                    match direction {
                        Direction::Up | Direction::Down => self.velocity[1] = 0.0,
                        Direction::Left | Direction::Right => self.velocity[0] = 0.0,
                    }
                }

                // If that left the controller at rest while another key is
                // still held, that key's motion resumes
                if self.velocity == [0.0, 0.0] {
                    for remaining in [
                        Direction::Left,
                        Direction::Right,
                        Direction::Up,
                        Direction::Down,
                    ] {
                        if self.held(remaining) {
                            self.apply(remaining);
                            break;
                        }
                    }
                }
                trace!(?direction, velocity = ?self.velocity, "arrow released");
            }
        }
    }
}
