//! Pointer device proxy
//!
//! A `Pointer` mirrors one pointing device bound to one input surface.
//! Event entry points mutate its state asynchronously relative to the
//! per-frame reconciliation; both run on the same thread, so a tick
//! always observes a consistent snapshot.

use tracing::trace;

use super::events::{Cursor, PointerEvent};
use super::hit_test::hit_test_node;
use crate::scene::{NodeId, Stage};

/// User callback slot; invoked if present, skipped otherwise
pub type Callback = Box<dyn FnMut()>;

/// Identifies a registered pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerId(pub(crate) usize);

/// State proxy for one pointing device
pub struct Pointer {
    /// Raw surface position, before scaling
    raw: [f32; 2],
    /// Divisor mapping raw device coordinates to logical coordinates
    pub scale: f32,
    /// True while the device is pressed
    pub is_down: bool,
    /// True while the device is released; always the inverse of `is_down`
    pub is_up: bool,
    /// True once per press/release cycle completing within the tap threshold
    pub tapped: bool,
    /// Timestamp of the last press, in seconds
    down_time: f64,
    /// Press-to-release duration of the last completed cycle, in seconds
    pub elapsed: f64,
    tap_threshold: f64,
    press: Option<Callback>,
    release: Option<Callback>,
    tap: Option<Callback>,
    /// The one object this pointer is dragging, if any
    pub(crate) drag_target: Option<NodeId>,
    /// Pointer-to-origin offset captured at drag start
    pub(crate) drag_offset: [f32; 2],
    visible: bool,
    cursor: Cursor,
}

impl Pointer {
    /// Creates a pointer with the given coordinate scale and tap threshold
    pub fn new(scale: f32, tap_threshold: f64) -> Self {
        Self {
            raw: [0.0, 0.0],
            scale,
            is_down: false,
            is_up: true,
            tapped: false,
            down_time: 0.0,
            elapsed: 0.0,
            tap_threshold,
            press: None,
            release: None,
            tap: None,
            drag_target: None,
            drag_offset: [0.0, 0.0],
            visible: true,
            cursor: Cursor::Default,
        }
    }

    /// Logical x position (raw x divided by the scale factor)
    pub fn x(&self) -> f32 {
        self.raw[0] / self.scale
    }

    /// Logical y position (raw y divided by the scale factor)
    pub fn y(&self) -> f32 {
        self.raw[1] / self.scale
    }

    /// Logical position
    pub fn pos(&self) -> [f32; 2] {
        [self.x(), self.y()]
    }

    /// Applies a device event to this pointer's state
    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Moved { pos } => {
                self.raw = pos;
            }
            PointerEvent::Pressed { pos, time } => {
                if let Some(pos) = pos {
                    self.raw = pos;
                }
                self.is_down = true;
                self.is_up = false;
                self.tapped = false;
                self.down_time = time;
                trace!(time, "pointer pressed");
                if let Some(press) = &mut self.press {
                    press();
                }
            }
            PointerEvent::Released { time } => {
                self.elapsed = (time - self.down_time).abs();
                if self.elapsed <= self.tap_threshold && !self.tapped {
                    self.tapped = true;
                    if let Some(tap) = &mut self.tap {
                        tap();
                    }
                }
                self.is_up = true;
                self.is_down = false;
                trace!(time, elapsed = self.elapsed, "pointer released");
                if let Some(release) = &mut self.release {
                    release();
                }
            }
        }
    }

    /// Tests whether this pointer is over a node's bounds
    pub fn hit_test(&self, stage: &dyn Stage, node: NodeId) -> bool {
        hit_test_node(stage, node, self.pos())
    }

    /// Assigns the callback fired on every press
    pub fn on_press(&mut self, callback: impl FnMut() + 'static) {
        self.press = Some(Box::new(callback));
    }

    /// Assigns the callback fired on every release
    pub fn on_release(&mut self, callback: impl FnMut() + 'static) {
        self.release = Some(Box::new(callback));
    }

    /// Assigns the callback fired when a press/release cycle is a tap
    pub fn on_tap(&mut self, callback: impl FnMut() + 'static) {
        self.tap = Some(Box::new(callback));
    }

    /// The object this pointer is currently dragging
    pub fn drag_target(&self) -> Option<NodeId> {
        self.drag_target
    }

    /// Whether the host should display a cursor for this pointer
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Shows or hides the cursor
    pub fn set_visible(&mut self, visible: bool) {
        self.cursor = if visible {
            Cursor::Default
        } else {
            Cursor::Hidden
        };
        self.visible = visible;
    }

    /// Cursor affordance the host should display this frame
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub(crate) fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }
}
