//! Input interaction system
//!
//! Turns raw device events into drag-and-drop, button behaviour, and
//! directional control over a scene graph.
//!
//! # Architecture
//!
//! ```text
//! Device events (winit or direct) → InputCollector → Interaction
//!                                                       ↓ update(), once per frame
//!                                      drag pass → interactive pass → velocity sync
//!                                                       ↓
//!                                          Stage mutations + user callbacks
//! ```
//!
//! Event entry points mutate pointer and key state; nothing else happens
//! until the host's per-frame `update` tick reconciles that state against
//! the stage.
//!
//! # Modules
//!
//! - `events` - device events, key codes, cursor affordances
//! - `pointer` - pointer state, coordinate scaling, tap timing
//! - `hit_test` - strict rectangular/circular containment
//! - `drag` - drag-and-drop reconciliation and z-order promotion
//! - `interactive` - button state machine and callback dispatch
//! - `keyboard` - key bindings and the arrow-key velocity controller
//! - `context` - the `Interaction` coordinator
//! - `collector` - winit event adapter

mod collector;
mod context;
mod drag;
mod events;
mod interactive;
mod keyboard;
mod pointer;

pub use collector::InputCollector;
pub use context::Interaction;
pub use drag::Draggable;
pub use events::{Cursor, KeyCode, KeyEvent, PointerEvent};
pub use hit_test::hit_test_node;
pub use interactive::{Action, Interactive, InteractiveId, InteractiveState};
pub use keyboard::{ArrowControl, ArrowControlId, KeyBinding, KeyBindingId};
pub use pointer::{Callback, Pointer, PointerId};
