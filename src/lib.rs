//! Scene Input
//!
//! An input-interaction layer for 2D scene-graph renderers. Turns raw
//! pointer, touch, and keyboard events into higher-level semantics:
//! hit-testing, drag-and-drop, button state machines, and 4-way
//! velocity control.

/// Configuration loading (pointer scale, tap threshold)
pub mod config;

/// Error types for setup-time failures
pub mod error;

/// Pointer, drag-and-drop, interactive objects, and keyboard handling
pub mod input;

/// The renderer collaborator contract and a reference scene graph
pub mod scene;

pub use config::InteractionConfig;
pub use error::Error;
pub use input::Interaction;
pub use scene::{Node, NodeId, Scene, Stage};
