//! Interaction coordinator
//!
//! `Interaction` owns all interaction state: the pointer list, the
//! draggable set, the interactive-object set, key bindings, and arrow
//! controllers. Device events are fed in through the event entry points;
//! the host calls [`Interaction::update`] once per frame to reconcile
//! everything against a stage.

use tracing::{debug, info};

use super::drag::{self, Draggable};
use super::events::{KeyCode, KeyEvent, PointerEvent};
use super::interactive::{self, Interactive, InteractiveId};
use super::keyboard::{ArrowControl, ArrowControlId, KeyBinding, KeyBindingId};
use super::pointer::{Pointer, PointerId};
use crate::config::InteractionConfig;
use crate::error::Error;
use crate::scene::{NodeId, Stage};

/// Central owner of pointers, draggables, interactive objects, and keys
pub struct Interaction {
    config: InteractionConfig,
    pointers: Vec<Pointer>,
    draggables: Vec<Draggable>,
    interactives: Vec<Interactive>,
    bindings: Vec<KeyBinding>,
    arrows: Vec<ArrowControl>,
}

impl Interaction {
    /// Creates a coordinator with default configuration
    pub fn new() -> Self {
        Self::with_config(InteractionConfig::default())
    }

    /// Creates a coordinator with the given configuration
    pub fn with_config(config: InteractionConfig) -> Self {
        info!(
            pointer_scale = config.pointer_scale,
            tap_threshold = config.tap_threshold,
            "interaction layer ready"
        );
        Self {
            config,
            pointers: Vec::new(),
            draggables: Vec::new(),
            interactives: Vec::new(),
            bindings: Vec::new(),
            arrows: Vec::new(),
        }
    }

    /// Registers an additional pointer with an explicit scale factor
    pub fn add_pointer(&mut self, scale: f32) -> PointerId {
        self.pointers
            .push(Pointer::new(scale, self.config.tap_threshold));
        PointerId(self.pointers.len() - 1)
    }

    /// The default pointer, created lazily from the configured scale
    ///
    /// There is usually exactly one pointer per surface; the
    /// reconciliation passes also create it on demand.
    pub fn default_pointer(&mut self) -> PointerId {
        if self.pointers.is_empty() {
            self.add_pointer(self.config.pointer_scale)
        } else {
            PointerId(0)
        }
    }

    /// Borrows a registered pointer
    pub fn pointer(&self, id: PointerId) -> &Pointer {
        &self.pointers[id.0]
    }

    /// Mutably borrows a registered pointer, e.g. to assign callbacks
    pub fn pointer_mut(&mut self, id: PointerId) -> &mut Pointer {
        &mut self.pointers[id.0]
    }

    /// Number of registered pointers
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Feeds a device event to the default pointer
    pub fn pointer_event(&mut self, event: PointerEvent) {
        let id = self.default_pointer();
        self.pointer_event_for(id, event);
    }

    /// Feeds a device event to a specific pointer
    pub fn pointer_event_for(&mut self, id: PointerId, event: PointerEvent) {
        self.pointers[id.0].handle(event);
    }

    /// Feeds a key event to every binding and arrow controller
    pub fn key_event(&mut self, event: KeyEvent) {
        for binding in &mut self.bindings {
            binding.handle(event);
        }
        for arrow in &mut self.arrows {
            arrow.handle(event);
        }
    }

    /// Registers a node for drag-and-drop
    ///
    /// Registering an already-registered node is a no-op.
    pub fn make_draggable(&mut self, node: NodeId) {
        if self.draggables.iter().any(|d| d.node == node) {
            return;
        }
        self.draggables.push(Draggable { node, enabled: true });
        debug!(?node, "registered draggable");
    }

    /// Removes a node from the draggable set
    pub fn make_undraggable(&mut self, node: NodeId) {
        self.draggables.retain(|d| d.node != node);
    }

    /// Enables or disables dragging for a registered node without
    /// removing it from the set
    pub fn set_drag_enabled(&mut self, node: NodeId, enabled: bool) {
        if let Some(entry) = self.draggables.iter_mut().find(|d| d.node == node) {
            entry.enabled = enabled;
        }
    }

    /// True if the node is registered and currently draggable
    pub fn is_draggable(&self, node: NodeId) -> bool {
        self.draggables
            .iter()
            .any(|d| d.node == node && d.enabled)
    }

    /// Enrolls a node as a generic interactive object
    pub fn make_interactive(&mut self, node: NodeId) -> InteractiveId {
        self.interactives.push(Interactive::new(node, false));
        debug!(?node, "registered interactive");
        InteractiveId(self.interactives.len() - 1)
    }

    /// Enrolls a node as a multi-frame button
    ///
    /// Buttons get automatic frame display: frame 0 when up, frame 1
    /// when hovered (3-frame sprites), and the last frame when down.
    pub fn button(&mut self, node: NodeId) -> InteractiveId {
        self.interactives.push(Interactive::new(node, true));
        debug!(?node, "registered button");
        InteractiveId(self.interactives.len() - 1)
    }

    /// Borrows an enrolled interactive object
    pub fn interactive(&self, id: InteractiveId) -> &Interactive {
        &self.interactives[id.0]
    }

    /// Mutably borrows an enrolled interactive object, e.g. to assign
    /// callbacks or toggle `enabled`
    pub fn interactive_mut(&mut self, id: InteractiveId) -> &mut Interactive {
        &mut self.interactives[id.0]
    }

    /// Creates a binding listening for one key code
    ///
    /// Bindings for the same code are independent; all of them fire.
    pub fn bind_key(&mut self, code: KeyCode) -> KeyBindingId {
        self.bindings.push(KeyBinding::new(code));
        KeyBindingId(self.bindings.len() - 1)
    }

    /// Borrows a key binding
    pub fn binding(&self, id: KeyBindingId) -> &KeyBinding {
        &self.bindings[id.0]
    }

    /// Mutably borrows a key binding, e.g. to assign callbacks
    pub fn binding_mut(&mut self, id: KeyBindingId) -> &mut KeyBinding {
        &mut self.bindings[id.0]
    }

    /// Drives `node`'s velocity with the arrow keys at `speed` units per
    /// frame
    pub fn arrow_control(&mut self, node: NodeId, speed: f32) -> Result<ArrowControlId, Error> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(Error::InvalidSpeed(speed));
        }
        self.arrows.push(ArrowControl::new(node, speed));
        Ok(ArrowControlId(self.arrows.len() - 1))
    }

    /// Borrows an arrow controller
    pub fn arrow(&self, id: ArrowControlId) -> &ArrowControl {
        &self.arrows[id.0]
    }

    /// Per-frame reconciliation tick
    ///
    /// Runs the drag-and-drop pass, then the interactive pass, then syncs
    /// arrow-controller velocities to the stage. Both passes observe the
    /// pointer state as of tick start; event entry points and the tick
    /// run on the same thread and never interleave.
    pub fn update(&mut self, stage: &mut dyn Stage) {
        if !self.draggables.is_empty() {
            self.default_pointer();
            drag::update_drag_and_drop(&mut self.pointers, &mut self.draggables, stage);
        }

        if !self.interactives.is_empty() {
            self.default_pointer();
            interactive::update_interactives(&mut self.interactives, &mut self.pointers, stage);
        }

        for arrow in &self.arrows {
            stage.set_velocity(arrow.node(), arrow.velocity());
        }
    }
}

impl Default for Interaction {
    fn default() -> Self {
        Self::new()
    }
}
