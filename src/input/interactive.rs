//! Interactive-object state machine
//!
//! Button-like objects are reconciled once per frame against every
//! pointer. State is level-derived (pointer up/down plus hit test);
//! callbacks are edge-triggered through the `pressed` and `hover_over`
//! latches so each fires once per transition, not once per frame.

use tracing::trace;

use super::events::Cursor;
use super::pointer::{Callback, Pointer};
use crate::scene::{NodeId, Stage};

/// Identifies an enrolled interactive object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractiveId(pub(crate) usize);

/// Visual/logical state of an interactive object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractiveState {
    #[default]
    Up,
    Over,
    Down,
}

/// The last dispatched action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    None,
    Pressed,
    Released,
}

/// A scene object enrolled for button-like interaction
pub struct Interactive {
    /// The enrolled node
    pub node: NodeId,
    /// Current state, recomputed every frame
    pub state: InteractiveState,
    /// Last action dispatched for this object
    pub action: Action,
    /// Latch: the current press has already fired `press`
    pressed: bool,
    /// Latch: the current hover has already fired `over`
    hover_over: bool,
    /// Disabled objects are skipped entirely
    pub enabled: bool,
    /// Multi-frame button sprites get automatic frame display
    is_button: bool,
    press: Option<Callback>,
    release: Option<Callback>,
    over: Option<Callback>,
    out: Option<Callback>,
    tap: Option<Callback>,
}

impl Interactive {
    pub(crate) fn new(node: NodeId, is_button: bool) -> Self {
        Self {
            node,
            state: InteractiveState::Up,
            action: Action::None,
            pressed: false,
            hover_over: false,
            enabled: true,
            is_button,
            press: None,
            release: None,
            over: None,
            out: None,
            tap: None,
        }
    }

    /// Assigns the callback fired once when a press begins on the object
    pub fn on_press(&mut self, callback: impl FnMut() + 'static) {
        self.press = Some(Box::new(callback));
    }

    /// Assigns the callback fired once when a press ends
    pub fn on_release(&mut self, callback: impl FnMut() + 'static) {
        self.release = Some(Box::new(callback));
    }

    /// Assigns the callback fired once on hover entry
    pub fn on_over(&mut self, callback: impl FnMut() + 'static) {
        self.over = Some(Box::new(callback));
    }

    /// Assigns the callback fired once on hover exit
    pub fn on_out(&mut self, callback: impl FnMut() + 'static) {
        self.out = Some(Box::new(callback));
    }

    /// Assigns the callback fired when a press over the object was a tap
    pub fn on_tap(&mut self, callback: impl FnMut() + 'static) {
        self.tap = Some(Box::new(callback));
    }

    /// Reconciles this object against one pointer
    fn reconcile(&mut self, pointer: &mut Pointer, stage: &mut dyn Stage) {
        let hit = pointer.hit_test(stage, self.node);

        // Derive the state from the pointer
        if pointer.is_up {
            self.state = InteractiveState::Up;
            if self.is_button {
                stage.set_frame(self.node, 0);
            }
        }

        if hit {
            self.state = InteractiveState::Over;
            if self.is_button && stage.frame_count(self.node) == 3 {
                stage.set_frame(self.node, 1);
            }

            if pointer.is_down {
                self.state = InteractiveState::Down;
                if self.is_button {
                    let frame = if stage.frame_count(self.node) == 3 { 2 } else { 1 };
                    stage.set_frame(self.node, frame);
                }
            }

            if pointer.visible() {
                pointer.set_cursor(Cursor::Pointer);
            }
        } else if pointer.visible() {
            pointer.set_cursor(Cursor::Default);
        }

        // Dispatch edge-triggered actions
        if self.state == InteractiveState::Down && !self.pressed {
            if let Some(press) = &mut self.press {
                press();
            }
            self.pressed = true;
            self.action = Action::Pressed;
            trace!(node = ?self.node, "interactive pressed");
        }

        if self.state == InteractiveState::Over {
            if self.pressed {
                if let Some(release) = &mut self.release {
                    release();
                }
                self.pressed = false;
                self.action = Action::Released;
                if pointer.tapped
                    && let Some(tap) = &mut self.tap
                {
                    tap();
                }
            }

            if !self.hover_over {
                if let Some(over) = &mut self.over {
                    over();
                }
                self.hover_over = true;
            }
        }

        if self.state == InteractiveState::Up {
            // Covers a release that happened after the pointer left the
            // object's bounds
            if self.pressed {
                if let Some(release) = &mut self.release {
                    release();
                }
                self.pressed = false;
                self.action = Action::Released;
            }

            if self.hover_over {
                if let Some(out) = &mut self.out {
                    out();
                }
                self.hover_over = false;
            }
        }
    }
}

/// Runs the interactive pass: every enabled object against every pointer
pub(crate) fn update_interactives(
    interactives: &mut [Interactive],
    pointers: &mut [Pointer],
    stage: &mut dyn Stage,
) {
    for object in interactives.iter_mut() {
        if !object.enabled {
            continue;
        }
        for pointer in pointers.iter_mut() {
            object.reconcile(pointer, stage);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::events::PointerEvent;
    use crate::scene::{Node, Scene};
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter(object: &mut Interactive) -> (Rc<Cell<u32>>, Rc<Cell<u32>>) {
        let presses = Rc::new(Cell::new(0));
        let releases = Rc::new(Cell::new(0));
        let p = presses.clone();
        object.on_press(move || p.set(p.get() + 1));
        let r = releases.clone();
        object.on_release(move || r.set(r.get() + 1));
        (presses, releases)
    }

    fn tick(object: &mut Interactive, pointer: &mut Pointer, scene: &mut Scene) {
        update_interactives(
            std::slice::from_mut(object),
            std::slice::from_mut(pointer),
            scene,
        );
    }

    #[test]
    fn test_press_fires_once_over_many_ticks() {
        let mut scene = Scene::new();
        let node = scene.add(scene.root(), Node::rect([0.0, 0.0], [20.0, 20.0]));
        let mut object = Interactive::new(node, false);
        let (presses, _) = counter(&mut object);

        let mut pointer = Pointer::new(1.0, 0.2);
        pointer.handle(PointerEvent::Moved { pos: [10.0, 10.0] });
        pointer.handle(PointerEvent::Pressed { pos: None, time: 0.0 });

        for _ in 0..10 {
            tick(&mut object, &mut pointer, &mut scene);
            assert_eq!(object.state, InteractiveState::Down);
        }
        assert_eq!(presses.get(), 1);
        assert_eq!(object.action, Action::Pressed);
    }

    #[test]
    fn test_release_over_object_fires_once() {
        let mut scene = Scene::new();
        let node = scene.add(scene.root(), Node::rect([0.0, 0.0], [20.0, 20.0]));
        let mut object = Interactive::new(node, false);
        let (presses, releases) = counter(&mut object);

        let mut pointer = Pointer::new(1.0, 0.2);
        pointer.handle(PointerEvent::Moved { pos: [10.0, 10.0] });
        pointer.handle(PointerEvent::Pressed { pos: None, time: 0.0 });
        tick(&mut object, &mut pointer, &mut scene);

        pointer.handle(PointerEvent::Released { time: 1.0 });
        for _ in 0..10 {
            tick(&mut object, &mut pointer, &mut scene);
            assert_eq!(object.state, InteractiveState::Over);
        }

        assert_eq!(presses.get(), 1);
        assert_eq!(releases.get(), 1);
        assert_eq!(object.action, Action::Released);
    }

    #[test]
    fn test_release_outside_bounds_still_fires() {
        let mut scene = Scene::new();
        let node = scene.add(scene.root(), Node::rect([0.0, 0.0], [20.0, 20.0]));
        let mut object = Interactive::new(node, false);
        let (_, releases) = counter(&mut object);

        let mut pointer = Pointer::new(1.0, 0.2);
        pointer.handle(PointerEvent::Moved { pos: [10.0, 10.0] });
        pointer.handle(PointerEvent::Pressed { pos: None, time: 0.0 });
        tick(&mut object, &mut pointer, &mut scene);

        // Drag off the object, then lift
        pointer.handle(PointerEvent::Moved { pos: [100.0, 100.0] });
        pointer.handle(PointerEvent::Released { time: 1.0 });
        tick(&mut object, &mut pointer, &mut scene);

        assert_eq!(object.state, InteractiveState::Up);
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn test_over_and_out_fire_once_per_hover() {
        let mut scene = Scene::new();
        let node = scene.add(scene.root(), Node::rect([0.0, 0.0], [20.0, 20.0]));
        let mut object = Interactive::new(node, false);

        let overs = Rc::new(Cell::new(0));
        let o = overs.clone();
        object.on_over(move || o.set(o.get() + 1));
        let outs = Rc::new(Cell::new(0));
        let o = outs.clone();
        object.on_out(move || o.set(o.get() + 1));

        let mut pointer = Pointer::new(1.0, 0.2);
        pointer.handle(PointerEvent::Moved { pos: [10.0, 10.0] });
        for _ in 0..5 {
            tick(&mut object, &mut pointer, &mut scene);
        }
        assert_eq!(overs.get(), 1);
        assert_eq!(outs.get(), 0);

        pointer.handle(PointerEvent::Moved { pos: [100.0, 100.0] });
        for _ in 0..5 {
            tick(&mut object, &mut pointer, &mut scene);
        }
        assert_eq!(overs.get(), 1);
        assert_eq!(outs.get(), 1);
    }

    #[test]
    fn test_tap_dispatches_to_object() {
        let mut scene = Scene::new();
        let node = scene.add(scene.root(), Node::rect([0.0, 0.0], [20.0, 20.0]));
        let mut object = Interactive::new(node, false);
        let taps = Rc::new(Cell::new(0));
        let t = taps.clone();
        object.on_tap(move || t.set(t.get() + 1));

        let mut pointer = Pointer::new(1.0, 0.2);
        pointer.handle(PointerEvent::Moved { pos: [10.0, 10.0] });
        pointer.handle(PointerEvent::Pressed { pos: None, time: 0.0 });
        tick(&mut object, &mut pointer, &mut scene);
        pointer.handle(PointerEvent::Released { time: 0.1 });
        tick(&mut object, &mut pointer, &mut scene);

        assert_eq!(taps.get(), 1);
    }

    #[test]
    fn test_disabled_object_fires_nothing() {
        let mut scene = Scene::new();
        let node = scene.add(scene.root(), Node::rect([0.0, 0.0], [20.0, 20.0]));
        let mut object = Interactive::new(node, false);
        let (presses, releases) = counter(&mut object);
        object.enabled = false;

        let mut pointer = Pointer::new(1.0, 0.2);
        pointer.handle(PointerEvent::Moved { pos: [10.0, 10.0] });
        pointer.handle(PointerEvent::Pressed { pos: None, time: 0.0 });
        tick(&mut object, &mut pointer, &mut scene);
        pointer.handle(PointerEvent::Released { time: 0.1 });
        tick(&mut object, &mut pointer, &mut scene);

        assert_eq!(presses.get(), 0);
        assert_eq!(releases.get(), 0);
        assert_eq!(object.state, InteractiveState::Up);
    }

    #[test]
    fn test_button_frames_track_state() {
        let mut scene = Scene::new();
        let node = scene.add(
            scene.root(),
            Node::rect([0.0, 0.0], [20.0, 20.0]).with_frames(3),
        );
        let mut object = Interactive::new(node, true);
        let mut pointer = Pointer::new(1.0, 0.2);

        // Hover: frame 1
        pointer.handle(PointerEvent::Moved { pos: [10.0, 10.0] });
        tick(&mut object, &mut pointer, &mut scene);
        assert_eq!(scene.frame(node), 1);

        // Down: frame 2
        pointer.handle(PointerEvent::Pressed { pos: None, time: 0.0 });
        tick(&mut object, &mut pointer, &mut scene);
        assert_eq!(scene.frame(node), 2);

        // Released away from the button: frame 0
        pointer.handle(PointerEvent::Moved { pos: [100.0, 100.0] });
        pointer.handle(PointerEvent::Released { time: 1.0 });
        tick(&mut object, &mut pointer, &mut scene);
        assert_eq!(scene.frame(node), 0);
    }

    #[test]
    fn test_two_frame_button_shows_second_frame_when_down() {
        let mut scene = Scene::new();
        let node = scene.add(
            scene.root(),
            Node::rect([0.0, 0.0], [20.0, 20.0]).with_frames(2),
        );
        let mut object = Interactive::new(node, true);
        let mut pointer = Pointer::new(1.0, 0.2);

        pointer.handle(PointerEvent::Moved { pos: [10.0, 10.0] });
        pointer.handle(PointerEvent::Pressed { pos: None, time: 0.0 });
        tick(&mut object, &mut pointer, &mut scene);
        assert_eq!(scene.frame(node), 1);
    }
}
