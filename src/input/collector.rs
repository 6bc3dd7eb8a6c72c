//! Raw input collection from winit events
//!
//! Translates `winit` window events into the crate's device events and
//! feeds them to an [`Interaction`]. Mouse and touch go through the same
//! pointer path; only the first active touch point is tracked, matching
//! single-pointer semantics. Button releases are reported for the whole
//! window, so a release outside the surface is still observed.

use std::time::Instant;

use winit::event::{ElementState, MouseButton, Touch, TouchPhase, WindowEvent};
use winit::keyboard::PhysicalKey;

use super::context::Interaction;
use super::events::{KeyCode, KeyEvent, PointerEvent};

/// Adapts winit window events to interaction events
pub struct InputCollector {
    start: Instant,
    /// The touch id currently standing in for the pointer, if any
    active_touch: Option<u64>,
}

impl InputCollector {
    /// Creates a collector; timestamps are measured from this moment
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            active_touch: None,
        }
    }

    /// Seconds since the collector was created
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    /// Handles a winit window event, feeding the default pointer and the
    /// key bindings of `interaction`
    pub fn handle_window_event(&mut self, interaction: &mut Interaction, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                interaction.pointer_event(PointerEvent::Moved {
                    pos: [position.x as f32, position.y as f32],
                });
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if *button != MouseButton::Left {
                    return;
                }
                let event = match state {
                    ElementState::Pressed => PointerEvent::Pressed {
                        pos: None,
                        time: self.now(),
                    },
                    ElementState::Released => PointerEvent::Released { time: self.now() },
                };
                interaction.pointer_event(event);
            }

            WindowEvent::Touch(touch) => self.handle_touch(interaction, touch),

            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let Some(code) = map_key(code) else {
                    return;
                };
                let event = match event.state {
                    ElementState::Pressed => KeyEvent::Down(code),
                    ElementState::Released => KeyEvent::Up(code),
                };
                interaction.key_event(event);
            }

            _ => {}
        }
    }

    fn handle_touch(&mut self, interaction: &mut Interaction, touch: &Touch) {
        let pos = [touch.location.x as f32, touch.location.y as f32];
        match touch.phase {
            TouchPhase::Started => {
                // Only the first touch point acts as the pointer
                if self.active_touch.is_none() {
                    self.active_touch = Some(touch.id);
                    interaction.pointer_event(PointerEvent::Pressed {
                        pos: Some(pos),
                        time: self.now(),
                    });
                }
            }
            TouchPhase::Moved => {
                if self.active_touch == Some(touch.id) {
                    interaction.pointer_event(PointerEvent::Moved { pos });
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.active_touch == Some(touch.id) {
                    self.active_touch = None;
                    interaction.pointer_event(PointerEvent::Released { time: self.now() });
                }
            }
        }
    }
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new()
    }
}

fn map_key(code: winit::keyboard::KeyCode) -> Option<KeyCode> {
    use winit::keyboard::KeyCode as Wk;
    let mapped = match code {
        Wk::ArrowUp => KeyCode::Up,
        Wk::ArrowDown => KeyCode::Down,
        Wk::ArrowLeft => KeyCode::Left,
        Wk::ArrowRight => KeyCode::Right,
        Wk::Space => KeyCode::Space,
        Wk::Enter => KeyCode::Enter,
        Wk::Escape => KeyCode::Escape,
        Wk::Tab => KeyCode::Tab,
        Wk::KeyW => KeyCode::W,
        Wk::KeyA => KeyCode::A,
        Wk::KeyS => KeyCode::S,
        Wk::KeyD => KeyCode::D,
        _ => return None,
    };
    Some(mapped)
}
