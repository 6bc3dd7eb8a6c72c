//! Interactive demo: drag two boxes, click a button, steer a circle
//!
//! Opens a winit window, wires its events through the collector, and
//! ticks the interaction layer every redraw. There is no rendering; the
//! scene state is reported through tracing output.

use std::cell::Cell;
use std::rc::Rc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use scene_input::input::{InputCollector, Interaction};
use scene_input::scene::{Node, Scene, Stage};
use scene_input::{InteractionConfig, NodeId};

struct Demo {
    window: Option<Window>,
    scene: Scene,
    interaction: Interaction,
    collector: InputCollector,
    crate_a: NodeId,
    crate_b: NodeId,
    player: NodeId,
    clicks: Rc<Cell<u32>>,
}

impl Demo {
    fn new(config: InteractionConfig) -> Self {
        let mut scene = Scene::new();
        let root = scene.root();

        let crate_a = scene.add(root, Node::rect([100.0, 100.0], [80.0, 80.0]));
        let crate_b = scene.add(root, Node::rect([150.0, 150.0], [80.0, 80.0]));
        let button = scene.add(root, Node::rect([350.0, 40.0], [120.0, 40.0]).with_frames(3));
        let player = scene.add(root, Node::circle([400.0, 300.0], 40.0));

        let mut interaction = Interaction::with_config(config);
        interaction.make_draggable(crate_a);
        interaction.make_draggable(crate_b);

        let clicks = Rc::new(Cell::new(0));
        let id = interaction.button(button);
        let counter = clicks.clone();
        interaction.interactive_mut(id).on_release(move || {
            counter.set(counter.get() + 1);
            info!(clicks = counter.get(), "button clicked");
        });

        if let Err(e) = interaction.arrow_control(player, 5.0) {
            warn!(error = %e, "arrow control disabled");
        }

        Self {
            window: None,
            scene,
            interaction,
            collector: InputCollector::new(),
            crate_a,
            crate_b,
            player,
            clicks,
        }
    }

    fn tick(&mut self) {
        self.interaction.update(&mut self.scene);

        // Integrate the steered circle
        let pos = self.scene.position(self.player);
        let vel = self.scene.velocity(self.player);
        if vel != [0.0, 0.0] {
            self.scene
                .set_position(self.player, [pos[0] + vel[0], pos[1] + vel[1]]);
        }
    }
}

impl ApplicationHandler for Demo {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attributes = Window::default_attributes()
                .with_title("scene-input demo")
                .with_inner_size(winit::dpi::LogicalSize::new(800.0, 600.0));

            match event_loop.create_window(attributes) {
                Ok(window) => {
                    window.request_redraw();
                    self.window = Some(window);
                }
                Err(e) => {
                    warn!(error = %e, "failed to create window");
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!(
                    crate_a = ?self.scene.position(self.crate_a),
                    crate_b = ?self.scene.position(self.crate_b),
                    player = ?self.scene.position(self.player),
                    clicks = self.clicks.get(),
                    "closing"
                );
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.tick();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            other => {
                self.collector
                    .handle_window_event(&mut self.interaction, &other);
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = InteractionConfig::load_from_env().unwrap_or_else(|e| {
        warn!(error = %e, "failed to load config, using defaults");
        InteractionConfig::default()
    });

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut demo = Demo::new(config);
    event_loop
        .run_app(&mut demo)
        .expect("Failed to run event loop");
}
