use std::sync::Arc;
use std::time::Instant;

use nalgebra_glm as glm;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::Window;

use orbit_rig::camera::OrbitRig;
use orbit_rig::input::InputState;
use orbit_rig::settings::Settings;
use orbit_rig::world::{WorldBubble, WorldClient, WorldLoader};

pub struct App {
    pub window: Arc<Window>,
    rig: OrbitRig,
    input: InputState,
    worlds: WorldLoader<WorldBubble>,
    last_frame: Instant,
    pub pending_connect: bool,
}

pub struct EventResponse {
    pub repaint: bool,
    pub exit: bool,
}

impl App {
    pub async fn new(window: Arc<Window>, settings: Settings) -> anyhow::Result<Self> {
        let camera = &settings.camera;
        let rig = OrbitRig::initialize(
            glm::Vec3::from(camera.camera_position),
            glm::Vec3::from(camera.target_position),
            camera.rig.clone(),
        )?;

        let client = WorldClient::new(settings.world.base_url.clone());
        let bubble = WorldBubble::new(settings.bubble.clone());
        let mut worlds = WorldLoader::new(client, Some(bubble));

        match worlds.load_world_list().await {
            Ok(_) => {
                for (i, option) in worlds.selector().options().iter().enumerate() {
                    log::info!("  [{i}] {option}");
                }
            }
            Err(e) => log::error!("failed to load world list: {e}"),
        }

        let mut app = Self {
            window,
            rig,
            input: InputState::new(settings.input.clone()),
            worlds,
            last_frame: Instant::now(),
            pending_connect: false,
        };
        app.update_title();
        Ok(app)
    }

    pub fn handle_event(&mut self, event: &WindowEvent) -> EventResponse {
        match event {
            WindowEvent::CloseRequested => {
                return EventResponse {
                    repaint: false,
                    exit: true,
                };
            }
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed && !event.repeat =>
            {
                match event.physical_key {
                    PhysicalKey::Code(KeyCode::Escape) => {
                        return EventResponse {
                            repaint: false,
                            exit: true,
                        };
                    }
                    PhysicalKey::Code(KeyCode::Tab) => {
                        self.worlds.selector_mut().select_next();
                        self.update_title();
                    }
                    PhysicalKey::Code(KeyCode::Enter) => self.pending_connect = true,
                    PhysicalKey::Code(KeyCode::KeyR) => {
                        self.rig.reset();
                        self.update_title();
                    }
                    _ => {}
                }
            }
            _ => {}
        }

        let repaint = self.input.handle_window_event(event);
        EventResponse {
            repaint,
            exit: false,
        }
    }

    pub async fn connect_selected(&mut self) {
        match self.worlds.connect_selected().await {
            Ok(detail) => log::info!("connected to {} ({})", detail.name, detail.world_id),
            Err(e) => log::error!("failed to connect: {e}"),
        }
        self.update_title();
    }

    /// Advance one frame on the wall clock.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        let input = self.input.frame_input(dt);
        if self.rig.update(&input, dt) {
            self.update_title();
        }
        self.input.end_frame();
    }

    fn update_title(&self) {
        let position = self.rig.transform().position;
        let (yaw, pitch) = self.rig.spherical_angles();
        let world = self
            .worlds
            .selector()
            .selected()
            .map(|w| w.label())
            .unwrap_or_else(|| "no worlds".to_string());

        self.window.set_title(&format!(
            "Orbit Rig | {world} | pos=({:.2}, {:.2}, {:.2}) r={:.2} yaw={:.1} pitch={:.1}",
            position.x,
            position.y,
            position.z,
            self.rig.state().radius,
            yaw.to_degrees(),
            pitch.to_degrees(),
        ));
    }
}
