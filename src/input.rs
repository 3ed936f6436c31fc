use nalgebra_glm as glm;
use serde::{Deserialize, Serialize};
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::camera::RigInput;

/// Trackpads report pixels; this many make one wheel line.
const PIXELS_PER_LINE: f32 = 20.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Orbit input units per pixel of right-drag.
    pub drag_sensitivity: f32,
    /// Zoom input units per wheel line.
    pub wheel_sensitivity: f32,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            drag_sensitivity: 0.1,
            wheel_sensitivity: 1.0,
        }
    }
}

/// Tracks held keys, mouse drags and wheel motion between frames and turns
/// them into a [`RigInput`].
pub struct InputState {
    settings: InputSettings,
    left: bool,
    right: bool,
    up: bool,
    down: bool,
    zoom_in: bool,
    zoom_out: bool,
    right_mouse_pressed: bool,
    last_mouse_pos: Option<(f64, f64)>,
    drag_pixels: glm::Vec2,
    wheel_lines: f32,
}

impl InputState {
    pub fn new(settings: InputSettings) -> Self {
        Self {
            settings,
            left: false,
            right: false,
            up: false,
            down: false,
            zoom_in: false,
            zoom_out: false,
            right_mouse_pressed: false,
            last_mouse_pos: None,
            drag_pixels: glm::vec2(0.0, 0.0),
            wheel_lines: 0.0,
        }
    }

    /// Feed a window event. Returns true if it was a camera input.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(code) => self.on_key(code, event.state == ElementState::Pressed),
                _ => false,
            },
            WindowEvent::MouseInput { state, button, .. } => {
                self.on_mouse_button(*button, *state == ElementState::Pressed)
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.on_cursor_moved((position.x, position.y))
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                };
                self.on_scroll_lines(lines);
                true
            }
            WindowEvent::Focused(false) => {
                self.release_all();
                false
            }
            _ => false,
        }
    }

    pub fn on_key(&mut self, code: KeyCode, pressed: bool) -> bool {
        let slot = match code {
            KeyCode::KeyA | KeyCode::ArrowLeft => &mut self.left,
            KeyCode::KeyD | KeyCode::ArrowRight => &mut self.right,
            KeyCode::KeyW | KeyCode::ArrowUp => &mut self.up,
            KeyCode::KeyS | KeyCode::ArrowDown => &mut self.down,
            KeyCode::KeyE | KeyCode::PageUp | KeyCode::Equal | KeyCode::NumpadAdd => {
                &mut self.zoom_in
            }
            KeyCode::KeyQ | KeyCode::PageDown | KeyCode::Minus | KeyCode::NumpadSubtract => {
                &mut self.zoom_out
            }
            _ => return false,
        };
        *slot = pressed;
        true
    }

    pub fn on_mouse_button(&mut self, button: MouseButton, pressed: bool) -> bool {
        if button != MouseButton::Right {
            return false;
        }
        self.right_mouse_pressed = pressed;
        if !pressed {
            self.last_mouse_pos = None;
        }
        true
    }

    pub fn on_cursor_moved(&mut self, position: (f64, f64)) -> bool {
        if !self.right_mouse_pressed {
            self.last_mouse_pos = None;
            return false;
        }

        if let Some(last) = self.last_mouse_pos {
            self.drag_pixels.x += (position.0 - last.0) as f32;
            self.drag_pixels.y += (position.1 - last.1) as f32;
        }
        self.last_mouse_pos = Some(position);
        true
    }

    /// Positive lines zoom in.
    pub fn on_scroll_lines(&mut self, lines: f32) {
        self.wheel_lines += lines;
    }

    pub fn release_all(&mut self) {
        self.left = false;
        self.right = false;
        self.up = false;
        self.down = false;
        self.zoom_in = false;
        self.zoom_out = false;
        self.right_mouse_pressed = false;
        self.last_mouse_pos = None;
        self.end_frame();
    }

    /// Input for a frame lasting `dt` seconds.
    ///
    /// Held keys give unit rates. Drag and wheel motion are impulses, so they
    /// are divided by `dt` to make the rig's per-second step cover exactly the
    /// motion seen this frame.
    pub fn frame_input(&self, dt: f32) -> RigInput {
        let axis = |neg: bool, pos: bool| f32::from(u8::from(pos)) - f32::from(u8::from(neg));

        let mut orbit = glm::vec2(axis(self.left, self.right), axis(self.up, self.down));
        let mut zoom = axis(self.zoom_out, self.zoom_in);

        if dt > 0.0 {
            orbit += self.drag_pixels * (self.settings.drag_sensitivity / dt);
            zoom += self.wheel_lines * self.settings.wheel_sensitivity / dt;
        }

        RigInput { orbit, zoom }
    }

    /// Clear per-frame impulses. Held keys stay held.
    pub fn end_frame(&mut self) {
        self.drag_pixels = glm::vec2(0.0, 0.0);
        self.wheel_lines = 0.0;
    }
}
