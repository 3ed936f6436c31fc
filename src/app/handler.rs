use std::sync::Arc;

use tokio::runtime::Runtime;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use orbit_rig::settings::Settings;

use crate::app::app::App;

pub struct AppHandler {
    pub app: Option<App>,
    pub settings: Settings,
    pub runtime: Runtime,
}

impl ApplicationHandler for AppHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("Orbit Rig")
            .with_inner_size(winit::dpi::LogicalSize::new(1200.0, 800.0));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        match self.runtime.block_on(App::new(window, self.settings.clone())) {
            Ok(app) => self.app = Some(app),
            Err(e) => {
                log::error!("failed to start: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(app) = &mut self.app {
            let response = app.handle_event(&event);
            if response.repaint {
                app.window.request_redraw();
            }
            if response.exit {
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(app) = &mut self.app {
            if app.pending_connect {
                app.pending_connect = false;
                self.runtime.block_on(app.connect_selected());
            }

            app.tick();
            app.window.request_redraw();
        }
    }
}
