use winit::event_loop::{ControlFlow, EventLoop};

use orbit_rig::settings::Settings;

mod app;

use app::handler::AppHandler;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut settings = Settings::load();

    // Optional world service URL, e.g. `orbit-rig http://192.168.3.66:8081/api`
    if let Some(base_url) = std::env::args().nth(1) {
        settings.world.base_url = base_url;
    }
    log::info!("world service: {}", settings.world.base_url);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut handler = AppHandler {
        app: None,
        settings,
        runtime: tokio::runtime::Runtime::new()?,
    };

    event_loop.run_app(&mut handler)?;

    Ok(())
}
