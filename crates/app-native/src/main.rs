use anyhow::Context;
use glam::Vec2;
use std::time::Instant;
use triswap_core::{Command, Scene, Session, VizParams};
use winit::dpi::LogicalSize;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

mod audio;
mod gpu;
mod mesh;

fn load_session(params: &VizParams) -> anyhow::Result<Session> {
    let json = std::fs::read_to_string(&params.data_source)
        .with_context(|| format!("reading dataset {}", params.data_source))?;
    let session = Session::from_json(&json, &params.layout)
        .with_context(|| format!("parsing dataset {}", params.data_source))?;
    Ok(session)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut params = VizParams::default();
    if let Some(path) = std::env::args().nth(1) {
        params.data_source = path;
    }
    let layout = params.layout;

    let mut session = load_session(&params)?;
    let mut scene = Scene::new(params.transition_ms);
    let mut mesh = mesh::MeshSurface::new(layout);
    let mut cues = audio::NativeCuePlayer::start();
    scene.sync(&session, &mut mesh);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("triswap")
        .with_inner_size(LogicalSize::new(layout.width as f64, layout.height as f64))
        .with_resizable(false)
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(gpu::GpuState::new(&window, layout))?;
    let started = Instant::now();
    let now_ms = move || started.elapsed().as_secs_f64() * 1000.0;
    // Last pointer position in plot space
    let mut cursor: Option<Vec2> = None;
    // Cursor position at the last left-button press
    let mut pressed: Option<Vec2> = None;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => gpu.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                let p = position.to_logical::<f32>(gpu.window.scale_factor());
                let plot = layout.to_plot(Vec2::new(p.x, p.y));
                cursor = Some(plot);
                let hover = scene.pick(plot);
                scene.set_hover(&session, hover, &mut mesh);
            }
            WindowEvent::CursorLeft { .. } => {
                cursor = None;
                scene.set_hover(&session, None, &mut mesh);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => pressed = cursor,
                ElementState::Released => {
                    let down = pressed.take().and_then(|p| scene.pick(p));
                    let up = cursor.and_then(|p| scene.pick(p));
                    // press and release must hit the same shape
                    if let (Some(key), true) = (up, down == up) {
                        let effects = session.handle(Command::Select(key));
                        log::info!("[click] item {} -> {:?}", key, effects.as_slice());
                        scene.apply(&session, &effects, now_ms(), &mut mesh, &mut cues);
                    }
                }
            },
            _ => {}
        },
        Event::AboutToWait => {
            scene.tick(now_ms(), &mut mesh, &mut cues);
            if mesh.take_dirty() {
                gpu.upload(&mesh.vertices());
            }
            match gpu.render() {
                Ok(_) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
