use anyhow::Result;
use log::info;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::WindowBuilder,
};

mod app;
mod core;
mod engine;
mod game;

use app::Application;
use engine::render::TraceSurface;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Pixel Duet...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Pixel Duet")
        .with_inner_size(winit::dpi::LogicalSize::new(640, 480))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut app = Application::new(TraceSurface)?;

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                // Auto-repeat presses would only re-set an already-held
                // button; skip them to keep the queue small.
                if let PhysicalKey::Code(code) = event.physical_key {
                    if !event.repeat {
                        app.queue_key(code, event.state.is_pressed());
                    }
                }
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                app.tick_now();
            }
            Event::AboutToWait => {
                // Request redraw on next frame; this is the only scheduling
                // the loop does, and it never stops on its own.
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
