use anyhow::Result;
use log::{error, info};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use super::input_adapter::WinitInput;
use crate::frame::FrameClock;
use crate::session::Session;

const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 720;

/// Window host: feeds winit events into the session and ticks it once per
/// redraw. Drawing is left to the renderer; the title shows the camera pose.
struct App {
    window: Option<Arc<Window>>,
    session: Session,
    input: WinitInput,
    clock: FrameClock,
    quiet: bool,
}

impl App {
    fn new(session: Session, quiet: bool) -> Self {
        Self {
            window: None,
            session,
            input: WinitInput::new(INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT),
            clock: FrameClock::wall(),
            quiet,
        }
    }

    fn redraw(&mut self) {
        let frame = self.clock.tick();
        self.session.tick();

        let Some(window) = &self.window else {
            return;
        };
        let p = self.session.camera().position;
        window.set_title(&format!(
            "Office Walkthrough - camera ({:.2}, {:.2}, {:.2}) - {:.0} fps",
            p.x,
            p.y,
            p.z,
            self.clock.fps()
        ));
        if !self.quiet && frame.number % 120 == 0 {
            info!("Frame {} at {:.1}s: camera {:?}", frame.number, frame.time, p);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Office Walkthrough")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.input = WinitInput::new(size.width, size.height);
        self.session.resize(size.width, size.height);
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::RedrawRequested => self.redraw(),
            other => self.input.process_event(&other, &mut self.session),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

pub fn run(session: Session, quiet: bool) -> Result<()> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(session, quiet);

    info!("Office Walkthrough - Controls: WASD/arrows move, Space rises, drag orbits, wheel zooms, click a fan, [ ] ambient, - = ceiling lights, Escape quits");
    event_loop.run_app(&mut app)?;

    Ok(())
}
