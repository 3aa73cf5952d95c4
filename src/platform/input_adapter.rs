use log::info;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::NavKey;
use crate::interaction::screen_to_ndc;
use crate::session::Session;

/// Cursor travel, in pixels, below which a press-release counts as a click
const CLICK_SLOP: f32 = 4.0;
/// Pixel scroll per zoom notch on touchpads
const PIXELS_PER_NOTCH: f32 = 50.0;
const AMBIENT_STEP: f32 = 0.1;
const INTENSITY_STEP: f32 = 1.0;

/// Adapter that turns winit window events into session input
#[derive(Debug, Clone)]
pub struct WinitInput {
    cursor: Option<(f32, f32)>,
    rotating: bool,
    panning: bool,
    drag_distance: f32,
    viewport: (f32, f32),
}

impl WinitInput {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cursor: None,
            rotating: false,
            panning: false,
            drag_distance: 0.0,
            viewport: (width as f32, height as f32),
        }
    }

    /// Process a window event, forwarding anything relevant to `session`
    pub fn process_event(&mut self, event: &WindowEvent, session: &mut Session) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if let Some(key) = Self::keycode_to_nav_key(code) {
                        session.key(key, event.state == ElementState::Pressed);
                    } else if event.state == ElementState::Pressed {
                        Self::adjust_lighting(code, session);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => match (button, state) {
                (MouseButton::Left, ElementState::Pressed) => {
                    self.rotating = true;
                    self.drag_distance = 0.0;
                }
                (MouseButton::Left, ElementState::Released) => {
                    self.rotating = false;
                    if self.drag_distance < CLICK_SLOP {
                        if let Some((x, y)) = self.cursor {
                            session.click(screen_to_ndc(x, y, self.viewport.0, self.viewport.1));
                        }
                    }
                }
                (MouseButton::Right, state) => self.panning = *state == ElementState::Pressed,
                _ => {}
            },
            WindowEvent::CursorMoved { position, .. } => {
                let new_pos = (position.x as f32, position.y as f32);
                if let Some(old_pos) = self.cursor {
                    let (dx, dy) = (new_pos.0 - old_pos.0, new_pos.1 - old_pos.1);
                    if self.rotating {
                        self.drag_distance += dx.hypot(dy);
                        session.drag(dx, dy, self.viewport.1);
                    } else if self.panning {
                        session.pan(dx, dy, self.viewport.1);
                    }
                }
                self.cursor = Some(new_pos);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let notches = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / PIXELS_PER_NOTCH,
                };
                session.zoom(notches);
            }
            WindowEvent::Resized(size) => {
                self.viewport = (size.width as f32, size.height as f32);
                session.resize(size.width, size.height);
            }
            // Key-up events are lost while unfocused
            WindowEvent::Focused(false) => {
                session.input.release_all();
                self.rotating = false;
                self.panning = false;
            }
            _ => {}
        }
    }

    /// `[`/`]` dim or brighten the ambient light, `-`/`=` the ceiling lights
    fn adjust_lighting(code: KeyCode, session: &mut Session) {
        let lighting = &mut session.lighting;
        match code {
            KeyCode::BracketLeft => {
                let v = lighting.set_ambient(lighting.ambient() - AMBIENT_STEP);
                info!("Ambient light: {:.1}", v);
            }
            KeyCode::BracketRight => {
                let v = lighting.set_ambient(lighting.ambient() + AMBIENT_STEP);
                info!("Ambient light: {:.1}", v);
            }
            KeyCode::Minus | KeyCode::Equal => {
                let current = lighting.points().first().map_or(0.0, |p| p.intensity);
                let step = if code == KeyCode::Minus { -INTENSITY_STEP } else { INTENSITY_STEP };
                let v = lighting.set_point_intensity(current + step);
                info!("Ceiling light intensity: {:.0}", v);
            }
            _ => {}
        }
    }

    /// Map winit KeyCode to NavKey
    pub fn keycode_to_nav_key(code: KeyCode) -> Option<NavKey> {
        match code {
            KeyCode::KeyW | KeyCode::ArrowUp => Some(NavKey::Forward),
            KeyCode::KeyS | KeyCode::ArrowDown => Some(NavKey::Back),
            KeyCode::KeyA | KeyCode::ArrowLeft => Some(NavKey::Left),
            KeyCode::KeyD | KeyCode::ArrowRight => Some(NavKey::Right),
            KeyCode::Space => Some(NavKey::Ascend),
            _ => None,
        }
    }
}
