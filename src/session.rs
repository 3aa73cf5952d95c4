//! One walkthrough: the room, the navigation controller, input and lights.
//!
//! Hosts feed input events in as they arrive and call [`Session::tick`] once
//! per frame; everything runs on the host's thread.

use glam::Vec2;
use log::{debug, info};

use crate::camera::Camera;
use crate::config::LayoutConfig;
use crate::input::{InputState, NavKey};
use crate::interaction::{self, Pick};
use crate::lighting::LightingRig;
use crate::nav::{FrameReport, NavigationController, OrbitRig};
use crate::scene::{build_room, Room};

pub struct Session {
    pub room: Room,
    pub nav: NavigationController,
    pub input: InputState,
    pub lighting: LightingRig,
}

impl Session {
    pub fn new(config: &LayoutConfig) -> Self {
        let room = build_room(config);
        let camera = Camera::new(&config.camera);
        let orbit = OrbitRig::new(&config.orbit, &config.room);
        let nav = NavigationController::new(camera, orbit, room.bounds, room.obstacles(), config.navigation);
        let lighting = LightingRig::new(&config.lighting, &room.light_positions);

        info!(
            "Session ready: camera at {:?} looking at {:?}",
            nav.camera.position, nav.camera.target
        );

        Self {
            room,
            nav,
            input: InputState::new(),
            lighting,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.nav.camera
    }

    pub fn key(&mut self, key: NavKey, down: bool) {
        self.input.set(key, down);
    }

    pub fn drag(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        self.nav.orbit.drag(dx, dy, viewport_height);
    }

    pub fn zoom(&mut self, notches: f32) {
        self.nav.orbit.zoom(notches);
    }

    pub fn pan(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        self.nav.orbit.pan(dx, dy, viewport_height);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.nav.camera.set_viewport(width, height);
    }

    pub fn click(&mut self, ndc: Vec2) -> Option<Pick> {
        let hit = interaction::click(&mut self.room.scene, &self.nav.camera, ndc);
        if let Some(hit) = &hit {
            debug!("Clicked {:?} at distance {:.2}", hit.kind, hit.distance);
        }
        hit
    }

    /// Navigation for this frame, then fan rotation
    pub fn tick(&mut self) -> FrameReport {
        let report = self.nav.tick(&self.room.scene, &self.input);
        self.room.scene.advance_spin();
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::StepOutcome;
    use crate::scene::ObjectKind;

    #[test]
    fn idle_session_keeps_camera_still() {
        let mut session = Session::new(&LayoutConfig::default());
        let start = session.camera().position;
        let report = session.tick();
        assert_eq!(report.step, StepOutcome::Idle);
        assert!(!report.corrected);
        assert!((session.camera().position - start).length() < 1e-4);
    }

    #[test]
    fn tick_spins_fans() {
        let mut session = Session::new(&LayoutConfig::default());
        session.tick();
        for (_, fan) in session.room.scene.of_kind(ObjectKind::Fan) {
            assert!((fan.transform.rotation_y - 0.4).abs() < 1e-6);
        }
    }

    #[test]
    fn held_key_moves_camera() {
        let mut session = Session::new(&LayoutConfig::default());
        let start = session.camera().position;
        session.key(NavKey::Back, true);
        let report = session.tick();
        assert_eq!(report.step, StepOutcome::Moved);
        assert!((session.camera().position - start).length() > 0.05);
    }

    #[test]
    fn inconsistent_limits_built_in_code_do_not_panic() {
        // Bypasses LayoutConfig::validate, which rejects both layouts on load
        let mut shallow = LayoutConfig::default();
        shallow.room.depth = 2.0;
        let mut narrow = LayoutConfig::default();
        narrow.room.width = 0.8;

        for config in [shallow, narrow] {
            let mut session = Session::new(&config);
            session.key(NavKey::Forward, true);
            session.drag(40.0, 10.0, 600.0);
            session.zoom(3.0);
            for _ in 0..5 {
                session.tick();
            }
            assert!(session.camera().position.is_finite());
        }
    }

    #[test]
    fn starts_from_overview_pose() {
        let session = Session::new(&LayoutConfig::default());
        assert_eq!(session.camera().position, glam::Vec3::new(4.0, 3.0, 4.0));
        assert_eq!(session.camera().target, glam::Vec3::ZERO);
    }

    #[test]
    fn lights_follow_room_layout() {
        let session = Session::new(&LayoutConfig::default());
        assert_eq!(session.lighting.points().len(), 4);
    }
}
