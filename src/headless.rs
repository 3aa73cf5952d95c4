use anyhow::{anyhow, Result};
use glam::Vec3;
use log::{debug, info};

use crate::frame::FrameClock;
use crate::input::NavKey;
use crate::nav::StepOutcome;
use crate::session::Session;

const HEADLESS_HZ: f32 = 60.0;

/// Tally of a scripted run
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub moved: u64,
    pub blocked: u64,
    pub ascended: u64,
    pub corrections: u64,
    pub final_position: Vec3,
}

/// Parses a comma separated key list such as `w,d,space`
pub fn parse_keys(list: &str) -> Result<Vec<NavKey>> {
    list.split(',')
        .filter(|name| !name.trim().is_empty())
        .map(|name| NavKey::from_name(name).ok_or_else(|| anyhow!("Unknown key: {:?}", name.trim())))
        .collect()
}

/// Holds `keys` down and ticks the session `frames` times without a window
pub fn run(session: &mut Session, frames: u64, keys: &[NavKey]) -> RunSummary {
    for &key in keys {
        session.key(key, true);
    }

    let mut clock = FrameClock::fixed(HEADLESS_HZ);
    let mut summary = RunSummary::default();

    for _ in 0..frames {
        let frame = clock.tick();
        let report = session.tick();

        match report.step {
            StepOutcome::Moved => summary.moved += 1,
            StepOutcome::Blocked { ascended } => {
                summary.blocked += 1;
                if ascended {
                    summary.ascended += 1;
                }
            }
            StepOutcome::Ascended => summary.ascended += 1,
            StepOutcome::Idle => {}
        }
        if report.corrected {
            summary.corrections += 1;
        }

        debug!(
            "Frame {} ({:.3}s): {:?}, camera {:?}",
            frame.number,
            frame.time,
            report.step,
            session.camera().position
        );
    }

    summary.frames = clock.frames();
    summary.final_position = session.camera().position;
    info!(
        "Headless run: {} frames, {} moved, {} blocked, {} ascended, {} corrections, camera at {:?}",
        summary.frames, summary.moved, summary.blocked, summary.ascended, summary.corrections, summary.final_position
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;

    #[test]
    fn parse_key_list() {
        let keys = parse_keys("w, d,space").unwrap();
        assert_eq!(keys, [NavKey::Forward, NavKey::Right, NavKey::Ascend]);
        assert!(parse_keys("").unwrap().is_empty());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = parse_keys("w,shift").unwrap_err();
        assert!(err.to_string().contains("shift"));
    }

    #[test]
    fn walking_into_the_table_gets_blocked() {
        let mut config = LayoutConfig::default();
        // Eye level below the table top, looking at the table in the middle of the room
        config.camera.position = [2.0, 1.0, 2.0];
        let mut session = Session::new(&config);
        let summary = run(&mut session, 60, &[NavKey::Forward]);
        assert_eq!(summary.frames, 60);
        assert!(summary.moved > 0);
        assert!(summary.blocked > 0);
        assert_eq!(summary.moved + summary.blocked, 60);
        assert!(!session.nav.is_colliding(&session.room.scene, summary.final_position));
    }

    #[test]
    fn default_pose_walks_over_the_table() {
        let mut session = Session::new(&LayoutConfig::default());
        // Starts at height 3, above the inflated table box
        let summary = run(&mut session, 60, &[NavKey::Forward]);
        assert_eq!(summary.moved, 60);
        assert_eq!(summary.blocked, 0);
        assert!((summary.final_position.y - 3.0).abs() < 1e-4);
    }

    #[test]
    fn ascending_alone_reaches_the_ceiling() {
        let mut session = Session::new(&LayoutConfig::default());
        let summary = run(&mut session, 200, &[NavKey::Ascend]);
        assert_eq!(summary.ascended, 200);
        assert!((summary.final_position.y - session.nav.bounds.max_y).abs() < 1e-5);
    }
}
