use std::time::Instant;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Frame metadata - frame number and timing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

#[derive(Debug, Clone, Copy)]
enum TimeSource {
    Wall { start: Instant, last: Instant },
    /// Every frame advances by the same step (headless runs)
    Fixed { step: f32 },
}

/// Produces one [`FrameInfo`] per call to `tick` and keeps a running FPS estimate
#[derive(Debug, Clone)]
pub struct FrameClock {
    source: TimeSource,
    number: u64,
    time: f32,
    fps: f32,
    window_frames: u32,
    window_time: f32,
}

impl FrameClock {
    pub fn wall() -> Self {
        let now = Instant::now();
        Self::with_source(TimeSource::Wall { start: now, last: now })
    }

    pub fn fixed(hz: f32) -> Self {
        Self::with_source(TimeSource::Fixed { step: 1.0 / hz.max(1.0) })
    }

    fn with_source(source: TimeSource) -> Self {
        Self {
            source,
            number: 0,
            time: 0.0,
            fps: 0.0,
            window_frames: 0,
            window_time: 0.0,
        }
    }

    pub fn tick(&mut self) -> FrameInfo {
        let (time, delta) = match &mut self.source {
            TimeSource::Wall { start, last } => {
                let now = Instant::now();
                let delta = now.duration_since(*last).as_secs_f32();
                *last = now;
                (now.duration_since(*start).as_secs_f32(), delta)
            }
            TimeSource::Fixed { step } => (self.time + *step, *step),
        };

        let info = FrameInfo {
            number: self.number,
            time,
            delta,
        };
        self.number += 1;
        self.time = time;

        self.window_frames += 1;
        self.window_time += delta;
        if self.window_time >= FPS_UPDATE_INTERVAL {
            self.fps = self.window_frames as f32 / self.window_time;
            self.window_frames = 0;
            self.window_time = 0.0;
        }

        info
    }

    /// Zero until the first full measurement window has passed
    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn frames(&self) -> u64 {
        self.number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_is_deterministic() {
        let mut clock = FrameClock::fixed(60.0);
        let first = clock.tick();
        let second = clock.tick();
        assert_eq!(first.number, 0);
        assert_eq!(second.number, 1);
        assert!((second.time - 2.0 / 60.0).abs() < 1e-6);
        assert!((second.delta - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn fps_settles_after_one_window() {
        let mut clock = FrameClock::fixed(50.0);
        for _ in 0..49 {
            clock.tick();
        }
        assert_eq!(clock.fps(), 0.0);
        for _ in 0..2 {
            clock.tick();
        }
        assert!((clock.fps() - 50.0).abs() < 0.5);
        assert_eq!(clock.frames(), 51);
    }

    #[test]
    fn wall_clock_counts_frames() {
        let mut clock = FrameClock::wall();
        clock.tick();
        let info = clock.tick();
        assert_eq!(info.number, 1);
        assert!(info.delta >= 0.0);
    }
}
