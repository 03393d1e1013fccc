//! Frame time sources

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Supplies elapsed frame time to the engine loop
pub trait TimeSource {
    /// Wait until the next frame is due for `target_fps`, then return the
    /// milliseconds elapsed since the previous call.
    fn tick(&mut self, target_fps: u32) -> f64;
}

/// Wall-clock time source that sleeps to hold a target frame rate
pub struct FrameClock {
    /// Total time handed out by `tick`, in seconds
    pub total_time: f64,
    /// Number of ticks so far
    pub frame_count: u64,
    /// Last tick instant
    last_instant: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            frame_count: 0,
            last_instant: Instant::now(),
        }
    }
}

impl FrameClock {
    /// Create a clock whose first tick measures from now
    pub fn new() -> Self {
        Self::default()
    }

    /// Time budget for one frame at `fps`. Zero disables pacing.
    fn frame_budget(fps: u32) -> Option<Duration> {
        (fps > 0).then(|| Duration::from_secs_f64(1.0 / fps as f64))
    }
}

impl TimeSource for FrameClock {
    fn tick(&mut self, target_fps: u32) -> f64 {
        if let Some(budget) = Self::frame_budget(target_fps) {
            let spent = self.last_instant.elapsed();
            if spent < budget {
                std::thread::sleep(budget - spent);
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;

        self.total_time += elapsed;
        self.frame_count += 1;
        elapsed * 1000.0
    }
}

/// Deterministic time source that replays a fixed list of frame times.
///
/// Never sleeps. Once the list runs out the last value repeats; an empty
/// list yields the nominal frame time for the requested rate.
#[derive(Debug, Clone, Default)]
pub struct ScriptedClock {
    frames: VecDeque<f64>,
    last: Option<f64>,
    /// Target rate passed to the most recent tick
    pub last_target_fps: Option<u32>,
}

impl ScriptedClock {
    /// Replay `frames_ms` in order, one value per tick.
    pub fn new(frames_ms: impl IntoIterator<Item = f64>) -> Self {
        Self {
            frames: frames_ms.into_iter().collect(),
            last: None,
            last_target_fps: None,
        }
    }

    /// Report the same frame time on every tick.
    pub fn constant(frame_ms: f64) -> Self {
        Self::new([frame_ms])
    }
}

impl TimeSource for ScriptedClock {
    fn tick(&mut self, target_fps: u32) -> f64 {
        self.last_target_fps = Some(target_fps);
        if let Some(ms) = self.frames.pop_front() {
            self.last = Some(ms);
            return ms;
        }
        match self.last {
            Some(ms) => ms,
            None if target_fps > 0 => 1000.0 / target_fps as f64,
            None => 0.0,
        }
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Box<T> {
    fn tick(&mut self, target_fps: u32) -> f64 {
        (**self).tick(target_fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_clock_defaults() {
        let clock = FrameClock::new();
        assert_eq!(clock.total_time, 0.0);
        assert_eq!(clock.frame_count, 0);
    }

    #[test]
    fn test_frame_clock_paces_to_target() {
        let mut clock = FrameClock::new();
        clock.tick(0);
        let ms = clock.tick(100);
        // 100 fps -> at least 10ms between ticks
        assert!(ms >= 9.9, "tick returned {ms}ms");
        assert_eq!(clock.frame_count, 2);
        assert!(clock.total_time > 0.0);
    }

    #[test]
    fn test_frame_clock_unpaced() {
        let mut clock = FrameClock::new();
        let ms = clock.tick(0);
        assert!(ms >= 0.0);
    }

    #[test]
    fn test_frame_budget() {
        assert!(FrameClock::frame_budget(0).is_none());
        let budget = FrameClock::frame_budget(50).unwrap();
        assert!((budget.as_secs_f64() - 0.02).abs() < 1e-9);
    }

    #[test]
    fn test_scripted_replays_then_repeats() {
        let mut clock = ScriptedClock::new([16.0, 500.0]);
        assert_eq!(clock.tick(60), 16.0);
        assert_eq!(clock.tick(60), 500.0);
        assert_eq!(clock.tick(60), 500.0);
        assert_eq!(clock.last_target_fps, Some(60));
    }

    #[test]
    fn test_scripted_empty_uses_nominal_frame() {
        let mut clock = ScriptedClock::default();
        assert!((clock.tick(50) - 20.0).abs() < 1e-9);
        assert_eq!(clock.tick(0), 0.0);
    }

    #[test]
    fn test_boxed_time_source() {
        let mut source: Box<dyn TimeSource> = Box::new(ScriptedClock::constant(8.0));
        assert_eq!(source.tick(120), 8.0);
    }
}
