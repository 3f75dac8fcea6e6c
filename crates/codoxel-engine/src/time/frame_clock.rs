use std::time::Instant;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Wall-clock seconds since the clock started. Drives animations.
    pub elapsed: f32,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// One clock per window, started when the window is created. `elapsed` follows
/// the wall clock, so animations keep their pace across stalls and minimized
/// periods instead of resuming where they paused.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }

    /// Samples the clock for the frame about to be rendered.
    pub fn tick(&self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&self, now: Instant) -> FrameTime {
        FrameTime {
            elapsed: now.saturating_duration_since(self.start).as_secs_f32(),
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn elapsed_follows_the_wall_clock() {
        let clock = FrameClock::new();
        let start = clock.start;

        assert_eq!(clock.tick_at(start).elapsed, 0.0);
        assert_eq!(clock.tick_at(start + Duration::from_millis(250)).elapsed, 0.25);

        // A long stall is not clamped.
        assert_eq!(clock.tick_at(start + Duration::from_secs(30)).elapsed, 30.0);
    }

    #[test]
    fn samples_before_start_saturate_to_zero() {
        let clock = FrameClock::new();
        let before = clock.start.checked_sub(Duration::from_millis(5));
        if let Some(before) = before {
            assert_eq!(clock.tick_at(before).elapsed, 0.0);
        }
    }
}
