/// Converts host frame timestamps into scene time.
///
/// The host passes the `requestAnimationFrame` timestamp in milliseconds.
/// Scene time is that value times `time_scale`. Timestamps that go
/// backwards are clamped to the last accepted one, so scene time never
/// decreases.
pub struct FrameClock {
    /// Factor from host milliseconds to scene time.
    time_scale: f32,
    /// Last accepted host timestamp in milliseconds.
    last_ms: f64,
    /// Frames advanced so far.
    frames: u64,
}

impl FrameClock {
    pub fn new(time_scale: f32) -> Self {
        Self {
            time_scale,
            last_ms: 0.0,
            frames: 0,
        }
    }

    /// Accept a host timestamp and return the scene time for this frame.
    pub fn advance(&mut self, timestamp_ms: f64) -> f32 {
        if timestamp_ms.is_finite() && timestamp_ms >= self.last_ms {
            self.last_ms = timestamp_ms;
        } else {
            log::trace!("frame clock: ignoring timestamp {timestamp_ms} (last {})", self.last_ms);
        }
        self.frames += 1;
        self.time()
    }

    /// Scene time of the last accepted timestamp.
    pub fn time(&self) -> f32 {
        (self.last_ms * self.time_scale as f64) as f32
    }

    /// Number of frames advanced.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_milliseconds() {
        let mut clock = FrameClock::new(0.0002);
        let t = clock.advance(5000.0);
        assert!((t - 1.0).abs() < 1e-6, "t was {t}");
    }

    #[test]
    fn never_goes_backwards() {
        let mut clock = FrameClock::new(0.0002);
        clock.advance(10_000.0);
        let t = clock.advance(4_000.0);
        assert!((t - 2.0).abs() < 1e-6, "t was {t}");
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn rejects_nan() {
        let mut clock = FrameClock::new(1.0);
        clock.advance(3.0);
        assert_eq!(clock.advance(f64::NAN), 3.0);
    }

    #[test]
    fn starts_at_zero() {
        let clock = FrameClock::new(0.0002);
        assert_eq!(clock.time(), 0.0);
        assert_eq!(clock.frames(), 0);
    }
}
