use std::time::Duration;

/// Cursor blink timer. Visibility flips once per elapsed interval, so the
/// default 500 ms interval gives one full blink per second.
#[derive(Clone, Copy, Debug)]
pub struct CursorBlink {
    interval: Duration,
    elapsed: Duration,
    visible: bool,
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

impl CursorBlink {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            visible: true,
        }
    }

    /// Advance by `dt`. Returns `true` if visibility changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.interval.is_zero() {
            return false;
        }
        self.elapsed += dt;
        let mut flipped = false;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            self.visible = !self.visible;
            flipped = !flipped;
        }
        flipped
    }

    /// Show the cursor and restart the interval (after an edit or a click).
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.visible = true;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
