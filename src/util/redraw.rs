use web_time::{Duration, Instant};

/// Leaky-bucket-of-one redraw throttle.
///
/// A redraw is granted iff strictly more than `interval` has elapsed since
/// the last granted redraw; intermediate requests are dropped, not queued.
/// State-changing input is applied unconditionally by the caller, so only
/// the visual refresh is rate-limited. The first request always passes.
#[derive(Debug, Clone, Copy)]
pub struct RedrawThrottle {
    interval: Duration,
    last_redraw: Option<Instant>,
}

impl RedrawThrottle {
    /// Throttle to at most `max_hz` redraws per second (<= 0 = unlimited).
    #[must_use]
    pub fn from_hz(max_hz: f64) -> Self {
        let interval = if max_hz > 0.0 {
            Duration::from_secs_f64(1.0 / max_hz)
        } else {
            Duration::ZERO
        };
        Self {
            interval,
            last_redraw: None,
        }
    }

    /// Minimum spacing between granted redraws.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Request a redraw slot at the current time.
    pub fn try_redraw(&mut self) -> bool {
        self.check(Instant::now())
    }

    /// Request a redraw slot at an explicit timestamp. Grants and records
    /// the redraw iff `now - last_redraw > interval` (strict).
    pub fn check(&mut self, now: Instant) -> bool {
        let due = match self.last_redraw {
            None => true,
            Some(last) => now.duration_since(last) > self.interval,
        };
        if due {
            self.last_redraw = Some(now);
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_always_redraws() {
        let mut throttle = RedrawThrottle::from_hz(60.0);
        assert!(throttle.check(Instant::now()));
    }

    #[test]
    fn requests_inside_the_interval_are_dropped() {
        let mut throttle = RedrawThrottle::from_hz(60.0);
        let base = Instant::now();
        assert!(throttle.check(base));
        // 10 ms < 1/60 s
        assert!(!throttle.check(base + Duration::from_millis(10)));
        // 20 ms > 1/60 s, measured from the granted redraw at `base`
        assert!(throttle.check(base + Duration::from_millis(20)));
    }

    #[test]
    fn boundary_is_strict() {
        let mut throttle = RedrawThrottle::from_hz(60.0);
        let base = Instant::now();
        assert!(throttle.check(base));
        assert!(!throttle.check(base + throttle.interval()));
    }

    #[test]
    fn dropped_requests_do_not_reset_the_window() {
        let mut throttle = RedrawThrottle::from_hz(60.0);
        let base = Instant::now();
        assert!(throttle.check(base));
        assert!(!throttle.check(base + Duration::from_millis(5)));
        assert!(!throttle.check(base + Duration::from_millis(10)));
        // Still measured from `base`, not the dropped requests.
        assert!(throttle.check(base + Duration::from_millis(17)));
    }

    #[test]
    fn zero_hz_means_unlimited() {
        let mut throttle = RedrawThrottle::from_hz(0.0);
        let base = Instant::now();
        assert!(throttle.check(base));
        assert!(throttle.check(base + Duration::from_nanos(1)));
    }
}
