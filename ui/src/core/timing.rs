//! Time sources and the resize debouncer.
//!
//! Everything time-dependent takes "now" explicitly (milliseconds on an arbitrary monotonic
//! origin), so the debounce logic can be driven by a virtual clock in tests and by
//! `Date.now()` plus `gloo-timers` in the browser.

use futures::future::LocalBoxFuture;

pub trait Clock {
    fn now_ms(&self) -> u64;
    /// Resolve after `ms` milliseconds have elapsed on this clock.
    fn sleep(&self, ms: u64) -> LocalBoxFuture<'static, ()>;
}

#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

#[cfg(target_arch = "wasm32")]
impl Clock for BrowserClock {
    /// `performance.now()`: monotonic, so a wall-clock adjustment cannot stretch a debounce.
    fn now_ms(&self) -> u64 {
        let raw = web_sys::window()
            .and_then(|window| window.performance())
            .map(|performance| performance.now())
            .unwrap_or_else(js_sys::Date::now);
        whole_millis(raw)
    }

    fn sleep(&self, ms: u64) -> LocalBoxFuture<'static, ()> {
        use futures::FutureExt;

        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(ms).boxed_local()
    }
}

/// Truncate a high-resolution timestamp to whole milliseconds; negative or non-finite input
/// reads as zero.
pub fn whole_millis(raw: f64) -> u64 {
    if raw.is_finite() && raw > 0.0 {
        raw as u64
    } else {
        0
    }
}

/// Trailing-edge debounce: each `schedule` pushes the deadline to `now + wait`, and the
/// action becomes due only once a full quiet window has passed.
#[derive(Debug, Clone)]
pub struct Debouncer {
    wait_ms: u64,
    deadline: Option<u64>,
}

impl Debouncer {
    pub fn new(wait_ms: u64) -> Self {
        Self {
            wait_ms,
            deadline: None,
        }
    }

    pub fn wait_ms(&self) -> u64 {
        self.wait_ms
    }

    pub fn schedule(&mut self, now_ms: u64) {
        self.deadline = Some(now_ms.saturating_add(self.wait_ms));
    }

    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the pending action if its deadline has been reached.
    pub fn take_due(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Milliseconds left until the pending action is due (zero if overdue).
    pub fn remaining(&self, now_ms: u64) -> Option<u64> {
        self.deadline
            .map(|deadline| deadline.saturating_sub(now_ms))
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_resolution_timestamps_truncate() {
        assert_eq!(whole_millis(1234.9), 1234);
        assert_eq!(whole_millis(0.4), 0);
        assert_eq!(whole_millis(-3.0), 0);
        assert_eq!(whole_millis(f64::NAN), 0);
        assert_eq!(whole_millis(f64::INFINITY), 0);
    }

    #[test]
    fn fires_only_after_quiet_window() {
        let mut debouncer = Debouncer::new(250);
        debouncer.schedule(0);
        assert!(!debouncer.take_due(249));
        assert!(debouncer.take_due(250));
        assert!(!debouncer.is_pending());
        assert!(!debouncer.take_due(1_000));
    }

    #[test]
    fn reschedule_resets_deadline() {
        let mut debouncer = Debouncer::new(250);
        debouncer.schedule(0);
        debouncer.schedule(200);
        assert!(!debouncer.take_due(250));
        assert_eq!(debouncer.deadline(), Some(450));
        assert_eq!(debouncer.remaining(300), Some(150));
        assert!(debouncer.take_due(450));
    }

    #[test]
    fn remaining_saturates_when_overdue() {
        let mut debouncer = Debouncer::new(10);
        debouncer.schedule(5);
        assert_eq!(debouncer.remaining(100), Some(0));
        debouncer.cancel();
        assert_eq!(debouncer.remaining(100), None);
    }
}
