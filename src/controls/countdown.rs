// SPDX-License-Identifier: MPL-2.0
//! Single-shot restartable countdown.
//!
//! The countdown does not own a timer. It records a deadline and hands out a
//! [`TimerToken`] per arm; whoever drives time (the runtime, or a test passing
//! explicit `Instant`s) reports back with either the token or the current
//! time. A token from before a `cancel` or a restart never fires.

use std::time::{Duration, Instant};

/// Identifies one arming of a [`Countdown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken {
    generation: u64,
    deadline: Instant,
}

impl TimerToken {
    /// Instant at which this arming elapses.
    #[must_use]
    pub fn deadline(self) -> Instant {
        self.deadline
    }
}

#[derive(Debug, Clone, Default)]
pub struct Countdown {
    deadline: Option<Instant>,
    generation: u64,
}

impl Countdown {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms (or re-arms) the countdown. Any earlier token becomes stale.
    pub fn start(&mut self, now: Instant, delay: Duration) -> TimerToken {
        self.generation = self.generation.wrapping_add(1);
        let deadline = now + delay;
        self.deadline = Some(deadline);
        TimerToken {
            generation: self.generation,
            deadline,
        }
    }

    /// Disarms the countdown. Outstanding tokens become stale.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.deadline = None;
    }

    /// Fires the countdown if `token` belongs to the current arming.
    ///
    /// Returns `false` for stale tokens, leaving the countdown untouched.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.deadline.is_some() && token.generation == self.generation {
            self.deadline = None;
            true
        } else {
            false
        }
    }

    /// Fires the countdown if its deadline has passed at `now`.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_with_current_token() {
        let now = Instant::now();
        let mut countdown = Countdown::new();
        let token = countdown.start(now, Duration::from_secs(1));

        assert!(countdown.fire(token));
        assert!(!countdown.fire(token));
        assert!(!countdown.is_armed());
    }

    #[test]
    fn cancel_then_restart_does_not_double_fire() {
        let now = Instant::now();
        let mut countdown = Countdown::new();
        let first = countdown.start(now, Duration::from_secs(1));
        countdown.cancel();
        let second = countdown.start(now, Duration::from_secs(1));

        assert!(!countdown.fire(first));
        assert!(countdown.fire(second));
        assert!(!countdown.fire(second));
    }

    #[test]
    fn restart_moves_deadline_and_stales_old_token() {
        let now = Instant::now();
        let mut countdown = Countdown::new();
        let first = countdown.start(now, Duration::from_secs(3));
        let later = now + Duration::from_secs(2);
        let second = countdown.start(later, Duration::from_secs(3));

        assert_eq!(countdown.deadline(), Some(later + Duration::from_secs(3)));
        assert!(!countdown.fire(first));
        assert!(countdown.fire(second));
    }

    #[test]
    fn expire_respects_deadline() {
        let now = Instant::now();
        let mut countdown = Countdown::new();
        countdown.start(now, Duration::from_millis(500));

        assert!(!countdown.expire(now + Duration::from_millis(499)));
        assert!(countdown.expire(now + Duration::from_millis(500)));
        assert!(!countdown.expire(now + Duration::from_secs(10)));
    }
}
