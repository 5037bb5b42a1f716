//! Minimum-interval request pacing
//!
//! The limiter hands out start slots at least `interval` apart. Callers
//! reserve a slot while holding whatever lock guards the limiter and sleep
//! until it after releasing the lock, so concurrent callers queue up in
//! reservation order without serialising on the sleep itself.

use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone)]
pub struct RateLimiter {
    interval: Duration,
    next_slot: Option<Instant>,
}

impl RateLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_slot: None,
        }
    }

    /// Reserves the next start slot and returns it
    ///
    /// The slot is `now` if the previous one is at least `interval` in the
    /// past, otherwise `interval` after the previous slot.
    pub fn reserve(&mut self, now: Instant) -> Instant {
        let slot = match self.next_slot {
            Some(next) if next > now => next,
            _ => now,
        };
        self.next_slot = Some(slot + self.interval);
        slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_slot_is_immediate() {
        let now = Instant::now();
        let mut limiter = RateLimiter::new(Duration::from_millis(100));
        assert_eq!(limiter.reserve(now), now);
    }

    #[test]
    fn test_back_to_back_slots_are_spaced() {
        let now = Instant::now();
        let mut limiter = RateLimiter::new(Duration::from_millis(100));

        let a = limiter.reserve(now);
        let b = limiter.reserve(now);
        let c = limiter.reserve(now + Duration::from_millis(10));

        assert_eq!(b - a, Duration::from_millis(100));
        assert_eq!(c - b, Duration::from_millis(100));
    }

    #[test]
    fn test_idle_limiter_does_not_delay() {
        let now = Instant::now();
        let mut limiter = RateLimiter::new(Duration::from_millis(100));
        limiter.reserve(now);

        let later = now + Duration::from_secs(1);
        assert_eq!(limiter.reserve(later), later);
    }

    #[test]
    fn test_zero_interval() {
        let now = Instant::now();
        let mut limiter = RateLimiter::new(Duration::ZERO);
        assert_eq!(limiter.reserve(now), now);
        assert_eq!(limiter.reserve(now), now);
    }
}
