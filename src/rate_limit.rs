use std::net::IpAddr;
use std::time::{Duration, Instant};

use dashmap::DashMap;

/// Per-IP fixed-window request counter.
///
/// One instance per endpoint class: the contact form runs a strict window
/// (5 requests / 15 minutes), the read-only content endpoints a looser one
/// (60 requests / 60 seconds). State is process-local; entries are swept by
/// a background task so the map stays bounded over long uptimes.
pub struct FixedWindowLimiter {
    limit: u32,
    window: Duration,
    /// ip -> (count, window_start)
    entries: DashMap<IpAddr, (u32, Instant)>,
}

impl FixedWindowLimiter {
    pub fn new(limit: u32, window_secs: u64) -> Self {
        Self {
            limit,
            window: Duration::from_secs(window_secs),
            entries: DashMap::new(),
        }
    }

    /// Check if a request is allowed. Returns Ok(()) or Err with
    /// retry-after seconds.
    pub fn check(&self, ip: IpAddr) -> Result<(), u64> {
        let now = Instant::now();

        let mut entry = self.entries.entry(ip).or_insert((0, now));
        let (count, start) = entry.value_mut();

        if now.duration_since(*start) > self.window {
            *count = 1;
            *start = now;
            return Ok(());
        }

        if *count >= self.limit {
            let elapsed = now.duration_since(*start).as_secs();
            return Err(self.window.as_secs().saturating_sub(elapsed));
        }

        *count += 1;
        Ok(())
    }

    /// Remove entries whose window started longer than `max_age` ago.
    pub fn cleanup(&self, max_age: Duration) {
        let now = Instant::now();
        self.entries
            .retain(|_, (_, start)| now.duration_since(*start) < max_age);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(last: u8) -> IpAddr {
        IpAddr::from([10, 0, 0, last])
    }

    #[test]
    fn allows_up_to_limit_then_denies() {
        let limiter = FixedWindowLimiter::new(5, 900);
        for _ in 0..5 {
            assert!(limiter.check(ip(1)).is_ok());
        }
        let err = limiter.check(ip(1)).unwrap_err();
        assert!(err <= 900);
    }

    #[test]
    fn clients_are_independent() {
        let limiter = FixedWindowLimiter::new(2, 900);
        assert!(limiter.check(ip(1)).is_ok());
        assert!(limiter.check(ip(1)).is_ok());
        assert!(limiter.check(ip(1)).is_err());
        assert!(limiter.check(ip(2)).is_ok());
    }

    #[test]
    fn window_expiry_resets_count() {
        let limiter = FixedWindowLimiter::new(1, 0);
        assert!(limiter.check(ip(1)).is_ok());
        // Zero-second window: the next check after any delay starts fresh.
        std::thread::sleep(Duration::from_millis(20));
        assert!(limiter.check(ip(1)).is_ok());
    }

    #[test]
    fn cleanup_drops_stale_entries() {
        let limiter = FixedWindowLimiter::new(5, 900);
        limiter.check(ip(1)).unwrap();
        limiter.cleanup(Duration::from_secs(0));
        assert!(limiter.entries.is_empty());
    }
}
