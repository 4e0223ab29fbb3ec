use std::time::Duration;

/// Exponential backoff schedule for re-opening a dropped subscription.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    pub initial_delay: Duration,
    pub multiplier: f64,
    pub max_delay: Duration,
    /// Reconnect attempts allowed after the connection drops. Once they are
    /// used up the subscription reports a terminal failure.
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(500),
            multiplier: 2.0,
            max_delay: Duration::from_secs(30),
            max_attempts: 8,
        }
    }
}

impl RetryPolicy {
    /// Delay before reconnect attempt number `attempt` (1-based), or `None`
    /// when the policy is exhausted.
    pub fn delay_for(&self, attempt: u32) -> Option<Duration> {
        if attempt == 0 || attempt > self.max_attempts {
            return None;
        }
        let exponent = i32::try_from(attempt - 1).unwrap_or(i32::MAX);
        let initial_ms = self.initial_delay.as_millis() as f64;
        let max_ms = self.max_delay.as_millis() as f64;
        let scaled_ms = (initial_ms * self.multiplier.powi(exponent)).min(max_ms);
        Some(Duration::from_millis(scaled_ms.max(0.0).round() as u64))
    }
}

/// Reconnect bookkeeping for one live subscription.
///
/// Every dropped connection consumes an attempt; a received snapshot gives
/// the whole budget back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reconnect {
    policy: RetryPolicy,
    attempt: u32,
}

impl Reconnect {
    pub fn new(policy: RetryPolicy) -> Self {
        Self { policy, attempt: 0 }
    }

    /// Attempts used since the last snapshot.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn on_snapshot(&mut self) {
        self.attempt = 0;
    }

    /// Records a dropped connection. Returns the attempt number and how long
    /// to wait before it, or `None` once the budget is spent.
    pub fn on_drop(&mut self) -> Option<(u32, Duration)> {
        self.attempt = self.attempt.saturating_add(1);
        self.policy
            .delay_for(self.attempt)
            .map(|delay| (self.attempt, delay))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            initial_delay: Duration::from_millis(100),
            multiplier: 2.0,
            max_delay: Duration::from_millis(500),
            max_attempts,
        }
    }

    #[test]
    fn delays_grow_then_cap() {
        let policy = RetryPolicy {
            initial_delay: Duration::from_millis(100),
            multiplier: 2.0,
            max_delay: Duration::from_millis(500),
            max_attempts: 5,
        };
        let delays: Vec<u128> = (1..=5)
            .map(|n| policy.delay_for(n).unwrap().as_millis())
            .collect();
        assert_eq!(delays, vec![100, 200, 400, 500, 500]);
    }

    #[test]
    fn exhausted_after_max_attempts() {
        let policy = RetryPolicy::default();
        assert!(policy.delay_for(policy.max_attempts).is_some());
        assert_eq!(policy.delay_for(policy.max_attempts + 1), None);
        assert_eq!(policy.delay_for(0), None);
    }

    #[test]
    fn reconnect_delays_follow_the_policy() {
        let mut reconnect = Reconnect::new(policy(5));
        let scheduled: Vec<(u32, u128)> = (0..5)
            .map(|_| {
                let (attempt, delay) = reconnect.on_drop().unwrap();
                (attempt, delay.as_millis())
            })
            .collect();
        assert_eq!(
            scheduled,
            vec![(1, 100), (2, 200), (3, 400), (4, 500), (5, 500)]
        );
    }

    #[test]
    fn gives_up_after_max_attempts_drops() {
        let mut reconnect = Reconnect::new(policy(3));
        assert!(reconnect.on_drop().is_some());
        assert!(reconnect.on_drop().is_some());
        assert!(reconnect.on_drop().is_some());
        assert_eq!(reconnect.on_drop(), None);
    }

    #[test]
    fn snapshot_restores_the_budget() {
        let mut reconnect = Reconnect::new(policy(2));
        reconnect.on_drop();
        reconnect.on_drop();
        assert_eq!(reconnect.attempt(), 2);

        reconnect.on_snapshot();
        assert_eq!(reconnect.attempt(), 0);
        assert_eq!(
            reconnect.on_drop(),
            Some((1, Duration::from_millis(100)))
        );
        assert!(reconnect.on_drop().is_some());
        assert_eq!(reconnect.on_drop(), None);
    }
}
