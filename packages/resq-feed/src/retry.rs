use std::time::Duration;

use resq_config::Retry;

/// Bounded fixed-delay retry, applied only to rate-limited fetches.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RetryPolicy {
	pub max_attempts: u32,
	pub delay: Duration,
}
impl RetryPolicy {
	pub fn from_config(cfg: &Retry) -> Self {
		Self { max_attempts: cfg.max_attempts, delay: Duration::from_millis(cfg.delay_ms) }
	}

	/// Delay to wait after the given failed attempt (1-based), or `None` once
	/// the attempt budget is spent.
	pub fn next_delay(&self, attempt: u32) -> Option<Duration> {
		if attempt >= self.max_attempts { None } else { Some(self.delay) }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn allows_retries_until_the_budget_is_spent() {
		let policy = RetryPolicy { max_attempts: 3, delay: Duration::from_secs(5) };

		assert_eq!(policy.next_delay(1), Some(Duration::from_secs(5)));
		assert_eq!(policy.next_delay(2), Some(Duration::from_secs(5)));
		assert_eq!(policy.next_delay(3), None);
		assert_eq!(policy.next_delay(4), None);
	}

	#[test]
	fn single_attempt_policy_never_retries() {
		let policy = RetryPolicy { max_attempts: 1, delay: Duration::from_secs(5) };

		assert_eq!(policy.next_delay(1), None);
	}
}
