use std::time::Duration;

/// Caps the re-run loop around a failed scanner invocation.
///
/// The scanner historically got retried forever with a one second
/// pause, which could hang discovery indefinitely on a machine without
/// the binary installed. The delay stays; the attempts are bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }
}
