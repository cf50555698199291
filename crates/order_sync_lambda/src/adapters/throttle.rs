use std::thread;
use std::time::Duration;

/// Pacing seam for the fixed delays imposed on outbound request loops.
///
/// The loops only ever ask for a pause; how the pause is served is up to
/// the implementation, so a token-bucket limiter can replace the fixed
/// sleeps without touching pagination or forwarding.
pub trait Throttle {
    fn pause(&self, delay: Duration);
}

/// Production throttle backed by a blocking sleep.
#[derive(Debug, Default, Clone, Copy)]
pub struct SleepThrottle;

impl Throttle for SleepThrottle {
    fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}
