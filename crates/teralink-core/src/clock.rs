use jiff::Timestamp;

pub trait Clock: Send + Sync + 'static {
    /// Returns the current time of the clock
    fn now(&self) -> Timestamp;

    /// Milliseconds elapsed since `start`, never negative.
    fn elapsed_millis(&self, start: Timestamp) -> u64 {
        let millis = self.now().duration_since(start).as_millis();
        u64::try_from(millis.max(0)).unwrap_or(u64::MAX)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}
