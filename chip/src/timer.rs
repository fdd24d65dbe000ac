use std::time::Duration;

/// Represents a timer inside of the chip
/// infrastruture, it will count down to
/// zero from what ever number given, one
/// step per [`tick`](Timer::tick).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    value: u8,
}

impl Timer {
    /// Will create a new timer with the given value.
    pub fn new(value: u8) -> Self {
        Self { value }
    }

    /// Will set the value from which the timer shall count down from.
    pub fn set_value(&mut self, value: u8) {
        self.value = value;
    }

    /// Will get the value that the counter is currently at.
    pub fn get_value(&self) -> u8 {
        self.value
    }

    /// Counts down by one, stays at zero.
    pub fn tick(&mut self) {
        self.value = self.value.saturating_sub(1);
    }

    pub fn is_active(&self) -> bool {
        self.value > 0
    }
}

/// Turns elapsed wall clock time into a count of fixed rate events.
///
/// The remainder that was not enough for a full interval is carried
/// over into the next call, so no time gets lost between host iterations.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    interval: Duration,
    elapsed: Duration,
}

impl Ticker {
    /// Will create a ticker firing `hertz` times per second.
    ///
    /// # Example
    /// ```rust
    /// # use chip::timer::Ticker;
    /// # use std::time::Duration;
    /// let mut ticker = Ticker::from_hertz(60);
    /// assert_eq!(ticker.due(Duration::from_millis(10)), 0);
    /// assert_eq!(ticker.due(Duration::from_millis(10)), 1);
    /// assert_eq!(ticker.due(Duration::from_secs(1)), 60);
    /// ```
    pub fn from_hertz(hertz: u64) -> Self {
        // a zero rate would never fire
        let hertz = hertz.max(1);
        Self::new(Duration::from_nanos(1_000_000_000 / hertz))
    }

    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::from_secs(0),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Adds the elapsed time and returns how many full intervals are due.
    pub fn due(&mut self, elapsed: Duration) -> u32 {
        self.elapsed += elapsed;
        if self.interval.as_nanos() == 0 {
            self.elapsed = Duration::from_secs(0);
            return 1;
        }

        let count = self.elapsed.as_nanos() / self.interval.as_nanos();
        let rest = self.elapsed.as_nanos() % self.interval.as_nanos();
        // the rest is always smaller then the interval
        self.elapsed = Duration::from_nanos(rest as u64);

        count.min(u32::MAX as u128) as u32
    }

    /// Will return how long it is until the next interval is due.
    pub fn until_next(&self) -> Duration {
        if self.interval <= self.elapsed {
            Duration::from_secs(0)
        } else {
            self.interval - self.elapsed
        }
    }
}
