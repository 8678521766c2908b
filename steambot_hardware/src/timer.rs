use fugit::MillisDurationU32;
use log::debug;

use crate::time::{ticks_since, MillisInstant};

/// Restartable countdown polled against the millisecond clock.
///
/// A one-shot timer deactivates itself the first time a timeout is observed.
/// An auto-restart timer re-arms from the moment the timeout was observed and
/// stays active, giving a free running periodic signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timer {
    start: MillisInstant,
    duration: MillisDurationU32,
    active: bool,
    auto_restart: bool,
}

impl Timer {
    /// Creates an inactive timer, call [`Timer::start`] to arm it.
    pub const fn new(duration: MillisDurationU32, auto_restart: bool) -> Self {
        Self {
            start: MillisInstant::from_ticks(0),
            duration,
            active: false,
            auto_restart,
        }
    }

    pub const fn one_shot(duration: MillisDurationU32) -> Self {
        Self::new(duration, false)
    }

    pub const fn periodic(duration: MillisDurationU32) -> Self {
        Self::new(duration, true)
    }

    /// Arms the timer with its current duration, counting from `now`.
    pub fn start(&mut self, now: MillisInstant) {
        self.active = true;
        self.start = now;
    }

    /// Arms the timer, replacing the stored duration unless `duration` is zero.
    pub fn start_for(&mut self, now: MillisInstant, duration: MillisDurationU32) {
        if duration.ticks() != 0 {
            self.duration = duration;
        }
        self.start(now);
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_auto_restart(&self) -> bool {
        self.auto_restart
    }

    pub fn duration(&self) -> MillisDurationU32 {
        self.duration
    }

    /// Reports whether the deadline has been reached, consuming the timeout.
    ///
    /// Observing a timeout either re-arms the timer (auto-restart) or
    /// deactivates it, so call this once per logical check. An inactive timer
    /// never times out.
    pub fn timed_out(&mut self, now: MillisInstant) -> bool {
        if !self.active {
            return false;
        }

        if ticks_since(now, self.start) < self.duration.ticks() {
            return false;
        }

        if self.auto_restart {
            self.start = now;
        } else {
            self.active = false;
        }
        debug!("timer fired after {} ms", self.duration.ticks());

        true
    }

    /// Milliseconds left before the deadline.
    ///
    /// Goes negative once the deadline has passed without [`Timer::timed_out`]
    /// having observed it. Meaningless while the timer is inactive.
    pub fn remaining(&self, now: MillisInstant) -> i64 {
        i64::from(self.duration.ticks()) - i64::from(ticks_since(now, self.start))
    }
}
