use embedded_hal::digital::{self, InputPin, PinState};
use fugit::MicrosDurationU32;

use crate::time::{ticks_since, MicrosInstant, Monotonic};

/// Board primitive that times one pulse on an input line.
pub trait PulseIn {
    type Error: digital::Error;

    /// Blocks until a full pulse at `level` has been seen and returns its width,
    /// or `None` if `timeout` elapses first.
    fn pulse_in(
        &mut self,
        level: PinState,
        timeout: MicrosDurationU32,
    ) -> Result<Option<MicrosDurationU32>, Self::Error>;
}

/// Busy-wait pulse timer over any input pin and microsecond clock.
///
/// A pulse already in progress when the call starts is skipped. The timeout
/// covers the whole call, not each edge.
pub struct PollingPulseIn<P, C> {
    pin: P,
    clock: C,
}

impl<P: InputPin, C: Monotonic> PollingPulseIn<P, C> {
    pub fn new(pin: P, clock: C) -> Self {
        Self { pin, clock }
    }

    pub fn release(self) -> (P, C) {
        (self.pin, self.clock)
    }

    /// Spins while the line sits at `level`, returning when it left it.
    fn wait_while(
        &mut self,
        level: PinState,
        start: MicrosInstant,
        timeout: u32,
    ) -> Result<Option<MicrosInstant>, P::Error> {
        loop {
            let now = self.clock.micros();
            if ticks_since(now, start) >= timeout {
                return Ok(None);
            }
            if PinState::from(self.pin.is_high()?) != level {
                return Ok(Some(now));
            }
        }
    }
}

impl<P: InputPin, C: Monotonic> PulseIn for PollingPulseIn<P, C> {
    type Error = P::Error;

    fn pulse_in(
        &mut self,
        level: PinState,
        timeout: MicrosDurationU32,
    ) -> Result<Option<MicrosDurationU32>, Self::Error> {
        let idle = match level {
            PinState::High => PinState::Low,
            PinState::Low => PinState::High,
        };
        let start = self.clock.micros();
        let timeout = timeout.ticks();

        if self.wait_while(level, start, timeout)?.is_none() {
            return Ok(None);
        }
        let Some(rise) = self.wait_while(idle, start, timeout)? else {
            return Ok(None);
        };
        let Some(fall) = self.wait_while(level, start, timeout)? else {
            return Ok(None);
        };

        Ok(Some(MicrosDurationU32::from_ticks(ticks_since(fall, rise))))
    }
}
