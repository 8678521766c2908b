use embedded_hal::{delay::DelayNs, digital::InputPin};
use fugit::{MicrosDurationU32, MillisDurationU32};

use crate::{
    gpio::{DigitalInput, Polarity},
    time::MillisInstant,
    timer::Timer,
    Error,
};

/// Push button, pressed when its line reads "on".
pub struct Button<P> {
    input: DigitalInput<P>,
}

impl<P: InputPin> Button<P> {
    /// Button whose line reads high while pressed.
    pub fn new(pin: P) -> Self {
        Self::with_polarity(pin, Polarity::ActiveHigh)
    }

    pub fn with_polarity(pin: P, polarity: Polarity) -> Self {
        Self {
            input: DigitalInput::new(pin, polarity),
        }
    }

    pub fn is_pressed(&mut self) -> Result<bool, Error> {
        self.input.read()
    }

    /// Blocking debounce: a press only counts if it is still held after `settle`.
    ///
    /// A zero `settle` is a plain read.
    pub fn is_pressed_debounced(
        &mut self,
        delay: &mut impl DelayNs,
        settle: MicrosDurationU32,
    ) -> Result<bool, Error> {
        let pressed = self.is_pressed()?;
        if pressed && settle.ticks() > 0 {
            delay.delay_us(settle.ticks());
            if !self.is_pressed()? {
                return Ok(false);
            }
        }
        Ok(pressed)
    }

    pub fn release(self) -> P {
        self.input.release()
    }
}

/// Non-blocking debounce for buttons polled from the control loop.
///
/// The reported state only changes once the raw level has held its new value
/// for the whole settle interval.
pub struct DebouncedButton<P> {
    button: Button<P>,
    timer: Timer,
    stable: bool,
    candidate: bool,
}

impl<P: InputPin> DebouncedButton<P> {
    pub fn new(button: Button<P>, settle: MillisDurationU32) -> Self {
        Self {
            button,
            timer: Timer::one_shot(settle),
            stable: false,
            candidate: false,
        }
    }

    /// Samples the line and returns the debounced state.
    pub fn update(&mut self, now: MillisInstant) -> Result<bool, Error> {
        let level = self.button.is_pressed()?;

        if level == self.stable {
            self.timer.stop();
            self.candidate = level;
        } else if level != self.candidate || !self.timer.is_active() {
            self.candidate = level;
            self.timer.start(now);
        } else if self.timer.timed_out(now) {
            self.stable = level;
        }

        Ok(self.stable)
    }

    pub fn is_pressed(&self) -> bool {
        self.stable
    }

    pub fn release(self) -> Button<P> {
        self.button
    }
}
