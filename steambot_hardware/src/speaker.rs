//! Square-wave speaker with optional time-boxed tones.

pub mod notes;

use embedded_hal::{delay::DelayNs, pwm};
use fugit::{ExtU32, HertzU32, MillisDurationU32};
use log::trace;

use crate::{time::MillisInstant, timer::Timer, Error};

pub const BEEP_FREQUENCY: HertzU32 = notes::A5;
pub const DEFAULT_BEEP: MillisDurationU32 = MillisDurationU32::from_ticks(100);
pub const DEFAULT_NOTE_REST: MillisDurationU32 = MillisDurationU32::from_ticks(333);

/// Board primitive that emits a continuous square wave on the speaker line.
pub trait Tone {
    type Error: pwm::Error;

    fn tone(&mut self, frequency: HertzU32) -> Result<(), Self::Error>;
    fn no_tone(&mut self) -> Result<(), Self::Error>;
}

impl<T: Tone + ?Sized> Tone for &mut T {
    type Error = T::Error;

    fn tone(&mut self, frequency: HertzU32) -> Result<(), Self::Error> {
        (**self).tone(frequency)
    }

    fn no_tone(&mut self) -> Result<(), Self::Error> {
        (**self).no_tone()
    }
}

/// Speaker that can bound a tone to a duration.
///
/// Bounded tones keep sounding after the call returns; poll [`Speaker::update`]
/// from the control loop to silence them once they expire.
pub struct Speaker<T: Tone> {
    output: T,
    deadline: Timer,
    sounding: bool,
}

impl<T: Tone> Speaker<T> {
    pub fn new(output: T) -> Self {
        Self {
            output,
            deadline: Timer::one_shot(0.millis()),
            sounding: false,
        }
    }

    /// Plays `frequency` until told otherwise. A zero frequency is silence.
    pub fn tone(&mut self, frequency: HertzU32) -> Result<(), Error> {
        self.deadline.stop();
        self.start(frequency)
    }

    /// Plays `frequency` for `duration` starting at `now`.
    ///
    /// A zero duration plays until told otherwise.
    pub fn tone_for(
        &mut self,
        frequency: HertzU32,
        duration: MillisDurationU32,
        now: MillisInstant,
    ) -> Result<(), Error> {
        if duration.ticks() == 0 || frequency.raw() == 0 {
            return self.tone(frequency);
        }
        self.start(frequency)?;
        self.deadline.start_for(now, duration);
        Ok(())
    }

    pub fn no_tone(&mut self) -> Result<(), Error> {
        self.deadline.stop();
        self.sounding = false;
        self.output.no_tone().map_err(Error::tone)
    }

    pub fn beep(&mut self, duration: MillisDurationU32, now: MillisInstant) -> Result<(), Error> {
        self.tone_for(BEEP_FREQUENCY, duration, now)
    }

    /// Starts a note of `duration` and blocks for `rest`.
    ///
    /// A note shorter than the rest is silenced before returning; a longer one
    /// is left sounding for [`Speaker::update`] to stop.
    pub fn play_note(
        &mut self,
        frequency: HertzU32,
        duration: MillisDurationU32,
        rest: MillisDurationU32,
        now: MillisInstant,
        delay: &mut impl DelayNs,
    ) -> Result<(), Error> {
        self.tone_for(frequency, duration, now)?;

        let (duration, rest) = (duration.ticks(), rest.ticks());
        if duration != 0 && duration <= rest && self.sounding {
            delay.delay_ms(duration);
            self.no_tone()?;
            delay.delay_ms(rest - duration);
        } else {
            delay.delay_ms(rest);
        }
        Ok(())
    }

    /// Silences a bounded tone whose time is up. Returns true if it did.
    pub fn update(&mut self, now: MillisInstant) -> Result<bool, Error> {
        if self.deadline.timed_out(now) {
            self.no_tone()?;
            return Ok(true);
        }
        Ok(false)
    }

    pub fn is_sounding(&self) -> bool {
        self.sounding
    }

    fn start(&mut self, frequency: HertzU32) -> Result<(), Error> {
        if frequency.raw() == 0 {
            return self.no_tone();
        }
        trace!("tone {} Hz", frequency.raw());
        self.output.tone(frequency).map_err(Error::tone)?;
        self.sounding = true;
        Ok(())
    }
}

impl<T: Tone> Drop for Speaker<T> {
    fn drop(&mut self) {
        let _ = self.output.no_tone();
    }
}
