#![cfg_attr(not(test), no_std)]

//! Typed peripherals for the STEAMbot controller, built on embedded-hal 1.0.

use core::fmt;

use embedded_hal::{digital, pwm};

pub mod board;
pub mod button;
pub mod gpio;
pub mod led;
pub mod motors;
pub mod pulse;
pub mod speaker;
pub mod time;
pub mod timer;
pub mod ultrasonic;

pub use board::{Board, Parts};
pub use button::{Button, DebouncedButton};
pub use gpio::{DigitalInput, DigitalOutput, Polarity};
pub use led::{Color, RgbLed};
pub use motors::{Direction, DualMotors, MotorChannel};
pub use pulse::{PollingPulseIn, PulseIn};
pub use speaker::{notes, Speaker, Tone};
pub use time::{MicrosInstant, MillisInstant, Monotonic};
pub use timer::Timer;
pub use ultrasonic::{Echo, Hcsr04};

/// Failure reported by one of the lines a peripheral drives.
///
/// Boards with infallible pins never produce one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    Digital(digital::ErrorKind),
    Pwm(pwm::ErrorKind),
    Tone(pwm::ErrorKind),
}

impl Error {
    pub(crate) fn digital<E: digital::Error>(e: E) -> Self {
        Error::Digital(e.kind())
    }

    pub(crate) fn pwm<E: pwm::Error>(e: E) -> Self {
        Error::Pwm(e.kind())
    }

    pub(crate) fn tone<E: pwm::Error>(e: E) -> Self {
        Error::Tone(e.kind())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Digital(kind) => write!(f, "digital line error: {kind:?}"),
            Error::Pwm(kind) => write!(f, "pwm output error: {kind:?}"),
            Error::Tone(kind) => write!(f, "tone output error: {kind:?}"),
        }
    }
}
