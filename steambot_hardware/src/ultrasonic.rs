use embedded_hal::{
    delay::DelayNs,
    digital::{OutputPin, PinState},
};
use fugit::MicrosDurationU32;
use log::trace;

use crate::{pulse::PulseIn, Error};

pub const TRIGGER_PULSE_US: u32 = 10;
pub const DEFAULT_ECHO_TIMEOUT: MicrosDurationU32 = MicrosDurationU32::from_ticks(5_000);

// Round trip echo time per unit of distance, from the HC-SR04 datasheet
const US_PER_INCH: f32 = 148.0;
const US_PER_CM: f32 = 58.0;

/// Width of one echo pulse.
///
/// A measurement that saw no echo before the timeout is [`Echo::NO_ECHO`],
/// the widest representable pulse, which converts to an absurdly large
/// distance. Apply your own out-of-range threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Echo {
    width: MicrosDurationU32,
}

impl Echo {
    pub const NO_ECHO: Echo = Echo {
        width: MicrosDurationU32::from_ticks(u32::MAX),
    };

    pub const fn from_micros(micros: u32) -> Self {
        Self {
            width: MicrosDurationU32::from_ticks(micros),
        }
    }

    pub const fn width(&self) -> MicrosDurationU32 {
        self.width
    }

    pub fn is_no_echo(&self) -> bool {
        *self == Self::NO_ECHO
    }

    pub fn inches(&self) -> f32 {
        self.width.ticks() as f32 / US_PER_INCH
    }

    pub fn centimeters(&self) -> f32 {
        self.width.ticks() as f32 / US_PER_CM
    }

    /// Distance in centimeters, or `None` when nothing echoed back.
    pub fn distance_cm(&self) -> Option<f32> {
        (!self.is_no_echo()).then(|| self.centimeters())
    }
}

/// HC-SR04 style trigger/echo ultrasonic ranger.
///
/// Every query is an independent trigger and measure cycle. Not reentrant:
/// one measurement at a time per sensor.
pub struct Hcsr04<T: OutputPin, E: PulseIn> {
    trigger: T,
    echo: E,
    timeout: MicrosDurationU32,
}

impl<T: OutputPin, E: PulseIn> Hcsr04<T, E> {
    pub fn new(trigger: T, echo: E) -> Result<Self, Error> {
        Self::with_timeout(trigger, echo, DEFAULT_ECHO_TIMEOUT)
    }

    pub fn with_timeout(
        mut trigger: T,
        echo: E,
        timeout: MicrosDurationU32,
    ) -> Result<Self, Error> {
        trigger.set_low().map_err(Error::digital)?;
        Ok(Self {
            trigger,
            echo,
            timeout,
        })
    }

    pub fn set_timeout(&mut self, timeout: MicrosDurationU32) {
        self.timeout = timeout;
    }

    pub fn timeout(&self) -> MicrosDurationU32 {
        self.timeout
    }

    /// Fires the trigger and times the echo.
    pub fn measure(&mut self, delay: &mut impl DelayNs) -> Result<Echo, Error> {
        self.trigger.set_high().map_err(Error::digital)?;
        delay.delay_us(TRIGGER_PULSE_US);
        self.trigger.set_low().map_err(Error::digital)?;

        let echo = match self
            .echo
            .pulse_in(PinState::High, self.timeout)
            .map_err(Error::digital)?
        {
            Some(width) if width.ticks() != 0 => Echo { width },
            _ => Echo::NO_ECHO,
        };

        if echo.is_no_echo() {
            trace!("no echo within {} us", self.timeout.ticks());
        } else {
            trace!("echo {} us", echo.width.ticks());
        }
        Ok(echo)
    }

    pub fn inches(&mut self, delay: &mut impl DelayNs) -> Result<f32, Error> {
        Ok(self.measure(delay)?.inches())
    }

    pub fn centimeters(&mut self, delay: &mut impl DelayNs) -> Result<f32, Error> {
        Ok(self.measure(delay)?.centimeters())
    }

    pub fn release(self) -> (T, E) {
        (self.trigger, self.echo)
    }
}
