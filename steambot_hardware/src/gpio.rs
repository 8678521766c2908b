use embedded_hal::digital::{InputPin, OutputPin, PinState, StatefulOutputPin};

use crate::Error;

/// Which electrical level means "on" for a line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    #[default]
    ActiveHigh,
    ActiveLow,
}

impl Polarity {
    fn level(self, on: bool) -> PinState {
        match self {
            Polarity::ActiveHigh => PinState::from(on),
            Polarity::ActiveLow => PinState::from(!on),
        }
    }

    fn is_on(self, high: bool) -> bool {
        match self {
            Polarity::ActiveHigh => high,
            Polarity::ActiveLow => !high,
        }
    }
}

/// Output line that speaks in on/off rather than high/low.
pub struct DigitalOutput<P> {
    pin: P,
    polarity: Polarity,
}

impl<P: OutputPin> DigitalOutput<P> {
    /// Wraps `pin` and immediately drives it to `initial`.
    pub fn new(pin: P, polarity: Polarity, initial: bool) -> Result<Self, Error> {
        let mut output = Self { pin, polarity };
        output.write(initial)?;
        Ok(output)
    }

    pub fn active_high(pin: P) -> Result<Self, Error> {
        Self::new(pin, Polarity::ActiveHigh, false)
    }

    pub fn active_low(pin: P) -> Result<Self, Error> {
        Self::new(pin, Polarity::ActiveLow, false)
    }

    pub fn write(&mut self, on: bool) -> Result<(), Error> {
        self.pin
            .set_state(self.polarity.level(on))
            .map_err(Error::digital)
    }

    pub fn on(&mut self) -> Result<(), Error> {
        self.write(true)
    }

    pub fn off(&mut self) -> Result<(), Error> {
        self.write(false)
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: StatefulOutputPin> DigitalOutput<P> {
    /// Reads back the commanded state, in on/off terms.
    pub fn state(&mut self) -> Result<bool, Error> {
        let high = self.pin.is_set_high().map_err(Error::digital)?;
        Ok(self.polarity.is_on(high))
    }

    pub fn toggle(&mut self) -> Result<(), Error> {
        self.pin.toggle().map_err(Error::digital)
    }
}

/// Input line read in on/off terms.
pub struct DigitalInput<P> {
    pin: P,
    polarity: Polarity,
}

impl<P: InputPin> DigitalInput<P> {
    pub fn new(pin: P, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }

    pub fn read(&mut self) -> Result<bool, Error> {
        let high = self.pin.is_high().map_err(Error::digital)?;
        Ok(self.polarity.is_on(high))
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn release(self) -> P {
        self.pin
    }
}
