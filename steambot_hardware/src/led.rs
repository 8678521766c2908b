use embedded_hal::digital::OutputPin;

use crate::{gpio::DigitalOutput, Error};

const RED_BIT: u8 = 0b100;
const GREEN_BIT: u8 = 0b010;
const BLUE_BIT: u8 = 0b001;

/// The eight colors a tri-color LED can show, one bit per die.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Color {
    #[default]
    Black = 0,
    Blue = 1,
    Green = 2,
    Aqua = 3,
    Red = 4,
    Fuchsia = 5,
    Yellow = 6,
    White = 7,
}

impl Color {
    /// Only the low three bits are used.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0 => Color::Black,
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Aqua,
            4 => Color::Red,
            5 => Color::Fuchsia,
            6 => Color::Yellow,
            _ => Color::White,
        }
    }

    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Next color in bit order, wrapping from white back to black.
    pub const fn next(self) -> Self {
        Self::from_bits(self.bits() + 1)
    }

    pub const fn has_red(self) -> bool {
        self.bits() & RED_BIT != 0
    }

    pub const fn has_green(self) -> bool {
        self.bits() & GREEN_BIT != 0
    }

    pub const fn has_blue(self) -> bool {
        self.bits() & BLUE_BIT != 0
    }
}

/// Common-anode RGB LED, each die driven by an active-low line.
///
/// Switched to its off color when dropped.
pub struct RgbLed<R: OutputPin, G: OutputPin, B: OutputPin> {
    red: DigitalOutput<R>,
    green: DigitalOutput<G>,
    blue: DigitalOutput<B>,
    current: Color,
    on_color: Color,
    off_color: Color,
}

impl<R: OutputPin, G: OutputPin, B: OutputPin> RgbLed<R, G, B> {
    /// Takes the three lines and turns every die off.
    pub fn new(red: R, green: G, blue: B) -> Result<Self, Error> {
        Ok(Self {
            red: DigitalOutput::active_low(red)?,
            green: DigitalOutput::active_low(green)?,
            blue: DigitalOutput::active_low(blue)?,
            current: Color::Black,
            on_color: Color::White,
            off_color: Color::Black,
        })
    }

    pub fn set_color(&mut self, color: Color) -> Result<(), Error> {
        self.current = color;
        self.red.write(color.has_red())?;
        self.green.write(color.has_green())?;
        self.blue.write(color.has_blue())
    }

    pub fn set_color_bits(&mut self, bits: u8) -> Result<(), Error> {
        self.set_color(Color::from_bits(bits))
    }

    pub fn color(&self) -> Color {
        self.current
    }

    pub fn next_color(&mut self) -> Result<Color, Error> {
        self.set_color(self.current.next())?;
        Ok(self.current)
    }

    pub fn set_on_color(&mut self, color: Color) {
        self.on_color = color;
    }

    pub fn on_color(&self) -> Color {
        self.on_color
    }

    pub fn set_off_color(&mut self, color: Color) {
        self.off_color = color;
    }

    pub fn off_color(&self) -> Color {
        self.off_color
    }

    pub fn on(&mut self) -> Result<(), Error> {
        self.set_color(self.on_color)
    }

    pub fn off(&mut self) -> Result<(), Error> {
        self.set_color(self.off_color)
    }

    /// Shows the on color if currently showing the off color, otherwise the off color.
    pub fn toggle(&mut self) -> Result<(), Error> {
        if self.current == self.off_color {
            self.on()
        } else {
            self.off()
        }
    }
}

impl<R: OutputPin, G: OutputPin, B: OutputPin> Drop for RgbLed<R, G, B> {
    fn drop(&mut self) {
        let _ = self.off();
    }
}
