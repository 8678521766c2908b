// One brushed DC motor on a PWM magnitude line plus a direction line

use core::cmp::Ordering;

use embedded_hal::{
    delay::DelayNs,
    digital::{OutputPin, PinState},
    pwm::SetDutyCycle,
};
use log::debug;

use super::{
    Direction, MAX_MOTOR_SPEED, MAX_PWM_VALUE, MAX_SPEED_PERCENT, MIN_MOTOR_SPEED,
    SETTLE_DELAY_MS,
};
use crate::Error;

/// A single drive channel.
///
/// Forward drives the direction line high and uses an inverted magnitude:
/// full duty is stopped and zero duty is full speed. Backward drives the
/// direction line low and uses the magnitude as-is. Reversing always passes
/// through a stop and a [`SETTLE_DELAY_MS`] pause so the driver never sees an
/// abrupt full reversal.
///
/// The channel is stopped on construction and on drop.
pub struct MotorChannel<P: SetDutyCycle, D: OutputPin> {
    magnitude: P,
    direction_pin: D,
    direction: Direction,
    duty: u16,
}

impl<P: SetDutyCycle, D: OutputPin> MotorChannel<P, D> {
    pub fn new(magnitude: P, direction_pin: D) -> Result<Self, Error> {
        let mut channel = Self {
            magnitude,
            direction_pin,
            direction: Direction::Stopped,
            duty: 0,
        };
        channel.stop()?;
        Ok(channel)
    }

    /// Zero magnitude, direction line low.
    pub fn stop(&mut self) -> Result<(), Error> {
        self.magnitude
            .set_duty_cycle_fully_off()
            .map_err(Error::pwm)?;
        self.direction_pin.set_low().map_err(Error::digital)?;
        self.duty = 0;
        self.direction = Direction::Stopped;
        Ok(())
    }

    /// Drives at `speed` percent, positive forward, negative backward.
    ///
    /// Values beyond +/-100 are clamped. Blocks for the settle delay when the
    /// sign flips relative to the previous command.
    pub fn run(&mut self, speed: i16, delay: &mut impl DelayNs) -> Result<(), Error> {
        let speed = speed.clamp(-MAX_SPEED_PERCENT, MAX_SPEED_PERCENT);

        let (direction, duty) = match speed.cmp(&0) {
            Ordering::Equal => return self.stop(),
            Ordering::Greater => (
                Direction::Forward,
                MAX_MOTOR_SPEED - scale(speed.unsigned_abs()),
            ),
            Ordering::Less => (Direction::Backward, scale(speed.unsigned_abs())),
        };

        if self.direction == direction.reversed() {
            debug!("reversing motor, settling for {} ms", SETTLE_DELAY_MS);
            self.stop()?;
            delay.delay_ms(SETTLE_DELAY_MS);
        }

        // State only moves once both lines have taken the new command
        if let Err(e) = self.apply(direction, duty) {
            let _ = self.stop();
            return Err(e);
        }
        self.direction = direction;
        self.duty = duty;

        Ok(())
    }

    fn apply(&mut self, direction: Direction, duty: u16) -> Result<(), Error> {
        self.direction_pin
            .set_state(PinState::from(direction == Direction::Forward))
            .map_err(Error::digital)?;
        self.magnitude
            .set_duty_cycle_fraction(duty, MAX_PWM_VALUE)
            .map_err(Error::pwm)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Last raw magnitude written, on the 0..=0xFFFF scale.
    pub fn magnitude(&self) -> u16 {
        self.duty
    }
}

impl<P: SetDutyCycle, D: OutputPin> Drop for MotorChannel<P, D> {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

/// Maps 0..=100 percent onto the raw motor range.
fn scale(percent: u16) -> u16 {
    let span = u32::from(MAX_MOTOR_SPEED - MIN_MOTOR_SPEED);
    (u32::from(percent) * span / 100) as u16 + MIN_MOTOR_SPEED
}
