use embedded_hal::{delay::DelayNs, digital::OutputPin, pwm::SetDutyCycle};

use super::MotorChannel;
use crate::Error;

/// Differential drive over a left and a right channel.
///
/// The right motor is mounted mirrored, so its commands are negated: positive
/// speeds on both sides always mean straight ahead.
pub struct DualMotors<LP, LD, RP, RD>
where
    LP: SetDutyCycle,
    LD: OutputPin,
    RP: SetDutyCycle,
    RD: OutputPin,
{
    left: MotorChannel<LP, LD>,
    right: MotorChannel<RP, RD>,
}

impl<LP, LD, RP, RD> DualMotors<LP, LD, RP, RD>
where
    LP: SetDutyCycle,
    LD: OutputPin,
    RP: SetDutyCycle,
    RD: OutputPin,
{
    pub fn new(left: MotorChannel<LP, LD>, right: MotorChannel<RP, RD>) -> Self {
        Self { left, right }
    }

    pub fn run(
        &mut self,
        left_speed: i16,
        right_speed: i16,
        delay: &mut impl DelayNs,
    ) -> Result<(), Error> {
        self.left.run(left_speed, delay)?;
        self.right.run(right_speed.saturating_neg(), delay)
    }

    /// Stops both sides, even if the left one fails.
    pub fn stop(&mut self) -> Result<(), Error> {
        let left = self.left.stop();
        let right = self.right.stop();
        left.and(right)
    }

    pub fn left(&self) -> &MotorChannel<LP, LD> {
        &self.left
    }

    pub fn right(&self) -> &MotorChannel<RP, RD> {
        &self.right
    }
}
