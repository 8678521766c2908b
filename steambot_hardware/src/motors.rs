pub mod channel;
pub mod dual;

pub use channel::MotorChannel;
pub use dual::DualMotors;

pub const MAX_PWM_VALUE: u16 = 0xFFFF;
pub const MAX_MOTOR_SPEED: u16 = MAX_PWM_VALUE;
pub const MIN_MOTOR_SPEED: u16 = 0;

/// Commanded speeds are percentages, clamped to +/- this value.
pub const MAX_SPEED_PERCENT: i16 = 100;

/// Pause between stopping a motor and driving it the other way.
pub const SETTLE_DELAY_MS: u32 = 100;

/// Last direction a motor channel was commanded in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Backward,
    #[default]
    Stopped,
    Forward,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Backward => Direction::Forward,
            Direction::Stopped => Direction::Stopped,
            Direction::Forward => Direction::Backward,
        }
    }
}
