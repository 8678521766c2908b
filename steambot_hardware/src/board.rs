//! The set of lines and primitives a controller board hands to the robot.

#[cfg(feature = "stm32f4")]
pub mod stm32f4;

use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    pwm::SetDutyCycle,
};

use crate::{pulse::PulseIn, speaker::Tone, time::Monotonic};

/// Names the concrete type of every line on a board.
pub trait Board {
    type RunButton: InputPin;
    type StopButton: InputPin;

    type Red: OutputPin;
    type Green: OutputPin;
    type Blue: OutputPin;

    type Speaker: Tone;

    type LeftMagnitude: SetDutyCycle;
    type LeftDirection: OutputPin;
    type RightMagnitude: SetDutyCycle;
    type RightDirection: OutputPin;

    type Trigger: OutputPin;
    type Echo: PulseIn;

    type BluetoothReset: OutputPin;

    type Delay: DelayNs;
    type Clock: Monotonic;
}

/// Every line of a board, already configured for its job.
pub struct Parts<B: Board> {
    pub run_button: B::RunButton,
    pub stop_button: B::StopButton,

    pub red: B::Red,
    pub green: B::Green,
    pub blue: B::Blue,

    pub speaker: B::Speaker,

    pub left_magnitude: B::LeftMagnitude,
    pub left_direction: B::LeftDirection,
    pub right_magnitude: B::RightMagnitude,
    pub right_direction: B::RightDirection,

    pub trigger: B::Trigger,
    pub echo: B::Echo,

    pub bluetooth_reset: B::BluetoothReset,

    pub delay: B::Delay,
    pub clock: B::Clock,
}
