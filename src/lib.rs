#![cfg_attr(not(test), no_std)]

//! STEAMbot controller: the assembled robot on top of `steambot_hardware`.

pub mod bluetooth;
pub mod config;
pub mod logging;

use fugit::{HertzU32, MillisDurationU32};
use log::info;

pub use config::SteamBotConfig;
pub use steambot_hardware as hardware;
pub use steambot_hardware::{Board, Color, Direction, Echo, Error, Parts};

use steambot_hardware::{
    Button, DigitalOutput, DualMotors, Hcsr04, Monotonic, MotorChannel, Polarity, RgbLed, Speaker,
};

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub type Motors<B> = DualMotors<
    <B as Board>::LeftMagnitude,
    <B as Board>::LeftDirection,
    <B as Board>::RightMagnitude,
    <B as Board>::RightDirection,
>;
pub type Rgb<B> = RgbLed<<B as Board>::Red, <B as Board>::Green, <B as Board>::Blue>;
pub type Ultrasonic<B> = Hcsr04<<B as Board>::Trigger, <B as Board>::Echo>;

/// The whole robot, owned by the application's control loop.
///
/// Peripherals are public for direct use; the methods here cover the common
/// operations and supply the shared delay and clock.
pub struct SteamBot<B: Board> {
    pub run_button: Button<B::RunButton>,
    pub stop_button: Button<B::StopButton>,
    pub rgb: Rgb<B>,
    pub speaker: Speaker<B::Speaker>,
    pub motors: Motors<B>,
    pub ultrasonic: Ultrasonic<B>,
    pub delay: B::Delay,
    pub clock: B::Clock,
    bluetooth_reset: DigitalOutput<B::BluetoothReset>,
    config: SteamBotConfig,
}

impl<B: Board> SteamBot<B> {
    /// Assembles the robot with motors stopped and the LED off, then resets
    /// the bluetooth module.
    pub fn new(parts: Parts<B>, config: SteamBotConfig) -> Result<Self, Error> {
        let Parts {
            run_button,
            stop_button,
            red,
            green,
            blue,
            speaker,
            left_magnitude,
            left_direction,
            right_magnitude,
            right_direction,
            trigger,
            echo,
            bluetooth_reset,
            delay,
            clock,
        } = parts;

        let mut rgb = RgbLed::new(red, green, blue)?;
        rgb.set_on_color(config.on_color());
        rgb.set_off_color(config.off_color());
        rgb.off()?;

        let motors = DualMotors::new(
            MotorChannel::new(left_magnitude, left_direction)?,
            MotorChannel::new(right_magnitude, right_direction)?,
        );

        let mut bot = Self {
            run_button: Button::new(run_button),
            stop_button: Button::new(stop_button),
            rgb,
            speaker: Speaker::new(speaker),
            motors,
            ultrasonic: Hcsr04::with_timeout(trigger, echo, config.echo_timeout())?,
            delay,
            clock,
            bluetooth_reset: DigitalOutput::new(bluetooth_reset, Polarity::ActiveHigh, true)?,
            config,
        };
        bot.reset_bluetooth()?;

        info!("{} v{} ready", NAME, VERSION);
        Ok(bot)
    }

    pub fn config(&self) -> &SteamBotConfig {
        &self.config
    }

    /// Differential drive, percent per side, positive is forward on both.
    pub fn drive(&mut self, left: i16, right: i16) -> Result<(), Error> {
        self.motors.run(left, right, &mut self.delay)
    }

    pub fn halt(&mut self) -> Result<(), Error> {
        self.motors.stop()
    }

    /// One ranging cycle. Check [`Echo::is_no_echo`] before trusting the distance.
    pub fn range(&mut self) -> Result<Echo, Error> {
        self.ultrasonic.measure(&mut self.delay)
    }

    pub fn run_pressed(&mut self) -> Result<bool, Error> {
        self.run_button
            .is_pressed_debounced(&mut self.delay, self.config.debounce())
    }

    pub fn stop_pressed(&mut self) -> Result<bool, Error> {
        self.stop_button
            .is_pressed_debounced(&mut self.delay, self.config.debounce())
    }

    pub fn beep(&mut self) -> Result<(), Error> {
        let now = self.clock.millis();
        self.speaker.beep(self.config.beep_duration(), now)
    }

    /// Plays a note and blocks for the configured rest.
    pub fn play_note(
        &mut self,
        frequency: HertzU32,
        duration: MillisDurationU32,
    ) -> Result<(), Error> {
        let now = self.clock.millis();
        self.speaker.play_note(
            frequency,
            duration,
            self.config.note_rest(),
            now,
            &mut self.delay,
        )
    }

    /// Housekeeping for the control loop: ends expired tones.
    pub fn update(&mut self) -> Result<(), Error> {
        let now = self.clock.millis();
        self.speaker.update(now)?;
        Ok(())
    }

    pub fn reset_bluetooth(&mut self) -> Result<(), Error> {
        bluetooth::reset_module(
            &mut self.bluetooth_reset,
            &mut self.delay,
            self.config.bluetooth_reset_pulse(),
        )
    }
}
