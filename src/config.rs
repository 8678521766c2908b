use fugit::{MicrosDurationU32, MillisDurationU32};
use steambot_hardware::{
    speaker::{DEFAULT_BEEP, DEFAULT_NOTE_REST},
    ultrasonic::DEFAULT_ECHO_TIMEOUT,
    Color,
};

pub const BLUETOOTH_BAUD: u32 = 115_200;
pub const BLUETOOTH_RESET_PULSE: MillisDurationU32 = MillisDurationU32::from_ticks(10);

/// Tunables applied when the robot is assembled.
///
/// ```
/// use fugit::ExtU32;
/// use steambot::SteamBotConfig;
///
/// let config = SteamBotConfig::new()
///     .set_echo_timeout(20_000.micros())
///     .set_debounce(2_000.micros());
/// assert_eq!(config.echo_timeout().ticks(), 20_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SteamBotConfig {
    echo_timeout: MicrosDurationU32,
    debounce: MicrosDurationU32,
    beep_duration: MillisDurationU32,
    note_rest: MillisDurationU32,
    on_color: Color,
    off_color: Color,
    bluetooth_reset_pulse: MillisDurationU32,
    bluetooth_baud: u32,
}

impl Default for SteamBotConfig {
    fn default() -> Self {
        Self {
            echo_timeout: DEFAULT_ECHO_TIMEOUT,
            debounce: MicrosDurationU32::from_ticks(0),
            beep_duration: DEFAULT_BEEP,
            note_rest: DEFAULT_NOTE_REST,
            on_color: Color::White,
            off_color: Color::Black,
            bluetooth_reset_pulse: BLUETOOTH_RESET_PULSE,
            bluetooth_baud: BLUETOOTH_BAUD,
        }
    }
}

impl SteamBotConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Longest the ranger waits for an echo.
    pub fn set_echo_timeout(self, timeout: MicrosDurationU32) -> Self {
        let mut s = self;
        s.echo_timeout = timeout;
        s
    }

    /// How long a button press must hold to count. Zero disables debouncing.
    pub fn set_debounce(self, settle: MicrosDurationU32) -> Self {
        let mut s = self;
        s.debounce = settle;
        s
    }

    pub fn set_beep_duration(self, duration: MillisDurationU32) -> Self {
        let mut s = self;
        s.beep_duration = duration;
        s
    }

    /// Pause after starting each note of a tune.
    pub fn set_note_rest(self, rest: MillisDurationU32) -> Self {
        let mut s = self;
        s.note_rest = rest;
        s
    }

    pub fn set_on_color(self, color: Color) -> Self {
        let mut s = self;
        s.on_color = color;
        s
    }

    pub fn set_off_color(self, color: Color) -> Self {
        let mut s = self;
        s.off_color = color;
        s
    }

    pub fn set_bluetooth_reset_pulse(self, pulse: MillisDurationU32) -> Self {
        let mut s = self;
        s.bluetooth_reset_pulse = pulse;
        s
    }

    /// Recorded for the application's serial setup; nothing here opens the port.
    pub fn set_bluetooth_baud(self, baud: u32) -> Self {
        let mut s = self;
        s.bluetooth_baud = baud;
        s
    }

    pub fn echo_timeout(&self) -> MicrosDurationU32 {
        self.echo_timeout
    }

    pub fn debounce(&self) -> MicrosDurationU32 {
        self.debounce
    }

    pub fn beep_duration(&self) -> MillisDurationU32 {
        self.beep_duration
    }

    pub fn note_rest(&self) -> MillisDurationU32 {
        self.note_rest
    }

    pub fn on_color(&self) -> Color {
        self.on_color
    }

    pub fn off_color(&self) -> Color {
        self.off_color
    }

    pub fn bluetooth_reset_pulse(&self) -> MillisDurationU32 {
        self.bluetooth_reset_pulse
    }

    pub fn bluetooth_baud(&self) -> u32 {
        self.bluetooth_baud
    }
}
