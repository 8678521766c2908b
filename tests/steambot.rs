#[path = "../steambot_hardware/tests/common/mod.rs"]
mod common;

use std::{cell::Cell, rc::Rc};

use common::{Event, FakeClock, FakeDelay, FakePin, FakePulse, FakePwm, FakeTone, Recorder};
use fugit::ExtU32;
use steambot::{hardware::notes, Board, Color, Direction, Parts, SteamBot, SteamBotConfig};

struct TestBoard;

impl Board for TestBoard {
    type RunButton = FakePin;
    type StopButton = FakePin;
    type Red = FakePin;
    type Green = FakePin;
    type Blue = FakePin;
    type Speaker = FakeTone;
    type LeftMagnitude = FakePwm;
    type LeftDirection = FakePin;
    type RightMagnitude = FakePwm;
    type RightDirection = FakePin;
    type Trigger = FakePin;
    type Echo = FakePulse;
    type BluetoothReset = FakePin;
    type Delay = FakeDelay;
    type Clock = FakeClock;
}

struct Harness {
    rec: Recorder,
    clock: FakeClock,
    run_button: Rc<Cell<bool>>,
    bluetooth: Rc<Cell<bool>>,
}

fn parts(echoes: &[Option<u32>]) -> (Parts<TestBoard>, Harness) {
    let rec = Recorder::new();
    let clock = FakeClock::new();
    let run_button = FakePin::new("run", &rec);
    let bluetooth_reset = FakePin::new("bluetooth", &rec);
    let harness = Harness {
        rec: rec.clone(),
        clock: clock.clone(),
        run_button: run_button.level(),
        bluetooth: bluetooth_reset.level(),
    };

    let parts = Parts {
        run_button,
        stop_button: FakePin::new("stop", &rec),
        red: FakePin::new("red", &rec),
        green: FakePin::new("green", &rec),
        blue: FakePin::new("blue", &rec),
        speaker: FakeTone::new(&rec),
        left_magnitude: FakePwm::new("left_pwm", &rec),
        left_direction: FakePin::new("left_dir", &rec),
        right_magnitude: FakePwm::new("right_pwm", &rec),
        right_direction: FakePin::new("right_dir", &rec),
        trigger: FakePin::new("trigger", &rec),
        echo: FakePulse::new(&rec, echoes),
        bluetooth_reset,
        delay: FakeDelay::new(&rec),
        clock,
    };
    (parts, harness)
}

#[test]
fn assembly_leaves_robot_idle_and_resets_bluetooth() {
    let (parts, h) = parts(&[]);
    let bot = SteamBot::new(parts, SteamBotConfig::default()).unwrap();

    assert_eq!(
        h.rec.events(),
        vec![
            Event::Level("red", true),
            Event::Level("green", true),
            Event::Level("blue", true),
            Event::Level("red", true),
            Event::Level("green", true),
            Event::Level("blue", true),
            Event::Duty("left_pwm", 0),
            Event::Level("left_dir", false),
            Event::Duty("right_pwm", 0),
            Event::Level("right_dir", false),
            Event::Level("trigger", false),
            Event::Level("bluetooth", true),
            Event::Level("bluetooth", true),
            Event::DelayMs(10),
            Event::Level("bluetooth", false),
            Event::DelayMs(10),
            Event::Level("bluetooth", true),
        ]
    );
    assert!(h.bluetooth.get());
    assert_eq!(bot.rgb.color(), Color::Black);
    assert_eq!(bot.motors.left().direction(), Direction::Stopped);
    assert_eq!(bot.motors.right().direction(), Direction::Stopped);
}

#[test]
fn drive_is_forward_on_both_sides() {
    let (parts, h) = parts(&[]);
    let mut bot = SteamBot::new(parts, SteamBotConfig::default()).unwrap();
    h.rec.clear();

    bot.drive(50, 50).unwrap();
    assert_eq!(bot.motors.left().direction(), Direction::Forward);
    assert_eq!(bot.motors.left().magnitude(), 32_768);
    assert_eq!(bot.motors.right().direction(), Direction::Backward);
    assert_eq!(bot.motors.right().magnitude(), 32_767);
    assert_eq!(h.rec.settle_delays(), 0);

    bot.drive(-50, -50).unwrap();
    assert_eq!(h.rec.settle_delays(), 2);

    bot.halt().unwrap();
    assert_eq!(bot.motors.left().direction(), Direction::Stopped);
    assert_eq!(bot.motors.right().direction(), Direction::Stopped);
}

#[test]
fn range_uses_configured_timeout() {
    let (parts, h) = parts(&[Some(580), None]);
    let config = SteamBotConfig::new().set_echo_timeout(20_000.micros());
    let mut bot = SteamBot::new(parts, config).unwrap();
    h.rec.clear();

    let echo = bot.range().unwrap();
    assert_eq!(echo.distance_cm(), Some(10.0));
    assert!(h.rec.events().contains(&Event::Pulse(20_000)));

    assert!(bot.range().unwrap().is_no_echo());
}

#[test]
fn buttons_use_configured_debounce() {
    let (parts, h) = parts(&[]);
    let config = SteamBotConfig::new().set_debounce(2_000.micros());
    let mut bot = SteamBot::new(parts, config).unwrap();
    h.rec.clear();

    assert!(!bot.run_pressed().unwrap());
    assert!(!bot.stop_pressed().unwrap());
    assert!(h.rec.events().is_empty());

    h.run_button.set(true);
    assert!(bot.run_pressed().unwrap());
    assert_eq!(h.rec.events(), vec![Event::DelayUs(2_000)]);
}

#[test]
fn beep_ends_on_update() {
    let (parts, h) = parts(&[]);
    let mut bot = SteamBot::new(parts, SteamBotConfig::default()).unwrap();
    h.rec.clear();

    h.clock.set_ms(1_000);
    bot.beep().unwrap();
    assert!(bot.speaker.is_sounding());

    h.clock.advance_ms(99);
    bot.update().unwrap();
    assert!(bot.speaker.is_sounding());

    h.clock.advance_ms(1);
    bot.update().unwrap();
    assert!(!bot.speaker.is_sounding());
    assert_eq!(h.rec.events(), vec![Event::Tone(880), Event::NoTone]);
}

#[test]
fn play_note_rests_for_configured_time() {
    let (parts, h) = parts(&[]);
    let config = SteamBotConfig::new().set_note_rest(200.millis());
    let mut bot = SteamBot::new(parts, config).unwrap();
    h.rec.clear();

    bot.play_note(notes::A4, 100.millis()).unwrap();
    assert_eq!(
        h.rec.events(),
        vec![
            Event::Tone(440),
            Event::DelayMs(100),
            Event::NoTone,
            Event::DelayMs(100),
        ]
    );
}

#[test]
fn led_colors_come_from_config() {
    let (parts, _h) = parts(&[]);
    let config = SteamBotConfig::new()
        .set_on_color(Color::Green)
        .set_off_color(Color::Blue);
    let mut bot = SteamBot::new(parts, config).unwrap();

    assert_eq!(bot.rgb.color(), Color::Blue);
    bot.rgb.toggle().unwrap();
    assert_eq!(bot.rgb.color(), Color::Green);
}

#[test]
fn bluetooth_can_be_reset_again() {
    let (parts, h) = parts(&[]);
    let config = SteamBotConfig::new().set_bluetooth_reset_pulse(25.millis());
    let mut bot = SteamBot::new(parts, config).unwrap();
    h.rec.clear();

    bot.reset_bluetooth().unwrap();
    assert_eq!(
        h.rec.events(),
        vec![
            Event::Level("bluetooth", true),
            Event::DelayMs(25),
            Event::Level("bluetooth", false),
            Event::DelayMs(25),
            Event::Level("bluetooth", true),
        ]
    );
}
