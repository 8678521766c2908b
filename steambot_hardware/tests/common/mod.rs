#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    convert::Infallible,
    rc::Rc,
};

use embedded_hal::{
    delay::DelayNs,
    digital::{self, InputPin, OutputPin, PinState, StatefulOutputPin},
    pwm::{self, SetDutyCycle},
};
use fugit::{HertzU32, MicrosDurationU32};
use steambot_hardware::{MicrosInstant, MillisInstant, Monotonic, PulseIn, Tone};

/// Everything the fakes below did, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Duty(&'static str, u16),
    Level(&'static str, bool),
    DelayNs(u32),
    DelayUs(u32),
    DelayMs(u32),
    Pulse(u32),
    Tone(u32),
    NoTone,
}

#[derive(Clone, Default)]
pub struct Recorder(Rc<RefCell<Vec<Event>>>);

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn settle_delays(&self) -> usize {
        self.0
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::DelayMs(_)))
            .count()
    }
}

pub struct FakePwm {
    name: &'static str,
    rec: Recorder,
    max: u16,
}

impl FakePwm {
    pub fn new(name: &'static str, rec: &Recorder) -> Self {
        Self::with_max(name, rec, u16::MAX)
    }

    pub fn with_max(name: &'static str, rec: &Recorder, max: u16) -> Self {
        Self {
            name,
            rec: rec.clone(),
            max,
        }
    }
}

impl pwm::ErrorType for FakePwm {
    type Error = Infallible;
}

impl SetDutyCycle for FakePwm {
    fn max_duty_cycle(&self) -> u16 {
        self.max
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.rec.push(Event::Duty(self.name, duty));
        Ok(())
    }
}

/// Output or input line whose level the test can inspect and force.
pub struct FakePin {
    name: &'static str,
    rec: Recorder,
    level: Rc<Cell<bool>>,
}

impl FakePin {
    pub fn new(name: &'static str, rec: &Recorder) -> Self {
        Self {
            name,
            rec: rec.clone(),
            level: Rc::new(Cell::new(false)),
        }
    }

    pub fn level(&self) -> Rc<Cell<bool>> {
        self.level.clone()
    }
}

impl digital::ErrorType for FakePin {
    type Error = Infallible;
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level.set(false);
        self.rec.push(Event::Level(self.name, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level.set(true);
        self.rec.push(Event::Level(self.name, true));
        Ok(())
    }
}

impl StatefulOutputPin for FakePin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level.get())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level.get())
    }
}

impl InputPin for FakePin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level.get())
    }
}

/// Output line whose driver rejects every attempt to go high.
pub struct StuckLowPin {
    name: &'static str,
    rec: Recorder,
}

impl StuckLowPin {
    pub fn new(name: &'static str, rec: &Recorder) -> Self {
        Self {
            name,
            rec: rec.clone(),
        }
    }
}

impl digital::ErrorType for StuckLowPin {
    type Error = digital::ErrorKind;
}

impl OutputPin for StuckLowPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.rec.push(Event::Level(self.name, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(digital::ErrorKind::Other)
    }
}

pub struct FakeDelay {
    rec: Recorder,
}

impl FakeDelay {
    pub fn new(rec: &Recorder) -> Self {
        Self { rec: rec.clone() }
    }
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.rec.push(Event::DelayNs(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.rec.push(Event::DelayUs(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.rec.push(Event::DelayMs(ms));
    }
}

/// Pulse timer that replays canned widths, `None` meaning timeout.
pub struct FakePulse {
    rec: Recorder,
    replies: VecDeque<Option<u32>>,
}

impl FakePulse {
    pub fn new(rec: &Recorder, replies: &[Option<u32>]) -> Self {
        Self {
            rec: rec.clone(),
            replies: replies.iter().copied().collect(),
        }
    }
}

impl PulseIn for FakePulse {
    type Error = Infallible;

    fn pulse_in(
        &mut self,
        level: PinState,
        timeout: MicrosDurationU32,
    ) -> Result<Option<MicrosDurationU32>, Self::Error> {
        assert_eq!(level, PinState::High);
        self.rec.push(Event::Pulse(timeout.ticks()));
        Ok(self
            .replies
            .pop_front()
            .flatten()
            .map(MicrosDurationU32::from_ticks))
    }
}

pub struct FakeTone {
    rec: Recorder,
}

impl FakeTone {
    pub fn new(rec: &Recorder) -> Self {
        Self { rec: rec.clone() }
    }
}

impl Tone for FakeTone {
    type Error = Infallible;

    fn tone(&mut self, frequency: HertzU32) -> Result<(), Self::Error> {
        self.rec.push(Event::Tone(frequency.raw()));
        Ok(())
    }

    fn no_tone(&mut self) -> Result<(), Self::Error> {
        self.rec.push(Event::NoTone);
        Ok(())
    }
}

/// Clock the test moves by hand. Milliseconds and microseconds are kept
/// consistent.
#[derive(Clone, Default)]
pub struct FakeClock {
    micros: Rc<Cell<u32>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_ms(&self, ms: u32) {
        self.micros.set(ms * 1_000);
    }

    pub fn advance_ms(&self, ms: u32) {
        self.micros.set(self.micros.get() + ms * 1_000);
    }

    pub fn micros_cell(&self) -> Rc<Cell<u32>> {
        self.micros.clone()
    }
}

impl Monotonic for FakeClock {
    fn millis(&self) -> MillisInstant {
        MillisInstant::from_ticks(self.micros.get() / 1_000)
    }

    fn micros(&self) -> MicrosInstant {
        MicrosInstant::from_ticks(self.micros.get())
    }
}

/// Echo line that is high during the given `[rise, fall)` windows of a shared
/// microsecond counter. Every read costs one microsecond.
pub struct PulseTrain {
    now: Rc<Cell<u32>>,
    pulses: Vec<(u32, u32)>,
}

impl PulseTrain {
    pub fn new(clock: &FakeClock, pulses: &[(u32, u32)]) -> Self {
        Self {
            now: clock.micros_cell(),
            pulses: pulses.to_vec(),
        }
    }
}

impl digital::ErrorType for PulseTrain {
    type Error = Infallible;
}

impl InputPin for PulseTrain {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        let t = self.now.get();
        self.now.set(t + 1);
        Ok(self
            .pulses
            .iter()
            .any(|&(rise, fall)| rise <= t && t < fall))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}
