//! STEAMbot wiring on an STM32F407.
//!
//! Pin map:
//! - speaker PB6 (TIM4 CH1)
//! - RGB LED red PB0, green PB1, blue PA7, all active low
//! - left motor magnitude PC6 (TIM3 CH1), direction PA4
//! - right motor magnitude PC7 (TIM3 CH2), direction PA5
//! - ultrasonic trigger PB11, echo PB10
//! - run button PB8, stop button PC14
//! - bluetooth module reset PC15

use core::{cell::Cell, convert::Infallible};

use fugit::HertzU32;
use stm32f4xx_hal::{
    gpio::{
        Alternate, Input, Output, PushPull, PA4, PA5, PA7, PB0, PB1, PB10, PB11, PB6, PB8, PC14,
        PC15,
    },
    pac::{CorePeripherals, Peripherals, TIM2, TIM3, TIM4, TIM5},
    prelude::*,
    timer::{self, Ch, Channel, CounterUs, PwmChannel, PwmHz, SysDelay, Timer3, Timer4},
};

use super::{Board, Parts};
use crate::{
    pulse::PollingPulseIn,
    speaker::Tone,
    time::{MicrosInstant, MillisInstant, Monotonic},
};

const MOTOR_PWM_FREQ: HertzU32 = HertzU32::kHz(20);

pub type SpeakerPwm = PwmHz<TIM4, Ch<0>, PB6<Alternate<2>>>;

/// Square wave on TIM4 channel 1, half duty.
pub struct PwmTone {
    pwm: SpeakerPwm,
}

impl PwmTone {
    pub fn new(mut pwm: SpeakerPwm) -> Self {
        pwm.disable(Channel::C1);
        Self { pwm }
    }
}

impl Tone for PwmTone {
    type Error = Infallible;

    fn tone(&mut self, frequency: HertzU32) -> Result<(), Self::Error> {
        // The period changes the reload value, so duty has to follow it
        self.pwm.set_period(frequency);
        let max = self.pwm.get_max_duty();
        self.pwm.set_duty(Channel::C1, max / 2);
        self.pwm.enable(Channel::C1);
        Ok(())
    }

    fn no_tone(&mut self) -> Result<(), Self::Error> {
        self.pwm.disable(Channel::C1);
        Ok(())
    }
}

/// Free running 1 MHz counter on a 32-bit timer.
///
/// Milliseconds are derived from a 64-bit extension of the microsecond count,
/// which needs `millis` to be read at least once per counter wrap (~71 min).
pub struct CounterClock<TIM> {
    counter: CounterUs<TIM>,
    last: Cell<u32>,
    wraps: Cell<u32>,
}

impl<TIM: timer::Instance> CounterClock<TIM> {
    pub fn new(mut counter: CounterUs<TIM>) -> Result<Self, timer::Error> {
        counter.start(u32::MAX.micros())?;
        Ok(Self {
            counter,
            last: Cell::new(0),
            wraps: Cell::new(0),
        })
    }
}

impl<TIM: timer::Instance> Monotonic for CounterClock<TIM> {
    fn millis(&self) -> MillisInstant {
        let now = self.counter.now().ticks();
        if now < self.last.get() {
            self.wraps.set(self.wraps.get().wrapping_add(1));
        }
        self.last.set(now);

        let micros = (u64::from(self.wraps.get()) << 32) | u64::from(now);
        MillisInstant::from_ticks((micros / 1_000) as u32)
    }

    fn micros(&self) -> MicrosInstant {
        self.counter.now()
    }
}

pub struct SteamBotF4;

impl Board for SteamBotF4 {
    type RunButton = PB8<Input>;
    type StopButton = PC14<Input>;

    type Red = PB0<Output<PushPull>>;
    type Green = PB1<Output<PushPull>>;
    type Blue = PA7<Output<PushPull>>;

    type Speaker = PwmTone;

    type LeftMagnitude = PwmChannel<TIM3, 0>;
    type LeftDirection = PA4<Output<PushPull>>;
    type RightMagnitude = PwmChannel<TIM3, 1>;
    type RightDirection = PA5<Output<PushPull>>;

    type Trigger = PB11<Output<PushPull>>;
    type Echo = PollingPulseIn<PB10<Input>, CounterClock<TIM5>>;

    type BluetoothReset = PC15<Output<PushPull>>;

    type Delay = SysDelay;
    type Clock = CounterClock<TIM2>;
}

/// Clocks the chip and hands out every STEAMbot line.
pub fn init(pac: Peripherals, core: CorePeripherals) -> Result<Parts<SteamBotF4>, timer::Error> {
    let rcc = pac.RCC.constrain();
    let clocks = rcc.cfgr.sysclk(168.MHz()).freeze();
    let delay = core.SYST.delay(&clocks);

    let gpioa = pac.GPIOA.split();
    let gpiob = pac.GPIOB.split();
    let gpioc = pac.GPIOC.split();

    let clock = CounterClock::new(pac.TIM2.counter_us(&clocks))?;
    let echo_clock = CounterClock::new(pac.TIM5.counter_us(&clocks))?;

    let tim3 = Timer3::new(pac.TIM3, &clocks);
    let motor_pins = (gpioc.pc6.into_alternate(), gpioc.pc7.into_alternate());
    let (mut left_magnitude, mut right_magnitude) =
        tim3.pwm_hz(motor_pins, MOTOR_PWM_FREQ).split();
    left_magnitude.enable();
    right_magnitude.enable();

    let tim4 = Timer4::new(pac.TIM4, &clocks);
    let speaker = PwmTone::new(tim4.pwm_hz(gpiob.pb6.into_alternate(), 1.kHz()));

    let echo = PollingPulseIn::new(gpiob.pb10.into_pull_down_input(), echo_clock);

    Ok(Parts {
        run_button: gpiob.pb8.into_floating_input(),
        stop_button: gpioc.pc14.into_floating_input(),
        red: gpiob.pb0.into_push_pull_output(),
        green: gpiob.pb1.into_push_pull_output(),
        blue: gpioa.pa7.into_push_pull_output(),
        speaker,
        left_magnitude,
        left_direction: gpioa.pa4.into_push_pull_output(),
        right_magnitude,
        right_direction: gpioa.pa5.into_push_pull_output(),
        trigger: gpiob.pb11.into_push_pull_output(),
        echo,
        bluetooth_reset: gpioc.pc15.into_push_pull_output(),
        delay,
        clock,
    })
}
