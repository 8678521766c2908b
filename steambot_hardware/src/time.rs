use fugit::TimerInstantU32;

pub type MillisInstant = TimerInstantU32<1_000>;
pub type MicrosInstant = TimerInstantU32<1_000_000>;

/// Free running clock counted from startup.
///
/// Both counters wrap at `u32::MAX`; everything in this crate measures
/// elapsed time with wrapping subtraction so a wrap is harmless as long as
/// the interval being measured is shorter than the wrap period.
pub trait Monotonic {
    fn millis(&self) -> MillisInstant;
    fn micros(&self) -> MicrosInstant;
}

impl<T: Monotonic + ?Sized> Monotonic for &T {
    fn millis(&self) -> MillisInstant {
        (**self).millis()
    }

    fn micros(&self) -> MicrosInstant {
        (**self).micros()
    }
}

/// Ticks between `earlier` and `now`, tolerant of one counter wrap.
pub(crate) fn ticks_since<const FREQ: u32>(
    now: TimerInstantU32<FREQ>,
    earlier: TimerInstantU32<FREQ>,
) -> u32 {
    now.ticks().wrapping_sub(earlier.ticks())
}
