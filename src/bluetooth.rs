use embedded_hal::{delay::DelayNs, digital::OutputPin};
use fugit::MillisDurationU32;
use steambot_hardware::{DigitalOutput, Error};

/// Pulses the bluetooth module's reset line: high, low, high.
pub fn reset_module<P: OutputPin>(
    reset: &mut DigitalOutput<P>,
    delay: &mut impl DelayNs,
    pulse: MillisDurationU32,
) -> Result<(), Error> {
    reset.on()?;
    delay.delay_ms(pulse.ticks());
    reset.off()?;
    delay.delay_ms(pulse.ticks());
    reset.on()
}
