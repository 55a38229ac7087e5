//! The blink state machine.

use crate::delay::Delay;
use crate::gpio::{self, Level, Pin};
use crate::reg::{Register, Registers};

/// Drives one pin low and high forever with an asymmetric duty cycle: low
/// for [`LOW_TICKS`](crate::gpio::LOW_TICKS), high for
/// [`HIGH_TICKS`](crate::gpio::HIGH_TICKS).
pub struct Blinker<R, D> {
    regs: Registers<R>,
    pin: Pin,
    delay: D,
    level: Option<Level>,
}

impl<R: Register, D: Delay> Blinker<R, D> {
    /// Ungate the port of `regs` and make `pin` a push-pull output.
    ///
    /// The pin is not driven until the first [`step`](Self::step).
    pub fn new(regs: Registers<R>, pin: Pin, delay: D) -> Self {
        let port = regs.port();
        gpio::enable_port_clock(&regs.apb2enr, port);
        gpio::configure_push_pull_output(&regs, pin);
        #[cfg(feature = "defmt")]
        defmt::debug!("P{}{} configured as push-pull output", port, pin.index());
        Self {
            regs,
            pin,
            delay,
            level: None,
        }
    }

    /// Drive the next level and hold it. The first step drives low.
    pub fn step(&mut self) -> Level {
        let level = self.level.map_or(Level::Low, Level::toggled);
        gpio::drive(&self.regs.bsrr, self.pin, level);
        #[cfg(feature = "defmt")]
        defmt::trace!("{} for {} ticks", level, level.hold_ticks());
        self.level = Some(level);
        self.delay.wait(level.hold_ticks());
        level
    }

    /// Step forever.
    pub fn run(mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Last level driven, `None` before the first step.
    pub fn level(&self) -> Option<Level> {
        self.level
    }

    /// The pin being blinked.
    pub fn pin(&self) -> Pin {
        self.pin
    }

    /// The register set, for inspection.
    pub fn registers(&self) -> &Registers<R> {
        &self.regs
    }

    /// The delay source, for inspection.
    pub fn delay(&self) -> &D {
        &self.delay
    }
}
