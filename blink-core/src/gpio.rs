//! STM32F1 GPIO pin configuration and output driving.

use core::fmt;

use crate::reg::{Register, Registers};

/// Configuration nibble for a general purpose push-pull output with a
/// 2 MHz slew rate: `CNF = 0b00`, `MODE = 0b10`.
pub const OUTPUT_PUSH_PULL_2MHZ: u32 = 0b0010;

/// Hold time of the low phase, in delay ticks.
pub const LOW_TICKS: u32 = 1000;
/// Hold time of the high phase, in delay ticks.
pub const HIGH_TICKS: u32 = 500;

/// A GPIO port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    A,
    B,
    C,
    D,
    E,
}

impl Port {
    /// `IOPxEN` bit in `RCC_APB2ENR`.
    pub const fn clock_enable_mask(self) -> u32 {
        1 << (2 + self as u32)
    }
}

/// Error returned by [`Pin::new`] for an index above 15.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidPin(pub u8);

impl fmt::Display for InvalidPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPIO pin {} does not exist, ports have pins 0..=15", self.0)
    }
}

/// A pin index within a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pin(u8);

impl Pin {
    pub const fn new(index: u8) -> Result<Self, InvalidPin> {
        if index < 16 {
            Ok(Self(index))
        } else {
            Err(InvalidPin(index))
        }
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// Offset of this pin's nibble within CRL or CRH.
    pub const fn config_shift(self) -> u32 {
        (self.0 as u32 % 8) * 4
    }

    pub const fn config_mask(self) -> u32 {
        0xF << self.config_shift()
    }

    /// `BSn` bit of BSRR.
    pub const fn set_mask(self) -> u32 {
        1 << self.0
    }

    /// `BRn` bit of BSRR.
    pub const fn reset_mask(self) -> u32 {
        1 << (self.0 as u32 + 16)
    }
}

/// Output level of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    pub const fn toggled(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }

    /// The single BSRR bit that drives `pin` to this level.
    pub const fn bsrr_mask(self, pin: Pin) -> u32 {
        match self {
            Level::Low => pin.reset_mask(),
            Level::High => pin.set_mask(),
        }
    }

    /// How long the blinker holds this level, in delay ticks.
    pub const fn hold_ticks(self) -> u32 {
        match self {
            Level::Low => LOW_TICKS,
            Level::High => HIGH_TICKS,
        }
    }
}

/// Ungate the clock of `port`. Other peripherals' enable bits are kept.
pub fn enable_port_clock<R: Register>(apb2enr: &R, port: Port) {
    apb2enr.modify(|v| v | port.clock_enable_mask());
}

/// Make `pin` a push-pull output at the 2 MHz slew setting.
///
/// Only the pin's own nibble of CRL/CRH is rewritten.
pub fn configure_push_pull_output<R: Register>(regs: &Registers<R>, pin: Pin) {
    regs.config_register(pin).modify(|v| {
        (v & !pin.config_mask()) | (OUTPUT_PUSH_PULL_2MHZ << pin.config_shift())
    });
}

/// Drive `pin` to `level` with one write to BSRR.
///
/// BSRR ignores zero bits, so the write leaves every other pin alone.
#[inline]
pub fn drive<R: Register>(bsrr: &R, pin: Pin, level: Level) {
    bsrr.write(level.bsrr_mask(pin));
}
