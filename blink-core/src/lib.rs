//! Register-level LED blinker for STM32F1 parts.
//!
//! All hardware access goes through the [`Register`] trait and all timing
//! through the [`Delay`] trait, so the blink logic runs the same against
//! memory-mapped registers on the chip and simulated ones on the host.
#![cfg_attr(not(test), no_std)]

pub mod blink;
pub mod delay;
pub mod gpio;
pub mod reg;

#[cfg(test)]
mod sim;

pub use blink::Blinker;
pub use delay::{Delay, SpinDelay};
pub use gpio::{InvalidPin, Level, Pin, Port};
pub use reg::{Register, Registers};
