//! Register access.

use crate::gpio::{Pin, Port};

/// A 32-bit hardware register.
///
/// Accessors take `&self`: a register is a location whose contents change
/// underneath any Rust borrow, not a value owned by the program.
pub trait Register {
    fn read(&self) -> u32;

    fn write(&self, value: u32);

    /// Read-modify-write.
    #[inline(always)]
    fn modify<F: FnOnce(u32) -> u32>(&self, f: F) {
        let value = self.read();
        self.write(f(value));
    }
}

/// The registers the blinker touches: the APB2 clock gate and one GPIO
/// port's configuration and set/reset registers.
///
/// The set remembers which port its GPIO registers belong to, so the clock
/// gate that gets enabled is always the one of that bank.
#[derive(Debug)]
pub struct Registers<R> {
    port: Port,
    pub apb2enr: R,
    pub crl: R,
    pub crh: R,
    pub bsrr: R,
}

impl<R> Registers<R> {
    /// `crl`, `crh` and `bsrr` must be the registers of `port`.
    pub const fn new(port: Port, apb2enr: R, crl: R, crh: R, bsrr: R) -> Self {
        Self {
            port,
            apb2enr,
            crl,
            crh,
            bsrr,
        }
    }

    pub const fn port(&self) -> Port {
        self.port
    }
}

impl<R: Register> Registers<R> {
    /// CRL holds pins 0..=7, CRH pins 8..=15.
    pub fn config_register(&self, pin: Pin) -> &R {
        if pin.index() < 8 { &self.crl } else { &self.crh }
    }
}
