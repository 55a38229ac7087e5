//! `blink_core::Register` on top of the PAC's typed registers.

use core::ops::Deref;

use blink_core::{Port, Register, Registers};
use stm32f1xx_hal::pac::{self, gpioa, rcc};

/// One of the registers the blinker drives, borrowed from the PAC.
pub enum PacRegister<'a> {
    Apb2enr(&'a rcc::APB2ENR),
    Crl(&'a gpioa::CRL),
    Crh(&'a gpioa::CRH),
    Bsrr(&'a gpioa::BSRR),
}

impl Register for PacRegister<'_> {
    fn read(&self) -> u32 {
        match self {
            PacRegister::Apb2enr(r) => r.read().bits(),
            PacRegister::Crl(r) => r.read().bits(),
            PacRegister::Crh(r) => r.read().bits(),
            // Write-only, reads as zero.
            PacRegister::Bsrr(_) => 0,
        }
    }

    fn write(&self, value: u32) {
        match self {
            PacRegister::Apb2enr(r) => r.write(|w| unsafe { w.bits(value) }),
            PacRegister::Crl(r) => r.write(|w| unsafe { w.bits(value) }),
            PacRegister::Crh(r) => r.write(|w| unsafe { w.bits(value) }),
            PacRegister::Bsrr(r) => r.write(|w| unsafe { w.bits(value) }),
        }
    }

    fn modify<F: FnOnce(u32) -> u32>(&self, f: F) {
        match self {
            PacRegister::Apb2enr(reg) => reg.modify(|r, w| unsafe { w.bits(f(r.bits())) }),
            PacRegister::Crl(reg) => reg.modify(|r, w| unsafe { w.bits(f(r.bits())) }),
            PacRegister::Crh(reg) => reg.modify(|r, w| unsafe { w.bits(f(r.bits())) }),
            PacRegister::Bsrr(reg) => reg.write(|w| unsafe { w.bits(f(0)) }),
        }
    }
}

/// A GPIO peripheral of the PAC and the port it is.
pub trait GpioBank: Deref<Target = gpioa::RegisterBlock> {
    const PORT: Port;
}

macro_rules! gpio_bank {
    ($($periph:ident => $port:ident,)+) => {
        $(
            impl GpioBank for pac::$periph {
                const PORT: Port = Port::$port;
            }
        )+
    };
}

gpio_bank! {
    GPIOA => A,
    GPIOB => B,
    GPIOC => C,
    GPIOD => D,
    GPIOE => E,
}

/// The blinker's register set for `gpio`, clocked through `rcc`.
///
/// The port comes from the peripheral's type, so the clock gate that gets
/// enabled is always the one of `gpio`.
pub fn gpio_registers<'a, G: GpioBank>(
    rcc: &'a pac::RCC,
    gpio: &'a G,
) -> Registers<PacRegister<'a>> {
    Registers::new(
        G::PORT,
        PacRegister::Apb2enr(&rcc.apb2enr),
        PacRegister::Crl(&gpio.crl),
        PacRegister::Crh(&gpio.crh),
        PacRegister::Bsrr(&gpio.bsrr),
    )
}
