//! Host stand-ins for hardware registers and the delay primitive.

use std::cell::{Cell, RefCell};

use crate::delay::Delay;
use crate::gpio::Port;
use crate::reg::{Register, Registers};

/// A register backed by a plain cell, remembering every value written.
#[derive(Debug, Default)]
pub struct SimRegister {
    value: Cell<u32>,
    writes: RefCell<Vec<u32>>,
}

impl SimRegister {
    pub fn with_value(value: u32) -> Self {
        Self {
            value: Cell::new(value),
            writes: RefCell::default(),
        }
    }

    /// A zeroed register set for port B.
    pub fn file() -> Registers<SimRegister> {
        Self::file_for(Port::B)
    }

    pub fn file_for(port: Port) -> Registers<SimRegister> {
        Registers::new(
            port,
            SimRegister::default(),
            SimRegister::default(),
            SimRegister::default(),
            SimRegister::default(),
        )
    }

    pub fn writes(&self) -> Vec<u32> {
        self.writes.borrow().clone()
    }
}

impl Register for SimRegister {
    fn read(&self) -> u32 {
        self.value.get()
    }

    fn write(&self, value: u32) {
        self.value.set(value);
        self.writes.borrow_mut().push(value);
    }
}

/// A clock that advances only when waited on.
#[derive(Debug, Default)]
pub struct SimClock {
    pub now: u64,
    pub waits: Vec<u32>,
}

impl Delay for SimClock {
    fn wait(&mut self, ticks: u32) {
        self.now += u64::from(ticks);
        self.waits.push(ticks);
    }
}
