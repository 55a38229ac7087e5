//! Busy-wait timing.
//!
//! A tick is an uncalibrated unit: how long one lasts depends on the core
//! clock and on the optimization level the firmware was built with.

use vcell::VolatileCell;

/// Inner iterations per delay tick.
pub const SPINS_PER_TICK: u32 = 2000;

/// Something that can block for a number of delay ticks.
pub trait Delay {
    fn wait(&mut self, ticks: u32);
}

impl<D: Delay + ?Sized> Delay for &mut D {
    fn wait(&mut self, ticks: u32) {
        (**self).wait(ticks);
    }
}

/// Burns CPU cycles in a counting loop. Never sleeps or yields.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpinDelay;

impl SpinDelay {
    /// Run the loop for `ticks` ticks and return how many inner iterations
    /// were executed.
    ///
    /// The inner counter is a volatile cell: every increment is a real load
    /// and store, so the optimizer can neither fold the loop nor drop it.
    #[inline(never)]
    pub fn spin(ticks: u32) -> u64 {
        let mut spins = 0u64;
        for _ in 0..ticks {
            let counter = VolatileCell::new(0u32);
            while counter.get() < SPINS_PER_TICK {
                counter.set(counter.get() + 1);
            }
            spins += u64::from(counter.get());
        }
        spins
    }
}

impl Delay for SpinDelay {
    fn wait(&mut self, ticks: u32) {
        Self::spin(ticks);
    }
}
