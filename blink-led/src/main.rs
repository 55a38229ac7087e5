#![no_std]
#![no_main]

mod regs;

use blink_core::{Blinker, Pin, SpinDelay};
use cortex_m_rt::entry;
use defmt_rtt as _;
use panic_halt as _;
use stm32f1xx_hal::pac;

// On-board LED of the board this was written for hangs off PB14.
const LED_PIN: u8 = 14;

#[entry]
fn main() -> ! {
    let dp = pac::Peripherals::take().unwrap();
    let regs = regs::gpio_registers(&dp.RCC, &dp.GPIOB);
    let port = regs.port();

    let pin = Pin::new(LED_PIN).unwrap();
    let blinker = Blinker::new(regs, pin, SpinDelay);
    defmt::info!("blinking P{}{}", port, pin.index());

    blinker.run()
}
