#![no_std]
#![no_main]

use panic_reset as _;

use cortex_m_rt::entry;
use stm32f1xx_hal::pac::Peripherals;

use crate::neko_controller::NekoController;

mod neko_controller;
mod neko_fsmc_board;
#[cfg(feature = "semihosting")]
mod neko_logger;
mod neko_sys_clock;

#[entry]
fn main() -> ! {
    #[cfg(feature = "semihosting")]
    neko_logger::init();

    let dp = Peripherals::take().unwrap();
    let mut controller = NekoController::new(dp);

    loop {
        controller.tick();
    }
}
