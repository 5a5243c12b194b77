use neko::{Neko, NekoConfig, Ssd1963};
use stm32f1xx_hal::pac::Peripherals;
use stm32f1xx_hal::prelude::*;

use crate::neko_fsmc_board::{NekoFsmcBoard, NekoFsmcPins, DISPLAY_TIMINGS};
use crate::neko_sys_clock::NekoSysClock;

pub struct NekoController {
    neko: Neko<Ssd1963<NekoFsmcBoard>, NekoSysClock>,
}

impl NekoController {
    pub fn new(mut dp: Peripherals) -> Self {
        let mut sys_clock = NekoSysClock::new(dp.TIM1, dp.TIM2, dp.TIM3, &mut dp.RCC);

        let mut flash = dp.FLASH.constrain();
        let mut rcc = dp.RCC.constrain();

        let _clocks = rcc
            .cfgr
            .use_hse(8.mhz())
            .sysclk(72.mhz())
            .hclk(72.mhz())
            .pclk1(36.mhz())
            .pclk2(72.mhz())
            .freeze(&mut flash.acr);

        let mut gpioa = dp.GPIOA.split(&mut rcc.apb2);
        let mut gpiod = dp.GPIOD.split(&mut rcc.apb2);
        let mut gpioe = dp.GPIOE.split(&mut rcc.apb2);

        let reset = gpioa.pa1.into_push_pull_output(&mut gpioa.crl);

        let pins = NekoFsmcPins {
            d2: gpiod.pd0.into_alternate_push_pull(&mut gpiod.crl),
            d3: gpiod.pd1.into_alternate_push_pull(&mut gpiod.crl),
            noe: gpiod.pd4.into_alternate_push_pull(&mut gpiod.crl),
            nwe: gpiod.pd5.into_alternate_push_pull(&mut gpiod.crl),
            ne1: gpiod.pd7.into_alternate_push_pull(&mut gpiod.crl),
            a16: gpiod.pd11.into_alternate_push_pull(&mut gpiod.crh),
            d0: gpiod.pd14.into_alternate_push_pull(&mut gpiod.crh),
            d1: gpiod.pd15.into_alternate_push_pull(&mut gpiod.crh),
            d4: gpioe.pe7.into_alternate_push_pull(&mut gpioe.crl),
            d5: gpioe.pe8.into_alternate_push_pull(&mut gpioe.crh),
            d6: gpioe.pe9.into_alternate_push_pull(&mut gpioe.crh),
            d7: gpioe.pe10.into_alternate_push_pull(&mut gpioe.crh),
        };

        let board = NekoFsmcBoard::new(dp.FSMC, pins, reset);
        let mut display = Ssd1963::new(board, DISPLAY_TIMINGS);
        display.init(&mut sys_clock);

        let config = NekoConfig::for_panel(DISPLAY_TIMINGS.width as u32, DISPLAY_TIMINGS.height as u32);
        let mut neko = Neko::new(display, sys_clock, config);
        neko.start().unwrap_or_else(|never| match never {});

        NekoController { neko }
    }

    pub fn tick(&mut self) {
        self.neko.tick().unwrap_or_else(|never| match never {});
    }
}
