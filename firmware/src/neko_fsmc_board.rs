use neko::{calc_fpr, LcdParameters, MemoryMappedBus, NekoBoard};
use stm32f1xx_hal::gpio::gpioa::PA1;
use stm32f1xx_hal::gpio::gpiod::{PD0, PD1, PD11, PD14, PD15, PD4, PD5, PD7};
use stm32f1xx_hal::gpio::gpioe::{PE10, PE7, PE8, PE9};
use stm32f1xx_hal::gpio::{Alternate, Output, PushPull};
use stm32f1xx_hal::pac::{FSMC, RCC};

// FSMC bank 1 (NE1), A16 (PD11) is DC. The bus is 16 bits wide so A16 is
// address bit 17.
const GDISP_REG: usize = 0x6000_0000; // DC = 0
const GDISP_RAM: usize = 0x6002_0000; // DC = 1

// Bank 1 read/write timings, in HCLK cycles
const FSMC_BTR_ADDSET: u32 = 0b1010 << 0;
const FSMC_BTR_DATAST: u32 = 0b1010 << 8;
const FSMC_BTR_BUSTURN: u32 = 0b1010 << 16;
// Bank 1 control: memory bank enable, 16-bit data bus, writes enabled
const FSMC_BCR_MBKEN: u32 = 1 << 0;
const FSMC_BCR_MWID_16: u32 = 0b01 << 4;
const FSMC_BCR_WREN: u32 = 1 << 12;

/// Timings of the 320x240 glass on this board.
pub const DISPLAY_TIMINGS: LcdParameters = LcdParameters {
    width: 320,
    height: 240,
    hsync_back_porch: 0,
    hsync_front_porch: 0,
    hsync_pulse: 68,
    hsync_period: 440,
    vsync_back_porch: 0,
    vsync_front_porch: 0,
    vsync_pulse: 18,
    vsync_period: 265,
    fpr: calc_fpr(320, 240, 0, 0, 18, 0, 0, 68, 60),
};

/// FSMC data, address and chip select lines wired to the panel. Held so
/// nothing else can reconfigure them.
pub struct NekoFsmcPins {
    pub d2: PD0<Alternate<PushPull>>,
    pub d3: PD1<Alternate<PushPull>>,
    pub noe: PD4<Alternate<PushPull>>,
    pub nwe: PD5<Alternate<PushPull>>,
    pub ne1: PD7<Alternate<PushPull>>,
    pub a16: PD11<Alternate<PushPull>>,
    pub d0: PD14<Alternate<PushPull>>,
    pub d1: PD15<Alternate<PushPull>>,
    pub d4: PE7<Alternate<PushPull>>,
    pub d5: PE8<Alternate<PushPull>>,
    pub d6: PE9<Alternate<PushPull>>,
    pub d7: PE10<Alternate<PushPull>>,
}

pub struct NekoFsmcBoard {
    fsmc: FSMC,
    _pins: NekoFsmcPins,
    bus: MemoryMappedBus<PA1<Output<PushPull>>>,
}

impl NekoFsmcBoard {
    pub fn new(fsmc: FSMC, pins: NekoFsmcPins, reset: PA1<Output<PushPull>>) -> Self {
        // Both addresses are in FSMC bank 1, which this board owns
        let bus = unsafe { MemoryMappedBus::new(GDISP_REG as *mut u8, GDISP_RAM as *mut u8, reset) };

        NekoFsmcBoard {
            fsmc,
            _pins: pins,
            bus,
        }
    }
}

impl NekoBoard for NekoFsmcBoard {
    fn init_board(&mut self) {
        unsafe {
            // The RCC was constrained by the HAL, only the FSMC enable bit is touched here
            let rcc = &*RCC::ptr();
            rcc.ahbenr.modify(|_r, w| w.fsmcen().set_bit());

            self.fsmc
                .btr1
                .write(|w| w.bits(FSMC_BTR_ADDSET | FSMC_BTR_DATAST | FSMC_BTR_BUSTURN));
            self.fsmc
                .bcr1
                .write(|w| w.bits(FSMC_BCR_MWID_16 | FSMC_BCR_WREN | FSMC_BCR_MBKEN));
        }
    }

    fn setpin_reset(&mut self, state: bool) {
        self.bus.setpin_reset(state);
    }

    fn write_index(&mut self, index: u8) {
        self.bus.write_index(index);
    }

    fn write_data(&mut self, data: u8) {
        self.bus.write_data(data);
    }

    fn read_data(&mut self) -> u8 {
        self.bus.read_data()
    }
}
