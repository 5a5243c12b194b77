use core::convert::Infallible;
use core::ptr;

use embedded_hal::digital::v2::OutputPin;

/// Board interface the SSD1963 driver talks through.
///
/// Every call is an unconditional hardware access, there is nothing to
/// report back.
pub trait NekoBoard {
    /// Bring up whatever the bus needs (clocks, pins, bus timings).
    fn init_board(&mut self) {}

    fn post_init_board(&mut self) {}

    /// `true` holds the panel in reset, `false` is normal operation.
    fn setpin_reset(&mut self, state: bool);

    /// Take exclusive control of the bus
    fn acquire_bus(&mut self) {}

    /// Release exclusive control of the bus
    fn release_bus(&mut self) {}

    /// Send a command byte (DC low).
    fn write_index(&mut self, index: u8);

    /// Send a parameter or pixel byte (DC high).
    fn write_data(&mut self, data: u8);

    fn read_data(&mut self) -> u8;

    /// Big endian 16-bit parameter
    fn write_data16(&mut self, data: u16) {
        let [high, low] = data.to_be_bytes();
        self.write_data(high);
        self.write_data(low);
    }
}

/// Parallel bus where the data/command line is an address bit, so the index
/// and data registers are two memory locations.
pub struct MemoryMappedBus<RST>
where
    RST: OutputPin<Error = Infallible>,
{
    reg: *mut u8,
    ram: *mut u8,
    reset: RST,
}

impl<RST> MemoryMappedBus<RST>
where
    RST: OutputPin<Error = Infallible>,
{
    /// # Safety
    /// `reg` and `ram` must stay valid for volatile byte access for as long
    /// as the bus exists and nothing else may access them.
    pub unsafe fn new(reg: *mut u8, ram: *mut u8, reset: RST) -> Self {
        MemoryMappedBus { reg, ram, reset }
    }
}

impl<RST> NekoBoard for MemoryMappedBus<RST>
where
    RST: OutputPin<Error = Infallible>,
{
    fn setpin_reset(&mut self, state: bool) {
        // Reset is active low
        let result = if state {
            self.reset.set_low()
        } else {
            self.reset.set_high()
        };

        result.unwrap_or_else(|never| match never {});
    }

    fn write_index(&mut self, index: u8) {
        unsafe { ptr::write_volatile(self.reg, index) }
    }

    fn write_data(&mut self, data: u8) {
        unsafe { ptr::write_volatile(self.ram, data) }
    }

    fn read_data(&mut self) -> u8 {
        unsafe { ptr::read_volatile(self.ram) }
    }
}
