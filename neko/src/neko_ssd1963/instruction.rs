/// SSD1963 commands used by this driver.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    SOFT_RESET = 0x01,
    SET_DISPLAY_OFF = 0x28,
    SET_DISPLAY_ON = 0x29,
    SET_COLUMN_ADDRESS = 0x2A,
    SET_PAGE_ADDRESS = 0x2B,
    WRITE_MEMORY_START = 0x2C,
    READ_MEMORY_START = 0x2E,
    SET_ADDRESS_MODE = 0x36,
    SET_LCD_MODE = 0xB0,
    SET_HORI_PERIOD = 0xB4,
    SET_VERT_PERIOD = 0xB6,
    SET_PLL = 0xE0,
    SET_PLL_MN = 0xE2,
    SET_LSHIFT_FREQ = 0xE6,
    SET_PIXEL_DATA_INTERFACE = 0xF0,
}
