//! Just enough of the SSD1963 to bring a panel up and push pixels over an
//! 8-bit bus.

pub mod instruction;
use self::instruction::Instruction;

use core::convert::Infallible;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_hal::blocking::delay::DelayMs;
use log::info;

use crate::neko_board::NekoBoard;
use crate::neko_panel::LcdParameters;

// PLL = 10 MHz crystal * (M + 1) / (N + 1) = 120 MHz
const PLL_M: u8 = 0x23;
const PLL_N: u8 = 0x02;
const PLL_VALIDATE: u8 = 0x54;
const PLL_ENABLE: u8 = 0x01;
const PLL_LOCK: u8 = 0x03;
// 24-bit TFT panel with dithering, data latched on the falling edge
const LCD_MODE_FLAGS: u8 = 0x18;
const LCD_MODE_TFT: u8 = 0x00;
const LCD_RGB_SEQUENCE: u8 = 0x00;
const ADDRESS_MODE_DEFAULT: u8 = 0x00;
// One byte per transfer, three transfers per pixel
const PIXEL_DATA_INTERFACE_8BIT: u8 = 0x00;

const RESET_PULSE_MS: u32 = 20;
const SOFT_RESET_MS: u32 = 5;
const PLL_SETTLE_MS: u32 = 1;

/// SSD1963 driver over a [`NekoBoard`].
pub struct Ssd1963<B>
where
    B: NekoBoard,
{
    board: B,
    timings: LcdParameters,
}

impl<B> Ssd1963<B>
where
    B: NekoBoard,
{
    pub fn new(board: B, timings: LcdParameters) -> Self {
        Ssd1963 { board, timings }
    }

    pub fn timings(&self) -> &LcdParameters {
        &self.timings
    }

    pub fn release(self) -> B {
        self.board
    }

    /// Runs the board bring-up and the controller initialisation sequence,
    /// leaving the display on.
    pub fn init<D>(&mut self, delay: &mut D)
    where
        D: DelayMs<u32>,
    {
        let t = self.timings;

        self.board.init_board();

        self.board.setpin_reset(true);
        delay.delay_ms(RESET_PULSE_MS);
        self.board.setpin_reset(false);
        delay.delay_ms(RESET_PULSE_MS);

        self.board.acquire_bus();

        self.write_command(Instruction::SOFT_RESET, &[]);
        delay.delay_ms(SOFT_RESET_MS);

        self.write_command(Instruction::SET_PLL_MN, &[PLL_M, PLL_N, PLL_VALIDATE]);
        self.write_command(Instruction::SET_PLL, &[PLL_ENABLE]);
        delay.delay_ms(PLL_SETTLE_MS);
        self.write_command(Instruction::SET_PLL, &[PLL_LOCK]);
        delay.delay_ms(PLL_SETTLE_MS);

        // The PLL is only used after a soft reset
        self.write_command(Instruction::SOFT_RESET, &[]);
        delay.delay_ms(SOFT_RESET_MS);

        let fpr = t.fpr.to_be_bytes();
        self.write_command(Instruction::SET_LSHIFT_FREQ, &fpr[1..]);

        self.write_command(Instruction::SET_LCD_MODE, &[LCD_MODE_FLAGS, LCD_MODE_TFT]);
        self.board.write_data16(t.width - 1);
        self.board.write_data16(t.height - 1);
        self.board.write_data(LCD_RGB_SEQUENCE);

        self.write_command(Instruction::SET_HORI_PERIOD, &[]);
        self.board.write_data16(t.hsync_period);
        self.board.write_data16(t.hsync_pulse + t.hsync_back_porch);
        self.write_params(&[t.hsync_pulse.saturating_sub(1) as u8, 0x00, 0x00, 0x00]);

        self.write_command(Instruction::SET_VERT_PERIOD, &[]);
        self.board.write_data16(t.vsync_period);
        self.board.write_data16(t.vsync_pulse + t.vsync_back_porch);
        self.write_params(&[t.vsync_pulse.saturating_sub(1) as u8, 0x00, 0x00]);

        self.write_command(Instruction::SET_ADDRESS_MODE, &[ADDRESS_MODE_DEFAULT]);
        self.write_command(Instruction::SET_PIXEL_DATA_INTERFACE, &[PIXEL_DATA_INTERFACE_8BIT]);
        self.write_command(Instruction::SET_DISPLAY_ON, &[]);

        self.board.release_bus();
        self.board.post_init_board();

        info!("ssd1963 up, {}x{} fpr {}", t.width, t.height, t.fpr);
    }

    pub fn set_display(&mut self, on: bool) {
        self.board.acquire_bus();
        if on {
            self.write_command(Instruction::SET_DISPLAY_ON, &[]);
        } else {
            self.write_command(Instruction::SET_DISPLAY_OFF, &[]);
        }
        self.board.release_bus();
    }

    /// Sets a pixel color at the given coords.
    pub fn set_pixel(&mut self, x: u16, y: u16, color: Rgb565) {
        self.board.acquire_bus();
        self.set_address_window(x, y, x, y);
        self.write_command(Instruction::WRITE_MEMORY_START, &[]);
        self.write_color(color);
        self.board.release_bus();
    }

    /// Reads back the pixel at the given coords.
    pub fn get_pixel(&mut self, x: u16, y: u16) -> Rgb565 {
        self.board.acquire_bus();
        self.set_address_window(x, y, x, y);
        self.write_command(Instruction::READ_MEMORY_START, &[]);
        let r = self.board.read_data();
        let g = self.board.read_data();
        let b = self.board.read_data();
        self.board.release_bus();

        Rgb565::from(Rgb888::new(r, g, b))
    }

    /// Streams colors into the window `sx..=ex`, `sy..=ey`, row by row.
    pub fn set_pixels<P>(&mut self, sx: u16, sy: u16, ex: u16, ey: u16, colors: P)
    where
        P: IntoIterator<Item = Rgb565>,
    {
        self.board.acquire_bus();
        self.set_address_window(sx, sy, ex, ey);
        self.write_command(Instruction::WRITE_MEMORY_START, &[]);
        for color in colors {
            self.write_color(color);
        }
        self.board.release_bus();
    }

    fn set_address_window(&mut self, sx: u16, sy: u16, ex: u16, ey: u16) {
        self.write_command(Instruction::SET_COLUMN_ADDRESS, &[]);
        self.board.write_data16(sx);
        self.board.write_data16(ex);
        self.write_command(Instruction::SET_PAGE_ADDRESS, &[]);
        self.board.write_data16(sy);
        self.board.write_data16(ey);
    }

    fn write_command(&mut self, instruction: Instruction, params: &[u8]) {
        self.board.write_index(instruction as u8);
        self.write_params(params);
    }

    fn write_params(&mut self, params: &[u8]) {
        for param in params {
            self.board.write_data(*param);
        }
    }

    fn write_color(&mut self, color: Rgb565) {
        let color = Rgb888::from(color);
        self.board.write_data(color.r());
        self.board.write_data(color.g());
        self.board.write_data(color.b());
    }

    fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && point.x < self.timings.width as i32
            && point.y < self.timings.height as i32
    }
}

impl<B> DrawTarget for Ssd1963<B>
where
    B: NekoBoard,
{
    type Error = Infallible;
    type Color = Rgb565;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels.into_iter() {
            // Only draw pixels that would be on screen
            if self.contains(coord) {
                self.set_pixel(coord.x as u16, coord.y as u16, color);
            }
        }

        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        // Clamp area to drawable part of the display target
        let drawable_area = area.intersection(&self.bounding_box());

        if let Some(bottom_right) = drawable_area.bottom_right() {
            self.set_pixels(
                drawable_area.top_left.x as u16,
                drawable_area.top_left.y as u16,
                bottom_right.x as u16,
                bottom_right.y as u16,
                area.points()
                    .zip(colors)
                    .filter(|(pos, _color)| drawable_area.contains(*pos))
                    .map(|(_pos, color)| color),
            );
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let width = self.timings.width;
        let height = self.timings.height;

        self.set_pixels(
            0,
            0,
            width - 1,
            height - 1,
            core::iter::repeat(color).take(width as usize * height as usize),
        );

        Ok(())
    }
}

impl<B> OriginDimensions for Ssd1963<B>
where
    B: NekoBoard,
{
    fn size(&self) -> Size {
        Size::new(self.timings.width as u32, self.timings.height as u32)
    }
}
