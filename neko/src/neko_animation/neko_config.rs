use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::neko_lfsr::LFSR_DEFAULT_SEED;
use crate::neko_sprites::SPRITE_SIZE;

// #C0C0C0
pub const NEKO_BACKGROUND: Rgb565 = Rgb565::new(0xC0 >> 3, 0xC0 >> 2, 0xC0 >> 3);
pub const NEKO_FOREGROUND: Rgb565 = Rgb565::BLACK;
// How far past an edge a destination may be picked before clamping
pub const NEKO_OVERSHOOT: i32 = 30;

#[derive(Clone, Debug)]
pub struct NekoConfig {
    /// Drawable area, the sprite never leaves it
    pub arena: Size,
    pub start: Point,
    pub background: Rgb565,
    pub foreground: Rgb565,
    pub overshoot: i32,
    /// Destinations are picked from `-overshoot .. spread - overshoot` on
    /// each axis and then clamped into the arena.
    pub spread: Size,
    pub seed: u16,
}

impl NekoConfig {
    /// Panels smaller than a sprite pin neko to the top-left corner.
    pub fn for_panel(width: u32, height: u32) -> Self {
        let sprite = SPRITE_SIZE as u32;
        let overshoot = 2 * NEKO_OVERSHOOT as u32;

        NekoConfig {
            arena: Size::new(width, height),
            start: Point::new(
                (width / 2).saturating_sub(sprite / 2) as i32,
                (height / 2).saturating_sub(sprite / 2) as i32,
            ),
            background: NEKO_BACKGROUND,
            foreground: NEKO_FOREGROUND,
            overshoot: NEKO_OVERSHOOT,
            // The vertical range reaches one sprite further down
            spread: Size::new(width.saturating_sub(sprite) + overshoot, height + overshoot),
            seed: LFSR_DEFAULT_SEED,
        }
    }

    /// Largest top-left corner that keeps the whole sprite in the arena.
    pub fn max_position(&self) -> Point {
        Point::new(
            (self.arena.width as i32 - SPRITE_SIZE as i32).max(0),
            (self.arena.height as i32 - SPRITE_SIZE as i32).max(0),
        )
    }
}

impl Default for NekoConfig {
    fn default() -> Self {
        Self::for_panel(320, 240)
    }
}
