#![cfg_attr(not(test), no_std)]

//! Neko chasing around an SSD1963 TFT panel.

pub mod neko_animation;
pub mod neko_board;
pub mod neko_lfsr;
pub mod neko_panel;
pub mod neko_sprites;
pub mod neko_ssd1963;
pub mod neko_walk;

#[cfg(test)]
mod neko_test_support;

pub use neko_animation::{Neko, NekoConfig, NekoCycle};
pub use neko_board::{MemoryMappedBus, NekoBoard};
pub use neko_lfsr::NekoLfsr;
pub use neko_panel::{calc_fpr, LcdParameters};
pub use neko_sprites::{draw_sprite, NekoSprite};
pub use neko_ssd1963::Ssd1963;
pub use neko_walk::{NekoHeading, NekoWalk, NekoWall};
