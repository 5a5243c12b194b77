use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::prelude::*;

use crate::neko_walk::{NekoHeading, NekoWall};

mod neko_bitmaps;
use neko_bitmaps::*;

/// Sprites are square
pub const SPRITE_SIZE: usize = 32;
const SPRITE_ROW_BYTES: usize = SPRITE_SIZE / 8;
pub const SPRITE_BYTES: usize = SPRITE_ROW_BYTES * SPRITE_SIZE;

/// 1bpp bitmap, rows top to bottom, least significant bit is the leftmost
/// pixel of each byte.
pub type SpriteBits = [u8; SPRITE_BYTES];

/// Packs 32 rows of `#` (set) and `.` (clear) into a bitmap.
pub(crate) const fn sprite_bits(rows: [&str; SPRITE_SIZE]) -> SpriteBits {
    let mut bits = [0u8; SPRITE_BYTES];
    let mut y = 0;

    while y < SPRITE_SIZE {
        let row = rows[y].as_bytes();
        assert!(row.len() == SPRITE_SIZE, "sprite rows must be 32 pixels wide");

        let mut x = 0;
        while x < SPRITE_SIZE {
            if row[x] == b'#' {
                bits[y * SPRITE_ROW_BYTES + x / 8] |= 1 << (x % 8);
            }
            x += 1;
        }
        y += 1;
    }

    bits
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NekoSprite {
    Awake,
    Still,
    Yawn,
    Lick,
    Itch1,
    Itch2,
    Sleep1,
    Sleep2,
    Up1,
    Up2,
    Down1,
    Down2,
    Left1,
    Left2,
    Right1,
    Right2,
    UpLeft1,
    UpLeft2,
    UpRight1,
    UpRight2,
    DownLeft1,
    DownLeft2,
    DownRight1,
    DownRight2,
    ClawLeft1,
    ClawLeft2,
    ClawRight1,
    ClawRight2,
    ClawUp1,
    ClawUp2,
    ClawDown1,
    ClawDown2,
}

impl NekoSprite {
    pub fn bits(self) -> &'static SpriteBits {
        match self {
            NekoSprite::Awake => &AWAKE,
            NekoSprite::Still => &STILL,
            NekoSprite::Yawn => &YAWN,
            NekoSprite::Lick => &LICK,
            NekoSprite::Itch1 => &ITCH1,
            NekoSprite::Itch2 => &ITCH2,
            NekoSprite::Sleep1 => &SLEEP1,
            NekoSprite::Sleep2 => &SLEEP2,
            NekoSprite::Up1 => &UP1,
            NekoSprite::Up2 => &UP2,
            NekoSprite::Down1 => &DOWN1,
            NekoSprite::Down2 => &DOWN2,
            NekoSprite::Left1 => &LEFT1,
            NekoSprite::Left2 => &LEFT2,
            NekoSprite::Right1 => &RIGHT1,
            NekoSprite::Right2 => &RIGHT2,
            NekoSprite::UpLeft1 => &UP_LEFT1,
            NekoSprite::UpLeft2 => &UP_LEFT2,
            NekoSprite::UpRight1 => &UP_RIGHT1,
            NekoSprite::UpRight2 => &UP_RIGHT2,
            NekoSprite::DownLeft1 => &DOWN_LEFT1,
            NekoSprite::DownLeft2 => &DOWN_LEFT2,
            NekoSprite::DownRight1 => &DOWN_RIGHT1,
            NekoSprite::DownRight2 => &DOWN_RIGHT2,
            NekoSprite::ClawLeft1 => &CLAW_LEFT1,
            NekoSprite::ClawLeft2 => &CLAW_LEFT2,
            NekoSprite::ClawRight1 => &CLAW_RIGHT1,
            NekoSprite::ClawRight2 => &CLAW_RIGHT2,
            NekoSprite::ClawUp1 => &CLAW_UP1,
            NekoSprite::ClawUp2 => &CLAW_UP2,
            NekoSprite::ClawDown1 => &CLAW_DOWN1,
            NekoSprite::ClawDown2 => &CLAW_DOWN2,
        }
    }

    /// The two alternating frames for running in `heading`.
    pub fn run(heading: NekoHeading) -> [NekoSprite; 2] {
        match heading {
            NekoHeading::Up => [NekoSprite::Up1, NekoSprite::Up2],
            NekoHeading::Down => [NekoSprite::Down1, NekoSprite::Down2],
            NekoHeading::Left => [NekoSprite::Left1, NekoSprite::Left2],
            NekoHeading::Right => [NekoSprite::Right1, NekoSprite::Right2],
            NekoHeading::UpLeft => [NekoSprite::UpLeft1, NekoSprite::UpLeft2],
            NekoHeading::UpRight => [NekoSprite::UpRight1, NekoSprite::UpRight2],
            NekoHeading::DownLeft => [NekoSprite::DownLeft1, NekoSprite::DownLeft2],
            NekoHeading::DownRight => [NekoSprite::DownRight1, NekoSprite::DownRight2],
        }
    }

    /// The two alternating frames for sharpening claws on `wall`.
    pub fn claw(wall: NekoWall) -> [NekoSprite; 2] {
        match wall {
            NekoWall::Left => [NekoSprite::ClawLeft1, NekoSprite::ClawLeft2],
            NekoWall::Right => [NekoSprite::ClawRight1, NekoSprite::ClawRight2],
            NekoWall::Top => [NekoSprite::ClawUp1, NekoSprite::ClawUp2],
            NekoWall::Bottom => [NekoSprite::ClawDown1, NekoSprite::ClawDown2],
        }
    }

    pub fn is_set(self, x: usize, y: usize) -> bool {
        self.bits()[y * SPRITE_ROW_BYTES + x / 8] & (1 << (x % 8)) != 0
    }
}

/// Draws the set pixels of `sprite` in `color`. Clear pixels are left alone,
/// so drawing the same sprite again in the background color erases it.
pub fn draw_sprite<D>(
    target: &mut D,
    top_left: Point,
    sprite: NekoSprite,
    color: D::Color,
) -> Result<(), D::Error>
where
    D: DrawTarget,
{
    let pixels = (0..SPRITE_SIZE)
        .flat_map(|y| (0..SPRITE_SIZE).map(move |x| (x, y)))
        .filter(move |(x, y)| sprite.is_set(*x, *y))
        .map(move |(x, y)| Pixel(top_left + Point::new(x as i32, y as i32), color));

    target.draw_iter(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neko_test_support::{RecordingCanvas, ALL_SPRITES};
    use embedded_graphics::pixelcolor::Rgb565;

    #[test]
    fn test_sprite_bits_packing() {
        let mut rows = ["................................"; SPRITE_SIZE];
        rows[0] = "#.......#......................#";
        rows[31] = ".#..............................";
        let bits = sprite_bits(rows);

        assert_eq!(bits[0], 0x01);
        assert_eq!(bits[1], 0x01);
        assert_eq!(bits[3], 0x80);
        assert_eq!(bits[31 * 4], 0x02);
        assert_eq!(bits.iter().map(|b| b.count_ones()).sum::<u32>(), 4);
    }

    #[test]
    fn test_frames_are_not_blank() {
        for sprite in ALL_SPRITES.iter() {
            assert!(sprite.bits().iter().any(|b| *b != 0), "{:?} is blank", sprite);
        }
    }

    #[test]
    fn test_animated_pairs_differ() {
        for pair in ALL_SPRITES[4..].chunks(2) {
            assert_ne!(pair[0].bits(), pair[1].bits(), "{:?} has no motion", pair[0]);
        }
    }

    #[test]
    fn test_left_and_right_are_mirrored() {
        for y in 0..SPRITE_SIZE {
            for x in 0..SPRITE_SIZE {
                assert_eq!(
                    NekoSprite::Left1.is_set(x, y),
                    NekoSprite::Right1.is_set(SPRITE_SIZE - 1 - x, y)
                );
            }
        }
    }

    #[test]
    fn test_draw_sprite_only_touches_set_pixels() {
        let background = Rgb565::new(24, 48, 24);
        let mut canvas = RecordingCanvas::new(64, 64, background);

        draw_sprite(&mut canvas, Point::new(10, 20), NekoSprite::Awake, Rgb565::BLACK).unwrap();

        let set = NekoSprite::Awake
            .bits()
            .iter()
            .map(|b| b.count_ones() as usize)
            .sum::<usize>();
        assert_eq!(canvas.writes, set);
        assert_eq!(canvas.count(Rgb565::BLACK), set);

        for y in 0..SPRITE_SIZE {
            for x in 0..SPRITE_SIZE {
                let expected = if NekoSprite::Awake.is_set(x, y) {
                    Rgb565::BLACK
                } else {
                    background
                };
                assert_eq!(canvas.pixel(10 + x as i32, 20 + y as i32), expected);
            }
        }
    }

    #[test]
    fn test_redraw_in_background_erases() {
        let background = Rgb565::new(24, 48, 24);
        let mut canvas = RecordingCanvas::new(64, 64, background);

        draw_sprite(&mut canvas, Point::new(0, 0), NekoSprite::Sleep2, Rgb565::BLACK).unwrap();
        draw_sprite(&mut canvas, Point::new(0, 0), NekoSprite::Sleep2, background).unwrap();

        assert_eq!(canvas.count(background), 64 * 64);
    }
}
