use std::cell::RefCell;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;

use crate::neko_board::NekoBoard;
use crate::neko_sprites::{NekoSprite, SPRITE_SIZE};

pub const ALL_SPRITES: [NekoSprite; 32] = [
    NekoSprite::Awake,
    NekoSprite::Still,
    NekoSprite::Yawn,
    NekoSprite::Lick,
    NekoSprite::Itch1,
    NekoSprite::Itch2,
    NekoSprite::Sleep1,
    NekoSprite::Sleep2,
    NekoSprite::Up1,
    NekoSprite::Up2,
    NekoSprite::Down1,
    NekoSprite::Down2,
    NekoSprite::Left1,
    NekoSprite::Left2,
    NekoSprite::Right1,
    NekoSprite::Right2,
    NekoSprite::UpLeft1,
    NekoSprite::UpLeft2,
    NekoSprite::UpRight1,
    NekoSprite::UpRight2,
    NekoSprite::DownLeft1,
    NekoSprite::DownLeft2,
    NekoSprite::DownRight1,
    NekoSprite::DownRight2,
    NekoSprite::ClawLeft1,
    NekoSprite::ClawLeft2,
    NekoSprite::ClawRight1,
    NekoSprite::ClawRight2,
    NekoSprite::ClawUp1,
    NekoSprite::ClawUp2,
    NekoSprite::ClawDown1,
    NekoSprite::ClawDown2,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusEvent {
    InitBoard,
    PostInitBoard,
    Reset(bool),
    Acquire,
    Release,
    Index(u8),
    Data(u8),
}

#[derive(Default)]
pub struct RecordingBoard {
    pub events: Vec<BusEvent>,
    pub reads: VecDeque<u8>,
}

impl NekoBoard for RecordingBoard {
    fn init_board(&mut self) {
        self.events.push(BusEvent::InitBoard);
    }

    fn post_init_board(&mut self) {
        self.events.push(BusEvent::PostInitBoard);
    }

    fn setpin_reset(&mut self, state: bool) {
        self.events.push(BusEvent::Reset(state));
    }

    fn acquire_bus(&mut self) {
        self.events.push(BusEvent::Acquire);
    }

    fn release_bus(&mut self) {
        self.events.push(BusEvent::Release);
    }

    fn write_index(&mut self, index: u8) {
        self.events.push(BusEvent::Index(index));
    }

    fn write_data(&mut self, data: u8) {
        self.events.push(BusEvent::Data(data));
    }

    fn read_data(&mut self) -> u8 {
        self.reads.pop_front().unwrap_or(0)
    }
}

/// Output pin that remembers every level it was driven to.
#[derive(Default)]
pub struct RecordingPin {
    pub levels: Rc<RefCell<Vec<bool>>>,
}

impl OutputPin for RecordingPin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.levels.borrow_mut().push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.levels.borrow_mut().push(true);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingDelay {
    pub calls: Vec<u32>,
}

impl RecordingDelay {
    pub fn total_ms(&self) -> u64 {
        self.calls.iter().map(|ms| *ms as u64).sum()
    }
}

impl DelayMs<u32> for RecordingDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.calls.push(ms);
    }
}

/// In-memory panel that counts how often something was drawn off screen.
/// With a stroke color set it also keeps the points of every draw call in
/// that color, so the sprites drawn can be told apart afterwards.
pub struct RecordingCanvas {
    pub size: Size,
    pub pixels: Vec<Rgb565>,
    pub offscreen: usize,
    pub writes: usize,
    pub stroke_color: Option<Rgb565>,
    pub strokes: Vec<Vec<Point>>,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32, fill: Rgb565) -> Self {
        RecordingCanvas {
            size: Size::new(width, height),
            pixels: vec![fill; (width * height) as usize],
            offscreen: 0,
            writes: 0,
            stroke_color: None,
            strokes: Vec::new(),
        }
    }

    pub fn record_strokes(mut self, color: Rgb565) -> Self {
        self.stroke_color = Some(color);
        self
    }

    /// Sprite and top-left corner of every recorded stroke, in drawing order.
    pub fn sprites(&self) -> Vec<(NekoSprite, Point)> {
        self.strokes
            .iter()
            .map(|stroke| {
                let (offset, shape) = normalized(stroke.iter().copied());

                ALL_SPRITES
                    .iter()
                    .find_map(|sprite| {
                        let (sprite_offset, sprite_shape) = normalized(sprite_points(*sprite));
                        if sprite_shape == shape {
                            Some((*sprite, offset - sprite_offset))
                        } else {
                            None
                        }
                    })
                    .expect("stroke is not a sprite")
            })
            .collect()
    }

    pub fn pixel(&self, x: i32, y: i32) -> Rgb565 {
        self.pixels[(y as u32 * self.size.width + x as u32) as usize]
    }

    pub fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|p| **p == color).count()
    }
}

impl DrawTarget for RecordingCanvas {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let mut stroke = Vec::new();

        for Pixel(coord, color) in pixels {
            self.writes += 1;

            if Some(color) == self.stroke_color {
                stroke.push(coord);
            }

            if coord.x < 0
                || coord.y < 0
                || coord.x >= self.size.width as i32
                || coord.y >= self.size.height as i32
            {
                self.offscreen += 1;
                continue;
            }

            let index = (coord.y as u32 * self.size.width + coord.x as u32) as usize;
            self.pixels[index] = color;
        }

        if !stroke.is_empty() {
            self.strokes.push(stroke);
        }

        Ok(())
    }
}

impl OriginDimensions for RecordingCanvas {
    fn size(&self) -> Size {
        self.size
    }
}

fn sprite_points(sprite: NekoSprite) -> impl Iterator<Item = Point> {
    (0..SPRITE_SIZE)
        .flat_map(|y| (0..SPRITE_SIZE).map(move |x| (x, y)))
        .filter(move |(x, y)| sprite.is_set(*x, *y))
        .map(|(x, y)| Point::new(x as i32, y as i32))
}

/// Top-left of the bounding box, and the points relative to it in a fixed
/// order.
fn normalized<I>(points: I) -> (Point, Vec<(i32, i32)>)
where
    I: IntoIterator<Item = Point>,
{
    let points: Vec<Point> = points.into_iter().collect();
    let offset = Point::new(
        points.iter().map(|p| p.x).min().unwrap_or(0),
        points.iter().map(|p| p.y).min().unwrap_or(0),
    );

    let mut shape: Vec<(i32, i32)> = points
        .iter()
        .map(|p| (p.x - offset.x, p.y - offset.y))
        .collect();
    shape.sort_unstable();

    (offset, shape)
}
