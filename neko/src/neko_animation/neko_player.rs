use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_hal::blocking::delay::DelayMs;
use log::{debug, info, trace};

use crate::neko_animation::{
    NekoConfig, NekoCycle, CLAW_FRAME_MS, CLAW_REPEAT, RUN_FRAME_MS, RUN_STEPS_PER_FRAME,
};
use crate::neko_lfsr::NekoLfsr;
use crate::neko_sprites::{draw_sprite, NekoSprite};
use crate::neko_walk::{NekoWalk, NekoWall};

// The panel shows garbage for a moment after power up, clear it a few times
const STARTUP_CLEARS: usize = 3;
const STARTUP_CLEAR_PAUSE_MS: u32 = 10;
const STARTUP_STILL_MS: u32 = 1500;
const STARTUP_AWAKE_MS: u32 = 500;

const LICK_REPEAT: usize = 3;
const SCRATCH_REPEAT: usize = 3;
const SLEEP_REPEAT: usize = 6;

/// Neko on a display. Idles for a while, chases a random spot, sharpens its
/// claws if that spot is against a wall, and starts over.
pub struct Neko<D, T>
where
    D: DrawTarget<Color = Rgb565>,
    T: DelayMs<u32>,
{
    display: D,
    delay: T,
    config: NekoConfig,
    position: Point,
    lfsr: NekoLfsr,
}

impl<D, T> Neko<D, T>
where
    D: DrawTarget<Color = Rgb565>,
    T: DelayMs<u32>,
{
    pub fn new(display: D, delay: T, config: NekoConfig) -> Self {
        let max = config.max_position();
        let position = Point::new(
            config.start.x.clamp(0, max.x),
            config.start.y.clamp(0, max.y),
        );
        let lfsr = NekoLfsr::new(config.seed);

        Neko {
            display,
            delay,
            config,
            position,
            lfsr,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn release(self) -> (D, T) {
        (self.display, self.delay)
    }

    /// Clears the panel and wakes neko up.
    pub fn start(&mut self) -> Result<(), D::Error> {
        info!("neko starting at ({}, {})", self.position.x, self.position.y);

        for _ in 0..STARTUP_CLEARS {
            self.delay.delay_ms(STARTUP_CLEAR_PAUSE_MS);
            self.display.clear(self.config.background)?;
        }

        self.draw_kitty(STARTUP_STILL_MS, NekoSprite::Still)?;
        self.draw_kitty(STARTUP_AWAKE_MS, NekoSprite::Awake)
    }

    /// One pass of idle, chase and edge scratch.
    pub fn tick(&mut self) -> Result<(), D::Error> {
        self.idle()?;
        self.chase()?;
        self.edge_scratch()
    }

    /// Draws `sprite`, holds it for `ms` and erases it again.
    pub fn draw_kitty(&mut self, ms: u32, sprite: NekoSprite) -> Result<(), D::Error> {
        draw_sprite(&mut self.display, self.position, sprite, self.config.foreground)?;
        self.delay.delay_ms(ms);
        draw_sprite(&mut self.display, self.position, sprite, self.config.background)
    }

    pub fn play(&mut self, cycle: NekoCycle, repeat: usize) -> Result<(), D::Error> {
        for _ in 0..repeat {
            for (sprite, ms) in cycle.frames().iter() {
                self.draw_kitty(*ms, *sprite)?;
            }
        }

        Ok(())
    }

    fn idle(&mut self) -> Result<(), D::Error> {
        if self.lfsr.next() & 1 != 0 {
            debug!("idle: lick");
            self.play(NekoCycle::Lick, LICK_REPEAT)?;
        }

        if self.lfsr.next() & 1 != 0 {
            debug!("idle: scratch");
            self.play(NekoCycle::Scratch, SCRATCH_REPEAT)?;
        }

        if self.lfsr.next() & 8 != 0 {
            debug!("idle: nap");
            self.play(NekoCycle::Yawn, 1)?;
            self.play(NekoCycle::Sleep, SLEEP_REPEAT)?;
        }

        Ok(())
    }

    fn chase(&mut self) -> Result<(), D::Error> {
        self.play(NekoCycle::Wake, 1)?;

        let destination = self.pick_destination();
        let mut walk = NekoWalk::new(self.position, destination);
        let [mut step1, mut step2] = NekoSprite::run(walk.heading());

        debug!(
            "chase: ({}, {}) -> ({}, {}) heading {:?}",
            self.position.x,
            self.position.y,
            destination.x,
            destination.y,
            walk.heading()
        );

        let mut running = true;
        while running {
            trace!("run frame at ({}, {})", self.position.x, self.position.y);
            self.draw_kitty(RUN_FRAME_MS, step1)?;

            for _ in 0..RUN_STEPS_PER_FRAME {
                if !walk.step(&mut self.position) {
                    running = false;
                }
            }

            core::mem::swap(&mut step1, &mut step2);
        }

        Ok(())
    }

    fn edge_scratch(&mut self) -> Result<(), D::Error> {
        let wall = match NekoWall::touched(self.position, self.config.max_position()) {
            Some(wall) => wall,
            None => return Ok(()),
        };

        debug!("edge scratch: {:?} wall", wall);

        let [claw1, claw2] = NekoSprite::claw(wall);
        for _ in 0..CLAW_REPEAT {
            self.draw_kitty(CLAW_FRAME_MS, claw1)?;
            self.draw_kitty(CLAW_FRAME_MS, claw2)?;
        }

        Ok(())
    }

    /// Random spot around the arena, clamped so the sprite stays inside.
    fn pick_destination(&mut self) -> Point {
        let max = self.config.max_position();
        let overshoot = self.config.overshoot;

        let x = (self.lfsr.next() as u32 % self.config.spread.width) as i32 - overshoot;
        let y = (self.lfsr.next() as u32 % self.config.spread.height) as i32 - overshoot;

        Point::new(x.clamp(0, max.x), y.clamp(0, max.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neko_animation::{NEKO_BACKGROUND, NEKO_FOREGROUND};
    use crate::neko_walk::NekoHeading;
    use crate::neko_test_support::{RecordingCanvas, RecordingDelay};

    fn neko() -> Neko<RecordingCanvas, RecordingDelay> {
        Neko::new(
            RecordingCanvas::new(320, 240, Rgb565::WHITE),
            RecordingDelay::default(),
            NekoConfig::default(),
        )
    }

    #[test]
    fn test_start_clears_and_wakes() {
        let mut neko = neko();
        neko.start().unwrap();

        let (canvas, delay) = neko.release();
        assert_eq!(delay.calls, vec![10, 10, 10, 1500, 500]);
        assert_eq!(canvas.count(NEKO_BACKGROUND), 320 * 240);
    }

    #[test]
    fn test_draw_kitty_erases_after_delay() {
        let mut neko = neko();
        neko.start().unwrap();
        neko.draw_kitty(42, NekoSprite::Lick).unwrap();

        let (canvas, delay) = neko.release();
        assert_eq!(*delay.calls.last().unwrap(), 42);
        assert_eq!(canvas.count(NEKO_BACKGROUND), 320 * 240);
    }

    #[test]
    fn test_first_tick_from_default_seed() {
        let mut neko = neko();
        neko.start().unwrap();
        neko.tick().unwrap();

        // Naps, then runs to (140, 49) in 12 frames without touching a wall
        assert_eq!(neko.position(), Point::new(140, 49));

        let (_, delay) = neko.release();
        let tick_calls = &delay.calls[5..];
        assert_eq!(tick_calls.len(), 2 + 12 + 2 + 12);
        assert_eq!(tick_calls.iter().map(|ms| *ms as u64).sum::<u64>(), 12_500);
    }

    #[test]
    fn test_second_tick_scratches_the_right_wall() {
        let mut neko = neko();
        neko.tick().unwrap();
        neko.tick().unwrap();

        assert_eq!(neko.position(), Point::new(288, 41));

        let (_, delay) = neko.release();
        assert_eq!(delay.total_ms(), 12_500 + 25_664);
        assert_eq!(&delay.calls[delay.calls.len() - 8..], &[333; 8]);
    }

    #[test]
    fn test_stays_in_arena_and_leaves_no_trail() {
        let mut neko = neko();
        neko.start().unwrap();
        let max = NekoConfig::default().max_position();

        for _ in 0..200 {
            neko.tick().unwrap();

            let position = neko.position();
            assert!(position.x >= 0 && position.x <= max.x, "x out of arena: {:?}", position);
            assert!(position.y >= 0 && position.y <= max.y, "y out of arena: {:?}", position);
        }

        let canvas = neko.display();
        assert_eq!(canvas.offscreen, 0);
        assert_eq!(canvas.count(NEKO_BACKGROUND), 320 * 240);
    }

    #[test]
    fn test_start_outside_arena_is_clamped() {
        let mut config = NekoConfig::default();
        config.start = Point::new(400, -50);
        let mut neko = Neko::new(
            RecordingCanvas::new(320, 240, Rgb565::WHITE),
            RecordingDelay::default(),
            config,
        );

        assert_eq!(neko.position(), Point::new(288, 0));

        neko.tick().unwrap();
        assert_eq!(neko.display().offscreen, 0);
    }

    #[test]
    fn test_panel_smaller_than_sprite_stays_in_corner() {
        let mut neko = Neko::new(
            RecordingCanvas::new(16, 16, Rgb565::WHITE),
            RecordingDelay::default(),
            NekoConfig::for_panel(16, 16),
        );

        for _ in 0..5 {
            neko.tick().unwrap();
            assert_eq!(neko.position(), Point::zero());
        }
    }

    #[test]
    fn test_run_frames_alternate_and_claws_match_wall() {
        let mut neko = Neko::new(
            RecordingCanvas::new(320, 240, Rgb565::WHITE).record_strokes(NEKO_FOREGROUND),
            RecordingDelay::default(),
            NekoConfig::default(),
        );
        neko.tick().unwrap();
        neko.tick().unwrap();

        let sprites = neko.display().sprites();
        let headings = [
            NekoHeading::Up,
            NekoHeading::Down,
            NekoHeading::Left,
            NekoHeading::Right,
            NekoHeading::UpLeft,
            NekoHeading::UpRight,
            NekoHeading::DownLeft,
            NekoHeading::DownRight,
        ];
        let runs: Vec<NekoSprite> = sprites
            .iter()
            .map(|(sprite, _)| *sprite)
            .filter(|sprite| headings.iter().any(|h| NekoSprite::run(*h).contains(sprite)))
            .collect();

        // Up to (140, 49) in 12 frames, then right to (288, 41) in 30
        let mut expected = Vec::new();
        for _ in 0..6 {
            expected.extend_from_slice(&[NekoSprite::Up1, NekoSprite::Up2]);
        }
        for _ in 0..15 {
            expected.extend_from_slice(&[NekoSprite::Right1, NekoSprite::Right2]);
        }
        assert_eq!(runs, expected);

        let claws = &sprites[sprites.len() - 8..];
        for (i, (sprite, top_left)) in claws.iter().enumerate() {
            let expected = NekoSprite::claw(NekoWall::Right)[i % 2];
            assert_eq!(*sprite, expected);
            assert_eq!(*top_left, Point::new(288, 41));
        }
    }

    #[test]
    fn test_only_known_hold_times() {
        let mut neko = neko();

        for _ in 0..50 {
            neko.tick().unwrap();
        }

        let (_, delay) = neko.release();
        for ms in delay.calls {
            assert!([250, 333, 500, 1000, 1500].contains(&ms), "unexpected hold time {}", ms);
        }
    }

    #[test]
    fn test_walls_are_reached() {
        let mut neko = neko();
        let max = NekoConfig::default().max_position();
        let mut hits = 0;

        for _ in 0..200 {
            neko.tick().unwrap();
            if NekoWall::touched(neko.position(), max).is_some() {
                hits += 1;
            }
        }

        assert!(hits > 0);
    }
}
