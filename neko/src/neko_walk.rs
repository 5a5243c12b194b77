use embedded_graphics::prelude::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NekoHeading {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NekoWall {
    Left,
    Right,
    Top,
    Bottom,
}

impl NekoWall {
    /// Wall the sprite at `position` is up against, `max` being the largest
    /// valid top-left corner. In a corner the vertical walls lose.
    pub fn touched(position: Point, max: Point) -> Option<NekoWall> {
        let mut wall = None;

        if position.x == 0 {
            wall = Some(NekoWall::Left);
        }
        if position.x == max.x {
            wall = Some(NekoWall::Right);
        }
        if position.y == 0 {
            wall = Some(NekoWall::Top);
        }
        if position.y == max.y {
            wall = Some(NekoWall::Bottom);
        }

        return wall;
    }
}

/// Incremental Bresenham line walk towards a fixed destination.
///
/// Every point produced lies inside the bounding box of the start point and
/// the destination.
pub struct NekoWalk {
    destination: Point,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
}

impl NekoWalk {
    pub fn new(start: Point, destination: Point) -> Self {
        let dx = (destination.x - start.x).abs();
        let dy = (destination.y - start.y).abs();
        let sx = if start.x < destination.x { 1 } else { -1 };
        let sy = if start.y < destination.y { 1 } else { -1 };
        let err = (if dx > dy { dx } else { -dy }) / 2;

        NekoWalk {
            destination,
            dx,
            dy,
            sx,
            sy,
            err,
        }
    }

    pub fn destination(&self) -> Point {
        self.destination
    }

    /// Moves `position` one step along the line. Returns false, leaving the
    /// position untouched, once the destination has been reached.
    pub fn step(&mut self, position: &mut Point) -> bool {
        if *position == self.destination {
            return false;
        }

        let e2 = self.err;

        if e2 > -self.dx {
            self.err -= self.dy;
            position.x += self.sx;
        }

        if e2 < self.dy {
            self.err += self.dx;
            position.y += self.sy;
        }

        return true;
    }

    /// Direction the sprite faces for the whole walk. A line is vertical when
    /// its horizontal extent is less than half the vertical one, and the
    /// other way round for horizontal.
    pub fn heading(&self) -> NekoHeading {
        let up = self.sy < 0;
        let left = self.sx < 0;

        if 2 * self.dx < self.dy {
            if up {
                NekoHeading::Up
            } else {
                NekoHeading::Down
            }
        } else if 2 * self.dy < self.dx {
            if left {
                NekoHeading::Left
            } else {
                NekoHeading::Right
            }
        } else {
            match (up, left) {
                (true, true) => NekoHeading::UpLeft,
                (true, false) => NekoHeading::UpRight,
                (false, true) => NekoHeading::DownLeft,
                (false, false) => NekoHeading::DownRight,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neko_lfsr::NekoLfsr;

    fn walk_all(start: Point, destination: Point) -> Vec<Point> {
        let mut walk = NekoWalk::new(start, destination);
        let mut position = start;
        let mut points = vec![position];

        while walk.step(&mut position) {
            points.push(position);
            assert!(points.len() < 10_000, "walk never arrived");
        }

        points
    }

    #[test]
    fn test_walk_arrives_at_destination() {
        let walk = NekoWalk::new(Point::new(144, 104), Point::new(0, 208));
        let points = walk_all(Point::new(144, 104), walk.destination());
        assert_eq!(*points.last().unwrap(), Point::new(0, 208));
    }

    #[test]
    fn test_walk_moves_one_pixel_per_axis_per_step() {
        let points = walk_all(Point::new(10, 200), Point::new(288, 3));

        for pair in points.windows(2) {
            assert!((pair[1].x - pair[0].x).abs() <= 1);
            assert!((pair[1].y - pair[0].y).abs() <= 1);
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_walk_stays_inside_bounding_box() {
        let mut lfsr = NekoLfsr::default();

        for _ in 0..500 {
            let start = Point::new((lfsr.next() % 289) as i32, (lfsr.next() % 209) as i32);
            let destination = Point::new((lfsr.next() % 289) as i32, (lfsr.next() % 209) as i32);

            for point in walk_all(start, destination) {
                assert!(point.x >= start.x.min(destination.x) && point.x <= start.x.max(destination.x));
                assert!(point.y >= start.y.min(destination.y) && point.y <= start.y.max(destination.y));
                assert!(point.x >= 0 && point.x <= 288);
                assert!(point.y >= 0 && point.y <= 208);
            }
        }
    }

    #[test]
    fn test_walk_in_place_does_not_move() {
        let mut walk = NekoWalk::new(Point::new(5, 5), Point::new(5, 5));
        let mut position = Point::new(5, 5);
        assert_eq!(walk.destination(), position);
        assert!(!walk.step(&mut position));
        assert_eq!(position, Point::new(5, 5));
    }

    #[test]
    fn test_touched_wall() {
        let max = Point::new(288, 208);

        assert_eq!(NekoWall::touched(Point::new(144, 104), max), None);
        assert_eq!(NekoWall::touched(Point::new(0, 104), max), Some(NekoWall::Left));
        assert_eq!(NekoWall::touched(Point::new(288, 1), max), Some(NekoWall::Right));
        assert_eq!(NekoWall::touched(Point::new(10, 0), max), Some(NekoWall::Top));
        assert_eq!(NekoWall::touched(Point::new(10, 208), max), Some(NekoWall::Bottom));
        assert_eq!(NekoWall::touched(Point::new(0, 0), max), Some(NekoWall::Top));
        assert_eq!(NekoWall::touched(Point::new(288, 208), max), Some(NekoWall::Bottom));
    }

    #[test]
    fn test_heading() {
        let origin = Point::new(100, 100);
        let heading = |x, y| NekoWalk::new(origin, Point::new(x, y)).heading();

        assert_eq!(heading(100, 0), NekoHeading::Up);
        assert_eq!(heading(110, 200), NekoHeading::Down);
        assert_eq!(heading(0, 90), NekoHeading::Left);
        assert_eq!(heading(200, 100), NekoHeading::Right);
        assert_eq!(heading(50, 50), NekoHeading::UpLeft);
        assert_eq!(heading(150, 50), NekoHeading::UpRight);
        assert_eq!(heading(50, 150), NekoHeading::DownLeft);
        assert_eq!(heading(150, 150), NekoHeading::DownRight);
        // Ties go up and to the left
        assert_eq!(heading(100, 100), NekoHeading::UpLeft);
    }
}
