use derive_more::{Constructor, Display};
use serde::{Deserialize, Serialize};

/// Value Object - pixel position
#[derive(Debug, Clone, Copy, PartialEq, Default, Constructor, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn distance_to(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Value Object - line segment
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn length(&self) -> f64 {
        self.from.distance_to(self.to)
    }

    /// Direction of travel from `from` to `to`, in radians.
    pub fn angle(&self) -> f64 {
        (self.to.y - self.from.y).atan2(self.to.x - self.from.x)
    }
}

/// Value Object - axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Constructor, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Value Object - the SVG viewBox of the pannable layers
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Display, Serialize, Deserialize)]
#[display(fmt = "{} {} {} {}", x, y, width, height)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_length_and_angle() {
        let seg = Segment::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert_eq!(seg.length(), 5.0);
        let up = Segment::new(Point::new(0.0, 10.0), Point::new(0.0, 0.0));
        assert!((up.angle() + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn view_box_formats_like_svg() {
        assert_eq!(ViewBox::new(12.5, 0.0, 1920.0, 1080.0).to_string(), "12.5 0 1920 1080");
    }
}
