/// A point in px. Field-local coordinates are y-down with the origin at the
/// top-left of the field's content box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A rectangle in px units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.max_x() && p.y >= self.y && p.y < self.max_y()
    }

    /// Overlap of two rectangles, or `None` if they do not overlap.
    pub fn intersect(&self, other: &Rectangle) -> Option<Rectangle> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.max_x().min(other.max_x());
        let y1 = self.max_y().min(other.max_y());
        if x1 > x0 && y1 > y0 {
            Some(Rectangle::new(x0, y0, x1 - x0, y1 - y0))
        } else {
            None
        }
    }

    pub fn translate(&self, by: Point) -> Rectangle {
        Rectangle::new(self.x + by.x, self.y + by.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersect_overlapping() {
        let a = Rectangle::new(0.0, 0.0, 100.0, 20.0);
        let b = Rectangle::new(80.0, 5.0, 50.0, 50.0);
        assert_eq!(a.intersect(&b), Some(Rectangle::new(80.0, 5.0, 20.0, 15.0)));
    }

    #[test]
    fn intersect_disjoint_or_touching_is_none() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(a.intersect(&Rectangle::new(20.0, 0.0, 5.0, 5.0)), None);
        assert_eq!(a.intersect(&Rectangle::new(10.0, 0.0, 5.0, 5.0)), None);
    }

    #[test]
    fn translate_and_contains() {
        let r = Rectangle::new(1.0, 2.0, 3.0, 4.0).translate(Point::new(10.0, 10.0));
        assert_eq!(r, Rectangle::new(11.0, 12.0, 3.0, 4.0));
        assert!(r.contains(Point::new(11.0, 12.0)));
        assert!(!r.contains(Point::new(14.0, 12.0)));
    }
}
