//! Rectangles and squares: area, perimeter, diagonal and an ASCII picture.

use std::fmt;

/// Largest side that [`Shape::picture`] will draw.
pub const MAX_PICTURE_SIDE: u32 = 50;

/// Common measurements for axis-aligned rectangular shapes.
pub trait Shape {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    fn perimeter(&self) -> u64 {
        2 * u64::from(self.width()) + 2 * u64::from(self.height())
    }

    fn diagonal(&self) -> f64 {
        f64::from(self.width()).hypot(f64::from(self.height()))
    }

    /// Rows of `*`, one per unit of height, each ending in a newline.
    fn picture(&self) -> String {
        if self.width() > MAX_PICTURE_SIDE || self.height() > MAX_PICTURE_SIDE {
            return "Too big for picture.".to_string();
        }
        let row = format!("{}\n", "*".repeat(self.width() as usize));
        row.repeat(self.height() as usize)
    }

    /// How many copies of `other` fit in this shape by area alone.
    fn amount_inside(&self, other: &dyn Shape) -> u64 {
        self.area().checked_div(other.area()).unwrap_or(0)
    }
}

/// An axis-aligned rectangle with whole-number sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    /// Creates a `width` by `height` rectangle.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Changes the width.
    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    /// Changes the height.
    pub fn set_height(&mut self, height: u32) {
        self.height = height;
    }
}

impl Shape for Rectangle {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rectangle(width={}, height={})", self.width, self.height)
    }
}

/// A rectangle whose sides always stay equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Square {
    side: u32,
}

impl Square {
    /// Creates a square with the given side.
    pub fn new(side: u32) -> Self {
        Self { side }
    }

    /// Length of every side.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Changes both dimensions at once.
    pub fn set_side(&mut self, side: u32) {
        self.side = side;
    }

    /// Same as [`set_side`](Self::set_side).
    pub fn set_width(&mut self, width: u32) {
        self.set_side(width);
    }

    /// Same as [`set_side`](Self::set_side).
    pub fn set_height(&mut self, height: u32) {
        self.set_side(height);
    }
}

impl Shape for Square {
    fn width(&self) -> u32 {
        self.side
    }

    fn height(&self) -> u32 {
        self.side
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square(side={})", self.side)
    }
}

impl From<Square> for Rectangle {
    fn from(square: Square) -> Self {
        Rectangle::new(square.side, square.side)
    }
}
