//! Plain CSS-pixel geometry shared by the connector and popup code.

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned box, same shape as `getBoundingClientRect()`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// An element that exists but has not been laid out yet reports a
    /// zero-size (or NaN) box.
    pub fn is_laid_out(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.left.is_finite()
            && self.top.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Re-express this rect relative to `origin`.
    pub fn relative_to(&self, origin: Point) -> Rect {
        Rect::new(self.left - origin.x, self.top - origin.y, self.width, self.height)
    }
}
