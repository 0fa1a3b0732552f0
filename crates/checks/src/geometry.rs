//! Geometry probes for rendered elements.
//!
//! A [`Rect`] is a bounding rectangle in device pixels as reported by the
//! renderer. [`ElementBox`] snapshots it into truncated integer measures and
//! [`Point`] compares centers:
//!
//! ```rust
//! use checks::{ElementBox, Rect};
//!
//! let header = ElementBox::new(Rect::new(0.0, 0.0, 800.0, 96.0)).unwrap();
//! let title = ElementBox::new(Rect::new(300.0, 30.0, 200.0, 40.0)).unwrap();
//!
//! assert!(title.width() < header.width());
//! assert!(title.center().near(header.center(), 24));
//! ```
//!
//! All measures truncate toward zero rather than round, and tolerances are
//! meant to be compared against truncated distances.

use crate::error::GeometryError;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance truncated toward zero.
    pub fn distance(&self, other: Point) -> i64 {
        // Subtracting in f64 keeps far apart points from overflowing
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        (dx * dx + dy * dy).sqrt().trunc() as i64
    }

    /// True when [`distance`](Self::distance) is strictly below `eps`.
    pub fn near(&self, other: Point, eps: i64) -> bool {
        self.distance(other) < eps
    }
}

/// Truncated measures of one element's bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementBox {
    width: i64,
    height: i64,
    center_x: i64,
    center_y: i64,
}

impl ElementBox {
    pub fn new(rect: Rect) -> Result<Self, GeometryError> {
        let Rect {
            x,
            y,
            width,
            height,
        } = rect;

        if ![x, y, width, height].iter().all(|v| v.is_finite()) {
            return Err(GeometryError::NonFinite);
        }
        if width < 0.0 || height < 0.0 {
            return Err(GeometryError::NegativeExtent { width, height });
        }

        Ok(Self {
            width: width.trunc() as i64,
            height: height.trunc() as i64,
            center_x: (x + width / 2.0).trunc() as i64,
            center_y: (y + height / 2.0).trunc() as i64,
        })
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn center_x(&self) -> i64 {
        self.center_x
    }

    pub fn center_y(&self) -> i64 {
        self.center_y
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }
}

impl TryFrom<Rect> for ElementBox {
    type Error = GeometryError;

    fn try_from(rect: Rect) -> Result<Self, Self::Error> {
        Self::new(rect)
    }
}
