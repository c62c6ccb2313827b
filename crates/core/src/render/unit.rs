use derive_more::{Add, AddAssign, Display, Div, Mul, Neg, Sub, SubAssign};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A 2D point in screen space, in pixels. The origin is arbitrary, all that
/// matters is that it's the same origin that the viewport's pixel bounds are
/// defined in. `+y` is down the screen.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct ScreenPosition {
    pub x: f64,
    pub y: f64,
}

impl ScreenPosition {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Vector2<f64>> for ScreenPosition {
    fn from(other: Vector2<f64>) -> Self {
        Self::new(other.x, other.y)
    }
}

impl From<ScreenPosition> for Vector2<f64> {
    fn from(other: ScreenPosition) -> Self {
        Vector2::new(other.x, other.y)
    }
}

/// An axis-aligned rectangle on the screen, in pixels. `(x, y)` is the top-left
/// corner.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate,
)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    #[validate(range(min = 0.0))]
    pub width: f64,
    #[validate(range(min = 0.0))]
    pub height: f64,
}

impl ScreenRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> ScreenPosition {
        ScreenPosition::new(
            self.x + self.width / 2.0,
            self.y + self.height / 2.0,
        )
    }
}

/// Size of a single tile on screen, in pixels. For isometric maps this is the
/// bounding box of the diamond, so typically `width == 2 * height`.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Validate,
)]
pub struct TileSize {
    #[validate(range(min = 1))]
    pub width: u32,
    #[validate(range(min = 1))]
    pub height: u32,
}

impl TileSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `(width, height)` as a float vector, for scaling between map and screen
    /// space
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(f64::from(self.width), f64::from(self.height))
    }
}
