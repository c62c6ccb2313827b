//! This sub-module contains the value types that address positions on a map.
//! See the parent module documentation for more info on the coordinate spaces.

use derive_more::{Add, AddAssign, Display, Div, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

/// Round a fractional map position to the index of the cell that contains it.
/// Cells are centered on their integer coordinate, so this is "round to
/// nearest", with exact halves going towards positive infinity on both sides
/// of zero (unlike [f64::round]).
fn nearest_cell(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// The address of a single cell on a map. Map coordinates are plain integers
/// with no knowledge of the map's bounds, so a coordinate can be outside the
/// map until it has been normalized by a navigator.
///
/// For Grid and IsoDiamond maps, `x` and `y` are the two map axes. For
/// IsoStaggered maps, `y` is the row and every odd row is shifted half a tile
/// to the right.
///
/// The arithmetic operators follow plain `i32` overflow rules. Navigators use
/// [MapCoordinate::saturating_add] instead, so walking off the end of the
/// `i32` range stops at the edge rather than panicking.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Neg,
    Mul,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct MapCoordinate {
    pub x: i32,
    pub y: i32,
}

impl MapCoordinate {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move by a (possibly huge) offset. Each axis saturates at the ends of
    /// the `i32` range.
    pub fn saturating_add(self, dx: i64, dy: i64) -> Self {
        let saturate = |value: i64| {
            value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
        };
        Self::new(
            saturate(i64::from(self.x) + dx),
            saturate(i64::from(self.y) + dy),
        )
    }
}

/// A fractional position on a map that has already been normalized against
/// the map's boundaries. Used for placing entities between cell centers, and
/// for the focus point of a viewport.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Display,
    Add,
    Sub,
    Neg,
    Mul,
    Div,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct ContinuousMapCoordinate {
    pub x: f64,
    pub y: f64,
}

impl ContinuousMapCoordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Get the cell that contains this position
    pub fn normalize(self) -> MapCoordinate {
        MapCoordinate::new(nearest_cell(self.x), nearest_cell(self.y))
    }
}

impl From<MapCoordinate> for ContinuousMapCoordinate {
    fn from(other: MapCoordinate) -> Self {
        Self::new(other.x.into(), other.y.into())
    }
}

/// A fractional map position derived from screen space, **before** any wrap or
/// limit policy has been applied. On a wrapping map the same cell can show up
/// many times on screen, and each copy produces a different virtual coordinate.
///
/// These come out of [ScreenConverter](crate::ScreenConverter)s and have to be
/// normalized before they are used against a real map, typically via
/// [Navigator::normalize](crate::Navigator::normalize) on the result of
/// [Self::normalize].
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Display,
    Add,
    Sub,
    Neg,
    Mul,
    Div,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct VirtualMapCoordinate {
    pub x: f64,
    pub y: f64,
}

impl VirtualMapCoordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Get the (still unwrapped) cell that contains this position
    pub fn normalize(self) -> MapCoordinate {
        MapCoordinate::new(nearest_cell(self.x), nearest_cell(self.y))
    }
}

impl From<MapCoordinate> for VirtualMapCoordinate {
    fn from(other: MapCoordinate) -> Self {
        Self::new(other.x.into(), other.y.into())
    }
}
