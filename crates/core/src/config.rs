use crate::{
    map::{ContinuousMapCoordinate, VirtualMapCoordinate},
    util::range::NumRange,
};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The geometric layout family of a map. Determines which cells are adjacent
/// to each other and how cells are projected onto the screen.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GridType {
    /// Plain orthogonal grid of rectangular tiles
    Grid,
    /// Isometric map where the whole grid is rotated 45°, so the map forms
    /// one big diamond on screen
    IsoDiamond,
    /// Isometric map made of interlocking rows of diamond tiles, so the map
    /// forms a rectangle on screen
    IsoStaggered,
}

/// What happens at the edge of a map along one axis. An axis can either wrap
/// or be limited, never both.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    /// Moving past one end of the range re-enters from the other end, like a
    /// globe. The range is treated as half-open, so the upper bound is the
    /// same cell as the lower bound. The span must be non-zero.
    Wrap(NumRange<i32>),
    /// Moving outside the range (inclusive on both ends) is reported as a
    /// failed navigation. The out-of-range coordinate is still returned.
    Limit(NumRange<i32>),
}

impl Boundary {
    /// The range this boundary applies to, regardless of policy
    pub fn range(&self) -> NumRange<i32> {
        match self {
            Self::Wrap(range) | Self::Limit(range) => *range,
        }
    }

    /// Wrap a fractional position along this axis. Cells are centered on their
    /// integer coordinate, so the fractional range is shifted down half a cell
    /// from the cell range. That way wrapping then rounding always gives the
    /// same cell as rounding then wrapping. Limits leave the value untouched.
    fn wrap_continuous(&self, value: f64) -> f64 {
        match self {
            Self::Wrap(range) => {
                let lower = f64::from(range.lower()) - 0.5;
                let upper = f64::from(range.upper()) - 0.5;
                NumRange::new(lower, upper).wrap(value)
            }
            Self::Limit(_) => value,
        }
    }
}

/// Declarative description of a navigator: the map topology, plus an optional
/// boundary policy for each axis. Use [NavigatorMetadata::build] to turn this
/// into an actual [Navigator](crate::Navigator).
///
/// This is a plain value. The `with_` methods return a modified copy and
/// never change the original, so a single metadata value can be reused to
/// build any number of navigators.
///
/// ```
/// use tilenav::{
///     GridDirection, GridType, MapCoordinate, Navigator, NavigatorMetadata,
///     NumRange,
/// };
///
/// let navigator = NavigatorMetadata::new(GridType::Grid)
///     .with_horizontal_wrap(NumRange::new(0, 100))
///     .with_vertical_limit(NumRange::new(0, 50))
///     .build::<GridDirection>()
///     .unwrap();
/// let (success, coordinate) =
///     navigator.navigate_to(GridDirection::East, MapCoordinate::new(99, 0), 1);
/// assert!(success);
/// assert_eq!(coordinate, MapCoordinate::new(0, 0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigatorMetadata {
    pub grid_type: GridType,
    /// Boundary policy for the x axis
    #[serde(default)]
    pub horizontal: Option<Boundary>,
    /// Boundary policy for the y axis
    #[serde(default)]
    pub vertical: Option<Boundary>,
}

impl NavigatorMetadata {
    /// Metadata for an unbounded map of the given topology
    pub const fn new(grid_type: GridType) -> Self {
        Self {
            grid_type,
            horizontal: None,
            vertical: None,
        }
    }

    pub fn with_horizontal(self, boundary: Option<Boundary>) -> Self {
        Self {
            horizontal: boundary,
            ..self
        }
    }

    pub fn with_vertical(self, boundary: Option<Boundary>) -> Self {
        Self {
            vertical: boundary,
            ..self
        }
    }

    pub fn with_horizontal_wrap(self, range: NumRange<i32>) -> Self {
        self.with_horizontal(Some(Boundary::Wrap(range)))
    }

    pub fn with_vertical_wrap(self, range: NumRange<i32>) -> Self {
        self.with_vertical(Some(Boundary::Wrap(range)))
    }

    pub fn with_horizontal_limit(self, range: NumRange<i32>) -> Self {
        self.with_horizontal(Some(Boundary::Limit(range)))
    }

    pub fn with_vertical_limit(self, range: NumRange<i32>) -> Self {
        self.with_vertical(Some(Boundary::Limit(range)))
    }

    /// Make sure this configuration can be turned into a navigator. The only
    /// invalid configuration is a wrap range with zero span, since wrapping
    /// around it would divide by zero.
    pub fn check(&self) -> anyhow::Result<()> {
        for boundary in [self.horizontal, self.vertical].iter().flatten() {
            if let Boundary::Wrap(range) = boundary {
                range.ensure_wrappable()?;
            }
        }
        Ok(())
    }

    /// Wrap a fractional map position along every axis that has a wrap
    /// boundary. Axes without a boundary, or with a limit boundary, are passed
    /// through as is. Useful for placing entities based on screen input,
    /// where rounding to a whole cell would lose precision.
    ///
    /// The metadata must have passed [Self::check].
    pub fn wrap_continuous(
        &self,
        coordinate: VirtualMapCoordinate,
    ) -> ContinuousMapCoordinate {
        let wrap = |boundary: Option<Boundary>, value: f64| match boundary {
            Some(boundary) => boundary.wrap_continuous(value),
            None => value,
        };
        ContinuousMapCoordinate::new(
            wrap(self.horizontal, coordinate.x),
            wrap(self.vertical, coordinate.y),
        )
    }
}
