//! Navigators answer the question "if I start at this cell and walk N steps in
//! this direction, where do I end up?"
//!
//! There's one base navigator per map topology, which knows nothing about the
//! size of the map. Boundary policies are layered on top as decorators, each of
//! which wraps another navigator and is a navigator itself:
//!
//! ```text
//! IsoDiamondNavigator -> WrapNavigator (x) -> LimitNavigator (y)
//! ```
//!
//! Usually you don't need to assemble these by hand, just describe the map with
//! a [NavigatorMetadata] and call [NavigatorMetadata::build].

mod grid;
mod limit;
mod staggered;
mod wrap;

pub use self::{
    grid::{GridNavigator, IsoDiamondNavigator},
    limit::LimitNavigator,
    staggered::IsoStaggeredNavigator,
    wrap::WrapNavigator,
};

use crate::{
    config::{Boundary, GridType, NavigatorMetadata},
    map::{Direction, GridDirection, MapCoordinate, StaggeredDirection},
    util::range::NumRange,
};
use anyhow::bail;
use log::debug;
use serde::Serialize;
use std::fmt::Debug;

/// Which side of a wrap range a raw (pre-wrap) value fell on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapIndicator {
    /// The value was below the range, and wrapped around to the top
    Below,
    /// The value was already in the range, or the axis doesn't wrap
    #[default]
    Within,
    /// The value was past the upper bound, and wrapped around to the bottom
    Above,
}

impl WrapIndicator {
    /// Classify a raw value against a wrap range. Only values strictly past
    /// either bound count as wrapped. The upper bound itself still wraps back
    /// to the lower bound, but is reported as [Self::Within].
    pub fn of(range: &NumRange<i32>, value: i32) -> Self {
        if value < range.lower() {
            Self::Below
        } else if value > range.upper() {
            Self::Above
        } else {
            Self::Within
        }
    }

    /// `-1`, `0`, or `1`
    pub fn signum(self) -> i32 {
        match self {
            Self::Below => -1,
            Self::Within => 0,
            Self::Above => 1,
        }
    }
}

/// Boundary information gathered during a navigation. Base navigators leave
/// this at its default, boundary decorators fill in the fields for their
/// axes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct NavigationInfo {
    pub wrap_x: WrapIndicator,
    pub wrap_y: WrapIndicator,
    /// Was the x coordinate outside a limit range?
    pub limited_x: bool,
    /// Was the y coordinate outside a limit range?
    pub limited_y: bool,
}

/// The outcome of a single navigation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Navigation {
    /// `false` iff the destination fell outside a limit range. Wrapping never
    /// fails.
    pub success: bool,
    /// The destination. When `success` is false, this is the raw,
    /// out-of-bounds destination. It is **not** clamped.
    pub coordinate: MapCoordinate,
    pub info: NavigationInfo,
}

impl Navigation {
    /// A successful navigation with no boundary info, i.e. the output of a
    /// base navigator
    pub fn unbounded(coordinate: MapCoordinate) -> Self {
        Self {
            success: true,
            coordinate,
            info: NavigationInfo::default(),
        }
    }
}

/// Moves coordinates around a map of a particular topology. Implementations
/// are stateless once built, so they can be shared freely between threads.
pub trait Navigator<D: Direction>: Debug + Send + Sync {
    /// The topology and boundaries that this navigator implements
    fn metadata(&self) -> NavigatorMetadata;

    /// Move `steps` cells in `direction`, starting from `origin`. Negative
    /// step counts move the opposite way, zero steps (or [Direction::NONE])
    /// stays put but still applies boundary policies.
    fn navigate(
        &self,
        direction: D,
        origin: MapCoordinate,
        steps: i32,
    ) -> Navigation;

    /// Same as [Self::navigate], without the boundary info.
    fn navigate_to(
        &self,
        direction: D,
        origin: MapCoordinate,
        steps: i32,
    ) -> (bool, MapCoordinate) {
        let navigation = self.navigate(direction, origin, steps);
        (navigation.success, navigation.coordinate)
    }

    /// Apply this navigator's boundary policies to a coordinate without
    /// moving it. Use this on the normalized output of a
    /// [ScreenConverter](crate::ScreenConverter) to get a real cell.
    fn normalize(&self, coordinate: MapCoordinate) -> Navigation {
        self.navigate(D::NONE, coordinate, 0)
    }
}

impl<D: Direction, N: Navigator<D> + ?Sized> Navigator<D> for Box<N> {
    fn metadata(&self) -> NavigatorMetadata {
        (**self).metadata()
    }

    fn navigate(
        &self,
        direction: D,
        origin: MapCoordinate,
        steps: i32,
    ) -> Navigation {
        (**self).navigate(direction, origin, steps)
    }
}

/// A class of directions that can drive the base navigator for one or more map
/// topologies. This is what lets [NavigatorMetadata::build] pick the correct
/// base navigator from the topology tag.
pub trait TopologyDirection: Direction {
    /// Create the boundary-less navigator for the given topology. Returns an
    /// error if this class of directions can't be used on that topology.
    fn base_navigator(
        grid_type: GridType,
    ) -> anyhow::Result<Box<dyn Navigator<Self>>>;
}

impl TopologyDirection for GridDirection {
    fn base_navigator(
        grid_type: GridType,
    ) -> anyhow::Result<Box<dyn Navigator<Self>>> {
        match grid_type {
            GridType::Grid => Ok(Box::new(GridNavigator)),
            GridType::IsoDiamond => Ok(Box::new(IsoDiamondNavigator)),
            GridType::IsoStaggered => bail!(
                "{} maps must be navigated with StaggeredDirection",
                grid_type
            ),
        }
    }
}

impl TopologyDirection for StaggeredDirection {
    fn base_navigator(
        grid_type: GridType,
    ) -> anyhow::Result<Box<dyn Navigator<Self>>> {
        match grid_type {
            GridType::IsoStaggered => Ok(Box::new(IsoStaggeredNavigator)),
            GridType::Grid | GridType::IsoDiamond => bail!(
                "{} maps must be navigated with GridDirection",
                grid_type
            ),
        }
    }
}

impl NavigatorMetadata {
    /// Build a navigator for this configuration. The chain is always the base
    /// navigator for the topology, then the horizontal boundary, then the
    /// vertical one. When both axes have the same policy, a single two-axis
    /// decorator is used instead, which behaves exactly the same.
    ///
    /// Returns an error if the config is invalid (see [Self::check]), or if
    /// `D` is the wrong class of directions for the topology.
    pub fn build<D: TopologyDirection>(
        &self,
    ) -> anyhow::Result<Box<dyn Navigator<D>>> {
        self.check()?;
        debug!(
            "Building {} navigator (horizontal: {:?}, vertical: {:?})",
            self.grid_type, self.horizontal, self.vertical
        );
        let base = D::base_navigator(self.grid_type)?;

        let navigator: Box<dyn Navigator<D>> =
            match (self.horizontal, self.vertical) {
                (Some(Boundary::Wrap(h)), Some(Boundary::Wrap(v))) => {
                    Box::new(WrapNavigator::both(base, h, v)?)
                }
                (Some(Boundary::Limit(h)), Some(Boundary::Limit(v))) => {
                    Box::new(LimitNavigator::both(base, h, v))
                }
                (horizontal, vertical) => {
                    let navigator: Box<dyn Navigator<D>> = match horizontal {
                        Some(Boundary::Wrap(range)) => {
                            Box::new(WrapNavigator::horizontal(base, range)?)
                        }
                        Some(Boundary::Limit(range)) => {
                            Box::new(LimitNavigator::horizontal(base, range))
                        }
                        None => base,
                    };
                    match vertical {
                        Some(Boundary::Wrap(range)) => {
                            Box::new(WrapNavigator::vertical(navigator, range)?)
                        }
                        Some(Boundary::Limit(range)) => {
                            Box::new(LimitNavigator::vertical(navigator, range))
                        }
                        None => navigator,
                    }
                }
            };
        Ok(navigator)
    }
}
