//! Conversion between screen space (pixels) and map space. Screen space is
//! what the user sees and clicks on, map space is what navigators work in.
//!
//! Each map topology has its own [ScreenConverter]. The conversions are pure
//! functions of the [Viewport] and the input position, so one converter can
//! serve any number of viewports.
//!
//! Screen to map conversion produces a [VirtualMapCoordinate], which has had
//! no boundary policy applied. On a wrapping map, the same cell can be visible
//! on screen several times, so to get a real cell, normalize the result and
//! run it through [Navigator::normalize](crate::Navigator::normalize).

mod diamond;
mod grid;
mod staggered;
mod unit;
mod viewport;

pub use self::{
    diamond::IsoDiamondScreenConverter,
    grid::GridScreenConverter,
    staggered::IsoStaggeredScreenConverter,
    unit::{ScreenPosition, ScreenRect, TileSize},
    viewport::{Rotation, Viewport},
};

use crate::{
    config::GridType,
    map::{ContinuousMapCoordinate, VirtualMapCoordinate},
};
use log::debug;
use std::fmt::Debug;

/// Converts between screen positions and map coordinates for one map topology
pub trait ScreenConverter: Debug + Send + Sync {
    /// Find the map position under a point on the screen. The output is
    /// **not** normalized, see the module docs.
    fn screen_to_map(
        &self,
        viewport: &Viewport,
        position: ScreenPosition,
    ) -> VirtualMapCoordinate;

    /// Find where a map position is drawn on the screen. For cell centers,
    /// this is the exact inverse of [Self::screen_to_map].
    fn map_to_screen(
        &self,
        viewport: &Viewport,
        coordinate: ContinuousMapCoordinate,
    ) -> ScreenPosition;
}

impl GridType {
    /// Get the screen converter for this topology
    pub fn screen_converter(self) -> Box<dyn ScreenConverter> {
        debug!("Creating {} screen converter", self);
        match self {
            Self::Grid => Box::new(GridScreenConverter),
            Self::IsoDiamond => Box::new(IsoDiamondScreenConverter),
            Self::IsoStaggered => {
                Box::new(IsoStaggeredScreenConverter::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MapCoordinate;
    use assert_approx_eq::assert_approx_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_screen_center_is_focus() {
        let focus = ContinuousMapCoordinate::new(12.2, 7.1);
        for grid_type in GridType::iter() {
            let converter = grid_type.screen_converter();
            for rotation in Rotation::iter() {
                let viewport = Viewport::new(
                    focus,
                    ScreenRect::new(100.0, 50.0, 1024.0, 768.0),
                    TileSize::new(64, 32),
                    rotation,
                )
                .unwrap();
                let map = converter.screen_to_map(
                    &viewport,
                    viewport.pixel_bounds().center(),
                );
                assert_approx_eq!(map.x, focus.x);
                assert_approx_eq!(map.y, focus.y);
                assert_eq!(map.normalize(), MapCoordinate::new(12, 7));
            }
        }
    }
}
