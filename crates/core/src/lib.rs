//! Tilenav is a coordinate toolkit for tile maps. It handles moving around
//! plain grids, isometric-diamond maps and isometric-staggered maps, with
//! optional wrapping or limits on each axis, and converting between screen
//! pixels and map cells. It does no rendering of its own, it just answers
//! "where is this?" questions for whatever does.
//!
//! ```
//! use tilenav::{
//!     ContinuousMapCoordinate, GridType, MapCoordinate, Navigator,
//!     NavigatorMetadata, NumRange, Rotation, ScreenPosition, ScreenRect,
//!     StaggeredDirection, TileSize, Viewport,
//! };
//!
//! let metadata = NavigatorMetadata::new(GridType::IsoStaggered)
//!     .with_horizontal_wrap(NumRange::new(0, 64));
//! let navigator = metadata.build::<StaggeredDirection>().unwrap();
//! let (_, coordinate) = navigator.navigate_to(
//!     StaggeredDirection::SouthEast,
//!     MapCoordinate::new(63, 1),
//!     1,
//! );
//! assert_eq!(coordinate, MapCoordinate::new(0, 2));
//!
//! // What's under the mouse?
//! let viewport = Viewport::new(
//!     ContinuousMapCoordinate::new(10.0, 10.0),
//!     ScreenRect::new(0.0, 0.0, 800.0, 600.0),
//!     TileSize::new(64, 32),
//!     Rotation::None,
//! )
//! .unwrap();
//! let virtual_coordinate = GridType::IsoStaggered
//!     .screen_converter()
//!     .screen_to_map(&viewport, ScreenPosition::new(400.0, 300.0));
//! let navigation = navigator.normalize(virtual_coordinate.normalize());
//! assert_eq!(navigation.coordinate, MapCoordinate::new(10, 10));
//! ```
//!
//! See [NavigatorMetadata] for how maps are described, and [render] for the
//! screen side of things.

mod config;
mod map;
mod navigation;
pub mod render;
mod util;

pub use crate::{
    config::{Boundary, GridType, NavigatorMetadata},
    map::{
        ContinuousMapCoordinate, Direction, GridDirection, MapCoordinate,
        StaggeredDirection, VirtualMapCoordinate,
    },
    navigation::{
        GridNavigator, IsoDiamondNavigator, IsoStaggeredNavigator,
        LimitNavigator, Navigation, NavigationInfo, Navigator,
        TopologyDirection, WrapIndicator, WrapNavigator,
    },
    render::{
        GridScreenConverter, IsoDiamondScreenConverter,
        IsoStaggeredScreenConverter, Rotation, ScreenConverter,
        ScreenPosition, ScreenRect, TileSize, Viewport,
    },
    util::range::{NumRange, Rangeable},
};
