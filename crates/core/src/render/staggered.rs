use crate::{
    map::{
        ContinuousMapCoordinate, MapCoordinate, StaggeredDirection,
        VirtualMapCoordinate,
    },
    navigation::{IsoStaggeredNavigator, Navigator},
    render::{
        grid::{grid_to_screen, screen_to_grid},
        unit::ScreenPosition,
        viewport::Viewport,
        ScreenConverter,
    },
};
use log::trace;
use nalgebra::Vector2;

/// Map space to grid space for staggered maps. Each grid row holds two map
/// rows, and the odd one is pushed half a cell to the right.
///
/// A fractional position is split into the cell that contains it plus an
/// offset from that cell's center. The offset is measured in whole tiles on
/// both axes, the same units the converter uses for the positions it returns.
/// So every position the converter can return maps back to the exact spot it
/// came from.
fn map_to_grid(coordinate: ContinuousMapCoordinate) -> Vector2<f64> {
    let cell = coordinate.normalize();
    let shift = if cell.y.rem_euclid(2) == 1 { 0.5 } else { 0.0 };
    let offset_y = coordinate.y - f64::from(cell.y);
    Vector2::new(coordinate.x + shift, f64::from(cell.y) / 2.0 + offset_y)
}

/// Converter for isometric-staggered maps.
///
/// Converting to grid space and rounding finds the even-row cell whose grid
/// box contains the position. Each even-row diamond only fills the middle of
/// its box though. The four corners of the box belong to odd-row diamonds:
///
/// ```text
/// +-------+
/// | NW/\NE|
/// |  /  \ |
/// |  \  / |
/// | SW\/SE|
/// +-------+
/// ```
///
/// For a position in one of those corners, we step to the diagonal neighbour
/// with the staggered navigator and express the position relative to that
/// neighbour instead. Positions exactly on the diamond's edge stay with the
/// even-row cell.
#[derive(Copy, Clone, Debug, Default)]
pub struct IsoStaggeredScreenConverter {
    navigator: IsoStaggeredNavigator,
}

impl ScreenConverter for IsoStaggeredScreenConverter {
    fn screen_to_map(
        &self,
        viewport: &Viewport,
        position: ScreenPosition,
    ) -> VirtualMapCoordinate {
        let grid = screen_to_grid(viewport, map_to_grid(viewport.focus()), position);
        let nearest = VirtualMapCoordinate::new(grid.x, grid.y).normalize();
        let dx = grid.x - f64::from(nearest.x);
        let dy = grid.y - f64::from(nearest.y);
        let cell = MapCoordinate::new(nearest.x, nearest.y * 2);

        if dx.abs() > 0.5 - dy.abs() {
            let direction = match (dx < 0.0, dy < 0.0) {
                (true, true) => StaggeredDirection::NorthWest,
                (false, true) => StaggeredDirection::NorthEast,
                (true, false) => StaggeredDirection::SouthWest,
                (false, false) => StaggeredDirection::SouthEast,
            };
            let (_, neighbour) = self.navigator.navigate_to(direction, cell, 1);
            trace!(
                "{} is in the {} corner of {}, resolved to {}",
                position,
                direction,
                cell,
                neighbour
            );
            let rdx = -dx.signum() * (0.5 - dx.abs());
            let rdy = -dy.signum() * (0.5 - dy.abs());
            VirtualMapCoordinate::new(
                f64::from(neighbour.x) + rdx,
                f64::from(neighbour.y) + rdy,
            )
        } else {
            VirtualMapCoordinate::new(
                f64::from(cell.x) + dx,
                f64::from(cell.y) + dy,
            )
        }
    }

    fn map_to_screen(
        &self,
        viewport: &Viewport,
        coordinate: ContinuousMapCoordinate,
    ) -> ScreenPosition {
        grid_to_screen(
            viewport,
            map_to_grid(viewport.focus()),
            map_to_grid(coordinate),
        )
    }
}
