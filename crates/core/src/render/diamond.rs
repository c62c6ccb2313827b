use crate::{
    map::{ContinuousMapCoordinate, VirtualMapCoordinate},
    render::{
        grid::{grid_to_screen, screen_to_grid},
        unit::ScreenPosition,
        viewport::Viewport,
        ScreenConverter,
    },
};
use nalgebra::Vector2;

/// Map space to grid space for diamond maps. The map axes are the grid axes
/// turned 45°, and each grid cell is one diamond.
fn map_to_grid(x: f64, y: f64) -> Vector2<f64> {
    Vector2::new((x - y) / 2.0, (x + y) / 2.0)
}

/// Converter for isometric-diamond maps
#[derive(Copy, Clone, Debug, Default)]
pub struct IsoDiamondScreenConverter;

impl ScreenConverter for IsoDiamondScreenConverter {
    fn screen_to_map(
        &self,
        viewport: &Viewport,
        position: ScreenPosition,
    ) -> VirtualMapCoordinate {
        let focus = viewport.focus();
        let grid = screen_to_grid(viewport, map_to_grid(focus.x, focus.y), position);
        VirtualMapCoordinate::new(grid.y + grid.x, grid.y - grid.x)
    }

    fn map_to_screen(
        &self,
        viewport: &Viewport,
        coordinate: ContinuousMapCoordinate,
    ) -> ScreenPosition {
        let focus = viewport.focus();
        grid_to_screen(
            viewport,
            map_to_grid(focus.x, focus.y),
            map_to_grid(coordinate.x, coordinate.y),
        )
    }
}
