use crate::{
    map::{ContinuousMapCoordinate, VirtualMapCoordinate},
    render::{unit::ScreenPosition, viewport::Viewport, ScreenConverter},
};
use nalgebra::Vector2;

/// Convert a screen position into rectilinear grid space: undo the viewport
/// translation, then the rotation, then scale down by the tile size. `focus`
/// is the viewport's focus, already expressed in grid space.
///
/// All three converters are built on top of this.
pub(super) fn screen_to_grid(
    viewport: &Viewport,
    focus: Vector2<f64>,
    position: ScreenPosition,
) -> Vector2<f64> {
    let relative: Vector2<f64> =
        (position - viewport.pixel_bounds().center()).into();
    let unrotated = viewport.rotation().inverse_matrix() * relative;
    focus + unrotated.component_div(&viewport.tile_size().to_vector())
}

/// The exact inverse of [screen_to_grid]
pub(super) fn grid_to_screen(
    viewport: &Viewport,
    focus: Vector2<f64>,
    point: Vector2<f64>,
) -> ScreenPosition {
    let scaled = (point - focus).component_mul(&viewport.tile_size().to_vector());
    let rotated = viewport.rotation().forward_matrix() * scaled;
    viewport.pixel_bounds().center() + ScreenPosition::from(rotated)
}

/// Converter for plain orthogonal grids, where grid space and map space are
/// the same thing.
#[derive(Copy, Clone, Debug, Default)]
pub struct GridScreenConverter;

impl ScreenConverter for GridScreenConverter {
    fn screen_to_map(
        &self,
        viewport: &Viewport,
        position: ScreenPosition,
    ) -> VirtualMapCoordinate {
        let focus = viewport.focus();
        let grid =
            screen_to_grid(viewport, Vector2::new(focus.x, focus.y), position);
        VirtualMapCoordinate::new(grid.x, grid.y)
    }

    fn map_to_screen(
        &self,
        viewport: &Viewport,
        coordinate: ContinuousMapCoordinate,
    ) -> ScreenPosition {
        let focus = viewport.focus();
        grid_to_screen(
            viewport,
            Vector2::new(focus.x, focus.y),
            Vector2::new(coordinate.x, coordinate.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{
        unit::{ScreenRect, TileSize},
        viewport::Rotation,
    };
    use assert_approx_eq::assert_approx_eq;

    fn viewport(rotation: Rotation) -> Viewport {
        Viewport::new(
            ContinuousMapCoordinate::new(10.0, 20.0),
            ScreenRect::new(0.0, 0.0, 800.0, 600.0),
            TileSize::new(32, 16),
            rotation,
        )
        .unwrap()
    }

    #[test]
    fn test_screen_to_map() {
        let viewport = viewport(Rotation::None);
        let converter = GridScreenConverter;
        let map = converter
            .screen_to_map(&viewport, ScreenPosition::new(400.0, 300.0));
        assert_approx_eq!(map.x, 10.0);
        assert_approx_eq!(map.y, 20.0);

        let map = converter
            .screen_to_map(&viewport, ScreenPosition::new(464.0, 292.0));
        assert_approx_eq!(map.x, 12.0);
        assert_approx_eq!(map.y, 19.5);
    }

    #[test]
    fn test_rotation() {
        // 64px right and 16px down of center, under each rotation
        let position = ScreenPosition::new(464.0, 316.0);
        let expected = [
            (Rotation::None, (12.0, 21.0)),
            (Rotation::Quarter, (9.5, 24.0)),
            (Rotation::Half, (8.0, 19.0)),
            (Rotation::ThreeQuarter, (10.5, 16.0)),
        ];
        for &(rotation, (x, y)) in expected.iter() {
            let map =
                GridScreenConverter.screen_to_map(&viewport(rotation), position);
            assert_approx_eq!(map.x, x);
            assert_approx_eq!(map.y, y);
        }
    }

    #[test]
    fn test_map_to_screen() {
        let viewport = viewport(Rotation::Quarter);
        let coordinate = ContinuousMapCoordinate::new(13.25, 17.5);
        let screen = GridScreenConverter.map_to_screen(&viewport, coordinate);
        let map = GridScreenConverter.screen_to_map(&viewport, screen);
        assert_approx_eq!(map.x, coordinate.x);
        assert_approx_eq!(map.y, coordinate.y);
    }
}
