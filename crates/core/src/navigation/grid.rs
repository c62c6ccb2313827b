use crate::{
    config::{GridType, NavigatorMetadata},
    map::{GridDirection, MapCoordinate},
    navigation::{Navigation, Navigator},
};

/// Take `steps` copies of a fixed offset
fn walk(
    origin: MapCoordinate,
    offset: MapCoordinate,
    steps: i32,
) -> MapCoordinate {
    let steps = i64::from(steps);
    origin.saturating_add(
        i64::from(offset.x) * steps,
        i64::from(offset.y) * steps,
    )
}

/// Base navigator for plain orthogonal grids. Each direction is a fixed offset
/// (see [GridDirection::offset]), so `n` steps is just `n` times that offset.
#[derive(Copy, Clone, Debug, Default)]
pub struct GridNavigator;

impl Navigator<GridDirection> for GridNavigator {
    fn metadata(&self) -> NavigatorMetadata {
        NavigatorMetadata::new(GridType::Grid)
    }

    fn navigate(
        &self,
        direction: GridDirection,
        origin: MapCoordinate,
        steps: i32,
    ) -> Navigation {
        Navigation::unbounded(walk(origin, direction.offset(), steps))
    }
}

/// Base navigator for isometric-diamond maps. Directions are screen
/// directions, and the map axes run diagonally across the screen: `+x` is
/// southeast and `+y` is southwest. So moving north on screen means going
/// backwards on both map axes, moving east means `+x` and `-y`, etc.
///
/// Like on a plain grid, each direction is a fixed offset.
#[derive(Copy, Clone, Debug, Default)]
pub struct IsoDiamondNavigator;

impl IsoDiamondNavigator {
    /// Get the map offset for one step in the given screen direction
    pub fn offset(direction: GridDirection) -> MapCoordinate {
        match direction {
            GridDirection::None => MapCoordinate::new(0, 0),
            GridDirection::North => MapCoordinate::new(-1, -1),
            GridDirection::NorthEast => MapCoordinate::new(0, -1),
            GridDirection::East => MapCoordinate::new(1, -1),
            GridDirection::SouthEast => MapCoordinate::new(1, 0),
            GridDirection::South => MapCoordinate::new(1, 1),
            GridDirection::SouthWest => MapCoordinate::new(0, 1),
            GridDirection::West => MapCoordinate::new(-1, 1),
            GridDirection::NorthWest => MapCoordinate::new(-1, 0),
        }
    }
}

impl Navigator<GridDirection> for IsoDiamondNavigator {
    fn metadata(&self) -> NavigatorMetadata {
        NavigatorMetadata::new(GridType::IsoDiamond)
    }

    fn navigate(
        &self,
        direction: GridDirection,
        origin: MapCoordinate,
        steps: i32,
    ) -> Navigation {
        Navigation::unbounded(walk(origin, Self::offset(direction), steps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{map::Direction, navigation::NavigationInfo};
    use strum::IntoEnumIterator;

    #[test]
    fn test_grid_offsets() {
        let origin = MapCoordinate::new(10, -3);
        let expected = [
            (GridDirection::None, (10, -3)),
            (GridDirection::North, (10, -4)),
            (GridDirection::NorthEast, (11, -4)),
            (GridDirection::East, (11, -3)),
            (GridDirection::SouthEast, (11, -2)),
            (GridDirection::South, (10, -2)),
            (GridDirection::SouthWest, (9, -2)),
            (GridDirection::West, (9, -3)),
            (GridDirection::NorthWest, (9, -4)),
        ];
        for &(direction, (x, y)) in expected.iter() {
            assert_eq!(
                GridNavigator.navigate_to(direction, origin, 1),
                (true, MapCoordinate::new(x, y)),
                "{:?}",
                direction
            );
        }
    }

    #[test]
    fn test_grid_steps() {
        let navigation =
            GridNavigator.navigate(GridDirection::SouthWest, MapCoordinate::ORIGIN, 4);
        assert_eq!(navigation.coordinate, MapCoordinate::new(-4, 4));
        assert!(navigation.success);
        assert_eq!(navigation.info, NavigationInfo::default());

        // Negative steps walk backwards
        assert_eq!(
            GridNavigator
                .navigate_to(GridDirection::North, MapCoordinate::ORIGIN, -3),
            (true, MapCoordinate::new(0, 3))
        );
        assert_eq!(
            GridNavigator.navigate_to(GridDirection::East, MapCoordinate::new(5, 5), 0),
            (true, MapCoordinate::new(5, 5))
        );
    }

    #[test]
    fn test_steps_saturate() {
        assert_eq!(
            GridNavigator.navigate_to(
                GridDirection::East,
                MapCoordinate::new(i32::MAX, 0),
                1
            ),
            (true, MapCoordinate::new(i32::MAX, 0))
        );
        assert_eq!(
            GridNavigator.navigate_to(
                GridDirection::NorthEast,
                MapCoordinate::ORIGIN,
                i32::MIN
            ),
            (true, MapCoordinate::new(i32::MIN, i32::MAX))
        );
        assert_eq!(
            IsoDiamondNavigator.navigate_to(
                GridDirection::North,
                MapCoordinate::new(-5, 5),
                i32::MAX
            ),
            (true, MapCoordinate::new(i32::MIN, i32::MIN + 6))
        );
    }

    #[test]
    fn test_diamond_offsets() {
        let origin = MapCoordinate::new(4, 4);
        let expected = [
            (GridDirection::None, (4, 4)),
            (GridDirection::North, (3, 3)),
            (GridDirection::NorthEast, (4, 3)),
            (GridDirection::East, (5, 3)),
            (GridDirection::SouthEast, (5, 4)),
            (GridDirection::South, (5, 5)),
            (GridDirection::SouthWest, (4, 5)),
            (GridDirection::West, (3, 5)),
            (GridDirection::NorthWest, (3, 4)),
        ];
        for &(direction, (x, y)) in expected.iter() {
            assert_eq!(
                IsoDiamondNavigator.navigate_to(direction, origin, 1),
                (true, MapCoordinate::new(x, y)),
                "{:?}",
                direction
            );
        }
    }

    #[test]
    fn test_diamond_steps_match_repeated_steps() {
        let origin = MapCoordinate::new(-2, 7);
        for direction in GridDirection::iter() {
            let mut stepped = origin;
            for _ in 0..5 {
                stepped = IsoDiamondNavigator.navigate(direction, stepped, 1).coordinate;
            }
            assert_eq!(
                IsoDiamondNavigator.navigate(direction, origin, 5).coordinate,
                stepped
            );
            assert_eq!(
                IsoDiamondNavigator.navigate(direction, origin, -5).coordinate,
                IsoDiamondNavigator
                    .navigate(direction.opposite(), origin, 5)
                    .coordinate
            );
        }
    }
}
