use crate::{
    config::{GridType, NavigatorMetadata},
    map::{Direction, MapCoordinate, StaggeredDirection},
    navigation::{Navigation, Navigator},
};

/// Base navigator for isometric-staggered maps. Every odd row is shifted half
/// a tile to the right, so the offset for a diagonal step depends on whether
/// we're starting from an even or odd row:
///
/// ```text
///            even row   odd row
/// northeast  ( 0, -1)   (1, -1)
/// northwest  (-1, -1)   (0, -1)
/// southeast  ( 0,  1)   (1,  1)
/// southwest  (-1,  1)   (0,  1)
/// ```
///
/// North and south jump two rows (back into the same column), east and west
/// stay within the row.
///
/// A diagonal run alternates between the two columns of the table, so `n`
/// steps move `n` rows and about `n / 2` columns. Negative step counts walk the
/// opposite direction.
#[derive(Copy, Clone, Debug, Default)]
pub struct IsoStaggeredNavigator;

impl IsoStaggeredNavigator {
    /// Move exactly one step
    pub fn step(
        direction: StaggeredDirection,
        origin: MapCoordinate,
    ) -> MapCoordinate {
        // rem_euclid so that negative rows get the right parity
        let odd_row = origin.y.rem_euclid(2) == 1;
        let (east_shift, west_shift) = if odd_row { (1, 0) } else { (0, -1) };
        let offset = match direction {
            StaggeredDirection::None => MapCoordinate::new(0, 0),
            StaggeredDirection::North => MapCoordinate::new(0, -2),
            StaggeredDirection::NorthEast => MapCoordinate::new(east_shift, -1),
            StaggeredDirection::East => MapCoordinate::new(1, 0),
            StaggeredDirection::SouthEast => MapCoordinate::new(east_shift, 1),
            StaggeredDirection::South => MapCoordinate::new(0, 2),
            StaggeredDirection::SouthWest => MapCoordinate::new(west_shift, 1),
            StaggeredDirection::West => MapCoordinate::new(-1, 0),
            StaggeredDirection::NorthWest => MapCoordinate::new(west_shift, -1),
        };
        origin.saturating_add(offset.x.into(), offset.y.into())
    }

    /// Total offset of `steps` (non-negative) steps in one direction, starting
    /// from a row with the given parity (`0` even, `1` odd)
    fn offset(
        direction: StaggeredDirection,
        parity: i64,
        steps: i64,
    ) -> (i64, i64) {
        // Going east, a diagonal step only changes column when it starts on an
        // odd row. Going west, only when it starts on an even row. The rows
        // alternate parity starting with the origin's.
        let east_columns = (steps + parity) / 2;
        let west_columns = (steps + 1 - parity) / 2;
        match direction {
            StaggeredDirection::None => (0, 0),
            StaggeredDirection::North => (0, -2 * steps),
            StaggeredDirection::NorthEast => (east_columns, -steps),
            StaggeredDirection::East => (steps, 0),
            StaggeredDirection::SouthEast => (east_columns, steps),
            StaggeredDirection::South => (0, 2 * steps),
            StaggeredDirection::SouthWest => (-west_columns, steps),
            StaggeredDirection::West => (-steps, 0),
            StaggeredDirection::NorthWest => (-west_columns, -steps),
        }
    }
}

impl Navigator<StaggeredDirection> for IsoStaggeredNavigator {
    fn metadata(&self) -> NavigatorMetadata {
        NavigatorMetadata::new(GridType::IsoStaggered)
    }

    fn navigate(
        &self,
        direction: StaggeredDirection,
        origin: MapCoordinate,
        steps: i32,
    ) -> Navigation {
        let direction = if steps < 0 {
            direction.opposite()
        } else {
            direction
        };
        let parity = i64::from(origin.y.rem_euclid(2));
        let (dx, dy) =
            Self::offset(direction, parity, i64::from(steps.unsigned_abs()));
        Navigation::unbounded(origin.saturating_add(dx, dy))
    }
}
