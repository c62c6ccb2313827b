//! Directions used to move between cells. Each map topology has its own closed
//! set of directions, so a direction meant for one topology can't be handed to
//! a navigator of another.

use crate::map::unit::MapCoordinate;
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, hash::Hash};
use strum::{Display, EnumIter, EnumString};

/// A class of directions for one map topology. Directions are ordered
/// clockwise starting at north, and every class has a `NONE` direction that
/// doesn't move at all. `NONE` is not part of the clockwise ordering.
pub trait Direction:
    'static + Copy + Debug + Eq + Hash + Send + Sync + Sized
{
    /// The direction that goes nowhere. Navigating towards it with zero steps
    /// is how a navigator normalizes a coordinate.
    const NONE: Self;

    /// A list of all moving directions in this class, in clockwise order
    /// around the compass, starting at North.
    const CLOCKWISE: &'static [Self];

    /// Get the index of the given direction within the clockwise ordering of
    /// this class. `None` for [Self::NONE].
    fn clockwise_index(self) -> Option<usize> {
        Self::CLOCKWISE.iter().position(|dir| self == *dir)
    }

    /// Get the direction that is directly opposite this one. [Self::NONE] is
    /// its own opposite.
    fn opposite(self) -> Self {
        match self.clockwise_index() {
            Some(index) => {
                let clockwise = Self::CLOCKWISE;
                let len = clockwise.len();
                // Every class has an even number of directions, each with its
                // opposite halfway around the compass
                clockwise[(index + (len / 2)) % len]
            }
            None => self,
        }
    }
}

/// Compass directions for orthogonal and isometric-diamond maps. The names
/// refer to directions **on screen**. On a plain grid that's the same as the
/// map axes, but on a diamond map each screen direction is a different
/// combination of map axes. See the navigators for the exact offsets.
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
pub enum GridDirection {
    None,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction for GridDirection {
    const NONE: Self = Self::None;
    const CLOCKWISE: &'static [Self] = &[
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];
}

impl GridDirection {
    /// Get the offset that moves one cell in this direction on an orthogonal
    /// grid. Each component is `-1`, `0`, or `1`. Y grows downwards.
    pub fn offset(self) -> MapCoordinate {
        match self {
            Self::None => MapCoordinate::new(0, 0),
            Self::North => MapCoordinate::new(0, -1),
            Self::NorthEast => MapCoordinate::new(1, -1),
            Self::East => MapCoordinate::new(1, 0),
            Self::SouthEast => MapCoordinate::new(1, 1),
            Self::South => MapCoordinate::new(0, 1),
            Self::SouthWest => MapCoordinate::new(-1, 1),
            Self::West => MapCoordinate::new(-1, 0),
            Self::NorthWest => MapCoordinate::new(-1, -1),
        }
    }
}

/// Directions for isometric-staggered maps. On a staggered map each row is
/// offset half a tile from the previous one, so tiles only share edges with
/// their four diagonal neighbours. The four cardinal directions skip over to
/// the next tile that only touches at a corner: north and south jump two rows,
/// east and west stay in the same row.
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
pub enum StaggeredDirection {
    None,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction for StaggeredDirection {
    const NONE: Self = Self::None;
    const CLOCKWISE: &'static [Self] = &[
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];
}

impl StaggeredDirection {
    /// Does moving one step in this direction land on a tile that shares an
    /// edge with the origin tile (as opposed to just a corner)?
    pub fn is_edge_adjacent(self) -> bool {
        matches!(
            self,
            Self::NorthEast | Self::SouthEast | Self::SouthWest | Self::NorthWest
        )
    }
}
