//! This module holds the basic value types for addressing and moving around a
//! tile map.
//!
//! ## Coordinate Spaces
//!
//! There are three spaces that positions can live in:
//!
//! ### Map Space
//!
//! Map coordinates address cells. A [MapCoordinate] is always a whole cell,
//! while [ContinuousMapCoordinate] and [VirtualMapCoordinate] can point
//! anywhere between cell centers. Cells are centered on their integer
//! coordinate, so the cell `(2, 3)` covers every fractional position that
//! rounds to `(2, 3)`.
//!
//! What the two axes mean depends on the map's topology:
//!
//! - **Grid**: `x` goes right, `y` goes down. Nothing fancy.
//! - **IsoDiamond**: the grid is rotated 45° on screen. Increasing `x` moves
//!   down and to the right, increasing `y` moves down and to the left.
//! - **IsoStaggered**: `y` is the row, and each row is only half a tile tall on
//!   screen. Odd rows are shifted half a tile to the right, so the rows
//!   interlock like bricks.
//!
//! ```text
//! IsoStaggered rows, as they appear on screen:
//!
//!   row 0:  <0,0>   <1,0>   <2,0>
//!   row 1:      <0,1>   <1,1>   <2,1>
//!   row 2:  <0,2>   <1,2>   <2,2>
//! ```
//!
//! ### Virtual vs Continuous
//!
//! A map can wrap around on either axis, in which case the same cell shows up
//! more than once on screen. A position read off the screen doesn't know which
//! copy it came from, so it comes out as a [VirtualMapCoordinate]: a map
//! position that hasn't been wrapped or limited yet. Run it through a
//! [Navigator](crate::Navigator) to get the real cell. A
//! [ContinuousMapCoordinate] is a fractional position that is already in
//! bounds.
//!
//! ### Screen Space
//!
//! Pixels, see [crate::render]. Y grows downwards, the origin is wherever the
//! caller wants it to be.

mod direction;
mod unit;

pub use self::{direction::*, unit::*};
