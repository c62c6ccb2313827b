use crate::{
    map::ContinuousMapCoordinate,
    render::unit::{ScreenRect, TileSize},
};
use anyhow::anyhow;
use nalgebra::Matrix2;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use validator::Validate;

/// How far the map is rotated on screen, in counter-clockwise quarter turns.
/// Serialized as the number of quarter turns, `0` through `3`.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rotation {
    #[default]
    #[strum(serialize = "0°")]
    None,
    #[strum(serialize = "90°")]
    Quarter,
    #[strum(serialize = "180°")]
    Half,
    #[strum(serialize = "270°")]
    ThreeQuarter,
}

impl Rotation {
    /// The matrix that undoes this rotation, i.e. takes a screen-space vector
    /// back into the map's (unrotated) frame.
    ///
    /// ```text
    /// 0°   ( x,  y)
    /// 90°  (-y,  x)
    /// 180° (-x, -y)
    /// 270° ( y, -x)
    /// ```
    pub fn inverse_matrix(self) -> Matrix2<f64> {
        match self {
            Self::None => Matrix2::identity(),
            Self::Quarter => Matrix2::new(0.0, -1.0, 1.0, 0.0),
            Self::Half => Matrix2::new(-1.0, 0.0, 0.0, -1.0),
            Self::ThreeQuarter => Matrix2::new(0.0, 1.0, -1.0, 0.0),
        }
    }

    /// The matrix that applies this rotation. Rotations are orthogonal, so
    /// this is just the transpose of [Self::inverse_matrix].
    pub fn forward_matrix(self) -> Matrix2<f64> {
        self.inverse_matrix().transpose()
    }
}

impl TryFrom<u8> for Rotation {
    type Error = anyhow::Error;

    fn try_from(quarter_turns: u8) -> Result<Self, Self::Error> {
        match quarter_turns {
            0 => Ok(Self::None),
            1 => Ok(Self::Quarter),
            2 => Ok(Self::Half),
            3 => Ok(Self::ThreeQuarter),
            _ => Err(anyhow!(
                "rotation must be 0-3 quarter turns, but was {}",
                quarter_turns
            )),
        }
    }
}

impl From<Rotation> for u8 {
    fn from(rotation: Rotation) -> Self {
        match rotation {
            Rotation::None => 0,
            Rotation::Quarter => 1,
            Rotation::Half => 2,
            Rotation::ThreeQuarter => 3,
        }
    }
}

/// The camera that a map is viewed through. The focus point in map space is
/// drawn at the center of the pixel bounds, and everything else is laid out
/// around it according to the tile size and rotation.
///
/// A viewport can't be modified after creation. Viewports are very cheap to
/// create though, so to pan or zoom just create a new one.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Viewport {
    focus: ContinuousMapCoordinate,
    pixel_bounds: ScreenRect,
    tile_size: TileSize,
    rotation: Rotation,
}

impl Viewport {
    /// Create a new viewport. Returns an error if either tile dimension is
    /// zero, or if the pixel bounds have a negative size.
    pub fn new(
        focus: ContinuousMapCoordinate,
        pixel_bounds: ScreenRect,
        tile_size: TileSize,
        rotation: Rotation,
    ) -> anyhow::Result<Self> {
        tile_size.validate()?;
        pixel_bounds.validate()?;
        Ok(Self {
            focus,
            pixel_bounds,
            tile_size,
            rotation,
        })
    }

    /// The map position drawn at the center of the pixel bounds
    pub fn focus(&self) -> ContinuousMapCoordinate {
        self.focus
    }

    pub fn pixel_bounds(&self) -> ScreenRect {
        self.pixel_bounds
    }

    pub fn tile_size(&self) -> TileSize {
        self.tile_size
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};
    use strum::IntoEnumIterator;

    #[test]
    fn test_rotation_try_from() {
        for rotation in Rotation::iter() {
            assert_eq!(Rotation::try_from(u8::from(rotation)).unwrap(), rotation);
        }
        assert_eq!(
            Rotation::try_from(4).unwrap_err().to_string(),
            "rotation must be 0-3 quarter turns, but was 4"
        );
        assert!(Rotation::try_from(255).is_err());
    }

    #[test]
    fn test_rotation_matrices() {
        let v = Vector2::new(3.0, 1.0);
        let expected = [
            (Rotation::None, Vector2::new(3.0, 1.0)),
            (Rotation::Quarter, Vector2::new(-1.0, 3.0)),
            (Rotation::Half, Vector2::new(-3.0, -1.0)),
            (Rotation::ThreeQuarter, Vector2::new(1.0, -3.0)),
        ];
        for &(rotation, inverted) in expected.iter() {
            assert_eq!(rotation.inverse_matrix() * v, inverted, "{}", rotation);
            assert_eq!(rotation.forward_matrix() * inverted, v, "{}", rotation);
        }
    }

    #[test]
    fn test_rotation_serde() {
        assert_tokens(&Rotation::Half, &[Token::U8(2)]);
        assert_de_tokens_error::<Rotation>(
            &[Token::U8(4)],
            "rotation must be 0-3 quarter turns, but was 4",
        );
    }

    #[test]
    fn test_viewport_validation() {
        let focus = ContinuousMapCoordinate::new(0.0, 0.0);
        let bounds = ScreenRect::new(0.0, 0.0, 800.0, 600.0);
        assert!(Viewport::new(
            focus,
            bounds,
            TileSize::new(64, 32),
            Rotation::None
        )
        .is_ok());
        assert!(Viewport::new(
            focus,
            bounds,
            TileSize::new(0, 32),
            Rotation::None
        )
        .is_err());
        assert!(Viewport::new(
            focus,
            ScreenRect::new(0.0, 0.0, 800.0, -1.0),
            TileSize::new(64, 32),
            Rotation::Quarter
        )
        .is_err());
    }
}
