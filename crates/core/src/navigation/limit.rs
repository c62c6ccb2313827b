use crate::{
    config::{Boundary, NavigatorMetadata},
    map::{Direction, MapCoordinate},
    navigation::{Navigation, Navigator},
    util::range::NumRange,
};

/// A boundary decorator that rejects moves off the edge of the map on one or
/// both axes. Limit ranges are inclusive on both ends.
///
/// A rejected move is not an error. The navigation comes back with
/// `success == false` and the matching `limited_x`/`limited_y` flag set, and
/// the coordinate is left **unclamped** so the caller can see where the move
/// would have gone.
#[derive(Clone, Debug)]
pub struct LimitNavigator<N> {
    inner: N,
    horizontal: Option<NumRange<i32>>,
    vertical: Option<NumRange<i32>>,
}

impl<N> LimitNavigator<N> {
    /// Limit the inner navigator on whichever axes have a range. A zero-span
    /// range is allowed, it just means there's exactly one valid value.
    pub fn new(
        inner: N,
        horizontal: Option<NumRange<i32>>,
        vertical: Option<NumRange<i32>>,
    ) -> Self {
        Self {
            inner,
            horizontal,
            vertical,
        }
    }

    /// Limit the x axis only
    pub fn horizontal(inner: N, range: NumRange<i32>) -> Self {
        Self::new(inner, Some(range), None)
    }

    /// Limit the y axis only
    pub fn vertical(inner: N, range: NumRange<i32>) -> Self {
        Self::new(inner, None, Some(range))
    }

    /// Limit both axes
    pub fn both(
        inner: N,
        horizontal: NumRange<i32>,
        vertical: NumRange<i32>,
    ) -> Self {
        Self::new(inner, Some(horizontal), Some(vertical))
    }

    pub fn inner(&self) -> &N {
        &self.inner
    }
}

impl<D: Direction, N: Navigator<D>> Navigator<D> for LimitNavigator<N> {
    fn metadata(&self) -> NavigatorMetadata {
        let metadata = self.inner.metadata();
        NavigatorMetadata {
            horizontal: self
                .horizontal
                .map(Boundary::Limit)
                .or(metadata.horizontal),
            vertical: self.vertical.map(Boundary::Limit).or(metadata.vertical),
            ..metadata
        }
    }

    fn navigate(
        &self,
        direction: D,
        origin: MapCoordinate,
        steps: i32,
    ) -> Navigation {
        let mut navigation = self.inner.navigate(direction, origin, steps);
        if let Some(range) = &self.horizontal {
            if !range.contains(navigation.coordinate.x) {
                navigation.info.limited_x = true;
                navigation.success = false;
            }
        }
        if let Some(range) = &self.vertical {
            if !range.contains(navigation.coordinate.y) {
                navigation.info.limited_y = true;
                navigation.success = false;
            }
        }
        navigation
    }
}
