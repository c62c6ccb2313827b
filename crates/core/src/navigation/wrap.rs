use crate::{
    config::{Boundary, NavigatorMetadata},
    map::{Direction, MapCoordinate},
    navigation::{Navigation, Navigator, WrapIndicator},
    util::range::NumRange,
};

/// A boundary decorator that wraps coordinates around on one or both axes.
/// Movement is delegated to the inner navigator, then each wrapped axis of the
/// result is folded back into its range. Wrapping never fails, so the inner
/// navigator's success flag is passed through as is.
///
/// Wrap ranges are half-open: with a range of `[0, 100]`, moving east from
/// `99` lands on `0`.
#[derive(Clone, Debug)]
pub struct WrapNavigator<N> {
    inner: N,
    horizontal: Option<NumRange<i32>>,
    vertical: Option<NumRange<i32>>,
}

impl<N> WrapNavigator<N> {
    /// Wrap the inner navigator on whichever axes have a range. Returns an
    /// error if any of the given ranges has a zero span.
    pub fn new(
        inner: N,
        horizontal: Option<NumRange<i32>>,
        vertical: Option<NumRange<i32>>,
    ) -> anyhow::Result<Self> {
        for range in [horizontal, vertical].iter().flatten() {
            range.ensure_wrappable()?;
        }
        Ok(Self {
            inner,
            horizontal,
            vertical,
        })
    }

    /// Wrap the x axis only
    pub fn horizontal(inner: N, range: NumRange<i32>) -> anyhow::Result<Self> {
        Self::new(inner, Some(range), None)
    }

    /// Wrap the y axis only
    pub fn vertical(inner: N, range: NumRange<i32>) -> anyhow::Result<Self> {
        Self::new(inner, None, Some(range))
    }

    /// Wrap both axes
    pub fn both(
        inner: N,
        horizontal: NumRange<i32>,
        vertical: NumRange<i32>,
    ) -> anyhow::Result<Self> {
        Self::new(inner, Some(horizontal), Some(vertical))
    }

    pub fn inner(&self) -> &N {
        &self.inner
    }
}

/// Wrap a single axis value, returning the wrapped value and which way it
/// crossed the range
fn wrap_axis(range: &NumRange<i32>, value: i32) -> (i32, WrapIndicator) {
    (range.wrap(value), WrapIndicator::of(range, value))
}

impl<D: Direction, N: Navigator<D>> Navigator<D> for WrapNavigator<N> {
    fn metadata(&self) -> NavigatorMetadata {
        let metadata = self.inner.metadata();
        NavigatorMetadata {
            horizontal: self
                .horizontal
                .map(Boundary::Wrap)
                .or(metadata.horizontal),
            vertical: self.vertical.map(Boundary::Wrap).or(metadata.vertical),
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
            let (x, indicator) = wrap_axis(range, navigation.coordinate.x);
            navigation.coordinate.x = x;
            navigation.info.wrap_x = indicator;
        }
        if let Some(range) = &self.vertical {
            let (y, indicator) = wrap_axis(range, navigation.coordinate.y);
            navigation.coordinate.y = y;
            navigation.info.wrap_y = indicator;
        }
        navigation
    }
}
