use anyhow::anyhow;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Debug, Display},
    ops,
};

/// A type of value that we can create ranges of, where a range has a min and
/// max. Map cells use `i32` ranges, fractional positions use `f64`.
pub trait Rangeable:
    Copy
    + Debug
    + Display
    + PartialOrd
    + ops::Add<Self, Output = Self>
    + ops::Sub<Self, Output = Self>
{
    /// Wrap `value` into `[lower, upper)`. `upper` must be greater than
    /// `lower`.
    fn wrap_between(value: Self, lower: Self, upper: Self) -> Self;
}

impl Rangeable for i32 {
    fn wrap_between(value: Self, lower: Self, upper: Self) -> Self {
        // Widen first, the offset and span of an i32 range don't always fit
        // in an i32. The result is in [lower, upper) so it fits again.
        let lower = i64::from(lower);
        let span = i64::from(upper) - lower;
        ((i64::from(value) - lower).rem_euclid(span) + lower) as i32
    }
}

impl Rangeable for f64 {
    fn wrap_between(value: Self, lower: Self, upper: Self) -> Self {
        let span = upper - lower;
        // Rust's % is a remainder, not a modulus, so for values below the
        // range it comes out negative. Adding the span once and taking the
        // remainder again pulls it back into [0, span)
        ((value - lower) % span + span) % span + lower
    }
}

/// A range between two numeric values, inclusive on both ends. The two bounds
/// can be given in either order; [NumRange::lower] and [NumRange::upper] always
/// return them sorted.
#[derive(Copy, Clone, Debug, Display, PartialEq, Serialize, Deserialize)]
#[display(fmt = "[{}, {}]", min, max)]
pub struct NumRange<T: Rangeable> {
    pub min: T,
    pub max: T,
}

impl<T: Rangeable> NumRange<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// The smaller of the two bounds
    pub fn lower(&self) -> T {
        if self.max < self.min {
            self.max
        } else {
            self.min
        }
    }

    /// The larger of the two bounds
    pub fn upper(&self) -> T {
        if self.max < self.min {
            self.min
        } else {
            self.max
        }
    }

    /// Upper minus lower. Never negative.
    pub fn span(&self) -> T {
        self.upper() - self.lower()
    }

    /// Check if a value is in this range. Ranges are inclusive on both ends.
    pub fn contains(&self, value: T) -> bool {
        self.lower() <= value && value <= self.upper()
    }

    /// Force a value into this range. If it's already in the range, return
    /// that value. If it's outside the range, return the bound (lower or upper)
    /// that's closest to the value.
    pub fn clamp(&self, value: T) -> T {
        if value < self.lower() {
            self.lower()
        } else if value > self.upper() {
            self.upper()
        } else {
            value
        }
    }

    /// Wrap a value around this range, as if both ends were glued together.
    /// Unlike [Self::contains], this treats the range as half-open: the upper
    /// bound wraps back around to the lower bound, so the output is always in
    /// `[lower, upper)`.
    ///
    /// The span must be non-zero, see [Self::ensure_wrappable]. Calling this on
    /// a zero-span range divides by zero. Integer ranges work all the way out
    /// to the ends of `i32`.
    pub fn wrap(&self, value: T) -> T {
        T::wrap_between(value, self.lower(), self.upper())
    }

    /// Check that this range can be used for wrapping, i.e. that its span is
    /// non-zero. Returns an error if it can't.
    pub fn ensure_wrappable(&self) -> anyhow::Result<()> {
        if self.upper() > self.lower() {
            Ok(())
        } else {
            Err(anyhow!("wrap range {} must have a non-zero span", self))
        }
    }
}
