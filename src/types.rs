//! Geometry value types for placement.
//!
//! Everything here is a plain `Copy` value in one shared root coordinate
//! space (x grows right, y grows down). Sizes and points are `glam::DVec2`.

use std::fmt;
use std::str::FromStr;

use glam::{DVec2, dvec2};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when a positive value is required
    Zero,
    /// Value is negative when a non-negative value is required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Reject NaN and infinities.
#[inline]
pub fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Accept only finite values `>= 0`.
#[inline]
pub fn check_non_negative(val: f64) -> Result<f64, NumericError> {
    let val = check_finite(val)?;
    if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Accept only finite values `> 0`.
#[inline]
pub fn check_positive(val: f64) -> Result<f64, NumericError> {
    let val = check_non_negative(val)?;
    if val == 0.0 {
        Err(NumericError::Zero)
    } else {
        Ok(val)
    }
}

/// Horizontal or vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    #[inline]
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// The component of `v` along this axis.
    #[inline]
    pub fn of(self, v: DVec2) -> f64 {
        match self {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }

    /// Build a vector with `along` on this axis and `across` on the other one.
    #[inline]
    pub fn compose(self, along: f64, across: f64) -> DVec2 {
        match self {
            Axis::Horizontal => dvec2(along, across),
            Axis::Vertical => dvec2(across, along),
        }
    }
}

/// Edge of the anchor that the overlay is placed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Left, Side::Top, Side::Right, Side::Bottom];

    /// The main axis this side is resolved on.
    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Side::Left | Side::Right => Axis::Horizontal,
            Side::Top | Side::Bottom => Axis::Vertical,
        }
    }

    /// Left and Top put the overlay before the anchor on the main axis.
    #[inline]
    pub fn is_leading(self) -> bool {
        matches!(self, Side::Left | Side::Top)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a word is not one of `left`, `top`, `right`, `bottom`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown side: {0:?}")]
pub struct UnknownSide(pub String);

impl FromStr for Side {
    type Err = UnknownSide;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Side::Left),
            "top" => Ok(Side::Top),
            "right" => Ok(Side::Right),
            "bottom" => Ok(Side::Bottom),
            other => Err(UnknownSide(other.to_string())),
        }
    }
}

/// Axis-aligned rectangle: top-left origin plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: DVec2::new(x, y),
            size: DVec2::new(width, height),
        }
    }

    pub fn from_origin_size(origin: DVec2, size: DVec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.origin.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.origin.y
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.size.y
    }

    /// Top-left corner
    #[inline]
    pub fn min(&self) -> DVec2 {
        self.origin
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> DVec2 {
        self.origin + self.size
    }

    /// Leading coordinate on `axis`.
    #[inline]
    pub fn start(&self, axis: Axis) -> f64 {
        axis.of(self.origin)
    }

    /// Length on `axis`.
    #[inline]
    pub fn extent(&self, axis: Axis) -> f64 {
        axis.of(self.size)
    }

    pub fn translate(&self, by: DVec2) -> Rect {
        Rect::from_origin_size(self.origin + by, self.size)
    }

    /// True when `other` lies inside `self` on `axis` (edges inclusive).
    pub fn contains_on(&self, axis: Axis, other: &Rect) -> bool {
        let lo = axis.of(self.min());
        let hi = axis.of(self.max());
        axis.of(other.min()) >= lo && axis.of(other.max()) <= hi
    }

    /// True when `other` lies inside `self` on both axes.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.contains_on(Axis::Horizontal, other) && self.contains_on(Axis::Vertical, other)
    }

    pub fn is_finite(&self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}x{})",
            self.origin.x, self.origin.y, self.size.x, self.size.y
        )
    }
}
