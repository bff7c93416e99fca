//! Default settings and stock side-preference orders

use crate::types::Side;

/// Gap between anchor and overlay when the caller does not pick one.
pub const MARGIN: f64 = 10.0;
pub const OVERFLOW_ALLOWED: bool = false;

pub const TOP_BOTTOM_LEFT: &[Side] = &[Side::Top, Side::Bottom, Side::Left];
pub const TOP_BOTTOM_LEFT_RIGHT: &[Side] = &[Side::Top, Side::Bottom, Side::Left, Side::Right];
pub const LEFT_ONLY: &[Side] = &[Side::Left];
/// Below the anchor, else to its right. Typical for a button's dropdown.
pub const BOTTOM_RIGHT: &[Side] = &[Side::Bottom, Side::Right];
