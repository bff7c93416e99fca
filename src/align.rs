//! Cross-axis alignment of the overlay against the anchor.
//!
//! All coordinates are on one axis and measured in viewport-local space, so
//! the viewport spans `[0, viewport_extent]`.

use crate::log::trace;

/// One-axis alignment problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAlignment {
    /// Current overlay coordinate.
    pub popup_coord: f64,
    /// Anchor coordinate. Always `popup_coord + distance`.
    pub anchor_coord: f64,
    /// Anchor coordinate minus overlay coordinate.
    pub distance: f64,
    /// Overlay maximum length on this axis.
    pub popup_extent: f64,
    /// Anchor length on this axis.
    pub anchor_extent: f64,
    /// Viewport length on this axis.
    pub viewport_extent: f64,
    pub overflow_allowed: bool,
}

impl AxisAlignment {
    /// Offset that lines up the overlay's center with the anchor's center.
    #[inline]
    pub fn centered(&self) -> f64 {
        self.distance - (self.popup_extent - self.anchor_extent) / 2.0
    }

    /// Overlay leading edge on the anchor's leading edge.
    #[inline]
    pub fn leading_edge(&self) -> f64 {
        self.distance
    }

    /// Overlay trailing edge on the anchor's trailing edge.
    #[inline]
    pub fn trailing_edge(&self) -> f64 {
        self.distance - self.popup_extent + self.anchor_extent
    }

    #[inline]
    fn fits(&self, offset: f64) -> bool {
        self.starts_inside(offset) && self.ends_inside(offset)
    }

    #[inline]
    fn starts_inside(&self, offset: f64) -> bool {
        self.popup_coord + offset >= 0.0
    }

    #[inline]
    fn ends_inside(&self, offset: f64) -> bool {
        self.popup_coord + offset + self.popup_extent <= self.viewport_extent
    }

    /// Resolve the offset, or `None` when no alignment keeps the overlay in
    /// bounds.
    ///
    /// Order of preference: centered (always taken when overflow is allowed),
    /// then leading edges aligned, then trailing edges aligned. The two edge
    /// fallbacks only check the edge that moved away from the anchor; the
    /// other edge coincides with the anchor's, which is assumed to be inside
    /// the viewport.
    pub fn resolve(&self) -> Option<f64> {
        let centered = self.centered();
        if self.overflow_allowed || self.fits(centered) {
            trace!(
                offset = centered,
                overflow = self.overflow_allowed,
                "aligned centers"
            );
            return Some(centered);
        }

        let leading = self.leading_edge();
        if self.ends_inside(leading) {
            trace!(offset = leading, "aligned leading edges");
            return Some(leading);
        }

        let trailing = self.trailing_edge();
        if self.starts_inside(trailing) {
            trace!(offset = trailing, "aligned trailing edges");
            return Some(trailing);
        }

        trace!(
            anchor = self.anchor_coord,
            popup = self.popup_extent,
            viewport = self.viewport_extent,
            "no alignment fits"
        );
        None
    }
}

/// Free-function form of [`AxisAlignment::resolve`].
pub fn resolve_alignment(
    popup_coord: f64,
    anchor_coord: f64,
    distance: f64,
    popup_extent: f64,
    anchor_extent: f64,
    viewport_extent: f64,
    overflow_allowed: bool,
) -> Option<f64> {
    AxisAlignment {
        popup_coord,
        anchor_coord,
        distance,
        popup_extent,
        anchor_extent,
        viewport_extent,
        overflow_allowed,
    }
    .resolve()
}
