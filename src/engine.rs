//! Side placement: try each preferred side of the anchor in order and keep
//! the first one where the overlay fits on both axes.

use glam::DVec2;

use crate::align::AxisAlignment;
use crate::errors::PlacementError;
use crate::log::{debug, trace};
use crate::request::{Placement, PlacementRequest, PlacementResult};
use crate::types::Side;

/// Request geometry translated so the viewport starts at `(0, 0)`.
///
/// Offsets are differences of coordinates, so they are the same in either
/// space.
struct LocalFrame {
    overlay: DVec2,
    anchor_origin: DVec2,
    anchor_size: DVec2,
    overlay_size: DVec2,
    viewport_size: DVec2,
    distance: DVec2,
}

impl LocalFrame {
    fn new(request: &PlacementRequest) -> Self {
        let shift = request.viewport.origin;
        Self {
            overlay: request.overlay_origin - shift,
            anchor_origin: request.anchor.origin - shift,
            anchor_size: request.anchor.size,
            overlay_size: request.overlay_max_size,
            viewport_size: request.viewport.size,
            distance: request.distance(),
        }
    }

    /// Main-axis offset that puts the overlay `margin` away from `side` of the
    /// anchor.
    fn main_offset(&self, side: Side, margin: f64) -> f64 {
        let axis = side.axis();
        let distance = axis.of(self.distance);
        if side.is_leading() {
            distance - axis.of(self.overlay_size) - margin
        } else {
            distance + axis.of(self.anchor_size) + margin
        }
    }

    /// Only the edge facing away from the anchor can leave the viewport.
    fn main_fits(&self, side: Side, offset: f64) -> bool {
        let axis = side.axis();
        let start = axis.of(self.overlay) + offset;
        if side.is_leading() {
            start >= 0.0
        } else {
            start + axis.of(self.overlay_size) <= axis.of(self.viewport_size)
        }
    }

    fn cross_alignment(&self, side: Side, overflow_allowed: bool) -> AxisAlignment {
        let cross = side.axis().cross();
        AxisAlignment {
            popup_coord: cross.of(self.overlay),
            anchor_coord: cross.of(self.anchor_origin),
            distance: cross.of(self.distance),
            popup_extent: cross.of(self.overlay_size),
            anchor_extent: cross.of(self.anchor_size),
            viewport_extent: cross.of(self.viewport_size),
            overflow_allowed,
        }
    }
}

/// Place the overlay against the first preferred side that fits.
///
/// The main axis of a side must always fit inside the viewport. The cross
/// axis is centered on the anchor, or edge-aligned when centering would leave
/// the viewport, or centered regardless when overflow is allowed. A side whose
/// cross axis cannot be resolved is skipped like one whose main axis does not
/// fit.
///
/// Returns `Err` only for malformed requests; "no side fits" is
/// [`PlacementResult::NoFit`].
pub fn place(request: &PlacementRequest) -> Result<PlacementResult, PlacementError> {
    request.validate()?;

    let frame = LocalFrame::new(request);
    let options = request.options;

    for (index, &side) in request.sides.iter().enumerate() {
        if request.sides[..index].contains(&side) {
            continue;
        }

        let main = frame.main_offset(side, options.margin);
        if !frame.main_fits(side, main) {
            trace!(%side, offset = main, "main axis leaves viewport");
            continue;
        }

        let Some(cross) = frame
            .cross_alignment(side, options.overflow_allowed)
            .resolve()
        else {
            trace!(%side, offset = main, "no cross-axis alignment fits");
            continue;
        };

        let offset = side.axis().compose(main, cross);
        debug!(%side, x = offset.x, y = offset.y, "placed overlay");
        return Ok(PlacementResult::Placed(Placement { side, offset }));
    }

    debug!(sides = ?request.sides, "no preferred side fits");
    Ok(PlacementResult::NoFit)
}
