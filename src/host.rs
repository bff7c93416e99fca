//! Applying a placement to a live overlay.
//!
//! The UI toolkit stays on the other side of the [`Overlay`] trait: it
//! reports where the overlay is and how large it may get, and accepts the
//! offsets and the open flag back.

use glam::DVec2;

use crate::engine::place;
use crate::errors::PlacementError;
use crate::request::{PlacementOptions, PlacementRequest, PlacementResult};
use crate::types::{Rect, Side};

/// A floating element that can be offset and opened.
pub trait Overlay {
    /// Current origin in root coordinates.
    fn origin(&self) -> DVec2;

    /// Maximum width and height. Must be finite and positive.
    fn max_size(&self) -> DVec2;

    /// Move the overlay by `offset` from its current origin.
    fn set_offset(&mut self, offset: DVec2);

    fn set_open(&mut self, open: bool);
}

/// Show `overlay` next to `anchor`, trying `sides` in order.
///
/// On success the offsets are written and the overlay is opened. When no
/// side fits, the overlay is left untouched and the caller decides what to
/// do instead.
pub fn try_show_near<O: Overlay + ?Sized>(
    overlay: &mut O,
    anchor: Rect,
    viewport: Rect,
    sides: &[Side],
    options: PlacementOptions,
) -> Result<PlacementResult, PlacementError> {
    let request = PlacementRequest::new(
        anchor,
        overlay.origin(),
        overlay.max_size(),
        viewport,
        sides,
    )
    .with_options(options);

    let result = place(&request)?;
    if let PlacementResult::Placed(placement) = result {
        overlay.set_offset(placement.offset);
        overlay.set_open(true);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;
    use glam::dvec2;

    #[derive(Debug, Default)]
    struct FakeOverlay {
        origin: DVec2,
        max: DVec2,
        offset: Option<DVec2>,
        open: bool,
    }

    impl Overlay for FakeOverlay {
        fn origin(&self) -> DVec2 {
            self.origin
        }

        fn max_size(&self) -> DVec2 {
            self.max
        }

        fn set_offset(&mut self, offset: DVec2) {
            self.offset = Some(offset);
        }

        fn set_open(&mut self, open: bool) {
            self.open = open;
        }
    }

    fn overlay(max: DVec2) -> FakeOverlay {
        FakeOverlay {
            max,
            ..Default::default()
        }
    }

    #[test]
    fn opens_overlay_at_computed_offset() {
        let mut popup = overlay(dvec2(200.0, 80.0));
        let result = try_show_near(
            &mut popup,
            Rect::new(100.0, 100.0, 50.0, 50.0),
            Rect::new(0.0, 0.0, 400.0, 300.0),
            defaults::BOTTOM_RIGHT,
            PlacementOptions::default().margin(8.0),
        )
        .unwrap();

        assert_eq!(result.side(), Some(Side::Bottom));
        assert_eq!(popup.offset, Some(dvec2(25.0, 158.0)));
        assert!(popup.open);
    }

    #[test]
    fn leaves_overlay_alone_when_nothing_fits() {
        let mut popup = overlay(dvec2(500.0, 80.0));
        let result = try_show_near(
            &mut popup,
            Rect::new(0.0, 0.0, 20.0, 20.0),
            Rect::new(0.0, 0.0, 400.0, 300.0),
            defaults::LEFT_ONLY,
            PlacementOptions::default(),
        )
        .unwrap();

        assert_eq!(result, PlacementResult::NoFit);
        assert_eq!(popup.offset, None);
        assert!(!popup.open);
    }

    #[test]
    fn unset_max_size_is_an_error() {
        let mut popup = overlay(dvec2(f64::INFINITY, f64::INFINITY));
        let err = try_show_near(
            &mut popup,
            Rect::new(100.0, 100.0, 50.0, 50.0),
            Rect::new(0.0, 0.0, 400.0, 300.0),
            defaults::TOP_BOTTOM_LEFT_RIGHT,
            PlacementOptions::default(),
        )
        .unwrap_err();

        assert!(matches!(err, PlacementError::InvalidOverlaySize { .. }));
        assert!(!popup.open);
    }

    #[test]
    fn works_through_trait_object() {
        let mut popup = overlay(dvec2(60.0, 30.0));
        popup.origin = dvec2(5.0, 5.0);
        let dyn_popup: &mut dyn Overlay = &mut popup;
        let result = try_show_near(
            dyn_popup,
            Rect::new(150.0, 110.0, 50.0, 40.0),
            Rect::new(0.0, 0.0, 400.0, 300.0),
            defaults::TOP_BOTTOM_LEFT,
            PlacementOptions::default(),
        )
        .unwrap();

        // Top: 105 - 30 - 10, centered x: 145 - (60 - 50) / 2
        assert_eq!(result.side(), Some(Side::Top));
        assert_eq!(popup.offset, Some(dvec2(140.0, 65.0)));
    }
}
