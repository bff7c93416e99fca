//! Placement inputs and outputs.

use std::fmt;

use glam::DVec2;

use crate::defaults;
use crate::errors::PlacementError;
use crate::types::{Rect, Side, check_non_negative, check_positive};

/// Knobs that do not describe geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementOptions {
    /// Gap kept between the anchor edge and the overlay on the main axis.
    pub margin: f64,
    /// Let the cross axis use the centered offset even when it leaves the
    /// viewport. The main axis must always fit.
    pub overflow_allowed: bool,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            margin: defaults::MARGIN,
            overflow_allowed: defaults::OVERFLOW_ALLOWED,
        }
    }
}

impl PlacementOptions {
    pub fn margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn allow_overflow(mut self, allowed: bool) -> Self {
        self.overflow_allowed = allowed;
        self
    }
}

/// One placement problem, in root-relative coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRequest {
    pub anchor: Rect,
    /// Where the overlay currently sits. Returned offsets are relative to this.
    pub overlay_origin: DVec2,
    /// Maximum overlay width and height. Both must be finite and positive.
    pub overlay_max_size: DVec2,
    pub viewport: Rect,
    pub sides: Vec<Side>,
    pub options: PlacementOptions,
}

impl PlacementRequest {
    pub fn new(
        anchor: Rect,
        overlay_origin: DVec2,
        overlay_max_size: DVec2,
        viewport: Rect,
        sides: impl Into<Vec<Side>>,
    ) -> Self {
        Self {
            anchor,
            overlay_origin,
            overlay_max_size,
            viewport,
            sides: sides.into(),
            options: PlacementOptions::default(),
        }
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.options.margin = margin;
        self
    }

    pub fn with_overflow(mut self, allowed: bool) -> Self {
        self.options.overflow_allowed = allowed;
        self
    }

    pub fn with_options(mut self, options: PlacementOptions) -> Self {
        self.options = options;
        self
    }

    /// Anchor origin minus overlay origin. Positive x means the anchor is to
    /// the right of the overlay's current position.
    #[inline]
    pub fn distance(&self) -> DVec2 {
        self.anchor.origin - self.overlay_origin
    }

    /// Reject requests that are programming errors at the call site.
    pub fn validate(&self) -> Result<(), PlacementError> {
        check_positive(self.overlay_max_size.x).map_err(|reason| {
            PlacementError::InvalidOverlaySize {
                dimension: "width",
                value: self.overlay_max_size.x,
                reason,
            }
        })?;
        check_positive(self.overlay_max_size.y).map_err(|reason| {
            PlacementError::InvalidOverlaySize {
                dimension: "height",
                value: self.overlay_max_size.y,
                reason,
            }
        })?;
        if self.sides.is_empty() {
            return Err(PlacementError::EmptyPreferenceOrder);
        }
        check_non_negative(self.options.margin).map_err(|reason| PlacementError::InvalidMargin {
            value: self.options.margin,
            reason,
        })?;
        if !self.anchor.is_finite() {
            return Err(PlacementError::NonFiniteGeometry { field: "anchor" });
        }
        if !self.overlay_origin.is_finite() {
            return Err(PlacementError::NonFiniteGeometry {
                field: "overlay origin",
            });
        }
        if !self.viewport.is_finite() {
            return Err(PlacementError::NonFiniteGeometry { field: "viewport" });
        }
        for (field, rect) in [("anchor", &self.anchor), ("viewport", &self.viewport)] {
            for (dimension, value) in [("width", rect.width()), ("height", rect.height())] {
                check_non_negative(value).map_err(|reason| PlacementError::InvalidSize {
                    field,
                    dimension,
                    value,
                    reason,
                })?;
            }
        }
        Ok(())
    }
}

/// A side that fit, with the offsets to apply to the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub side: Side,
    /// Offset from the overlay's current origin.
    pub offset: DVec2,
}

impl Placement {
    #[inline]
    pub fn horizontal_offset(&self) -> f64 {
        self.offset.x
    }

    #[inline]
    pub fn vertical_offset(&self) -> f64 {
        self.offset.y
    }

    /// The overlay rectangle after the offsets are applied, at maximum size.
    pub fn overlay_bounds(&self, request: &PlacementRequest) -> Rect {
        Rect::from_origin_size(request.overlay_origin + self.offset, request.overlay_max_size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementResult {
    Placed(Placement),
    /// No preferred side fit on both axes. The caller picks its own fallback.
    NoFit,
}

impl PlacementResult {
    pub fn is_success(&self) -> bool {
        matches!(self, PlacementResult::Placed(_))
    }

    pub fn placement(&self) -> Option<&Placement> {
        match self {
            PlacementResult::Placed(p) => Some(p),
            PlacementResult::NoFit => None,
        }
    }

    pub fn side(&self) -> Option<Side> {
        self.placement().map(|p| p.side)
    }

    pub fn horizontal_offset(&self) -> Option<f64> {
        self.placement().map(Placement::horizontal_offset)
    }

    pub fn vertical_offset(&self) -> Option<f64> {
        self.placement().map(Placement::vertical_offset)
    }
}

/// Same words the scenario format uses: `placed bottom 25 158` or `none`.
impl fmt::Display for PlacementResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementResult::Placed(p) => write!(f, "placed {} {} {}", p.side, p.offset.x, p.offset.y),
            PlacementResult::NoFit => write!(f, "none"),
        }
    }
}
