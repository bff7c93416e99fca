//! Place a popup next to an anchor without leaving the viewport.
//!
//! The caller lists the anchor sides it would like the overlay on, in order.
//! [`place`] takes the first side where the overlay fits along that side's
//! axis, then lines it up with the anchor on the other axis: centered when
//! possible, edge-aligned otherwise. The result is an offset from the
//! overlay's current origin, or [`PlacementResult::NoFit`].
//!
//! ```
//! use glam::{DVec2, dvec2};
//! use popplace::{PlacementRequest, Rect, Side, place};
//!
//! let request = PlacementRequest::new(
//!     Rect::new(100.0, 100.0, 50.0, 50.0),
//!     DVec2::ZERO,
//!     dvec2(200.0, 80.0),
//!     Rect::new(0.0, 0.0, 400.0, 300.0),
//!     [Side::Bottom, Side::Right],
//! )
//! .with_margin(8.0);
//!
//! let result = place(&request)?;
//! assert_eq!(result.side(), Some(Side::Bottom));
//! assert_eq!(result.horizontal_offset(), Some(25.0));
//! assert_eq!(result.vertical_offset(), Some(158.0));
//! # Ok::<(), popplace::PlacementError>(())
//! ```

pub mod align;
pub mod defaults;
pub mod engine;
pub mod errors;
pub mod host;
pub mod log;
pub mod request;
pub mod scenario;
pub mod types;

pub use align::{AxisAlignment, resolve_alignment};
pub use engine::place;
pub use errors::{PlacementError, ScenarioError};
pub use host::{Overlay, try_show_near};
pub use request::{Placement, PlacementOptions, PlacementRequest, PlacementResult};
pub use scenario::{Expectation, Scenario};
pub use types::{Axis, Rect, Side};
