//! Placement logging.
//!
//! With the `tracing` feature the engine and resolver log through `tracing`.
//! Without it, `debug!` and `trace!` expand to nothing so the placement path
//! stays pure arithmetic.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, trace};
