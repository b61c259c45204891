//! Construction phase: the collection stack and the builder context that a
//! builder program is evaluated against.

pub mod builder;
pub mod collector;

pub use builder::{BuildError, ViewBuilder};
pub use collector::{CaptureError, CaptureToken, CollectionStack, Collector};
