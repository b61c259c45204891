//! Test helpers: tree outlines and deterministic compilation.
//!
//! Use [`outline`] to assert on the shape of a built tree without caring about
//! attributes, and [`compile_sequential`] to get predictable identifiers.

pub mod outline;

pub use outline::{compile_sequential, outline};
