//! Environment propagation: inheritable style values resolved top-down.
//!
//! A node may declare a value for any [`EnvKey`]; descendants that do not
//! declare the key inherit the nearest ancestor's value, falling back to the
//! key's default token. Resolution happens at render time and never writes
//! back into the tree.

pub mod key;
pub mod resolve;

pub use key::{EnvFrame, EnvKey, DEFAULT_TOKEN};
pub use resolve::{resolve, style_name, Environment};
