//! # swiftweb
//!
//! Compiles SwiftUI-style view builder programs into web markup plus a
//! handler script.
//!
//! A program is a closure over a [`ViewBuilder`]. Container calls take a
//! content closure whose nodes are captured as that container's children;
//! leaf calls return a [`NodeMut`] for chained modifiers. The finished
//! [`ViewTree`] is rendered by a [`Renderer`], which resolves inherited
//! environment values (button style, date picker style) on the way down.
//!
//! ```ignore
//! use swiftweb::compile;
//!
//! let compiled = compile(|ui| {
//!     ui.vstack(|ui| {
//!         ui.text("Button Demo").font("largeTitle");
//!         ui.button("Sign in", "signIn");
//!     })
//!     .button_style("PlainButtonStyle()");
//! })?;
//! println!("{}", compiled.markup());
//! ```
//!
//! ## Core Systems
//!
//! - **[`id`]**: unique node identifiers, random or sequential
//! - **[`build`]**: collection stack and the builder context
//! - **[`view`]**: slotmap-backed view tree, node kinds, modifiers, queries
//! - **[`env`]**: inherited environment values and their resolution
//! - **[`render`]**: markup and script emission
//! - **[`compile`]**: configuration and the build-then-render entry point
//! - **[`testing`]**: outline and deterministic-compile helpers

// Foundation
pub mod id;

// Construction
pub mod build;
pub mod env;
pub mod view;

// Output
pub mod compile;
pub mod render;

// Test support
pub mod testing;

pub use build::{BuildError, CaptureError, ViewBuilder};
pub use compile::{compile, CompileConfig, Compilation, Compiler};
pub use env::EnvKey;
pub use id::{IdError, IdStrategy, Identifier};
pub use render::{RenderConfig, RenderOutput, Renderer};
pub use view::{NodeId, NodeMut, ViewKind, ViewNode, ViewTree};
