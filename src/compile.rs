//! Compiler: configuration plus the build-then-render entry point.
//!
//! [`Compiler`] ties the construction phase and the renderer together. Each
//! call to [`Compiler::build`] or [`Compiler::compile`] gets its own
//! allocator and collection stack, so one compiler can serve many runs,
//! including concurrent ones.

use crate::build::{BuildError, ViewBuilder};
use crate::id::{IdAllocator, IdStrategy, DEFAULT_PREFIX, DEFAULT_SPACE};
use crate::render::{RenderConfig, RenderOutput, Renderer};
use crate::view::tree::ViewTree;

// ---------------------------------------------------------------------------
// CompileConfig
// ---------------------------------------------------------------------------

/// Configuration for a compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileConfig {
    /// How node identifiers are generated.
    pub id_strategy: IdStrategy,
    /// Prefix of every identifier.
    pub id_prefix: String,
    /// Number of distinct identifiers available per run.
    pub id_space: u32,
    /// Output formatting.
    pub render: RenderConfig,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::default(),
            id_prefix: DEFAULT_PREFIX.to_owned(),
            id_space: DEFAULT_SPACE,
            render: RenderConfig::default(),
        }
    }
}

impl CompileConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier strategy (builder).
    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }

    /// Use random identifiers from a fixed seed (builder).
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_id_strategy(IdStrategy::Random { seed: Some(seed) })
    }

    /// Use sequential identifiers (builder).
    pub fn sequential_ids(self) -> Self {
        self.with_id_strategy(IdStrategy::Sequential)
    }

    /// Set the identifier prefix (builder).
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Set the identifier space (builder).
    pub fn with_id_space(mut self, space: u32) -> Self {
        self.id_space = space;
        self
    }

    /// Set markup/script indentation (builder).
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.render.indent = indent;
        self
    }

    /// Set the amount rendered for default padding (builder).
    pub fn with_default_padding(mut self, padding: u32) -> Self {
        self.render.default_padding = padding;
        self
    }
}

// ---------------------------------------------------------------------------
// Compilation
// ---------------------------------------------------------------------------

/// A finished run: the tree and its rendered artifacts.
#[derive(Debug)]
pub struct Compilation {
    pub tree: ViewTree,
    pub output: RenderOutput,
}

impl Compilation {
    pub fn markup(&self) -> &str {
        &self.output.markup
    }

    pub fn script(&self) -> &str {
        &self.output.script
    }
}

// ---------------------------------------------------------------------------
// Compiler
// ---------------------------------------------------------------------------

/// Evaluates builder programs and renders the resulting trees.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    config: CompileConfig,
    renderer: Renderer,
}

impl Compiler {
    pub fn new(config: CompileConfig) -> Self {
        let renderer = Renderer::new(config.render.clone());
        Self { config, renderer }
    }

    pub fn config(&self) -> &CompileConfig {
        &self.config
    }

    /// A fresh builder context for one run.
    pub fn builder(&self) -> ViewBuilder {
        ViewBuilder::with_allocator(IdAllocator::with_space(
            self.config.id_strategy,
            self.config.id_prefix.clone(),
            self.config.id_space,
        ))
    }

    /// Evaluate `program` and return the finished tree.
    pub fn build(&self, program: impl FnOnce(&mut ViewBuilder)) -> Result<ViewTree, BuildError> {
        let mut builder = self.builder();
        program(&mut builder);
        builder.finish()
    }

    /// Render a finished tree. May be called any number of times.
    pub fn render(&self, tree: &ViewTree) -> RenderOutput {
        self.renderer.render(tree)
    }

    /// Build and render in one step.
    pub fn compile(
        &self,
        program: impl FnOnce(&mut ViewBuilder),
    ) -> Result<Compilation, BuildError> {
        let tree = self.build(program)?;
        let output = self.render(&tree);
        Ok(Compilation { tree, output })
    }
}

/// Compile `program` with the default configuration.
pub fn compile(program: impl FnOnce(&mut ViewBuilder)) -> Result<Compilation, BuildError> {
    Compiler::default().compile(program)
}
