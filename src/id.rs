//! Identifier allocation: process-unique string tokens for view nodes.
//!
//! Every node receives an [`Identifier`] when it is constructed. Interactive
//! controls use it to name their handler in the generated script, so two
//! nodes of one compilation must never share a token.

use std::collections::HashSet;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default prefix prepended to every allocated identifier.
pub const DEFAULT_PREFIX: &str = "a";

/// Default number of distinct identifiers an allocator can hand out.
pub const DEFAULT_SPACE: u32 = 1_000_000;

// ---------------------------------------------------------------------------
// Identifier
// ---------------------------------------------------------------------------

/// A stable, unique token naming one view node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Wrap an existing token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// IdError
// ---------------------------------------------------------------------------

/// Errors raised by [`IdAllocator::allocate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("identifier space exhausted: all {space} identifiers have been issued")]
    Exhausted { space: u32 },
}

// ---------------------------------------------------------------------------
// IdStrategy
// ---------------------------------------------------------------------------

/// How candidate identifiers are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    /// Draw candidates uniformly from the space, retrying on collision.
    ///
    /// `None` seeds from OS entropy; a fixed seed gives reproducible output.
    Random { seed: Option<u64> },
    /// Issue `0, 1, 2, ...` in order. Used where output must be predictable.
    Sequential,
}

impl Default for IdStrategy {
    fn default() -> Self {
        IdStrategy::Random { seed: None }
    }
}

enum Source {
    Random(StdRng),
    Sequential(u32),
}

// ---------------------------------------------------------------------------
// IdAllocator
// ---------------------------------------------------------------------------

/// Issues identifiers that are unique among everything this allocator has issued.
///
/// One allocator belongs to one compilation run; runs never share state.
pub struct IdAllocator {
    prefix: String,
    space: u32,
    source: Source,
    issued: HashSet<u32>,
}

impl IdAllocator {
    /// Create an allocator with the default prefix and space.
    pub fn new(strategy: IdStrategy) -> Self {
        Self::with_space(strategy, DEFAULT_PREFIX, DEFAULT_SPACE)
    }

    /// Create an allocator issuing `prefix + n` for `n` in `0..space`.
    pub fn with_space(strategy: IdStrategy, prefix: impl Into<String>, space: u32) -> Self {
        let source = match strategy {
            IdStrategy::Random { seed: Some(seed) } => Source::Random(StdRng::seed_from_u64(seed)),
            IdStrategy::Random { seed: None } => Source::Random(StdRng::from_entropy()),
            IdStrategy::Sequential => Source::Sequential(0),
        };
        Self {
            prefix: prefix.into(),
            space,
            source,
            issued: HashSet::new(),
        }
    }

    /// Allocate a fresh identifier.
    ///
    /// Random candidates that collide with an issued one are redrawn. Once the
    /// whole space is used up the allocator reports exhaustion instead of
    /// drawing forever.
    pub fn allocate(&mut self) -> Result<Identifier, IdError> {
        if self.issued.len() as u64 >= u64::from(self.space) {
            return Err(IdError::Exhausted { space: self.space });
        }

        let value = match &mut self.source {
            Source::Random(rng) => loop {
                let candidate = rng.gen_range(0..self.space);
                if !self.issued.contains(&candidate) {
                    break candidate;
                }
            },
            Source::Sequential(next) => {
                let candidate = *next;
                *next += 1;
                candidate
            }
        };

        self.issued.insert(value);
        Ok(Identifier(format!("{}{}", self.prefix, value)))
    }

    /// Number of identifiers issued so far.
    pub fn issued(&self) -> usize {
        self.issued.len()
    }

    /// Size of the candidate space.
    pub fn space(&self) -> u32 {
        self.space
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}

impl fmt::Debug for IdAllocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdAllocator")
            .field("prefix", &self.prefix)
            .field("space", &self.space)
            .field("issued", &self.issued.len())
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
