//! Resolution of environment keys along a root-to-node path.

use super::key::{EnvFrame, EnvKey, DEFAULT_TOKEN};

/// Suffix marking a call-shaped style token (`PlainButtonStyle()`).
const CALL_MARKER: &str = "()";

/// Resolve `key` along `path`, ordered root first.
///
/// The frame closest to the end of the path that declares the key wins; if
/// none does, the key's default token is returned.
pub fn resolve<'a, I>(key: EnvKey, path: I) -> &'a str
where
    I: IntoIterator<Item = &'a EnvFrame>,
    I::IntoIter: DoubleEndedIterator,
{
    path.into_iter()
        .rev()
        .find_map(|frame| frame.get(key))
        .unwrap_or(key.default_token())
}

/// Turn a declared token into the style name the renderer emits.
///
/// A call-shaped token loses its trailing `()` and is otherwise kept as is,
/// so `default()` stays `default`. The bare default token maps to the key's
/// concrete default style. Anything else passes through unchanged.
pub fn style_name(key: EnvKey, token: &str) -> &str {
    if let Some(bare) = token.strip_suffix(CALL_MARKER) {
        bare
    } else if token == DEFAULT_TOKEN {
        key.default_style_name()
    } else {
        token
    }
}

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// Render-time stack of frames for the path currently being visited.
#[derive(Debug, Default)]
pub struct Environment<'a> {
    frames: Vec<&'a EnvFrame>,
}

impl<'a> Environment<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a node: its frame shadows everything pushed before it.
    pub fn push(&mut self, frame: &'a EnvFrame) {
        self.frames.push(frame);
    }

    /// Leave the most recently entered node.
    pub fn pop(&mut self) -> Option<&'a EnvFrame> {
        self.frames.pop()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Raw token for `key` at the current position.
    pub fn resolve(&self, key: EnvKey) -> &'a str {
        resolve(key, self.frames.iter().copied())
    }

    /// Normalized style name for `key` at the current position.
    pub fn style(&self, key: EnvKey) -> &'a str {
        style_name(key, self.resolve(key))
    }
}
