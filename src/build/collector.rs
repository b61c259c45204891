//! Collection stack: attributes freshly constructed nodes to the container
//! whose content callback is currently running.
//!
//! Each open capture level owns its own [`Collector`]. Opening a level parks
//! the enclosing level's collector and installs an empty one; closing it
//! drains the installed collector and restores the parked one. A nested
//! container therefore never sees its parent's siblings, and nodes created
//! after it closes land back at the outer level.

use tracing::trace;

use crate::view::node::NodeId;

// ---------------------------------------------------------------------------
// CaptureError
// ---------------------------------------------------------------------------

/// Structural errors from unbalanced or misdirected capture calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaptureError {
    #[error("end_capture called with no capture open")]
    NotCapturing,
    #[error("unbalanced capture: closing level {expected} while level {found} is innermost")]
    Unbalanced { expected: usize, found: usize },
    #[error("{depth} capture level(s) still open at end of build")]
    Unclosed { depth: usize },
    #[error("captured nodes cannot be attached to node {owner:?}")]
    InvalidParent { owner: String },
}

// ---------------------------------------------------------------------------
// Collector
// ---------------------------------------------------------------------------

/// Ordered buffer of the nodes constructed directly at one capture level.
#[derive(Debug, Default)]
pub struct Collector {
    nodes: Vec<NodeId>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: NodeId) {
        self.nodes.push(id);
    }

    /// Take every collected node, leaving the collector empty.
    pub fn drain(&mut self) -> Vec<NodeId> {
        std::mem::take(&mut self.nodes)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// ---------------------------------------------------------------------------
// CaptureToken
// ---------------------------------------------------------------------------

/// Proof of an open capture level, handed back to [`CollectionStack::end_capture`].
#[must_use = "an open capture must be closed with end_capture"]
#[derive(Debug, PartialEq, Eq)]
pub struct CaptureToken {
    depth: usize,
}

impl CaptureToken {
    /// Nesting depth of the level this token opened (1 for the outermost).
    pub fn depth(&self) -> usize {
        self.depth
    }
}

// ---------------------------------------------------------------------------
// CollectionStack
// ---------------------------------------------------------------------------

/// Per-compilation nesting counter plus the current and parked collectors.
#[derive(Debug, Default)]
pub struct CollectionStack {
    depth: usize,
    current: Option<Collector>,
    parked: Vec<Option<Collector>>,
}

impl CollectionStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open capture levels.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether a capture level is open.
    pub fn is_capturing(&self) -> bool {
        self.depth > 0
    }

    /// Open a new level: park the current collector and install an empty one.
    pub fn begin_capture(&mut self) -> CaptureToken {
        self.parked.push(self.current.take());
        self.depth += 1;
        self.current = Some(Collector::new());
        trace!(depth = self.depth, "capture begin");
        CaptureToken { depth: self.depth }
    }

    /// Record a freshly constructed node at the innermost open level.
    ///
    /// Returns `false` when no level is open: the node is top-level.
    pub fn collect(&mut self, id: NodeId) -> bool {
        if self.depth == 0 {
            return false;
        }
        match self.current.as_mut() {
            Some(collector) => {
                collector.push(id);
                true
            }
            None => false,
        }
    }

    /// Close the innermost level and return the nodes collected in it.
    ///
    /// `token` must come from the matching [`begin_capture`](Self::begin_capture).
    /// Closing any other level leaves the stack untouched and reports
    /// [`CaptureError::Unbalanced`].
    pub fn end_capture(&mut self, token: CaptureToken) -> Result<Vec<NodeId>, CaptureError> {
        if self.depth == 0 {
            return Err(CaptureError::NotCapturing);
        }
        if token.depth != self.depth {
            return Err(CaptureError::Unbalanced {
                expected: token.depth,
                found: self.depth,
            });
        }

        let children = self
            .current
            .take()
            .map(|mut collector| collector.drain())
            .unwrap_or_default();
        self.depth -= 1;
        self.current = self.parked.pop().flatten();
        trace!(depth = self.depth, children = children.len(), "capture end");
        Ok(children)
    }

    /// Check that every opened level has been closed.
    pub fn finish(&self) -> Result<(), CaptureError> {
        if self.depth == 0 {
            Ok(())
        } else {
            Err(CaptureError::Unclosed { depth: self.depth })
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use slotmap::SlotMap;

    use super::*;

    fn ids(n: usize) -> Vec<NodeId> {
        let mut map: SlotMap<NodeId, ()> = SlotMap::with_key();
        (0..n).map(|_| map.insert(())).collect()
    }

    #[test]
    fn collector_push_and_drain() {
        let n = ids(2);
        let mut c = Collector::new();
        c.push(n[0]);
        c.push(n[1]);
        assert_eq!(c.len(), 2);
        assert_eq!(c.drain(), n);
        assert!(c.is_empty());
    }

    #[test]
    fn top_level_nodes_are_not_collected() {
        let n = ids(1);
        let mut stack = CollectionStack::new();
        assert!(!stack.collect(n[0]));
        assert!(!stack.is_capturing());
    }

    #[test]
    fn single_level_collects_in_order() {
        let n = ids(3);
        let mut stack = CollectionStack::new();
        let token = stack.begin_capture();
        assert_eq!(token.depth(), 1);
        for &id in &n {
            assert!(stack.collect(id));
        }
        assert_eq!(stack.end_capture(token).unwrap(), n);
        assert_eq!(stack.depth(), 0);
        assert!(stack.finish().is_ok());
    }

    #[test]
    fn nested_levels_restore_outer_collector() {
        // outer: [a, inner, d]   inner: [b, c]
        let n = ids(5);
        let (a, inner, b, c, d) = (n[0], n[1], n[2], n[3], n[4]);
        let mut stack = CollectionStack::new();

        let outer_token = stack.begin_capture();
        stack.collect(a);
        stack.collect(inner);
        let inner_token = stack.begin_capture();
        stack.collect(b);
        stack.collect(c);
        assert_eq!(stack.end_capture(inner_token).unwrap(), vec![b, c]);
        stack.collect(d);
        assert_eq!(stack.end_capture(outer_token).unwrap(), vec![a, inner, d]);
    }

    #[test]
    fn empty_level_yields_no_children() {
        let mut stack = CollectionStack::new();
        let token = stack.begin_capture();
        assert!(stack.end_capture(token).unwrap().is_empty());
    }

    #[test]
    fn end_without_begin_fails() {
        let mut stack = CollectionStack::new();
        let token = stack.begin_capture();
        stack.end_capture(token).unwrap();
        let stray = CaptureToken { depth: 1 };
        assert_eq!(stack.end_capture(stray), Err(CaptureError::NotCapturing));
    }

    #[test]
    fn closing_outer_level_first_fails() {
        let mut stack = CollectionStack::new();
        let outer = stack.begin_capture();
        let _inner = stack.begin_capture();
        assert_eq!(
            stack.end_capture(outer),
            Err(CaptureError::Unbalanced {
                expected: 1,
                found: 2
            })
        );
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn finish_reports_open_levels() {
        let mut stack = CollectionStack::new();
        let _token = stack.begin_capture();
        assert_eq!(stack.finish(), Err(CaptureError::Unclosed { depth: 1 }));
    }
}
