//! Nested conditional blocks.
//!
//! The root context is always active and never closes. A block keeps the
//! activation it was opened with until it is closed.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    pub id: usize,
    pub active: bool,
}

#[derive(Debug)]
pub struct ContextStack {
    current: Context,
    parents: Vec<Context>,
    next_id: usize,
}

impl Default for ContextStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextStack {
    pub fn new() -> Self {
        Self {
            current: Context { id: 0, active: true },
            parents: Vec::new(),
            next_id: 1,
        }
    }

    pub fn current(&self) -> Context {
        self.current
    }

    pub fn is_active(&self) -> bool {
        self.current.active
    }

    /// Number of open blocks above the root.
    pub fn depth(&self) -> usize {
        self.parents.len()
    }

    /// Enter a new block whose activation is `conditional_result`.
    pub fn open(&mut self, conditional_result: bool) -> Context {
        let child = Context {
            id: self.next_id,
            active: conditional_result,
        };
        self.next_id += 1;

        self.parents.push(self.current);
        self.current = child;

        debug!(
            "GScript CNTX: <--- Enter [{}] depth {} - Activated: {}",
            child.id,
            self.depth(),
            child.active
        );
        child
    }

    /// Leave the current block and return to its parent.
    /// Returns `None` when only the root is open.
    pub fn close(&mut self) -> Option<Context> {
        let parent = self.parents.pop()?;
        let closed = std::mem::replace(&mut self.current, parent);

        debug!(
            "GScript CNTX: ---> Close [{}], return to [{}] - Activated: {}",
            closed.id, parent.id, parent.active
        );
        Some(closed)
    }
}
