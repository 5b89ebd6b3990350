//! Design store with a bounded linear undo history.
//!
//! Every mutation goes through [`DesignStore::apply_change`], which pushes
//! the previous design onto the history before committing the next one.
//! Undo is single-step and is not itself undoable (no redo stack).

use std::collections::VecDeque;
use std::fmt;

use crate::design::Design;

/// Maximum number of snapshots retained. Oldest entries are evicted first.
pub const HISTORY_LIMIT: usize = 20;

/// A pending change to the design: a full replacement or a function of the
/// previous design.
pub enum DesignChange {
    Replace(Design),
    Update(Box<dyn FnOnce(&Design) -> Design>),
}

impl DesignChange {
    pub fn update(f: impl FnOnce(&Design) -> Design + 'static) -> Self {
        Self::Update(Box::new(f))
    }

    fn resolve(self, prev: &Design) -> Design {
        match self {
            Self::Replace(next) => next,
            Self::Update(f) => f(prev),
        }
    }
}

impl From<Design> for DesignChange {
    fn from(design: Design) -> Self {
        Self::Replace(design)
    }
}

impl fmt::Debug for DesignChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replace(_) => f.write_str("DesignChange::Replace"),
            Self::Update(_) => f.write_str("DesignChange::Update"),
        }
    }
}

/// Owns the current design and its undo history.
#[derive(Debug, Clone)]
pub struct DesignStore {
    current: Design,
    past: VecDeque<Design>,
}

impl DesignStore {
    pub fn new(initial: Design) -> Self {
        Self {
            current: initial,
            past: VecDeque::with_capacity(HISTORY_LIMIT),
        }
    }

    pub fn current(&self) -> &Design {
        &self.current
    }

    pub fn history_len(&self) -> usize {
        self.past.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Compute the next design, snapshot the previous one and commit.
    pub fn apply_change(&mut self, change: impl Into<DesignChange>) {
        let next = change.into().resolve(&self.current);
        let prev = std::mem::replace(&mut self.current, next);

        if self.past.len() == HISTORY_LIMIT {
            self.past.pop_front();
        }
        self.past.push_back(prev);

        tracing::debug!(history_len = self.past.len(), "Design change committed");
    }

    /// Clone the current design, mutate the clone and commit it.
    pub fn update(&mut self, mutate: impl FnOnce(&mut Design)) {
        let mut next = self.current.clone();
        mutate(&mut next);
        self.apply_change(next);
    }

    /// Restore the most recent snapshot. Returns `false` (and does nothing)
    /// when the history is empty.
    pub fn undo(&mut self) -> bool {
        match self.past.pop_back() {
            Some(prev) => {
                self.current = prev;
                tracing::debug!(history_len = self.past.len(), "Design change undone");
                true
            }
            None => false,
        }
    }
}

impl Default for DesignStore {
    fn default() -> Self {
        Self::new(Design::default())
    }
}
