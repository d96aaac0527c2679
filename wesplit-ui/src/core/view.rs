//! Views: render functions over state cells

use crate::core::{BoxedWidget, State};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A screen whose widget tree is a function of its state cells
pub trait View: Send + Sync {
    /// Build the widget tree from the current state values
    fn body(&self) -> BoxedWidget;

    /// Register `invalidator` with every state cell `body` reads
    fn observe(&self, invalidator: &Invalidator);
}

/// Flag raised by state cells when the current build is stale
#[derive(Clone, Default)]
pub struct Invalidator {
    dirty: Arc<AtomicBool>,
}

impl Invalidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invalidate(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    /// Clear the flag, returning whether it was set
    pub fn take(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }

    /// Subscribe this invalidator to `state`
    pub fn watch<T: Clone + Send + Sync + 'static>(&self, state: &State<T>) {
        let invalidator = self.clone();
        state.subscribe(move || invalidator.invalidate());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_marks_dirty_on_mutation() {
        let invalidator = Invalidator::new();
        let count = State::new(0);
        invalidator.watch(&count);

        assert!(!invalidator.take());
        count.update(|c| *c += 1);
        assert!(invalidator.take());
        assert!(!invalidator.take());
    }
}
