//! Re-entrancy protection for evaluation passes

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{instrument, trace};

use crate::tree::ConditionForest;

/// Suppresses re-entrant runs of a piece of work.
///
/// [`enter`](ReentrancyGuard::enter) runs its closure unless a run started
/// through the same guard is already on the stack, in which case it returns
/// `None` without running anything. The flag clears when the run finishes,
/// even if the closure panics.
#[derive(Debug, Default)]
pub struct ReentrancyGuard {
    running: Cell<bool>,
}

impl ReentrancyGuard {
    /// Creates a guard with no run in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a guarded run is currently on the stack.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Runs `work` and returns its result, or `None` if a guarded run is
    /// already in progress.
    pub fn enter<R>(&self, work: impl FnOnce() -> R) -> Option<R> {
        if self.running.replace(true) {
            return None;
        }
        let _reset = ResetOnDrop(&self.running);
        Some(work())
    }
}

/// Clears the running flag when the guarded run returns or unwinds.
struct ResetOnDrop<'a>(&'a Cell<bool>);

impl Drop for ResetOnDrop<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// A shared handle to a forest whose passes never overlap.
///
/// Observers and predicates often want to request another pass, for example
/// after flipping the state their conditions read. Giving them a clone of the
/// handle makes that safe: a [`trigger`](GuardedForest::trigger) issued while
/// a pass is already running is dropped instead of recursing, and the
/// in-flight pass simply completes.
#[derive(Clone, Debug, Default)]
pub struct GuardedForest {
    inner: Rc<GuardedInner>,
}

#[derive(Debug, Default)]
struct GuardedInner {
    guard: ReentrancyGuard,
    forest: RefCell<ConditionForest>,
}

impl GuardedForest {
    /// Creates a handle around an empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already built forest.
    pub fn from_forest(forest: ConditionForest) -> Self {
        Self {
            inner: Rc::new(GuardedInner {
                guard: ReentrancyGuard::new(),
                forest: RefCell::new(forest),
            }),
        }
    }

    /// Runs one pass over the forest and reports whether it actually ran.
    ///
    /// Returns `false` when called from inside a running pass; the trigger is
    /// dropped and the outer pass continues undisturbed.
    #[instrument(level = "debug", skip(self))]
    pub fn trigger(&self) -> bool {
        let ran = self
            .inner
            .guard
            .enter(|| self.inner.forest.borrow_mut().evaluate_all())
            .is_some();
        if !ran {
            trace!("re-entrant trigger dropped");
        }
        ran
    }

    /// Gives mutable access to the forest, e.g. to add roots or observers.
    ///
    /// Panics if called from a predicate or observer while a pass is running
    /// on this handle; structure must not change mid-pass.
    pub fn edit<R>(&self, work: impl FnOnce(&mut ConditionForest) -> R) -> R {
        work(&mut self.inner.forest.borrow_mut())
    }
}
