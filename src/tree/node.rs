//! Condition node structure and the evaluation protocol

use smallvec::SmallVec;
use std::fmt;
use tracing::{instrument, trace};

/// Boxed predicate owned by a node; invoked at most once per pass.
pub type Predicate = Box<dyn FnMut() -> bool>;

/// Boxed observer owned by a node; invoked with the node's resolved boolean.
pub type Observer = Box<dyn FnMut(bool)>;

/// A single condition in a logic tree.
///
/// A node pairs a zero-argument boolean predicate with two ordered child
/// branches and a list of observers. When a pass visits the node, the
/// predicate resolves a boolean, every observer is notified with it, and the
/// child branch selected by that boolean is walked next. The true branch of a
/// node that resolved false is still walked afterwards in forced-false mode,
/// so observers anywhere under a true branch see every pass.
///
/// Nodes own their children exclusively; the structure is a strict tree.
pub struct ConditionNode {
    predicate: Predicate,
    observers: SmallVec<[Observer; 2]>,
    true_children: Vec<ConditionNode>,
    false_children: Vec<ConditionNode>,
}

impl ConditionNode {
    /// Creates a node wrapping `predicate`, with no observers and no children.
    pub fn new(predicate: impl FnMut() -> bool + 'static) -> Self {
        Self {
            predicate: Box::new(predicate),
            observers: SmallVec::new(),
            true_children: Vec::new(),
            false_children: Vec::new(),
        }
    }

    /// Registers an observer.
    ///
    /// Observers fire in registration order on every pass that visits this
    /// node, whether the node resolved naturally or was forced false.
    pub fn add_observer(&mut self, observer: impl FnMut(bool) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Appends a child evaluated when this node resolves true.
    ///
    /// Returns the new child so nested logic can be built fluently.
    pub fn add_true_child(
        &mut self,
        predicate: impl FnMut() -> bool + 'static,
    ) -> &mut ConditionNode {
        self.true_children.push(ConditionNode::new(predicate));
        self.true_children.last_mut().unwrap()
    }

    /// Appends a child evaluated when this node resolves false.
    ///
    /// Returns the new child so nested logic can be built fluently.
    pub fn add_false_child(
        &mut self,
        predicate: impl FnMut() -> bool + 'static,
    ) -> &mut ConditionNode {
        self.false_children.push(ConditionNode::new(predicate));
        self.false_children.last_mut().unwrap()
    }

    /// Runs one evaluation pass over this node and the children it selects.
    ///
    /// With `force_false` set the node reports false without consulting its
    /// own predicate. Either way the node notifies its observers, descends
    /// naturally into the branch selected by the resolved value, and, on a
    /// false value, additionally walks every true child in forced-false mode.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn evaluate(&mut self, force_false: bool) {
        let value = if force_false {
            false
        } else {
            (self.predicate)()
        };
        trace!(value, "condition resolved");

        for observer in &mut self.observers {
            observer(value);
        }

        let selected = if value {
            &mut self.true_children
        } else {
            &mut self.false_children
        };
        for child in selected {
            child.evaluate(false);
        }

        // A false value still walks the true branch, forced, so observers
        // there see every pass; their predicates stay untouched.
        if !value {
            for child in &mut self.true_children {
                child.evaluate(true);
            }
        }
    }
}

impl fmt::Debug for ConditionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConditionNode")
            .field("observers", &self.observers.len())
            .field("true_children", &self.true_children)
            .field("false_children", &self.false_children)
            .finish_non_exhaustive()
    }
}
