//! Forest of root conditions evaluated as a single pass

use super::node::ConditionNode;
use tracing::instrument;

/// An ordered collection of independent condition trees.
///
/// Roots are evaluated in insertion order, each as its own tree; the value
/// one root resolves never influences another. A forest is the unit a trigger
/// runs: one call to [`evaluate_all`](ConditionForest::evaluate_all) is one
/// pass over every tree.
#[derive(Debug, Default)]
pub struct ConditionForest {
    roots: Vec<ConditionNode>,
}

impl ConditionForest {
    /// Creates an empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a root condition and returns it for fluent tree building.
    pub fn add_root(
        &mut self,
        predicate: impl FnMut() -> bool + 'static,
    ) -> &mut ConditionNode {
        self.roots.push(ConditionNode::new(predicate));
        self.roots.last_mut().unwrap()
    }

    /// Runs one natural evaluation pass over every root, in insertion order.
    #[instrument(level = "debug", skip(self), fields(roots = self.roots.len()))]
    pub fn evaluate_all(&mut self) {
        for root in &mut self.roots {
            root.evaluate(false);
        }
    }

    /// Number of root conditions.
    #[inline]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Whether the forest has no roots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
