//! Named callback registry resolving forest descriptions

use ahash::AHashMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, instrument};

use crate::config::{ForestConfig, NodeConfig};
use crate::error::{FormatLogicError, Result};
use crate::tree::{ConditionForest, ConditionNode};

type SharedPredicate = Rc<RefCell<dyn FnMut() -> bool>>;
type SharedObserver = Rc<RefCell<dyn FnMut(bool)>>;

/// Named predicates and observers a forest description can refer to.
///
/// A binding may be referenced from any number of nodes; every reference
/// shares the one underlying closure, so stateful bindings observe all their
/// call sites. Predicate and observer names live in separate namespaces.
#[derive(Default)]
pub struct Bindings {
    predicates: AHashMap<String, SharedPredicate>,
    observers: AHashMap<String, SharedObserver>,
}

impl Bindings {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a named predicate. Each predicate name is registered once.
    pub fn bind_predicate(
        &mut self,
        name: impl Into<String>,
        predicate: impl FnMut() -> bool + 'static,
    ) -> Result<&mut Self> {
        let name = name.into();
        if self.predicates.contains_key(&name) {
            return Err(FormatLogicError::DuplicateBinding(name));
        }
        self.predicates.insert(name, Rc::new(RefCell::new(predicate)));
        Ok(self)
    }

    /// Registers a named observer. Each observer name is registered once.
    pub fn bind_observer(
        &mut self,
        name: impl Into<String>,
        observer: impl FnMut(bool) + 'static,
    ) -> Result<&mut Self> {
        let name = name.into();
        if self.observers.contains_key(&name) {
            return Err(FormatLogicError::DuplicateBinding(name));
        }
        self.observers.insert(name, Rc::new(RefCell::new(observer)));
        Ok(self)
    }

    /// Builds a forest from a description, resolving every name against this
    /// registry.
    ///
    /// Nodes are created depth-first in declaration order, so the built
    /// forest evaluates exactly as declared.
    #[instrument(level = "debug", skip(self, config), fields(roots = config.roots.len()))]
    pub fn build_forest(&self, config: &ForestConfig) -> Result<ConditionForest> {
        let mut forest = ConditionForest::new();
        for node in &config.roots {
            let root = forest.add_root(self.resolve_predicate(&node.predicate)?);
            self.populate(root, node)?;
        }
        debug!("forest built from description");
        Ok(forest)
    }

    fn populate(&self, target: &mut ConditionNode, config: &NodeConfig) -> Result<()> {
        for name in &config.observers {
            target.add_observer(self.resolve_observer(name)?);
        }
        for child in &config.on_true {
            let node = target.add_true_child(self.resolve_predicate(&child.predicate)?);
            self.populate(node, child)?;
        }
        for child in &config.on_false {
            let node = target.add_false_child(self.resolve_predicate(&child.predicate)?);
            self.populate(node, child)?;
        }
        Ok(())
    }

    fn resolve_predicate(&self, name: &str) -> Result<impl FnMut() -> bool + 'static> {
        let shared = self
            .predicates
            .get(name)
            .cloned()
            .ok_or_else(|| FormatLogicError::UnknownPredicate(name.to_string()))?;
        Ok(move || (&mut *shared.borrow_mut())())
    }

    fn resolve_observer(&self, name: &str) -> Result<impl FnMut(bool) + 'static> {
        let shared = self
            .observers
            .get(name)
            .cloned()
            .ok_or_else(|| FormatLogicError::UnknownObserver(name.to_string()))?;
        Ok(move |value| (&mut *shared.borrow_mut())(value))
    }
}

impl fmt::Debug for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bindings")
            .field("predicates", &self.predicates.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}
