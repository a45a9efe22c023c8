//! Format Logic - Condition trees with observer callbacks
//!
//! This crate evaluates forests of boolean conditions and notifies observer
//! callbacks with each resolved value, letting UI state follow nested
//! show/hide and enable/disable rules without hand-written dispatch.
//!
//! Conditions form trees: each node owns a predicate, observers, and two
//! child branches. A pass consults each visited predicate once, tells the
//! observers what it resolved, then walks the branch the value selects. The
//! true branch of a false node is still walked in forced-false mode, so
//! observers under true branches hear about every pass.
//!
//! # Example
//!
//! ```
//! use format_logic::ConditionForest;
//! use std::cell::{Cell, RefCell};
//! use std::rc::Rc;
//!
//! let dirty = Rc::new(Cell::new(false));
//! let save_enabled = Rc::new(RefCell::new(Vec::new()));
//!
//! let mut forest = ConditionForest::new();
//! let root = {
//!     let dirty = dirty.clone();
//!     forest.add_root(move || dirty.get())
//! };
//! {
//!     let save_enabled = save_enabled.clone();
//!     root.add_observer(move |value| save_enabled.borrow_mut().push(value));
//! }
//!
//! forest.evaluate_all();
//! dirty.set(true);
//! forest.evaluate_all();
//!
//! assert_eq!(*save_enabled.borrow(), vec![false, true]);
//! ```

pub mod config;
pub mod error;
pub mod guard;
pub mod tree;

pub use config::{Bindings, ForestConfig, NodeConfig};
pub use error::{FormatLogicError, Result};
pub use guard::{GuardedForest, ReentrancyGuard};
pub use tree::{ConditionForest, ConditionNode};
