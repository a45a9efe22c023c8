//! Condition trees: nodes, forests, and the evaluation pass

mod forest;
mod node;


pub use forest::*;
pub use node::*;
