//! Configuration module for declarative forest descriptions
//!
//! This module handles deserialization of forest descriptions and binding of
//! the names they use to real callbacks.

mod bindings;
mod forest;


pub use bindings::*;
pub use forest::*;
