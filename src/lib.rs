//! Liftgraph: CFG model and viewer protocol for lifted machine-code functions
//!
//! This library takes a function decomposed into IR basic blocks by an
//! external lifting engine, builds a stable queryable control-flow graph,
//! renders per-block display text in one batch, and answers the callback
//! protocol of an interactive graph widget.

pub mod error;
pub mod graph;
pub mod lift;
pub mod session;
pub mod viewer;

pub use error::{Error, Result};
pub use session::Session;

// Re-export commonly used types
pub use graph::{BasicBlock, FunctionGraph};
pub use lift::{FunctionHandle, LiftedBlock, LiftedFunction, Lifter, StaticLifter};
pub use viewer::{GraphEvent, GraphItem, HintQuery, MutableGraph, Reply, ViewerController};
