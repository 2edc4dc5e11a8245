//! Join operators.

pub mod nested_loops;

pub use nested_loops::NestedLoopsJoin;
pub use rowflow_core::config::JoinMode;
