#![forbid(unsafe_code)]
//! rowflow: a pull-based relational operator library over in-memory tables.
//!
//! Re-exports the workspace crates so callers can depend on one package.

pub use rowflow_core;
pub use rowflow_operators;

pub mod prelude {
    pub use rowflow_core::prelude::*;
    pub use rowflow_operators::{
        collect_rows, BoxedOperator, IndexScan, NestedLoopsJoin, OpError, Operator, Project,
        RowCompare, Select, Sort, TableIterator, Unique,
    };
}
