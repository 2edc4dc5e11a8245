#![forbid(unsafe_code)]
//! rowflow-operators: pull-based relational operators (scan/filter/project/
//! join/sort/unique).
//!
//! Design intent:
//! - Every operator implements `Operator` (open / next / close / n_columns)
//!   and owns its children as `BoxedOperator`s, so a plan is a tree with
//!   exclusive ownership.
//! - Synchronous and single-threaded. Only `Sort` materializes its input.
//! - Rows flow as `RowHandle`s: leaves hand out borrowed rows, operators that
//!   build new rows hand out owned ones.

pub mod filter;
pub mod join;
pub mod project;
pub mod scan;
pub mod sort;
pub mod traits;
pub mod unique;

mod trace;

pub use filter::{RowPredicate, Select};
pub use join::{JoinMode, NestedLoopsJoin};
pub use project::Project;
pub use scan::{IndexScan, TableIterator};
pub use sort::{RowCompare, Sort};
pub use traits::{collect_rows, BoxedOperator, OpError, Operator};
pub use unique::Unique;
