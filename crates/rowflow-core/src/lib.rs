#![forbid(unsafe_code)]
//! rowflow-core: values, rows, schemas, and the storage collaborators
//! (tables and ordered indexes) that the operator library reads from.
//!
//! Design intent:
//! - Pure data plus comparison primitives. Operator logic lives in
//!   `rowflow-operators`.
//! - Tables and indexes are immutable while a query runs; operators hold
//!   shared borrows into them and hand out `RowHandle::Borrowed` rows.

pub mod config;
pub mod error;
pub mod index;
pub mod prelude;
pub mod row;
pub mod schema;
pub mod selector;
pub mod table;
pub mod types;

pub use error::{Error, Result};
pub use row::{Row, RowHandle};
pub use types::Scalar;
