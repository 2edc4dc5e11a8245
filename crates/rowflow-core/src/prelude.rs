//! Convenient re-exports for downstream crates.

pub use crate::config::{EngineConfig, JoinMode};
pub use crate::error::{Error, Result};
pub use crate::index::Index;
pub use crate::row::{Row, RowHandle};
pub use crate::schema::{DataType, Field, Schema};
pub use crate::selector::ColumnSelector;
pub use crate::table::Table;
pub use crate::types::Scalar;
