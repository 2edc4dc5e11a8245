//! Table builders shared by the integration tests.

#![allow(dead_code)]

use rowflow_core::prelude::*;
use rowflow_core::row;

/// `(id: i32, name: str)` table.
pub fn pairs_table(name: &str, rows: Vec<Row>) -> Table {
    let schema = Schema::new(vec![
        Field::new("id", DataType::Int32, false),
        Field::new("name", DataType::Utf8, false),
    ]);
    Table::with_rows(name, schema, rows).expect("rows match schema")
}

/// Employees: `(emp_id, name, dept_id, age)`.
pub fn employees() -> Table {
    let schema = Schema::new(vec![
        Field::new("emp_id", DataType::Int32, false),
        Field::new("name", DataType::Utf8, false),
        Field::new("dept_id", DataType::Int32, false),
        Field::new("age", DataType::Int32, false),
    ]);
    Table::with_rows(
        "employees",
        schema,
        vec![
            row![1, "Alice", 10, 34],
            row![2, "Bob", 20, 27],
            row![3, "Carol", 10, 45],
            row![4, "Dan", 30, 27],
            row![5, "Erin", 20, 31],
            row![6, "Frank", 40, 52],
        ],
    )
    .expect("rows match schema")
}

/// Departments: `(dept_id, dept_name)`.
pub fn departments() -> Table {
    let schema = Schema::new(vec![
        Field::new("dept_id", DataType::Int32, false),
        Field::new("dept_name", DataType::Utf8, false),
    ]);
    Table::with_rows(
        "departments",
        schema,
        vec![
            row![10, "Engineering"],
            row![20, "Sales"],
            row![30, "Support"],
            row![50, "Legal"],
        ],
    )
    .expect("rows match schema")
}

/// Deterministic `(key: i64, seq: i64, tag: str)` rows; keys repeat so sorts
/// and dedup have ties to deal with.
pub fn generate_keyed_table(rows: usize, distinct_keys: i64) -> Table {
    let schema = Schema::new(vec![
        Field::new("key", DataType::Int64, false),
        Field::new("seq", DataType::Int64, false),
        Field::new("tag", DataType::Utf8, false),
    ]);
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut out = Vec::with_capacity(rows);
    for i in 0..rows {
        // xorshift; stable across runs
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let key = (state % distinct_keys as u64) as i64;
        out.push(Row::new(vec![
            Scalar::I64(key),
            Scalar::I64(i as i64),
            Scalar::Str(format!("tag-{}", key % 3)),
        ]));
    }
    Table::with_rows("keyed", schema, out).expect("rows match schema")
}
