//! Index range scans feeding other operators.

mod test_data_gen;

use std::cmp::Ordering;

use rowflow_core::prelude::*;
use rowflow_core::row;
use rowflow_operators::{
    collect_rows, IndexScan, NestedLoopsJoin, OpError, Operator, Select, TableIterator,
};
use test_data_gen::{departments, employees, generate_keyed_table};

fn within(v: &Scalar, lo: &Scalar, hi: &Scalar) -> bool {
    v.compare(lo) != Ordering::Less && v.compare(hi) != Ordering::Greater
}

#[test]
fn test_index_scan_respects_bounds() {
    let table = generate_keyed_table(250, 40);
    let index = Index::build(&table, &[0]).unwrap();
    let (lo, hi) = (Scalar::I64(10), Scalar::I64(19));

    let mut scan = IndexScan::new(
        &index,
        Row::new(vec![lo.clone()]),
        Some(Row::new(vec![hi.clone()])),
    )
    .unwrap();
    assert_eq!(scan.n_columns(), 3);
    let rows = collect_rows(&mut scan);

    for r in &rows {
        assert!(within(r.at(0), &lo, &hi), "{r} outside [{lo}, {hi}]");
    }
    let expected = table
        .rows()
        .iter()
        .filter(|r| within(r.at(0), &lo, &hi))
        .count();
    assert_eq!(rows.len(), expected);
}

#[test]
fn test_index_scan_exact_lookup() {
    let emps = employees();
    let by_dept = Index::build(&emps, &[2]).unwrap();
    let mut scan = IndexScan::new(&by_dept, row![20], None).unwrap();
    assert_eq!(
        collect_rows(&mut scan),
        vec![row![2, "Bob", 20, 27], row![5, "Erin", 20, 31]]
    );
}

#[test]
fn test_index_scan_empty_index_and_empty_range() {
    let empty = Index::new(4);
    let mut scan = IndexScan::new(&empty, row![1], Some(row![100])).unwrap();
    scan.open();
    assert!(scan.next().is_none());
    assert!(scan.next().is_none());

    let emps = employees();
    let by_age = Index::build(&emps, &[3]).unwrap();
    let mut scan = IndexScan::new(&by_age, row![60], Some(row![99])).unwrap();
    assert!(collect_rows(&mut scan).is_empty());

    // Inverted bounds match nothing.
    let mut scan = IndexScan::new(&by_age, row![40], Some(row![30])).unwrap();
    assert!(collect_rows(&mut scan).is_empty());
}

#[test]
fn test_index_scan_under_select_and_join() {
    let emps = employees();
    let depts = departments();
    let by_age = Index::build(&emps, &[3]).unwrap();

    // Employees aged 27..=40, excluding dept 30, joined to their department.
    let scan = IndexScan::new(&by_age, row![27], Some(row![40])).unwrap();
    let select = Select::new(Box::new(scan), |r: &Row| !r.at(2).same_as(&Scalar::I32(30)));
    let mut join = NestedLoopsJoin::new(
        Box::new(select),
        &[2],
        Box::new(TableIterator::new(&depts)),
        &[0],
    )
    .unwrap();

    assert_eq!(
        collect_rows(&mut join),
        vec![
            row![1, "Alice", 10, 34, "Engineering"],
            row![2, "Bob", 20, 27, "Sales"],
            row![5, "Erin", 20, 31, "Sales"],
        ]
    );
}

#[test]
fn test_index_scan_rejects_keyless_bound() {
    let index = Index::new(2);
    let err = IndexScan::new(&index, Row::default(), None).err();
    assert!(matches!(err, Some(OpError::Plan(_))));
}
