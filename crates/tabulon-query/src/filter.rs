//! Per-column allow-list filtering
//!
//! Constraints across columns combine with AND; the values inside one
//! column's allow-list combine with OR (multi-select semantics).

use std::collections::{BTreeSet, HashMap};

use tabulon_core::{Column, Row, Value};

/// Active filter selections, keyed by column key.
///
/// An absent key or an empty set imposes no constraint for that column.
pub type FilterMap = HashMap<String, BTreeSet<String>>;

/// The string form a cell value is matched against.
///
/// NULL has no string form and therefore never satisfies an active
/// constraint.
fn match_key(value: &Value) -> Option<String> {
    if value.is_null() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Check whether a row satisfies every active constraint.
pub fn row_passes(row: &Row, columns: &[Column], filters: &FilterMap) -> bool {
    for (key, allowed) in filters {
        if allowed.is_empty() {
            continue;
        }
        let value = columns
            .iter()
            .find(|c| c.key == *key)
            .map(|c| c.value(row))
            .unwrap_or(Value::Null);
        match match_key(&value) {
            Some(s) if allowed.contains(&s) => {}
            _ => return false,
        }
    }
    true
}

/// Apply the filter stage to a working set of row indices.
pub fn apply(
    working: Vec<usize>,
    rows: &[Row],
    columns: &[Column],
    filters: &FilterMap,
) -> Vec<usize> {
    if filters.values().all(|allowed| allowed.is_empty()) {
        return working;
    }
    working
        .into_iter()
        .filter(|&ix| row_passes(&rows[ix], columns, filters))
        .collect()
}

/// Candidate values for one column's filter UI.
///
/// Computed over the unfiltered row set: distinct, lexically sorted,
/// stringified derived values, excluding NULL and the empty string.
pub fn distinct_values(rows: &[Row], column: &Column) -> Vec<String> {
    let mut values = BTreeSet::new();
    for row in rows {
        if let Some(s) = match_key(&column.value(row)) {
            if !s.is_empty() {
                values.insert(s);
            }
        }
    }
    values.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<Column> {
        vec![
            Column::new("dept", "Department"),
            Column::new("city", "City"),
        ]
    }

    fn rows() -> Vec<Row> {
        vec![
            Row::new().with("dept", "Eng").with("city", "Mumbai"),
            Row::new().with("dept", "HR").with("city", "Pune"),
            Row::new().with("dept", "Eng").with("city", "Pune"),
            Row::new().with("dept", "Sales").with("city", "Mumbai"),
        ]
    }

    fn filters(entries: &[(&str, &[&str])]) -> FilterMap {
        entries
            .iter()
            .map(|(key, values)| {
                (
                    key.to_string(),
                    values.iter().map(|v| v.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_filter_map_is_identity() {
        let rows = rows();
        let working: Vec<usize> = (0..rows.len()).collect();
        assert_eq!(
            apply(working.clone(), &rows, &columns(), &FilterMap::new()),
            working
        );
        // An entry with an empty allow-list imposes no constraint either.
        assert_eq!(
            apply(working.clone(), &rows, &columns(), &filters(&[("dept", &[])])),
            working
        );
    }

    #[test]
    fn test_values_within_a_column_are_or() {
        let rows = rows();
        let working: Vec<usize> = (0..rows.len()).collect();
        let kept = apply(working, &rows, &columns(), &filters(&[("dept", &["Eng", "HR"])]));
        assert_eq!(kept, vec![0, 1, 2]);
    }

    #[test]
    fn test_columns_combine_with_and() {
        let rows = rows();
        let working: Vec<usize> = (0..rows.len()).collect();
        let one = apply(
            working.clone(),
            &rows,
            &columns(),
            &filters(&[("dept", &["Eng", "HR"])]),
        );
        let two = apply(
            working,
            &rows,
            &columns(),
            &filters(&[("dept", &["Eng", "HR"]), ("city", &["Mumbai"])]),
        );
        assert_eq!(two, vec![0]);
        // Adding a second constraint is strictly more restrictive.
        assert!(two.iter().all(|ix| one.contains(ix)));
    }

    #[test]
    fn test_stale_value_matches_nothing() {
        let rows = rows();
        let working: Vec<usize> = (0..rows.len()).collect();
        let kept = apply(working, &rows, &columns(), &filters(&[("dept", &["Legal"])]));
        assert!(kept.is_empty());
    }

    #[test]
    fn test_null_never_satisfies_a_constraint() {
        let rows = vec![Row::new().with("city", "Mumbai")];
        let kept = apply(vec![0], &rows, &columns(), &filters(&[("dept", &["Eng"])]));
        assert!(kept.is_empty());
    }

    #[test]
    fn test_distinct_values_sorted_and_deduplicated() {
        let rows = rows();
        let dept = Column::new("dept", "Department");
        assert_eq!(distinct_values(&rows, &dept), vec!["Eng", "HR", "Sales"]);
    }

    #[test]
    fn test_distinct_values_exclude_null_and_empty() {
        let rows = vec![
            Row::new().with("dept", "Eng"),
            Row::new().with("dept", Value::Null),
            Row::new().with("dept", ""),
            Row::new(),
        ];
        let dept = Column::new("dept", "Department");
        assert_eq!(distinct_values(&rows, &dept), vec!["Eng"]);
    }

    #[test]
    fn test_distinct_values_stringify_numbers() {
        let rows = vec![
            Row::new().with("qty", 10),
            Row::new().with("qty", 2),
            Row::new().with("qty", 10),
        ];
        let qty = Column::new("qty", "Quantity");
        // Lexical ordering over the stringified values.
        assert_eq!(distinct_values(&rows, &qty), vec!["10", "2"]);
    }
}
