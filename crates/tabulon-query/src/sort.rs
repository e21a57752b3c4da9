//! Typed row ordering
//!
//! Comparison is numeric when both sides parse as finite floats, lexical
//! (case-insensitive, trimmed) otherwise. NULLs sort after every non-null
//! value ascending; flipping the direction reverses the whole order,
//! including NULL placement. The sort is stable: ties preserve the incoming
//! relative order.

use std::cmp::Ordering;

use tabulon_core::{Column, Row, Value};

use crate::state::{SortDirection, SortSpec};

/// Numeric interpretation of a cell for comparison purposes.
///
/// A string that parses to NaN counts as a failed parse so the comparator
/// stays total.
fn numeric(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Int(i) => Some(*i as f64),
        Value::Float(f) => Some(*f),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|f| !f.is_nan())
}

fn fold(value: &Value) -> String {
    value.to_string().trim().to_lowercase()
}

/// Ascending comparison of two cell values.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        // The non-null value sorts first ascending.
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => match (numeric(a), numeric(b)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => fold(a).cmp(&fold(b)),
        },
    }
}

/// Apply the sort stage to a working set of row indices.
///
/// With no sort column the working set is returned unchanged. Each row's
/// comparable value is derived once before sorting.
pub fn apply(working: Vec<usize>, rows: &[Row], columns: &[Column], sort: &SortSpec) -> Vec<usize> {
    let Some(key) = &sort.column else {
        return working;
    };
    let Some(column) = columns.iter().find(|c| c.key == *key) else {
        return working;
    };

    let mut keyed: Vec<(usize, Value)> = working
        .into_iter()
        .map(|ix| (ix, column.value(&rows[ix])))
        .collect();
    keyed.sort_by(|(_, a), (_, b)| {
        let ord = compare_values(a, b);
        match sort.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    keyed.into_iter().map(|(ix, _)| ix).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sort_spec(column: &str, direction: SortDirection) -> SortSpec {
        SortSpec {
            column: Some(column.to_string()),
            direction,
        }
    }

    fn apply_sorted(rows: &[Row], columns: &[Column], spec: &SortSpec) -> Vec<usize> {
        apply((0..rows.len()).collect(), rows, columns, spec)
    }

    #[test]
    fn test_no_sort_column_is_identity() {
        let rows = vec![Row::new().with("v", 2), Row::new().with("v", 1)];
        let columns = vec![Column::new("v", "V")];
        assert_eq!(
            apply_sorted(&rows, &columns, &SortSpec::default()),
            vec![0, 1]
        );
    }

    #[test]
    fn test_numeric_strings_sort_numerically() {
        let rows: Vec<Row> = ["10", "9", "2"]
            .iter()
            .map(|v| Row::new().with("v", *v))
            .collect();
        let columns = vec![Column::new("v", "V")];
        let spec = sort_spec("v", SortDirection::Ascending);
        // Numeric order, not the lexical ["10", "2", "9"].
        assert_eq!(apply_sorted(&rows, &columns, &spec), vec![2, 1, 0]);
    }

    #[test]
    fn test_mixed_values_fall_back_to_lexical() {
        let rows: Vec<Row> = ["banana", "10", "Apple"]
            .iter()
            .map(|v| Row::new().with("v", *v))
            .collect();
        let columns = vec![Column::new("v", "V")];
        let spec = sort_spec("v", SortDirection::Ascending);
        // "10" is numeric but "banana" is not, so every pair involving a
        // non-numeric side compares as case-insensitive text.
        assert_eq!(apply_sorted(&rows, &columns, &spec), vec![1, 2, 0]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let rows = vec![
            Row::new().with("k", "A").with("v", 1),
            Row::new().with("k", "B").with("v", 1),
            Row::new().with("k", "C").with("v", 2),
        ];
        let columns = vec![Column::new("k", "K"), Column::new("v", "V")];
        let spec = sort_spec("v", SortDirection::Ascending);
        // A and B tie on v; their original relative order survives.
        assert_eq!(apply_sorted(&rows, &columns, &spec), vec![0, 1, 2]);
    }

    #[test]
    fn test_nulls_last_ascending_first_descending() {
        let rows = vec![
            Row::new().with("v", Value::Null),
            Row::new().with("v", 5),
            Row::new(),
            Row::new().with("v", 3),
        ];
        let columns = vec![Column::new("v", "V")];
        let asc = apply_sorted(&rows, &columns, &sort_spec("v", SortDirection::Ascending));
        assert_eq!(asc, vec![3, 1, 0, 2]);
        let desc = apply_sorted(&rows, &columns, &sort_spec("v", SortDirection::Descending));
        assert_eq!(desc, vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_lexical_comparison_is_case_insensitive_and_trimmed() {
        let rows: Vec<Row> = ["  zebra", "Apple", "mango "]
            .iter()
            .map(|v| Row::new().with("v", *v))
            .collect();
        let columns = vec![Column::new("v", "V")];
        let spec = sort_spec("v", SortDirection::Ascending);
        assert_eq!(apply_sorted(&rows, &columns, &spec), vec![1, 2, 0]);
    }

    #[test]
    fn test_nan_string_is_not_numeric() {
        assert_eq!(
            compare_values(&Value::String("NaN".into()), &Value::String("5".into())),
            // Falls back to text: "nan" > "5".
            Ordering::Greater
        );
    }

    #[test]
    fn test_unknown_column_is_identity() {
        let rows = vec![Row::new().with("v", 2), Row::new().with("v", 1)];
        let columns = vec![Column::new("v", "V")];
        let spec = sort_spec("other", SortDirection::Ascending);
        assert_eq!(apply_sorted(&rows, &columns, &spec), vec![0, 1]);
    }

    #[test]
    fn test_dates_sort_chronologically() {
        use chrono::NaiveDate;
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        let rows = vec![
            Row::new().with("joined", d(2024, 11, 2)),
            Row::new().with("joined", d(2019, 3, 14)),
            Row::new().with("joined", d(2021, 7, 1)),
        ];
        let columns = vec![Column::new("joined", "Joined")];
        let spec = sort_spec("joined", SortDirection::Ascending);
        assert_eq!(apply_sorted(&rows, &columns, &spec), vec![1, 2, 0]);
    }
}
