//! Property-based tests using proptest.
//!
//! These tests verify the concatenation, extraction, aliasing and text
//! round-trip invariants over randomly shaped matrices.

use proptest::prelude::*;
use simple_math::text::{FormatRule, Layout, Separator};
use simple_math::{algebra, Grid, Matrix, MatrixError, RangeFill};

// Strategy for generating matrices with a fixed number of columns
fn matrix_with_columns(columns: usize) -> impl Strategy<Value = Matrix<i32>> {
    (0usize..6).prop_flat_map(move |rows| {
        proptest::collection::vec(-1000i32..1000, rows * columns).prop_map(move |data| {
            Matrix::from_grid(
                Grid::from_shape_vec((rows, columns), data).expect("Test data should be valid"),
            )
        })
    })
}

// Strategy for generating matrices with a fixed number of rows
fn matrix_with_rows(rows: usize) -> impl Strategy<Value = Matrix<i32>> {
    (0usize..6).prop_flat_map(move |columns| {
        proptest::collection::vec(-1000i32..1000, rows * columns).prop_map(move |data| {
            Matrix::from_grid(
                Grid::from_shape_vec((rows, columns), data).expect("Test data should be valid"),
            )
        })
    })
}

fn any_matrix() -> impl Strategy<Value = Matrix<i32>> {
    (1usize..6).prop_flat_map(matrix_with_columns)
}

fn string_matrix() -> impl Strategy<Value = Matrix<String>> {
    (1usize..4, 1usize..4).prop_flat_map(|(rows, columns)| {
        proptest::collection::vec("[ a-z,;|\\[\\]\"()]{0,6}", rows * columns).prop_map(move |data| {
            Matrix::from_grid(
                Grid::from_shape_vec((rows, columns), data).expect("Test data should be valid"),
            )
        })
    })
}

fn format_rule() -> impl Strategy<Value = FormatRule> {
    prop_oneof![
        Just(FormatRule::default()),
        Just(FormatRule {
            spacing: false,
            ..FormatRule::default()
        }),
        Just(FormatRule {
            column_separator: Separator::Space,
            row_separator: Separator::Semicolon,
            ..FormatRule::default()
        }),
        Just(FormatRule::tsv()),
        Just(FormatRule {
            layout: Layout::Delimited,
            column_separator: Separator::Pipe,
            ..FormatRule::default()
        }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn stack_places_top_then_bottom(
        (a, b) in (1usize..6).prop_flat_map(|c| (matrix_with_columns(c), matrix_with_columns(c)))
    ) {
        let out = algebra::stack_vertically(&a, &b).unwrap();
        prop_assert_eq!(out.rows(), a.rows() + b.rows());
        prop_assert_eq!(out.columns(), a.columns());
        for r in 0..out.rows() {
            for c in 0..out.columns() {
                let expected = if r < a.rows() {
                    a.get(r, c).unwrap()
                } else {
                    b.get(r - a.rows(), c).unwrap()
                };
                prop_assert_eq!(out.get(r, c).unwrap(), expected);
            }
        }
    }

    #[test]
    fn join_places_left_then_right(
        (a, b) in (1usize..6).prop_flat_map(|r| (matrix_with_rows(r), matrix_with_rows(r)))
    ) {
        let out = algebra::join_horizontally(&a, &b).unwrap();
        prop_assert_eq!(out.rows(), a.rows());
        prop_assert_eq!(out.columns(), a.columns() + b.columns());
        for r in 0..out.rows() {
            for c in 0..out.columns() {
                let expected = if c < a.columns() {
                    a.get(r, c).unwrap()
                } else {
                    b.get(r, c - a.columns()).unwrap()
                };
                prop_assert_eq!(out.get(r, c).unwrap(), expected);
            }
        }
    }

    #[test]
    fn mismatched_columns_never_stack(a in any_matrix(), b in any_matrix()) {
        prop_assume!(a.columns() != b.columns());
        let is_mismatch = matches!(
            algebra::stack_vertically(&a, &b),
            Err(MatrixError::DomainMismatch { .. })
        );
        prop_assert!(is_mismatch);
    }

    #[test]
    fn mismatched_rows_never_join(
        a in (1usize..5).prop_flat_map(matrix_with_rows),
        b in (1usize..5).prop_flat_map(matrix_with_rows)
    ) {
        prop_assume!(a.rows() != b.rows());
        let is_mismatch = matches!(
            algebra::join_horizontally(&a, &b),
            Err(MatrixError::DomainMismatch { .. })
        );
        prop_assert!(is_mismatch);
    }

    #[test]
    fn fill_strategy_does_not_change_result(
        (a, b) in (1usize..6).prop_flat_map(|c| (matrix_with_columns(c), matrix_with_columns(c)))
    ) {
        let seq = algebra::stack_vertically_with(&a, &b, &RangeFill::sequential()).unwrap();
        let par = algebra::stack_vertically_with(&a, &b, &RangeFill::parallel()).unwrap();
        prop_assert_eq!(seq, par);
    }

    #[test]
    fn to_linear_matches_row_or_column(values in proptest::collection::vec(any::<i32>(), 0..20)) {
        let row = Matrix::from_slice(&values);
        prop_assert_eq!(algebra::to_linear(&row).unwrap(), values.clone());

        let column = Matrix::from_rows(values.iter().map(|v| vec![*v]).collect()).unwrap();
        if !values.is_empty() {
            prop_assert_eq!(algebra::to_linear(&column).unwrap(), values);
        }
    }

    #[test]
    fn duplicate_sees_every_write(m in any_matrix(), value in any::<i32>()) {
        prop_assume!(m.length() > 0);
        let dup = m.duplicate();
        let (r, c) = (m.rows() - 1, m.columns() - 1);
        m.set(r, c, value).unwrap();
        prop_assert_eq!(dup.get(r, c).unwrap(), value);
        dup.set(0, 0, value.wrapping_add(1)).unwrap();
        prop_assert_eq!(m.get(0, 0).unwrap(), value.wrapping_add(1));
    }

    #[test]
    fn numeric_text_round_trip(m in any_matrix(), rule in format_rule()) {
        prop_assume!(m.rows() > 0);
        let text = m.to_string_with(&rule);
        let back: Matrix<i32> = algebra::from_text(&text, &rule.into()).unwrap();
        prop_assert_eq!(back, m);
    }

    #[test]
    fn generic_text_round_trip(m in string_matrix(), rule in format_rule()) {
        let text = m.to_string_with(&rule);
        let back: Matrix<String> = algebra::from_text(&text, &rule.into()).unwrap();
        prop_assert_eq!(back, m);
    }
}
