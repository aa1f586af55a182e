//! Dense matrix multiplication kernel.
//!
//! Deliberately the textbook triple loop with `f64` accumulation, O(R·C·S).
//! No blocking, Strassen, or SIMD: this service is a fixed point of
//! comparison across runtime implementations, so the kernel stays the
//! simplest correct formulation.

use crate::error::CoreError;

/// Rectangular numeric grid, stored as rows of equal length.
///
/// Rectangularity is a convention, not an enforced invariant: the kernel
/// infers shapes from the outer length and the first row and faults on the
/// first access that falls outside the data actually present.
pub type Matrix = Vec<Vec<f64>>;

/// Multiply `a` (R×C) by `b` (C×S), producing the R×S product where
/// `c[i][j] = Σ_k a[i][k] * b[k][j]`.
///
/// Dimensions are taken from `a.len()`, `a[0].len()`, and `b[0].len()`.
/// There is no check that `b` has as many rows as `a` has columns; if it
/// does not, the inner loop's access to the missing row surfaces as
/// [`CoreError::IndexOutOfRange`] rather than a truncated or padded result.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, CoreError> {
    let rows_a = a.len();
    let cols_a = leading_row_len(a, "matrixA")?;
    let cols_b = leading_row_len(b, "matrixB")?;

    let mut c = vec![vec![0.0; cols_b]; rows_a];

    for (i, out_row) in c.iter_mut().enumerate() {
        for (j, out) in out_row.iter_mut().enumerate() {
            let mut acc = 0.0;
            for k in 0..cols_a {
                acc += cell(a, "matrixA", i, k)? * cell(b, "matrixB", k, j)?;
            }
            *out = acc;
        }
    }

    Ok(c)
}

/// Length of the first row, used as the operand's column count.
///
/// An empty operand has no first row to measure and faults immediately.
fn leading_row_len(m: &Matrix, name: &str) -> Result<usize, CoreError> {
    m.first()
        .map(Vec::len)
        .ok_or_else(|| CoreError::IndexOutOfRange(format!("{name} has no rows")))
}

/// Checked element access reporting which operand and position faulted.
fn cell(m: &Matrix, name: &str, row: usize, col: usize) -> Result<f64, CoreError> {
    let r = m.get(row).ok_or_else(|| {
        CoreError::IndexOutOfRange(format!("row {row} of {name} ({} rows)", m.len()))
    })?;
    r.get(col).copied().ok_or_else(|| {
        CoreError::IndexOutOfRange(format!(
            "column {col} of {name} row {row} ({} columns)",
            r.len()
        ))
    })
}
