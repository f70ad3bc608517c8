//! Dense linear solve by Gaussian elimination with partial pivoting.

use crate::error::{Result, SchematicError};

/// Solve `A x = b` in place.
///
/// `a` is an `n x n` row-major matrix. Both `a` and `b` are overwritten.
/// At each step the row at or below the pivot with the largest magnitude in
/// the pivot column is swapped into place; a pivot whose magnitude is below
/// `pivot_tolerance` (or not finite) marks the system as singular.
pub fn gaussian_elimination(
    a: &mut [f64],
    b: &mut [f64],
    n: usize,
    pivot_tolerance: f64,
) -> Result<Vec<f64>> {
    debug_assert_eq!(a.len(), n * n);
    debug_assert_eq!(b.len(), n);

    for k in 0..n {
        // Find pivot
        let mut max_val = a[k * n + k].abs();
        let mut max_row = k;
        for i in (k + 1)..n {
            let val = a[i * n + k].abs();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        if !max_val.is_finite() || max_val < pivot_tolerance {
            return Err(SchematicError::singular(k, max_val));
        }

        if max_row != k {
            for j in 0..n {
                a.swap(k * n + j, max_row * n + j);
            }
            b.swap(k, max_row);
        }

        // Eliminate below the pivot
        let pivot = a[k * n + k];
        for i in (k + 1)..n {
            let factor = a[i * n + k] / pivot;
            if factor == 0.0 {
                continue;
            }
            a[i * n + k] = 0.0;
            for j in (k + 1)..n {
                a[i * n + j] -= factor * a[k * n + j];
            }
            b[i] -= factor * b[k];
        }
    }

    // Back substitution
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut sum = b[i];
        for j in (i + 1)..n {
            sum -= a[i * n + j] * x[j];
        }
        x[i] = sum / a[i * n + i];
        if !x[i].is_finite() {
            return Err(SchematicError::singular(i, a[i * n + i]));
        }
    }

    Ok(x)
}
