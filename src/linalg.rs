//! Small dense linear algebra shared by the smoothing and interpolation engines.

use ndarray::{Array1, Array2};

/// Pivots smaller than this are treated as zero.
const SINGULAR_EPS: f64 = 1e-12;

/// Solve `a · x = b` by Gaussian elimination with partial pivoting.
///
/// Returns `None` when the system is singular. Inputs are consumed; the
/// elimination works in place.
pub(crate) fn solve(mut a: Array2<f64>, mut b: Array1<f64>) -> Option<Array1<f64>> {
    let n = b.len();
    debug_assert_eq!(a.dim(), (n, n));

    let scale = a.iter().fold(0.0_f64, |m, v| m.max(v.abs())).max(1.0);

    for col in 0..n {
        let (pivot_row, pivot_abs) = (col..n)
            .map(|row| (row, a[[row, col]].abs()))
            .fold((col, -1.0), |best, cur| if cur.1 > best.1 { cur } else { best });

        if pivot_abs < SINGULAR_EPS * scale {
            return None;
        }

        if pivot_row != col {
            for j in 0..n {
                a.swap([col, j], [pivot_row, j]);
            }
            b.swap(col, pivot_row);
        }

        let pivot = a[[col, col]];
        for row in (col + 1)..n {
            let factor = a[[row, col]] / pivot;
            if factor == 0.0 {
                continue;
            }
            a[[row, col]] = 0.0;
            for j in (col + 1)..n {
                a[[row, j]] -= factor * a[[col, j]];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = Array1::zeros(n);
    for col in (0..n).rev() {
        let mut sum = b[col];
        for j in (col + 1)..n {
            sum -= a[[col, j]] * x[j];
        }
        x[col] = sum / a[[col, col]];
    }
    Some(x)
}

/// Least-squares polynomial fit of degree `order` through `(xs, ys)`.
///
/// Coefficients are returned lowest power first. Uses the normal equations,
/// which is adequate for the short windows and low orders used here.
pub(crate) fn polyfit(xs: &[f64], ys: &[f64], order: usize) -> Option<Vec<f64>> {
    let m = order + 1;
    let mut ata = Array2::zeros((m, m));
    let mut aty = Array1::zeros(m);

    for (&x, &y) in xs.iter().zip(ys) {
        let mut powers = vec![1.0; m];
        for k in 1..m {
            powers[k] = powers[k - 1] * x;
        }
        for i in 0..m {
            aty[i] += powers[i] * y;
            for j in 0..m {
                ata[[i, j]] += powers[i] * powers[j];
            }
        }
    }

    solve(ata, aty).map(|c| c.to_vec())
}

/// Evaluate a polynomial with coefficients lowest power first.
pub(crate) fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_solve_3x3() {
        let a = array![[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]];
        let b = array![8.0, -11.0, -3.0];
        let x = solve(a, b).unwrap();
        assert!((x[0] - 2.0).abs() < 1e-10);
        assert!((x[1] - 3.0).abs() < 1e-10);
        assert!((x[2] + 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_solve_singular() {
        let a = array![[1.0, 2.0], [2.0, 4.0]];
        let b = array![1.0, 2.0];
        assert!(solve(a, b).is_none());
    }

    #[test]
    fn test_polyfit_exact_quadratic() {
        let xs = [-2.0, -1.0, 0.0, 1.0, 2.0];
        let ys: Vec<f64> = xs.iter().map(|x| 1.0 + 2.0 * x - 0.5 * x * x).collect();
        let c = polyfit(&xs, &ys, 2).unwrap();
        assert!((c[0] - 1.0).abs() < 1e-10);
        assert!((c[1] - 2.0).abs() < 1e-10);
        assert!((c[2] + 0.5).abs() < 1e-10);
        assert!((polyval(&c, 3.0) - (1.0 + 6.0 - 4.5)).abs() < 1e-10);
    }
}
