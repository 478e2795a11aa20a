//! Tridiagonal linear system solver (Thomas algorithm).

use num_traits::Float;

/// Solve `A·x = rhs` for a tridiagonal matrix `A`.
///
/// The matrix is given by its three diagonals, all of length `n`:
/// `sub[i]` multiplies `x[i-1]` in row `i` (`sub[0]` is ignored), `diag[i]`
/// multiplies `x[i]`, and `sup[i]` multiplies `x[i+1]` (`sup[n-1]` is
/// ignored).
///
/// Forward elimination followed by back substitution, O(n). No pivoting is
/// performed, so `A` must be diagonally dominant (the natural spline system
/// always is for strictly increasing knots).
///
/// # Arguments
///
/// * `sub` - Sub-diagonal
/// * `diag` - Main diagonal
/// * `sup` - Super-diagonal
/// * `rhs` - Right-hand side
///
/// # Example
///
/// ```
/// use spline_core::math::tridiagonal::solve_tridiagonal;
///
/// // [2 1 0; 1 2 1; 0 1 2] · [1 1 1]ᵀ = [3 4 3]ᵀ
/// let x = solve_tridiagonal(&[0.0_f64, 1.0, 1.0], &[2.0, 2.0, 2.0], &[1.0, 1.0, 0.0], &[3.0, 4.0, 3.0]);
/// for xi in x {
///     assert!((xi - 1.0).abs() < 1e-12);
/// }
/// ```
pub fn solve_tridiagonal<T: Float>(sub: &[T], diag: &[T], sup: &[T], rhs: &[T]) -> Vec<T> {
    let n = diag.len();
    debug_assert!(sub.len() == n && sup.len() == n && rhs.len() == n);
    if n == 0 {
        return Vec::new();
    }

    let mut diag = diag.to_vec();
    let mut x = rhs.to_vec();

    // Forward elimination
    for i in 1..n {
        let w = sub[i] / diag[i - 1];
        diag[i] = diag[i] - w * sup[i - 1];
        x[i] = x[i] - w * x[i - 1];
    }

    // Back substitution
    x[n - 1] = x[n - 1] / diag[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = (x[i] - sup[i] * x[i + 1]) / diag[i];
    }

    x
}
