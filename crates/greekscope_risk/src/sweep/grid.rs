//! Evenly spaced grid generation.

/// Generates `n` evenly spaced points over `[start, stop]`, endpoints
/// included.
///
/// Returns a single-element grid for `n = 1` (the start point) and an
/// empty grid for `n = 0`.
///
/// # Examples
/// ```
/// use greekscope_risk::linspace;
///
/// let grid = linspace(0.0, 10.0, 5);
/// assert_eq!(grid, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
/// ```
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}
