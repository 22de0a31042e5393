//! Offset selection by minimum score.

use crate::alphabet::Offset;
use crate::chi_square::ChiSquares;

/// Returns the index of the smallest value.
///
/// Ties resolve to the lowest index. An empty slice yields 0.
///
/// # Examples
///
/// ```
/// use caesarcrypt::selector::argmin;
///
/// assert_eq!(argmin(&[3.0, 1.0, 2.0, 1.0]), 1);
/// assert_eq!(argmin(&[]), 0);
/// ```
pub fn argmin(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &value) in values.iter().enumerate() {
        if value < values[best] {
            best = i;
        }
    }
    best
}

/// Returns the offset whose chi-square score is minimal.
pub fn most_probable_offset(scores: &ChiSquares) -> Offset {
    Offset::new(argmin(scores.as_array()) as i64)
}
