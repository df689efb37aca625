//! Statistics primitives.
//!
//! [`variance`] and [`covariance`] return plain sums of (cross-)deviations,
//! not divided by the number of values. The slope in
//! [`crate::model::calculate_coefficients`] is their ratio, so the factor cancels.

use crate::error::{Error, Result};

/// Arithmetic mean, accumulated as offsets from the first value.
///
/// A sequence of identical values yields that value exactly.
pub fn mean(values: &[f64]) -> Result<f64> {
    let &first = values.first().ok_or(Error::EmptyInput)?;
    let offset_sum: f64 = values.iter().map(|&val| val - first).sum();
    Ok(first + offset_sum / values.len() as f64)
}

/// Sum of squared deviations from `mean`.
pub fn variance(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|&val| (val - mean).powi(2)).sum()
}

/// Sum of products of paired deviations from `mean_x` and `mean_y`.
pub fn covariance(xs: &[f64], mean_x: f64, ys: &[f64], mean_y: f64) -> Result<f64> {
    check_len(xs, ys)?;
    Ok(xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| (x - mean_x) * (y - mean_y))
        .sum())
}

pub(crate) fn check_len(left: &[f64], right: &[f64]) -> Result<()> {
    if left.len() != right.len() {
        return Err(Error::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(())
}

pub(crate) fn check_finite(values: &[f64]) -> Result<()> {
    match values.iter().position(|val| !val.is_finite()) {
        Some(index) => Err(Error::NonFinite { index }),
        None => Ok(()),
    }
}
