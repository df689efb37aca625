use crate::error::{Error, Result};
use crate::stats::check_len;

/// Compute the root-mean-squared error between `actual` and `predicted` values.
pub fn rmse(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_len(actual, predicted)?;
    if actual.is_empty() {
        return Err(Error::EmptyInput);
    }
    let sq_err_sum: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(&a, &p)| (p - a).powi(2))
        .sum();
    Ok((sq_err_sum / actual.len() as f64).sqrt())
}
