use crate::data::Samples;
use crate::error::{Error, Result};
use crate::metrics::rmse;
use crate::stats::{check_len, covariance, mean, variance};
use serde::{Deserialize, Serialize};

/// Fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub slope: f64,
    pub intercept: f64,
}

/// Fit [`Coefficients`] to `xs` and `ys` by ordinary least squares.
///
/// # Errors
/// Returns an error if the sequences are empty or differ in length,
/// or if all `xs` are equal.
pub fn calculate_coefficients(xs: &[f64], ys: &[f64]) -> Result<Coefficients> {
    check_len(xs, ys)?;
    let mean_x = mean(xs)?;
    let mean_y = mean(ys)?;

    let var_x = variance(xs, mean_x);
    if var_x == 0.0 || xs.iter().all(|&x| x == xs[0]) {
        return Err(Error::DivisionByZero);
    }

    let slope = covariance(xs, mean_x, ys, mean_y)? / var_x;
    let intercept = mean_y - slope * mean_x;

    Ok(Coefficients { slope, intercept })
}

pub fn predict(coefs: Coefficients, xs: &[f64]) -> Vec<f64> {
    xs.iter()
        .map(|&x| coefs.slope * x + coefs.intercept)
        .collect()
}

/// Outcome of fitting on a training set and scoring on a test set.
#[derive(Debug)]
pub struct Evaluation {
    pub coefs: Coefficients,
    pub n_train: usize,
    pub predictions: Vec<f64>,
    pub rmse: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub slope: f64,
    pub intercept: f64,
    pub n_train: usize,
    pub n_test: usize,
    pub rmse: f64,
}

impl Evaluation {
    pub fn report(&self) -> EvaluationReport {
        EvaluationReport {
            slope: self.coefs.slope,
            intercept: self.coefs.intercept,
            n_train: self.n_train,
            n_test: self.predictions.len(),
            rmse: self.rmse,
        }
    }
}

/// Fit on `train`, predict the `test` x values and score them against the `test` y values.
pub fn evaluate(train: &Samples, test: &Samples) -> Result<Evaluation> {
    let coefs = calculate_coefficients(train.xs(), train.ys())?;
    log::debug!(
        "fitted slope {} and intercept {}",
        coefs.slope,
        coefs.intercept
    );

    let predictions = predict(coefs, test.xs());
    let rmse = rmse(test.ys(), &predictions)?;

    Ok(Evaluation {
        coefs,
        n_train: train.len(),
        predictions,
        rmse,
    })
}
