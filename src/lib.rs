//! Fit a one-variable linear regression on a training set and score it
//! by root-mean-squared error on a test set.

pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod model;
pub mod stats;

pub use data::{DataSourceError, Samples};
pub use error::{Error, Result};
pub use model::{Coefficients, Evaluation, evaluate};
