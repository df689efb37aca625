use crate::data::DataSourceError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("input sequence must have at least one element")]
    EmptyInput,

    #[error("sequences must have equal lengths, but have {left} and {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("x values have zero variance, cannot fit a slope")]
    DivisionByZero,

    #[error("value at index {index} is not finite")]
    NonFinite { index: usize },

    #[error(transparent)]
    DataSource(#[from] DataSourceError),
}
