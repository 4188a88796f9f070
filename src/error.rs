use pyo3::exceptions::PyValueError;
use pyo3::PyErr;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("module `{module}` was built with an empty version string")]
    EmptyVersion { module: &'static str },

    #[error("failed to register module contents: {0}")]
    Registration(#[from] PyErr),
}

impl From<Error> for PyErr {
    fn from(err: Error) -> Self {
        match err {
            Error::Registration(inner) => inner,
            other => PyValueError::new_err(other.to_string()),
        }
    }
}
