use std::path::PathBuf;

pub type LoadResult<T> = Result<T, LoadError>;

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("Unsupported file format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Malformed header {}: {what}", path.display())]
    MalformedHeader { path: PathBuf, what: String },

    #[error("Truncated data in {}: expected {expected} elements, found {found}", path.display())]
    Truncated {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("Shape error: {what}")]
    Shape { what: String },

    #[error("NumPy error: {what}")]
    Npy { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ndarray::ShapeError> for LoadError {
    fn from(err: ndarray::ShapeError) -> Self {
        LoadError::Shape {
            what: err.to_string(),
        }
    }
}

impl From<nx_core::CoreError> for LoadError {
    fn from(err: nx_core::CoreError) -> Self {
        LoadError::Shape {
            what: err.to_string(),
        }
    }
}
