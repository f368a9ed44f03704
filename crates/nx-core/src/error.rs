use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid descriptor for {name}: {what}")]
    InvalidDescriptor { name: String, what: &'static str },

    #[error("Unknown plot mode: {mode}")]
    UnknownMode { mode: String },

    #[error("Unknown choice for {name}: {value}")]
    UnknownChoice { name: String, value: String },

    #[error("Type mismatch for {name}: expected {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
    },

    #[error("Shape mismatch: {what} (expected {expected} elements, got {actual})")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}
