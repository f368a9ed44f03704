//! Error types for plot rendering.

use nx_core::CoreError;
use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlotError {
    /// Parameter combination that cannot be drawn.
    #[error("{what}")]
    Configuration { what: String },

    /// A value the renderer needs is absent after validation.
    #[error("Missing parameter: {name}")]
    MissingValue { name: String },

    /// Slice request does not fit the array.
    #[error("Invalid slice: {what}")]
    Slice { what: String },

    #[error(transparent)]
    Value(#[from] CoreError),
}
