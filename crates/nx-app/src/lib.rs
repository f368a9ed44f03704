//! Shared application service layer for numex.
//!
//! Both the GUI and the CLI go through this crate: loading arrays, holding
//! the per-view parameter state, and reading/writing parameter documents.

pub mod error;
pub mod params_doc;
pub mod session;

pub use error::{AppError, AppResult};
pub use session::ViewSession;

use nx_core::ArrayData;
use nx_io::LoaderRegistry;
use std::path::Path;
use std::sync::Arc;

/// Load an array through the registry.
pub fn load_array(registry: &LoaderRegistry, path: &Path) -> AppResult<Arc<ArrayData>> {
    Ok(Arc::new(registry.load(path)?))
}

/// The synthetic phantom used when no input file is given.
pub fn synthetic_array() -> Arc<ArrayData> {
    Arc::new(nx_io::phantom(&nx_io::synthetic::DEFAULT_SHAPE))
}
