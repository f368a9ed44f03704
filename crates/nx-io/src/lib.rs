//! nx-io: array file loaders.
//!
//! Loaders are looked up by file extension in a [`LoaderRegistry`] that the
//! application builds once and passes around.

pub mod cfl;
pub mod error;
pub mod npy;
pub mod registry;
pub mod synthetic;

pub use cfl::{CflLoader, read_cfl, write_cfl};
pub use error::{LoadError, LoadResult};
pub use npy::{NpyLoader, read_npy, write_npy};
pub use registry::{ArrayLoader, LoaderRegistry};
pub use synthetic::phantom;
