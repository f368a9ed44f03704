//! nx-core: array model and the mode/parameter protocol for numex.
//!
//! Contains:
//! - array (real or complex N-dimensional data)
//! - mode (plot mode selection from array shape)
//! - params (parameter descriptors, parameter sets, per-mode builder)
//! - values (current widget values and their re-validation)
//! - styles (fixed palettes for line styling and colormaps)
//! - error (shared error type)

pub mod array;
pub mod builder;
pub mod error;
pub mod mode;
pub mod params;
pub mod styles;
pub mod values;

pub use array::{ArrayData, ArraySummary, ElementKind};
pub use builder::build;
pub use error::{CoreError, CoreResult};
pub use mode::{PlotMode, select};
pub use params::{ComplexDisplay, ComplexMode, EnumParam, NumericParam, ParamDescriptor, ParamSet};
pub use values::{CurrentValues, MergeReport, ParamValue};
