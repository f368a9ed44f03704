//! Real or complex N-dimensional array data.

use crate::{CoreError, CoreResult};
use ndarray::{ArrayD, IxDyn};
use num_complex::Complex64;
use std::fmt;

/// Element kind of an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Real,
    Complex,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Real => write!(f, "real"),
            ElementKind::Complex => write!(f, "complex"),
        }
    }
}

/// Dense N-dimensional data handed to the viewer.
///
/// Loaders widen every supported element type to `f64` or `Complex64`.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayData {
    Real(ArrayD<f64>),
    Complex(ArrayD<Complex64>),
}

impl ArrayData {
    /// Build a real array from row-major data.
    pub fn real_from_vec(shape: &[usize], data: Vec<f64>) -> CoreResult<Self> {
        let actual = data.len();
        ArrayD::from_shape_vec(IxDyn(shape), data)
            .map(ArrayData::Real)
            .map_err(|_| shape_mismatch(shape, actual))
    }

    /// Build a complex array from row-major data.
    pub fn complex_from_vec(shape: &[usize], data: Vec<Complex64>) -> CoreResult<Self> {
        let actual = data.len();
        ArrayD::from_shape_vec(IxDyn(shape), data)
            .map(ArrayData::Complex)
            .map_err(|_| shape_mismatch(shape, actual))
    }

    pub fn shape(&self) -> &[usize] {
        match self {
            ArrayData::Real(a) => a.shape(),
            ArrayData::Complex(a) => a.shape(),
        }
    }

    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    pub fn len(&self) -> usize {
        match self {
            ArrayData::Real(a) => a.len(),
            ArrayData::Complex(a) => a.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            ArrayData::Real(_) => ElementKind::Real,
            ArrayData::Complex(_) => ElementKind::Complex,
        }
    }

    pub fn is_complex(&self) -> bool {
        self.kind() == ElementKind::Complex
    }

    /// Shape, kind and value range. Complex arrays report magnitude range.
    pub fn summary(&self) -> ArraySummary {
        let (min, max) = match self {
            ArrayData::Real(a) => min_max(a.iter().copied()),
            ArrayData::Complex(a) => min_max(a.iter().map(|z| z.norm())),
        };
        ArraySummary {
            shape: self.shape().to_vec(),
            kind: self.kind(),
            len: self.len(),
            min,
            max,
        }
    }
}

impl From<ArrayD<f64>> for ArrayData {
    fn from(a: ArrayD<f64>) -> Self {
        ArrayData::Real(a)
    }
}

impl From<ArrayD<Complex64>> for ArrayData {
    fn from(a: ArrayD<Complex64>) -> Self {
        ArrayData::Complex(a)
    }
}

/// Short description of an array for status lines and the CLI.
#[derive(Debug, Clone, PartialEq)]
pub struct ArraySummary {
    pub shape: Vec<usize>,
    pub kind: ElementKind,
    pub len: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl fmt::Display for ArraySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape={:?} kind={} elements={}", self.shape, self.kind, self.len)?;
        if let (Some(min), Some(max)) = (self.min, self.max) {
            let what = match self.kind {
                ElementKind::Real => "range",
                ElementKind::Complex => "magnitude range",
            };
            write!(f, " {what}=[{min:.6e}, {max:.6e}]")?;
        }
        Ok(())
    }
}

fn shape_mismatch(shape: &[usize], actual: usize) -> CoreError {
    CoreError::ShapeMismatch {
        what: "array data",
        expected: shape.iter().product(),
        actual,
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (Option<f64>, Option<f64>) {
    values
        .filter(|v| v.is_finite())
        .fold((None, None), |(lo, hi), v| {
            (
                Some(lo.map_or(v, |lo: f64| lo.min(v))),
                Some(hi.map_or(v, |hi: f64| hi.max(v))),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_from_vec_checks_length() {
        let err = ArrayData::real_from_vec(&[2, 3], vec![0.0; 5]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::ShapeMismatch {
                expected: 6,
                actual: 5,
                ..
            }
        ));
    }

    #[test]
    fn summary_reports_magnitude_for_complex() {
        let data = vec![Complex64::new(3.0, 4.0), Complex64::new(0.0, -1.0)];
        let arr = ArrayData::complex_from_vec(&[2], data).unwrap();
        let summary = arr.summary();
        assert_eq!(summary.kind, ElementKind::Complex);
        assert_eq!(summary.min, Some(1.0));
        assert_eq!(summary.max, Some(5.0));
        assert!(summary.to_string().contains("magnitude range"));
    }

    #[test]
    fn summary_skips_non_finite() {
        let arr = ArrayData::real_from_vec(&[3], vec![f64::NAN, -2.0, 7.5]).unwrap();
        let summary = arr.summary();
        assert_eq!(summary.min, Some(-2.0));
        assert_eq!(summary.max, Some(7.5));
    }
}
