//! Deterministic test volume shown when no file is given.

use ndarray::{ArrayD, Dimension, IxDyn};
use num_complex::Complex64;
use nx_core::ArrayData;
use std::f64::consts::PI;

/// Shape of the default phantom: two spatial axes, a decay axis and a
/// phase-cycling axis.
pub const DEFAULT_SHAPE: [usize; 4] = [64, 64, 16, 8];

/// Complex phantom: nested ellipses on the first two axes, exponential
/// decay along the third, phase cycling along the fourth.
pub fn phantom(shape: &[usize]) -> ArrayData {
    let array = ArrayD::from_shape_fn(IxDyn(shape), |idx| {
        let x = centered(idx.slice(), shape, 0);
        let y = centered(idx.slice(), shape, 1);
        let outer = (x / 0.8).powi(2) + (y / 0.6).powi(2) <= 1.0;
        let inner = ((x - 0.2) / 0.25).powi(2) + (y / 0.35).powi(2) <= 1.0;
        let base = match (outer, inner) {
            (true, true) => 0.5,
            (true, false) => 1.0,
            _ => 0.0,
        };
        let decay = (-3.0 * fraction(idx.slice(), shape, 2)).exp();
        let phase = 2.0 * PI * fraction(idx.slice(), shape, 3) + PI * x;
        Complex64::from_polar(base * decay, phase)
    });
    ArrayData::Complex(array)
}

/// Position along `axis` mapped to [-1, 1]; 0 for absent or singleton axes.
fn centered(idx: &[usize], shape: &[usize], axis: usize) -> f64 {
    match shape.get(axis) {
        Some(&n) if n > 1 => 2.0 * idx[axis] as f64 / (n - 1) as f64 - 1.0,
        _ => 0.0,
    }
}

/// Position along `axis` as a fraction of its length; 0 when absent.
fn fraction(idx: &[usize], shape: &[usize], axis: usize) -> f64 {
    match shape.get(axis) {
        Some(&n) if n > 0 => idx[axis] as f64 / n as f64,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_phantom_shape_and_kind() {
        let arr = phantom(&DEFAULT_SHAPE);
        assert_eq!(arr.shape(), DEFAULT_SHAPE);
        assert!(arr.is_complex());
    }

    #[test]
    fn centre_is_inside_and_corner_is_empty() {
        let ArrayData::Complex(a) = phantom(&[33, 33]) else {
            panic!("expected complex");
        };
        assert!(a[[16, 16]].norm() > 0.4);
        assert_eq!(a[[0, 0]].norm(), 0.0);
    }

    #[test]
    fn low_rank_shapes_work() {
        assert_eq!(phantom(&[5]).len(), 5);
    }
}
