//! Splitting complex slices into two real panels.

use ndarray::{Array, Dimension};
use num_complex::Complex64;
use nx_core::ComplexMode;
use std::f64::consts::PI;

/// Phase axis limits for line and xy panels.
pub const LINE_PHASE_LIMITS: (f64, f64) = (-1.1 * PI, 1.1 * PI);

/// Colour range for phase maps.
pub const MAP_PHASE_LIMITS: (f64, f64) = (-PI, PI);

/// One real component of a complex slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Part<D: Dimension> {
    pub title: &'static str,
    pub data: Array<f64, D>,
}

/// Split into (real, imaginary) or (magnitude, phase).
pub fn split<D: Dimension>(data: &Array<Complex64, D>, mode: ComplexMode) -> [Part<D>; 2] {
    match mode {
        ComplexMode::RealImag => [
            Part {
                title: "Real Part",
                data: data.mapv(|c| c.re),
            },
            Part {
                title: "Imaginary Part",
                data: data.mapv(|c| c.im),
            },
        ],
        ComplexMode::MagPhase => [
            Part {
                title: "Magnitude",
                data: data.mapv(|c| c.norm()),
            },
            Part {
                title: "Phase",
                data: data.mapv(|c| c.arg()),
            },
        ],
    }
}

/// Axis limits for the two panels of a complex line or xy plot.
pub fn line_limits(mode: ComplexMode) -> [Option<(f64, f64)>; 2] {
    match mode {
        ComplexMode::RealImag => [None, None],
        ComplexMode::MagPhase => [None, Some(LINE_PHASE_LIMITS)],
    }
}

/// Finite minimum and maximum, or `None` when nothing is finite.
pub fn finite_range<'a>(values: impl IntoIterator<Item = &'a f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Colour ranges for the two panels of a complex map.
///
/// Real and imaginary parts share one range; magnitude runs from zero.
pub fn map_limits<D: Dimension>(parts: &[Part<D>; 2], mode: ComplexMode) -> [(f64, f64); 2] {
    match mode {
        ComplexMode::RealImag => {
            let shared = finite_range(parts[0].data.iter().chain(parts[1].data.iter()))
                .unwrap_or((0.0, 1.0));
            [shared, shared]
        }
        ComplexMode::MagPhase => {
            let max = finite_range(parts[0].data.iter()).map_or(1.0, |(_, hi)| hi);
            [(0.0, max), MAP_PHASE_LIMITS]
        }
    }
}
