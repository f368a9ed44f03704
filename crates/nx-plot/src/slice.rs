//! Line and plane extraction from N-d arrays.
//!
//! Every axis except the free one(s) is fixed at an index; the free axes are
//! taken whole.

use crate::{PlotError, PlotResult};
use ndarray::{Array, Array1, Array2, ArrayD, ArrayViewD, Axis, Dimension, Ix1, Ix2};
use num_complex::Complex64;
use nx_core::ArrayData;

/// Real or complex slice of fixed dimensionality.
#[derive(Debug, Clone, PartialEq)]
pub enum Slice<D: Dimension> {
    Real(Array<f64, D>),
    Complex(Array<Complex64, D>),
}

pub type LineSlice = Slice<Ix1>;
pub type PlaneSlice = Slice<Ix2>;

impl<D: Dimension> Slice<D> {
    pub fn is_complex(&self) -> bool {
        matches!(self, Slice::Complex(_))
    }

    pub fn shape(&self) -> &[usize] {
        match self {
            Slice::Real(a) => a.shape(),
            Slice::Complex(a) => a.shape(),
        }
    }
}

/// 1D slice along `axis`; `indices[axis]` is ignored.
pub fn extract_line(array: &ArrayData, axis: usize, indices: &[usize]) -> PlotResult<LineSlice> {
    check_request(array.shape(), &[axis], indices)?;
    Ok(match array {
        ArrayData::Real(a) => Slice::Real(line_of(a, axis, indices)?),
        ArrayData::Complex(a) => Slice::Complex(line_of(a, axis, indices)?),
    })
}

/// 2D slice with rows along `axis_y` and columns along `axis_x`.
pub fn extract_plane(
    array: &ArrayData,
    axis_x: usize,
    axis_y: usize,
    indices: &[usize],
) -> PlotResult<PlaneSlice> {
    if axis_x == axis_y {
        return Err(PlotError::Slice {
            what: format!("plane axes must differ, both are {axis_x}"),
        });
    }
    check_request(array.shape(), &[axis_x, axis_y], indices)?;
    Ok(match array {
        ArrayData::Real(a) => Slice::Real(plane_of(a, axis_x, axis_y, indices)?),
        ArrayData::Complex(a) => Slice::Complex(plane_of(a, axis_x, axis_y, indices)?),
    })
}

fn check_request(shape: &[usize], free: &[usize], indices: &[usize]) -> PlotResult<()> {
    if indices.len() != shape.len() {
        return Err(PlotError::Slice {
            what: format!(
                "{} indices given for an array of rank {}",
                indices.len(),
                shape.len()
            ),
        });
    }
    if let Some(&axis) = free.iter().find(|&&axis| axis >= shape.len()) {
        return Err(PlotError::Slice {
            what: format!("axis {axis} out of range for rank {}", shape.len()),
        });
    }
    for (axis, (&index, &dim)) in indices.iter().zip(shape).enumerate() {
        if !free.contains(&axis) && index >= dim {
            return Err(PlotError::Slice {
                what: format!("index {index} out of bounds for axis {axis} with size {dim}"),
            });
        }
    }
    Ok(())
}

/// Fix every non-free axis, highest first so lower axis numbers stay valid.
fn fix_axes<'a, T>(
    array: &'a ArrayD<T>,
    free: &[usize],
    indices: &[usize],
) -> ArrayViewD<'a, T> {
    let mut view = array.view();
    for axis in (0..indices.len()).rev() {
        if !free.contains(&axis) {
            view = view.index_axis_move(Axis(axis), indices[axis]);
        }
    }
    view
}

fn line_of<T: Clone>(array: &ArrayD<T>, axis: usize, indices: &[usize]) -> PlotResult<Array1<T>> {
    fix_axes(array, &[axis], indices)
        .into_dimensionality::<Ix1>()
        .map(|v| v.to_owned())
        .map_err(|err| PlotError::Slice {
            what: err.to_string(),
        })
}

fn plane_of<T: Clone>(
    array: &ArrayD<T>,
    axis_x: usize,
    axis_y: usize,
    indices: &[usize],
) -> PlotResult<Array2<T>> {
    let plane = fix_axes(array, &[axis_x, axis_y], indices)
        .into_dimensionality::<Ix2>()
        .map_err(|err| PlotError::Slice {
            what: err.to_string(),
        })?;
    // Remaining axes keep their original order.
    let plane = if axis_x < axis_y {
        plane.reversed_axes()
    } else {
        plane
    };
    Ok(plane.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{ArrayD, IxDyn, array};

    fn counting(shape: &[usize]) -> ArrayData {
        let n = shape.iter().product();
        let data = (0..n).map(|v| v as f64).collect();
        ArrayData::Real(ArrayD::from_shape_vec(IxDyn(shape), data).unwrap())
    }

    #[test]
    fn line_along_middle_axis() {
        let arr = counting(&[2, 3, 4]);
        let line = extract_line(&arr, 1, &[1, 99, 2]).unwrap();
        // element (1, j, 2) = 12 + 4j + 2
        assert_eq!(line, Slice::Real(array![14.0, 18.0, 22.0]));
    }

    #[test]
    fn plane_rows_follow_y_axis() {
        let arr = counting(&[2, 3]);
        let Slice::Real(img) = extract_plane(&arr, 0, 1, &[0, 0]).unwrap() else {
            panic!("expected real slice");
        };
        assert_eq!(img.dim(), (3, 2));
        assert_eq!(img, array![[0.0, 3.0], [1.0, 4.0], [2.0, 5.0]]);

        let Slice::Real(img) = extract_plane(&arr, 1, 0, &[0, 0]).unwrap() else {
            panic!("expected real slice");
        };
        assert_eq!(img.dim(), (2, 3));
        assert_eq!(img[[1, 2]], 5.0);
    }

    #[test]
    fn out_of_bounds_index_is_an_error() {
        let arr = counting(&[2, 3, 4]);
        let err = extract_line(&arr, 0, &[0, 3, 0]).unwrap_err();
        assert!(matches!(err, PlotError::Slice { .. }));
        assert!(err.to_string().contains("axis 1"));
    }

    #[test]
    fn wrong_index_count_is_an_error() {
        let arr = counting(&[2, 3]);
        assert!(extract_line(&arr, 0, &[0]).is_err());
        assert!(extract_plane(&arr, 0, 2, &[0, 0]).is_err());
        assert!(extract_plane(&arr, 1, 1, &[0, 0]).is_err());
    }

    #[test]
    fn complex_input_gives_complex_slice() {
        let arr = ArrayData::complex_from_vec(
            &[2, 2],
            vec![
                Complex64::new(0.0, 1.0),
                Complex64::new(1.0, 0.0),
                Complex64::new(2.0, 0.0),
                Complex64::new(3.0, -1.0),
            ],
        )
        .unwrap();
        let line = extract_line(&arr, 1, &[1, 0]).unwrap();
        assert!(line.is_complex());
        assert_eq!(line.shape(), &[2]);
    }
}
