//! NumPy `.npy` files.

use crate::{ArrayLoader, LoadError, LoadResult};
use ndarray::{ArrayD, IxDyn, ShapeBuilder};
use npyz::{DType, NpyFile, Order, WriterBuilder};
use num_complex::{Complex, Complex64};
use nx_core::ArrayData;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub struct NpyLoader;

impl ArrayLoader for NpyLoader {
    fn name(&self) -> &'static str {
        "NumPy"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["npy"]
    }

    fn load(&self, path: &Path) -> LoadResult<ArrayData> {
        read_npy(path)
    }
}

pub fn read_npy(path: &Path) -> LoadResult<ArrayData> {
    decode_npy(&fs::read(path)?)
}

/// Decode an in-memory `.npy` file.
///
/// Integer and boolean data is widened to `f64`, `c8` to `Complex64`.
/// Scalars become one-element arrays; empty arrays are rejected.
pub fn decode_npy(bytes: &[u8]) -> LoadResult<ArrayData> {
    let npy = NpyFile::new(bytes).map_err(npy_error)?;
    let mut shape: Vec<usize> = npy.shape().iter().map(|&d| d as usize).collect();
    if shape.is_empty() {
        shape.push(1);
    }
    if shape.contains(&0) {
        return Err(LoadError::Shape {
            what: format!("zero-sized dimension in shape {shape:?}"),
        });
    }
    let fortran = npy.order() == Order::Fortran;
    let type_str = match npy.dtype() {
        DType::Plain(ts) => ts.to_string(),
        other => {
            return Err(LoadError::Npy {
                what: format!("unsupported dtype {other:?}"),
            });
        }
    };
    // Drop the byte-order character: "<f8" -> "f8".
    let code = type_str.get(1..).unwrap_or_default();
    tracing::debug!(dtype = %type_str, ?shape, fortran, "decoding npy");

    let real = |data: Vec<f64>| -> LoadResult<ArrayData> {
        Ok(ArrayData::Real(ArrayD::from_shape_vec(
            IxDyn(&shape).set_f(fortran),
            data,
        )?))
    };
    let complex = |data: Vec<Complex64>| -> LoadResult<ArrayData> {
        Ok(ArrayData::Complex(ArrayD::from_shape_vec(
            IxDyn(&shape).set_f(fortran),
            data,
        )?))
    };

    match code {
        "f8" => real(npy.into_vec::<f64>().map_err(npy_error)?),
        "f4" => real(widen(npy.into_vec::<f32>(), f64::from)?),
        "i1" => real(widen(npy.into_vec::<i8>(), f64::from)?),
        "i2" => real(widen(npy.into_vec::<i16>(), f64::from)?),
        "i4" => real(widen(npy.into_vec::<i32>(), f64::from)?),
        "i8" => real(widen(npy.into_vec::<i64>(), |v| v as f64)?),
        "u1" => real(widen(npy.into_vec::<u8>(), f64::from)?),
        "u2" => real(widen(npy.into_vec::<u16>(), f64::from)?),
        "u4" => real(widen(npy.into_vec::<u32>(), f64::from)?),
        "u8" => real(widen(npy.into_vec::<u64>(), |v| v as f64)?),
        "b1" => real(widen(npy.into_vec::<bool>(), |v| if v { 1.0 } else { 0.0 })?),
        "c16" => complex(npy.into_vec::<Complex64>().map_err(npy_error)?),
        "c8" => complex(widen(npy.into_vec::<Complex<f32>>(), |c| {
            Complex64::new(c.re.into(), c.im.into())
        })?),
        _ => Err(LoadError::Npy {
            what: format!("unsupported dtype {type_str}"),
        }),
    }
}

fn widen<T, U>(data: io::Result<Vec<T>>, f: impl Fn(T) -> U) -> LoadResult<Vec<U>> {
    Ok(data.map_err(npy_error)?.into_iter().map(f).collect())
}

fn npy_error(err: io::Error) -> LoadError {
    LoadError::Npy {
        what: err.to_string(),
    }
}

/// Write `array` as a C-order `.npy` file (`<f8` or `<c16`).
pub fn write_npy(path: &Path, array: &ArrayData) -> LoadResult<()> {
    let mut file = BufWriter::new(File::create(path)?);
    match array {
        ArrayData::Real(a) => encode(&mut file, a)?,
        ArrayData::Complex(a) => encode(&mut file, a)?,
    }
    file.flush()?;
    Ok(())
}

fn encode<T, W>(writer: W, array: &ArrayD<T>) -> io::Result<()>
where
    T: Clone + npyz::AutoSerialize,
    W: io::Write,
{
    let shape: Vec<u64> = array.shape().iter().map(|&d| d as u64).collect();
    let mut writer = npyz::WriteOptions::new()
        .default_dtype()
        .shape(&shape)
        .writer(writer)
        .begin_nd()?;
    writer.extend(array.iter())?;
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn encoded<T: Clone + npyz::AutoSerialize>(array: &ArrayD<T>) -> Vec<u8> {
        let mut bytes = Vec::new();
        encode(&mut bytes, array).unwrap();
        bytes
    }

    #[test]
    fn f8_round_trip_keeps_layout() {
        let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]].into_dyn();
        let back = decode_npy(&encoded(&a)).unwrap();
        assert_eq!(back, ArrayData::Real(a));
    }

    #[test]
    fn integers_are_widened() {
        let a = array![[1i32, -2], [3, 4]].into_dyn();
        let ArrayData::Real(back) = decode_npy(&encoded(&a)).unwrap() else {
            panic!("expected real data");
        };
        assert_eq!(back[[0, 1]], -2.0);
        assert_eq!(back.shape(), &[2, 2]);
    }

    #[test]
    fn complex_single_precision() {
        let a = array![Complex::<f32>::new(1.5, -0.5), Complex::new(0.0, 2.0)].into_dyn();
        let ArrayData::Complex(back) = decode_npy(&encoded(&a)).unwrap() else {
            panic!("expected complex data");
        };
        assert_eq!(back[[0]], Complex64::new(1.5, -0.5));
        assert_eq!(back[[1]], Complex64::new(0.0, 2.0));
    }

    #[test]
    fn garbage_is_an_npy_error() {
        assert!(matches!(
            decode_npy(b"not a numpy file"),
            Err(LoadError::Npy { .. })
        ));
    }

    #[test]
    fn zero_sized_axis_is_a_shape_error() {
        let empty = ArrayD::<f64>::zeros(IxDyn(&[0, 3]));
        match decode_npy(&encoded(&empty)) {
            Err(LoadError::Shape { what }) => assert!(what.contains("[0, 3]"), "{what}"),
            other => panic!("expected shape error, got {other:?}"),
        }
    }
}
