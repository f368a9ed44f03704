//! BART CFL header/data pairs.
//!
//! `<base>.hdr` holds a comment line and a line of dimensions; `<base>.cfl`
//! holds little-endian `f32` real/imaginary pairs in column-major order.

use crate::{ArrayLoader, LoadError, LoadResult};
use ndarray::{ArrayD, IxDyn, ShapeBuilder};
use num_complex::Complex64;
use nx_core::ArrayData;
use std::fs;
use std::path::{Path, PathBuf};

const BYTES_PER_ELEMENT: usize = 8;

pub struct CflLoader;

impl ArrayLoader for CflLoader {
    fn name(&self) -> &'static str {
        "CFL"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["cfl", "hdr"]
    }

    fn load(&self, path: &Path) -> LoadResult<ArrayData> {
        read_cfl(path)
    }
}

/// Path without a trailing `.cfl` or `.hdr`.
pub fn base_path(path: &Path) -> PathBuf {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("cfl") || ext.eq_ignore_ascii_case("hdr") => {
            path.with_extension("")
        }
        _ => path.to_path_buf(),
    }
}

fn sibling(base: &Path, ext: &str) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

/// Dimensions from header text, trailing singletons removed.
///
/// Headers whose element count overflows are malformed.
pub fn parse_header(text: &str, path: &Path) -> LoadResult<Vec<usize>> {
    let malformed = |what: String| LoadError::MalformedHeader {
        path: path.to_path_buf(),
        what,
    };
    let line = text
        .lines()
        .nth(1)
        .ok_or_else(|| malformed("missing dimensions line".to_string()))?;
    let mut dims = line
        .split_whitespace()
        .map(|field| match field.parse::<usize>() {
            Ok(0) => Err(malformed("zero-sized dimension".to_string())),
            Ok(dim) => Ok(dim),
            Err(_) => Err(malformed(format!("invalid dimension `{field}`"))),
        })
        .collect::<LoadResult<Vec<_>>>()?;
    if dims.is_empty() {
        return Err(malformed("no dimensions".to_string()));
    }
    while dims.len() > 1 && dims.last() == Some(&1) {
        dims.pop();
    }
    // The data file size must stay addressable.
    dims.iter()
        .try_fold(BYTES_PER_ELEMENT, |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| malformed("dimensions overflow".to_string()))?;
    Ok(dims)
}

pub fn read_cfl(path: &Path) -> LoadResult<ArrayData> {
    let base = base_path(path);
    let hdr_path = sibling(&base, "hdr");
    let cfl_path = sibling(&base, "cfl");

    let dims = parse_header(&fs::read_to_string(&hdr_path)?, &hdr_path)?;
    let expected: usize = dims.iter().product();
    let bytes = fs::read(&cfl_path)?;
    let found = bytes.len() / BYTES_PER_ELEMENT;
    if found < expected {
        return Err(LoadError::Truncated {
            path: cfl_path,
            expected,
            found,
        });
    }
    if bytes.len() > expected * BYTES_PER_ELEMENT {
        tracing::warn!(
            path = %cfl_path.display(),
            extra = bytes.len() - expected * BYTES_PER_ELEMENT,
            "ignoring trailing bytes"
        );
    }

    let data: Vec<Complex64> = bytes
        .chunks_exact(BYTES_PER_ELEMENT)
        .take(expected)
        .map(|chunk| {
            let re = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            let im = f32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]);
            Complex64::new(re as f64, im as f64)
        })
        .collect();
    let array = ArrayD::from_shape_vec(IxDyn(&dims).f(), data)?;
    Ok(ArrayData::Complex(array))
}

/// Write `array` as a CFL pair next to `path`; real data gets zero
/// imaginary parts.
pub fn write_cfl(path: &Path, array: &ArrayData) -> LoadResult<()> {
    let base = base_path(path);
    let dims = array
        .shape()
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    fs::write(sibling(&base, "hdr"), format!("# Dimensions\n{dims}\n"))?;

    let mut bytes = Vec::with_capacity(array.len() * BYTES_PER_ELEMENT);
    let mut push = |re: f64, im: f64| {
        bytes.extend_from_slice(&(re as f32).to_le_bytes());
        bytes.extend_from_slice(&(im as f32).to_le_bytes());
    };
    // Iterating the transposed view visits elements in column-major order.
    match array {
        ArrayData::Real(a) => a.t().iter().for_each(|&v| push(v, 0.0)),
        ArrayData::Complex(a) => a.t().iter().for_each(|c| push(c.re, c.im)),
    }
    fs::write(sibling(&base, "cfl"), bytes)?;
    Ok(())
}
