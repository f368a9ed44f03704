//! Typed views of the current values, as each renderer needs them.

use crate::surface::{Dash, LineStyle, Marker};
use crate::{PlotError, PlotResult};
use nx_core::params::keys;
use nx_core::{ComplexDisplay, ComplexMode, CoreError, CurrentValues};

pub fn index(values: &CurrentValues, name: &str) -> PlotResult<usize> {
    values.index(name).ok_or_else(|| missing(name))
}

pub fn number(values: &CurrentValues, name: &str) -> PlotResult<f64> {
    values.number(name).ok_or_else(|| missing(name))
}

pub fn choice<'a>(values: &'a CurrentValues, name: &str) -> PlotResult<&'a str> {
    values.choice(name).ok_or_else(|| missing(name))
}

/// One index per axis from keys `<prefix>0 .. <prefix>{rank-1}`.
pub fn indices(values: &CurrentValues, prefix: &str, rank: usize) -> PlotResult<Vec<usize>> {
    (0..rank)
        .map(|axis| index(values, &format!("{prefix}{axis}")))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComplexSettings {
    pub mode: ComplexMode,
    pub display: ComplexDisplay,
}

impl ComplexSettings {
    pub fn from_values(values: &CurrentValues) -> PlotResult<Self> {
        Ok(Self {
            mode: choice(values, keys::COMPLEX_MODE)?.parse()?,
            display: choice(values, keys::COMPLEX_DISPLAY_MODE)?.parse()?,
        })
    }
}

/// Line styling shared by the 1D and xy renderers.
pub fn line_style(values: &CurrentValues) -> PlotResult<LineStyle> {
    let color_name = choice(values, keys::LINE_COLOR)?;
    let color = nx_core::styles::line_color(color_name)
        .ok_or_else(|| unknown(keys::LINE_COLOR, color_name))?;
    let dash_key = choice(values, keys::LINE_STYLE)?;
    let dash = Dash::from_key(dash_key).ok_or_else(|| unknown(keys::LINE_STYLE, dash_key))?;
    let marker_key = choice(values, keys::LINE_MARKER)?;
    let marker =
        Marker::from_key(marker_key).ok_or_else(|| unknown(keys::LINE_MARKER, marker_key))?;
    Ok(LineStyle {
        color,
        width: number(values, keys::LINE_WIDTH)? as f32,
        dash,
        marker,
        marker_size: number(values, keys::MARKER_SIZE)? as f32,
    })
}

fn missing(name: &str) -> PlotError {
    PlotError::MissingValue {
        name: name.to_string(),
    }
}

fn unknown(name: &str, value: &str) -> PlotError {
    CoreError::UnknownChoice {
        name: name.to_string(),
        value: value.to_string(),
    }
    .into()
}
