//! Plot mode selection.

use crate::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Plot family; decides which renderer and parameter set apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlotMode {
    /// Line plot of one axis.
    #[serde(rename = "1d")]
    Line1d,
    /// One slice plotted against another.
    #[serde(rename = "2d_plot_xy")]
    PlotXy,
    /// Image of two axes.
    #[serde(rename = "2d_map")]
    Map2d,
}

impl PlotMode {
    pub const ALL: [PlotMode; 3] = [PlotMode::Line1d, PlotMode::PlotXy, PlotMode::Map2d];

    /// Stable key used on the command line and in logs.
    pub fn key(self) -> &'static str {
        match self {
            PlotMode::Line1d => "1d",
            PlotMode::PlotXy => "2d_plot_xy",
            PlotMode::Map2d => "2d_map",
        }
    }

    /// Human-readable title, used as the figure title.
    pub fn title(self) -> &'static str {
        match self {
            PlotMode::Line1d => "1D",
            PlotMode::PlotXy => "2D Plot(x,y)",
            PlotMode::Map2d => "2D Map",
        }
    }

    /// Shape rule: rank 1 is a line, any size-2 axis is an x/y pair,
    /// everything else is a map.
    pub fn from_shape(shape: &[usize]) -> Self {
        if shape.len() <= 1 {
            PlotMode::Line1d
        } else if shape.contains(&2) {
            PlotMode::PlotXy
        } else {
            PlotMode::Map2d
        }
    }
}

impl fmt::Display for PlotMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PlotMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlotMode::ALL
            .into_iter()
            .find(|mode| mode.key() == s)
            .ok_or_else(|| CoreError::UnknownMode {
                mode: s.to_string(),
            })
    }
}

/// Pick the plot mode for an array shape.
///
/// A recognized explicit mode wins. An unrecognized one falls back to the
/// shape rule; this never fails.
pub fn select(shape: &[usize], explicit: Option<&str>) -> PlotMode {
    if let Some(requested) = explicit {
        match requested.parse::<PlotMode>() {
            Ok(mode) => {
                tracing::debug!(mode = %mode, "using explicit plot mode");
                return mode;
            }
            Err(err) => {
                tracing::warn!(%err, "falling back to automatic plot mode");
            }
        }
    }
    let mode = PlotMode::from_shape(shape);
    tracing::debug!(?shape, mode = %mode, "selected plot mode from shape");
    mode
}
