//! Plot renderers and their dispatch table.
//!
//! [`render`] validates the current values, runs the renderer registered
//! for the mode and turns any failure into an error panel. The overall
//! title is set in every case.

mod line;
mod map;
mod xy;

use crate::surface::{PanelId, Surface, TextPanel};
use crate::{PlotError, PlotResult};
use nx_core::{ArrayData, CurrentValues, ParamSet, PlotMode};

pub const ERROR_TITLE: &str = "WARNING: Plotting failed!";
pub const ERROR_TITLE_COLOR: [u8; 3] = [0x99, 0x99, 0x33];
pub const ERROR_WRAP_COLUMNS: usize = 50;

const VALUES_LABEL: &str = "Values / arb.units";

/// Everything a renderer reads.
#[derive(Debug, Clone, Copy)]
pub struct PlotRequest<'a> {
    pub mode: PlotMode,
    pub array: &'a ArrayData,
    pub params: &'a ParamSet,
    pub values: &'a CurrentValues,
    /// Overall figure title.
    pub title: &'a str,
}

pub type Renderer = fn(&mut dyn Surface, &PlotRequest<'_>) -> PlotResult<()>;

/// Renderer registered for a mode.
pub fn renderer_for(mode: PlotMode) -> Renderer {
    match mode {
        PlotMode::Line1d => line::render_line,
        PlotMode::PlotXy => xy::render_plot_xy,
        PlotMode::Map2d => map::render_map,
    }
}

/// Draw `request` on `surface`; failures become an error panel.
pub fn render(surface: &mut dyn Surface, request: &PlotRequest<'_>) {
    let values = request.values.validated(request.params);
    let checked = PlotRequest {
        values: &values,
        ..*request
    };
    surface.clear();
    match renderer_for(request.mode)(surface, &checked) {
        Ok(()) => tracing::debug!(mode = %request.mode, "rendered"),
        Err(err) => {
            tracing::warn!(mode = %request.mode, %err, "plotting failed");
            show_error(surface, &err);
        }
    }
    surface.set_title(request.title);
}

fn show_error(surface: &mut dyn Surface, err: &PlotError) {
    surface.clear();
    surface.show_text(TextPanel {
        text: wrap(&err.to_string(), ERROR_WRAP_COLUMNS),
        title: ERROR_TITLE.to_string(),
        title_color: ERROR_TITLE_COLOR,
        monospace: true,
    });
}

/// Greedy word wrap; words longer than `width` are split.
fn wrap(text: &str, width: usize) -> String {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;
    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for chunk in chars.chunks(width) {
            if line_len > 0 && line_len + 1 + chunk.len() > width {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.extend(chunk);
            line_len += chunk.len();
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines.join("\n")
}

fn single_panel(surface: &mut dyn Surface) -> PlotResult<PanelId> {
    surface
        .subplots(1, 1)
        .into_iter()
        .next()
        .ok_or_else(|| PlotError::Configuration {
            what: "surface returned no panel".to_string(),
        })
}

fn panel_pair(surface: &mut dyn Surface, (rows, cols): (usize, usize)) -> PlotResult<[PanelId; 2]> {
    <[PanelId; 2]>::try_from(surface.subplots(rows, cols)).map_err(|ids| {
        PlotError::Configuration {
            what: format!("expected 2 panels, surface returned {}", ids.len()),
        }
    })
}

/// Sample positions `0, 1, ..` for a line of `n` values.
fn positions(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}
