use super::{VALUES_LABEL, panel_pair, positions, single_panel};
use crate::complex;
use crate::layout;
use crate::settings::{self, ComplexSettings};
use crate::slice::{self, Slice};
use crate::surface::{LineSeries, Surface};
use crate::{PlotRequest, PlotResult};
use nx_core::params::keys;

/// Values along one axis against their index.
pub(super) fn render_line(surface: &mut dyn Surface, request: &PlotRequest<'_>) -> PlotResult<()> {
    let values = request.values;
    let axis = settings::index(values, keys::AXIS)?;
    let indices = settings::indices(values, keys::INDEX_PREFIX, request.array.ndim())?;
    let style = settings::line_style(values)?;
    let x_label = format!("Index of Axis {axis}");

    match slice::extract_line(request.array, axis, &indices)? {
        Slice::Real(y) => {
            let panel = single_panel(surface)?;
            surface.plot_line(
                panel,
                LineSeries {
                    x: positions(y.len()),
                    y: y.to_vec(),
                    style,
                },
            );
            surface.set_axis_labels(panel, &x_label, VALUES_LABEL);
        }
        Slice::Complex(y) => {
            let cx = ComplexSettings::from_values(values)?;
            let panels = panel_pair(surface, layout::line_grid(cx.display))?;
            let x = positions(y.len());
            let parts = complex::split(&y, cx.mode);
            let limits = complex::line_limits(cx.mode);
            for ((panel, part), y_limits) in panels.into_iter().zip(parts).zip(limits) {
                surface.plot_line(
                    panel,
                    LineSeries {
                        x: x.clone(),
                        y: part.data.to_vec(),
                        style: style.clone(),
                    },
                );
                surface.set_axis_labels(panel, &x_label, VALUES_LABEL);
                surface.set_panel_title(panel, part.title);
                if y_limits.is_some() {
                    surface.set_limits(panel, None, y_limits);
                }
            }
        }
    }
    Ok(())
}
