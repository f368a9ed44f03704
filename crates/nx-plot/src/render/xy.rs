use super::{panel_pair, single_panel};
use crate::complex;
use crate::layout;
use crate::settings::{self, ComplexSettings};
use crate::slice::{self, Slice};
use crate::surface::{LineSeries, Surface};
use crate::{PlotError, PlotRequest, PlotResult};
use nx_core::params::keys;

/// Values at the x indices against values at the y indices.
pub(super) fn render_plot_xy(
    surface: &mut dyn Surface,
    request: &PlotRequest<'_>,
) -> PlotResult<()> {
    let values = request.values;
    let rank = request.array.ndim();
    let axis = settings::index(values, keys::AXIS)?;
    let x_indices = settings::indices(values, keys::X_INDEX_PREFIX, rank)?;
    let y_indices = settings::indices(values, keys::Y_INDEX_PREFIX, rank)?;
    let style = settings::line_style(values)?;
    let x_label = values_label(&x_indices, axis);
    let y_label = values_label(&y_indices, axis);

    let xs = slice::extract_line(request.array, axis, &x_indices)?;
    let ys = slice::extract_line(request.array, axis, &y_indices)?;
    match (xs, ys) {
        (Slice::Real(x), Slice::Real(y)) => {
            let panel = single_panel(surface)?;
            surface.plot_line(
                panel,
                LineSeries {
                    x: x.to_vec(),
                    y: y.to_vec(),
                    style,
                },
            );
            surface.set_axis_labels(panel, &x_label, &y_label);
        }
        (Slice::Complex(x), Slice::Complex(y)) => {
            let cx = ComplexSettings::from_values(values)?;
            let panels = panel_pair(surface, layout::line_grid(cx.display))?;
            let x_parts = complex::split(&x, cx.mode);
            let y_parts = complex::split(&y, cx.mode);
            let limits = complex::line_limits(cx.mode);
            for (((panel, x_part), y_part), lim) in
                panels.into_iter().zip(x_parts).zip(y_parts).zip(limits)
            {
                surface.plot_line(
                    panel,
                    LineSeries {
                        x: x_part.data.to_vec(),
                        y: y_part.data.to_vec(),
                        style: style.clone(),
                    },
                );
                surface.set_axis_labels(panel, &x_label, &y_label);
                surface.set_panel_title(panel, x_part.title);
                if lim.is_some() {
                    surface.set_limits(panel, lim, lim);
                }
            }
        }
        _ => {
            return Err(PlotError::Slice {
                what: "x and y slices differ in element kind".to_string(),
            });
        }
    }
    Ok(())
}

/// `Values @ [0, :, 3] / arb.units`, with `:` on the plotted axis.
fn values_label(indices: &[usize], axis: usize) -> String {
    let position = indices
        .iter()
        .enumerate()
        .map(|(i, index)| {
            if i == axis {
                ":".to_string()
            } else {
                index.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("Values @ [{position}] / arb.units")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_marks_plotted_axis() {
        assert_eq!(values_label(&[0, 5, 3], 1), "Values @ [0, :, 3] / arb.units");
    }
}
