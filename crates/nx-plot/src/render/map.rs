use super::{VALUES_LABEL, panel_pair, single_panel};
use crate::complex;
use crate::layout;
use crate::settings::{self, ComplexSettings};
use crate::slice::{self, Slice};
use crate::surface::{ImageLayer, Surface};
use crate::{PlotError, PlotRequest, PlotResult};
use nx_core::ParamSet;
use nx_core::params::keys;

/// Image of the plane spanned by `axis-0` (columns) and `axis-1` (rows).
pub(super) fn render_map(surface: &mut dyn Surface, request: &PlotRequest<'_>) -> PlotResult<()> {
    let values = request.values;
    let axis_x = settings::index(values, keys::AXIS_0)?;
    let axis_y = settings::index(values, keys::AXIS_1)?;
    if axis_x == axis_y {
        return Err(PlotError::Configuration {
            what: format!(
                "`{}` and `{}` must be different!",
                label(request.params, keys::AXIS_0),
                label(request.params, keys::AXIS_1)
            ),
        });
    }
    let indices = settings::indices(values, keys::INDEX_PREFIX, request.array.ndim())?;
    let colormaps = [
        settings::choice(values, keys::CMAP_0)?,
        settings::choice(values, keys::CMAP_1)?,
    ];
    let x_label = format!("Index of Axis {axis_x}");
    let y_label = format!("Index of Axis {axis_y}");

    match slice::extract_plane(request.array, axis_x, axis_y, &indices)? {
        Slice::Real(img) => {
            let (vmin, vmax) = complex::finite_range(img.iter()).unwrap_or((0.0, 1.0));
            let panel = single_panel(surface)?;
            surface.show_image(
                panel,
                ImageLayer {
                    data: img,
                    colormap: colormaps[0].to_string(),
                    vmin,
                    vmax,
                    colorbar_label: VALUES_LABEL.to_string(),
                },
            );
            surface.set_axis_labels(panel, &x_label, &y_label);
        }
        Slice::Complex(img) => {
            let cx = ComplexSettings::from_values(values)?;
            let (height, width) = img.dim();
            let panels = panel_pair(surface, layout::map_grid(cx.display, height, width))?;
            let parts = complex::split(&img, cx.mode);
            let limits = complex::map_limits(&parts, cx.mode);
            for (((panel, part), (vmin, vmax)), cmap) in
                panels.into_iter().zip(parts).zip(limits).zip(colormaps)
            {
                surface.show_image(
                    panel,
                    ImageLayer {
                        data: part.data,
                        colormap: cmap.to_string(),
                        vmin,
                        vmax,
                        colorbar_label: VALUES_LABEL.to_string(),
                    },
                );
                surface.set_axis_labels(panel, &x_label, &y_label);
                surface.set_panel_title(panel, part.title);
            }
        }
    }
    Ok(())
}

fn label<'a>(params: &'a ParamSet, name: &'a str) -> &'a str {
    params.get(name).map_or(name, |d| d.label())
}
