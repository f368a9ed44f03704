//! Paints a retained [`Figure`] with egui_plot.

use egui::{Color32, ColorImage, RichText, TextureHandle, TextureOptions};
use egui_plot::{
    Line, LineStyle as PlotLineStyle, MarkerShape, Plot, PlotImage, PlotPoint, PlotPoints, Points,
};
use nx_plot::{Colormap, Dash, Figure, ImageLayer, LineSeries, Marker, Panel, PanelItem};

const COLORBAR_WIDTH: f32 = 14.0;
const COLORBAR_STEPS: usize = 64;

/// Texture cache for the images of one figure revision.
#[derive(Default)]
pub struct FigureView {
    revision: Option<u64>,
    textures: Vec<Option<TextureHandle>>,
}

impl FigureView {
    pub fn show(&mut self, ui: &mut egui::Ui, figure: &Figure) {
        if self.revision != Some(figure.revision()) {
            self.revision = Some(figure.revision());
            self.textures = figure
                .panels()
                .iter()
                .enumerate()
                .map(|(i, panel)| {
                    panel.images().next().map(|image| {
                        ui.ctx().load_texture(
                            format!("panel-{i}"),
                            color_image(image),
                            TextureOptions::NEAREST,
                        )
                    })
                })
                .collect();
        }

        if let Some(title) = figure.title() {
            ui.vertical_centered(|ui| ui.heading(title));
        }

        let (rows, cols) = figure.grid();
        if rows == 0 || cols == 0 {
            return;
        }
        let spacing = ui.spacing().item_spacing;
        let available = ui.available_size();
        let cell = egui::vec2(
            (available.x - spacing.x * (cols - 1) as f32) / cols as f32,
            (available.y - spacing.y * (rows - 1) as f32) / rows as f32,
        );

        for row in 0..rows {
            ui.horizontal(|ui| {
                for col in 0..cols {
                    let id = row * cols + col;
                    if let Some(panel) = figure.panel(id) {
                        let texture = self.textures.get(id).and_then(Option::as_ref);
                        ui.allocate_ui(cell, |ui| show_panel(ui, id, panel, texture, cell));
                    }
                }
            });
        }
    }
}

fn show_panel(
    ui: &mut egui::Ui,
    id: usize,
    panel: &Panel,
    texture: Option<&TextureHandle>,
    size: egui::Vec2,
) {
    if let Some(text) = panel.texts().next() {
        let [r, g, b] = text.title_color;
        ui.vertical(|ui| {
            ui.label(RichText::new(&text.title).color(Color32::from_rgb(r, g, b)).strong());
            let body = RichText::new(&text.text);
            ui.label(if text.monospace { body.monospace() } else { body });
        });
        return;
    }

    ui.vertical(|ui| {
        if let Some(title) = &panel.title {
            ui.vertical_centered(|ui| ui.label(title));
        }
        let image = panel.images().next();
        let colorbar = if image.is_some() { COLORBAR_WIDTH * 4.0 } else { 0.0 };
        let plot_size = egui::vec2(
            (size.x - colorbar).max(50.0),
            ui.available_height().max(50.0),
        );

        ui.horizontal(|ui| {
            let mut plot = Plot::new(("figure_panel", id))
                .width(plot_size.x)
                .height(plot_size.y)
                .x_axis_label(panel.x_label.clone().unwrap_or_default())
                .y_axis_label(panel.y_label.clone().unwrap_or_default());
            if let Some((lo, hi)) = panel.x_limits {
                plot = plot.include_x(lo).include_x(hi);
            }
            if let Some((lo, hi)) = panel.y_limits {
                plot = plot.include_y(lo).include_y(hi);
            }
            if image.is_some() {
                plot = plot.data_aspect(1.0);
            }

            plot.show(ui, |plot_ui| {
                for item in &panel.items {
                    match item {
                        PanelItem::Line(series) => {
                            let (line, points) = line_items(series);
                            if let Some(line) = line {
                                plot_ui.line(line);
                            }
                            if let Some(points) = points {
                                plot_ui.points(points);
                            }
                        }
                        PanelItem::Image(layer) => {
                            if let Some(texture) = texture {
                                let (w, h) = (layer.width() as f64, layer.height() as f64);
                                plot_ui.image(PlotImage::new(
                                    texture,
                                    PlotPoint::new(w / 2.0 - 0.5, h / 2.0 - 0.5),
                                    [w as f32, h as f32],
                                ));
                            }
                        }
                        PanelItem::Text(_) => {}
                    }
                }
            });

            if let Some(layer) = image {
                show_colorbar(ui, layer, plot_size.y);
            }
        });
    });
}

fn line_items(series: &LineSeries) -> (Option<Line>, Option<Points>) {
    let style = &series.style;
    let [r, g, b] = style.color;
    let color = Color32::from_rgb(r, g, b);
    let points: Vec<[f64; 2]> = series.points().collect();

    let dash = match style.dash {
        Dash::Solid => Some(PlotLineStyle::Solid),
        Dash::Dashed => Some(PlotLineStyle::Dashed { length: 8.0 }),
        Dash::DashDot => Some(PlotLineStyle::Dashed { length: 4.0 }),
        Dash::Dotted => Some(PlotLineStyle::Dotted { spacing: 4.0 }),
        Dash::Hidden => None,
    };
    let line = dash
        .filter(|_| style.width > 0.0)
        .map(|dash| {
            Line::new(PlotPoints::from(points.clone()))
                .color(color)
                .width(style.width)
                .style(dash)
        });

    let shape = match style.marker {
        Marker::None => None,
        Marker::Point | Marker::Circle => Some(MarkerShape::Circle),
        Marker::Square => Some(MarkerShape::Square),
        Marker::Diamond | Marker::ThinDiamond => Some(MarkerShape::Diamond),
        Marker::TriangleUp => Some(MarkerShape::Up),
        Marker::TriangleDown => Some(MarkerShape::Down),
        Marker::TriangleLeft => Some(MarkerShape::Left),
        Marker::TriangleRight => Some(MarkerShape::Right),
        Marker::Plus => Some(MarkerShape::Plus),
        Marker::Cross => Some(MarkerShape::Cross),
        Marker::Star => Some(MarkerShape::Asterisk),
    };
    // Point markers are drawn smaller, as a dot.
    let radius = match style.marker {
        Marker::Point => style.marker_size / 4.0,
        _ => style.marker_size / 2.0,
    };
    let markers = shape.filter(|_| radius > 0.0).map(|shape| {
        Points::new(PlotPoints::from(points))
            .shape(shape)
            .radius(radius)
            .color(color)
            .filled(true)
    });
    (line, markers)
}

fn color_image(layer: &ImageLayer) -> ColorImage {
    ColorImage::from_rgba_unmultiplied([layer.width(), layer.height()], &layer.rgba_pixels())
}

fn show_colorbar(ui: &mut egui::Ui, layer: &ImageLayer, height: f32) {
    let cmap = Colormap::by_name_or_gray(&layer.colormap);
    ui.vertical(|ui| {
        ui.label(RichText::new(format!("{:.3}", layer.vmax)).small());
        let bar_height = (height - 40.0).max(20.0);
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(COLORBAR_WIDTH, bar_height), egui::Sense::hover());
        let step = rect.height() / COLORBAR_STEPS as f32;
        for (i, [r, g, b]) in cmap.ramp(COLORBAR_STEPS).into_iter().enumerate() {
            // ramp runs bottom to top
            let bottom = rect.bottom() - i as f32 * step;
            let strip = egui::Rect::from_min_max(
                egui::pos2(rect.left(), bottom - step),
                egui::pos2(rect.right(), bottom),
            );
            ui.painter().rect_filled(strip, 0.0, Color32::from_rgb(r, g, b));
        }
        ui.label(RichText::new(format!("{:.3}", layer.vmin)).small());
    })
    .response
    .on_hover_text(&layer.colorbar_label);
}
