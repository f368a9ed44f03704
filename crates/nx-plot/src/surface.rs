//! Drawing surface abstraction.
//!
//! Renderers talk to a [`Surface`]. [`Figure`] is the retained implementation:
//! it records panels, lines, images and text so a GUI can paint them later
//! and tests can inspect what was drawn.

use ndarray::Array2;
use std::fmt;

pub type PanelId = usize;

/// Operations a plotting backend must provide.
pub trait Surface {
    /// Remove every panel and the overall title.
    fn clear(&mut self);

    /// Replace the content with a `rows × cols` grid of empty panels.
    ///
    /// Returned ids are in row-major order.
    fn subplots(&mut self, rows: usize, cols: usize) -> Vec<PanelId>;

    fn plot_line(&mut self, panel: PanelId, line: LineSeries);

    /// Image with a colorbar.
    fn show_image(&mut self, panel: PanelId, image: ImageLayer);

    fn set_axis_labels(&mut self, panel: PanelId, x: &str, y: &str);

    fn set_limits(&mut self, panel: PanelId, x: Option<(f64, f64)>, y: Option<(f64, f64)>);

    fn set_panel_title(&mut self, panel: PanelId, title: &str);

    /// Single panel filled with text; replaces any existing panels.
    fn show_text(&mut self, text: TextPanel);

    /// Overall title above all panels.
    fn set_title(&mut self, title: &str);
}

/// Line dash pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dash {
    #[default]
    Solid,
    Dashed,
    DashDot,
    Dotted,
    /// Markers only.
    Hidden,
}

impl Dash {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "-" => Some(Dash::Solid),
            "--" => Some(Dash::Dashed),
            "-." => Some(Dash::DashDot),
            ":" => Some(Dash::Dotted),
            "None" => Some(Dash::Hidden),
            _ => None,
        }
    }
}

/// Point marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Marker {
    #[default]
    Point,
    None,
    Circle,
    Square,
    Diamond,
    ThinDiamond,
    TriangleUp,
    TriangleDown,
    TriangleLeft,
    TriangleRight,
    Plus,
    Cross,
    Star,
}

impl Marker {
    pub fn from_key(key: &str) -> Option<Self> {
        Some(match key {
            "." => Marker::Point,
            "None" => Marker::None,
            "o" => Marker::Circle,
            "s" => Marker::Square,
            "D" => Marker::Diamond,
            "d" => Marker::ThinDiamond,
            "^" => Marker::TriangleUp,
            "v" => Marker::TriangleDown,
            "<" => Marker::TriangleLeft,
            ">" => Marker::TriangleRight,
            "+" => Marker::Plus,
            "x" => Marker::Cross,
            "*" => Marker::Star,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: [u8; 3],
    pub width: f32,
    pub dash: Dash,
    pub marker: Marker,
    pub marker_size: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: [0, 0, 0],
            width: 1.0,
            dash: Dash::Solid,
            marker: Marker::Point,
            marker_size: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub style: LineStyle,
}

impl LineSeries {
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.x.iter().zip(&self.y).map(|(&x, &y)| [x, y])
    }
}

/// Image layer drawn with origin at the lower left.
///
/// `data[[row, col]]`: rows run along the y axis, columns along x.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageLayer {
    pub data: Array2<f64>,
    pub colormap: String,
    pub vmin: f64,
    pub vmax: f64,
    pub colorbar_label: String,
}

impl ImageLayer {
    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextPanel {
    pub text: String,
    pub title: String,
    pub title_color: [u8; 3],
    pub monospace: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelItem {
    Line(LineSeries),
    Image(ImageLayer),
    Text(TextPanel),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Panel {
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub x_limits: Option<(f64, f64)>,
    pub y_limits: Option<(f64, f64)>,
    pub items: Vec<PanelItem>,
}

impl Panel {
    pub fn lines(&self) -> impl Iterator<Item = &LineSeries> {
        self.items.iter().filter_map(|item| match item {
            PanelItem::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn images(&self) -> impl Iterator<Item = &ImageLayer> {
        self.items.iter().filter_map(|item| match item {
            PanelItem::Image(image) => Some(image),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPanel> {
        self.items.iter().filter_map(|item| match item {
            PanelItem::Text(text) => Some(text),
            _ => None,
        })
    }
}

/// Retained drawing surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Figure {
    title: Option<String>,
    rows: usize,
    cols: usize,
    panels: Vec<Panel>,
    revision: u64,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Grid as `(rows, cols)`.
    pub fn grid(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.get(id)
    }

    /// Bumped on every clear; lets painters cache derived textures.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The error panel, if the last render failed.
    pub fn error_text(&self) -> Option<&TextPanel> {
        self.panels.iter().flat_map(Panel::texts).next()
    }

    fn panel_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        let panel = self.panels.get_mut(id);
        if panel.is_none() {
            tracing::warn!(panel = id, "drawing on a panel that does not exist");
        }
        panel
    }
}

impl Surface for Figure {
    fn clear(&mut self) {
        self.title = None;
        self.rows = 0;
        self.cols = 0;
        self.panels.clear();
        self.revision += 1;
    }

    fn subplots(&mut self, rows: usize, cols: usize) -> Vec<PanelId> {
        self.rows = rows;
        self.cols = cols;
        self.panels = vec![Panel::default(); rows * cols];
        (0..rows * cols).collect()
    }

    fn plot_line(&mut self, panel: PanelId, line: LineSeries) {
        if let Some(p) = self.panel_mut(panel) {
            p.items.push(PanelItem::Line(line));
        }
    }

    fn show_image(&mut self, panel: PanelId, image: ImageLayer) {
        if let Some(p) = self.panel_mut(panel) {
            p.items.push(PanelItem::Image(image));
        }
    }

    fn set_axis_labels(&mut self, panel: PanelId, x: &str, y: &str) {
        if let Some(p) = self.panel_mut(panel) {
            p.x_label = Some(x.to_string());
            p.y_label = Some(y.to_string());
        }
    }

    fn set_limits(&mut self, panel: PanelId, x: Option<(f64, f64)>, y: Option<(f64, f64)>) {
        if let Some(p) = self.panel_mut(panel) {
            p.x_limits = x;
            p.y_limits = y;
        }
    }

    fn set_panel_title(&mut self, panel: PanelId, title: &str) {
        if let Some(p) = self.panel_mut(panel) {
            p.title = Some(title.to_string());
        }
    }

    fn show_text(&mut self, text: TextPanel) {
        self.subplots(1, 1);
        self.panels[0].items.push(PanelItem::Text(text));
    }

    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} [{}x{}]",
            self.title.as_deref().unwrap_or("(untitled)"),
            self.rows,
            self.cols
        )?;
        for (i, panel) in self.panels.iter().enumerate() {
            write!(f, "  panel {i}")?;
            if let Some(title) = &panel.title {
                write!(f, " \"{title}\"")?;
            }
            writeln!(f)?;
            for item in &panel.items {
                match item {
                    PanelItem::Line(line) => {
                        writeln!(f, "    line: {} points", line.x.len())?;
                    }
                    PanelItem::Image(image) => writeln!(
                        f,
                        "    image: {}x{} cmap={} range=[{:.4e}, {:.4e}]",
                        image.width(),
                        image.height(),
                        image.colormap,
                        image.vmin,
                        image.vmax
                    )?,
                    PanelItem::Text(text) => {
                        writeln!(f, "    text: {}", text.title)?;
                        for line in text.text.lines() {
                            writeln!(f, "      {line}")?;
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_bumps_revision_and_drops_panels() {
        let mut fig = Figure::new();
        fig.subplots(2, 1);
        fig.set_title("t");
        let before = fig.revision();
        fig.clear();
        assert!(fig.panels().is_empty());
        assert_eq!(fig.title(), None);
        assert_eq!(fig.revision(), before + 1);
    }

    #[test]
    fn drawing_on_missing_panel_is_ignored() {
        let mut fig = Figure::new();
        fig.subplots(1, 1);
        fig.set_panel_title(3, "nope");
        assert_eq!(fig.panels().len(), 1);
        assert_eq!(fig.panels()[0].title, None);
    }

    #[test]
    fn show_text_replaces_grid() {
        let mut fig = Figure::new();
        fig.subplots(2, 2);
        fig.show_text(TextPanel {
            text: "boom".into(),
            title: "failed".into(),
            title_color: [0x99, 0x99, 0x33],
            monospace: true,
        });
        assert_eq!(fig.grid(), (1, 1));
        assert_eq!(fig.error_text().unwrap().text, "boom");
    }

    #[test]
    fn style_keys_parse() {
        assert_eq!(Dash::from_key("-."), Some(Dash::DashDot));
        assert_eq!(Dash::from_key("~"), None);
        assert_eq!(Marker::from_key("D"), Some(Marker::Diamond));
        assert_eq!(Marker::from_key("None"), Some(Marker::None));
    }
}
