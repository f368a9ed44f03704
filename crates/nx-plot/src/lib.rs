//! nx-plot: drawing surfaces and the per-mode plot renderers.
//!
//! Renderers never fail from the caller's point of view: any error while
//! slicing or drawing is turned into an error panel on the surface.

pub mod colormap;
pub mod complex;
pub mod error;
pub mod layout;
pub mod render;
pub mod settings;
pub mod slice;
pub mod surface;

pub use colormap::Colormap;
pub use error::{PlotError, PlotResult};
pub use render::{PlotRequest, render, renderer_for};
pub use surface::{
    Dash, Figure, ImageLayer, LineSeries, LineStyle, Marker, Panel, PanelId, PanelItem, Surface,
    TextPanel,
};
