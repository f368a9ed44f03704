//! Colormaps for image panels.
//!
//! Each map is a short list of evenly or explicitly spaced color stops,
//! linearly interpolated.

use crate::surface::ImageLayer;

type Stop = (f32, [u8; 3]);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colormap {
    name: &'static str,
    stops: &'static [Stop],
}

const GRAY: &[Stop] = &[(0.0, [0, 0, 0]), (1.0, [255, 255, 255])];
const BONE: &[Stop] = &[
    (0.0, [0, 0, 0]),
    (0.375, [81, 81, 113]),
    (0.75, [166, 198, 198]),
    (1.0, [255, 255, 255]),
];
const COOL: &[Stop] = &[(0.0, [0, 255, 255]), (1.0, [255, 0, 255])];
const COOLWARM: &[Stop] = &[
    (0.0, [59, 76, 192]),
    (0.5, [221, 221, 221]),
    (1.0, [180, 4, 38]),
];
const COPPER: &[Stop] = &[
    (0.0, [0, 0, 0]),
    (0.8, [255, 159, 101]),
    (1.0, [255, 199, 127]),
];
const HOT: &[Stop] = &[
    (0.0, [10, 0, 0]),
    (0.365, [255, 0, 0]),
    (0.746, [255, 255, 0]),
    (1.0, [255, 255, 255]),
];
const INFERNO: &[Stop] = &[
    (0.0, [0, 0, 4]),
    (0.143, [40, 11, 84]),
    (0.286, [101, 21, 110]),
    (0.429, [159, 42, 99]),
    (0.571, [212, 72, 66]),
    (0.714, [245, 125, 21]),
    (0.857, [250, 193, 39]),
    (1.0, [252, 255, 164]),
];
const JET: &[Stop] = &[
    (0.0, [0, 0, 128]),
    (0.11, [0, 0, 255]),
    (0.125, [0, 0, 255]),
    (0.34, [0, 255, 255]),
    (0.65, [255, 255, 0]),
    (0.89, [255, 0, 0]),
    (1.0, [128, 0, 0]),
];
const MAGMA: &[Stop] = &[
    (0.0, [0, 0, 4]),
    (0.125, [28, 16, 68]),
    (0.25, [79, 18, 123]),
    (0.375, [129, 37, 129]),
    (0.5, [181, 54, 122]),
    (0.625, [229, 80, 100]),
    (0.75, [251, 135, 97]),
    (0.875, [254, 194, 135]),
    (1.0, [252, 253, 191]),
];
const PLASMA: &[Stop] = &[
    (0.0, [13, 8, 135]),
    (0.143, [84, 2, 163]),
    (0.286, [139, 10, 165]),
    (0.429, [185, 50, 137]),
    (0.571, [219, 92, 104]),
    (0.714, [244, 136, 73]),
    (0.857, [254, 188, 43]),
    (1.0, [240, 249, 33]),
];
const TWILIGHT: &[Stop] = &[
    (0.0, [226, 217, 226]),
    (0.25, [94, 121, 181]),
    (0.5, [47, 20, 54]),
    (0.75, [180, 88, 66]),
    (1.0, [226, 217, 226]),
];
const VIRIDIS: &[Stop] = &[
    (0.0, [68, 1, 84]),
    (0.111, [72, 40, 120]),
    (0.222, [62, 74, 137]),
    (0.333, [49, 104, 142]),
    (0.444, [38, 130, 142]),
    (0.556, [31, 158, 137]),
    (0.667, [53, 183, 121]),
    (0.778, [110, 206, 88]),
    (0.889, [181, 222, 43]),
    (1.0, [253, 231, 37]),
];

impl Colormap {
    /// Look up one of the names offered by the colormap selectors.
    pub fn by_name(name: &str) -> Option<Self> {
        let (name, stops) = match name {
            "bone" => ("bone", BONE),
            "cool" => ("cool", COOL),
            "coolwarm" => ("coolwarm", COOLWARM),
            "copper" => ("copper", COPPER),
            "gray" => ("gray", GRAY),
            "hot" => ("hot", HOT),
            "inferno" => ("inferno", INFERNO),
            "jet" => ("jet", JET),
            "magma" => ("magma", MAGMA),
            "plasma" => ("plasma", PLASMA),
            "twilight" => ("twilight", TWILIGHT),
            "viridis" => ("viridis", VIRIDIS),
            _ => return None,
        };
        Some(Self { name, stops })
    }

    /// Colormap by name, falling back to gray.
    pub fn by_name_or_gray(name: &str) -> Self {
        Self::by_name(name).unwrap_or_else(|| {
            tracing::warn!(name, "unknown colormap, using gray");
            Self {
                name: "gray",
                stops: GRAY,
            }
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Color at `t` in `[0, 1]`; out-of-range input is clamped.
    pub fn sample(&self, t: f64) -> [u8; 3] {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) as f32 };
        let upper = self
            .stops
            .iter()
            .position(|(pos, _)| *pos >= t)
            .unwrap_or(self.stops.len() - 1);
        if upper == 0 {
            return self.stops[0].1;
        }
        let (p0, c0) = self.stops[upper - 1];
        let (p1, c1) = self.stops[upper];
        let local = if p1 > p0 { (t - p0) / (p1 - p0) } else { 0.0 };
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * local).round() as u8;
        [lerp(c0[0], c1[0]), lerp(c0[1], c1[1]), lerp(c0[2], c1[2])]
    }

    /// Color for `value` within `[vmin, vmax]`.
    pub fn map(&self, value: f64, vmin: f64, vmax: f64) -> [u8; 3] {
        let span = vmax - vmin;
        let t = if span > 0.0 { (value - vmin) / span } else { 0.5 };
        self.sample(t)
    }

    /// `n` colors from bottom to top, for colorbars.
    pub fn ramp(&self, n: usize) -> Vec<[u8; 3]> {
        let denom = n.saturating_sub(1).max(1) as f64;
        (0..n).map(|i| self.sample(i as f64 / denom)).collect()
    }
}

impl ImageLayer {
    /// RGBA pixels in top-to-bottom row order.
    ///
    /// The layer has its origin at the lower left, so the last data row is
    /// the first pixel row.
    pub fn rgba_pixels(&self) -> Vec<u8> {
        let cmap = Colormap::by_name_or_gray(&self.colormap);
        let mut pixels = Vec::with_capacity(self.width() * self.height() * 4);
        for r in (0..self.height()).rev() {
            for &value in self.data.row(r) {
                let [r, g, b] = if value.is_finite() {
                    cmap.map(value, self.vmin, self.vmax)
                } else {
                    [0, 0, 0]
                };
                pixels.extend_from_slice(&[r, g, b, 255]);
            }
        }
        pixels
    }
}
