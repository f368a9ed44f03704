//! Fixed palettes offered by the line styling and colormap selectors.

pub const DEFAULT_LINE_COLOR: &str = "black";
pub const DEFAULT_LINE_STYLE: &str = "-";
pub const DEFAULT_LINE_MARKER: &str = ".";
pub const DEFAULT_COLORMAP: &str = "gray";

/// Named line colors, sorted by name.
pub const LINE_COLORS: &[(&str, [u8; 3])] = &[
    ("aqua", [0x00, 0xff, 0xff]),
    ("black", [0x00, 0x00, 0x00]),
    ("blue", [0x00, 0x00, 0xff]),
    ("blueviolet", [0x8a, 0x2b, 0xe2]),
    ("brown", [0xa5, 0x2a, 0x2a]),
    ("cadetblue", [0x5f, 0x9e, 0xa0]),
    ("chocolate", [0xd2, 0x69, 0x1e]),
    ("coral", [0xff, 0x7f, 0x50]),
    ("crimson", [0xdc, 0x14, 0x3c]),
    ("cyan", [0x00, 0xff, 0xff]),
    ("darkblue", [0x00, 0x00, 0x8b]),
    ("darkcyan", [0x00, 0x8b, 0x8b]),
    ("darkgoldenrod", [0xb8, 0x86, 0x0b]),
    ("darkgray", [0xa9, 0xa9, 0xa9]),
    ("darkgreen", [0x00, 0x64, 0x00]),
    ("darkmagenta", [0x8b, 0x00, 0x8b]),
    ("darkorange", [0xff, 0x8c, 0x00]),
    ("darkred", [0x8b, 0x00, 0x00]),
    ("deeppink", [0xff, 0x14, 0x93]),
    ("deepskyblue", [0x00, 0xbf, 0xff]),
    ("dimgray", [0x69, 0x69, 0x69]),
    ("firebrick", [0xb2, 0x22, 0x22]),
    ("forestgreen", [0x22, 0x8b, 0x22]),
    ("gold", [0xff, 0xd7, 0x00]),
    ("goldenrod", [0xda, 0xa5, 0x20]),
    ("gray", [0x80, 0x80, 0x80]),
    ("green", [0x00, 0x80, 0x00]),
    ("indigo", [0x4b, 0x00, 0x82]),
    ("lightblue", [0xad, 0xd8, 0xe6]),
    ("lightgray", [0xd3, 0xd3, 0xd3]),
    ("lime", [0x00, 0xff, 0x00]),
    ("magenta", [0xff, 0x00, 0xff]),
    ("maroon", [0x80, 0x00, 0x00]),
    ("navy", [0x00, 0x00, 0x80]),
    ("olive", [0x80, 0x80, 0x00]),
    ("orange", [0xff, 0xa5, 0x00]),
    ("orangered", [0xff, 0x45, 0x00]),
    ("orchid", [0xda, 0x70, 0xd6]),
    ("purple", [0x80, 0x00, 0x80]),
    ("red", [0xff, 0x00, 0x00]),
    ("royalblue", [0x41, 0x69, 0xe1]),
    ("salmon", [0xfa, 0x80, 0x72]),
    ("seagreen", [0x2e, 0x8b, 0x57]),
    ("sienna", [0xa0, 0x52, 0x2d]),
    ("silver", [0xc0, 0xc0, 0xc0]),
    ("steelblue", [0x46, 0x82, 0xb4]),
    ("teal", [0x00, 0x80, 0x80]),
    ("tomato", [0xff, 0x63, 0x47]),
    ("turquoise", [0x40, 0xe0, 0xd0]),
    ("violet", [0xee, 0x82, 0xee]),
    ("white", [0xff, 0xff, 0xff]),
    ("yellow", [0xff, 0xff, 0x00]),
    ("yellowgreen", [0x9a, 0xcd, 0x32]),
];

/// Line styles: solid, dashed, dash-dot, dotted, none.
pub const LINE_STYLES: &[&str] = &["-", "--", "-.", ":", "None"];

/// Point markers drawn at each sample.
pub const LINE_MARKERS: &[&str] = &[
    ".", "+", "<", ">", "D", "None", "^", "d", "o", "s", "v", "x", "*",
];

/// Colormaps available to the map renderer.
pub const COLORMAPS: &[&str] = &[
    "bone", "cool", "coolwarm", "copper", "gray", "hot", "inferno", "jet", "magma", "plasma",
    "twilight", "viridis",
];

/// RGB triple for a named line color.
pub fn line_color(name: &str) -> Option<[u8; 3]> {
    LINE_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, rgb)| *rgb)
}

pub fn line_color_names() -> impl Iterator<Item = &'static str> {
    LINE_COLORS.iter().map(|(name, _)| *name)
}
