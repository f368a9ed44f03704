//! Per-mode parameter set construction.

use crate::mode::PlotMode;
use crate::params::{
    ComplexDisplay, ComplexMode, EnumParam, NumericParam, ParamDescriptor, ParamSet, keys,
};
use crate::styles;

/// Build the parameter set for a mode and array shape.
///
/// The shape must have rank ≥ 1 and every dimension ≥ 1.
pub fn build(mode: PlotMode, shape: &[usize]) -> ParamSet {
    debug_assert!(!shape.is_empty(), "rank-0 arrays cannot be explored");

    let mut set = ParamSet::new();
    complex_params(&mut set);
    match mode {
        PlotMode::Line1d => line_params(&mut set, shape),
        PlotMode::PlotXy => plot_xy_params(&mut set, shape),
        PlotMode::Map2d => map_params(&mut set, shape),
    }
    tracing::debug!(mode = %mode, ?shape, params = set.len(), "built parameter set");
    set
}

fn complex_params(set: &mut ParamSet) {
    set.insert(
        keys::COMPLEX_MODE,
        ParamDescriptor::Enumerated(EnumParam::new(
            "Complex Mode",
            ComplexMode::default().key(),
            ComplexMode::ALL.map(ComplexMode::key),
        )),
    );
    set.insert(
        keys::COMPLEX_DISPLAY_MODE,
        ParamDescriptor::Enumerated(EnumParam::new(
            "Complex Display Mode",
            ComplexDisplay::default().key(),
            ComplexDisplay::ALL.map(ComplexDisplay::key),
        )),
    );
}

fn line_params(set: &mut ParamSet, shape: &[usize]) {
    set.insert(keys::AXIS, axis_selector("Axis", 0, shape));
    for (i, &dim) in shape.iter().enumerate() {
        set.insert(
            keys::index(i),
            index_selector(format!("Index[{i}]"), 0, dim),
        );
    }
    line_style_params(set);
}

fn plot_xy_params(set: &mut ParamSet, shape: &[usize]) {
    let width = index_digits(shape.len());
    set.insert(keys::AXIS, axis_selector("Axis", 0, shape));
    for (i, &dim) in shape.iter().enumerate() {
        set.insert(
            keys::x_index(i),
            index_selector(format!("x Index[{i:0width$}]"), 0, dim),
        );
        set.insert(
            keys::y_index(i),
            index_selector(format!("y Index[{i:0width$}]"), 1, dim),
        );
    }
    line_style_params(set);
}

fn map_params(set: &mut ParamSet, shape: &[usize]) {
    let width = index_digits(shape.len());
    set.insert(keys::AXIS_0, axis_selector("x axis", 0, shape));
    set.insert(keys::AXIS_1, axis_selector("y axis", 1, shape));
    for (i, &dim) in shape.iter().enumerate() {
        set.insert(
            keys::index(i),
            index_selector(format!("Index[{i:0width$}]"), 0, dim),
        );
    }
    for (key, panel) in [(keys::CMAP_0, 'A'), (keys::CMAP_1, 'B')] {
        set.insert(
            key,
            ParamDescriptor::Enumerated(EnumParam::new(
                format!("Color Map {panel}"),
                styles::DEFAULT_COLORMAP,
                styles::COLORMAPS.iter().copied(),
            )),
        );
    }
}

fn line_style_params(set: &mut ParamSet) {
    set.insert(
        keys::LINE_COLOR,
        ParamDescriptor::Enumerated(EnumParam::new(
            "Line Color",
            styles::DEFAULT_LINE_COLOR,
            styles::line_color_names(),
        )),
    );
    set.insert(
        keys::LINE_WIDTH,
        ParamDescriptor::Numeric(NumericParam::float("Line Width", 1.0, 0.0, 9.5, 0.5)),
    );
    set.insert(
        keys::LINE_STYLE,
        ParamDescriptor::Enumerated(EnumParam::new(
            "Line Style",
            styles::DEFAULT_LINE_STYLE,
            styles::LINE_STYLES.iter().copied(),
        )),
    );
    set.insert(
        keys::LINE_MARKER,
        ParamDescriptor::Enumerated(EnumParam::new(
            "Line Marker",
            styles::DEFAULT_LINE_MARKER,
            styles::LINE_MARKERS.iter().copied(),
        )),
    );
    set.insert(
        keys::MARKER_SIZE,
        ParamDescriptor::Numeric(NumericParam::float("Marker Size", 5.0, 0.0, 49.5, 1.0)),
    );
}

/// Axis selector over `0..rank`; the default is clamped for low ranks.
fn axis_selector(label: &str, default: usize, shape: &[usize]) -> ParamDescriptor {
    let stop = shape.len().saturating_sub(1);
    ParamDescriptor::Numeric(NumericParam::integer(label, default.min(stop), 0, stop))
}

/// Index selector over `0..dim`; the default is clamped for short axes.
fn index_selector(label: String, default: usize, dim: usize) -> ParamDescriptor {
    let stop = dim.saturating_sub(1);
    ParamDescriptor::Numeric(NumericParam::integer(label, default.min(stop), 0, stop))
}

/// Digits needed to print the largest axis number.
fn index_digits(rank: usize) -> usize {
    rank.saturating_sub(1).max(1).to_string().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::CurrentValues;

    #[test]
    fn every_set_starts_with_complex_params() {
        for mode in PlotMode::ALL {
            let set = build(mode, &[4, 5, 6]);
            let names: Vec<_> = set.names().take(2).collect();
            assert_eq!(names, [keys::COMPLEX_MODE, keys::COMPLEX_DISPLAY_MODE]);
        }
    }

    #[test]
    fn line_mode_params() {
        let set = build(PlotMode::Line1d, &[16, 3]);
        let names: Vec<_> = set.names().collect();
        assert_eq!(
            names,
            [
                "complex_mode",
                "complex_display_mode",
                "axis",
                "index-0",
                "index-1",
                "line-color",
                "line-width",
                "line-style",
                "line-marker",
                "marker-size",
            ]
        );
        match set.get("index-1").unwrap() {
            ParamDescriptor::Numeric(p) => {
                assert_eq!((p.start, p.stop, p.step), (0.0, 2.0, 1.0));
                assert!(p.integral);
            }
            other => panic!("unexpected descriptor {other:?}"),
        }
    }

    #[test]
    fn plot_xy_params_for_4d_shape() {
        let set = build(PlotMode::PlotXy, &[128, 128, 64, 32]);
        let values = CurrentValues::from_defaults(&set);
        for i in 0..4 {
            assert_eq!(values.index(&keys::x_index(i)), Some(0));
            assert_eq!(values.index(&keys::y_index(i)), Some(1));
        }
        let index_count = set
            .names()
            .filter(|n| n.starts_with("x-index-") || n.starts_with("y-index-"))
            .count();
        assert_eq!(index_count, 8);
        assert!(set.contains(keys::AXIS));
        assert!(set.contains(keys::LINE_COLOR));
        assert!(set.contains(keys::MARKER_SIZE));
        assert_eq!(set.get("y-index-3").unwrap().label(), "y Index[3]");
    }

    #[test]
    fn y_index_default_clamped_on_singleton_axis() {
        let set = build(PlotMode::PlotXy, &[5, 1]);
        let values = CurrentValues::from_defaults(&set);
        assert_eq!(values.index("y-index-1"), Some(0));
        assert_eq!(values.index("y-index-0"), Some(1));
        set.check().unwrap();
    }

    #[test]
    fn map_params_have_two_axes_and_two_colormaps() {
        let set = build(PlotMode::Map2d, &[8, 9, 10]);
        let values = CurrentValues::from_defaults(&set);
        assert_eq!(values.index(keys::AXIS_0), Some(0));
        assert_eq!(values.index(keys::AXIS_1), Some(1));
        assert_eq!(values.choice(keys::CMAP_0), Some("gray"));
        assert_eq!(values.choice(keys::CMAP_1), Some("gray"));
        assert_eq!(set.get(keys::AXIS_0).unwrap().label(), "x axis");
        assert!(!set.contains(keys::LINE_COLOR));
    }

    #[test]
    fn labels_are_zero_padded_for_wide_ranks() {
        let shape = vec![2; 12];
        let set = build(PlotMode::Map2d, &shape);
        assert_eq!(set.get("index-3").unwrap().label(), "Index[03]");
        assert_eq!(set.get("index-11").unwrap().label(), "Index[11]");
    }

    #[test]
    fn map_on_rank_one_still_builds() {
        let set = build(PlotMode::Map2d, &[7]);
        set.check().unwrap();
        let values = CurrentValues::from_defaults(&set);
        assert_eq!(values.index(keys::AXIS_1), Some(0));
    }
}
