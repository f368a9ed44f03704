use ndarray::{ArrayD, IxDyn};
use num_complex::Complex64;
use nx_core::{ArrayData, CurrentValues, ParamSet, PlotMode, build};
use nx_plot::render::ERROR_TITLE;
use nx_plot::{Figure, PlotRequest, Surface, render};
use proptest::prelude::*;
use std::f64::consts::PI;

fn real(shape: &[usize]) -> ArrayData {
    let n = shape.iter().product();
    let data = (0..n).map(|v| v as f64).collect();
    ArrayData::Real(ArrayD::from_shape_vec(IxDyn(shape), data).unwrap())
}

fn complex(shape: &[usize]) -> ArrayData {
    let n = shape.iter().product();
    let data = (0..n)
        .map(|v| Complex64::from_polar(1.0 + v as f64, v as f64 * 0.3))
        .collect();
    ArrayData::Complex(ArrayD::from_shape_vec(IxDyn(shape), data).unwrap())
}

fn draw(mode: PlotMode, array: &ArrayData, params: &ParamSet, values: &CurrentValues) -> Figure {
    let mut fig = Figure::new();
    render(
        &mut fig,
        &PlotRequest {
            mode,
            array,
            params,
            values,
            title: mode.title(),
        },
    );
    fig
}

fn draw_defaults(mode: PlotMode, array: &ArrayData) -> Figure {
    let params = build(mode, array.shape());
    let values = CurrentValues::from_defaults(&params);
    draw(mode, array, &params, &values)
}

#[test]
fn real_line_plots_values_against_index() {
    let arr = real(&[5, 3]);
    let params = build(PlotMode::Line1d, arr.shape());
    let mut values = CurrentValues::from_defaults(&params);
    values.set("axis", 0usize);
    values.set("index-1", 2usize);
    let fig = draw(PlotMode::Line1d, &arr, &params, &values);

    assert_eq!(fig.title(), Some("1D"));
    assert_eq!(fig.grid(), (1, 1));
    let line = fig.panels()[0].lines().next().unwrap();
    assert_eq!(line.x, [0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(line.y, [2.0, 5.0, 8.0, 11.0, 14.0]);
    assert_eq!(fig.panels()[0].x_label.as_deref(), Some("Index of Axis 0"));
}

#[test]
fn complex_line_defaults_to_stacked_real_and_imag() {
    let fig = draw_defaults(PlotMode::Line1d, &complex(&[8]));
    assert_eq!(fig.grid(), (2, 1));
    let titles: Vec<_> = fig.panels().iter().map(|p| p.title.as_deref()).collect();
    assert_eq!(titles, [Some("Real Part"), Some("Imaginary Part")]);
    assert!(fig.error_text().is_none());
}

#[test]
fn horizontal_display_puts_panels_side_by_side() {
    let arr = complex(&[8]);
    let params = build(PlotMode::Line1d, arr.shape());
    let mut values = CurrentValues::from_defaults(&params);
    values.set("complex_display_mode", "horizontal");
    let fig = draw(PlotMode::Line1d, &arr, &params, &values);
    assert_eq!(fig.grid(), (1, 2));
}

#[test]
fn plot_xy_pairs_x_and_y_slices() {
    let arr = real(&[4, 2]);
    let fig = draw_defaults(PlotMode::PlotXy, &arr);
    assert_eq!(fig.title(), Some("2D Plot(x,y)"));
    let line = fig.panels()[0].lines().next().unwrap();
    // axis 0, x at column 0, y at column 1
    assert_eq!(line.x, [0.0, 2.0, 4.0, 6.0]);
    assert_eq!(line.y, [1.0, 3.0, 5.0, 7.0]);
}

#[test]
fn real_map_uses_first_colormap_and_data_range() {
    let arr = real(&[4, 3]);
    let params = build(PlotMode::Map2d, arr.shape());
    let mut values = CurrentValues::from_defaults(&params);
    values.set("cmap-0", "viridis");
    let fig = draw(PlotMode::Map2d, &arr, &params, &values);

    let image = fig.panels()[0].images().next().unwrap();
    assert_eq!((image.height(), image.width()), (3, 4));
    assert_eq!(image.colormap, "viridis");
    assert_eq!((image.vmin, image.vmax), (0.0, 11.0));
}

#[test]
fn equal_map_axes_show_error_panel_and_title() {
    let arr = real(&[4, 3, 5]);
    let params = build(PlotMode::Map2d, arr.shape());
    let mut values = CurrentValues::from_defaults(&params);
    values.set("axis-1", 0usize);
    let fig = draw(PlotMode::Map2d, &arr, &params, &values);

    let error = fig.error_text().expect("error panel");
    assert_eq!(error.title, ERROR_TITLE);
    assert_eq!(error.title_color, [0x99, 0x99, 0x33]);
    assert!(error.monospace);
    assert_eq!(error.text, "`x axis` and `y axis` must be different!");
    assert_eq!(fig.title(), Some("2D Map"));
}

#[test]
fn stale_parameters_for_a_smaller_array_fail_gracefully() {
    let params = build(PlotMode::Line1d, &[10, 10]);
    let mut values = CurrentValues::from_defaults(&params);
    values.set("index-1", 9usize);
    let arr = real(&[10, 3]);
    let fig = draw(PlotMode::Line1d, &arr, &params, &values);

    let error = fig.error_text().expect("error panel");
    assert!(error.text.contains("out of bounds"), "{}", error.text);
    assert!(error.text.lines().all(|l| l.chars().count() <= 50));
    assert_eq!(fig.title(), Some("1D"));
}

#[test]
fn auto_map_layout_follows_image_aspect() {
    // axis-0 (width) 16, axis-1 (height) 4: wide image, stacked panels
    let fig = draw_defaults(PlotMode::Map2d, &complex(&[16, 4]));
    assert_eq!(fig.grid(), (2, 1));

    let fig = draw_defaults(PlotMode::Map2d, &complex(&[4, 16]));
    assert_eq!(fig.grid(), (1, 2));
}

#[test]
fn rerender_replaces_previous_content() {
    let arr = complex(&[6, 5]);
    let params = build(PlotMode::Map2d, arr.shape());
    let values = CurrentValues::from_defaults(&params);
    let mut fig = Figure::new();
    let request = PlotRequest {
        mode: PlotMode::Map2d,
        array: &arr,
        params: &params,
        values: &values,
        title: "first",
    };
    render(&mut fig, &request);
    let first = fig.revision();
    render(&mut fig, &PlotRequest { title: "second", ..request });
    assert!(fig.revision() > first);
    assert_eq!(fig.panels().len(), 2);
    assert_eq!(fig.title(), Some("second"));
}

fn complex_line() -> impl Strategy<Value = ArrayData> {
    prop::collection::vec((-1.0e3f64..1.0e3, -1.0e3f64..1.0e3), 1..40).prop_map(|pairs| {
        let data: Vec<_> = pairs.into_iter().map(|(re, im)| Complex64::new(re, im)).collect();
        ArrayData::complex_from_vec(&[data.len()], data).unwrap()
    })
}

fn complex_plane() -> impl Strategy<Value = ArrayData> {
    (1usize..8, 1usize..8).prop_flat_map(|(w, h)| {
        prop::collection::vec((-1.0e3f64..1.0e3, -1.0e3f64..1.0e3), w * h).prop_map(move |pairs| {
            let data = pairs.into_iter().map(|(re, im)| Complex64::new(re, im)).collect();
            ArrayData::complex_from_vec(&[w, h], data).unwrap()
        })
    })
}

fn mag_phase(mode: PlotMode, array: &ArrayData) -> Figure {
    let params = build(mode, array.shape());
    let mut values = CurrentValues::from_defaults(&params);
    values.set("complex_mode", "mag-phase");
    draw(mode, array, &params, &values)
}

proptest! {
    #[test]
    fn mag_phase_lines_stay_within_limits(arr in complex_line()) {
        let fig = mag_phase(PlotMode::Line1d, &arr);
        prop_assert!(fig.error_text().is_none());
        let magnitude = fig.panels()[0].lines().next().unwrap();
        prop_assert!(magnitude.y.iter().all(|&v| v >= 0.0));

        let phase_panel = &fig.panels()[1];
        let (lo, hi) = phase_panel.y_limits.unwrap();
        prop_assert!((lo + 1.1 * PI).abs() < 1e-12 && (hi - 1.1 * PI).abs() < 1e-12);
        let phase = phase_panel.lines().next().unwrap();
        prop_assert!(phase.y.iter().all(|&v| lo <= v && v <= hi));
    }

    #[test]
    fn mag_phase_maps_stay_within_color_range(arr in complex_plane()) {
        let fig = mag_phase(PlotMode::Map2d, &arr);
        prop_assert!(fig.error_text().is_none());
        let magnitude = fig.panels()[0].images().next().unwrap();
        prop_assert_eq!(magnitude.vmin, 0.0);
        prop_assert!(magnitude.data.iter().all(|&v| v >= 0.0 && v <= magnitude.vmax));

        let phase = fig.panels()[1].images().next().unwrap();
        prop_assert_eq!((phase.vmin, phase.vmax), (-PI, PI));
        prop_assert!(phase.data.iter().all(|&v| -PI <= v && v <= PI));
    }

    #[test]
    fn equal_axes_always_fail(shape in prop::collection::vec(2usize..6, 2..5), axis in 0usize..4) {
        let arr = real(&shape);
        let params = build(PlotMode::Map2d, &shape);
        let mut values = CurrentValues::from_defaults(&params);
        let axis = axis % shape.len();
        values.set("axis-0", axis);
        values.set("axis-1", axis);
        let fig = draw(PlotMode::Map2d, &arr, &params, &values);
        prop_assert!(fig.error_text().is_some());
        prop_assert_eq!(fig.title(), Some("2D Map"));
    }
}
