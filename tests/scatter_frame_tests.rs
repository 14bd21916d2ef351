use approx::assert_relative_eq;
use sentiplot_rs::api::{RenderOptions, build_scatter_frame, palette, render_scatter};
use sentiplot_rs::core::ScatterPoint;
use sentiplot_rs::render::{NullRenderer, PreparedSurface, SurfaceSpec};

const INSET_LEFT: f64 = 60.0;
const INSET_RIGHT: f64 = 20.0;

fn prepared() -> PreparedSurface {
    SurfaceSpec::with_default_density(640.0, 480.0)
        .prepare()
        .expect("prepare")
}

#[test]
fn y_domain_stretches_to_the_largest_engagement_value() {
    let points = [
        ScatterPoint::new(0.5, 0.3),
        ScatterPoint::new(-0.2, 2.0),
    ];
    let frame =
        build_scatter_frame(prepared(), &points, &RenderOptions::default()).expect("frame");

    // Plot area is 60..620 x, 20..440 y. With the y-domain resolved to
    // [0, 2], the y = 2 point sits exactly on the plot top.
    assert_eq!(frame.circles.len(), 2);
    assert_relative_eq!(frame.circles[1].cy, 20.0);
    // y = 0.3 maps 15% up the 420px plot height.
    assert_relative_eq!(frame.circles[0].cy, 440.0 - 0.15 * 420.0);
}

#[test]
fn y_domain_floors_at_one_for_small_data() {
    let points = [ScatterPoint::new(0.0, 0.4)];
    let frame =
        build_scatter_frame(prepared(), &points, &RenderOptions::default()).expect("frame");

    // Domain [0, 1]: y = 0.4 sits 40% up the plot height.
    assert_relative_eq!(frame.circles[0].cy, 440.0 - 0.4 * 420.0);
}

#[test]
fn markers_stay_within_the_plot_span() {
    let mut points: Vec<ScatterPoint> = (-10..=10)
        .map(|i| ScatterPoint::new(f64::from(i) / 10.0, 1.0))
        .collect();
    // Domain edges map exactly onto the plot edges.
    points.push(ScatterPoint::new(-1.05, 1.0));
    points.push(ScatterPoint::new(1.05, 1.0));
    let frame =
        build_scatter_frame(prepared(), &points, &RenderOptions::default()).expect("frame");

    let plot_right = 640.0 - INSET_RIGHT;
    for circle in &frame.circles {
        assert!(circle.cx >= INSET_LEFT && circle.cx <= plot_right);
    }
}

#[test]
fn marker_fill_is_keyed_on_the_sentiment_sign() {
    let points = [
        ScatterPoint::new(0.5, 1.0),
        ScatterPoint::new(-0.2, 1.0),
        ScatterPoint::new(0.0, 1.0),
    ];
    let frame =
        build_scatter_frame(prepared(), &points, &RenderOptions::default()).expect("frame");

    assert_eq!(frame.circles[0].fill_color, palette::POSITIVE_MARKER);
    assert_eq!(frame.circles[1].fill_color, palette::NEGATIVE_MARKER);
    // Zero is non-positive.
    assert_eq!(frame.circles[2].fill_color, palette::NEGATIVE_MARKER);
}

#[test]
fn marker_radius_defaults_to_eight_and_honors_overrides() {
    let points = [
        ScatterPoint::new(0.1, 1.0),
        ScatterPoint::with_size(0.2, 1.0, 14.0),
    ];
    let frame =
        build_scatter_frame(prepared(), &points, &RenderOptions::default()).expect("frame");

    assert_eq!(frame.circles[0].radius, 8.0);
    assert_eq!(frame.circles[1].radius, 14.0);
}

#[test]
fn five_tick_labels_are_formatted_to_one_decimal() {
    let frame = build_scatter_frame(prepared(), &[], &RenderOptions::default()).expect("frame");

    let ticks: Vec<&str> = frame
        .texts
        .iter()
        .skip(2) // axis labels come first
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(ticks, vec!["-1.0", "-0.5", "0.0", "0.5", "1.0"]);

    // The 0.0 tick sits at the horizontal center of the plot span.
    let zero_tick = &frame.texts[4];
    assert_relative_eq!(zero_tick.x, 60.0 + 560.0 * 0.5);
}

#[test]
fn empty_input_still_draws_axes_and_labels() {
    let frame = build_scatter_frame(prepared(), &[], &RenderOptions::default()).expect("frame");

    assert!(frame.circles.is_empty());
    assert_eq!(frame.lines.len(), 2);
    // x label + y label + five ticks.
    assert_eq!(frame.texts.len(), 7);
    frame.validate().expect("frame validates");
}

#[test]
fn degenerate_surface_renders_empty_without_error() {
    let surface = SurfaceSpec::new(0.0, 480.0, 1.0).prepare().expect("prepare");
    let frame = build_scatter_frame(surface, &[ScatterPoint::new(0.1, 1.0)], &RenderOptions::default())
        .expect("frame");
    assert!(frame.is_empty());
}

#[test]
fn non_finite_coordinates_are_rejected() {
    let points = [ScatterPoint::new(f64::NAN, 1.0)];
    assert!(build_scatter_frame(prepared(), &points, &RenderOptions::default()).is_err());
}

#[test]
fn non_positive_marker_sizes_are_rejected() {
    let points = [ScatterPoint::with_size(0.1, 1.0, 0.0)];
    assert!(build_scatter_frame(prepared(), &points, &RenderOptions::default()).is_err());
}

#[test]
fn render_scatter_drives_a_renderer_end_to_end() {
    let mut renderer = NullRenderer::default();
    let points = [ScatterPoint::new(0.5, 120.0), ScatterPoint::new(-0.4, 80.0)];

    render_scatter(
        &mut renderer,
        SurfaceSpec::new(640.0, 480.0, 2.0),
        &points,
        &RenderOptions::default(),
    )
    .expect("render");

    assert_eq!(renderer.clears, 1);
    assert_eq!(renderer.last_circle_count, 2);
    assert_eq!(renderer.last_line_count, 2);
    assert_eq!(renderer.last_text_count, 7);
}
