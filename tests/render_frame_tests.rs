use sentiplot_rs::render::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, NullRenderer, RectPrimitive,
    RenderFrame, Renderer, SurfaceSpec, TextHAlign, TextPrimitive,
};

fn prepared() -> sentiplot_rs::render::PreparedSurface {
    SurfaceSpec::with_default_density(640.0, 480.0)
        .prepare()
        .expect("prepare")
}

#[test]
fn frame_builders_accumulate_primitives() {
    let frame = RenderFrame::new(prepared())
        .with_line(LinePrimitive::new(
            0.0,
            0.0,
            10.0,
            10.0,
            1.0,
            Color::rgb(0.0, 0.0, 0.0),
        ))
        .with_rect(RectPrimitive::new(
            1.0,
            1.0,
            5.0,
            5.0,
            Color::rgb(0.5, 0.5, 0.5),
        ))
        .with_circle(CirclePrimitive::new(
            3.0,
            3.0,
            2.0,
            Color::rgb(0.1, 0.2, 0.3),
            1.0,
            Color::rgba(0.0, 0.0, 0.0, 0.25),
        ))
        .with_text(TextPrimitive::new(
            "label",
            2.0,
            2.0,
            12.0,
            Color::rgb(0.2, 0.2, 0.2),
            TextHAlign::Left,
        ));

    assert!(!frame.is_empty());
    assert_eq!(frame.primitive_count(), 4);
    frame.validate().expect("frame validates");
}

#[test]
fn invalid_primitives_fail_validation() {
    let bad_line = RenderFrame::new(prepared()).with_line(LinePrimitive::new(
        f64::NAN,
        0.0,
        10.0,
        10.0,
        1.0,
        Color::rgb(0.0, 0.0, 0.0),
    ));
    assert!(bad_line.validate().is_err());

    let bad_rect = RenderFrame::new(prepared()).with_rect(RectPrimitive::new(
        0.0,
        0.0,
        0.0,
        5.0,
        Color::rgb(0.5, 0.5, 0.5),
    ));
    assert!(bad_rect.validate().is_err());

    let bad_text = RenderFrame::new(prepared()).with_text(TextPrimitive::new(
        "",
        2.0,
        2.0,
        12.0,
        Color::rgb(0.2, 0.2, 0.2),
        TextHAlign::Left,
    ));
    assert!(bad_text.validate().is_err());
}

#[test]
fn dashed_stroke_requires_positive_segments() {
    let line = LinePrimitive::new(0.0, 0.0, 1.0, 1.0, 1.0, Color::rgb(0.0, 0.0, 0.0))
        .with_style(LineStrokeStyle::Dashed {
            dash_px: 0.0,
            gap_px: 4.0,
        });
    assert!(line.validate().is_err());
}

#[test]
fn out_of_range_colors_are_rejected() {
    assert!(Color::rgba(1.5, 0.0, 0.0, 1.0).validate().is_err());
    assert!(Color::rgba(0.0, 0.0, 0.0, f64::NAN).validate().is_err());
}

#[test]
fn null_renderer_records_primitive_counts() {
    let mut renderer = NullRenderer::default();
    let frame = RenderFrame::new(prepared())
        .with_line(LinePrimitive::new(
            0.0,
            0.0,
            10.0,
            10.0,
            1.0,
            Color::rgb(0.0, 0.0, 0.0),
        ))
        .with_text(TextPrimitive::new(
            "label",
            2.0,
            2.0,
            12.0,
            Color::rgb(0.2, 0.2, 0.2),
            TextHAlign::Left,
        ));

    renderer.render(&frame).expect("render");
    assert_eq!(renderer.clears, 1);
    assert_eq!(renderer.last_line_count, 1);
    assert_eq!(renderer.last_rect_count, 0);
    assert_eq!(renderer.last_circle_count, 0);
    assert_eq!(renderer.last_text_count, 1);
}
