use btc_charts::api::annotation::{
    format_price_label, price_tick_label, watermark_label, year_tick_label,
};
use btc_charts::core::{AxisTick, PlotArea, Segment};
use btc_charts::render::{
    Color, DrawCommand, LinePrimitive, NullRenderer, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

#[test]
fn price_labels_group_thousands() {
    assert_eq!(format_price_label(1_000.0), "$1,000");
    assert_eq!(format_price_label(1_000_000.0), "$1,000,000");
    assert_eq!(format_price_label(10.0), "$10");
    assert_eq!(format_price_label(999.6), "$1,000");
    assert_eq!(format_price_label(-2_500.0), "-$2,500");
}

#[test]
fn small_price_labels_keep_needed_decimals() {
    assert_eq!(format_price_label(0.1), "$0.1");
    assert_eq!(format_price_label(0.25), "$0.25");
    assert_eq!(format_price_label(0.01), "$0.01");
}

#[test]
fn labels_sit_inside_the_plot() {
    let area = PlotArea::new(1024, 576, 18);
    let tick = AxisTick {
        value: 100.0,
        position: 20,
    };

    let price = price_tick_label(tick, area, 11.0, Color::BLACK);
    assert_eq!(price.text, "$100");
    assert_eq!(price.x, 22.0);
    assert_eq!(price.y, 18.0);
    assert_eq!(price.h_align, TextHAlign::Left);

    let year_tick = AxisTick {
        value: 1_453.0,
        position: 300,
    };
    let year = year_tick_label(2013, year_tick, area, 11.0, Color::BLACK);
    assert_eq!(year.text, "2013");
    assert_eq!(year.x, 300.0);
    assert_eq!(year.y, 557.0 - 15.0);
    assert_eq!(year.h_align, TextHAlign::Center);

    let watermark = watermark_label("btc", area, 11.0, Color::BLACK);
    assert_eq!(watermark.x, 1_001.0);
    assert_eq!(watermark.y, 22.0);
    assert_eq!(watermark.h_align, TextHAlign::Right);
}

#[test]
fn frame_counts_commands_by_kind() {
    let mut frame = RenderFrame::new(PlotArea::new(100, 50, 5));
    frame.push_rect(RectPrimitive::new(0.0, 0.0, 100.0, 50.0, Color::WHITE));
    frame.push_line(LinePrimitive::from_segment(
        Segment {
            x1: 5,
            y1: 10,
            x2: 6,
            y2: 12,
            color: Color::BLACK,
        },
        1.0,
    ));
    frame.push_text(TextPrimitive::new(
        "2012",
        50.0,
        40.0,
        11.0,
        Color::BLACK,
        TextHAlign::Center,
    ));

    let stats = frame.stats();
    assert_eq!((stats.rects, stats.segments, stats.bands, stats.texts), (1, 1, 0, 1));
    assert_eq!(frame.segments().count(), 1);
    assert!(frame.validate().is_ok());
}

#[test]
fn frame_snapshot_tags_command_kinds() {
    let mut frame = RenderFrame::new(PlotArea::new(10, 10, 0));
    frame.push_rect(RectPrimitive::new(0.0, 0.0, 10.0, 10.0, Color::WHITE));

    let json = frame.to_json_pretty().expect("json");
    assert!(json.contains("\"kind\": \"fill_rect\""));
}

#[test]
fn null_renderer_rejects_invalid_geometry() {
    let mut frame = RenderFrame::new(PlotArea::new(10, 10, 0));
    frame.push(DrawCommand::DrawSegment(LinePrimitive::new(
        0.0,
        f64::NAN,
        1.0,
        1.0,
        1.0,
        Color::BLACK,
    )));

    let mut renderer = NullRenderer::default();
    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.frames_rendered, 0);
}

#[test]
fn null_renderer_records_stats() {
    let mut frame = RenderFrame::new(PlotArea::new(10, 10, 0));
    frame.push_rect(
        RectPrimitive::new(0.0, 0.0, 10.0, 10.0, Color::TRANSPARENT).with_border(1.0, Color::BLACK),
    );

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_stats.rects, 1);
}
