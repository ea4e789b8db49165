use facet_svg::{PresentationAttrs, Svg, SvgNode, facet_xml};
use scenery::{
    Line, OutlinePolygon, OutlineReach, Rectangle, RoundedRectangle, Scene, SceneConfig, Shape,
    Stroke, SvgOptions, SvgRenderer, Text, TextAlignment, TextOutline, TextShadow,
    glam::Vec2,
};

fn parse(svg: &SvgRenderer) -> Svg {
    facet_xml::from_str(svg.document().unwrap_or_default()).expect("document parses")
}

fn render(scene: &Scene, width: f32, height: f32) -> Svg {
    let mut svg = SvgRenderer::new(SvgOptions::new(width, height));
    scene.draw(&mut svg).expect("draw");
    parse(&svg)
}

#[test]
fn scene_renders_to_svg_document() {
    let mut scene = Scene::with_config(SceneConfig::default().with_background(0xFFFFFF));

    let mut rect = Rectangle::new(10.0, 10.0, 80.0, 40.0, 0x3366CC);
    rect.translate(5.0, 5.0);
    scene.add_shape(rect);
    scene.add_shape(
        Line::new(0.0, 0.0, 100.0, 100.0, 0x000000)
            .with_stroke(Stroke::new(2.0).with_rounded_caps(true)),
    );

    let doc = render(&scene, 200.0, 100.0);
    assert_eq!(doc.xmlns.as_deref(), Some(facet_svg::SVG_NS));
    assert_eq!(doc.width.as_deref(), Some("200"));
    assert_eq!(doc.height.as_deref(), Some("100"));
    assert_eq!(doc.view_box.as_deref(), Some("0 0 200 100"));

    let [SvgNode::Rect(background), SvgNode::Rect(rect), SvgNode::Line(line)] =
        doc.children.as_slice()
    else {
        panic!("unexpected children: {:?}", doc.children);
    };
    assert_eq!((background.width, background.height), (Some(200.0), Some(100.0)));
    assert_eq!(background.fill(), Some("rgb(255,255,255)"));

    assert_eq!((rect.x, rect.y), (Some(10.0), Some(10.0)));
    assert_eq!(rect.fill(), Some("rgb(51,102,204)"));
    assert_eq!(rect.transform(), Some("matrix(1 0 0 1 5 5)"));

    assert_eq!((line.x2, line.y2), (Some(100.0), Some(100.0)));
    assert_eq!(line.stroke(), Some("rgb(0,0,0)"));
    assert_eq!(line.stroke_width(), Some("2"));
    assert_eq!(line.stroke_linecap.as_deref(), Some("round"));
    assert_eq!(line.transform(), None);
}

#[test]
fn rounded_rectangle_and_outline_polygon() {
    let mut scene = Scene::new();
    scene.add_shape(RoundedRectangle::new(0.0, 0.0, 30.0, 20.0, 4.0, 2.0, 0x112233));
    scene.add_shape(
        OutlinePolygon::new(
            [Vec2::new(0.0, 0.0), Vec2::new(8.0, 0.0), Vec2::new(4.0, 6.0)],
            0xFF8800,
        )
        .with_offset(10.0, 10.0)
        .with_stroke(Stroke::new(1.5)),
    );

    let doc = render(&scene, 50.0, 50.0);
    let [SvgNode::Rect(rounded), SvgNode::Polygon(outline)] = doc.children.as_slice() else {
        panic!("unexpected children: {:?}", doc.children);
    };
    assert_eq!((rounded.rx, rounded.ry), (Some(4.0), Some(2.0)));
    assert_eq!(rounded.fill(), Some("rgb(17,34,51)"));

    assert_eq!(outline.points.as_deref(), Some("10,10 18,10 14,16"));
    assert_eq!(outline.fill(), Some("none"));
    assert_eq!(outline.stroke(), Some("rgb(255,136,0)"));
    assert_eq!(outline.stroke_width(), Some("1.5"));
}

#[test]
fn text_passes_draw_shadow_then_outline_then_glyphs() {
    let mut scene = Scene::new();
    scene.add_shape(
        Text::new("a<b", 10.0, 60.0, 80.0, 20.0, 0xFFFFFF)
            .with_alignment(TextAlignment::Center)
            .with_shadow(TextShadow::new(0x000000, 2.0, 2.0))
            .with_outline(TextOutline::new(0x00FF00).with_reach(OutlineReach::Four)),
    );

    let doc = render(&scene, 100.0, 100.0);
    let texts: Vec<_> = doc
        .children
        .iter()
        .map(|node| match node {
            SvgNode::Text(text) => text,
            other => panic!("expected text, got {other:?}"),
        })
        .collect();

    let placed: Vec<_> = texts
        .iter()
        .map(|t| (t.x.unwrap_or_default(), t.y.unwrap_or_default(), t.fill().unwrap_or_default()))
        .collect();
    assert_eq!(
        placed,
        [
            (52.0, 62.0, "rgb(0,0,0)"),
            (49.0, 60.0, "rgb(0,255,0)"),
            (51.0, 60.0, "rgb(0,255,0)"),
            (50.0, 59.0, "rgb(0,255,0)"),
            (50.0, 61.0, "rgb(0,255,0)"),
            (50.0, 60.0, "rgb(255,255,255)"),
        ]
    );
    for text in &texts {
        assert_eq!(text.content, "a<b");
        assert_eq!(text.font_family.as_deref(), Some("Arial"));
        assert_eq!(text.font_size, Some(16.0));
        assert_eq!(text.text_anchor.as_deref(), Some("middle"));
    }
}

#[test]
fn each_frame_replaces_the_document() {
    let mut scene = Scene::new();
    scene.add_shape(Rectangle::new(0.0, 0.0, 1.0, 1.0, 0xFF0000));

    let mut svg = SvgRenderer::new(SvgOptions::new(10.0, 10.0));
    scene.draw(&mut svg).expect("first frame");
    assert_eq!(parse(&svg).children.len(), 1);

    scene.clear();
    scene.draw(&mut svg).expect("second frame");
    assert!(parse(&svg).children.is_empty());
}
