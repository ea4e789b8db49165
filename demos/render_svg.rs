//! Build a small scene and print it as SVG.
//!
//! Run with `RUST_LOG=scenery=debug` to see frame and transform events on
//! stderr.

use scenery::glam::Vec2;
use scenery::{
    Arc, Circle, Line, OutlineRoundedRectangle, Polygon, Rectangle, Scene, SceneConfig, Shape,
    Stroke, SvgOptions, SvgRenderer, Text, TextAlignment, TextOutline, TextShadow, Triangle,
};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut scene = Scene::with_config(SceneConfig::default().with_background(0x1E1E2E));

    scene.add_shape(Rectangle::new(20.0, 20.0, 160.0, 80.0, 0x89B4FA));
    scene.add_shape(
        OutlineRoundedRectangle::new(200.0, 20.0, 160.0, 80.0, 12.0, 12.0, 0xF38BA8)
            .with_stroke(Stroke::new(3.0)),
    );

    let mut sun = Circle::new(440.0, 60.0, 40.0, 0xF9E2AF);
    sun.scale(1.25, None);
    scene.add_shape(sun);

    let mut tilted = Rectangle::new(80.0, 180.0, 100.0, 40.0, 0xA6E3A1);
    tilted.rotate(30.0);
    scene.add_shape(tilted);

    scene.add_shape(Triangle::new(240.0, 240.0, 300.0, 140.0, 360.0, 240.0, 0xCBA6F7));
    scene.add_shape(
        Polygon::new(
            [
                Vec2::new(0.0, 0.0),
                Vec2::new(40.0, -20.0),
                Vec2::new(80.0, 0.0),
                Vec2::new(60.0, 40.0),
                Vec2::new(20.0, 40.0),
            ],
            0xFAB387,
        )
        .with_offset(420.0, 180.0),
    );
    scene.add_shape(
        Line::new(20.0, 300.0, 560.0, 300.0, 0x9399B2)
            .with_stroke(Stroke::new(2.0).with_rounded_caps(true)),
    );
    scene.add_shape(Arc::new(300.0, 380.0, 50.0, 50.0, 180.0, 180.0, 0x94E2D5).filled());
    scene.add_shape(
        Text::new("scenery", 20.0, 440.0, 560.0, 40.0, 0xCDD6F4)
            .with_font("Helvetica", 28.0)
            .with_alignment(TextAlignment::Center)
            .with_shadow(TextShadow::new(0x11111B, 2.0, 2.0))
            .with_outline(TextOutline::new(0x45475A)),
    );

    let mut svg = SvgRenderer::new(SvgOptions::new(600.0, 500.0).with_precision(2));
    let report = scene.draw(&mut svg)?;
    tracing::info!(
        drawn = report.drawn,
        hidden = report.hidden,
        degenerate = report.degenerate,
        "scene rendered"
    );

    if let Some(document) = svg.document() {
        print!("{document}");
    }
    Ok(())
}
