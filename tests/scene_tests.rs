use std::panic::{AssertUnwindSafe, catch_unwind};

use insta::assert_snapshot;
use scenery::glam::Vec2;
use scenery::{
    AnyShape, Circle, Line, Polygon, RecordingRenderer, Rectangle, RenderError, Renderer, Scene,
    SceneConfig, SceneError, Shape, Transform, TransformPolicy, Triangle,
};

fn rect_and_circle() -> Scene {
    let mut scene = Scene::new();
    scene.add_shape(Rectangle::new(0.0, 0.0, 100.0, 50.0, 0xFF0000));
    scene.add_shape(Circle::new(200.0, 200.0, 30.0, 0x00FF00));
    scene
}

#[test]
fn frame_is_bracketed_and_colors_normalized() {
    let mut r = RecordingRenderer::new();
    rect_and_circle().draw(&mut r).expect("draw");
    assert_snapshot!(r.to_string(), @r"
    beginFrame()
    fillRectangle(0,0,100,50,0xFFFF0000)
    fillEllipse(200,200,30,30,0xFF00FF00)
    endFrame()
    ");
}

#[test]
fn shapes_draw_in_insertion_order() {
    let mut scene = Scene::new();
    scene.add_shape(Rectangle::new(0.0, 0.0, 1.0, 1.0, 0xAA0000));
    scene.add_shape(Line::new(0.0, 0.0, 5.0, 5.0, 0x00BB00));
    scene.add_shape(Circle::new(0.0, 0.0, 1.0, 0x0000CC));

    let mut r = RecordingRenderer::new();
    scene.draw(&mut r).expect("draw");
    assert_snapshot!(r.to_string(), @r"
    beginFrame()
    fillRectangle(0,0,1,1,0xFFAA0000)
    strokeLine(0,0,5,5,0xFF00BB00,1,false)
    fillEllipse(0,0,1,1,0xFF0000CC)
    endFrame()
    ");
}

#[test]
fn failed_begin_frame_touches_nothing() {
    let mut r = RecordingRenderer::new().failing_begin_frame();
    let err = rect_and_circle().draw(&mut r).unwrap_err();
    assert_eq!(err, SceneError::BeginFrame(RenderError::SurfaceNotReady));
    assert!(r.commands().is_empty());
    assert!(!r.in_frame());
}

#[test]
fn draw_error_stops_traversal_but_ends_frame() {
    let mut scene = Scene::new();
    scene.add_shape(Rectangle::new(0.0, 0.0, 10.0, 10.0, 0xFF0000));
    let mut moved = Circle::new(0.0, 0.0, 5.0, 0x00FF00);
    moved.translate(10.0, 5.0);
    scene.add_shape(moved);
    scene.add_shape(Rectangle::new(50.0, 50.0, 10.0, 10.0, 0x0000FF));

    let mut r = RecordingRenderer::new().failing_primitive(1);
    let err = scene.draw(&mut r).unwrap_err();
    assert_eq!(
        err,
        SceneError::Draw {
            index: 1,
            source: RenderError::Injected {
                call: "fill_ellipse"
            }
        }
    );
    assert_eq!(r.transform(), Transform::IDENTITY);
    assert!(!r.in_frame());
    assert_snapshot!(r.to_string(), @r"
    beginFrame()
    fillRectangle(0,0,10,10,0xFFFF0000)
    setTransform(1,0,0,1,10,5)
    setTransform(1,0,0,1,0,0)
    endFrame()
    ");
}

#[test]
fn transform_restored_after_panic() {
    let mut circle = Circle::new(0.0, 0.0, 5.0, 0xFFFFFF);
    circle.translate(3.0, 4.0);

    let mut r = RecordingRenderer::new().panicking_primitive(0);
    let ambient = Transform::scaling(2.0, 2.0);
    r.set_transform(ambient);

    let outcome = catch_unwind(AssertUnwindSafe(|| circle.draw(&mut r)));
    assert!(outcome.is_err());
    assert_eq!(r.transform(), ambient);
    assert_eq!(r.primitive_count(), 0);
}

#[test]
fn panic_mid_scene_closes_frame_and_restores_transform() {
    let mut scene = rect_and_circle();
    if let Some(shape) = scene.get_mut(0) {
        shape.rotate(30.0);
    }

    let mut r = RecordingRenderer::new().panicking_primitive(0);
    let outcome = catch_unwind(AssertUnwindSafe(|| scene.draw(&mut r)));
    assert!(outcome.is_err());
    assert!(!r.in_frame());
    assert_eq!(r.transform(), Transform::IDENTITY);
    assert_eq!(r.commands().last(), Some(&scenery::Command::EndFrame));
}

#[test]
fn transforms_do_not_leak_between_shapes() {
    let mut scene = Scene::new();
    let mut first = Rectangle::new(0.0, 0.0, 10.0, 10.0, 0xFF0000);
    first.scale(2.0, None);
    scene.add_shape(first);
    scene.add_shape(Rectangle::new(20.0, 0.0, 10.0, 10.0, 0x00FF00));

    let mut r = RecordingRenderer::new();
    scene.draw(&mut r).expect("draw");

    let history = r.transform_history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0], Transform::scaling(2.0, 2.0));
    assert_eq!(history[1], Transform::IDENTITY);
}

#[test]
fn rotation_keeps_the_shape_position_fixed() {
    let mut tri = Triangle::new(10.0, 20.0, 30.0, 20.0, 10.0, 40.0, 0xFFFFFF);
    tri.rotate(90.0);

    let mut r = RecordingRenderer::new();
    tri.draw(&mut r).expect("draw");
    let installed = r.transform_history()[0];
    let pivot = Vec2::new(10.0, 20.0);
    assert!(installed.transform_point(pivot).distance(pivot) < 1e-4);
    // (30, 20) sits 20px right of the pivot; a quarter turn puts it below.
    let turned = installed.transform_point(Vec2::new(30.0, 20.0));
    assert!(turned.distance(Vec2::new(10.0, 40.0)) < 1e-3, "{turned}");
}

#[test]
fn compose_policy_applies_local_then_ambient() {
    let mut rect = Rectangle::new(0.0, 0.0, 10.0, 10.0, 0xFF0000);
    rect.translate(10.0, 5.0);
    let mut scene: Scene = [AnyShape::from(rect)].into_iter().collect();
    *scene.config_mut() = SceneConfig::default().with_transform_policy(TransformPolicy::Compose);

    let mut r = RecordingRenderer::new();
    r.set_transform(Transform::translation(100.0, 0.0));
    r.clear_commands();
    scene.draw(&mut r).expect("draw");

    assert_eq!(
        r.transform_history(),
        &[
            Transform::translation(110.0, 5.0),
            Transform::translation(100.0, 0.0)
        ]
    );
}

#[test]
fn degenerate_polygon_is_skipped_and_reported() {
    let mut scene = Scene::new();
    let mut poly = Polygon::new([Vec2::ZERO, Vec2::new(5.0, 0.0)], 0xFF0000);
    poly.rotate(45.0);
    scene.add_shape(poly);

    let mut r = RecordingRenderer::new();
    let report = scene.draw(&mut r).expect("draw");
    assert_eq!(report.degenerate, 1);
    assert!(r.transform_history().is_empty());
    assert_eq!(r.to_string(), "beginFrame()\nendFrame()\n");

    if let Some(AnyShape::Polygon(poly)) = scene.get_mut(0) {
        poly.push_point(0.0, 5.0);
    }
    r.clear_commands();
    let report = scene.draw(&mut r).expect("draw");
    assert_eq!(report.drawn, 1);
    assert_eq!(r.primitive_count(), 1);
}

#[test]
fn removing_past_the_end_fails() {
    let mut scene = rect_and_circle();
    let err = scene.remove_shape(5).unwrap_err();
    assert_eq!(err, SceneError::IndexOutOfBounds { index: 5, len: 2 });
    assert_eq!(
        err.to_string(),
        "shape index 5 out of bounds (scene holds 2 shapes)"
    );
    assert_eq!(scene.len(), 2);
}

#[test]
fn cloned_scene_is_independent() {
    let original = rect_and_circle();
    let mut copy = original.clone();
    if let Some(shape) = copy.get_mut(0) {
        shape.move_by(5.0, 5.0);
        shape.set_color(0x123456.into());
    }

    assert_eq!(original.get(0).map(|s| s.position()), Some(Vec2::ZERO));
    assert_eq!(copy.get(0).map(|s| s.position()), Some(Vec2::new(5.0, 5.0)));
    assert_ne!(original, copy);
}

#[test]
fn hidden_shapes_are_counted_not_drawn() {
    let mut scene = rect_and_circle();
    for shape in scene.iter_mut() {
        shape.set_visible(false);
    }
    let mut r = RecordingRenderer::new();
    let report = scene.draw(&mut r).expect("draw");
    assert_eq!((report.drawn, report.hidden), (0, 2));
    assert_eq!(r.primitive_count(), 0);
}
