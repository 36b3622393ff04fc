use shapekit_designer::geometry::{compose, relative_to, to_local_space, to_parent_space};
use shapekit_designer::{Point, Transform};

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn test_local_space_of_rotated_parent() {
    // Parent at (100, 50) rotated 90: a point one unit below it is one unit
    // along the parent's local x axis.
    let local = to_local_space(Point::new(100.0, 51.0), Point::new(100.0, 50.0), 90.0);
    assert!(close(local, Point::new(1.0, 0.0)));

    let back = to_parent_space(local, Point::new(100.0, 50.0), 90.0);
    assert!(close(back, Point::new(100.0, 51.0)));
}

#[test]
fn test_relative_to_then_compose() {
    let parent = Transform::new(Point::new(-40.0, 12.5), 33.0);
    let absolute = Transform::new(Point::new(7.0, 300.0), -15.0);

    let local = relative_to(&absolute, &parent);
    let restored = compose(&local, &parent);

    assert!(close(restored.position, absolute.position));
    assert!((restored.rotation - absolute.rotation).abs() < 1e-9);
    assert!((local.rotation - -48.0).abs() < 1e-9);
}
