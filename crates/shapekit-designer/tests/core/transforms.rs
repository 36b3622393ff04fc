use shapekit_designer::{DesignerShape, DesignerState, Point, TransformEnd, OUTLINE_PADDING};

#[test]
fn test_transform_end_folds_scale_into_rectangle() {
    let mut state = DesignerState::with_seed(21);
    let r = state.add_rectangle();

    state.end_transform(r, TransformEnd::new(Point::new(50.0, 60.0), 15.0, 2.0, 0.5));
    let obj = state.store().shape(r).expect("rect");
    assert_eq!(obj.shape.size(), (200.0, 50.0));
    assert_eq!(obj.transform.position, Point::new(50.0, 60.0));
    assert_eq!(obj.transform.rotation, 15.0);
}

#[test]
fn test_transform_end_circle_uses_larger_factor() {
    let mut state = DesignerState::with_seed(22);
    let c = state.add_circle();

    state.end_transform(c, TransformEnd::new(Point::new(0.0, 0.0), 0.0, 1.5, -3.0));
    let obj = state.store().shape(c).expect("circle");
    assert_eq!(obj.shape.size(), (300.0, 300.0));
}

#[test]
fn test_group_transform_scales_members_and_background() {
    let mut state = DesignerState::with_seed(23);
    let a = state.add_rectangle();
    let b = state.add_rectangle();
    state.end_drag(a, Point::new(100.0, 100.0));
    state.end_drag(b, Point::new(300.0, 100.0));
    state.click(Some(a), false);
    state.click(Some(b), true);
    state.create_group().expect("group");
    let g = state.selection()[0];

    state.end_transform(g, TransformEnd::new(Point::new(200.0, 100.0), 0.0, 2.0, 2.0));

    let local = state.store().shape(a).expect("a").transform.position;
    assert_eq!(local, Point::new(-200.0, 0.0));
    let group = state.store().group(g).expect("group");
    assert!((group.background.width - (600.0 + 2.0 * OUTLINE_PADDING)).abs() < 1e-9);
    assert!(state.store().validate(OUTLINE_PADDING).is_ok());
}

#[test]
fn test_grouped_shape_drag_is_ignored_but_group_drag_moves_members() {
    let mut state = DesignerState::with_seed(24);
    let a = state.add_rectangle();
    let b = state.add_circle();
    state.end_drag(a, Point::new(0.0, 0.0));
    state.end_drag(b, Point::new(100.0, 0.0));
    state.click(Some(a), false);
    state.click(Some(b), true);
    state.create_group().expect("group");
    let g = state.selection()[0];

    state.end_drag(a, Point::new(999.0, 999.0));
    assert_eq!(
        state.absolute_transform(a).map(|t| t.position),
        Some(Point::new(0.0, 0.0))
    );

    state.end_drag(g, Point::new(50.0, 20.0));
    assert_eq!(
        state.absolute_transform(a).map(|t| t.position),
        Some(Point::new(0.0, 20.0))
    );
}

#[test]
fn test_resized_member_refreshes_group_background() {
    let mut state = DesignerState::with_seed(25);
    let a = state.add_rectangle();
    let b = state.add_rectangle();
    state.click(Some(a), false);
    state.click(Some(b), true);
    state.create_group().expect("group");

    let local = state.store().shape(a).expect("a").transform;
    state.end_transform(a, TransformEnd::new(local.position, 0.0, 3.0, 3.0));
    assert!(state.store().validate(OUTLINE_PADDING).is_ok());
}

#[test]
fn test_resize_viewport_bounds_new_shapes() {
    let mut state = DesignerState::with_seed(26);
    state.resize_viewport(40.0, 30.0);
    for _ in 0..20 {
        let id = state.add_circle();
        let p = state.store().shape(id).expect("circle").transform.position;
        assert!((0.0..40.0).contains(&p.x));
        assert!((0.0..30.0).contains(&p.y));
    }
}
