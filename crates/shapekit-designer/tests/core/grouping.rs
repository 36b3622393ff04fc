use shapekit_core::{Error, GroupingError};
use shapekit_designer::{DesignerState, GroupOutcome, Point, TransformEnd, OUTLINE_PADDING};

fn placed(state: &mut DesignerState, id: u64, x: f64, y: f64) -> u64 {
    state.end_drag(id, Point::new(x, y));
    id
}

fn select(state: &mut DesignerState, ids: &[u64]) {
    state.click(None, false);
    for &id in ids {
        state.click(Some(id), true);
    }
}

#[test]
fn test_create_group_with_one_id_is_rejected() {
    let mut state = DesignerState::with_seed(1);
    let r = state.add_rectangle();
    select(&mut state, &[r]);

    let err = state.create_group().expect_err("single id");
    assert_eq!(
        err,
        Error::Grouping(GroupingError::TooFewSelected {
            required: 2,
            found: 1
        })
    );
    assert!(err.is_precondition());
    assert!(state.groups().is_empty());
    assert_eq!(state.selection(), &[r]);
}

#[test]
fn test_group_background_covers_padded_members() {
    let mut state = DesignerState::with_seed(2);
    let r = state.add_rectangle();
    let c = state.add_circle();
    placed(&mut state, r, 100.0, 100.0);
    placed(&mut state, c, 300.0, 100.0);
    select(&mut state, &[r, c]);

    state.create_group().expect("grouped");
    let group = state.groups()[0].clone();
    assert_eq!(group.transform.position, Point::new(200.0, 100.0));

    // rect 100x100 at local (-100, 0), circle r50 at local (100, 0)
    let bg = group.background;
    assert!((bg.position.x - (-150.0 - OUTLINE_PADDING)).abs() < 1e-9);
    assert!((bg.position.y - (-50.0 - OUTLINE_PADDING)).abs() < 1e-9);
    assert!((bg.width - (300.0 + 2.0 * OUTLINE_PADDING)).abs() < 1e-9);
    assert!((bg.height - (100.0 + 2.0 * OUTLINE_PADDING)).abs() < 1e-9);
}

#[test]
fn test_rotated_rectangle_background_uses_unrotated_extents() {
    let mut state = DesignerState::with_seed(12);
    let a = state.add_rectangle();
    let b = state.add_rectangle();
    state.end_transform(a, TransformEnd::new(Point::new(0.0, 0.0), 45.0, 1.0, 1.0));
    placed(&mut state, b, 1000.0, 0.0);
    select(&mut state, &[a, b]);

    state.create_group().expect("grouped");
    let group = state.groups()[0].clone();
    assert_eq!(group.transform.position, Point::new(500.0, 0.0));

    // Both 100x100 members contribute half extents of 50 + 10.
    let bg = group.background;
    assert!((bg.position.x - (-560.0)).abs() < 1e-9);
    assert!((bg.position.y - (-60.0)).abs() < 1e-9);
    assert!((bg.width - 1120.0).abs() < 1e-9);
    assert!((bg.height - 120.0).abs() < 1e-9);
    assert!(state.store().validate(OUTLINE_PADDING).is_ok());
}

#[test]
fn test_merge_third_shape_into_existing_group() {
    let mut state = DesignerState::with_seed(3);
    let s1 = state.add_rectangle();
    let s2 = state.add_circle();
    let s3 = state.add_rectangle();
    placed(&mut state, s1, 100.0, 100.0);
    placed(&mut state, s2, 300.0, 100.0);
    placed(&mut state, s3, 200.0, 400.0);

    select(&mut state, &[s1, s2]);
    state.create_group().expect("G");
    let g = state.selection()[0];

    select(&mut state, &[g, s3]);
    let outcome = state.create_group().expect("merged");
    assert!(matches!(outcome, GroupOutcome::Extended { group_id, .. } if group_id == g));

    assert_eq!(state.groups().len(), 1);
    assert_eq!(state.store().members_of(g), vec![s1, s2, s3]);
    assert_eq!(state.selection(), &[g]);

    let abs = state.absolute_transform(s3).expect("s3");
    assert!((abs.position.x - 200.0).abs() < 1e-9);
    assert!((abs.position.y - 400.0).abs() < 1e-9);
    assert!(state.store().validate(OUTLINE_PADDING).is_ok());
}

#[test]
fn test_merge_twice_is_nothing_to_add() {
    let mut state = DesignerState::with_seed(4);
    let a = state.add_rectangle();
    let b = state.add_rectangle();
    select(&mut state, &[a, b]);
    state.create_group().expect("group");
    let g = state.selection()[0];

    // Clicking a grouped shape selects its group, so select the member
    // directly through add_to_group instead.
    let err = state.add_to_group(g, &[a]).expect_err("already member");
    assert_eq!(
        err,
        Error::Grouping(GroupingError::NothingToAdd { group_id: g })
    );
}

#[test]
fn test_stealing_from_pair_dissolves_source() {
    let mut state = DesignerState::with_seed(5);
    let ids: Vec<u64> = (0..4).map(|_| state.add_rectangle()).collect();
    select(&mut state, &ids[0..2]);
    state.create_group().expect("source");
    let source = state.selection()[0];
    select(&mut state, &ids[2..4]);
    state.create_group().expect("target");
    let target = state.selection()[0];

    let outcome = state.add_to_group(target, &[ids[0]]).expect("moved");
    let GroupOutcome::Extended { dissolved, .. } = outcome else {
        panic!("expected extension");
    };
    assert_eq!(dissolved.len(), 1);
    assert_eq!(dissolved[0].0, source);

    assert_eq!(state.groups().len(), 1);
    assert_eq!(state.store().members_of(target).len(), 3);
    let orphan = state.store().shape(ids[1]).expect("released");
    assert!(orphan.group_id.is_none());
    assert!(orphan.draggable);
}

#[test]
fn test_ungroup_requires_exactly_one_group() {
    let mut state = DesignerState::with_seed(6);
    let a = state.add_rectangle();
    let b = state.add_circle();
    select(&mut state, &[a, b]);

    let err = state.ungroup().expect_err("shapes selected");
    assert_eq!(
        err,
        Error::Grouping(GroupingError::NotASingleGroup { selected: 2 })
    );
    assert_eq!(state.selection(), &[a, b]);
}

#[test]
fn test_clear_all_from_any_state() {
    let mut state = DesignerState::with_seed(7);
    let a = state.add_rectangle();
    let b = state.add_circle();
    state.add_rectangle();
    select(&mut state, &[a, b]);
    state.create_group().expect("group");
    state.hover_enter(a);

    state.clear_all();
    assert_eq!(state.shapes().count(), 0);
    assert!(state.groups().is_empty());
    assert!(state.selection().is_empty());
    assert_eq!(state.hovered(), None);

    state.clear_all();
    assert!(state.store().is_empty());
}
