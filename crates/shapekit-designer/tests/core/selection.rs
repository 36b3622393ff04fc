use shapekit_core::{GroupButton, HandleMode};
use shapekit_designer::{Anchor, DesignerState};

#[test]
fn test_click_on_grouped_shape_selects_group() {
    let mut state = DesignerState::with_seed(11);
    let a = state.add_rectangle();
    let b = state.add_circle();
    state.click(Some(a), false);
    state.click(Some(b), true);
    state.create_group().expect("group");
    let g = state.selection()[0];

    state.click(None, false);
    state.click(Some(b), false);
    assert_eq!(state.selection(), &[g]);
    assert_eq!(state.effective_target(a), Some(g));
    assert_eq!(state.controls().group_button, GroupButton::Ungroup);
}

#[test]
fn test_handles_follow_selection() {
    let mut state = DesignerState::with_seed(12);
    let a = state.add_rectangle();
    assert_eq!(state.controls().transformer.mode, HandleMode::Hidden);

    state.click(Some(a), false);
    let transformer = &state.controls().transformer;
    assert_eq!(transformer.mode, HandleMode::Full);
    assert_eq!(transformer.enabled_anchors, Anchor::ALL.to_vec());
    assert_eq!(state.controls().group_button, GroupButton::CreateGroup);
}

#[test]
fn test_hover_outline_is_locked_and_suppressed_when_selected() {
    let mut state = DesignerState::with_seed(13);
    let a = state.add_rectangle();
    let b = state.add_rectangle();

    state.hover_enter(a);
    let hover = state.controls().hover.clone().expect("hover outline");
    assert_eq!(hover.mode, HandleMode::Locked);
    assert!(!hover.rotate_enabled);
    assert!(hover.border_dash.is_some());

    state.click(Some(a), false);
    assert!(state.controls().hover.is_none());

    state.hover_leave(b);
    assert_eq!(state.hovered(), Some(a));
    state.hover_leave(a);
    assert_eq!(state.hovered(), None);
}

#[test]
fn test_stale_ids_are_ignored() {
    let mut state = DesignerState::with_seed(14);
    let a = state.add_rectangle();
    state.click(Some(a), false);

    state.click(Some(4242), false);
    state.hover_enter(4242);
    assert_eq!(state.selection(), &[a]);
    assert_eq!(state.hovered(), None);
}
