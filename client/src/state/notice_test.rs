use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let a = state.push(Notice::success("saved"));
    let b = state.push(Notice::error("nope"));
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].notice.kind, NoticeKind::Success);
    assert_eq!(state.items[1].notice.message, "nope");
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut state = NoticeState::default();
    let a = state.push(Notice::success("one"));
    let b = state.push(Notice::success("two"));
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = NoticeState::default();
    let a = state.push(Notice::error("x"));
    state.dismiss(a);
    let b = state.push(Notice::error("y"));
    assert_ne!(a, b);
}
