//! Pointer Events Integration Tests
//!
//! Drives a draggable bound with pointer event support through
//! browser-like routing:
//! - Press filtering (button, primary pointer, multi-touch)
//! - Drag outside the element via pointer capture
//! - Release and cancel idempotence
//! - Teardown and context menu handling

mod common;

use common::{Page, Target};
use draggable_core::{EventKind, ListenerScope, NativeEvent, PointerInput, Point};

fn page() -> Page {
    Page::new(true)
}

// ============================================================================
// Press
// ============================================================================

#[test]
fn test_press_carries_pointer_coordinates() {
    let mut page = page();
    page.pointer_down(100.0, 200.0);

    let calls = page.calls();
    let press = calls.press.last().expect("press fired");
    assert_eq!(press.page, (100.0, 200.0));
    assert_eq!(press.offset, None);
}

#[test]
fn test_pointer_events_are_not_touch() {
    let mut page = page();
    page.pointer_down(100.0, 200.0);
    assert!(!page.calls().press[0].is_touch);
}

#[test]
fn test_touch_originated_pointer_is_not_touch() {
    let mut page = page();
    let input = PointerInput {
        pointer_type: draggable_core::PointerType::Touch,
        page: Point::new(5.0, 5.0),
        client: Point::new(5.0, 5.0),
        ..PointerInput::default()
    };
    let event = NativeEvent::pointer(EventKind::PointerDown, input).expect("pointer kind");
    page.fire(Target::Element, &event);

    assert_eq!(page.calls().press.len(), 1);
    assert!(!page.calls().press[0].is_touch);
}

#[test]
fn test_right_button_does_not_press() {
    let mut page = page();
    page.pointer(EventKind::PointerDown, Target::Element, 100.0, 200.0, true, 2);
    assert!(page.calls().press.is_empty());
}

#[test]
fn test_press_exposes_original_event() {
    let mut page = page();
    page.pointer_down(100.0, 200.0);
    assert_eq!(page.calls().press[0].kind, EventKind::PointerDown);
}

#[test]
fn test_ignores_multi_touch() {
    let mut page = page();
    page.pointer_down(100.0, 200.0);
    page.pointer(EventKind::PointerDown, Target::Element, 100.0, 200.0, false, 0);
    assert_eq!(page.calls().press.len(), 1);
}

#[test]
fn test_press_captures_pointer() {
    let mut page = page();
    page.pointer_down(100.0, 200.0);
    assert_eq!(page.surface.captured_pointer(), Some(1));
    page.pointer_up(100.0, 200.0);
    assert_eq!(page.surface.captured_pointer(), None);
}

// ============================================================================
// Drag
// ============================================================================

#[test]
fn test_drag_continues_outside_element() {
    let mut page = page();
    page.pointer_down(100.0, 200.0);
    page.pointer_move(Target::Elsewhere, 101.0, 201.0);
    assert_eq!(page.calls().drag.len(), 1);
}

#[test]
fn test_drag_carries_offset_from_press() {
    let mut page = page();
    page.pointer_down(100.0, 200.0);
    page.pointer_move(Target::Element, 101.0, 201.0);

    let calls = page.calls();
    assert_eq!(calls.drag[0].offset, Some((1.0, 1.0)));
}

#[test]
fn test_drag_offset_keeps_sign() {
    let mut page = page();
    page.pointer_down(100.0, 200.0);
    page.pointer_move(Target::Element, 80.0, 150.0);
    assert_eq!(page.calls().drag[0].offset, Some((-20.0, -50.0)));
}

#[test]
fn test_drag_client_coordinates_are_verbatim() {
    let mut page = page();
    page.scroll = Point::new(0.0, 300.0);
    page.pointer_down(100.0, 200.0);
    page.pointer_move(Target::Element, 101.0, 201.0);

    let calls = page.calls();
    assert_eq!(calls.drag[0].client, (101.0, 201.0));
    assert_eq!(calls.drag[0].page, (101.0, 501.0));
}

#[test]
fn test_no_drag_before_press() {
    let mut page = page();
    page.pointer_move(Target::Element, 101.0, 201.0);
    assert!(page.calls().drag.is_empty());
}

#[test]
fn test_destroy_stops_drag() {
    let mut page = page();
    page.pointer_down(100.0, 200.0);
    page.pointer_move(Target::Element, 101.0, 201.0);
    page.draggable.destroy();

    page.pointer_move(Target::Element, 102.0, 202.0);
    assert_eq!(page.calls().drag.len(), 1);
    assert!(page.surface.listeners().is_empty());
    assert_eq!(page.surface.captured_pointer(), None);
}

#[test]
fn test_in_flight_listener_after_destroy_is_ignored() {
    let mut page = page();
    page.pointer_down(100.0, 200.0);
    page.draggable.destroy();

    // A host that has not yet removed its listener still delivers.
    let input = PointerInput {
        page: Point::new(120.0, 220.0),
        ..PointerInput::default()
    };
    let event = NativeEvent::pointer(EventKind::PointerMove, input).expect("pointer kind");
    let outcome = page.draggable.dispatch(ListenerScope::Document, &event);

    assert!(!outcome.accepted);
    assert!(page.calls().drag.is_empty());
}

// ============================================================================
// Release
// ============================================================================

#[test]
fn test_release_on_pointer_up() {
    let mut page = page();
    page.pointer_down(100.0, 200.0);
    page.pointer_move(Target::Element, 101.0, 201.0);
    page.pointer_up(101.0, 201.0);

    let calls = page.calls();
    assert_eq!(calls.release.len(), 1);
    assert_eq!(calls.release[0].offset, Some((1.0, 1.0)));
}

#[test]
fn test_non_primary_up_does_not_release() {
    let mut page = page();
    page.pointer_down(100.0, 200.0);
    page.pointer_move(Target::Element, 101.0, 201.0);
    page.pointer(EventKind::PointerUp, Target::Element, 101.0, 201.0, false, 0);
    assert!(page.calls().release.is_empty());
}

#[test]
fn test_cancel_releases_once() {
    let mut page = page();
    page.pointer_down(100.0, 200.0);
    page.pointer_cancel(101.0, 201.0);
    page.pointer_cancel(101.0, 201.0);
    assert_eq!(page.calls().release.len(), 1);
}

#[test]
fn test_non_primary_cancel_does_not_release() {
    let mut page = page();
    page.pointer_down(100.0, 200.0);
    page.pointer_move(Target::Element, 101.0, 201.0);
    page.pointer(EventKind::PointerCancel, Target::Element, 101.0, 201.0, false, 0);
    assert!(page.calls().release.is_empty());
}

#[test]
fn test_no_release_without_press() {
    let mut page = page();
    page.pointer_up(100.0, 200.0);
    assert!(page.calls().release.is_empty());
}

#[test]
fn test_drag_after_release_never_fires() {
    let mut page = page();
    page.pointer_down(100.0, 200.0);
    page.pointer_up(100.0, 200.0);
    page.pointer_move(Target::Element, 110.0, 210.0);

    assert!(page.calls().drag.is_empty());
    assert_eq!(page.draggable.state().press_origin(), None);
    assert_eq!(page.draggable.state().active_modality(), None);
}

#[test]
fn test_destroy_before_gesture_disposes_everything() {
    let mut page = page();
    page.draggable.destroy();

    page.pointer_down(100.0, 200.0);
    page.pointer_move(Target::Element, 101.0, 201.0);
    page.pointer_up(101.0, 201.0);
    let menu = page.context_menu();

    assert!(!menu.prevent_default);
    assert_eq!(page.calls().total(), 0);
}

// ============================================================================
// mouse_only
// ============================================================================

#[test]
fn test_mouse_only_ignores_pointer_down() {
    let mut page = Page::with_config(true, |config| config.mouse_only(true));
    page.pointer_down(100.0, 200.0);
    assert!(page.calls().press.is_empty());

    page.mouse_down(100.0, 200.0);
    assert_eq!(page.calls().press.len(), 1);
}

// ============================================================================
// Context menu
// ============================================================================

#[test]
fn test_context_menu_prevented_while_dragging() {
    let mut page = page();
    page.pointer_down(100.0, 200.0);
    assert!(page.context_menu().prevent_default);
    page.pointer_up(100.0, 200.0);
}

#[test]
fn test_context_menu_allowed_after_release() {
    let mut page = page();
    page.pointer_down(100.0, 200.0);
    page.pointer_up(100.0, 200.0);
    assert!(!page.context_menu().prevent_default);
}
