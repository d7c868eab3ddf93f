use crossterm::event::{
    Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseEvent,
    MouseEventKind,
};
use navdom::event::translate;
use navdom::{hit_test, hit_test_any, layout, Element, Event, Key, LayoutResult, MouseButton, Rect};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

fn nav_tree() -> Element {
    Element::new("nav").id("nav").child(
        Element::new("ul")
            .id("list")
            .child(Element::new("li").id("li-a").child(Element::anchor().id("a").text("A")))
            .child(Element::new("li").id("li-b").child(Element::anchor().id("b").text("B"))),
    )
}

fn mouse_down(column: u16, row: u16) -> CtEvent {
    CtEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(crossterm::event::MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn key(code: KeyCode, kind: KeyEventKind) -> CtEvent {
    CtEvent::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    })
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_layout_stacks_text_lines() {
    let root = nav_tree();
    let layout = layout(&root, Rect::from_size(20, 10));

    assert_eq!(layout.get("a"), Some(&Rect::new(0, 0, 20, 1)));
    assert_eq!(layout.get("b"), Some(&Rect::new(0, 1, 20, 1)));
    assert_eq!(layout.get("list"), Some(&Rect::new(0, 0, 20, 2)));
}

#[test]
fn test_layout_indents_children_of_text() {
    let root = Element::new("section")
        .id("section")
        .text("Heading")
        .child(Element::new("p").id("p").text("body"));
    let layout = layout(&root, Rect::from_size(20, 10));

    assert_eq!(layout.get("section"), Some(&Rect::new(0, 0, 20, 2)));
    assert_eq!(layout.get("p"), Some(&Rect::new(2, 1, 18, 1)));
}

#[test]
fn test_layout_clips_to_available_height() {
    let root = nav_tree();
    let layout = layout(&root, Rect::from_size(20, 1));

    assert_eq!(layout.get("a").map(|r| r.height), Some(1));
    assert!(layout.get("b").is_some_and(|r| r.is_empty()));
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_point_inside() {
    let root = Element::new("div")
        .id("root")
        .clickable(true)
        .child(Element::anchor().id("btn").text("Click me"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("btn", Rect::new(10, 10, 30, 3)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15, 11), Some("btn".to_string()));
    assert_eq!(hit_test(&layout, &root, 5, 5), Some("root".to_string()));
    assert_eq!(hit_test(&layout, &root, 150, 150), None);
}

#[test]
fn test_hit_test_only_clickable() {
    let root = Element::new("div")
        .id("root")
        .child(Element::new("span").id("text").text("Not clickable"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("text", Rect::new(10, 10, 30, 3)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15, 11), None);
    assert_eq!(
        hit_test_any(&layout, &root, 15, 11),
        Some("text".to_string())
    );
}

#[test]
fn test_hit_test_rows_of_laid_out_list() {
    let root = nav_tree();
    let layout = layout(&root, Rect::from_size(20, 10));

    assert_eq!(hit_test(&layout, &root, 0, 0), Some("a".to_string()));
    assert_eq!(hit_test(&layout, &root, 19, 1), Some("b".to_string()));
    assert_eq!(hit_test(&layout, &root, 0, 2), None);
}

// ============================================================================
// Translation
// ============================================================================

#[test]
fn test_translate_click_targets_element() {
    let root = nav_tree();
    let layout = layout(&root, Rect::from_size(20, 10));

    let events = translate(&[mouse_down(3, 1)], &root, &layout);

    assert_eq!(
        events,
        vec![Event::Click {
            target: Some("b".to_string()),
            x: 3,
            y: 1,
            button: MouseButton::Left,
        }]
    );
}

#[test]
fn test_translate_click_outside_has_no_target() {
    let root = nav_tree();
    let layout = layout(&root, Rect::from_size(20, 10));

    let events = translate(&[mouse_down(3, 8)], &root, &layout);

    assert!(matches!(events.as_slice(), [Event::Click { target: None, .. }]));
}

#[test]
fn test_translate_ignores_key_release() {
    let root = nav_tree();
    let layout = layout(&root, Rect::from_size(20, 10));

    let events = translate(
        &[
            key(KeyCode::Down, KeyEventKind::Press),
            key(KeyCode::Down, KeyEventKind::Release),
        ],
        &root,
        &layout,
    );

    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], Event::Key { key: Key::Down, .. }));
}

#[test]
fn test_translate_resize() {
    let root = nav_tree();
    let layout = layout(&root, Rect::from_size(20, 10));

    let events = translate(&[CtEvent::Resize(80, 24)], &root, &layout);

    assert_eq!(
        events,
        vec![Event::Resize {
            width: 80,
            height: 24
        }]
    );
}
