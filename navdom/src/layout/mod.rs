mod rect;

use std::collections::HashMap;

pub use rect::Rect;

use crate::element::Element;

pub type LayoutResult = HashMap<String, Rect>;

/// Columns each nesting level is indented by.
pub const INDENT: u16 = 2;

/// Lay the tree out as stacked lines.
///
/// An element's own text takes one line, then its children follow below it,
/// indented by [`INDENT`] when the element itself drew a line. Each element's
/// rect covers all of its lines across the full indented width, so a click
/// anywhere on a row hits it. Elements pushed past the bottom of `available`
/// get an empty rect.
pub fn layout(root: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(root, available, available.y, &mut result);
    result
}

/// Returns the y coordinate just below the element.
fn layout_element(
    element: &Element,
    available: Rect,
    top: u16,
    result: &mut LayoutResult,
) -> u16 {
    let mut y = top;
    let mut child_area = available;

    if element.text.is_some() {
        y = y.saturating_add(1);
        child_area = available.indent(INDENT);
    }

    for child in &element.children {
        y = layout_element(child, child_area, y, result);
    }

    result.insert(element.id.clone(), available.rows(top, y));
    y
}
