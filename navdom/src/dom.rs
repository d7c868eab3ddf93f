//! The two tree primitives widgets build their output with.
//!
//! Both are total: they never fail and never panic.

use crate::element::Element;

/// Create an element, append it to `parent`, and return it for further wiring.
///
/// Anchors (`a`) are clickable. Attributes are applied in order, so a repeated
/// key keeps its last value.
pub fn create_element<'a>(
    parent: &'a mut Element,
    tag: &str,
    attributes: &[(&str, &str)],
    text: Option<&str>,
) -> &'a mut Element {
    let mut element = if tag == "a" {
        Element::anchor()
    } else {
        Element::new(tag)
    };

    for (key, value) in attributes {
        element.set_attribute(*key, *value);
    }

    if let Some(text) = text {
        element = element.text(text);
    }

    log::trace!("[create_element] {} <{}> under {}", element.id, tag, parent.id);
    parent.push_child(element)
}

/// Remove all children of `container`. Its own attributes and text are kept.
pub fn clear_element(container: &mut Element) {
    log::trace!(
        "[clear_element] {} dropping {} children",
        container.id,
        container.children.len()
    );
    container.children.clear();
}
