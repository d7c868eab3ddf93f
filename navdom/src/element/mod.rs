mod node;

pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    root.children.iter().find_map(|child| find_element(child, id))
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    root.children
        .iter_mut()
        .find_map(|child| find_element_mut(child, id))
}

/// Collect every descendant of `root` with the given tag, in document order.
/// The root itself is not included.
pub fn query_all<'a>(root: &'a Element, tag: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_by_tag(root, tag, &mut found);
    found
}

fn collect_by_tag<'a>(element: &'a Element, tag: &str, found: &mut Vec<&'a Element>) {
    for child in &element.children {
        if child.tag == tag {
            found.push(child);
        }
        collect_by_tag(child, tag, found);
    }
}
