//! Link descriptors, the widget's input.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Carrier prefix for hypermedia relation annotations. Never shown in output.
pub const DESCRIBED_BY: &str = "describedby:";

/// One navigable destination.
///
/// Missing fields are empty strings; nothing is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkDescriptor {
    pub href: String,
    pub title: String,
    pub rel: String,
}

impl LinkDescriptor {
    pub fn new(href: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            title: title.into(),
            rel: String::new(),
        }
    }

    pub fn rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = rel.into();
        self
    }

    /// Decode one descriptor leniently: any field that is absent or not a
    /// string becomes empty, and a non-object item becomes an empty descriptor.
    pub fn from_json(item: &Value) -> Self {
        let field = |name: &str| {
            item.get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        Self {
            href: field("href"),
            title: field("title"),
            rel: field("rel"),
        }
    }
}

/// Remove every occurrence of the `describedby:` carrier from a relation tag.
pub fn sanitize_rel(rel: &str) -> String {
    rel.replace(DESCRIBED_BY, "")
}

/// Turn host-supplied JSON into a link list.
///
/// Anything that is not an array (`null` included) is an empty list.
pub fn links_from_json(value: &Value) -> Vec<LinkDescriptor> {
    match value {
        Value::Array(items) => items.iter().map(LinkDescriptor::from_json).collect(),
        other => {
            log::debug!("[links_from_json] not an array ({other}), using empty list");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn removes_every_carrier_occurrence() {
        assert_eq!(
            sanitize_rel("describedby:profile describedby:policy"),
            "profile policy"
        );
    }

    #[test]
    fn carrier_in_the_middle_is_removed() {
        assert_eq!(sanitize_rel("item describedby:x"), "item x");
        assert_eq!(sanitize_rel("describedby:describedby:"), "");
    }

    #[test]
    fn plain_rel_is_untouched() {
        assert_eq!(sanitize_rel("collection"), "collection");
        assert_eq!(sanitize_rel(""), "");
    }

    #[test]
    fn null_and_objects_are_empty_lists() {
        assert!(links_from_json(&Value::Null).is_empty());
        assert!(links_from_json(&json!({"href": "/a"})).is_empty());
        assert!(links_from_json(&json!("nope")).is_empty());
    }

    #[test]
    fn malformed_items_are_kept_as_empty_fields() {
        let links = links_from_json(&json!([
            {"href": "/a", "title": "A"},
            42,
            {"href": 7, "title": "Seven"},
        ]));

        assert_eq!(links.len(), 3);
        assert_eq!(links[0], LinkDescriptor::new("/a", "A"));
        assert_eq!(links[1], LinkDescriptor::default());
        assert_eq!(links[2], LinkDescriptor::new("", "Seven"));
    }

    #[test]
    fn serde_defaults_missing_fields() {
        let link: LinkDescriptor = serde_json::from_value(json!({"title": "T"})).unwrap();
        assert_eq!(link, LinkDescriptor::new("", "T"));
    }
}
