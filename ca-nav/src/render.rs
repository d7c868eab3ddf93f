//! Materializes a link list into rows.

use navdom::{Element, clear_element, create_element};

use crate::link::{LinkDescriptor, sanitize_rel};
use crate::row::{Row, RowId};

/// Action token written on every anchor, read by hosts that route on markup.
pub const DATA_ACTION: &str = "loadCRUD";

/// Builds `li > a` rows into a container, replacing whatever was there.
///
/// The renderer only remembers a generation counter, which stamps every
/// [`RowId`] it hands out.
#[derive(Debug, Default)]
pub struct ListRenderer {
    generation: u64,
}

impl ListRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation of the most recent render (0 before the first).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Clear `container` and render one row per link, in order.
    pub fn render(&mut self, container: &mut Element, links: &[LinkDescriptor]) -> Vec<Row> {
        clear_element(container);
        self.generation += 1;

        let rows: Vec<Row> = links
            .iter()
            .enumerate()
            .map(|(index, link)| self.render_row(container, index, link))
            .collect();

        log::debug!(
            "[ListRenderer::render] generation={} rows={}",
            self.generation,
            rows.len()
        );
        rows
    }

    fn render_row(&self, container: &mut Element, index: usize, link: &LinkDescriptor) -> Row {
        let relation = sanitize_rel(&link.rel);

        let item = create_element(container, "li", &[], None);
        let anchor = create_element(
            item,
            "a",
            &[
                ("href", link.href.as_str()),
                ("data-action", DATA_ACTION),
                ("data-rel", relation.as_str()),
                ("data-href", link.href.as_str()),
            ],
            Some(link.title.as_str()),
        );

        Row {
            id: RowId::new(self.generation, index),
            text: link.title.clone(),
            href: link.href.clone(),
            relation,
            selected: false,
            element_id: anchor.id.clone(),
        }
    }
}
