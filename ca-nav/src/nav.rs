//! The navigation widget and its host-facing property surface.

use std::collections::HashMap;
use std::fmt;

use navdom::{Element, Event, MouseButton, create_element, query_all};
use serde_json::Value;

use crate::event::{NavCommand, NavCommands, NavigateEvent, NavigateListener};
use crate::link::{LinkDescriptor, links_from_json};
use crate::render::ListRenderer;
use crate::row::{Row, RowId};
use crate::selection::SelectionController;

/// Tag of the widget's host element.
pub const TAG: &str = "ca-nav";

/// A selectable navigation list.
///
/// The rendered tree is `ca-nav > nav > ul > li > a`. Every operation runs to
/// completion on the calling thread; listeners registered with
/// [`Nav::on_navigate`] are called synchronously from inside the activation.
pub struct Nav {
    root: Element,
    links: Vec<LinkDescriptor>,
    rows: Vec<Row>,
    rows_by_element: HashMap<String, usize>,
    renderer: ListRenderer,
    selection: SelectionController,
    auto_click_index: Option<i64>,
    listeners: Vec<NavigateListener>,
    notifications: Vec<NavigateEvent>,
}

impl Default for Nav {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Nav {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nav")
            .field("links", &self.links)
            .field("rows", &self.rows)
            .field("selected", &self.selection.selected())
            .field("auto_click_index", &self.auto_click_index)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Nav {
    /// Create the widget with an empty `nav > ul` template.
    pub fn new() -> Self {
        let mut root = Element::new(TAG);
        let nav = create_element(&mut root, "nav", &[], None);
        create_element(nav, "ul", &[], None);

        Self {
            root,
            links: Vec::new(),
            rows: Vec::new(),
            rows_by_element: HashMap::new(),
            renderer: ListRenderer::new(),
            selection: SelectionController::new(),
            auto_click_index: None,
            listeners: Vec::new(),
            notifications: Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    /// The last assigned link list (empty if never set).
    pub fn links(&self) -> &[LinkDescriptor] {
        &self.links
    }

    /// Replace the link list and re-render. The selection does not survive.
    pub fn set_links(&mut self, links: Vec<LinkDescriptor>) {
        self.links = links;
        self.render();
    }

    /// Replace the link list from host JSON. A non-array value is an empty list.
    pub fn set_links_json(&mut self, value: &Value) {
        self.set_links(links_from_json(value));
    }

    /// The selected row, if the selection names a row of the current render.
    pub fn selected(&self) -> Option<&Row> {
        let id = self.selection.selected()?;
        self.rows.iter().find(|row| row.id == id)
    }

    /// The raw selection, which may be stale if set through [`Nav::set_selected`].
    pub fn selected_id(&self) -> Option<RowId> {
        self.selection.selected()
    }

    /// Overwrite the selection directly.
    ///
    /// No row is unmarked or marked and no notification is raised.
    pub fn set_selected(&mut self, id: Option<RowId>) {
        self.selection.set_selected(id);
    }

    /// The last value assigned to `autoClickIndex`, or -1.
    pub fn auto_click_index(&self) -> i64 {
        self.auto_click_index.unwrap_or(-1)
    }

    /// Store the index and, if it names a rendered anchor, click it.
    ///
    /// Negative and out-of-range indices are stored and otherwise ignored.
    pub fn set_auto_click_index(&mut self, index: i64) {
        self.auto_click_index = Some(index);

        let Ok(position) = usize::try_from(index) else {
            return;
        };

        let anchor_id = query_all(self.container(), "a")
            .get(position)
            .map(|anchor| anchor.id.clone());

        match anchor_id {
            Some(id) => {
                self.click(&id);
            }
            None => log::debug!("[Nav::set_auto_click_index] no anchor at {index}"),
        }
    }

    // -------------------------------------------------------------------------
    // Activation
    // -------------------------------------------------------------------------

    /// Activate the row drawn as `element_id`, as a user click does.
    /// Returns false if the element is not a row anchor.
    pub fn click(&mut self, element_id: &str) -> bool {
        match self.rows_by_element.get(element_id) {
            Some(&index) => self.activate_index(index),
            None => {
                log::debug!("[Nav::click] {element_id} is not a row");
                false
            }
        }
    }

    /// Activate the row at `index` in display order.
    pub fn activate_index(&mut self, index: usize) -> bool {
        match self.rows.get(index).map(|row| row.id) {
            Some(id) => self.activate(id),
            None => false,
        }
    }

    /// The single activation path: deselect, select, notify.
    ///
    /// Returns false if `id` is not a row of the current render.
    pub fn activate(&mut self, id: RowId) -> bool {
        let container = container_of(&mut self.root);
        let Some(event) = self.selection.activate(&mut self.rows, container, id) else {
            return false;
        };
        self.notify(event);
        true
    }

    /// Route a substrate event into the widget. Only left clicks on row
    /// anchors are handled.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Click {
                target: Some(target),
                button: MouseButton::Left,
                ..
            } => self.click(target),
            _ => false,
        }
    }

    // -------------------------------------------------------------------------
    // Notifications
    // -------------------------------------------------------------------------

    /// Register a navigate listener.
    pub fn on_navigate(
        &mut self,
        listener: impl FnMut(&NavigateEvent, &mut NavCommands) + 'static,
    ) {
        self.listeners.push(Box::new(listener));
    }

    /// Drain the notifications raised while no listener was registered,
    /// oldest first. Once a listener is registered, notifications go to
    /// listeners only and nothing is buffered.
    pub fn take_notifications(&mut self) -> Vec<NavigateEvent> {
        std::mem::take(&mut self.notifications)
    }

    fn notify(&mut self, event: NavigateEvent) {
        if self.listeners.is_empty() {
            self.notifications.push(event);
            return;
        }

        let mut commands = NavCommands::new();
        let mut listeners = std::mem::take(&mut self.listeners);
        for listener in &mut listeners {
            listener(&event, &mut commands);
        }
        self.listeners = listeners;

        for command in commands.into_inner() {
            self.apply(command);
        }
    }

    fn apply(&mut self, command: NavCommand) {
        log::debug!("[Nav::apply] {command:?}");
        match command {
            NavCommand::Activate(index) => {
                self.activate_index(index);
            }
            NavCommand::SetLinks(links) => self.set_links(links),
            NavCommand::SetAutoClickIndex(index) => self.set_auto_click_index(index),
        }
    }

    // -------------------------------------------------------------------------
    // Render output
    // -------------------------------------------------------------------------

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The widget's element tree, rooted at the `ca-nav` host element.
    pub fn element(&self) -> &Element {
        &self.root
    }

    fn container(&self) -> &Element {
        &self.root.children[0].children[0]
    }

    fn render(&mut self) {
        self.selection.clear();
        self.rows = self
            .renderer
            .render(container_of(&mut self.root), &self.links);
        self.rows_by_element = self
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| (row.element_id.clone(), index))
            .collect();
    }
}

/// The `ul` that rows are rendered into. The template is built in
/// [`Nav::new`] and never changes shape.
fn container_of(root: &mut Element) -> &mut Element {
    &mut root.children[0].children[0]
}
