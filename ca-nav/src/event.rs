//! The outbound navigate notification and the commands a listener may queue.

use std::fmt;

use serde::Serialize;

use crate::link::LinkDescriptor;

/// What the host is asked to do with the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavAction {
    Load,
}

impl fmt::Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load => write!(f, "load"),
        }
    }
}

/// Raised exactly once per activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigateEvent {
    pub action: NavAction,
    /// Sanitized relation of the activated row.
    pub relation: String,
    /// Href of the activated row.
    pub target: String,
}

impl NavigateEvent {
    pub fn load(relation: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            action: NavAction::Load,
            relation: relation.into(),
            target: target.into(),
        }
    }
}

/// A widget operation queued from inside a navigate listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCommand {
    /// Activate the row at this index, like a click on it.
    Activate(usize),
    /// Replace the link list.
    SetLinks(Vec<LinkDescriptor>),
    /// Assign `autoClickIndex`.
    SetAutoClickIndex(i64),
}

/// Commands collected from listeners during one notification.
///
/// Listeners cannot borrow the widget while it is notifying them, so they
/// queue work here instead. The widget runs the queue, in order, as soon as
/// every listener has returned and before the triggering call returns.
#[derive(Debug, Default)]
pub struct NavCommands {
    queue: Vec<NavCommand>,
}

impl NavCommands {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn activate(&mut self, index: usize) {
        self.queue.push(NavCommand::Activate(index));
    }

    pub fn set_links(&mut self, links: Vec<LinkDescriptor>) {
        self.queue.push(NavCommand::SetLinks(links));
    }

    pub fn set_auto_click_index(&mut self, index: i64) {
        self.queue.push(NavCommand::SetAutoClickIndex(index));
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub(crate) fn into_inner(self) -> Vec<NavCommand> {
        self.queue
    }
}

/// Receives every navigate notification.
pub type NavigateListener = Box<dyn FnMut(&NavigateEvent, &mut NavCommands)>;
