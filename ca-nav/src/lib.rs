//! Selectable navigation list widget.
//!
//! A [`Nav`] takes an ordered list of [`LinkDescriptor`]s, renders one row per
//! link into a `navdom` element tree, tracks which row is selected and raises
//! a [`NavigateEvent`] each time a row is activated, whether by a click or by
//! the host asking for a row index.

pub mod date;
pub mod error;
pub mod event;
pub mod link;
pub mod nav;
pub mod render;
pub mod row;
pub mod selection;

pub use date::{parse_iso_local_date, parse_iso_local_date_in};
pub use error::DateError;
pub use event::{NavAction, NavCommand, NavCommands, NavigateEvent};
pub use link::{LinkDescriptor, links_from_json, sanitize_rel};
pub use nav::Nav;
pub use render::ListRenderer;
pub use row::{Row, RowId};
pub use selection::SelectionController;
