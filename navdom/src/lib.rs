pub mod dom;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod terminal;
pub mod text;

pub use dom::{clear_element, create_element};
pub use element::{find_element, find_element_mut, query_all, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use hit::{hit_test, hit_test_any};
pub use layout::{layout, LayoutResult, Rect};
pub use terminal::Terminal;
