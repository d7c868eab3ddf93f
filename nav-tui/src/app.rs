//! Terminal host: draws the widget and routes input into it.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use ca_nav::selection::DATA_SELECTED;
use ca_nav::{Nav, NavigateEvent};
use navdom::event::translate;
use navdom::{Element, Event, Key, Terminal};

use crate::config::NavConfig;

/// Owns the widget and the last notification it raised.
pub struct App {
    nav: Nav,
    last: Rc<RefCell<Option<NavigateEvent>>>,
}

enum Flow {
    Continue,
    Quit,
}

impl App {
    pub fn new(config: NavConfig) -> Self {
        let mut nav = Nav::new();
        let last = Rc::new(RefCell::new(None));

        let sink = Rc::clone(&last);
        nav.on_navigate(move |event, _| {
            // Following the link is the host's job; here it is only logged.
            log::info!("navigate: {} {} (rel {:?})", event.action, event.target, event.relation);
            *sink.borrow_mut() = Some(event.clone());
        });

        nav.set_links(config.links);
        nav.set_auto_click_index(config.auto_click_index);

        Self { nav, last }
    }

    pub fn run(&mut self) -> io::Result<()> {
        let mut term = Terminal::new()?.with_highlight_attribute(DATA_SELECTED);

        loop {
            let screen = self.screen();
            term.render(&screen)?;

            let raw = term.poll(Some(Duration::from_millis(250)))?;
            for event in translate(&raw, &screen, term.layout()) {
                if let Flow::Quit = self.handle(&event) {
                    return Ok(());
                }
            }
        }
    }

    fn handle(&mut self, event: &Event) -> Flow {
        match event {
            Event::Key { key, modifiers } => match key {
                Key::Char('q') | Key::Escape => return Flow::Quit,
                Key::Char('c') if modifiers.ctrl => return Flow::Quit,
                Key::Down | Key::Char('j') => self.step(1),
                Key::Up | Key::Char('k') => self.step(-1),
                Key::Home => {
                    self.nav.activate_index(0);
                }
                Key::End => {
                    if let Some(last) = self.nav.rows().len().checked_sub(1) {
                        self.nav.activate_index(last);
                    }
                }
                Key::Enter => {
                    if let Some(index) = self.nav.selected().map(|row| row.index()) {
                        self.nav.activate_index(index);
                    }
                }
                _ => {}
            },
            Event::Click { .. } => {
                self.nav.handle_event(event);
            }
            Event::Resize { .. } => {}
        }
        Flow::Continue
    }

    /// Move the selection by `delta` rows, wrapping around.
    fn step(&mut self, delta: isize) {
        let len = self.nav.rows().len();
        if len == 0 {
            return;
        }
        let next = match self.nav.selected().map(|row| row.index()) {
            Some(current) => (current as isize + delta).rem_euclid(len as isize) as usize,
            None if delta < 0 => len - 1,
            None => 0,
        };
        self.nav.activate_index(next);
    }

    fn screen(&self) -> Element {
        let status = match self.last.borrow().as_ref() {
            Some(event) => format!(
                "{} {}  rel: {:?}",
                event.action, event.target, event.relation
            ),
            None => "nothing selected".to_string(),
        };

        Element::new("main")
            .id("screen")
            .child(Element::new("h1").id("title").text("Navigation"))
            .child(self.nav.element().clone())
            .child(Element::new("p").id("status").text(status))
            .child(
                Element::new("p")
                    .id("help")
                    .text("click or j/k to select, enter to open again, q to quit"),
            )
    }
}

#[cfg(test)]
mod tests {
    use ca_nav::LinkDescriptor;
    use navdom::Modifiers;

    use super::*;

    fn app(auto_click_index: i64) -> App {
        App::new(NavConfig {
            links: vec![
                LinkDescriptor::new("/a", "A"),
                LinkDescriptor::new("/b", "B").rel("describedby:item"),
                LinkDescriptor::new("/c", "C"),
            ],
            auto_click_index,
        })
    }

    fn press(app: &mut App, key: Key) -> Flow {
        app.handle(&Event::Key {
            key,
            modifiers: Modifiers::new(),
        })
    }

    fn selected(app: &App) -> Option<usize> {
        app.nav.selected().map(|row| row.index())
    }

    fn last_target(app: &App) -> Option<String> {
        app.last.borrow().as_ref().map(|event| event.target.clone())
    }

    #[test]
    fn auto_click_from_config_selects_row() {
        let app = app(1);
        assert_eq!(selected(&app), Some(1));
        assert_eq!(last_target(&app).as_deref(), Some("/b"));
        let relation = app.last.borrow().as_ref().map(|e| e.relation.clone());
        assert_eq!(relation.as_deref(), Some("item"));
    }

    #[test]
    fn down_from_nothing_selects_first() {
        let mut app = app(-1);
        assert_eq!(selected(&app), None);

        press(&mut app, Key::Down);
        assert_eq!(selected(&app), Some(0));
    }

    #[test]
    fn up_from_nothing_selects_last() {
        let mut app = app(-1);
        press(&mut app, Key::Char('k'));
        assert_eq!(selected(&app), Some(2));
    }

    #[test]
    fn stepping_wraps_both_ways() {
        let mut app = app(2);

        press(&mut app, Key::Char('j'));
        assert_eq!(selected(&app), Some(0));

        press(&mut app, Key::Up);
        assert_eq!(selected(&app), Some(2));
        assert_eq!(last_target(&app).as_deref(), Some("/c"));
    }

    #[test]
    fn home_and_end_jump() {
        let mut app = app(1);

        press(&mut app, Key::End);
        assert_eq!(selected(&app), Some(2));

        press(&mut app, Key::Home);
        assert_eq!(selected(&app), Some(0));
        assert_eq!(last_target(&app).as_deref(), Some("/a"));
    }

    #[test]
    fn enter_reactivates_selected_row() {
        let mut app = app(1);
        *app.last.borrow_mut() = None;

        press(&mut app, Key::Enter);

        assert_eq!(selected(&app), Some(1));
        assert_eq!(last_target(&app).as_deref(), Some("/b"));
    }

    #[test]
    fn enter_with_nothing_selected_does_nothing() {
        let mut app = app(-1);
        press(&mut app, Key::Enter);
        assert_eq!(selected(&app), None);
        assert_eq!(last_target(&app), None);
    }

    #[test]
    fn empty_list_ignores_navigation_keys() {
        let mut app = App::new(NavConfig {
            links: Vec::new(),
            auto_click_index: 0,
        });
        for key in [Key::Down, Key::Up, Key::Home, Key::End, Key::Enter] {
            press(&mut app, key);
        }
        assert_eq!(selected(&app), None);
    }

    #[test]
    fn quit_keys() {
        let mut app = app(0);
        assert!(matches!(press(&mut app, Key::Char('q')), Flow::Quit));
        assert!(matches!(press(&mut app, Key::Escape), Flow::Quit));
        assert!(matches!(press(&mut app, Key::Char('c')), Flow::Continue));
        let ctrl_c = Event::Key {
            key: Key::Char('c'),
            modifiers: Modifiers::ctrl(),
        };
        assert!(matches!(app.handle(&ctrl_c), Flow::Quit));
    }

    #[test]
    fn click_on_row_selects_it() {
        let mut app = app(-1);
        let target = app.nav.rows()[2].element_id.clone();

        app.handle(&Event::Click {
            target: Some(target),
            x: 0,
            y: 3,
            button: navdom::MouseButton::Left,
        });

        assert_eq!(selected(&app), Some(2));
    }
}
