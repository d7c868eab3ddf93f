use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal,
};

use crate::element::Element;
use crate::layout::{layout, LayoutResult, Rect};
use crate::text::fit_to_width;

/// Attribute that marks an element for highlighted drawing.
pub const DEFAULT_HIGHLIGHT_ATTRIBUTE: &str = "data-selected";

pub struct Terminal {
    stdout: io::Stdout,
    highlight_attribute: String,
    last_layout: LayoutResult,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self {
            stdout,
            highlight_attribute: DEFAULT_HIGHLIGHT_ATTRIBUTE.to_string(),
            last_layout: LayoutResult::new(),
        })
    }

    /// Draw elements carrying `attribute` in reverse video.
    pub fn with_highlight_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.highlight_attribute = attribute.into();
        self
    }

    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                // Block until event
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Lay out and draw the whole tree, replacing what was on screen.
    pub fn render(&mut self, root: &Element) -> io::Result<&LayoutResult> {
        let (width, height) = terminal::size()?;
        self.last_layout = layout(root, Rect::from_size(width, height));

        queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            terminal::Clear(terminal::ClearType::All)
        )?;
        self.draw_element(root)?;
        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;

        Ok(&self.last_layout)
    }

    /// Get the layout from the last render.
    pub fn layout(&self) -> &LayoutResult {
        &self.last_layout
    }

    fn draw_element(&mut self, element: &Element) -> io::Result<()> {
        let Some(rect) = self.last_layout.get(&element.id).copied() else {
            return Ok(());
        };
        if rect.is_empty() {
            return Ok(());
        }

        if let Some(text) = &element.text {
            let line = rect.first_line();
            let (shown, shown_width) = fit_to_width(text, line.width as usize);
            let highlighted = element.has_attribute(&self.highlight_attribute);

            queue!(self.stdout, cursor::MoveTo(line.x, line.y))?;
            if highlighted {
                queue!(self.stdout, SetAttribute(Attribute::Reverse))?;
            }
            // Pad highlighted rows so the whole line reads as selected.
            let pad = if highlighted {
                (line.width as usize).saturating_sub(shown_width)
            } else {
                0
            };
            queue!(self.stdout, Print(shown), Print(" ".repeat(pad)))?;
            if highlighted {
                queue!(self.stdout, SetAttribute(Attribute::NoReverse))?;
            }
        }

        for child in &element.children {
            self.draw_element(child)?;
        }
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
