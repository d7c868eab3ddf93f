use std::ops::Range;

/// Screen region of a laid-out element: `height` stacked lines starting at
/// row `y`, each `width` columns wide from column `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The whole screen.
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Row just past the last line.
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn lines(&self) -> Range<u16> {
        self.y..self.bottom()
    }

    pub fn columns(&self) -> Range<u16> {
        self.x..self.x.saturating_add(self.width)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.columns().contains(&x) && self.lines().contains(&y)
    }

    /// Same lines, shifted right by `columns` and narrowed to match.
    pub fn indent(self, columns: u16) -> Self {
        let columns = columns.min(self.width);
        Self {
            x: self.x + columns,
            width: self.width - columns,
            ..self
        }
    }

    /// Lines `top..bottom` across this region's columns, clipped so nothing
    /// extends past this region's last line.
    pub fn rows(self, top: u16, bottom: u16) -> Self {
        let bottom = bottom.min(self.bottom());
        let top = top.min(bottom);
        Self::new(self.x, top, self.width, bottom - top)
    }

    pub fn first_line(self) -> Self {
        Self {
            height: self.height.min(1),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_keeps_right_edge() {
        let rect = Rect::new(2, 3, 10, 4).indent(2);
        assert_eq!(rect, Rect::new(4, 3, 8, 4));
        assert_eq!(rect.columns().end, 12);
    }

    #[test]
    fn indent_past_width_is_empty() {
        assert!(Rect::new(0, 0, 1, 4).indent(2).is_empty());
    }

    #[test]
    fn rows_clip_to_bottom() {
        let screen = Rect::from_size(20, 3);
        assert_eq!(screen.rows(1, 2), Rect::new(0, 1, 20, 1));
        assert_eq!(screen.rows(2, 5), Rect::new(0, 2, 20, 1));
        assert!(screen.rows(4, 6).is_empty());
    }

    #[test]
    fn contains_is_half_open() {
        let rect = Rect::new(0, 1, 20, 2);
        assert!(rect.contains(0, 1));
        assert!(rect.contains(19, 2));
        assert!(!rect.contains(20, 1));
        assert!(!rect.contains(0, 3));
        assert!(!rect.contains(0, 0));
    }

    #[test]
    fn first_line_of_block() {
        assert_eq!(Rect::new(0, 5, 9, 3).first_line(), Rect::new(0, 5, 9, 1));
        assert!(Rect::new(0, 5, 9, 0).first_line().is_empty());
    }
}
