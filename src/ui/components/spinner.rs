use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use unicode_width::UnicodeWidthStr;

use crate::ui::util::spinner_symbol;

#[derive(Default)]
pub struct Spinner {
    style: Style,
    label: Option<String>,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Widget for Spinner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let symbol = spinner_symbol();
        let text = match self.label {
            Some(label) => format!("{symbol} {label}"),
            None => symbol.to_string(),
        };

        let width = text.width() as u16;
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height / 2;
        buf.set_string(x, y, text, self.style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_centred_on_the_middle_row() {
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        Spinner::default().with_label("Searching").render(area, &mut buf);

        let middle: String = (0..area.width)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect();
        // "⠋ Searching" is 11 cells wide: (30 - 11) / 2 = 9.
        assert!(middle.starts_with(&" ".repeat(9)));
        assert_ne!(middle.chars().nth(9), Some(' '));
        assert!(middle.trim_end().ends_with(" Searching"));
    }
}
