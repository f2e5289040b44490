use ratatui::{Frame, layout::Rect, style::Stylize, text::Line, widgets::Paragraph};

use crate::util::colors;

pub fn render(f: &mut Frame, area: Rect, location: &str) {
    let lines = vec![
        Line::from("Nothing lives here".bold().fg(colors::ACCENT)).centered(),
        Line::from(format!("{location} is not a page. Press 1 to go back to search.").fg(colors::NEUTRAL))
            .centered(),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
