use ratatui::{
    Frame,
    layout::Rect,
    style::Stylize,
    text::{Line, Text},
    widgets::{Paragraph, Wrap},
};

use crate::util::colors;

const KEYS: [(&str, &str); 10] = [
    ("1 2 3", "go to Search, Queue, About"),
    ("[ ]", "back, forward"),
    (":", "go to a path"),
    ("/", "edit the search box"),
    ("Enter", "search, play the highlighted track"),
    ("a", "add the highlighted result to the queue"),
    ("j k", "move down, up"),
    ("space", "pause or resume"),
    ("q", "quit"),
    ("Ctrl-C", "quit from anywhere"),
];

pub fn render(f: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from("spotui".bold().fg(colors::PRIMARY)),
        Line::from("Search the catalog, preview tracks and line them up in a queue."),
        Line::default(),
    ];
    lines.extend(KEYS.iter().map(|(key, what)| {
        Line::from(vec![
            format!("{key:>8}  ").fg(colors::SECONDARY),
            (*what).fg(colors::NEUTRAL),
        ])
    }));

    f.render_widget(
        Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false }),
        area,
    );
}
