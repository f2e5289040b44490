use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::{self, border},
    text::Line,
    widgets::{Block, Borders, Tabs, Widget},
};

use crate::{
    ui::{router::page_to_path, state::Page},
    util::colors,
};

const LINKS: [Page; 3] = [Page::Home, Page::Queue, Page::About];

/// Top strip with links to the three routable pages and the current location.
pub struct NavBar<'a> {
    current: Page,
    location: &'a str,
}

impl<'a> NavBar<'a> {
    pub fn new(current: Page, location: &'a str) -> Self {
        Self { current, location }
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles = LINKS.iter().enumerate().map(|(i, page)| {
            let path = page_to_path(*page).unwrap_or_default();
            Line::from(format!("{} {} {}", i + 1, page.title(), path))
        });

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::Set {
                bottom_left: symbols::line::ROUNDED.vertical_right,
                bottom_right: symbols::line::ROUNDED.vertical_left,
                ..symbols::border::ROUNDED
            })
            .border_style(Style::default().fg(colors::NEUTRAL))
            .title_top(Line::from(" spotui ").centered())
            .title_top(Line::from(format!(" {} ", self.location)).right_aligned());

        Tabs::new(titles)
            .block(block)
            .select(LINKS.iter().position(|p| *p == self.current))
            .style(Style::default().fg(colors::NEUTRAL))
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .render(area, buf);
    }
}
