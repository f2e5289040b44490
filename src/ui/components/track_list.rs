use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, StatefulWidget},
};

use crate::{http::model::Track, ui::util::get_active_track_icon, util::colors};

/// A selectable list of tracks that marks the one currently playing.
pub struct TrackList<'a> {
    tracks: &'a [Track],
    now_playing: Option<&'a Track>,
    is_playing: bool,
    block: Option<Block<'a>>,
    highlight: bool,
}

impl<'a> TrackList<'a> {
    pub fn new(tracks: &'a [Track], now_playing: Option<&'a Track>, is_playing: bool) -> Self {
        Self {
            tracks,
            now_playing,
            is_playing,
            block: None,
            highlight: true,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn render(self, area: Rect, buf: &mut Buffer, cursor: usize) {
        let current_id = self.now_playing.map(|t| t.id.as_str());

        let items: Vec<ListItem> = self
            .tracks
            .iter()
            .enumerate()
            .map(|(i, track)| {
                let is_current = current_id == Some(track.id.as_str());
                let prefix = if is_current {
                    format!("{} ", get_active_track_icon(self.is_playing))
                } else {
                    "  ".to_string()
                };

                let line = Line::from(vec![
                    Span::raw(prefix),
                    Span::styled(format!("{:>3}. ", i + 1), Style::default().fg(colors::NEUTRAL)),
                    Span::raw(track.name.clone()),
                ]);

                let item = ListItem::new(line);
                if is_current {
                    item.style(
                        Style::default()
                            .fg(colors::SECONDARY)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    item
                }
            })
            .collect();

        let mut list = List::new(items);
        if let Some(block) = self.block {
            list = list.block(block);
        }
        if self.highlight {
            list = list
                .highlight_style(
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");
        }

        let mut state = ListState::default().with_selected(Some(cursor));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
