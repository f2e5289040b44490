use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    symbols::{self, border},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::{http::model::Track, ui::util::get_active_track_icon, util::colors};

/// Bottom strip showing the current track and whether it plays.
pub struct PlayerWidget<'a> {
    now_playing: Option<&'a Track>,
    is_playing: bool,
    is_loading: bool,
    audio_enabled: bool,
}

impl<'a> PlayerWidget<'a> {
    pub fn new(now_playing: Option<&'a Track>, is_playing: bool) -> Self {
        Self {
            now_playing,
            is_playing,
            is_loading: false,
            audio_enabled: true,
        }
    }

    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    pub fn audio_enabled(mut self, enabled: bool) -> Self {
        self.audio_enabled = enabled;
        self
    }
}

impl Widget for PlayerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::Set {
                top_left: symbols::line::ROUNDED.vertical_right,
                top_right: symbols::line::ROUNDED.vertical_left,
                ..symbols::border::ROUNDED
            })
            .border_style(Style::default().fg(colors::NEUTRAL));

        let mut line = match self.now_playing {
            Some(track) => {
                let (icon, status) = match (self.is_playing, self.is_loading) {
                    (true, true) => ("⠶", "Loading"),
                    (true, false) => ("▶", "Playing"),
                    (false, _) => ("⏸", "Paused"),
                };
                Line::from(vec![
                    Span::styled(format!(" {icon} "), Style::default().fg(colors::PRIMARY)),
                    Span::styled(format!("{status}: "), Style::default().fg(colors::NEUTRAL)),
                    Span::styled(
                        format!("{} {}", get_active_track_icon(self.is_playing), track.name),
                        Style::default()
                            .fg(colors::SECONDARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            }
            None => Line::from(" Nothing playing".fg(colors::NEUTRAL)),
        };

        if !self.audio_enabled {
            line.push_span("  (no audio device)".fg(colors::ACCENT));
        }

        Paragraph::new(line)
            .alignment(Alignment::Left)
            .block(block)
            .render(area, buf);
    }
}
