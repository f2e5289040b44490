use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Paragraph},
};

use crate::{
    ui::{
        components::track_list::TrackList,
        state::{AppState, ViewState},
    },
    util::colors,
};

pub fn render(f: &mut Frame, area: Rect, state: &AppState, view: &ViewState) {
    if state.queue.is_empty() {
        f.render_widget(
            Paragraph::new(Line::from("The queue is empty".fg(colors::NEUTRAL)).centered()),
            area,
        );
        return;
    }

    TrackList::new(&state.queue, state.now_playing.as_ref(), state.is_playing)
        .block(
            Block::default()
                .title(format!(" Up next ({}) ", state.queue.len()))
                .title_style(Style::default().fg(colors::NEUTRAL)),
        )
        .render(area, f.buffer_mut(), view.queue_cursor);
}
