use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    ui::{
        components::{spinner::Spinner, track_list::TrackList},
        state::{AppState, Focus, ViewState},
    },
    util::colors,
};

pub fn render(f: &mut Frame, area: Rect, state: &AppState, view: &ViewState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let editing = view.focus == Focus::SearchBox;
    let input_style = if editing {
        Style::default().fg(colors::PRIMARY)
    } else {
        Style::default().fg(colors::NEUTRAL)
    };

    let input = Paragraph::new(format!("{}{}", view.draft, if editing { "▏" } else { "" })).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Search")
            .border_style(input_style),
    );
    f.render_widget(input, chunks[0]);

    let results_area = chunks[1];

    if state.is_searching && state.search_results.is_empty() {
        let spinner = Spinner::new()
            .with_style(Style::default().fg(colors::PRIMARY))
            .with_label(format!("Searching for \"{}\"...", state.current_search_query));
        f.render_widget(spinner, results_area);
        return;
    }

    if state.search_results.is_empty() {
        let hint = if state.current_search_query.is_empty() {
            "Type a query and press Enter"
        } else {
            "No tracks found"
        };
        f.render_widget(
            Paragraph::new(Line::from(hint.fg(colors::NEUTRAL)).centered()),
            results_area,
        );
        return;
    }

    let mut title = format!(" Results for \"{}\" ", state.current_search_query);
    if state.is_searching {
        title.push_str("(updating) ");
    }

    TrackList::new(
        &state.search_results,
        state.now_playing.as_ref(),
        state.is_playing,
    )
    .block(Block::default().title(title).title_style(Style::default().fg(colors::NEUTRAL)))
    .highlight(!editing)
    .render(results_area, f.buffer_mut(), view.results_cursor);
}
