use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    symbols::{self, border},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
    ui::{
        app::App,
        components::{nav::NavBar, player::PlayerWidget},
        views,
    },
    util::colors,
};

pub struct AppLayout<'a> {
    pub app: &'a App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(3),
            ])
            .split(area);

        let nav_area = chunks[0];
        let content_area = chunks[1];
        let player_area = chunks[2];

        let state = &self.app.controller.state;
        let location = self.app.controller.history.current();

        f.render_widget(NavBar::new(state.current_page, location), nav_area);

        let content_block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_set(symbols::border::ROUNDED)
            .border_style(Style::default().fg(colors::NEUTRAL));
        let content_inner = content_block.inner(content_area);
        f.render_widget(content_block, content_area);

        views::render_page(f, content_inner, state, &self.app.view, location);

        f.render_widget(
            PlayerWidget::new(state.now_playing.as_ref(), state.is_playing)
                .loading(self.app.player.is_loading())
                .audio_enabled(self.app.player.is_enabled()),
            player_area,
        );

        if let Some(prompt) = &self.app.view.prompt {
            render_prompt(f, content_inner, prompt);
        }
    }
}

fn render_prompt(f: &mut Frame, area: Rect, prompt: &str) {
    if area.height < 3 {
        return;
    }

    let prompt_area = Rect {
        y: area.y + area.height - 3,
        height: 3,
        ..area
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(colors::PRIMARY))
        .title(" Go to ");

    f.render_widget(Clear, prompt_area);
    f.render_widget(
        Paragraph::new(Line::from(vec![prompt.to_string().into(), "▏".fg(colors::PRIMARY)]))
            .block(block),
        prompt_area,
    );
}
