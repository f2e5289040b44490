use std::sync::Arc;

use ratatui::Frame;

use crate::{
    audio::preview::PreviewPlayer,
    config::Config,
    http::{SearchClient, SpotifyClient},
};

use super::{
    controller::Controller,
    layout::AppLayout,
    state::ViewState,
    tui::{self, TerminalEvent},
    util::handler::EventHandler,
};

pub struct App {
    pub controller: Controller,
    pub view: ViewState,
    pub player: PreviewPlayer,
    pub config: Config,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let api: Arc<dyn SearchClient> = Arc::new(SpotifyClient::new(&config.search_endpoint));
        let controller = Controller::new(&config.start_path, api);
        let player = PreviewPlayer::new(controller.event_tx.clone());

        Self {
            controller,
            view: ViewState::default(),
            player,
            config,
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?.tick_rate(self.config.tick_rate);
        tui.enter()?;

        let mut should_render = EventHandler::handle_event(self, TerminalEvent::Init, &mut tui)?;
        while !self.should_quit {
            if should_render {
                self.view.clamp(&self.controller.state);
                tui.draw(|f| {
                    self.ui(f);
                })?;
            }

            let state = &self.controller.state;
            self.player.sync(state.now_playing.as_ref(), state.is_playing);

            should_render = EventHandler::handle_events(self, &mut tui).await?;
        }

        tui.exit()?;
        Ok(())
    }

    fn ui(&self, f: &mut Frame) {
        let area = f.area();
        AppLayout::new(self).render(f, area);
    }
}
