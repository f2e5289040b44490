use ratatui::crossterm::event::{KeyEvent, KeyEventKind};
use tracing::info;

use crate::ui::{
    app::App,
    input::{Command, InputHandler},
    tui::{TerminalEvent, Tui},
};

pub struct EventHandler;

impl EventHandler {
    /// Waits for the next terminal event, then runs everything the
    /// application channel has collected in the meantime.
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            should_render = Self::handle_event(app, evt, tui)?;
        }

        if app.controller.drain() {
            should_render = true;
        }

        Ok(should_render)
    }

    pub fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match &evt {
            TerminalEvent::Init => {
                info!(location = app.controller.history.current(), "Started");
            }
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, *key),
            TerminalEvent::Resize(_, _) | TerminalEvent::Tick => {}
        }

        Ok(needs_redraw(&evt, app.has_focus))
    }

    fn handle_key_event(app: &mut App, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let Some(command) = InputHandler::handle_key(key, &app.controller.state, &mut app.view)
        else {
            return;
        };

        match command {
            Command::Dispatch(event) => app.controller.dispatch(event),
            Command::Back => app.controller.back(),
            Command::Forward => app.controller.forward(),
            Command::Quit => app.should_quit = true,
        }
    }
}

/// Ticks only animate, so they are skipped while the terminal is in the background.
fn needs_redraw(evt: &TerminalEvent, has_focus: bool) -> bool {
    match evt {
        TerminalEvent::Tick => has_focus,
        TerminalEvent::FocusLost => false,
        _ => true,
    }
}
