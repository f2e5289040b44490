use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    event::events::Event,
    ui::state::{AppState, Focus, Page, ViewState},
};

/// What a key press asks the application to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Event),
    Back,
    Forward,
    Quit,
}

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent, state: &AppState, view: &mut ViewState) -> Option<Command> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        if view.prompt.is_some() {
            return Self::handle_prompt(key, view);
        }

        if state.current_page == Page::Home && view.focus == Focus::SearchBox {
            return Self::handle_search_box(key, view);
        }

        if let Some(cmd) = Self::handle_global(key, state, view) {
            return Some(cmd);
        }

        match state.current_page {
            Page::Home => Self::handle_results(key, state, view),
            Page::Queue => Self::handle_queue(key, state, view),
            Page::About | Page::NotFound => None,
        }
    }

    fn handle_prompt(key: KeyEvent, view: &mut ViewState) -> Option<Command> {
        let prompt = view.prompt.as_mut()?;
        match key.code {
            KeyCode::Char(c) => prompt.push(c),
            KeyCode::Backspace => {
                prompt.pop();
            }
            KeyCode::Enter => {
                let path = view.prompt.take().unwrap_or_default();
                return Some(Command::Dispatch(Event::NavigateTo(path)));
            }
            KeyCode::Esc => view.prompt = None,
            _ => {}
        }
        None
    }

    fn handle_search_box(key: KeyEvent, view: &mut ViewState) -> Option<Command> {
        match key.code {
            KeyCode::Enter => {
                let query = view.draft.trim();
                if query.is_empty() {
                    return None;
                }
                view.focus = Focus::Results;
                view.results_cursor = 0;
                Some(Command::Dispatch(Event::SubmitSearch(query.to_string())))
            }
            KeyCode::Char(c) => {
                view.draft.push(c);
                None
            }
            KeyCode::Backspace => {
                view.draft.pop();
                None
            }
            KeyCode::Esc | KeyCode::Tab | KeyCode::Down => {
                view.focus = Focus::Results;
                None
            }
            _ => None,
        }
    }

    fn handle_global(key: KeyEvent, state: &AppState, view: &mut ViewState) -> Option<Command> {
        let navigate = |path: &str| Some(Command::Dispatch(Event::NavigateTo(path.to_string())));

        match (key.code, key.modifiers) {
            (KeyCode::Left, KeyModifiers::ALT) | (KeyCode::Char('['), _) => Some(Command::Back),
            (KeyCode::Right, KeyModifiers::ALT) | (KeyCode::Char(']'), _) => {
                Some(Command::Forward)
            }
            (KeyCode::Char('1'), _) => navigate("/"),
            (KeyCode::Char('2'), _) => navigate("/queue"),
            (KeyCode::Char('3'), _) => navigate("/about"),
            (KeyCode::Char(':'), _) => {
                view.prompt = Some(String::from("/"));
                None
            }
            (KeyCode::Char('/'), _) => {
                view.focus = Focus::SearchBox;
                if state.current_page == Page::Home {
                    None
                } else {
                    navigate("/")
                }
            }
            (KeyCode::Char(' '), _) => {
                let track = state.now_playing.clone()?;
                Some(Command::Dispatch(if state.is_playing {
                    Event::StopPlayback(track)
                } else {
                    Event::Play(track)
                }))
            }
            (KeyCode::Char('q'), _) => Some(Command::Quit),
            _ => None,
        }
    }

    fn handle_results(key: KeyEvent, state: &AppState, view: &mut ViewState) -> Option<Command> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if view.results_cursor + 1 < state.search_results.len() {
                    view.results_cursor += 1;
                }
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if view.results_cursor == 0 {
                    view.focus = Focus::SearchBox;
                } else {
                    view.results_cursor -= 1;
                }
                None
            }
            KeyCode::Enter => view
                .selected_result(state)
                .map(|t| Command::Dispatch(Event::Play(t.clone()))),
            KeyCode::Char('a') => view
                .selected_result(state)
                .map(|t| Command::Dispatch(Event::EnqueueTrack(t.clone()))),
            _ => None,
        }
    }

    fn handle_queue(key: KeyEvent, state: &AppState, view: &mut ViewState) -> Option<Command> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if view.queue_cursor + 1 < state.queue.len() {
                    view.queue_cursor += 1;
                }
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                view.queue_cursor = view.queue_cursor.saturating_sub(1);
                None
            }
            KeyCode::Enter => view
                .selected_queued(state)
                .map(|t| Command::Dispatch(Event::PlayFromQueue(t.clone()))),
            _ => None,
        }
    }
}
