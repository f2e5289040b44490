pub mod about;
pub mod home;
pub mod not_found;
pub mod queue;

use ratatui::{Frame, layout::Rect};

use crate::ui::state::{AppState, Page, ViewState};

pub fn render_page(f: &mut Frame, area: Rect, state: &AppState, view: &ViewState, location: &str) {
    match state.current_page {
        Page::Home => home::render(f, area, state, view),
        Page::Queue => queue::render(f, area, state, view),
        Page::About => about::render(f, area),
        Page::NotFound => not_found::render(f, area, location),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{
        event::events::Event,
        http::model::Track,
        ui::{state::Focus, update::transition},
    };

    fn track(id: &str) -> Track {
        Track {
            id: id.to_string(),
            name: format!("Track {id}"),
            preview_url: format!("https://p.scdn.co/mp3-preview/{id}"),
        }
    }

    fn draw(state: &AppState, view: &ViewState, location: &str) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_page(f, area, state, view, location);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn not_found_names_the_location() {
        let state = AppState::new("/settings");
        let screen = draw(&state, &ViewState::default(), "/settings");

        assert!(screen.contains("Nothing lives here"));
        assert!(screen.contains("/settings is not a page"));
    }

    #[test]
    fn home_shows_spinner_while_first_search_runs() {
        let (state, _) = transition(AppState::new("/"), Event::SubmitSearch("daft punk".into()));
        let screen = draw(&state, &ViewState::default(), "/");

        assert!(screen.contains("Search"));
        assert!(screen.contains("Searching for \"daft punk\"..."));
    }

    #[test]
    fn home_lists_accepted_results() {
        let (state, _) = transition(AppState::new("/"), Event::SubmitSearch("a".into()));
        let (state, _) = transition(
            state,
            Event::SearchSucceeded {
                query: "a".into(),
                tracks: vec![track("1"), track("2")],
            },
        );
        let view = ViewState {
            focus: Focus::Results,
            ..ViewState::default()
        };
        let screen = draw(&state, &view, "/");

        assert!(screen.contains("Results for \"a\""));
        assert!(screen.contains("Track 1"));
        assert!(screen.contains("Track 2"));
        assert!(!screen.contains("Searching for"));
    }

    #[test]
    fn queue_and_about_have_their_own_bodies() {
        let state = AppState::new("/queue");
        assert!(draw(&state, &ViewState::default(), "/queue").contains("The queue is empty"));

        let (state, _) = transition(state, Event::EnqueueTrack(track("q")));
        let screen = draw(&state, &ViewState::default(), "/queue");
        assert!(screen.contains("Up next (1)"));
        assert!(screen.contains("Track q"));

        let state = AppState::new("/about");
        assert!(draw(&state, &ViewState::default(), "/about").contains("spotui"));
    }
}
