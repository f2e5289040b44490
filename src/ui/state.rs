use crate::{http::model::Track, ui::router};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Queue,
    About,
    NotFound,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Search",
            Page::Queue => "Queue",
            Page::About => "About",
            Page::NotFound => "Not found",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub current_page: Page,
    /// Last submitted query. Search responses for any other query are dropped.
    pub current_search_query: String,
    pub is_searching: bool,
    pub search_results: Vec<Track>,
    pub now_playing: Option<Track>,
    pub is_playing: bool,
    pub queue: Vec<Track>,
}

impl AppState {
    pub fn new(initial_path: &str) -> Self {
        Self {
            current_page: router::resolve(initial_path),
            ..Default::default()
        }
    }
}

/// Which Home pane receives keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    SearchBox,
    Results,
}

/// Presentation-only state. The transition function never reads it.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub draft: String,
    pub focus: Focus,
    pub results_cursor: usize,
    pub queue_cursor: usize,
    pub prompt: Option<String>,
}

impl ViewState {
    /// Keeps both list cursors inside their lists after a state change.
    pub fn clamp(&mut self, state: &AppState) {
        self.results_cursor = self
            .results_cursor
            .min(state.search_results.len().saturating_sub(1));
        self.queue_cursor = self.queue_cursor.min(state.queue.len().saturating_sub(1));
    }

    pub fn selected_result<'a>(&self, state: &'a AppState) -> Option<&'a Track> {
        state.search_results.get(self.results_cursor)
    }

    pub fn selected_queued<'a>(&self, state: &'a AppState) -> Option<&'a Track> {
        state.queue.get(self.queue_cursor)
    }
}
