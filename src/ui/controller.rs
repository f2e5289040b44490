use std::sync::Arc;

use flume::{Receiver, Sender};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::{
    event::events::{Effect, Event},
    http::SearchClient,
    ui::{history::History, state::AppState, update::transition},
};

/// Owns the application state and carries out the effects transitions ask for.
///
/// Every event, whether it comes from a key press, a finished search or a
/// history move, goes through the same channel and the same [`transition`].
pub struct Controller {
    pub state: AppState,
    pub history: History,
    pub event_tx: Sender<Event>,
    event_rx: Receiver<Event>,
    api: Arc<dyn SearchClient>,
}

impl Controller {
    pub fn new(initial_path: &str, api: Arc<dyn SearchClient>) -> Self {
        let (event_tx, event_rx) = flume::unbounded();

        Self {
            state: AppState::new(initial_path),
            history: History::new(initial_path),
            event_tx,
            event_rx,
            api,
        }
    }

    pub fn send(&self, event: Event) {
        let _ = self.event_tx.send(event);
    }

    /// Runs every event already waiting in the channel. Returns whether any ran.
    pub fn drain(&mut self) -> bool {
        let mut handled = false;
        while let Ok(event) = self.event_rx.try_recv() {
            self.dispatch(event);
            handled = true;
        }
        handled
    }

    /// Waits for the next event and runs it.
    #[cfg(test)]
    pub async fn next(&mut self) -> bool {
        match self.event_rx.recv_async().await {
            Ok(event) => {
                self.dispatch(event);
                true
            }
            Err(_) => false,
        }
    }

    pub fn dispatch(&mut self, event: Event) {
        debug!(?event, "Dispatching");
        let state = std::mem::take(&mut self.state);
        let (state, effect) = transition(state, event);
        self.state = state;

        if let Some(effect) = effect {
            self.perform(effect);
        }
    }

    pub fn back(&mut self) {
        if let Some(path) = self.history.back().map(str::to_string) {
            self.send(Event::UrlChanged(path));
        }
    }

    pub fn forward(&mut self) {
        if let Some(path) = self.history.forward().map(str::to_string) {
            self.send(Event::UrlChanged(path));
        }
    }

    fn perform(&mut self, effect: Effect) {
        match effect {
            Effect::PushLocation(path) => {
                info!(%path, "Navigating");
                self.history.push(path.clone());
                self.send(Event::UrlChanged(path));
            }
            Effect::Search(query) => {
                spawn_search(self.api.clone(), query, self.event_tx.clone());
            }
        }
    }
}

/// Runs one search in the background and reports the outcome as an event.
/// Superseded searches are left to finish; their results are dropped later.
pub fn spawn_search(
    api: Arc<dyn SearchClient>,
    query: String,
    tx: Sender<Event>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let event = match api.search(&query).await {
            Ok(tracks) => {
                info!(%query, count = tracks.len(), "Search finished");
                Event::SearchSucceeded { query, tracks }
            }
            Err(error) => Event::SearchFailed { query, error },
        };
        let _ = tx.send_async(event).await;
    })
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, time::Duration};

    use async_trait::async_trait;

    use super::*;
    use crate::{
        http::{error::SearchError, model::Track},
        ui::state::Page,
    };

    fn track(id: &str) -> Track {
        Track {
            id: id.to_string(),
            name: format!("Track {id}"),
            preview_url: format!("https://p.scdn.co/mp3-preview/{id}"),
        }
    }

    /// Answers each query after a fixed delay.
    #[derive(Default)]
    struct FakeCatalog {
        answers: HashMap<String, (u64, Result<Vec<Track>, SearchError>)>,
    }

    impl FakeCatalog {
        fn answer(
            mut self,
            query: &str,
            delay_ms: u64,
            result: Result<Vec<Track>, SearchError>,
        ) -> Self {
            self.answers.insert(query.to_string(), (delay_ms, result));
            self
        }
    }

    #[async_trait]
    impl SearchClient for FakeCatalog {
        async fn search(&self, query: &str) -> Result<Vec<Track>, SearchError> {
            let (delay, result) = self
                .answers
                .get(query)
                .cloned()
                .unwrap_or((0, Err(SearchError::Status(404))));
            tokio::time::sleep(Duration::from_millis(delay)).await;
            result
        }
    }

    fn controller(path: &str, catalog: FakeCatalog) -> Controller {
        Controller::new(path, Arc::new(catalog))
    }

    #[tokio::test]
    async fn in_app_navigation_goes_through_url_changed() {
        let mut ctl = controller("/", FakeCatalog::default());

        ctl.dispatch(Event::NavigateTo("/queue".into()));
        assert_eq!(ctl.state.current_page, Page::Home);
        assert_eq!(ctl.history.current(), "/queue");

        assert!(ctl.drain());
        assert_eq!(ctl.state.current_page, Page::Queue);
    }

    #[tokio::test]
    async fn history_moves_converge_with_in_app_navigation() {
        let mut ctl = controller("/", FakeCatalog::default());
        ctl.dispatch(Event::NavigateTo("/about".into()));
        ctl.drain();
        let via_link = ctl.state.clone();

        ctl.dispatch(Event::NavigateTo("/missing".into()));
        ctl.drain();
        assert_eq!(ctl.state.current_page, Page::NotFound);

        ctl.back();
        ctl.drain();
        assert_eq!(ctl.state, via_link);

        ctl.back();
        ctl.drain();
        assert_eq!(ctl.state.current_page, Page::Home);

        ctl.back();
        assert!(!ctl.drain());

        ctl.forward();
        ctl.forward();
        ctl.drain();
        assert_eq!(ctl.state.current_page, Page::NotFound);
    }

    #[tokio::test]
    async fn slow_stale_search_does_not_overwrite_newer_results() {
        let catalog = FakeCatalog::default()
            .answer("old", 80, Ok(vec![track("o1")]))
            .answer("new", 5, Ok(vec![track("n1"), track("n2")]));
        let mut ctl = controller("/", catalog);

        ctl.dispatch(Event::SubmitSearch("old".into()));
        ctl.dispatch(Event::SubmitSearch("new".into()));

        assert!(ctl.next().await);
        assert_eq!(ctl.state.search_results, vec![track("n1"), track("n2")]);
        assert!(!ctl.state.is_searching);

        assert!(ctl.next().await);
        assert_eq!(ctl.state.search_results, vec![track("n1"), track("n2")]);
        assert_eq!(ctl.state.current_search_query, "new");
    }

    #[tokio::test]
    async fn failed_search_reports_back_and_keeps_results() {
        let catalog = FakeCatalog::default()
            .answer("ok", 0, Ok(vec![track("1")]))
            .answer("down", 0, Err(SearchError::Transport("connection reset".into())));
        let mut ctl = controller("/", catalog);

        ctl.dispatch(Event::SubmitSearch("ok".into()));
        ctl.next().await;
        ctl.dispatch(Event::SubmitSearch("down".into()));
        assert!(ctl.state.is_searching);

        ctl.next().await;
        assert!(!ctl.state.is_searching);
        assert_eq!(ctl.state.search_results, vec![track("1")]);
    }

    #[tokio::test]
    async fn spawned_search_tags_the_outcome_with_its_query() {
        let catalog = FakeCatalog::default().answer("q", 0, Ok(vec![track("x")]));
        let (tx, rx) = flume::unbounded();

        spawn_search(Arc::new(catalog), "q".into(), tx).await.unwrap();

        assert_eq!(
            rx.try_recv().unwrap(),
            Event::SearchSucceeded {
                query: "q".into(),
                tracks: vec![track("x")],
            }
        );
    }
}
