use tracing::{debug, warn};

use crate::{
    event::events::{Effect, Event},
    ui::{
        router,
        state::{AppState, Page},
    },
};

/// Computes the state that follows `event`, plus any work the runtime has to
/// carry out on its behalf. Never performs that work itself.
pub fn transition(mut state: AppState, event: Event) -> (AppState, Option<Effect>) {
    match event {
        Event::NavigateTo(path) => return (state, Some(Effect::PushLocation(path))),
        Event::UrlChanged(path) => {
            state.current_page = match router::path_to_page(&path) {
                Ok(page) => page,
                Err(e) => {
                    debug!("{e}");
                    Page::NotFound
                }
            };
        }
        Event::SubmitSearch(text) => {
            state.current_search_query = text.clone();
            state.is_searching = true;
            return (state, Some(Effect::Search(text)));
        }
        Event::SearchSucceeded { query, tracks } => {
            if query != state.current_search_query {
                debug!(stale = %query, current = %state.current_search_query, "Dropping stale results");
                return (state, None);
            }
            state.is_searching = false;
            state.search_results = tracks;
        }
        Event::SearchFailed { query, error } => {
            warn!(%query, "Search failed: {error}");
            state.is_searching = false;
        }
        Event::Play(track) => {
            state.now_playing = Some(track);
            state.is_playing = true;
        }
        Event::PlayFromQueue(track) => {
            if let Some(pos) = state.queue.iter().position(|t| t.id == track.id) {
                state.queue.remove(pos);
            }
            state.now_playing = Some(track);
            state.is_playing = true;
        }
        Event::StopPlayback(_) => state.is_playing = false,
        Event::EnqueueTrack(track) => state.queue.push(track),
        Event::PreviewEnded(id) => {
            if state.now_playing.as_ref().is_some_and(|t| t.id == id) {
                state.is_playing = false;
            }
        }
    }

    (state, None)
}
