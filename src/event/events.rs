use crate::http::{error::SearchError, model::Track};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    // Navigation
    NavigateTo(String),
    UrlChanged(String),

    // Search lifecycle
    SubmitSearch(String),
    SearchSucceeded { query: String, tracks: Vec<Track> },
    SearchFailed { query: String, error: SearchError },

    // Playback and queue
    Play(Track),
    PlayFromQueue(Track),
    StopPlayback(Track),
    EnqueueTrack(Track),
    PreviewEnded(String),
}

/// Work requested by a transition, carried out by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    PushLocation(String),
    Search(String),
}
