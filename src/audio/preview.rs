use std::{
    io::Cursor,
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
};

use flume::Sender;
use rodio::Decoder;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::{error::AudioError, playback::PlaybackEngine};
use crate::{event::events::Event, http::model::Track};

type PreviewDecoder = Decoder<Cursor<Vec<u8>>>;

/// What the sink's source should do on this sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceAction {
    Keep,
    Unload,
    Load,
}

/// Whether the sink needs to be resumed or paused to match `is_playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkAction {
    Keep,
    Play,
    Pause,
}

/// Player-side view of the currently loaded preview.
#[derive(Debug, Clone, Copy, Default)]
struct Loaded<'a> {
    id: Option<&'a str>,
    was_playing: bool,
    is_ready: bool,
    is_loading: bool,
}

fn plan_source(loaded: Loaded<'_>, now_playing: Option<&str>, is_playing: bool) -> SourceAction {
    let Some(id) = now_playing else {
        return if loaded.id.is_some() {
            SourceAction::Unload
        } else {
            SourceAction::Keep
        };
    };

    let changed = loaded.id != Some(id);
    // Played again after the clip ran out (or failed) and nothing is in flight.
    let restarted = is_playing && !loaded.was_playing && !loaded.is_ready && !loaded.is_loading;

    if changed || restarted {
        SourceAction::Load
    } else {
        SourceAction::Keep
    }
}

fn plan_sink(is_playing: bool, is_paused: bool) -> SinkAction {
    match (is_playing, is_paused) {
        (true, true) => SinkAction::Play,
        (false, false) => SinkAction::Pause,
        _ => SinkAction::Keep,
    }
}

fn has_finished(is_ready: bool, is_paused: bool, is_empty: bool) -> bool {
    is_ready && !is_paused && is_empty
}

/// Plays the preview clip of whatever the state says is current.
///
/// The player never decides what to play. [`PreviewPlayer::sync`] is handed
/// `now_playing` / `is_playing` after every redraw and makes the sink follow.
/// A clip that runs out (or cannot be loaded) is reported back as
/// [`Event::PreviewEnded`].
pub struct PreviewPlayer {
    engine: Option<PlaybackEngine>,
    http: reqwest::Client,
    event_tx: Sender<Event>,

    loaded: Option<String>,
    was_playing: bool,
    is_ready: Arc<AtomicBool>,
    is_loading: Arc<AtomicBool>,
    generation: Arc<AtomicU64>,
    load_task: Option<JoinHandle<()>>,
}

impl PreviewPlayer {
    pub fn new(event_tx: Sender<Event>) -> Self {
        let engine = match PlaybackEngine::new() {
            Ok(engine) => Some(engine),
            Err(e) => {
                warn!("Preview playback disabled: {e}");
                None
            }
        };
        Self::with_engine(engine, event_tx)
    }

    /// A player without an output device. `sync` does nothing.
    #[cfg(test)]
    pub fn silent(event_tx: Sender<Event>) -> Self {
        Self::with_engine(None, event_tx)
    }

    fn with_engine(engine: Option<PlaybackEngine>, event_tx: Sender<Event>) -> Self {
        Self {
            engine,
            http: reqwest::Client::new(),
            event_tx,
            loaded: None,
            was_playing: false,
            is_ready: Arc::new(AtomicBool::new(false)),
            is_loading: Arc::new(AtomicBool::new(false)),
            generation: Arc::new(AtomicU64::new(0)),
            load_task: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.engine.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading.load(Ordering::Relaxed)
    }

    pub fn sync(&mut self, now_playing: Option<&Track>, is_playing: bool) {
        if self.engine.is_none() || self.report_finished() {
            return;
        }

        let loaded = Loaded {
            id: self.loaded.as_deref(),
            was_playing: self.was_playing,
            is_ready: self.is_ready.load(Ordering::Relaxed),
            is_loading: self.is_loading(),
        };
        match (plan_source(loaded, now_playing.map(|t| t.id.as_str()), is_playing), now_playing) {
            (SourceAction::Load, Some(track)) => self.load(track),
            (SourceAction::Unload, _) => self.unload(),
            _ => {}
        }

        if let Some(engine) = &self.engine {
            match plan_sink(is_playing, engine.is_paused()) {
                SinkAction::Play => engine.play(),
                SinkAction::Pause => engine.pause(),
                SinkAction::Keep => {}
            }
        }
        self.was_playing = is_playing;
    }

    fn report_finished(&mut self) -> bool {
        let (Some(engine), Some(id)) = (&self.engine, &self.loaded) else {
            return false;
        };

        if has_finished(
            self.is_ready.load(Ordering::Relaxed),
            engine.is_paused(),
            engine.is_empty(),
        ) {
            self.is_ready.store(false, Ordering::Relaxed);
            info!(track = %id, "Preview finished");
            let _ = self.event_tx.send(Event::PreviewEnded(id.clone()));
            return true;
        }
        false
    }

    fn unload(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(task) = self.load_task.take() {
            task.abort();
        }
        if let Some(engine) = &self.engine {
            engine.stop();
        }
        self.loaded = None;
        self.is_ready.store(false, Ordering::Relaxed);
        self.is_loading.store(false, Ordering::Relaxed);
    }

    fn load(&mut self, track: &Track) {
        self.unload();
        let Some(engine) = &self.engine else {
            return;
        };

        info!(track = %track.id, name = %track.name, "Loading preview");
        self.loaded = Some(track.id.clone());
        self.is_loading.store(true, Ordering::Relaxed);

        let job = LoadJob {
            generation: self.generation.fetch_add(1, Ordering::SeqCst) + 1,
            current: self.generation.clone(),
            ready: self.is_ready.clone(),
            loading: self.is_loading.clone(),
            event_tx: self.event_tx.clone(),
            track_id: track.id.clone(),
        };
        let sink = engine.sink();
        let http = self.http.clone();
        let url = track.preview_url.clone();

        self.load_task = Some(tokio::spawn(job.run(http, url, move |decoder| {
            sink.append(decoder)
        })));
    }
}

/// One download + decode of a preview, tagged with the generation it was
/// started in. Once the player moves on, the job never touches the sink or
/// the shared flags again.
struct LoadJob {
    generation: u64,
    current: Arc<AtomicU64>,
    ready: Arc<AtomicBool>,
    loading: Arc<AtomicBool>,
    event_tx: Sender<Event>,
    track_id: String,
}

impl LoadJob {
    fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }

    async fn run<F>(self, http: reqwest::Client, url: String, append: F)
    where
        F: FnOnce(PreviewDecoder) + Send + 'static,
    {
        let outcome = match fetch_preview(&http, &url).await {
            Ok(bytes) => {
                let current = self.current.clone();
                let ready = self.ready.clone();
                let generation = self.generation;
                tokio::task::spawn_blocking(move || -> Result<(), AudioError> {
                    let decoder = decode_preview(bytes)?;
                    if current.load(Ordering::SeqCst) == generation {
                        append(decoder);
                        ready.store(true, Ordering::Relaxed);
                    }
                    Ok(())
                })
                .await
                .unwrap_or_else(|e| Err(AudioError::Unknown(e.to_string())))
            }
            Err(e) => Err(e),
        };

        if !self.is_current() {
            return;
        }
        self.loading.store(false, Ordering::Relaxed);

        if let Err(e) = outcome {
            warn!(track = %self.track_id, "Preview unavailable: {e}");
            let _ = self
                .event_tx
                .send_async(Event::PreviewEnded(self.track_id))
                .await;
        }
    }
}

async fn fetch_preview(http: &reqwest::Client, url: &str) -> Result<Vec<u8>, AudioError> {
    let response = http.get(url).send().await?.error_for_status()?;
    Ok(response.bytes().await?.to_vec())
}

fn decode_preview(bytes: Vec<u8>) -> Result<PreviewDecoder, AudioError> {
    let byte_len = bytes.len() as u64;
    Decoder::builder()
        .with_data(Cursor::new(bytes))
        .with_byte_len(byte_len)
        .with_hint("mp3")
        .build()
        .map_err(|e| AudioError::DecodingError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use tokio::{io::AsyncWriteExt, net::TcpListener};

    use super::*;

    fn track(id: &str) -> Track {
        Track {
            id: id.to_string(),
            name: id.to_uppercase(),
            preview_url: format!("https://p.scdn.co/mp3-preview/{id}"),
        }
    }

    fn loaded(id: &str) -> Loaded<'_> {
        Loaded {
            id: Some(id),
            ..Loaded::default()
        }
    }

    fn job(current: &Arc<AtomicU64>, event_tx: Sender<Event>) -> LoadJob {
        LoadJob {
            generation: current.load(Ordering::SeqCst),
            current: current.clone(),
            ready: Arc::new(AtomicBool::new(false)),
            loading: Arc::new(AtomicBool::new(true)),
            event_tx,
            track_id: "a".into(),
        }
    }

    /// A local URL that refuses connections.
    async fn unreachable_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{port}/preview.mp3")
    }

    /// Serves one response of bytes that are not audio.
    async fn garbage_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let body = b"definitely not audio";
                let head = format!(
                    "HTTP/1.1 200 OK\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
                    body.len()
                );
                let _ = socket.write_all(head.as_bytes()).await;
                let _ = socket.write_all(body).await;
            }
        });
        format!("http://127.0.0.1:{port}/preview.mp3")
    }

    #[test]
    fn new_track_is_loaded() {
        assert_eq!(plan_source(Loaded::default(), Some("a"), true), SourceAction::Load);
        assert_eq!(plan_source(loaded("a"), Some("b"), false), SourceAction::Load);
    }

    #[test]
    fn same_track_is_kept_while_loaded_or_loading() {
        let ready = Loaded {
            was_playing: true,
            is_ready: true,
            ..loaded("a")
        };
        assert_eq!(plan_source(ready, Some("a"), true), SourceAction::Keep);

        let loading = Loaded {
            is_loading: true,
            ..loaded("a")
        };
        assert_eq!(plan_source(loading, Some("a"), true), SourceAction::Keep);
    }

    #[test]
    fn ended_preview_restarts_when_played_again() {
        assert_eq!(plan_source(loaded("a"), Some("a"), true), SourceAction::Load);
    }

    #[test]
    fn ended_preview_stays_idle_while_stopped() {
        assert_eq!(plan_source(loaded("a"), Some("a"), false), SourceAction::Keep);

        let still_playing = Loaded {
            was_playing: true,
            ..loaded("a")
        };
        assert_eq!(plan_source(still_playing, Some("a"), true), SourceAction::Keep);
    }

    #[test]
    fn clearing_now_playing_unloads() {
        assert_eq!(plan_source(loaded("a"), None, false), SourceAction::Unload);
        assert_eq!(plan_source(Loaded::default(), None, false), SourceAction::Keep);
    }

    #[test]
    fn sink_follows_is_playing() {
        assert_eq!(plan_sink(true, true), SinkAction::Play);
        assert_eq!(plan_sink(false, false), SinkAction::Pause);
        assert_eq!(plan_sink(true, false), SinkAction::Keep);
        assert_eq!(plan_sink(false, true), SinkAction::Keep);
    }

    #[test]
    fn only_a_drained_running_sink_counts_as_finished() {
        assert!(has_finished(true, false, true));
        assert!(!has_finished(false, false, true));
        assert!(!has_finished(true, true, true));
        assert!(!has_finished(true, false, false));
    }

    #[test]
    fn silent_player_ignores_state() {
        let (tx, rx) = flume::unbounded();
        let mut player = PreviewPlayer::silent(tx);

        player.sync(Some(&track("a")), true);
        player.sync(Some(&track("b")), false);
        player.sync(None, false);

        assert!(!player.is_enabled());
        assert!(!player.is_loading());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn garbage_bytes_do_not_decode() {
        assert!(matches!(
            decode_preview(b"definitely not audio".to_vec()),
            Err(AudioError::DecodingError(_))
        ));
    }

    #[tokio::test]
    async fn failed_download_is_reported_as_ended() {
        let (tx, rx) = flume::unbounded();
        let current = Arc::new(AtomicU64::new(1));
        let job = job(&current, tx);
        let (ready, loading) = (job.ready.clone(), job.loading.clone());

        job.run(reqwest::Client::new(), unreachable_url().await, |_| {})
            .await;

        assert_eq!(rx.try_recv().ok(), Some(Event::PreviewEnded("a".into())));
        assert!(!loading.load(Ordering::Relaxed));
        assert!(!ready.load(Ordering::Relaxed));
    }

    #[tokio::test]
    async fn undecodable_preview_is_reported_as_ended() {
        let (tx, rx) = flume::unbounded();
        let current = Arc::new(AtomicU64::new(1));
        let appended = Arc::new(AtomicUsize::new(0));
        let counter = appended.clone();

        job(&current, tx)
            .run(reqwest::Client::new(), garbage_url().await, move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .await;

        assert_eq!(rx.try_recv().ok(), Some(Event::PreviewEnded("a".into())));
        assert_eq!(appended.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn superseded_load_stays_quiet() {
        let (tx, rx) = flume::unbounded();
        let current = Arc::new(AtomicU64::new(1));
        let job = job(&current, tx);
        let (ready, loading) = (job.ready.clone(), job.loading.clone());

        current.fetch_add(1, Ordering::SeqCst);
        job.run(reqwest::Client::new(), unreachable_url().await, |_| {})
            .await;

        assert!(rx.try_recv().is_err());
        assert!(!ready.load(Ordering::Relaxed));
        // The newer load owns the flag now.
        assert!(loading.load(Ordering::Relaxed));
    }
}
