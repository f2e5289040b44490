use std::time::{SystemTime, UNIX_EPOCH};

pub mod handler;

const FRAME_STEP_MS: u128 = 100;

fn frame(step_ms: u128, frames: usize) -> usize {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    (now / step_ms) as usize % frames
}

/// Marker shown next to the current track; pulses while it plays.
pub fn get_active_track_icon(is_playing: bool) -> &'static str {
    if !is_playing {
        return "•";
    }

    match frame(FRAME_STEP_MS, 6) {
        0 | 5 => "·",
        1 | 4 => "•",
        _ => "●",
    }
}

pub fn spinner_symbol() -> &'static str {
    const SYMBOLS: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    SYMBOLS[frame(FRAME_STEP_MS, SYMBOLS.len())]
}
