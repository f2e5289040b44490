use serde::Deserialize;

use super::error::SearchError;

/// A catalog entry that can be previewed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub preview_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    tracks: TrackPage,
}

#[derive(Debug, Deserialize)]
struct TrackPage {
    items: Vec<Track>,
}

/// Decodes a search response body into its `tracks.items` list.
///
/// A missing list or an item without a string `id`, `name` or `preview_url`
/// fails the whole response.
pub fn decode_tracks(body: &[u8]) -> Result<Vec<Track>, SearchError> {
    let response: SearchResponse =
        serde_json::from_slice(body).map_err(|e| SearchError::Decode(e.to_string()))?;
    Ok(response.tracks.items)
}
