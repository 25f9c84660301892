use std::collections::HashMap;

use serde::Deserialize;

/// One page of the saved-tracks endpoint. `next` carries the provider's
/// follow-up URL; only its presence matters for pagination.
#[derive(Debug, Clone, Deserialize)]
pub struct SavedTracksPage {
    pub items: Vec<SavedTrackEntry>,
    pub total: u32,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SavedTrackEntry {
    pub track: ApiTrack,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiTrack {
    pub id: String,
    pub name: String,
    pub album: ApiAlbum,
    pub artists: Vec<ApiArtist>,
    #[serde(default)]
    pub external_ids: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiAlbum {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiArtist {
    pub name: String,
}

#[cfg(test)]
impl SavedTrackEntry {
    pub fn mock(id: &str, name: &str, album: &str, artists: &[&str]) -> Self {
        Self {
            track: ApiTrack {
                id: id.to_string(),
                name: name.to_string(),
                album: ApiAlbum {
                    name: album.to_string(),
                },
                artists: artists
                    .iter()
                    .map(|a| ApiArtist {
                        name: (*a).to_string(),
                    })
                    .collect(),
                external_ids: HashMap::from([("isrc".to_string(), "MOCK12345678".to_string())]),
            },
        }
    }
}
