use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::error::{AppError, Result};
use crate::spotify::models::SavedTracksPage;

const SPOTIFY_API_BASE: &str = "https://api.spotify.com/v1";

/// Thin client over the saved-tracks endpoint. Carries a pre-obtained OAuth
/// bearer token; no token refresh, no retries, no request timeout.
pub struct SpotifyClient {
    http_client: Client,
    token: String,
}

impl SpotifyClient {
    pub fn new(token: &str) -> Self {
        Self {
            http_client: Client::new(),
            token: token.to_string(),
        }
    }

    /// Fetch one page of the user's saved tracks starting at `offset`.
    /// Any non-success status is fatal for the whole export.
    pub async fn saved_tracks_page(&self, offset: u32) -> Result<SavedTracksPage> {
        let url = format!("{}/me/tracks", SPOTIFY_API_BASE);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, "application/json")
            .query(&[("offset", offset.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::SpotifyApi {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let page: SavedTracksPage = response.json().await?;
        debug!(
            "Fetched saved-tracks page at offset {} ({} items, total {})",
            offset,
            page.items.len(),
            page.total
        );

        Ok(page)
    }
}
