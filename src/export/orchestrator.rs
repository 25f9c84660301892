use std::io::{self, Write};

use tracing::info;

use crate::error::Result;
use crate::export::project::{TrackItem, project};
use crate::spotify::client::SpotifyClient;
use crate::spotify::models::SavedTracksPage;

/// Fixed pagination step, matching the provider's default page size.
pub const PAGE_SIZE: u32 = 20;

/// Anything that can serve one page of saved tracks at a given offset.
pub trait PageSource {
    fn fetch_page(&self, offset: u32) -> impl Future<Output = Result<SavedTracksPage>>;
}

impl PageSource for SpotifyClient {
    async fn fetch_page(&self, offset: u32) -> Result<SavedTracksPage> {
        self.saved_tracks_page(offset).await
    }
}

/// Receives progress updates while pages are being fetched.
pub trait ProgressSink {
    fn update(&mut self, current: u32, total: u32);
}

/// Rewrites a single stdout line in place:
/// `Current progress: [current/total] | pct%`.
pub struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn update(&mut self, current: u32, total: u32) {
        let pct = ((f64::from(current) / f64::from(total)) * 100.0).round() as u32;
        print!("\rCurrent progress: [{}/{}] | {}%", current, total, pct);
        io::stdout().flush().ok();
    }
}

/// Drives the page source across the whole library, one serial round trip
/// at a time, accumulating projected records in memory.
pub struct LibraryExporter<S> {
    source: S,
}

impl<S: PageSource> LibraryExporter<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch and project every page of the user's saved tracks.
    ///
    /// Progress is reported with the page's declared total and the offset of
    /// the page just fetched, so the displayed percentage trails by one page
    /// and never reaches 100% before completion.
    pub async fn export_all(&self, progress: &mut impl ProgressSink) -> Result<Vec<TrackItem>> {
        let mut tracks = Vec::new();
        let mut offset = 0;

        loop {
            let page = self.source.fetch_page(offset).await?;
            let has_next = page.next.is_some();

            if has_next {
                progress.update(offset, page.total);
            }

            tracks.extend(project(&page));

            if !has_next {
                break;
            }
            offset += PAGE_SIZE;
        }

        info!("Fetched {} saved tracks", tracks.len());
        Ok(tracks)
    }
}
