pub mod client;
pub mod models;

pub use client::SpotifyClient;
pub use models::{ApiAlbum, ApiArtist, ApiTrack, SavedTrackEntry, SavedTracksPage};
