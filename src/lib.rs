pub mod config;
pub mod error;
pub mod export;
pub mod spotify;

pub use config::{Config, FileExt};
pub use error::{AppError, Result};
pub use export::{ConsoleProgress, LibraryExporter, TrackItem};
pub use spotify::{SavedTracksPage, SpotifyClient};
