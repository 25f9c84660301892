pub mod orchestrator;
pub mod project;
pub mod sink;

pub use orchestrator::{ConsoleProgress, LibraryExporter, PAGE_SIZE, PageSource, ProgressSink};
pub use project::{TrackItem, project};
pub use sink::{prepare_destination, stdin_confirm, write};
