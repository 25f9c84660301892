use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::error::{AppError, Result};
use crate::export::project::TrackItem;

/// Asks on stdout and reads the answer from stdin. Only an explicit
/// `yes` or `y`, exactly as typed, counts as acceptance.
pub fn stdin_confirm(prompt: &str) -> bool {
    print!("{} [yes/no]: ", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }

    matches!(answer.trim_end_matches(['\r', '\n']), "yes" | "y")
}

/// Create (or truncate) the destination file, asking via `confirm` before
/// touching an existing one. The confirmation capability is injected so the
/// pipeline can run without a real terminal. May leave a zero-byte file
/// behind if a later step fails.
pub fn prepare_destination(path: &Path, mut confirm: impl FnMut(&str) -> bool) -> Result<()> {
    if path.exists() {
        let prompt = format!(
            "File {} already exists. Do you want to replace its content?",
            path.display()
        );
        if !confirm(&prompt) {
            return Err(AppError::Declined(path.display().to_string()));
        }
    }

    File::create(path)?;
    Ok(())
}

/// Serialize the full record sequence as 2-space-indented JSON and overwrite
/// the file in a single write. No partial-write protection.
pub fn write(path: &Path, records: &[TrackItem]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;

    info!("Wrote {} tracks to {}", records.len(), path.display());
    Ok(())
}
