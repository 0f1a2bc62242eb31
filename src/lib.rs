pub mod account;
pub mod config;
pub mod timestamp;
pub mod writer;

use anyhow::Result;
use rand::Rng;
use std::path::{Path, PathBuf};

use account::AccountRecord;
use config::Config;
use timestamp::CreationWindow;

/// Generate and write one account file per configured username.
///
/// The window end is taken from `end` so every record in a run samples the
/// same interval. `on_written` runs right after each file is on disk. The
/// first failure aborts the run; files already written are left in place.
pub fn run<R: Rng>(
    config: &Config,
    end: jiff::civil::DateTime,
    rng: &mut R,
    mut on_written: impl FnMut(&Path),
) -> Result<Vec<PathBuf>> {
    let window = CreationWindow::with_span(end, config.window_secs)?;
    tracing::debug!(
        dir = %config.output_dir.display(),
        start = %window.start(),
        end = %window.end(),
        "generating accounts"
    );

    writer::ensure_dir(&config.output_dir)?;

    let mut written = Vec::with_capacity(config.usernames.len());
    for username in &config.usernames {
        let record = AccountRecord::generate(username, &window, rng);
        tracing::debug!(
            id = %record.id,
            username = %record.username,
            created_at = %record.created_at,
            "generated account"
        );
        let path = writer::write_record(&config.output_dir, &record)?;
        on_written(&path);
        written.push(path);
    }

    tracing::info!(count = written.len(), "account generation finished");
    Ok(written)
}
