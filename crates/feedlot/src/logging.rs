//! File logging for the command-line application.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file name inside the data directory
pub const LOG_FILE_NAME: &str = "feedlot.log";
/// Log size that triggers trimming (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Bytes of recent history kept after trimming (1 MB)
const KEEP_SIZE: u64 = 1024 * 1024;

const ROTATION_MARKER: &[u8] = b"--- Log rotated (older entries removed) ---\n";

/// Trim `log_path` to its last `keep` bytes once it grows past `max`.
///
/// The cut is moved forward to the next line start so no entry is split.
/// Returns whether the file was trimmed.
fn trim_log(log_path: &Path, max: u64, keep: u64) -> io::Result<bool> {
    let len = match fs::metadata(log_path) {
        Ok(metadata) => metadata.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if len <= max {
        return Ok(false);
    }

    let mut tail = Vec::new();
    {
        let mut file = File::open(log_path)?;
        file.seek(SeekFrom::Start(len.saturating_sub(keep)))?;
        file.read_to_end(&mut tail)?;
    }

    let line_start = tail
        .iter()
        .position(|&b| b == b'\n')
        .map_or(0, |i| i + 1);

    let mut file = File::create(log_path)?;
    file.write_all(ROTATION_MARKER)?;
    file.write_all(&tail[line_start..])?;
    Ok(true)
}

/// Hands out writers to one shared, append-mode log file
#[derive(Clone)]
struct SharedLogFile {
    file: Arc<Mutex<File>>,
}

struct SharedLogWriter {
    file: Arc<Mutex<File>>,
}

impl SharedLogWriter {
    fn with_file<T>(&self, f: impl FnOnce(&mut File) -> io::Result<T>) -> io::Result<T> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        f(&mut guard)
    }
}

impl Write for SharedLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.with_file(|file| file.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.with_file(|file| file.flush())
    }
}

impl<'a> MakeWriter<'a> for SharedLogFile {
    type Writer = SharedLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SharedLogWriter {
            file: Arc::clone(&self.file),
        }
    }
}

/// Default filter: the application at `level`, the core library at warn
fn default_filter(level: &str) -> String {
    format!("feedlot={level},feedlot_core=warn")
}

/// Initialize logging to `{data_dir}/feedlot.log`.
///
/// The file is trimmed to its last 1 MB once it exceeds 5 MB. `RUST_LOG`
/// takes precedence over `level` when set.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join(LOG_FILE_NAME);
    if let Err(e) = trim_log(&log_path, MAX_LOG_SIZE, KEEP_SIZE) {
        eprintln!("Warning: failed to rotate log file: {e}");
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;
    let writer = SharedLogFile {
        file: Arc::new(Mutex::new(file)),
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!(log_path = %log_path.display(), "Feedlot logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_small_log_is_left_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        fs::write(&path, "one\ntwo\n").unwrap();

        assert!(!trim_log(&path, 100, 10).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_missing_log_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(!trim_log(&dir.path().join("absent.log"), 10, 5).unwrap());
    }

    #[test]
    fn test_large_log_keeps_whole_recent_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        let content: String = (0..100).map(|i| format!("line {i:03}\n")).collect();
        fs::write(&path, &content).unwrap();

        assert!(trim_log(&path, 500, 40).unwrap());

        let trimmed = fs::read_to_string(&path).unwrap();
        let body = trimmed
            .strip_prefix(std::str::from_utf8(ROTATION_MARKER).unwrap())
            .unwrap();
        assert!(body.ends_with("line 099\n"));
        assert!(body.lines().all(|l| l.starts_with("line ")));
        assert!(body.len() <= 40);
    }

    #[test]
    fn test_default_filter_names_both_crates() {
        assert_eq!(default_filter("debug"), "feedlot=debug,feedlot_core=warn");
    }
}
