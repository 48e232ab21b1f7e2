//! Diagnostic tracing.
//!
//! Reads `RUST_LOG`, defaults to `warn`. Line modes log to stderr. The TUI
//! draws on the same terminal, so `play` sends its log to a file instead.
//!
//! ```bash
//! RUST_LOG=shoutdle=debug shoutdle simple
//! RUST_LOG=shoutdle=debug shoutdle play   # tail $TMPDIR/shoutdle.log
//! ```

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{
    EnvFilter, fmt, fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Appended to, created if missing
    File(PathBuf),
}

impl LogTarget {
    /// Log file used while the TUI owns the terminal
    #[must_use]
    pub fn tui_default() -> Self {
        Self::File(std::env::temp_dir().join("shoutdle.log"))
    }

    fn writer(&self) -> io::Result<BoxMakeWriter> {
        match self {
            Self::Stderr => Ok(BoxMakeWriter::new(io::stderr)),
            Self::File(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                Ok(BoxMakeWriter::new(Mutex::new(file)))
            }
        }
    }
}

/// Install the global tracing subscriber
pub fn init(target: &LogTarget) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // An unopenable log file must not fall back to the terminal
    let writer = target
        .writer()
        .unwrap_or_else(|_| BoxMakeWriter::new(io::sink));
    let ansi = *target == LogTarget::Stderr;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(ansi).compact())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn file_target_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.log");
        std::fs::write(&path, "earlier\n").unwrap();

        let writer = LogTarget::File(path.clone()).writer().unwrap();
        writer.make_writer().write_all(b"guess accepted\n").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "earlier\nguess accepted\n");
    }

    #[test]
    fn tui_logs_to_a_file() {
        assert!(matches!(LogTarget::tui_default(), LogTarget::File(_)));
    }
}
