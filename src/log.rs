use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Print an informational message: `[*]` in yellow.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        println!("[{}] {}", "\x1b[33m*\x1b[0m", format!($($arg)*))
    };
}

/// Print a success message: `[+]` in green.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        println!("[{}] {}", "\x1b[32m+\x1b[0m", format!($($arg)*))
    };
}

/// Print an error message: `[-]` in red.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        eprintln!("[{}] {}", "\x1b[31m-\x1b[0m", format!($($arg)*))
    };
}

/// Where `tracing` output goes.
pub enum LogSink<'a> {
    /// Append to a file; used while the TUI owns the terminal.
    File(&'a str),
    Stderr,
    Discard,
}

/// Install the global `tracing` subscriber. `RUST_LOG` overrides the default
/// `info` level.
pub fn init_tracing(sink: LogSink<'_>) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match sink {
        LogSink::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        LogSink::Stderr => builder.with_writer(io::stderr).init(),
        LogSink::Discard => builder.with_writer(io::sink).init(),
    }
    Ok(())
}
