//! rift-hex - a terminal hex editor
//! Main entry point
//!
//! CLI surface: one positional argument, the path to the file to open.
//! Exit code 0 on clean exit, 1 on a missing argument or an open/stat/map
//! failure.

use std::env;
use std::fs::OpenOptions;
use std::process::ExitCode;

use rift_hex::editor::Editor;
use rift_hex::edit_buffer::EditBuffer;
use rift_hex::source::ByteSource;
use rift_hex::term::crossterm::CrosstermBackend;

/// Point `env_logger` at a file rather than stderr: the editor owns the
/// alternate screen for its whole run, and anything written to the real
/// stderr would corrupt the raw-mode display. Controlled by `RUST_LOG`;
/// silently disabled if the log file can't be opened.
fn init_logging() {
    let log_path = env::var_os("RIFTHEX_LOG_FILE")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| env::temp_dir().join("rifthex.log"));

    if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
    }
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let path = env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: rifthex <file>"))?;

    let source = ByteSource::open(&path)?;
    log::debug!("opened {path} ({} bytes)", source.len());

    let buf = EditBuffer::open(source.as_bytes());
    let backend = CrosstermBackend::new()?;
    let mut editor = Editor::new(backend, buf, path)?;
    editor.run()?;
    Ok(())
}
