//! Tracing output for the browser console.
//!
//! Each formatted event is buffered and flushed as one console call when
//! the writer drops: ERROR goes to `console.error`, WARN to `console.warn`,
//! everything else to `console.log`.

use std::io;
use std::sync::Once;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;
use web_sys::console;

static INIT: Once = Once::new();

pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.trim_end();
        if line.is_empty() {
            return;
        }
        let line = JsValue::from_str(line);
        match self.level {
            Level::ERROR => console::error_1(&line),
            Level::WARN => console::warn_1(&line),
            _ => console::log_1(&line),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buf: Vec::new(),
        }
    }
}

/// Install the console subscriber. Later calls are no-ops. An unknown level
/// name falls back to INFO.
pub fn init(level: &str) {
    INIT.call_once(|| {
        let max_level = level.trim().parse::<Level>().unwrap_or(Level::INFO);
        let subscriber = tracing_subscriber::fmt()
            .with_writer(MakeConsoleWriter)
            .with_max_level(max_level)
            .with_target(false)
            .without_time()
            .finish();
        // Someone else already owns the global default; keep theirs.
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

#[cfg(feature = "panic-hook")]
pub fn install_panic_hook() {
    console_error_panic_hook::set_once();
}

#[cfg(not(feature = "panic-hook"))]
pub fn install_panic_hook() {}
