//! Output destination and color mode shared by crayons.
//!
//! An [`Output`] is a cheap, clonable handle to a sink plus a monochrome
//! flag. Every clone refers to the same sink and the same flag, so swapping
//! the sink or turning monochrome on affects every crayon built against it.
//!
//! The handle does not serialize whole draw operations: a crayon writes its
//! start sequence, its text and its reset sequence as three separate writes,
//! and writes from other holders of the handle may land in between.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::style::{Crayon, Style};

/// How an [`Output`] decides whether to emit escape sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Style only when stdout is an interactive terminal.
    ///
    /// Detection goes through `console`, which also honors the `CLICOLOR`
    /// and `CLICOLOR_FORCE` environment variables.
    #[default]
    Auto,
    /// Always emit escape sequences.
    Term,
    /// Never emit escape sequences.
    Text,
}

impl OutputMode {
    /// Resolves the mode to a concrete decision.
    pub fn should_use_color(self) -> bool {
        match self {
            OutputMode::Auto => {
                let enabled = console::colors_enabled();
                tracing::debug!(enabled, "detected terminal color support");
                enabled
            }
            OutputMode::Term => true,
            OutputMode::Text => false,
        }
    }
}

type Sink = Box<dyn Write + Send>;

struct Shared {
    sink: Mutex<Sink>,
    monochrome: AtomicBool,
}

/// Shared destination for everything crayons draw.
///
/// # Example
///
/// ```rust
/// use crayons::{Output, Style};
///
/// let (output, capture) = Output::capture(false);
/// let crayon = output.crayon([Style::Bold]);
///
/// crayon.print("hi").unwrap();
/// assert_eq!(capture.contents(), "\x1b[1mhi\x1b[0m");
/// ```
#[derive(Clone)]
pub struct Output {
    shared: Arc<Shared>,
}

impl Output {
    /// Creates an output writing to `sink`.
    ///
    /// When `monochrome` is true no crayon built on this output will emit
    /// escape sequences, whatever its own setting.
    pub fn new<W: Write + Send + 'static>(sink: W, monochrome: bool) -> Self {
        Self {
            shared: Arc::new(Shared {
                sink: Mutex::new(Box::new(sink)),
                monochrome: AtomicBool::new(monochrome),
            }),
        }
    }

    /// Creates an output whose monochrome flag is derived from `mode`.
    ///
    /// The mode is resolved once, here.
    pub fn with_mode<W: Write + Send + 'static>(sink: W, mode: OutputMode) -> Self {
        Self::new(sink, !mode.should_use_color())
    }

    /// Creates an output on stdout, monochrome unless stdout is a terminal.
    pub fn stdout() -> Self {
        Self::with_mode(io::stdout(), OutputMode::Auto)
    }

    /// Creates an output backed by an in-memory buffer.
    ///
    /// The returned [`Capture`] reads back what was written.
    pub fn capture(monochrome: bool) -> (Self, Capture) {
        let capture = Capture::default();
        let output = Self::new(capture.clone(), monochrome);
        (output, capture)
    }

    /// Builds a crayon drawing to this output.
    pub fn crayon<I>(&self, styles: I) -> Crayon
    where
        I: IntoIterator<Item = Style>,
    {
        Crayon::new(self, styles)
    }

    /// Replaces the sink for every holder of this handle.
    ///
    /// Whatever the old sink buffered is flushed first; a flush error is
    /// returned and the swap still happens.
    pub fn set_sink<W: Write + Send + 'static>(&self, sink: W) -> io::Result<()> {
        let mut guard = self.lock()?;
        let flushed = guard.flush();
        *guard = Box::new(sink);
        tracing::debug!("swapped output sink");
        flushed
    }

    /// Returns true when styling is suppressed for every crayon on this output.
    pub fn is_monochrome(&self) -> bool {
        self.shared.monochrome.load(Ordering::Relaxed)
    }

    /// Turns the output-wide monochrome override on or off.
    pub fn set_monochrome(&self, monochrome: bool) {
        self.shared.monochrome.store(monochrome, Ordering::Relaxed);
    }

    /// Writes all of `text` to the sink, returning the number of bytes written.
    pub fn write_str(&self, text: &str) -> io::Result<usize> {
        let mut guard = self.lock()?;
        guard.write_all(text.as_bytes())?;
        Ok(text.len())
    }

    /// Flushes the sink.
    pub fn flush(&self) -> io::Result<()> {
        self.lock()?.flush()
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, Sink>> {
        self.shared
            .sink
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "output sink lock poisoned"))
    }
}

impl std::fmt::Debug for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Output")
            .field("monochrome", &self.is_monochrome())
            .finish_non_exhaustive()
    }
}

/// In-memory sink returned by [`Output::capture`].
#[derive(Debug, Clone, Default)]
pub struct Capture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Capture {
    /// Returns everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes()).into_owned()
    }

    /// Returns everything written so far and clears the buffer.
    pub fn take(&self) -> String {
        let bytes = match self.buffer.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        };
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Number of bytes captured.
    pub fn len(&self) -> usize {
        self.bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn bytes(&self) -> Vec<u8> {
        match self.buffer.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .buffer
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "capture buffer lock poisoned"))?;
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
