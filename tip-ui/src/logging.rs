//! Process-wide tracing setup.
//!
//! Two layers share one reloadable level filter: a stdout layer that can be
//! muted at runtime, and a file layer that discards records until a file is
//! attached with [`enable_file_logging`].

use anyhow::{Context as _, Result, anyhow, bail};
use chrono::Local;
use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};
use tracing::{Event, Level, Subscriber, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

use crate::config::LoggingConfig;

const DEFAULT_DIRECTIVES: &str = "info,tip_ui=debug,tip_core=debug";

// --- Formatter ---

/// `<local time> <LEVEL> <file:line> <fields>`, colored when writing to a terminal.
struct LineFormat;

fn level_color(level: Level) -> &'static str {
    match level {
        Level::ERROR => "\x1b[1;31m",
        Level::WARN => "\x1b[1;33m",
        Level::INFO => "\x1b[1;32m",
        Level::DEBUG => "\x1b[1;34m",
        Level::TRACE => "\x1b[1;35m",
    }
}

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");

        if ansi {
            write!(
                writer,
                "\x1b[2m{timestamp}\x1b[0m {}{:>5}\x1b[0m ",
                level_color(*meta.level()),
                meta.level()
            )?;
        } else {
            write!(writer, "{timestamp} {:>5} ", meta.level())?;
        }

        let file = meta.file().map(|f| {
            f.strip_prefix("src/")
                .or_else(|| f.strip_prefix("src\\"))
                .unwrap_or(f)
        });
        if let (Some(file), Some(line)) = (file, meta.line()) {
            if ansi {
                write!(writer, "\x1b[36m{file}:{line}\x1b[0m ")?;
            } else {
                write!(writer, "{file}:{line} ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Late-bound file writer ---

type SharedFile = Arc<Mutex<Option<File>>>;

fn lock_file(slot: &SharedFile) -> MutexGuard<'_, Option<File>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Writer target that can be pointed at a file after initialization.
/// While no file is set, all writes are discarded.
#[derive(Clone)]
struct FileSlot(SharedFile);

struct SlotWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for SlotWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match self.0.as_mut() {
            Some(f) => f.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.0.as_mut() {
            Some(f) => f.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for FileSlot {
    type Writer = SlotWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SlotWriter(lock_file(&self.0))
    }
}

// --- Runtime handles ---

type ReloadFn = Box<dyn Fn(EnvFilter) -> Result<()> + Send + Sync>;

struct LogHandles {
    level: ReloadFn,
    stdout_gate: ReloadFn,
    file: SharedFile,
}

static HANDLES: OnceLock<LogHandles> = OnceLock::new();
static APP_NAME: OnceLock<String> = OnceLock::new();

fn reload_fn<S>(
    handle: reload::Handle<EnvFilter, S>,
    what: &'static str,
) -> ReloadFn
where
    S: Subscriber + Send + Sync + 'static,
{
    Box::new(move |filter| {
        handle
            .reload(filter)
            .map_err(|e| anyhow!("{what} reload failed: {e}"))
    })
}

fn handles() -> Result<&'static LogHandles> {
    HANDLES
        .get()
        .ok_or_else(|| anyhow!("logging not yet initialized"))
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

// --- Public API ---

/// Changes the active log filter at runtime.
/// Accepts a bare level ("error", "warn", "info", "debug", "trace")
/// or any full EnvFilter directive.
pub fn set_log_level(level: &str) -> Result<()> {
    let filter =
        EnvFilter::try_new(level).map_err(|e| anyhow!("invalid log level '{level}': {e}"))?;
    (handles()?.level)(filter)
}

/// Shows or hides stdout log output without affecting file logging.
pub fn set_stdout_enabled(enabled: bool) -> Result<()> {
    // "trace" passes everything through; the level filter is still the ceiling.
    let gate = if enabled { "trace" } else { "off" };
    (handles()?.stdout_gate)(EnvFilter::new(gate))
}

/// Starts appending log output to `path`, replacing any open log file.
/// The directory must already exist.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let handles = handles()?;
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;

    *lock_file(&handles.file) = Some(file);
    Ok(())
}

/// Closes the current log file. Subsequent records go to stdout only
/// (if stdout is enabled).
pub fn disable_file_logging() {
    if let Some(handles) = HANDLES.get() {
        *lock_file(&handles.file) = None;
    }
}

/// Returns the process name derived from the executable path,
/// falling back to "tip-split".
pub fn app_name() -> &'static str {
    APP_NAME.get_or_init(|| {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "tip-split".to_string())
    })
}

/// Installs the global subscriber. Later calls are no-ops.
///
/// - Stdout: colored when attached to a terminal, plain when piped.
/// - File: inactive until `enable_file_logging()` is called.
/// - Level: `RUST_LOG` if set, otherwise info with debug for this workspace.
pub fn init_default_logging() {
    let _ = app_name();

    let file: SharedFile = Arc::new(Mutex::new(None));

    let (stdout_gate, stdout_handle) = reload::Layer::new(EnvFilter::new("trace"));
    let (level_filter, level_handle) = reload::Layer::new(default_filter());

    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(LineFormat)
        .with_ansi(io::stdout().is_terminal())
        .with_filter(stdout_gate);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(LineFormat)
        .with_ansi(false)
        .with_writer(FileSlot(file.clone()));

    if tracing_subscriber::registry()
        .with(level_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .is_ok()
    {
        let _ = HANDLES.set(LogHandles {
            level: reload_fn(level_handle, "level"),
            stdout_gate: reload_fn(stdout_handle, "stdout"),
            file,
        });
    }
}

/// Initializes logging and applies the configured level, stdout gate and file.
///
/// An explicit `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    init_default_logging();

    if std::env::var_os("RUST_LOG").is_none() {
        set_log_level(&config.level)?;
    }
    set_stdout_enabled(config.stdout)?;

    if let Some(path) = &config.file {
        if path.as_os_str().is_empty() {
            bail!("log file path is empty");
        }
        enable_file_logging(path)?;
    }

    info!(app = app_name(), level = %config.level, "logging initialized");
    Ok(())
}
