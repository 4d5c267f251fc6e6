//! Transparent visit logging.
//!
//! A [`VisitLogger`] records one formatted line each time a node's identifier, content or child
//! list is read through the observed accessors of [`Node`]. Callers do not pass the logger to
//! the code doing the reads; they activate it for a scope instead, and every read made on the
//! same thread while the scope is open is reported to it.
//!
//! # Scoping
//!
//! Activation follows a stack discipline per thread:
//!
//! - [`VisitLogger::activate`] makes the logger current and returns a [`LoggerScope`] guard
//! - Opening a second scope on top routes events to the inner logger only
//! - Ending the inner scope restores the outer logger
//! - Other threads are unaffected and have their own stacks
//!
//! [`VisitLogger::scope`] wraps the same sequence around a closure.
//!
//! # Sinks
//!
//! | Constructor | Destination | Drainable | Closed on scope exit |
//! |-------------|-------------|-----------|----------------------|
//! | [`VisitLogger::in_memory`] | internal buffer | yes | no |
//! | [`VisitLogger::to_writer`] | caller's [`SharedWriter`] | no | no |
//! | [`VisitLogger::to_path`] | file created by the logger | no | yes |
//!
//! Writes to one sink are serialized by a mutex, so loggers may be shared across threads.
//!
//! # Examples
//!
//! ```rust
//! use visitgraph::{NodeGraph, SearchQuery, VisitLogger};
//!
//! let mut graph = NodeGraph::new();
//! let root = graph.add_node("root", 0);
//! let child = graph.add_node("child", 1);
//! graph.add_child(root, child)?;
//!
//! let logger = VisitLogger::with_template("{id}:{content}")?;
//! {
//!     let _scope = logger.activate();
//!     graph.search(root, &SearchQuery::by_content(1))?;
//! }
//!
//! assert_eq!(logger.drain()?, vec!["root:0", "root:0", "child:1"]);
//! # Ok::<(), visitgraph::Error>(())
//! ```

mod scope;
mod sink;
mod template;

pub use scope::{current, depth, LoggerScope};
pub use sink::{SharedWriter, SinkMode};
pub use template::{Field, Template, DEFAULT_TEMPLATE};

use std::{
    fmt,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use crate::{graph::Node, Result};
use sink::Sink;
use template::FieldValues;

/// Where a configured logger should write.
#[derive(Clone, Default)]
pub enum SinkConfig {
    /// Keep lines in memory until drained
    #[default]
    Memory,
    /// Create the file at this path, write to it and close it when the scope ends
    Path(PathBuf),
    /// Write to a caller-owned stream that is never closed by the logger
    Writer(SharedWriter),
}

impl fmt::Debug for SinkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkConfig::Memory => f.write_str("Memory"),
            SinkConfig::Path(path) => f.debug_tuple("Path").field(path).finish(),
            SinkConfig::Writer(_) => f.write_str("Writer"),
        }
    }
}

/// Configuration for a [`VisitLogger`].
///
/// The default configuration logs each visit's identifier to memory.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Line template, `{id}` by default. See [`Template`] for the syntax.
    pub template: String,

    /// Destination for rendered lines.
    pub sink: SinkConfig,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig {
            template: DEFAULT_TEMPLATE.to_string(),
            sink: SinkConfig::Memory,
        }
    }
}

struct LoggerInner {
    template: Template,
    mode: SinkMode,
    sink: Mutex<Sink>,
}

/// Records node visits into a sink while activated.
///
/// `VisitLogger` is a cheap handle: clones share the same template and sink, which is what
/// lets the thread-local scope stack hold it while the caller keeps a copy to drain.
#[derive(Clone)]
pub struct VisitLogger {
    inner: Arc<LoggerInner>,
}

impl VisitLogger {
    fn new(template: Template, sink: Sink) -> Self {
        VisitLogger {
            inner: Arc::new(LoggerInner {
                template,
                mode: sink.mode(),
                sink: Mutex::new(sink),
            }),
        }
    }

    /// Creates a logger from a [`LoggerConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateSyntax`](crate::Error::TemplateSyntax) for a malformed template
    /// and [`Error::FileError`](crate::Error::FileError) if a path sink cannot be created.
    pub fn from_config(config: LoggerConfig) -> Result<Self> {
        let template = Template::parse(&config.template)?;
        let sink = match config.sink {
            SinkConfig::Memory => Sink::Memory(Vec::new()),
            SinkConfig::Path(path) => Sink::create(&path)?,
            SinkConfig::Writer(writer) => Sink::Writer(writer),
        };
        Ok(Self::new(template, sink))
    }

    /// Creates an in-memory logger with the default `{id}` template.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Template::default(), Sink::Memory(Vec::new()))
    }

    /// Creates an in-memory logger with a custom template.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateSyntax`](crate::Error::TemplateSyntax) for a malformed template.
    pub fn with_template(template: &str) -> Result<Self> {
        Ok(Self::new(Template::parse(template)?, Sink::Memory(Vec::new())))
    }

    /// Creates a logger writing through to a caller-owned stream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateSyntax`](crate::Error::TemplateSyntax) for a malformed template.
    pub fn to_writer(writer: SharedWriter, template: &str) -> Result<Self> {
        Ok(Self::new(Template::parse(template)?, Sink::Writer(writer)))
    }

    /// Creates (or truncates) the file at `path` and logs into it.
    ///
    /// The file belongs to the logger and is closed when the first scope activating this logger
    /// ends. Lines recorded after that fail with [`Error::SinkClosed`](crate::Error::SinkClosed).
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileError`](crate::Error::FileError) if the file cannot be created and
    /// [`Error::TemplateSyntax`](crate::Error::TemplateSyntax) for a malformed template.
    pub fn to_path(path: impl Into<PathBuf>, template: &str) -> Result<Self> {
        Self::from_config(LoggerConfig {
            template: template.to_string(),
            sink: SinkConfig::Path(path.into()),
        })
    }

    /// Returns the kind of sink this logger writes to.
    #[must_use]
    pub fn mode(&self) -> SinkMode {
        self.inner.mode
    }

    /// Returns the template lines are rendered with.
    #[must_use]
    pub fn template(&self) -> &Template {
        &self.inner.template
    }

    /// Returns `true` if both handles refer to the same logger.
    #[must_use]
    pub fn same_as(&self, other: &VisitLogger) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Makes this logger the current one on the calling thread until the scope ends.
    pub fn activate(&self) -> LoggerScope {
        LoggerScope::enter(self.clone())
    }

    /// Runs `f` with this logger active and ends the scope afterwards.
    ///
    /// The scope is ended on every exit path. An error from `f` takes precedence over an error
    /// from closing the owned file.
    ///
    /// # Errors
    ///
    /// Returns the error of `f`, or the error of ending the scope (see [`LoggerScope::finish`]).
    pub fn scope<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce() -> Result<R>,
    {
        let scope = self.activate();
        let outcome = f();
        let ended = scope.finish();
        let value = outcome?;
        ended?;
        Ok(value)
    }

    /// Renders the node's current `id`, `content` and `visited` values and appends the line.
    ///
    /// This reads the node's fields directly, so recording never recurses into the logger.
    ///
    /// # Errors
    ///
    /// - [`Error::FormatError`](crate::Error::FormatError) if the template names an unknown field
    /// - [`Error::FileError`](crate::Error::FileError) if writing to the sink fails
    /// - [`Error::SinkClosed`](crate::Error::SinkClosed) if the owned file was already closed
    /// - [`Error::LockError`](crate::Error::LockError) if a sink lock is poisoned
    pub fn record_visit<T: fmt::Display>(&self, node: &Node<T>) -> Result<()> {
        let line = self.inner.template.render(&FieldValues {
            id: &node.id,
            content: &node.content,
            visited: node.visited,
        })?;
        lock!(self.inner.sink)?.append(line)
    }

    /// Removes and returns the recorded lines, in call order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModeError`](crate::Error::ModeError) unless the logger is in memory mode.
    pub fn drain(&self) -> Result<Vec<String>> {
        lock!(self.inner.sink)?.take_lines()
    }

    /// Returns a copy of the recorded lines without removing them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModeError`](crate::Error::ModeError) unless the logger is in memory mode.
    pub fn lines(&self) -> Result<Vec<String>> {
        lock!(self.inner.sink)?.lines()
    }

    pub(crate) fn release(&self) -> Result<()> {
        if lock!(self.inner.sink)?.release()? {
            tracing::debug!("visit log file closed");
        }
        Ok(())
    }
}

impl fmt::Debug for VisitLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisitLogger")
            .field("template", &self.inner.template.source())
            .field("mode", &self.inner.mode)
            .finish()
    }
}
