//! Visit log destinations.

use std::{
    fmt,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use crate::{Error, Result};

/// A writer owned by the caller and shared with a logger.
///
/// The logger appends to it while active but never closes it; the caller keeps its own clone
/// of the `Arc` and decides when the stream ends.
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use visitgraph::logger::SharedWriter;
///
/// let buffer = Arc::new(Mutex::new(Vec::<u8>::new()));
/// let writer: SharedWriter = buffer.clone();
/// # let _ = writer;
/// ```
pub type SharedWriter = Arc<Mutex<dyn Write + Send>>;

/// Where a logger's lines go.
///
/// Exactly one destination is active per logger. Only the in-memory variant retains lines that
/// can be read back.
pub(crate) enum Sink {
    /// Lines kept in call order until drained.
    Memory(Vec<String>),
    /// Caller-owned stream, written through and never closed.
    Writer(SharedWriter),
    /// File opened by the logger. `None` once the owning scope has released it.
    File {
        path: PathBuf,
        writer: Option<BufWriter<File>>,
    },
}

/// The observable kind of a logger's destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkMode {
    /// Lines are retained and can be drained
    Memory,
    /// Lines are written through to a caller-owned stream
    Writer,
    /// Lines are written through to a file the logger opened
    File,
}

impl Sink {
    /// Creates (or truncates) the file at `path` and takes ownership of it.
    pub(crate) fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Sink::File {
            path: path.to_path_buf(),
            writer: Some(BufWriter::new(file)),
        })
    }

    pub(crate) const fn mode(&self) -> SinkMode {
        match self {
            Sink::Memory(_) => SinkMode::Memory,
            Sink::Writer(_) => SinkMode::Writer,
            Sink::File { .. } => SinkMode::File,
        }
    }

    pub(crate) fn append(&mut self, line: String) -> Result<()> {
        match self {
            Sink::Memory(lines) => {
                lines.push(line);
                Ok(())
            }
            Sink::Writer(shared) => {
                let mut writer = lock!(shared)?;
                writer.write_all(line.as_bytes())?;
                writer.write_all(b"\n")?;
                Ok(())
            }
            Sink::File { writer, .. } => {
                let writer = writer.as_mut().ok_or(Error::SinkClosed)?;
                writer.write_all(line.as_bytes())?;
                writer.write_all(b"\n")?;
                Ok(())
            }
        }
    }

    pub(crate) fn take_lines(&mut self) -> Result<Vec<String>> {
        match self {
            Sink::Memory(lines) => Ok(std::mem::take(lines)),
            Sink::Writer(_) | Sink::File { .. } => Err(Error::ModeError),
        }
    }

    pub(crate) fn lines(&self) -> Result<Vec<String>> {
        match self {
            Sink::Memory(lines) => Ok(lines.clone()),
            Sink::Writer(_) | Sink::File { .. } => Err(Error::ModeError),
        }
    }

    /// Flushes and closes an owned file. Memory buffers and caller streams are left as they are.
    ///
    /// Returns `true` if a file was closed by this call.
    pub(crate) fn release(&mut self) -> Result<bool> {
        match self {
            Sink::File { writer, .. } => match writer.take() {
                Some(writer) => {
                    // Dropping the file after a successful flush closes it.
                    writer
                        .into_inner()
                        .map_err(|e| Error::FileError(e.into_error()))?;
                    Ok(true)
                }
                None => Ok(false),
            },
            Sink::Memory(_) | Sink::Writer(_) => Ok(false),
        }
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Memory(lines) => f.debug_tuple("Memory").field(&lines.len()).finish(),
            Sink::Writer(_) => f.write_str("Writer"),
            Sink::File { path, writer } => f
                .debug_struct("File")
                .field("path", path)
                .field("open", &writer.is_some())
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_keeps_order() {
        let mut sink = Sink::Memory(Vec::new());
        sink.append("a".to_string()).unwrap();
        sink.append("b".to_string()).unwrap();

        assert_eq!(sink.lines().unwrap(), vec!["a", "b"]);
        assert_eq!(sink.take_lines().unwrap(), vec!["a", "b"]);
        assert!(sink.take_lines().unwrap().is_empty());
        assert!(!sink.release().unwrap());
    }

    #[test]
    fn test_writer_sink_is_not_drainable() {
        let buffer = Arc::new(Mutex::new(Vec::<u8>::new()));
        let mut sink = Sink::Writer(buffer.clone());

        sink.append("root".to_string()).unwrap();
        sink.append("child".to_string()).unwrap();

        assert!(matches!(sink.take_lines(), Err(Error::ModeError)));
        assert!(!sink.release().unwrap());
        assert_eq!(&*buffer.lock().unwrap(), b"root\nchild\n");
    }

    #[test]
    fn test_file_sink_release_closes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visits.log");
        let mut sink = Sink::create(&path).unwrap();
        assert_eq!(sink.mode(), SinkMode::File);

        sink.append("root".to_string()).unwrap();
        assert!(sink.release().unwrap());
        assert!(!sink.release().unwrap());

        assert!(matches!(
            sink.append("late".to_string()),
            Err(Error::SinkClosed)
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "root\n");
    }

    #[test]
    fn test_file_sink_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("visits.log");
        assert!(matches!(Sink::create(&path), Err(Error::FileError(_))));
    }
}
