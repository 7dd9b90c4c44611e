use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing::Level;

use crate::error::FolioError;

/// Where log lines go. The terminal belongs to the UI, so without a file
/// they are dropped.
#[derive(Clone, Debug)]
pub enum LogSink {
    File(Arc<Mutex<File>>),
    Discard,
}

impl LogSink {
    pub fn open(path: Option<&Path>) -> Result<Self, FolioError> {
        match path {
            Some(path) => File::create(path)
                .map(|file| LogSink::File(Arc::new(Mutex::new(file))))
                .map_err(|source| FolioError::LogFile {
                    path: path.to_path_buf(),
                    source,
                }),
            None => Ok(LogSink::Discard),
        }
    }
}

pub struct DelegatingWriter {
    sink: LogSink,
}

impl Write for DelegatingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &self.sink {
            LogSink::File(file) => match file.lock() {
                Ok(mut file) => file.write(buf),
                Err(_) => Ok(buf.len()),
            },
            LogSink::Discard => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &self.sink {
            LogSink::File(file) => match file.lock() {
                Ok(mut file) => file.flush(),
                Err(_) => Ok(()),
            },
            LogSink::Discard => Ok(()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SubscriberMakeWriter {
    sink: LogSink,
}

impl SubscriberMakeWriter {
    pub fn new(sink: LogSink) -> Self {
        Self { sink }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SubscriberMakeWriter {
    type Writer = DelegatingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        DelegatingWriter {
            sink: self.sink.clone(),
        }
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// leave the first subscriber in place.
pub fn init(sink: LogSink, level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(SubscriberMakeWriter::new(sink))
        .with_ansi(false)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn discard_swallows_everything() {
        let make = SubscriberMakeWriter::new(LogSink::Discard);
        let mut w = make.make_writer();
        assert_eq!(w.write(b"hello").unwrap(), 5);
        w.flush().unwrap();
    }

    #[test]
    fn file_sink_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.log");
        let sink = LogSink::open(Some(&path)).unwrap();
        let make = SubscriberMakeWriter::new(sink);
        make.make_writer().write_all(b"window opened\n").unwrap();
        make.make_writer().write_all(b"window closed\n").unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "window opened\nwindow closed\n");
    }

    #[test]
    fn unwritable_log_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("folio.log");
        let err = LogSink::open(Some(&path)).unwrap_err();
        assert!(matches!(err, FolioError::LogFile { .. }));
    }
}
