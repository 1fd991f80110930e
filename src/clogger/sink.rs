//!where log lines end up.
use parking_lot::Mutex;
use std::fmt::Debug;
use std::io::{self, Write};
use std::sync::Arc;

type BoxedWriter = Box<dyn Write + Send>;

///A cloneable handle to a writer. Clones share the writer, and every line is written while
///holding its lock, so lines from one logger never interleave.
#[derive(Clone)]
pub struct Sink {
    writer: Arc<Mutex<BoxedWriter>>,
}

impl Sink {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
    ///writes `line` with a single `write_all`, then flushes.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.flush()
    }
    pub fn flush(&self) -> io::Result<()> {
        self.writer.lock().flush()
    }
}

impl Debug for Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sink").finish_non_exhaustive()
    }
}


#[cfg(test)]
mod tests {
    use super::capture::*;
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clones_share_the_writer() {
        let capture = Capture::default();
        let sink = Sink::new(capture.clone());
        sink.clone().write_line("one\n").unwrap();
        sink.write_line("two\n").unwrap();
        assert_eq!(capture.contents(), "one\ntwo\n");
    }

    #[test]
    fn write_errors_come_back() {
        let err = Sink::new(Broken).write_line("lost\n").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
