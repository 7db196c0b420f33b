//! The event journal: the only point of total ordering in a run.
//!
//! Every actor event becomes one line `"<n>: <body>"`. The sequence counter
//! and the sink share one lock, so sequence numbers start at 1, never repeat
//! and never skip, and line `n` is flushed before anyone can write `n + 1`.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
#[cfg(test)]
use std::sync::Arc;

use parking_lot::Mutex;

use crate::actor::messages::Event;
use crate::core::WorkshopError;

// ============================================================================
// Sinks
// ============================================================================

/// Destination of journal lines.
pub trait LineSink: Send {
    /// Append one line (without trailing newline) and make it durable.
    fn append_line(&mut self, line: &str) -> io::Result<()>;
}

/// Journal file, flushed after every line.
pub struct FileSink {
    writer: BufWriter<File>,
}

impl FileSink {
    /// Open `path`, truncating it unless `append` is set.
    pub fn open(path: &Path, append: bool) -> Result<Self, WorkshopError> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(path)
            .map_err(|source| WorkshopError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl LineSink for FileSink {
    fn append_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()
    }
}

/// In-memory sink; clones share the same buffer.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

#[cfg(test)]
impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every line written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

#[cfg(test)]
impl LineSink for MemorySink {
    fn append_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.lock().push(line.to_owned());
        Ok(())
    }
}

// ============================================================================
// Journal
// ============================================================================

struct Inner {
    sink: Box<dyn LineSink>,
    sequence: u64,
}

/// Serialized, strictly ordered event writer.
pub struct Journal {
    inner: Mutex<Inner>,
}

impl Journal {
    pub fn new(sink: Box<dyn LineSink>) -> Self {
        Self {
            inner: Mutex::new(Inner { sink, sequence: 0 }),
        }
    }

    /// Write `event` as the next line and return its sequence number.
    ///
    /// A failed write does not consume a sequence number.
    pub fn emit(&self, event: Event) -> io::Result<u64> {
        let mut inner = self.inner.lock();
        let sequence = inner.sequence + 1;
        inner.sink.append_line(&format!("{sequence}: {event}"))?;
        inner.sequence = sequence;
        Ok(sequence)
    }

    /// Sequence number of the last line written (0 before the first).
    pub fn sequence(&self) -> u64 {
        self.inner.lock().sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::messages::{ElfEvent, ReindeerEvent, SantaEvent};
    use std::thread;

    #[test]
    fn test_emit_formats_lines() {
        let sink = MemorySink::new();
        let journal = Journal::new(Box::new(sink.clone()));

        assert_eq!(journal.emit(Event::Santa(SantaEvent::Sleeping)).unwrap(), 1);
        assert_eq!(journal.emit(Event::Elf(1, ElfEvent::Started)).unwrap(), 2);
        assert_eq!(
            journal
                .emit(Event::Reindeer(2, ReindeerEvent::ReturnHome))
                .unwrap(),
            3
        );

        assert_eq!(
            sink.lines(),
            ["1: Santa: going to sleep", "2: Elf 1: started", "3: RD 2: return home"]
        );
        assert_eq!(journal.sequence(), 3);
    }

    #[test]
    fn test_concurrent_sequence_is_contiguous() {
        let sink = MemorySink::new();
        let journal = Arc::new(Journal::new(Box::new(sink.clone())));

        let writers: Vec<_> = (1..=8)
            .map(|id| {
                let journal = Arc::clone(&journal);
                thread::spawn(move || {
                    for _ in 0..50 {
                        journal.emit(Event::Elf(id, ElfEvent::NeedHelp)).unwrap();
                    }
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        let numbers: Vec<u64> = sink
            .lines()
            .iter()
            .map(|line| line.split(':').next().unwrap().parse().unwrap())
            .collect();
        assert_eq!(numbers, (1..=400).collect::<Vec<u64>>());
    }

    struct BrokenSink;

    impl LineSink for BrokenSink {
        fn append_line(&mut self, _: &str) -> io::Result<()> {
            Err(io::Error::other("disk full"))
        }
    }

    #[test]
    fn test_failed_write_keeps_sequence() {
        let journal = Journal::new(Box::new(BrokenSink));
        assert!(journal.emit(Event::Santa(SantaEvent::Closing)).is_err());
        assert_eq!(journal.sequence(), 0);
    }

    #[test]
    fn test_file_sink_truncates_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proj2.out");
        std::fs::write(&path, "stale\n").unwrap();

        let journal = Journal::new(Box::new(FileSink::open(&path, false).unwrap()));
        journal.emit(Event::Santa(SantaEvent::Sleeping)).unwrap();

        // flushed per line, visible before the journal is dropped
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "1: Santa: going to sleep\n");
    }

    #[test]
    fn test_file_sink_append() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proj2.out");
        std::fs::write(&path, "previous run\n").unwrap();

        let journal = Journal::new(Box::new(FileSink::open(&path, true).unwrap()));
        journal.emit(Event::Elf(3, ElfEvent::GetHelp)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "previous run\n1: Elf 3: get help\n");
    }

    #[test]
    fn test_file_sink_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("proj2.out");

        let err = FileSink::open(&path, false).err().unwrap();
        assert!(matches!(err, WorkshopError::Io { .. }));
    }
}
