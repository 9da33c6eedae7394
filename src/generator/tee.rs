//! Writer that duplicates every byte into an optional second sink.

use flate2::write::GzEncoder;
use std::io::{self, Write};

/// Which side of a [`TeeWriter`] an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    Primary,
    Secondary,
}

pub struct TeeWriter<A: Write, B: Write> {
    primary: A,
    secondary: Option<B>,
    failed: Option<Sink>,
}

impl<A: Write, B: Write> TeeWriter<A, B> {
    pub fn new(primary: A, secondary: Option<B>) -> Self {
        Self {
            primary,
            secondary,
            failed: None,
        }
    }

    /// The sink that returned the first error, if any.
    pub fn failed(&self) -> Option<Sink> {
        self.failed
    }

    pub fn into_inner(self) -> (A, Option<B>) {
        (self.primary, self.secondary)
    }

    fn mark<T>(&mut self, sink: Sink, result: io::Result<T>) -> io::Result<T> {
        if result.is_err() && self.failed.is_none() {
            self.failed = Some(sink);
        }
        result
    }
}

impl<A: Write, B: Write> Write for TeeWriter<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let result = self.primary.write(buf);
        let written = self.mark(Sink::Primary, result)?;
        if let Some(secondary) = &mut self.secondary {
            let result = secondary.write_all(&buf[..written]);
            self.mark(Sink::Secondary, result)?;
        }
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        let result = self.primary.flush();
        self.mark(Sink::Primary, result)?;
        if let Some(secondary) = &mut self.secondary {
            let result = secondary.flush();
            self.mark(Sink::Secondary, result)?;
        }
        Ok(())
    }
}

impl<A: Write, W: Write> TeeWriter<A, GzEncoder<W>> {
    /// Flush the plain sink, write the gzip trailer and flush beneath it.
    pub fn finish(&mut self) -> io::Result<()> {
        let result = self.primary.flush();
        self.mark(Sink::Primary, result)?;
        if let Some(encoder) = &mut self.secondary {
            let result = encoder
                .try_finish()
                .and_then(|()| encoder.get_mut().flush());
            self.mark(Sink::Secondary, result)?;
        }
        Ok(())
    }
}
