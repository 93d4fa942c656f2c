//! Lets Display impls reuse io::Write-generic writers.
//!
//! Value::write_pair is written against io::Write so the same code can drive
//! stdout and colored output, while fmt::Display hands us a fmt::Write.

use std::str::from_utf8;
use std::{fmt, io};


pub struct FmtIoAdapter<'a, F: fmt::Write> {
    fmt_writer: &'a mut F,
}

impl<'a, F: fmt::Write> FmtIoAdapter<'a, F> {
    pub fn new(fmt_writer: &'a mut F) -> Self {
        Self { fmt_writer }
    }
}


impl<'a, F: fmt::Write> io::Write for FmtIoAdapter<'a, F> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        let utf = match from_utf8(bytes) {
            Ok(s) => s,
            Err(err) => return Err(io::Error::new(io::ErrorKind::InvalidData, err)),
        };

        match self.fmt_writer.write_str(utf) {
            Ok(()) => Ok(utf.len()),
            Err(err) => Err(io::Error::new(io::ErrorKind::Other, err)),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
