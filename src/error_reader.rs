// Standard Library Imports
use std::io::{self, BufRead, BufReader, ErrorKind, Read};

// External Crate Imports
use color_eyre::{Result, eyre::WrapErr};

// Public API ==========================================================================================================

/// A reader for simple delimited formats that doesn't make the caller check every single read.
///
/// Each read records whether it failed. A failed read returns an empty value (`""` or `0`), and the error can be
/// checked once at the end with `ErrorReader.check()`.
#[derive(Debug)]
pub struct ErrorReader<R> {
    reader: R,
    error: Option<io::Error>,
}

impl<R: Read> ErrorReader<BufReader<R>> {
    pub fn new(reader: R) -> Self {
        Self::from_buf_read(BufReader::new(reader))
    }
}

impl<R: BufRead> ErrorReader<R> {
    pub const fn from_buf_read(reader: R) -> Self {
        Self {
            reader,
            error: None,
        }
    }

    /// Reads up to and including `delim`, returning everything before it. Running out of input before the delimiter
    /// counts as a failure.
    pub fn read_string(&mut self, delim: u8) -> String {
        let result = self.try_read_string(delim);
        self.record(result)
    }

    pub fn read_byte(&mut self) -> u8 {
        let mut byte = [0];
        let result = self.reader.read_exact(&mut byte).map(|()| byte[0]);
        self.record(result)
    }

    /// The error from the most recent read, if it failed.
    #[must_use]
    pub const fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    pub fn check(&mut self) -> Result<()> {
        match self.error.take() {
            Some(error) => Err(error).wrap_err("failed to read from the stream"),
            None => Ok(()),
        }
    }

    fn try_read_string(&mut self, delim: u8) -> io::Result<String> {
        let mut bytes = Vec::new();
        self.reader.read_until(delim, &mut bytes)?;

        if bytes.pop() != Some(delim) {
            return Err(io::Error::new(
                ErrorKind::UnexpectedEof,
                "reached the end of the stream before the delimiter",
            ));
        }

        String::from_utf8(bytes).map_err(|error| io::Error::new(ErrorKind::InvalidData, error))
    }

    fn record<T: Default>(&mut self, result: io::Result<T>) -> T {
        match result {
            Ok(value) => {
                self.error = None;
                value
            }
            Err(error) => {
                self.error = Some(error);
                T::default()
            }
        }
    }
}

// Unit Tests ==========================================================================================================
