//! Traits for reading and writing line-oriented files.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Cursor, Write},
    path::Path,
};

use crate::error::Error;

/// A file that can be decoded from a reader and encoded to a writer.
///
/// The path-based helpers attach the path to any I/O error, so callers can
/// tell which file failed.
///
/// # Example
///
/// ```rust,no_run
/// use transfmt::{EolStyle, TranslationFile, traits::LineCodec};
///
/// let mut file = TranslationFile::read_from("Resources_de.properties")?;
/// file.eol = EolStyle::Unix;
/// file.write_to("Resources_de.properties")?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait LineCodec {
    /// Decode from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Decode from file path.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::file(path, e))?;
        Self::from_reader(BufReader::new(file)).map_err(|e| attach_path(e, path))
    }

    /// Encode to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Encode to file path, replacing its content.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::file(path, e))?;
        self.to_writer(BufWriter::new(file))
            .map_err(|e| attach_path(e, path))
    }

    /// Decode from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }
}

fn attach_path(error: Error, path: &Path) -> Error {
    match error {
        Error::Io(source) => Error::file(path, source),
        other => other,
    }
}
