use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::json::{self, Json, JsonSerializable};

/// Base directory of the bundled game data.
pub const DATA_DIR: &str = "data";

/// The folder holding the bundled game data.
pub fn root() -> Folder {
    Folder::new(DATA_DIR)
}

/// A directory that opens files by name relative to itself.
///
/// Failing to open a file is a normal outcome: the `open_*` and `with_*`
/// methods report it as `None` and never as an error. Only documents that
/// cannot be parsed or written surface as [`json::JsonError`].
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Folder {
    path: PathBuf,
}

impl Folder {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Folder { path: path.into() }
    }

    /// The sub-folder `name` of this folder.
    pub fn folder<P: AsRef<Path>>(&self, name: P) -> Folder {
        Folder {
            path: self.path.join(name),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn path_of<P: AsRef<Path>>(&self, name: P) -> PathBuf {
        self.path.join(name)
    }

    pub fn open_input<P: AsRef<Path>>(&self, name: P) -> Option<BufReader<File>> {
        let path = self.path_of(name);
        match File::open(&path) {
            Ok(file) => Some(BufReader::new(file)),
            Err(e) => {
                debug!("cannot open {} for input: {}", path.display(), e);
                None
            }
        }
    }

    pub fn open_output<P: AsRef<Path>>(&self, name: P) -> Option<BufWriter<File>> {
        let path = self.path_of(name);
        match File::create(&path) {
            Ok(file) => Some(BufWriter::new(file)),
            Err(e) => {
                debug!("cannot open {} for output: {}", path.display(), e);
                None
            }
        }
    }

    /// Runs `action` on the opened file and returns its result, or returns
    /// `None` without calling it if the file cannot be opened. The file is
    /// closed when this returns.
    pub fn with_input<P, F, R>(&self, name: P, action: F) -> Option<R>
    where
        P: AsRef<Path>,
        F: FnOnce(&mut BufReader<File>) -> R,
    {
        let mut input = self.open_input(name)?;
        Some(action(&mut input))
    }

    /// Output counterpart of [`with_input`](Self::with_input). The stream is
    /// flushed after `action` returns; a failed flush replaces the action's
    /// result with the I/O error, since buffered bytes never reached the file.
    pub fn with_output<P, F, R>(&self, name: P, action: F) -> Option<io::Result<R>>
    where
        P: AsRef<Path>,
        F: FnOnce(&mut BufWriter<File>) -> R,
    {
        let mut output = self.open_output(name.as_ref())?;
        let result = action(&mut output);
        match output.flush() {
            Ok(()) => Some(Ok(result)),
            Err(e) => {
                warn!("failed to flush {}: {}", self.path_of(name).display(), e);
                Some(Err(e))
            }
        }
    }

    /// Reads the document `name`. `Ok(None)` means the file could not be
    /// opened; a file that opens but does not parse is an error.
    pub fn read_json<P: AsRef<Path>>(&self, name: P) -> json::Result<Option<Json>> {
        self.with_input(name, |input| json::read(input)).transpose()
    }

    /// Writes `doc` to `name`. `Ok(false)` means the file could not be opened.
    pub fn write_json<P: AsRef<Path>>(&self, name: P, doc: &Json) -> json::Result<bool> {
        match self.with_output(name, |output| json::write(output, doc)) {
            Some(written) => {
                written??;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Restores `value` from the document `name`. Returns `Ok(false)`, and
    /// leaves `value` untouched, if the file could not be opened.
    pub fn read_into<P, S>(&self, name: P, value: &mut S) -> json::Result<bool>
    where
        P: AsRef<Path>,
        S: JsonSerializable + ?Sized,
    {
        self.with_input(name, |input| json::read_into(input, value))
            .transpose()
            .map(|read| read.is_some())
    }

    /// Serializes `value` into the document `name`. Returns `Ok(false)` if the
    /// file could not be opened.
    pub fn write_from<P, S>(&self, name: P, value: &S) -> json::Result<bool>
    where
        P: AsRef<Path>,
        S: JsonSerializable + ?Sized,
    {
        self.write_json(name, &value.serialize())
    }
}

impl From<PathBuf> for Folder {
    fn from(path: PathBuf) -> Self {
        Folder::new(path)
    }
}

impl From<&Path> for Folder {
    fn from(path: &Path) -> Self {
        Folder::new(path)
    }
}
