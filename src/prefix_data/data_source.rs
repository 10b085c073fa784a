use std::{borrow::Cow, fs, io, path::PathBuf};

use super::{bundled::bundled_file, prefix_file_reader::PrefixDataError};

/// Where the prefix data files are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// The sample data compiled into the crate.
    Bundled,
    /// A data root laid out like `data/` in this repository.
    Directory(PathBuf),
}

impl DataSource {
    /// Returns the file content, or `None` when the file does not exist.
    pub fn read(&self, relative: &str) -> Result<Option<Cow<'static, str>>, PrefixDataError> {
        match self {
            DataSource::Bundled => Ok(bundled_file(relative).map(Cow::Borrowed)),
            DataSource::Directory(root) => match fs::read_to_string(root.join(relative)) {
                Ok(content) => Ok(Some(Cow::Owned(content))),
                Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
                Err(err) => Err(err.into()),
            },
        }
    }
}
