// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Location of a captured audio sample.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AudioReference {
    path: PathBuf,
}

impl AudioReference {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the sample can actually be read: the path must name an
    /// existing regular file.
    pub fn is_resolvable(&self) -> bool {
        self.path.is_file()
    }
}

impl fmt::Display for AudioReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl From<PathBuf> for AudioReference {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for AudioReference {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}
