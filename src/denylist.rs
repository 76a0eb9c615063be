//! Common-password denylist
//!
//! The default list is compiled into the crate and parsed once on first use.
//! Operators can load their own list from a file instead and pass it to
//! [`evaluate_with_denylist`](crate::evaluate_with_denylist).

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

/// Environment variable naming an operator-supplied denylist file.
pub const DENYLIST_PATH_ENV: &str = "PWD_GUARD_DENYLIST_PATH";

const EMBEDDED_DENYLIST: &str = include_str!("../assets/common-passwords.txt");

static DEFAULT_DENYLIST: LazyLock<Denylist> = LazyLock::new(|| {
    let denylist = Denylist::embedded();

    #[cfg(feature = "tracing")]
    tracing::info!("Denylist initialized: {} embedded passwords", denylist.len());

    denylist
});

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// Immutable set of frequently used passwords, stored lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Denylist {
    entries: HashSet<String>,
}

impl Denylist {
    /// The list shipped with the crate.
    pub fn embedded() -> Self {
        Self::parse(EMBEDDED_DENYLIST)
    }

    /// Parses one password per line. Blank lines and `#` comments are skipped.
    pub fn parse(content: &str) -> Self {
        content.lines().collect()
    }

    /// Loads a denylist from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DenylistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: FileNotFound {:?}", path);
            return Err(DenylistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let denylist = Self::parse(&content);

        if denylist.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: Empty file {:?}", path);
            return Err(DenylistError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Denylist loaded: {} passwords from {:?}", denylist.len(), path);

        Ok(denylist)
    }

    /// Loads the file named by `PWD_GUARD_DENYLIST_PATH`, or the embedded
    /// list when the variable is unset.
    pub fn from_env() -> Result<Self, DenylistError> {
        match std::env::var_os(DENYLIST_PATH_ENV) {
            Some(path) => Self::from_path(PathBuf::from(path)),
            None => Ok(Self::embedded()),
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Denylist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|l| l.as_ref().trim().to_lowercase())
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .collect();
        Self { entries }
    }
}

/// Returns the process-wide embedded denylist.
pub fn default_denylist() -> &'static Denylist {
    &DEFAULT_DENYLIST
}

/// Checks the password against the embedded denylist.
pub fn is_common(password: &str) -> bool {
    default_denylist().contains(password)
}
