//! k-anonymity breach lookup
//!
//! The password is hashed with SHA-1 (the index of the Pwned Passwords
//! corpus), only the first five hex characters are sent to the service, and
//! the returned `SUFFIX:COUNT` lines are matched locally.

mod config;
#[cfg(feature = "async")]
mod client;

pub use config::{
    BreachConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, PADDING_ENV, TIMEOUT_ENV,
    URL_ENV,
};
#[cfg(feature = "async")]
pub use client::{check_breach, BreachChecker, HttpRangeSource, RangeSource};

use std::fmt;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};
use thiserror::Error;

/// Hex characters sent to the service.
pub const PREFIX_LEN: usize = 5;
/// Hex characters kept locally.
pub const SUFFIX_LEN: usize = 35;

/// Reasons a lookup ends without a definite answer.
///
/// All of them resolve to an indeterminate [`BreachResult`](crate::BreachResult).
#[derive(Error, Debug)]
pub enum BreachError {
    #[error("Breach service request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("Breach service returned status {0}")]
    Status(u16),
    #[error("Malformed breach service response: {0}")]
    Malformed(String),
    #[error("Breach service did not answer within {0:?}")]
    Timeout(Duration),
    #[error("Breach lookup cancelled")]
    Cancelled,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(feature = "async")]
impl From<reqwest::Error> for BreachError {
    fn from(e: reqwest::Error) -> Self {
        BreachError::Transport(Box::new(e))
    }
}

/// The part of the hash that leaves the process.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashPrefix(String);

impl HashPrefix {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HashPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The part of the hash that stays local. `Debug` does not print it.
#[derive(Clone, PartialEq, Eq)]
pub struct HashSuffix(String);

impl HashSuffix {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a suffix from the service.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.eq_ignore_ascii_case(candidate)
    }
}

impl fmt::Debug for HashSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashSuffix(..)")
    }
}

/// SHA-1 of the password as 40 uppercase hex characters.
pub fn sha1_hex(password: &SecretString) -> String {
    let mut hasher = Sha1::new();
    hasher.update(password.expose_secret().as_bytes());
    hex::encode_upper(hasher.finalize())
}

/// Hashes the password and splits the digest into prefix and suffix.
pub fn split_hash(password: &SecretString) -> (HashPrefix, HashSuffix) {
    let mut digest = sha1_hex(password);
    let suffix = digest.split_off(PREFIX_LEN);
    (HashPrefix(digest), HashSuffix(suffix))
}

/// Scans a range response for `suffix` and returns its count, or 0.
///
/// Lines are `SUFFIX:COUNT`, CRLF or LF terminated; blank lines are skipped.
/// Any other line, or a body without a single entry, is malformed so that a
/// broken response is never mistaken for "not breached".
pub fn match_range(body: &str, suffix: &HashSuffix) -> Result<u64, BreachError> {
    let mut entries = 0usize;
    let mut found = None;

    for (index, line) in body.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (candidate, count) = parse_line(line)
            .ok_or_else(|| BreachError::Malformed(format!("line {}", index + 1)))?;
        entries += 1;
        if found.is_none() && suffix.matches(candidate) {
            found = Some(count);
        }
    }

    if entries == 0 {
        return Err(BreachError::Malformed("empty range".to_string()));
    }
    Ok(found.unwrap_or(0))
}

fn parse_line(line: &str) -> Option<(&str, u64)> {
    let (candidate, count) = line.split_once(':')?;
    let candidate = candidate.trim();
    if candidate.len() != SUFFIX_LEN || !candidate.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let count = count.trim().parse().ok()?;
    Some((candidate, count))
}
