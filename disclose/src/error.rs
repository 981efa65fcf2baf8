//! # Errors
//!
//! Failures surfaced by the engine. Element-level problems (a missing or
//! malformed element value) are represented as data on the consent model
//! (`is_available = false`), never as errors; only a structural
//! document-resolution failure aborts a build.

use serde::Deserialize;
use thiserror::Error;

/// Engine errors.
#[derive(Clone, Debug, Deserialize, Error, PartialEq, Eq)]
pub enum Error {
    /// A requested document is not present in the holder's store.
    ///
    /// Fatal to the whole build: a request referencing a document the holder
    /// does not have indicates an inconsistent session, not a
    /// partial-availability situation. No partial model is returned.
    #[error("document not found: {0}")]
    DocumentNotFound(String),
}

// Serialize as the display string so shells can surface the message as-is.
impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

/// Result type for engine operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;
