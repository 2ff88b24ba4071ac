//! Error types produced by record mutation.

use thiserror::Error;

use crate::key::PropKey;

/// Errors that can occur while writing record properties.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RecordError {
    /// The property exists but its slot does not accept writes.
    #[error("property '{key}' is read-only")]
    ReadOnly {
        /// Key of the refusing property.
        key: PropKey,
    },
}
