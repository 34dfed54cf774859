//! Error types for builder operations.

use vb_html::HostError;

use crate::registry::BuilderKind;

/// A builder was requested that cannot be provided.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// No builder registered under this name for the kind.
    #[error("Unknown {kind} builder: {name:?}")]
    UnknownBuilder {
        /// Kind the name was looked up for.
        kind: BuilderKind,
        /// The requested name.
        name: String,
    },
    /// A builder of one kind was installed into another kind's slot.
    #[error("Expected a {expected} builder, got a {found} builder")]
    KindMismatch {
        /// Slot kind.
        expected: BuilderKind,
        /// Kind of the supplied builder.
        found: BuilderKind,
    },
    /// Builder kind name that does not exist.
    #[error("Unknown builder kind: {0:?}")]
    UnknownKind(String),
}

/// Error returned by builder operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuilderError {
    /// Failure inside a host template capability, propagated unchanged.
    #[error(transparent)]
    Host(#[from] HostError),
    /// Builder selection failure.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Result type for builder operations.
pub type Result<T, E = BuilderError> = std::result::Result<T, E>;
