//! Error types for the hclconf library.
//!
//! Every failure of a load is reported as one [`Error`] value. Errors raised
//! while parsing a file are wrapped with that file's path as they leave the
//! file loader, so the `source()` chain always leads from "which file" down
//! to the underlying cause.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for operations that may fail with an hclconf error.
///
/// # Examples
///
/// ```
/// use hclconf::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(8080)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the hclconf library.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration path could not be inspected or listed.
    #[error("cannot access {}: {source}", path.display())]
    PathAccess {
        /// The path that could not be accessed.
        path: PathBuf,
        /// The underlying filesystem error.
        #[source]
        source: io::Error,
    },

    /// A configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration source is not valid HCL.
    #[error("failed to parse the hcl source: {source}")]
    Syntax {
        /// Diagnostics reported by the HCL parser.
        #[source]
        source: hcl::Error,
    },

    /// A block could not be mapped onto its typed structure.
    #[error("failed to decode the '{block}' block at '{field}': {message}")]
    Decode {
        /// Name of the block being decoded (`root` for top-level attributes).
        block: String,
        /// Dotted path of the offending field.
        field: String,
        /// A description of the mismatch.
        message: String,
    },

    /// A block appeared more often than permitted.
    #[error("found {found} '{block}' blocks, at most {max} permitted")]
    Cardinality {
        /// Name of the repeated block.
        block: String,
        /// Number of occurrences found in the source.
        found: usize,
        /// Maximum number of occurrences permitted.
        max: usize,
    },

    /// No labeled block carries the requested selector.
    #[error("no '{block}' block is labeled '{selector}'")]
    LabelNotFound {
        /// Name of the labeled block.
        block: String,
        /// The selector that matched nothing.
        selector: String,
    },

    /// Context wrapper naming the file an error came from.
    #[error("error loading {}: {source}", path.display())]
    InFile {
        /// The file being loaded.
        path: PathBuf,
        /// The error raised while loading it.
        #[source]
        source: Box<Error>,
    },

    /// A directory load found no configuration files.
    #[error("no configuration found in {}", path.display())]
    ConfigNotFound {
        /// The directory that was scanned.
        path: PathBuf,
    },
}

/// The closed set of failure categories a load can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`Error::PathAccess`].
    PathAccess,
    /// See [`Error::Io`].
    Io,
    /// See [`Error::Syntax`].
    Syntax,
    /// See [`Error::Decode`].
    Decode,
    /// See [`Error::Cardinality`].
    Cardinality,
    /// See [`Error::LabelNotFound`].
    LabelNotFound,
    /// See [`Error::ConfigNotFound`].
    ConfigNotFound,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathAccess => write!(f, "path access"),
            Self::Io => write!(f, "io"),
            Self::Syntax => write!(f, "syntax"),
            Self::Decode => write!(f, "decode"),
            Self::Cardinality => write!(f, "cardinality"),
            Self::LabelNotFound => write!(f, "label not found"),
            Self::ConfigNotFound => write!(f, "config not found"),
        }
    }
}

impl Error {
    /// Wrap this error with the path of the file it was raised for.
    #[must_use]
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        Self::InFile {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// The category of this error, looking through file context wrappers.
    ///
    /// # Examples
    ///
    /// ```
    /// use hclconf::{Error, ErrorKind};
    ///
    /// let err = Error::LabelNotFound {
    ///     block: "rabbitmq".to_string(),
    ///     selector: "staging".to_string(),
    /// }
    /// .in_file("conf.d/10-broker.hcl");
    /// assert_eq!(err.kind(), ErrorKind::LabelNotFound);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PathAccess { .. } => ErrorKind::PathAccess,
            Self::Io { .. } => ErrorKind::Io,
            Self::Syntax { .. } => ErrorKind::Syntax,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Cardinality { .. } => ErrorKind::Cardinality,
            Self::LabelNotFound { .. } => ErrorKind::LabelNotFound,
            Self::ConfigNotFound { .. } => ErrorKind::ConfigNotFound,
            Self::InFile { source, .. } => source.kind(),
        }
    }

    /// The innermost path attached to this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::InFile { path, source } => source.path().or(Some(path.as_path())),
            Self::PathAccess { path, .. }
            | Self::Io { path, .. }
            | Self::ConfigNotFound { path } => Some(path),
            _ => None,
        }
    }

    /// Check if error means no configuration was found.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::ConfigNotFound
    }
}

impl From<hcl::Error> for Error {
    fn from(source: hcl::Error) -> Self {
        Self::Syntax { source }
    }
}
