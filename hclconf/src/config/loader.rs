//! Configuration file discovery and loading.
//!
//! A configuration path is either a single file or a directory of files.
//! Directory loads process every matching file in name order and keep the
//! configuration of the last one.

use crate::config::parser::{ConfigParser, DEFAULT_MAX_LABELED_BLOCKS};
use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default configuration file extension.
pub const DEFAULT_EXTENSION: &str = "hcl";

/// Settings shared by every load.
///
/// # Examples
///
/// ```
/// use hclconf::config::LoaderOptions;
///
/// let options = LoaderOptions::default()
///     .with_extension(".conf")
///     .with_max_labeled_blocks(5);
/// assert_eq!(options.extension, "conf");
/// assert_eq!(options.max_labeled_blocks, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Extension a directory entry must end with, without the leading dot.
    pub extension: String,

    /// Maximum number of broker blocks in one file.
    pub max_labeled_blocks: usize,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            max_labeled_blocks: DEFAULT_MAX_LABELED_BLOCKS,
        }
    }
}

impl LoaderOptions {
    /// Set the file extension. A leading dot is accepted and dropped.
    #[must_use]
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Set the maximum number of broker blocks per file.
    #[must_use]
    pub fn with_max_labeled_blocks(mut self, max: usize) -> Self {
        self.max_labeled_blocks = max;
        self
    }
}

/// Loads configuration from files and directories.
///
/// # Examples
///
/// ```no_run
/// use hclconf::config::ConfigLoader;
/// use std::path::Path;
///
/// let loader = ConfigLoader::new();
/// match loader.load(Path::new("/etc/service/conf.d"), "master").unwrap() {
///     Some(config) => println!("api listens on {}:{}", config.api.host, config.api.port),
///     None => eprintln!("no configuration files found"),
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    options: LoaderOptions,
}

impl ConfigLoader {
    /// Create a loader with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with the given options.
    #[must_use]
    pub const fn with_options(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// The options this loader was built with.
    #[must_use]
    pub const fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Load a file or a directory of files.
    ///
    /// Returns `None` only for a directory without configuration files.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathAccess`] when `path` cannot be inspected or is
    /// neither a regular file nor a directory, and any error of
    /// [`ConfigLoader::load_file`] or [`ConfigLoader::load_dir`].
    pub fn load(&self, path: &Path, selector: &str) -> Result<Option<Config>> {
        let metadata = fs::metadata(path).map_err(|source| Error::PathAccess {
            path: path.to_path_buf(),
            source,
        })?;

        if metadata.is_dir() {
            self.load_dir(path, selector)
        } else if metadata.is_file() {
            self.load_file(path, selector).map(Some)
        } else {
            Err(Error::PathAccess {
                path: path.to_path_buf(),
                source: io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "not a regular file or directory",
                ),
            })
        }
    }

    /// Like [`ConfigLoader::load`], but treats a directory without
    /// configuration files as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] for an empty directory, and any
    /// error of [`ConfigLoader::load`].
    pub fn load_required(&self, path: &Path, selector: &str) -> Result<Config> {
        self.load(path, selector)?
            .ok_or_else(|| Error::ConfigNotFound {
                path: path.to_path_buf(),
            })
    }

    /// Load every configuration file of a directory.
    ///
    /// Files are processed in ascending name order and each successfully
    /// loaded file replaces the result of the previous ones. Values are not
    /// merged across files.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathAccess`] when the directory cannot be listed,
    /// and the error of the first file that fails to load.
    pub fn load_dir(&self, dir: &Path, selector: &str) -> Result<Option<Config>> {
        let files = self.discover(dir)?;
        if files.is_empty() {
            log::debug!(
                "no .{} files found in {}",
                self.options.extension,
                dir.display()
            );
            return Ok(None);
        }

        let mut result = None;
        for file in &files {
            result = Some(self.load_file(file, selector)?);
        }

        log::debug!(
            "loaded {} file(s) from {}, last one wins",
            files.len(),
            dir.display()
        );
        Ok(result)
    }

    /// The files [`ConfigLoader::load_dir`] would process, in order.
    ///
    /// Sub-directories and entries whose name does not end with the
    /// configured extension are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathAccess`] when the directory cannot be listed.
    pub fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let access = |source| Error::PathAccess {
            path: dir.to_path_buf(),
            source,
        };

        let suffix = format!(".{}", self.options.extension);
        let mut files = Vec::new();

        for entry in fs::read_dir(dir).map_err(access)? {
            let path = entry.map_err(access)?.path();
            if path.is_dir() {
                continue;
            }

            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                log::debug!("skipping non UTF-8 file name {}", path.display());
                continue;
            };

            if name.ends_with(&suffix) {
                files.push(path);
            } else {
                log::trace!("skipping {}", path.display());
            }
        }

        files.sort();
        Ok(files)
    }

    /// Load and parse one configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read. Parse errors are
    /// wrapped in [`Error::InFile`] naming the file.
    pub fn load_file(&self, path: &Path, selector: &str) -> Result<Config> {
        log::debug!("loading {}", path.display());

        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        ConfigParser::new(self.options.max_labeled_blocks)
            .parse(&contents, selector)
            .map_err(|e| e.in_file(path))
    }
}

/// Load a file or directory with default options.
///
/// # Errors
///
/// See [`ConfigLoader::load`].
///
/// # Examples
///
/// ```no_run
/// let config = hclconf::load_config("config.hcl", "master").unwrap();
/// ```
pub fn load_config(path: impl AsRef<Path>, selector: &str) -> Result<Option<Config>> {
    ConfigLoader::new().load(path.as_ref(), selector)
}
