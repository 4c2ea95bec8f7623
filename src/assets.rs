//! Asset loading with embedded fallbacks
//!
//! The SVG layout template and the default `config.yaml` are compiled into
//! the binary. A config file on disk (from `--config` or `PIXELPAINT_CONFIG`)
//! takes priority over the embedded copy when it exists.

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded SVG templates
#[derive(RustEmbed)]
#[folder = "templates/"]
#[include = "*.svg"]
struct EmbeddedTemplates;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Environment variable naming an external config file
pub const CONFIG_ENV: &str = "PIXELPAINT_CONFIG";

/// Asset loader with an optional filesystem override for the config
#[derive(Debug, Default, Clone)]
pub struct AssetLoader {
    /// External config file path (from `--config` or `PIXELPAINT_CONFIG`)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// `config_file` should be `Some` only if the user named a file.
    /// If `None`, the embedded config is used.
    pub fn new(config_file: Option<PathBuf>) -> Self {
        Self { config_file }
    }

    /// Loader resolving the config path from the CLI flag, then the environment
    pub fn from_cli(config_flag: Option<PathBuf>) -> Self {
        let config_file =
            config_flag.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
        Self::new(config_file)
    }

    /// The external config path, if one was configured
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Read the config file
    ///
    /// A configured external file must be readable; there is no silent
    /// fallback here so the caller can report why it was ignored.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            tracing::trace!(path = %path.display(), "Loading config from filesystem");
            return Ok(Cow::Owned(fs::read(path)?));
        }

        EmbeddedConfig::get("config.yaml")
            .map(|f| {
                tracing::trace!("Loading config from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found")
            })
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Read an embedded SVG template as a UTF-8 string
    pub fn read_template(name: &str) -> io::Result<String> {
        let file = EmbeddedTemplates::get(name).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("Template not found: {name}"))
        })?;
        String::from_utf8(file.data.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Names of all embedded templates, sorted
    pub fn list_templates() -> Vec<String> {
        let mut names: Vec<String> = EmbeddedTemplates::iter().map(|s| s.to_string()).collect();
        names.sort();
        names
    }
}
