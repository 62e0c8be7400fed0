//! Settings file loading

use serde::de::DeserializeOwned;

use crate::{Error, NormalizedPath, Result, io};

/// Loads typed settings from TOML files.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load settings from `path`, which must exist and carry a `.toml`
    /// extension.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        Self::check_format(path)?;
        let content = io::read_text(path)?;
        Self::parse(path, &content)
    }

    /// Load settings, falling back to `T::default()` when the file does not
    /// exist.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, path: &NormalizedPath) -> Result<T> {
        Self::check_format(path)?;
        match io::read_text_optional(path)? {
            Some(content) => Self::parse(path, &content),
            None => {
                tracing::debug!(path = %path, "No config file, using defaults");
                Ok(T::default())
            }
        }
    }

    fn check_format(path: &NormalizedPath) -> Result<()> {
        let extension = path.extension().unwrap_or("");
        if extension.eq_ignore_ascii_case("toml") {
            Ok(())
        } else {
            Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            })
        }
    }

    fn parse<T: DeserializeOwned>(path: &NormalizedPath, content: &str) -> Result<T> {
        toml::from_str(content).map_err(|e| Error::ConfigParse {
            path: path.to_native(),
            message: e.to_string(),
        })
    }
}
