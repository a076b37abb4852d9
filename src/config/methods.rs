//! Loading, validation and command-line overrides for `ExportConfig`

use std::path::Path;

use super::types::{ConfigError, ExportConfig};

impl ExportConfig {
    /// Parse a YAML document and validate it
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: ExportConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML config file
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let yaml = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_yaml_str(&yaml)
    }

    /// Check the invariants the export pipeline relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session_id.trim().is_empty() {
            return Err(ConfigError::Invalid("`sessionid` must not be empty".into()));
        }
        if !self.fetch_book_ids_online && self.book_ids.is_empty() {
            return Err(ConfigError::MissingBookIds);
        }
        if self.max_concurrent_books == Some(0) {
            return Err(ConfigError::Invalid(
                "`max_concurrent_books` must be at least 1".into(),
            ));
        }
        if let Some(base) = &self.api_base_url
            && url::Url::parse(base).is_err()
        {
            return Err(ConfigError::Invalid(format!(
                "`api_base_url` is not a valid URL: {base}"
            )));
        }
        Ok(())
    }

    /// Force `overwrite_existing` on
    #[must_use]
    pub fn with_overwrite(mut self) -> Self {
        self.overwrite_existing = true;
        self
    }

    /// Force remote discovery on
    #[must_use]
    pub fn with_remote_discovery(mut self) -> Self {
        self.fetch_book_ids_online = true;
        self
    }
}
