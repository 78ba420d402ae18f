//! Rendering configuration.

use bucket_error::ConfigError;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Page-size options offered by the pagination controls.
pub const DEFAULT_PAGE_SIZES: [u64; 5] = [20, 50, 100, 250, 500];

fn default_page_sizes() -> Vec<u64> {
    DEFAULT_PAGE_SIZES.to_vec()
}

fn default_script_path() -> String {
    "/index.php".to_string()
}

fn default_article_path() -> String {
    "/wiki/$1".to_string()
}

fn default_table_class() -> String {
    "wikitable".to_string()
}

fn default_list_class() -> String {
    "bucket-list".to_string()
}

fn default_error_class() -> String {
    "error bucket-error".to_string()
}

/// Settings shared by every render call.
///
/// # Examples
///
/// ```
/// use bucket_core::PageConfig;
///
/// let config = PageConfig::from_toml_str("page_sizes = [10, 25]").unwrap();
/// assert_eq!(config.page_sizes(), &vec![10, 25]);
/// assert_eq!(config.table_class(), "wikitable");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct PageConfig {
    /// Options offered by the page-size selector, in display order
    #[serde(default = "default_page_sizes")]
    #[builder(default = "default_page_sizes()")]
    page_sizes: Vec<u64>,
    /// Entry script used for links that carry a query string
    #[serde(default = "default_script_path")]
    #[builder(default = "default_script_path()")]
    script_path: String,
    /// Pretty article path, `$1` stands for the page title
    #[serde(default = "default_article_path")]
    #[builder(default = "default_article_path()")]
    article_path: String,
    /// Magic-link prefixes enabled on the wiki (`ISBN`, `RFC`, `PMID`)
    #[serde(default)]
    #[builder(default)]
    magic_links: Vec<String>,
    /// CSS class of result tables
    #[serde(default = "default_table_class")]
    #[builder(default = "default_table_class()")]
    table_class: String,
    /// CSS class of list items in repeated cells
    #[serde(default = "default_list_class")]
    #[builder(default = "default_list_class()")]
    list_class: String,
    /// CSS classes of the error wrapper
    #[serde(default = "default_error_class")]
    #[builder(default = "default_error_class()")]
    error_class: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_sizes: default_page_sizes(),
            script_path: default_script_path(),
            article_path: default_article_path(),
            magic_links: Vec::new(),
            table_class: default_table_class(),
            list_class: default_list_class(),
            error_class: default_error_class(),
        }
    }
}

impl PageConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(sizes) = &self.page_sizes {
            check_page_sizes(sizes)?;
        }
        if let Some(path) = &self.article_path {
            check_article_path(path)?;
        }
        Ok(())
    }
}

fn check_page_sizes(sizes: &[u64]) -> Result<(), String> {
    if sizes.is_empty() {
        return Err("page_sizes must not be empty".to_string());
    }
    if sizes.contains(&0) {
        return Err("page_sizes must be positive".to_string());
    }
    Ok(())
}

fn check_article_path(path: &str) -> Result<(), String> {
    if path.contains("$1") {
        Ok(())
    } else {
        Err(format!("article_path '{}' has no $1 placeholder", path))
    }
}

impl PageConfig {
    /// Create a new builder for page configuration.
    pub fn builder() -> PageConfigBuilder {
        PageConfigBuilder::default()
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(page_sizes = ?config.page_sizes, "Loaded page configuration");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_page_sizes(&self.page_sizes).map_err(ConfigError::new)?;
        check_article_path(&self.article_path).map_err(ConfigError::new)?;
        Ok(())
    }
}
