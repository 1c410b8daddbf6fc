pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, ScrapeError};
use crate::utils::validation::{self, Validate};
use toml_config::FileConfig;

pub const DEFAULT_OUTPUT_DIR: &str = "database/pkmn-images";
pub const DEFAULT_INDEX_FILE: &str = "index.json";
pub const DEFAULT_USER_AGENT: &str = "cardflow-image-downloader/1.0 (+https://github.com)";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_EXTENSION: &str = ".jpg";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "card-image-fetcher")]
#[command(about = "Download card images from set listing pages and index them by card number")]
pub struct CliConfig {
    /// Set listing pages, e.g. https://pkmncards.com/set/base-set/
    #[arg(value_name = "SET_URL")]
    pub set_urls: Vec<String>,

    /// Directory images and the index are written to
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Index file name inside the output directory
    #[arg(long)]
    pub index_file: Option<String>,

    #[arg(long)]
    pub user_agent: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Fetch and plan every set without downloading images or writing the index
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merge command line values over the settings file, if one was given.
    /// Fails with [`ScrapeError::NoSetUrls`] when neither names a set.
    pub fn resolve(&self) -> Result<ScrapeConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                FileConfig::from_file(path)?
            }
            None => FileConfig::default(),
        };
        let config = ScrapeConfig::merge(self, file);
        if config.set_urls.is_empty() {
            return Err(ScrapeError::NoSetUrls);
        }
        Ok(config)
    }
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeConfig {
    pub set_urls: Vec<String>,
    pub output_dir: String,
    pub index_file: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub default_extension: String,
    pub dry_run: bool,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            set_urls: Vec::new(),
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            index_file: DEFAULT_INDEX_FILE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            default_extension: DEFAULT_EXTENSION.to_string(),
            dry_run: false,
        }
    }
}

impl ScrapeConfig {
    pub fn new(set_urls: Vec<String>, output_dir: impl Into<String>) -> Self {
        Self {
            set_urls,
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    #[cfg(feature = "cli")]
    fn merge(cli: &CliConfig, file: FileConfig) -> Self {
        let mut set_urls = cli.set_urls.clone();
        set_urls.extend(file.sources.urls);

        Self {
            set_urls,
            output_dir: cli
                .output_dir
                .clone()
                .or(file.output.dir)
                .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()),
            index_file: cli
                .index_file
                .clone()
                .or(file.output.index_file)
                .unwrap_or_else(|| DEFAULT_INDEX_FILE.to_string()),
            user_agent: cli
                .user_agent
                .clone()
                .or(file.scraper.user_agent)
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            timeout_secs: cli
                .timeout_secs
                .or(file.scraper.timeout_seconds)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            default_extension: file
                .output
                .default_extension
                .unwrap_or_else(|| DEFAULT_EXTENSION.to_string()),
            dry_run: cli.dry_run,
        }
    }
}

impl ConfigProvider for ScrapeConfig {
    fn set_urls(&self) -> &[String] {
        &self.set_urls
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn index_file(&self) -> &str {
        &self.index_file
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    fn default_extension(&self) -> &str {
        &self.default_extension
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Validate for ScrapeConfig {
    fn validate(&self) -> Result<()> {
        // Malformed set URLs fail their own set at run time, not the whole run.
        if self.set_urls.is_empty() {
            return Err(ScrapeError::NoSetUrls);
        }
        validation::validate_path("output_dir", &self.output_dir)?;
        validation::validate_path("index_file", &self.index_file)?;
        validation::validate_non_empty_string("user_agent", &self.user_agent)?;
        validation::validate_positive_number("timeout_secs", self.timeout_secs, 1)?;
        validation::validate_extension("default_extension", &self.default_extension)?;
        Ok(())
    }
}
