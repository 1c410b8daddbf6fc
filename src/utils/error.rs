use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("No set URLs given")]
    NoSetUrls,

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Storage,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ScrapeError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HttpError(_) => ErrorCategory::Network,
            Self::IoError(_) => ErrorCategory::Storage,
            Self::SerializationError(_) | Self::UrlError(_) => ErrorCategory::Data,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } | Self::NoSetUrls => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::HttpError(_) => ErrorSeverity::Medium,
            Self::UrlError(_) | Self::SerializationError(_) => ErrorSeverity::High,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } | Self::NoSetUrls => {
                ErrorSeverity::High
            }
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::HttpError(e) => match e.status() {
                Some(status) => format!("The site answered with HTTP {}", status),
                None => "Could not reach the site".to_string(),
            },
            Self::IoError(e) => format!("Could not write to disk: {}", e),
            Self::SerializationError(_) => "Could not encode the image index".to_string(),
            Self::UrlError(e) => format!("A URL could not be understood: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::NoSetUrls => {
                "Pass set URLs as arguments or list them under [sources] urls".to_string()
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your connection and that the set URL still exists",
            ErrorCategory::Storage => "Check that the output directory is writable",
            ErrorCategory::Data => "The site layout may have changed; inspect the page manually",
            ErrorCategory::Configuration => "Run with --help and check your arguments or config file",
        }
    }

    /// Process exit status for an error that ends the run.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
