pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, ScrapeConfig};

pub use core::{
    engine::{RunSummary, ScrapeEngine},
    pipeline::SetPipeline,
};
pub use domain::model::ImageIndex;
pub use utils::error::{Result, ScrapeError};
