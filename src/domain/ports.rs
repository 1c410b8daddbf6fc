use crate::domain::model::{ImageRef, PlannedImage, SetResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use url::Url;

pub trait Storage: Send + Sync {
    fn exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn create_dir(&self, path: &str) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Path as it should appear in the index for a storage-relative `path`.
    fn display_path(&self, path: &str) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn set_urls(&self) -> &[String];
    fn output_dir(&self) -> &str;
    fn index_file(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn timeout_secs(&self) -> u64;
    fn default_extension(&self) -> &str;
    fn dry_run(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    /// Fetch a set page and collect its card images.
    async fn extract(&self, set_url: &Url) -> Result<Vec<ImageRef>>;
    /// Download planned images and build the set's index entries.
    async fn load(&self, slug: &str, planned: Vec<PlannedImage>) -> Result<SetResult>;
}
