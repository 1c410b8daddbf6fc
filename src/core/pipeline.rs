use crate::core::naming;
use crate::domain::model::{ImageRef, PlannedImage, SetIndex, SetResult};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Downloads the card images of one set page at a time.
pub struct SetPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> SetPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        // Connect and per-read limits only, so large images may take longer overall.
        let timeout = Duration::from_secs(config.timeout_secs());
        let client = Client::builder()
            .user_agent(config.user_agent())
            .connect_timeout(timeout)
            .read_timeout(timeout)
            .build()?;

        Ok(Self {
            storage,
            config,
            client,
        })
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    async fn fetch(&self, url: &Url) -> Result<reqwest::Response> {
        let response = self.client.get(url.clone()).send().await?;
        tracing::debug!("GET {} -> {}", url, response.status());
        Ok(response.error_for_status()?)
    }

    /// 下載單張圖片並寫入存儲
    async fn download(&self, url: &Url, path: &str) -> Result<()> {
        let bytes = self.fetch(url).await?.bytes().await?;
        self.storage.write_file(path, &bytes).await
    }

    /// Plan a set page's images using the configured default extension.
    pub fn plan(&self, set_url: &Url, images: &[ImageRef]) -> Vec<PlannedImage> {
        naming::plan_images(set_url, images, self.config.default_extension())
    }

    /// Entries a run would record for `planned`, assuming every download succeeds.
    pub fn preview(&self, slug: &str, planned: &[PlannedImage]) -> SetIndex {
        let mut entries = SetIndex::new();
        for (saved, image) in planned.iter().enumerate() {
            let number = image.number_or(saved);
            let path = naming::target_path(slug, &number, &image.extension);
            entries.insert(number, self.storage.display_path(&path));
        }
        entries
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SetPipeline<S, C> {
    async fn extract(&self, set_url: &Url) -> Result<Vec<ImageRef>> {
        tracing::info!("Fetching set page: {}", set_url);
        let body = self.fetch(set_url).await?.text().await?;
        tracing::debug!("Set page is {} bytes", body.len());

        let images = crate::core::html::scan_images(&body);
        tracing::debug!("Found {} card images", images.len());
        Ok(images)
    }

    async fn load(&self, slug: &str, planned: Vec<PlannedImage>) -> Result<SetResult> {
        self.storage.create_dir(slug).await?;

        let mut result = SetResult {
            slug: slug.to_string(),
            entries: SetIndex::new(),
            found: planned.len(),
            downloaded: 0,
            skipped: 0,
            failed: 0,
        };
        let mut saved = 0usize;

        for image in &planned {
            let number = image.number_or(saved);
            let path = naming::target_path(slug, &number, &image.extension);
            let shown = self.storage.display_path(&path);

            if self.storage.exists(&path).await {
                tracing::info!("  Exists: {} (skipping)", shown);
                result.skipped += 1;
            } else {
                tracing::info!("  Downloading {} -> {}", image.url, shown);
                if let Err(e) = self.download(&image.url, &path).await {
                    tracing::warn!("  Failed to download {}: {}", image.url, e);
                    result.failed += 1;
                    continue;
                }
                result.downloaded += 1;
            }

            if let Some(previous) = result.entries.insert(number.clone(), shown) {
                tracing::debug!("  Card {} was already mapped to {}", number, previous);
            }
            saved += 1;
        }

        Ok(result)
    }
}
