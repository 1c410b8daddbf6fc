use crate::core::naming;
use crate::core::pipeline::SetPipeline;
use crate::domain::model::{ImageIndex, SetResult};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;
use crate::utils::validation;
use url::Url;

/// What a run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub index: ImageIndex,
    /// `None` on a dry run.
    pub index_path: Option<String>,
    pub failed_sets: Vec<String>,
}

pub struct ScrapeEngine<S: Storage, C: ConfigProvider> {
    pipeline: SetPipeline<S, C>,
}

impl<S: Storage, C: ConfigProvider> ScrapeEngine<S, C> {
    pub fn new(pipeline: SetPipeline<S, C>) -> Self {
        Self { pipeline }
    }

    /// Process every set URL in order, then write the index.
    ///
    /// A set that fails is logged and left out of the index; the run goes on
    /// with the next one. Only a failure to write the index fails the run.
    pub async fn run(&self) -> Result<RunSummary> {
        let config = self.pipeline.config();
        let mut index = ImageIndex::new();
        let mut failed_sets = Vec::new();

        if config.dry_run() {
            tracing::info!("🔍 DRY RUN MODE - no images or index will be written");
        }

        for set_url in config.set_urls() {
            match self.process_set(set_url).await {
                Ok(result) => {
                    tracing::info!(
                        "✅ {}: {} images found, {} downloaded, {} already present, {} failed",
                        result.slug,
                        result.found,
                        result.downloaded,
                        result.skipped,
                        result.failed
                    );
                    index.insert_set(result.slug, result.entries);
                }
                Err(e) => {
                    tracing::error!("❌ Error processing {}: {}", set_url, e);
                    tracing::debug!(
                        "Category: {:?}, Severity: {:?}, Suggestion: {}",
                        e.category(),
                        e.severity(),
                        e.recovery_suggestion()
                    );
                    failed_sets.push(set_url.clone());
                }
            }
        }

        let index_path = if config.dry_run() {
            None
        } else {
            Some(self.write_index(&index).await?)
        };

        Ok(RunSummary {
            index,
            index_path,
            failed_sets,
        })
    }

    async fn process_set(&self, set_url: &str) -> Result<SetResult> {
        validation::validate_url("set_urls", set_url)?;
        let url = Url::parse(set_url)?;
        let slug = naming::slug_from_url(set_url);

        let images = self.pipeline.extract(&url).await?;
        let planned = self.pipeline.plan(&url, &images);

        if self.pipeline.config().dry_run() {
            let entries = self.pipeline.preview(&slug, &planned);
            for (number, path) in &entries {
                tracing::info!("  Would save card {} -> {}", number, path);
            }
            return Ok(SetResult {
                slug,
                found: planned.len(),
                downloaded: 0,
                skipped: 0,
                failed: 0,
                entries,
            });
        }

        self.pipeline.load(&slug, planned).await
    }

    async fn write_index(&self, index: &ImageIndex) -> Result<String> {
        let index_file = self.pipeline.config().index_file();
        let json = index.to_json_pretty()?;

        self.pipeline
            .storage()
            .write_file(index_file, json.as_bytes())
            .await?;

        let path = self.pipeline.storage().display_path(index_file);
        tracing::info!(
            "📁 Wrote index of {} sets ({} images) to {}",
            index.len(),
            index.image_count(),
            path
        );
        Ok(path)
    }
}
