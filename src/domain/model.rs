use serde::{Deserialize, Serialize};
use indexmap::IndexMap;
use url::Url;

/// An `<img>` element that looks like a card picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

/// Where one image is fetched from and what it is saved as.
///
/// `number` is `None` when neither the file name nor the alt text carries a
/// card number; the pipeline then numbers the image by its position among the
/// images saved so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedImage {
    pub url: Url,
    pub extension: String,
    pub number: Option<String>,
}

impl PlannedImage {
    pub fn number_or(&self, saved_so_far: usize) -> String {
        self.number
            .clone()
            .unwrap_or_else(|| (saved_so_far + 1).to_string())
    }
}

/// Card number -> saved file path, for one set, in page order.
pub type SetIndex = IndexMap<String, String>;

/// Set slug -> per-set index. This is what `index.json` holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageIndex {
    pub sets: IndexMap<String, SetIndex>,
}

impl ImageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_set(&mut self, slug: String, entries: SetIndex) {
        self.sets.insert(slug, entries);
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn image_count(&self) -> usize {
        self.sets.values().map(|s| s.len()).sum()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Outcome of processing one set page.
#[derive(Debug, Clone)]
pub struct SetResult {
    pub slug: String,
    pub entries: SetIndex,
    pub found: usize,
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
}
