//! Naming rules: set slugs, image URLs, file names and card numbers.

use crate::domain::model::{ImageRef, PlannedImage};
use crate::utils::error::Result;
use percent_encoding::percent_decode_str;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

pub const UNKNOWN_SET: &str = "unknown-set";

static CARD_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{1,4}").expect("valid card number pattern"));

/// Last path segment of a set URL, ignoring trailing slashes. The segment is
/// percent-decoded; decoded separators become `-` so the slug stays one
/// directory.
pub fn slug_from_url(set_url: &str) -> String {
    Url::parse(set_url)
        .ok()
        .and_then(|url| {
            url.path()
                .trim_end_matches('/')
                .rsplit('/')
                .next()
                .filter(|s| !s.is_empty())
                .map(|segment| {
                    percent_decode_str(segment)
                        .decode_utf8_lossy()
                        .replace(['/', '\\'], "-")
                })
        })
        .unwrap_or_else(|| UNKNOWN_SET.to_string())
}

/// Absolute URL for an image source found on `page`.
pub fn resolve_url(page: &Url, src: &str) -> Result<Url> {
    if src.starts_with("http") {
        Ok(Url::parse(src)?)
    } else {
        Ok(page.join(src)?)
    }
}

pub fn file_name_from_url(url: &Url) -> String {
    url.path().rsplit('/').next().unwrap_or("").to_string()
}

/// Extension including the dot. Leading dots do not start an extension, so
/// `.hidden` has none.
pub fn extension_of(file_name: &str) -> Option<&str> {
    let leading = file_name.len() - file_name.trim_start_matches('.').len();
    file_name[leading..]
        .rfind('.')
        .map(|idx| &file_name[leading + idx..])
}

/// First run of up to four digits in the file name, else in the alt text.
pub fn infer_number(file_name: &str, alt: &str) -> Option<String> {
    CARD_NUMBER
        .find(file_name)
        .or_else(|| CARD_NUMBER.find(alt))
        .map(|m| m.as_str().to_string())
}

/// Storage-relative path an image is saved to.
pub fn target_path(slug: &str, number: &str, extension: &str) -> String {
    format!("{}/{}{}", slug, number, extension)
}

/// Turn scanned images into download plans. Images whose URL cannot be
/// resolved are logged and dropped.
pub fn plan_images(page: &Url, images: &[ImageRef], default_extension: &str) -> Vec<PlannedImage> {
    images
        .iter()
        .filter_map(|image| match resolve_url(page, &image.src) {
            Ok(url) => {
                let file_name = file_name_from_url(&url);
                let extension = extension_of(&file_name)
                    .unwrap_or(default_extension)
                    .to_string();
                let number = infer_number(&file_name, &image.alt);
                Some(PlannedImage {
                    url,
                    extension,
                    number,
                })
            }
            Err(e) => {
                tracing::warn!("  Skipping image with unusable source '{}': {}", image.src, e);
                None
            }
        })
        .collect()
}
