//! Card image discovery on a set listing page.
//!
//! The listing is parsed as HTML and every `<img>` is considered. Lazy-loaded
//! images carry their URL in `data-src` instead of `src`.

use crate::domain::model::ImageRef;
use scraper::{Html, Selector};

const CARD_HOST: &str = "pkmncards.com";
const CARD_PATH: &str = "/cards/";
const IMAGE_EXTENSIONS: [&str; 4] = [".png", ".jpg", ".jpeg", ".webp"];

/// Collect the card images of a page in document order.
pub fn scan_images(html: &str) -> Vec<ImageRef> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("img").expect("static selector");

    document
        .select(&selector)
        .filter_map(|element| {
            let attrs = element.value();
            let src = attrs
                .attr("src")
                .filter(|s| !s.is_empty())
                .or_else(|| attrs.attr("data-src").filter(|s| !s.is_empty()))?;

            if !is_card_image(src) {
                tracing::trace!("Ignoring non-card image: {}", src);
                return None;
            }

            Some(ImageRef {
                src: src.to_string(),
                alt: attrs.attr("alt").unwrap_or("").trim().to_string(),
            })
        })
        .collect()
}

pub fn is_card_image(src: &str) -> bool {
    if src.contains(CARD_HOST) || src.contains(CARD_PATH) {
        return true;
    }
    let lower = src.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_picks_card_images_in_order() {
        let html = r#"
<html><body>
  <img src="/static/logo.svg" alt="logo">
  <img src="https://pkmncards.com/wp-content/uploads/en_US-BS-004-charizard.jpg" alt="Charizard">
  <img data-src="/uploads/pikachu-58.PNG" alt="  Pikachu  ">
  <img src="https://cdn.example.com/cards/x" alt="">
  <img alt="no source">
</body></html>"#;

        let images = scan_images(html);
        assert_eq!(images.len(), 3);
        assert_eq!(
            images[0].src,
            "https://pkmncards.com/wp-content/uploads/en_US-BS-004-charizard.jpg"
        );
        assert_eq!(images[0].alt, "Charizard");
        assert_eq!(images[1].src, "/uploads/pikachu-58.PNG");
        assert_eq!(images[1].alt, "Pikachu");
        assert_eq!(images[2].src, "https://cdn.example.com/cards/x");
        assert_eq!(images[2].alt, "");
    }

    #[test]
    fn test_src_wins_over_data_src() {
        let html = r#"<img src="/a/1.jpg" data-src="/a/2.jpg">"#;
        let images = scan_images(html);
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].src, "/a/1.jpg");
    }

    #[test]
    fn test_empty_src_falls_back_to_data_src() {
        let html = r#"<img src="" data-src="/lazy/7.webp">"#;
        let images = scan_images(html);
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].src, "/lazy/7.webp");
    }

    #[test]
    fn test_is_card_image() {
        assert!(is_card_image("https://pkmncards.com/anything"));
        assert!(is_card_image("/cards/123"));
        assert!(is_card_image("/x/y.JPEG"));
        assert!(!is_card_image("/x/y.gif"));
        assert!(!is_card_image("data:image/svg+xml;base64,AAAA"));
    }

    #[test]
    fn test_page_without_images() {
        assert!(scan_images("<html><body><p>Nothing here</p></body></html>").is_empty());
    }
}
