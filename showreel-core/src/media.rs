use serde::{Deserialize, Serialize};

const EMBED_BASE: &str = "https://www.youtube.com/embed/";
const EMBED_PARAMS: &str =
    "autoplay=0&mute=1&controls=0&showinfo=0&rel=0&iv_load_policy=3&modestbranding=1";

/// One reel in the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    pub title: String,
    pub category: String,
}

impl MediaItem {
    #[must_use]
    pub fn new(id: &str, title: &str, category: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            category: category.to_string(),
        }
    }

    /// Player URL: muted, no autoplay, no controls, no related-video overlay.
    /// The id is passed through as-is.
    #[must_use]
    pub fn embed_url(&self) -> String {
        format!("{EMBED_BASE}{}?{EMBED_PARAMS}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_url_disables_autoplay_and_overlays() {
        let item = MediaItem::new("YIOlYJsue7Y", "Cinematic Reel", "Brand Video");
        let url = item.embed_url();
        assert!(url.starts_with("https://www.youtube.com/embed/YIOlYJsue7Y?"));
        for param in ["autoplay=0", "mute=1", "controls=0", "rel=0"] {
            assert!(url.contains(param), "{url} lacks {param}");
        }
    }
}
