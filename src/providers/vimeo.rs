use crate::core::{Provider, VideoProvider};
use regex::Regex;

pub struct VimeoProvider {
    patterns: Vec<Regex>,
}

impl VimeoProvider {
    pub fn new() -> Self {
        // ASCII digits only; `\d` would also accept other Unicode digits.
        let patterns = [
            r"vimeo\.com/([0-9]+)",
            r"vimeo\.com/video/([0-9]+)",
            r"player\.vimeo\.com/video/([0-9]+)",
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("valid Vimeo pattern"))
        .collect();

        Self { patterns }
    }
}

impl Default for VimeoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for VimeoProvider {
    fn name(&self) -> &'static str {
        "Vimeo"
    }

    fn kind(&self) -> VideoProvider {
        VideoProvider::Vimeo
    }

    fn extract_id(&self, url: &str) -> Option<String> {
        self.patterns
            .iter()
            .find_map(|re| re.captures(url))
            .and_then(|captures| captures.get(1))
            .map(|id| id.as_str().to_string())
    }

    fn embed_url(&self, id: &str) -> String {
        format!(
            "https://player.vimeo.com/video/{}?autoplay=1&title=0&byline=0&portrait=0",
            id
        )
    }

    fn thumbnail_url(&self, id: &str) -> String {
        format!("https://vumbnail.com/{}.jpg", id)
    }
}
