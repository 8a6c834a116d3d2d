use crate::core::{Provider, VideoProvider};
use regex::Regex;

// An id is exactly 11 characters; a longer run of id characters is not an id.
const VIDEO_ID: &str = r"([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)";

pub struct YouTubeProvider {
    patterns: Vec<Regex>,
}

impl YouTubeProvider {
    pub fn new() -> Self {
        // Tried in order; the last one tolerates other query params before `v=`.
        let prefixes = [
            r"youtube\.com/watch\?v=",
            r"youtu\.be/",
            r"youtube\.com/embed/",
            r"youtube\.com/watch\?(?:.*&)?v=",
        ];

        let patterns = prefixes
            .iter()
            .map(|prefix| {
                Regex::new(&format!("{}{}", prefix, VIDEO_ID)).expect("valid YouTube pattern")
            })
            .collect();

        Self { patterns }
    }
}

impl Default for YouTubeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for YouTubeProvider {
    fn name(&self) -> &'static str {
        "YouTube"
    }

    fn kind(&self) -> VideoProvider {
        VideoProvider::YouTube
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
            "https://www.youtube.com/embed/{}?autoplay=1&rel=0&modestbranding=1",
            id
        )
    }

    fn thumbnail_url(&self, id: &str) -> String {
        format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(url: &str) -> Option<String> {
        YouTubeProvider::new().extract_id(url)
    }

    #[test]
    fn test_url_shapes() {
        let test_cases = vec![
            ("https://www.youtube.com/watch?v=iOg9nU_pXhs", "iOg9nU_pXhs"),
            ("https://m.youtube.com/watch?v=dQw4w9WgXcQ", "dQw4w9WgXcQ"),
            ("https://youtu.be/dQw4w9WgXcQ", "dQw4w9WgXcQ"),
            ("https://youtu.be/dQw4w9WgXcQ?t=42", "dQw4w9WgXcQ"),
            ("https://www.youtube.com/embed/dQw4w9WgXcQ", "dQw4w9WgXcQ"),
            ("youtube.com/watch?v=a-b_c-d_e-f", "a-b_c-d_e-f"),
        ];

        for (url, expected) in test_cases {
            assert_eq!(id(url), Some(expected.to_string()), "url: {}", url);
        }
    }

    #[test]
    fn test_query_noise() {
        assert_eq!(
            id("https://www.youtube.com/watch?v=igPb1ypyMDE&list=RDigPb1ypyMDE&start_radio=1"),
            Some("igPb1ypyMDE".to_string())
        );
        assert_eq!(
            id("https://www.youtube.com/watch?feature=share&t=10&v=igPb1ypyMDE"),
            Some("igPb1ypyMDE".to_string())
        );
    }

    #[test]
    fn test_id_length_is_strict() {
        assert_eq!(id("https://youtu.be/short"), None);
        assert_eq!(id("https://youtu.be/abcdefghijkl"), None);
        assert_eq!(id("https://www.youtube.com/watch?v=abcdefghijkl"), None);
        assert_eq!(id("https://www.youtube.com/watch?v=abc!efghijk"), None);
    }

    #[test]
    fn test_loose_form_needs_whole_param_name() {
        assert_eq!(id("https://www.youtube.com/watch?v=dQw4w9WgXcQ12&xv=abcdefghijk"), None);
        assert_eq!(
            id("https://www.youtube.com/watch?xv=1&v=igPb1ypyMDE"),
            Some("igPb1ypyMDE".to_string())
        );
    }

    #[test]
    fn test_other_hosts() {
        assert_eq!(id("https://vimeo.com/123456"), None);
        assert_eq!(id("https://example.com/watch?v=dQw4w9WgXcQ"), None);
        assert_eq!(id(""), None);
    }

    #[test]
    fn test_url_templates() {
        let provider = YouTubeProvider::new();
        assert_eq!(
            provider.embed_url("iOg9nU_pXhs"),
            "https://www.youtube.com/embed/iOg9nU_pXhs?autoplay=1&rel=0&modestbranding=1"
        );
        assert_eq!(
            provider.thumbnail_url("iOg9nU_pXhs"),
            "https://img.youtube.com/vi/iOg9nU_pXhs/maxresdefault.jpg"
        );
    }
}
