use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoProvider {
    YouTube,
    Vimeo,
    Unknown,
}

impl VideoProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoProvider::YouTube => "youtube",
            VideoProvider::Vimeo => "vimeo",
            VideoProvider::Unknown => "unknown",
        }
    }

    /// Glyph shown next to the provider badge.
    pub fn icon(&self) -> &'static str {
        match self {
            VideoProvider::Vimeo => "▷",
            VideoProvider::YouTube | VideoProvider::Unknown => "▶",
        }
    }
}

impl fmt::Display for VideoProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Only built from a successful match; the URLs derive from `provider` and `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub provider: VideoProvider,
    pub id: String,
    pub embed_url: String,
    pub thumbnail_url: String,
}
