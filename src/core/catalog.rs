use crate::core::{resolve, VideoPlayer, VideoProvider};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use tracing::warn;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("portfolio entry {0} has an empty slug")]
    EmptySlug(usize),
    #[error("duplicate portfolio slug {0:?}")]
    DuplicateSlug(String),
    #[error("thumbnail override for {slug:?} is not a URL or site path: {url}")]
    InvalidThumbnail { slug: String, url: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub category: Option<String>,
    pub video_url: String,
    #[serde(default)]
    pub thumbnail_override: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl PortfolioEntry {
    pub fn detail_path(&self) -> String {
        format!("/portfolio/{}", urlencoding::encode(&self.slug))
    }

    /// Player for the entry's detail page.
    pub fn player(&self) -> VideoPlayer {
        let player = VideoPlayer::new(&self.video_url, self.title.clone());
        match &self.thumbnail_override {
            Some(url) => player.with_thumbnail_override(url.clone()),
            None => player,
        }
    }

    pub fn card(&self) -> PortfolioCard<'_> {
        let video = resolve(&self.video_url);
        let thumbnail_url = self
            .thumbnail_override
            .clone()
            .filter(|url| !url.trim().is_empty())
            .or_else(|| video.as_ref().map(|v| v.thumbnail_url.clone()));

        PortfolioCard {
            entry: self,
            provider: video.map(|v| v.provider),
            thumbnail_url,
        }
    }
}

/// Listing tile. Without a thumbnail the host shows the title text instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioCard<'a> {
    pub entry: &'a PortfolioEntry,
    /// Badge, only present when the video resolves.
    pub provider: Option<VideoProvider>,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub entries: Vec<PortfolioEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<PortfolioEntry>) -> Self {
        Self { entries }
    }

    pub fn find(&self, slug: &str) -> Option<&PortfolioEntry> {
        self.entries.iter().find(|entry| entry.slug == slug)
    }

    /// Previous and next entries in listing order.
    pub fn neighbors(&self, slug: &str) -> (Option<&PortfolioEntry>, Option<&PortfolioEntry>) {
        let Some(index) = self.entries.iter().position(|entry| entry.slug == slug) else {
            return (None, None);
        };

        let prev = index.checked_sub(1).and_then(|i| self.entries.get(i));
        (prev, self.entries.get(index + 1))
    }

    pub fn cards(&self) -> Vec<PortfolioCard<'_>> {
        self.entries.iter().map(PortfolioEntry::card).collect()
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();

        for (index, entry) in self.entries.iter().enumerate() {
            if entry.slug.trim().is_empty() {
                return Err(CatalogError::EmptySlug(index));
            }
            if !seen.insert(entry.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(entry.slug.clone()));
            }
            if let Some(url) = &entry.thumbnail_override {
                if !is_thumbnail_reference(url) {
                    return Err(CatalogError::InvalidThumbnail {
                        slug: entry.slug.clone(),
                        url: url.clone(),
                    });
                }
            }
            if resolve(&entry.video_url).is_none() {
                warn!("Portfolio entry {:?} has an unsupported video URL {:?}", entry.slug, entry.video_url);
            }
        }

        Ok(())
    }
}

/// Blank (treated as absent), site-root relative, or an absolute URL.
fn is_thumbnail_reference(url: &str) -> bool {
    let url = url.trim();
    url.is_empty() || (url.starts_with('/') && !url.starts_with("//")) || Url::parse(url).is_ok()
}

impl Default for Catalog {
    fn default() -> Self {
        let entry = |slug: &str, title: &str, subtitle: &str, video_url: &str, description: &str| {
            PortfolioEntry {
                slug: slug.to_string(),
                title: title.to_string(),
                subtitle: subtitle.to_string(),
                category: None,
                video_url: video_url.to_string(),
                thumbnail_override: None,
                description: description.to_string(),
            }
        };

        Self::new(vec![
            entry(
                "prototype-concept-video",
                "PROTOTYPE CONCEPT VIDEO",
                "AI Animation",
                "https://www.youtube.com/watch?v=iOg9nU_pXhs",
                "Concept video showcasing AI-generated animation.",
            ),
            entry(
                "resin-drive-short-film",
                "RESIN DRIVE SHORT FILM",
                "AI Short Film",
                "https://vimeo.com/1092377931?fl=pl&fe=sh",
                "Atmospheric short film about isolation and technology.",
            ),
            entry(
                "voices",
                "VOICES",
                "AI Short Film",
                "https://vimeo.com/1039905268?fl=pl&fe=sh",
                "Short film on human connection in the digital age.",
            ),
            entry(
                "baek-ayeon-my-universe",
                "백아연 'My Universe' (Official MV)",
                "AI Music Video",
                "https://www.youtube.com/watch?v=igPb1ypyMDE&list=RDigPb1ypyMDE&start_radio=1",
                "Official music video with AI-generated visuals.",
            ),
        ])
    }
}
