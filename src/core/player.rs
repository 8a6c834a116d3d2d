use crate::core::{resolve, ThumbnailLoader, VideoInfo, VideoProvider};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Facade,
    Embedded,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    Play,
    ThumbnailLoaded,
    ThumbnailFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacadeThumbnail<'a> {
    Image { src: &'a str, alt: &'a str },
    Fallback { text: &'a str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation<'a> {
    Invalid,
    Facade {
        thumbnail: FacadeThumbnail<'a>,
        provider: VideoProvider,
        play_label: String,
    },
    Embedded {
        embed_url: &'a str,
        title: &'a str,
    },
}

#[derive(Debug, Clone)]
pub struct VideoPlayer {
    video: Option<VideoInfo>,
    title: String,
    thumbnail_override: Option<String>,
    loaded: bool,
    thumbnail_failed: bool,
}

impl VideoPlayer {
    pub fn new(url: &str, title: impl Into<String>) -> Self {
        let video = resolve(url);
        if video.is_none() {
            warn!("Cannot display video for {:?}", url);
        }

        Self {
            video,
            title: title.into(),
            thumbnail_override: None,
            loaded: false,
            thumbnail_failed: false,
        }
    }

    /// Shows `url` instead of the provider thumbnail. Blank overrides are ignored.
    pub fn with_thumbnail_override(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        if !url.trim().is_empty() {
            self.thumbnail_override = Some(url);
        }
        self
    }

    pub fn video(&self) -> Option<&VideoInfo> {
        self.video.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn state(&self) -> PlayerState {
        match (&self.video, self.loaded) {
            (None, _) => PlayerState::Invalid,
            (Some(_), false) => PlayerState::Facade,
            (Some(_), true) => PlayerState::Embedded,
        }
    }

    pub fn is_thumbnail_failed(&self) -> bool {
        self.thumbnail_failed
    }

    pub fn display_thumbnail(&self) -> Option<&str> {
        let video = self.video.as_ref()?;
        Some(
            self.thumbnail_override
                .as_deref()
                .unwrap_or(&video.thumbnail_url),
        )
    }

    pub fn handle(&mut self, event: PlayerEvent) {
        if self.video.is_none() {
            debug!("Ignoring {:?} on invalid video {:?}", event, self.title);
            return;
        }

        match event {
            PlayerEvent::Play => {
                if !self.loaded {
                    debug!("Embedding {:?}", self.title);
                    self.loaded = true;
                }
            }
            PlayerEvent::ThumbnailFailed => self.thumbnail_failed = true,
            PlayerEvent::ThumbnailLoaded => {}
        }
    }

    /// Returns true if this call swapped the facade for the embed.
    pub fn play(&mut self) -> bool {
        let before = self.state();
        self.handle(PlayerEvent::Play);
        before == PlayerState::Facade && self.state() == PlayerState::Embedded
    }

    pub fn thumbnail_failed(&mut self) {
        self.handle(PlayerEvent::ThumbnailFailed);
    }

    pub async fn observe_thumbnail(&mut self, loader: &dyn ThumbnailLoader) {
        if self.state() != PlayerState::Facade {
            return;
        }
        let Some(src) = self.display_thumbnail().map(str::to_string) else {
            return;
        };

        match loader.load(&src).await {
            Ok(()) => self.handle(PlayerEvent::ThumbnailLoaded),
            Err(e) => {
                warn!("Thumbnail for {:?} unavailable, using title: {}", self.title, e);
                self.handle(PlayerEvent::ThumbnailFailed);
            }
        }
    }

    pub fn presentation(&self) -> Presentation<'_> {
        let Some(video) = &self.video else {
            return Presentation::Invalid;
        };

        if self.loaded {
            return Presentation::Embedded {
                embed_url: &video.embed_url,
                title: &self.title,
            };
        }

        let thumbnail = if self.thumbnail_failed {
            FacadeThumbnail::Fallback { text: &self.title }
        } else {
            FacadeThumbnail::Image {
                src: self
                    .thumbnail_override
                    .as_deref()
                    .unwrap_or(&video.thumbnail_url),
                alt: &self.title,
            }
        };

        Presentation::Facade {
            thumbnail,
            provider: video.provider,
            play_label: format!("Play {}", self.title),
        }
    }
}
