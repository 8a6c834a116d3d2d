use crate::core::{VideoInfo, VideoProvider};
use crate::providers::{VimeoProvider, YouTubeProvider};
use std::sync::LazyLock;
use tracing::{debug, warn};

/// A video hosting platform the resolver knows how to recognise.
pub trait Provider: Send + Sync {
    fn name(&self) -> &'static str;
    fn kind(&self) -> VideoProvider;
    /// Returns the platform-native id if `url` has one of this platform's shapes.
    fn extract_id(&self, url: &str) -> Option<String>;
    fn embed_url(&self, id: &str) -> String;
    fn thumbnail_url(&self, id: &str) -> String;
}

/// Ordered set of providers; the first one to recognise a URL wins.
pub struct Resolver {
    pub providers: Vec<Box<dyn Provider>>,
}

static DEFAULT_RESOLVER: LazyLock<Resolver> = LazyLock::new(Resolver::new);

/// Resolves `url` with the built-in YouTube and Vimeo providers.
///
/// Returns `None` for anything unrecognised, including malformed input.
pub fn resolve(url: &str) -> Option<VideoInfo> {
    DEFAULT_RESOLVER.resolve(url)
}

impl Resolver {
    pub fn empty() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    pub fn new() -> Self {
        let mut resolver = Self::empty();
        resolver.register_provider(Box::new(YouTubeProvider::new()));
        resolver.register_provider(Box::new(VimeoProvider::new()));
        resolver
    }

    pub fn register_provider(&mut self, provider: Box<dyn Provider>) {
        if provider.kind() == VideoProvider::Unknown {
            warn!("Ignoring provider {} with unknown kind", provider.name());
            return;
        }
        self.providers.push(provider);
    }

    pub fn resolve(&self, url: &str) -> Option<VideoInfo> {
        for provider in &self.providers {
            if let Some(id) = provider.extract_id(url) {
                debug!("{} matched {:?} with id {}", provider.name(), url, id);
                return Some(VideoInfo {
                    provider: provider.kind(),
                    embed_url: provider.embed_url(&id),
                    thumbnail_url: provider.thumbnail_url(&id),
                    id,
                });
            }
        }

        debug!("No provider recognised {:?}", url);
        None
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}
